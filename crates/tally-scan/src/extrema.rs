// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::PrimInt;

/// Returns the largest element, or `None` for an empty slice.
///
/// # Examples
///
/// ```rust
/// # use tally_scan::extrema::maximum;
///
/// assert_eq!(maximum(&[3, 1, 4, 1, 5]), Some(5));
/// assert_eq!(maximum(&[7, 7, 7, 7]), Some(7));
/// assert_eq!(maximum::<i32>(&[]), None);
/// ```
#[inline]
pub fn maximum<T>(values: &[T]) -> Option<T>
where
    T: PrimInt,
{
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold(first, |best, value| if value > best { value } else { best }))
}

/// Returns the largest element strictly smaller than the maximum.
///
/// Returns `None` if the slice has fewer than two elements or if all
/// elements are equal (there is no "second" value to report).
///
/// # Examples
///
/// ```rust
/// # use tally_scan::extrema::second_largest;
///
/// assert_eq!(second_largest(&[3, 1, 4, 1, 5]), Some(4));
/// assert_eq!(second_largest(&[7, 7, 7]), None);
/// assert_eq!(second_largest(&[2]), None);
/// ```
pub fn second_largest<T>(values: &[T]) -> Option<T>
where
    T: PrimInt,
{
    let mut best: Option<T> = None;
    let mut runner_up: Option<T> = None;

    for &value in values {
        match best {
            None => best = Some(value),
            Some(current_best) if value > current_best => {
                runner_up = Some(current_best);
                best = Some(value);
            }
            Some(current_best) if value < current_best => {
                if runner_up.is_none_or(|r| value > r) {
                    runner_up = Some(value);
                }
            }
            // Duplicate of the current maximum: not a distinct runner-up.
            Some(_) => {}
        }
    }

    runner_up
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximum() {
        assert_eq!(maximum(&[3, 1, 4, 1, 5]), Some(5));
        assert_eq!(maximum(&[-3, -1, -4]), Some(-1));
        assert_eq!(maximum(&[42]), Some(42));
        assert_eq!(maximum(&[7, 7, 7, 7]), Some(7));
        assert_eq!(maximum::<i64>(&[]), None);
    }

    #[test]
    fn test_maximum_at_either_end() {
        assert_eq!(maximum(&[9, 1, 2]), Some(9));
        assert_eq!(maximum(&[1, 2, 9]), Some(9));
    }

    #[test]
    fn test_second_largest_walkthrough() {
        assert_eq!(second_largest(&[3, 1, 4, 1, 5]), Some(4));
    }

    #[test]
    fn test_second_largest_with_duplicate_maximum() {
        // The runner-up must be strictly smaller than the maximum.
        assert_eq!(second_largest(&[5, 5, 4]), Some(4));
        assert_eq!(second_largest(&[4, 5, 5]), Some(4));
    }

    #[test]
    fn test_second_largest_degenerate() {
        assert_eq!(second_largest::<i32>(&[]), None);
        assert_eq!(second_largest(&[2]), None);
        assert_eq!(second_largest(&[7, 7, 7]), None);
    }

    #[test]
    fn test_second_largest_descending_input() {
        assert_eq!(second_largest(&[9, 8, 7]), Some(8));
    }

    #[test]
    fn test_second_largest_negative() {
        assert_eq!(second_largest(&[-5, -2, -9]), Some(-5));
    }
}
