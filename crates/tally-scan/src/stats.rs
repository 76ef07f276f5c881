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

use num_traits::{PrimInt, Signed};

#[inline(always)]
fn widen<T>(value: T) -> i128
where
    T: PrimInt + Signed,
{
    value
        .to_i128()
        .expect("signed primitive integer fits in i128")
}

/// Counts the elements strictly greater than the arithmetic mean.
///
/// Returns 0 for slices with fewer than two elements (a single element is
/// never above its own mean). The comparison `value > total / n` is done
/// exactly as `value * n > total` in 128-bit arithmetic, so no floating
/// point is involved and no precision is lost.
///
/// # Examples
///
/// ```rust
/// # use tally_scan::stats::count_above_average;
///
/// assert_eq!(count_above_average(&[1, 2, 3, 4, 5]), 2); // mean 3, above: 4 and 5
/// assert_eq!(count_above_average(&[10]), 0);
/// ```
pub fn count_above_average<T>(values: &[T]) -> usize
where
    T: PrimInt + Signed,
{
    if values.len() <= 1 {
        return 0;
    }

    let n = values.len() as i128;
    let total: i128 = values.iter().map(|&value| widen(value)).sum();

    values
        .iter()
        .filter(|&&value| widen(value) * n > total)
        .count()
}

/// Counts the elements strictly less than zero.
///
/// An empty slice yields 0.
///
/// # Examples
///
/// ```rust
/// # use tally_scan::stats::count_negative;
///
/// assert_eq!(count_negative(&[-1, 5, -3, 0, -2]), 3);
/// assert_eq!(count_negative::<i32>(&[]), 0);
/// ```
#[inline]
pub fn count_negative<T>(values: &[T]) -> usize
where
    T: PrimInt + Signed,
{
    values.iter().filter(|&&value| value < T::zero()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_above_average_walkthrough() {
        assert_eq!(count_above_average(&[1, 2, 3, 4, 5]), 2);
    }

    #[test]
    fn test_count_above_average_degenerate() {
        assert_eq!(count_above_average::<i32>(&[]), 0);
        assert_eq!(count_above_average(&[10]), 0);
    }

    #[test]
    fn test_count_above_average_all_equal() {
        // Nothing is strictly above the mean of an all-equal slice.
        assert_eq!(count_above_average(&[4, 4, 4, 4]), 0);
    }

    #[test]
    fn test_count_above_average_non_integer_mean() {
        // Mean is 2.5; strictly above: 3 and 4.
        assert_eq!(count_above_average(&[1, 2, 3, 4]), 2);
    }

    #[test]
    fn test_count_above_average_negative_values() {
        // Mean is -2; strictly above: -1 and 0.
        assert_eq!(count_above_average(&[-1, -5, 0]), 2);
    }

    #[test]
    fn test_count_above_average_extreme_values() {
        // Would overflow a 64-bit cross-multiplication without widening.
        // Mean is -1/3, so both i64::MAX and 0 lie strictly above it.
        assert_eq!(count_above_average(&[i64::MAX, i64::MIN, 0]), 2);
    }

    #[test]
    fn test_count_negative() {
        assert_eq!(count_negative(&[-1, 5, -3, 0, -2]), 3);
        assert_eq!(count_negative(&[1, 2, 3]), 0);
        assert_eq!(count_negative(&[-1, -2]), 2);
        assert_eq!(count_negative::<i64>(&[]), 0);
    }

    #[test]
    fn test_count_negative_zero_is_not_negative() {
        assert_eq!(count_negative(&[0, 0, 0]), 0);
    }
}
