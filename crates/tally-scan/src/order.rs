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

/// Checks whether the slice is sorted in ascending order (duplicates allowed).
///
/// Vacuously true for slices with fewer than two elements.
///
/// # Examples
///
/// ```rust
/// # use tally_scan::order::is_sorted_ascending;
///
/// assert!(is_sorted_ascending(&[1, 2, 2, 3]));
/// assert!(!is_sorted_ascending(&[1, 4, 3]));
/// assert!(is_sorted_ascending::<i32>(&[]));
/// ```
#[inline(always)]
pub fn is_sorted_ascending<T>(values: &[T]) -> bool
where
    T: PrimInt,
{
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Reverses the slice in place with a two-pointer swap from both ends.
///
/// # Examples
///
/// ```rust
/// # use tally_scan::order::reverse_in_place;
///
/// let mut values = [1, 2, 3];
/// reverse_in_place(&mut values);
/// assert_eq!(values, [3, 2, 1]);
/// ```
pub fn reverse_in_place<T>(values: &mut [T]) {
    if values.len() < 2 {
        return;
    }

    let mut left = 0;
    let mut right = values.len() - 1;
    while left < right {
        values.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// Returns a new `Vec` holding the elements in reverse order.
///
/// The input is left untouched.
///
/// # Examples
///
/// ```rust
/// # use tally_scan::order::reversed;
///
/// assert_eq!(reversed(&[1, 2, 3]), vec![3, 2, 1]);
/// assert_eq!(reversed::<i32>(&[]), Vec::<i32>::new());
/// ```
#[inline]
pub fn reversed<T>(values: &[T]) -> Vec<T>
where
    T: Copy,
{
    let mut out = Vec::with_capacity(values.len());
    out.extend(values.iter().rev().copied());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sorted_ascending() {
        assert!(is_sorted_ascending(&[1, 2, 3]));
        assert!(is_sorted_ascending(&[1, 2, 2, 3]));
        assert!(!is_sorted_ascending(&[1, 4, 3]));
        assert!(!is_sorted_ascending(&[3, 2, 1]));
    }

    #[test]
    fn test_is_sorted_ascending_degenerate() {
        assert!(is_sorted_ascending::<i32>(&[]));
        assert!(is_sorted_ascending(&[42]));
        assert!(is_sorted_ascending(&[7, 7]));
    }

    #[test]
    fn test_reverse_in_place() {
        let mut values = [1, 2, 3];
        reverse_in_place(&mut values);
        assert_eq!(values, [3, 2, 1]);

        let mut even = [1, 2, 3, 4];
        reverse_in_place(&mut even);
        assert_eq!(even, [4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_in_place_degenerate() {
        let mut empty: [i32; 0] = [];
        reverse_in_place(&mut empty);
        assert_eq!(empty, []);

        let mut single = [5];
        reverse_in_place(&mut single);
        assert_eq!(single, [5]);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(reversed(&[1, 2, 3]), vec![3, 2, 1]);
        assert_eq!(reversed::<i64>(&[]), Vec::<i64>::new());
    }

    #[test]
    fn test_reversed_leaves_input_untouched() {
        let values = [1, 2, 3];
        let out = reversed(&values);
        assert_eq!(values, [1, 2, 3]);
        assert_eq!(out, vec![3, 2, 1]);
    }

    #[test]
    fn test_reversed_twice_is_identity() {
        let values = [9, -1, 4, 0];
        assert_eq!(reversed(&reversed(&values)), values.to_vec());
    }
}
