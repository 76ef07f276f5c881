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
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Finds two distinct indices `(i, j)` with `i < j` whose elements sum to
/// `target`.
///
/// Scans left to right with a value-to-index map of elements seen so far,
/// so each element is paired against its complement in O(1) and the whole
/// search is a single O(n) pass. Returns the first such pair encountered
/// (smallest `j`, and for that `j` the most recent occurrence of the
/// complement). Returns `None` if no pair sums to `target`.
///
/// # Examples
///
/// ```rust
/// # use tally_scan::pairs::two_sum;
///
/// assert_eq!(two_sum(&[1, 2, 3, 4, 5], 7), Some((2, 3)));
/// assert_eq!(two_sum(&[1, 2, 3], 42), None);
/// ```
pub fn two_sum<T>(values: &[T], target: T) -> Option<(usize, usize)>
where
    T: PrimInt + Hash,
{
    let mut seen: FxHashMap<T, usize> = FxHashMap::default();

    for (index, &value) in values.iter().enumerate() {
        let complement = target - value;
        if let Some(&partner) = seen.get(&complement) {
            return Some((partner, index));
        }
        seen.insert(value, index);
    }

    None
}
