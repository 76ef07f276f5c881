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

//! # Subarray-Sum Counting
//!
//! Counts contiguous, non-empty subarrays summing to a target value in a
//! single left-to-right pass. A frequency map from cumulative sum to the
//! number of prefix positions that produced it turns the quadratic
//! "all pairs of cuts" formulation into O(n): a subarray `(i, j]` sums to
//! the target exactly when `cum[j] - cum[i]` equals it, so at position `j`
//! every earlier prefix with cumulative sum `cum[j] - target` contributes
//! one subarray.
//!
//! Negative elements are fully supported; the map accumulates repeated
//! cumulative sums, which is also what makes a zero target work across
//! runs of zero-valued elements.

use num_traits::PrimInt;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Counts the contiguous non-empty subarrays of `values` whose elements
/// sum exactly to `target`.
///
/// Runs in O(n) time with O(n) auxiliary space. Overlapping subarrays are
/// each counted; an empty input yields 0. The target may be negative or
/// zero.
///
/// # Examples
///
/// ```rust
/// # use tally_prefix::count::count_subarrays_with_sum;
///
/// assert_eq!(count_subarrays_with_sum(&[1, 1, 1], 2), 2);
/// assert_eq!(count_subarrays_with_sum(&[1, -1, 1, -1], 0), 4);
/// assert_eq!(count_subarrays_with_sum::<i32>(&[], 7), 0);
/// ```
pub fn count_subarrays_with_sum<T>(values: &[T], target: T) -> u64
where
    T: PrimInt + Hash,
{
    // Seed with the empty prefix so subarrays starting at index 0 count.
    let mut seen: FxHashMap<T, u64> = FxHashMap::default();
    seen.insert(T::zero(), 1);

    let mut running = T::zero();
    let mut count = 0u64;

    for &value in values {
        running = running + value;
        if let Some(&occurrences) = seen.get(&(running - target)) {
            count += occurrences;
        }
        *seen.entry(running).or_insert(0) += 1;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Quadratic oracle: sums every subarray literally.
    fn count_brute_force(values: &[i64], target: i64) -> u64 {
        let mut count = 0;
        for lo in 0..values.len() {
            for hi in lo..values.len() {
                let sum: i64 = values[lo..=hi].iter().sum();
                if sum == target {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_overlapping_subarrays() {
        // [1, 1] at indices 0..=1 and 1..=2.
        assert_eq!(count_subarrays_with_sum(&[1, 1, 1], 2), 2);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(count_subarrays_with_sum::<i64>(&[], 0), 0);
        assert_eq!(count_subarrays_with_sum::<i64>(&[], 7), 0);
        assert_eq!(count_subarrays_with_sum::<i64>(&[], -3), 0);
    }

    #[test]
    fn test_walkthrough_input() {
        let values = [3, 4, 5, 2, 1, 6, 7];
        assert_eq!(
            count_subarrays_with_sum(&values, 7),
            count_brute_force(&values, 7)
        );
    }

    #[test]
    fn test_zero_target_with_zero_runs() {
        // Every subarray of an all-zero sequence sums to zero: n*(n+1)/2.
        assert_eq!(count_subarrays_with_sum(&[0, 0, 0], 0), 6);
        assert_eq!(count_subarrays_with_sum(&[0; 5], 0), 15);
    }

    #[test]
    fn test_negative_elements() {
        assert_eq!(count_subarrays_with_sum(&[1, -1, 1, -1], 0), 4);
        assert_eq!(count_subarrays_with_sum(&[-3, 1, 2, -3], -3), 3);
    }

    #[test]
    fn test_whole_sequence_match() {
        assert_eq!(count_subarrays_with_sum(&[2, 3, 5], 10), 1);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(count_subarrays_with_sum(&[2, 4, 6], 5), 0);
    }

    #[test]
    fn test_differential_against_brute_force() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..500 {
            let len = rng.random_range(0..=12);
            let values: Vec<i64> = (0..len).map(|_| rng.random_range(-5..=5)).collect();
            let target = rng.random_range(-4..=4);

            assert_eq!(
                count_subarrays_with_sum(&values, target),
                count_brute_force(&values, target),
                "mismatch for values {:?} and target {}",
                values,
                target
            );
        }
    }
}
