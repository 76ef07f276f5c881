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

//! # Missing-Number Detection
//!
//! Given a slice claiming to hold the values `1..=n` with exactly one
//! value absent, both routines recover the absent value in a single pass.
//! The sum variant subtracts the actual total from the Gauss formula
//! `n * (n + 1) / 2`; the XOR variant folds both the expected range and
//! the slice into one accumulator, where every present value cancels
//! itself out. The XOR fold cannot overflow, which makes it the safer
//! choice near the upper end of a type's range.

use num_traits::PrimInt;
use tally_core::math::span::ClosedSpan;
use tally_core::num::ops::checked_arithmetic::{CheckedAddVal, CheckedMulVal};

/// Returns the one value of `1..=n` absent from `values`, via the Gauss
/// sum formula.
///
/// Returns `None` if `values` cannot be `1..=n` minus one element
/// (`values.len() + 1 != n`, or `n` is not a positive count), or if the
/// expected-sum computation would overflow `T`.
///
/// # Examples
///
/// ```rust
/// # use tally_scan::missing::missing_number;
///
/// assert_eq!(missing_number(&[1, 2, 4, 5], 5), Some(3));
/// assert_eq!(missing_number(&[1, 2], 5), None); // wrong length
/// ```
pub fn missing_number<T>(values: &[T], n: T) -> Option<T>
where
    T: PrimInt + CheckedAddVal + CheckedMulVal,
{
    let count = n.to_usize()?;
    if values.len() + 1 != count {
        return None;
    }

    // n * (n + 1) is always even, so the halving below is exact.
    let two = T::one() + T::one();
    let expected = n.checked_mul_val(n.checked_add_val(T::one())?)? / two;

    let mut actual = T::zero();
    for &value in values {
        actual = actual.checked_add_val(value)?;
    }

    Some(expected - actual)
}

/// Returns the one value of `1..=n` absent from `values`, via an XOR fold.
///
/// Same contract as [`missing_number`], but immune to overflow: every
/// value present in both the expected range and the slice cancels itself,
/// leaving only the absent one.
///
/// # Examples
///
/// ```rust
/// # use tally_scan::missing::missing_number_xor;
///
/// assert_eq!(missing_number_xor(&[1, 2, 4, 5], 5), Some(3));
/// ```
pub fn missing_number_xor<T>(values: &[T], n: T) -> Option<T>
where
    T: PrimInt,
{
    let count = n.to_usize()?;
    if values.len() + 1 != count {
        return None;
    }

    // count >= 1 here, so [1, n] is a valid span.
    let mut acc = T::zero();
    for expected in ClosedSpan::new(T::one(), n).iter() {
        acc = acc ^ expected;
    }
    for &value in values {
        acc = acc ^ value;
    }

    Some(acc)
}
