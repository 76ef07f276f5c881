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

//! # Tally Core
//!
//! Foundational utilities, numerics, and math primitives for the tally
//! family of array-algorithm crates. This crate consolidates the reusable
//! building blocks that the range-query and scan crates are built on.
//!
//! ## Modules
//!
//! - `math`: Closed integer span `[lo, hi]` primitives with validation,
//!   containment and intersection predicates, measurements, iteration
//!   (`Iterator`, `DoubleEndedIterator`, `ExactSizeIterator`,
//!   `FusedIterator`), and conversions to/from `std::ops::RangeInclusive`.
//! - `num`: By-value arithmetic traits for checked operations returning
//!   `Option<T>`, mirroring the intrinsic methods of the primitive
//!   integer types.
//!
//! ## Purpose
//!
//! These primitives enable robust, generic code over integer sequences,
//! reducing accidental bugs (e.g., inverted bounds, overflow) while
//! keeping runtime overhead minimal.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
