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

//! # Math Primitives
//!
//! Foundational mathematical structures for sequence and range logic.
//! This module currently focuses on closed integer spans, designed to
//! integrate cleanly with Rust's range and iterator ecosystem.
//!
//! ## Submodules
//!
//! - `span`: A generic inclusive `[lo, hi]` span type with validation,
//!   predicates (containment, intersection), measurements, iteration
//!   support (`Iterator`, `DoubleEndedIterator`, `ExactSizeIterator`,
//!   `FusedIterator`), and conversions to/from `std::ops::RangeInclusive`.
//!
//! ## Motivation
//!
//! Range queries over sequences are stated in inclusive index bounds.
//! Carrying both bounds in a validated span keeps the `lo <= hi`
//! invariant out of every call site and composes well with standard
//! ranges and iterators.
//!
//! Refer to the `span` module for detailed APIs and examples.

pub mod span;
