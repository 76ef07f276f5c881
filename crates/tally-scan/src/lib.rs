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

//! # Tally Scan
//!
//! Single-pass routines over integer slices. Every function here is a
//! stateless computation over its input: one linear sweep, constant or
//! linear auxiliary memory, no shared state.
//!
//! ## Modules
//!
//! - `extrema`: largest and second-largest element.
//! - `stats`: counting elements against aggregate criteria (above the
//!   mean, negative).
//! - `order`: sortedness check and reversal (in-place and allocating).
//! - `missing`: locating the one absent value of a `[1, n]` range, via
//!   the Gauss sum formula or an XOR fold.
//! - `pairs`: two-sum complement search.
//!
//! ## Purpose
//!
//! These are the building blocks the range-query crate does not cover:
//! order statistics, aggregate counts, and pairwise lookups, each with
//! well-defined results for empty and degenerate inputs.

pub mod extrema;
pub mod missing;
pub mod order;
pub mod pairs;
pub mod stats;
