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

//! # Tally Prefix
//!
//! Range-query engine over integer sequences: a precomputed cumulative-sum
//! table answering inclusive range-sum queries in constant time, and a
//! running-sum frequency counter for subarrays with a given sum.
//!
//! ## Modules
//!
//! - `table`: `PrefixTable<T>`, built once from a sequence and read-only
//!   afterward, with O(1) `sum_range`/`sum_span` queries and a typed
//!   `InvalidRangeError` for out-of-contract bounds.
//! - `count`: `count_subarrays_with_sum`, counting contiguous non-empty
//!   subarrays summing to a target value in a single left-to-right pass.
//!
//! ## Purpose
//!
//! Answering many range-sum questions over a fixed sequence is O(1) per
//! query after an O(n) build; counting matching subarrays is O(n) total.
//! Both support negative elements, which rules out sliding-window
//! shortcuts and motivates the cumulative-sum formulation used here.

pub mod count;
pub mod table;
