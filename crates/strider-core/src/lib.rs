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

//! # Strider Core
//!
//! Foundational vocabulary for capability-constrained sequence algorithms.
//! Every algorithm in the Strider workspace states exactly what it needs from
//! the positions it walks; this crate defines those needs and the callables
//! algorithms are parameterised with.
//!
//! ## Modules
//!
//! - `cursor`: capability tiers (`Readable` through `ContiguousCursor`),
//!   category tags for static strategy selection, sentinels, cursor
//!   operations and slice cursors.
//! - `callable`: projections, predicates and relations, the zero-sized
//!   defaults (`Identity`, `Less`, `EqualTo`, ...) and the owning/borrowing
//!   adapters `Wrapper` and `RefWrapper`.
//! - `range`: the range protocol (`IntoRange`, `SizedRange`,
//!   `PermutableRange`), the `Range` view and `Dangling` positions.
//! - `iter`: `Walk`, bridging cursor/sentinel pairs into `Iterator`.
//! - `num`: the `Distance` trait alias for signed cursor distances.
//! - `instrument` (feature `instrument`): counting and logging adapters for
//!   callables.
//!
//! ## Purpose
//!
//! Capability mismatches surface as trait-bound errors at compile time, and
//! strategy choices (bisection vs. linear scan, forward vs. bidirectional
//! partition) are fixed per monomorphised instance with no runtime cost.

pub mod callable;
pub mod cursor;
#[cfg(feature = "instrument")]
pub mod instrument;
pub mod iter;
pub mod num;
pub mod range;
