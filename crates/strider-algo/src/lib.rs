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

//! # Strider Algo
//!
//! Sequence algorithms that state exactly which cursor capabilities they
//! need and pick their strategy from what the arguments provide.
//!
//! ## Entry points
//!
//! Every algorithm comes as a family of entry points:
//!
//! - `algo(first, last, ...)`: a cursor and a sentinel. If the sentinel
//!   measures its distance in constant time (`Sentinel::measure`), the
//!   counted strategy is used.
//! - `algo_n(first, n, ...)`: a cursor and a known length (search
//!   algorithms).
//! - `algo_in(range, ...)`: anything implementing `IntoRange`; a range
//!   that measures itself is preferred over its sentinel. Mutating
//!   algorithms take a `PermutableRange` and return the boundary index.
//! - `algo_list([..], ...)`: an owned array literal. Positions come back as
//!   `Dangling` offsets because the array no longer exists after the call.
//!
//! Callables are passed by value: a projection (`Identity` by default), a
//! predicate or relation (`EqualTo` or `Less` by default). When an
//! algorithm delegates to another, it lends its callables by reference, so
//! stateful callables see one continuous sequence of invocations.
//!
//! ## Modules
//!
//! - `find`: `find_if`, `find_if_not`.
//! - `count`: `count`.
//! - `equal`: `equal`.
//! - `partition_point`: `partition_point`, `partition_point_n`.
//! - `bounds`: `lower_bound`, `upper_bound`.
//! - `equal_range`: `equal_range`, `equal_range_n`.
//! - `includes`: `includes`.
//! - `partition`: `partition` and the per-category `PartitionStrategy`.
//! - `remove_if`: `remove_if`.
//!
//! ```rust
//! use strider_algo::equal_range::equal_range_in;
//! use strider_core::callable::{Identity, Less};
//!
//! let data = [1, 2, 2, 2, 3, 5];
//! let found = equal_range_in(&data, &2, Less, Identity);
//! assert_eq!((found.begin().position(), found.end().position()), (1, 4));
//! ```

pub mod bounds;
pub mod count;
pub mod equal;
pub mod equal_range;
pub mod find;
pub mod includes;
pub mod partition;
pub mod partition_point;
pub mod remove_if;
