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

//! # Cursors
//!
//! Positions, their capability tiers and the sentinels that end them.
//!
//! - `category`: zero-sized traversal-strength tags.
//! - `tier`: the capability traits (`Readable` up to `ContiguousCursor`),
//!   plus `Permutable` and `IterMove`.
//! - `sentinel`: `Sentinel`, `SizedSentinel` and `Unreachable`.
//! - `ops`: `next`, `advance_bounded`, `distance` and friends.
//! - `slice`: contiguous cursors over shared and exclusive slices.

pub mod category;
pub mod ops;
pub mod sentinel;
pub mod slice;
pub mod tier;

pub use category::{Bidirectional, Category, Contiguous, Forward, RandomAccess, SinglePass};
pub use sentinel::{Sentinel, SizedSentinel, Unreachable};
pub use slice::{SliceCursor, SliceMutCursor};
pub use tier::{
    BidirectionalCursor, ContiguousCursor, ForwardCursor, InputCursor, IterMove, Permutable,
    RandomAccessCursor, Readable, WeakInputCursor,
};
