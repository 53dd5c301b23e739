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

//! # Strider Iter
//!
//! Cursor adaptors and views built on the `strider-core` capability tiers.
//!
//! ## Modules
//!
//! - `move_cursor`: `MoveCursor`/`MoveSentinel`, reading moves the element
//!   out of the underlying sequence.
//! - `stream`: `ByteStreamCursor`, a single-pass cursor over a `BufRead`
//!   source, ended by `EndOfStream`. I/O failures are kept as
//!   `StreamError`.
//! - `counted`: `CountedCursor`/`CountSentinel`, limiting any cursor to a
//!   number of steps with a sized sentinel.
//! - `iota`: `Iota`, an unbounded random-access sequence of integers.
//! - `repeat_n`: `RepeatN`, a sized view repeating one value.
//! - `forward_only`: `ForwardOnly`, hiding every capability above the
//!   forward tier.
//!
//! Every adaptor declares its tiers explicitly and conditionally on the
//! tiers of what it wraps.

pub mod counted;
pub mod error;
pub mod forward_only;
pub mod iota;
pub mod move_cursor;
pub mod repeat_n;
pub mod stream;
