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

//! # Move Cursor
//!
//! `MoveCursor<I>` reads by extracting the element from the underlying
//! sequence (`IterMove`) instead of borrowing it. Everything else (stepping,
//! jumping, comparison) is forwarded to the wrapped cursor, so a move cursor
//! is as capable as its base, except that it is never contiguous: it hands
//! out values, not addresses.
//!
//! Over exclusively borrowed storage (`SliceMutCursor`) reading moves the
//! value out and leaves `T::default()` behind; over shared storage
//! (`SliceCursor`) reading clones.
//!
//! ```rust
//! # use strider_core::{cursor::SliceMutCursor, iter::walk};
//! # use strider_iter::move_cursor::{make_move_cursor, make_move_sentinel};
//! let mut words = vec![String::from("a"), String::from("b")];
//! // SAFETY: the move cursors never hand out references.
//! let (first, last) = unsafe { SliceMutCursor::bounds(&mut words) };
//! let moved: Vec<String> = walk(make_move_cursor(first), make_move_sentinel(last)).collect();
//! assert_eq!(moved, ["a", "b"]);
//! assert!(words.iter().all(String::is_empty));
//! ```

use strider_core::cursor::{
    BidirectionalCursor, Category, ForwardCursor, InputCursor, IterMove, Permutable, RandomAccessCursor,
    Readable, Sentinel, SizedSentinel, WeakInputCursor,
};

/// A cursor whose reads move the designated element out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoveCursor<I> {
    base: I,
}

impl<I> MoveCursor<I> {
    /// Wraps `base`.
    #[inline]
    pub const fn new(base: I) -> Self {
        Self { base }
    }

    /// The wrapped cursor.
    #[inline]
    pub const fn base(&self) -> &I {
        &self.base
    }

    /// Releases the wrapped cursor.
    #[inline]
    pub fn into_base(self) -> I {
        self.base
    }
}

impl<I: IterMove> Readable for MoveCursor<I> {
    type Value = I::Moved;
    type Item = I::Moved;

    #[inline]
    fn read(&self) -> I::Moved {
        self.base.iter_move()
    }
}

impl<I: IterMove> WeakInputCursor for MoveCursor<I> {
    type Distance = I::Distance;
    type Category = <I::Category as Category>::UpToRandomAccess;

    #[inline]
    fn step(&mut self) {
        self.base.step();
    }

    #[inline]
    fn advance(&mut self, n: I::Distance) {
        self.base.advance(n);
    }
}

impl<I: IterMove + InputCursor> InputCursor for MoveCursor<I> {}

impl<I: IterMove + ForwardCursor> ForwardCursor for MoveCursor<I> {}

impl<I: IterMove + BidirectionalCursor> BidirectionalCursor for MoveCursor<I> {
    #[inline]
    fn step_back(&mut self) {
        self.base.step_back();
    }
}

impl<I: IterMove + RandomAccessCursor> RandomAccessCursor for MoveCursor<I> {
    #[inline]
    fn jump(&mut self, n: I::Distance) {
        self.base.jump(n);
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> I::Distance {
        self.base.offset_from(&origin.base)
    }
}

impl<I: IterMove> IterMove for MoveCursor<I> {
    type Moved = I::Moved;

    #[inline]
    fn iter_move(&self) -> I::Moved {
        self.base.iter_move()
    }
}

impl<I: IterMove + Permutable> Permutable for MoveCursor<I> {
    #[inline]
    fn iter_swap(&self, other: &Self) {
        self.base.iter_swap(&other.base);
    }
}

impl<I> Sentinel<MoveCursor<I>> for MoveCursor<I>
where
    I: IterMove + Sentinel<I>,
{
    #[inline]
    fn is_end(&self, cursor: &MoveCursor<I>) -> bool {
        self.base.is_end(&cursor.base)
    }

    #[inline(always)]
    fn measure(&self, first: &MoveCursor<I>) -> Option<I::Distance> {
        self.base.measure(&first.base)
    }
}

impl<I> SizedSentinel<MoveCursor<I>> for MoveCursor<I>
where
    I: IterMove + SizedSentinel<I>,
{
    #[inline]
    fn distance_from(&self, first: &MoveCursor<I>) -> I::Distance {
        self.base.distance_from(&first.base)
    }
}

/// Sentinel adaptor pairing a base sentinel with [`MoveCursor`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveSentinel<S> {
    base: S,
}

impl<S> MoveSentinel<S> {
    /// Wraps `base`.
    #[inline]
    pub const fn new(base: S) -> Self {
        Self { base }
    }

    /// The wrapped sentinel.
    #[inline]
    pub const fn base(&self) -> &S {
        &self.base
    }
}

impl<I, S> Sentinel<MoveCursor<I>> for MoveSentinel<S>
where
    I: IterMove,
    S: Sentinel<I>,
{
    #[inline]
    fn is_end(&self, cursor: &MoveCursor<I>) -> bool {
        self.base.is_end(&cursor.base)
    }

    #[inline(always)]
    fn measure(&self, first: &MoveCursor<I>) -> Option<I::Distance> {
        self.base.measure(&first.base)
    }
}

impl<I, S> SizedSentinel<MoveCursor<I>> for MoveSentinel<S>
where
    I: IterMove,
    S: SizedSentinel<I>,
{
    #[inline]
    fn distance_from(&self, first: &MoveCursor<I>) -> I::Distance {
        self.base.distance_from(&first.base)
    }
}

/// Wraps `base` in a [`MoveCursor`].
#[inline]
pub const fn make_move_cursor<I>(base: I) -> MoveCursor<I> {
    MoveCursor::new(base)
}

/// Wraps `base` in a [`MoveSentinel`].
#[inline]
pub const fn make_move_sentinel<S>(base: S) -> MoveSentinel<S> {
    MoveSentinel::new(base)
}
