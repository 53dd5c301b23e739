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

//! # Counted Cursor
//!
//! `CountedCursor<I>` walks a base cursor while counting down the steps left
//! to a fixed length; [`CountSentinel`] ends the sequence when the count
//! reaches zero. Because the sentinel knows that count, it is a
//! `SizedSentinel`, and algorithms choose their counted strategies
//! (bisection) even for forward-only bases.
//!
//! ```rust
//! # use strider_core::{cursor::SliceCursor, iter::walk};
//! # use strider_iter::counted::counted;
//! let data = [1, 2, 3, 4, 5];
//! let (first, last) = counted(SliceCursor::begin(&data), 3);
//! assert_eq!(walk(first, last).copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use std::cmp::Ordering;
use strider_core::cursor::{
    BidirectionalCursor, ContiguousCursor, ForwardCursor, InputCursor, IterMove, Permutable, RandomAccessCursor,
    Readable, Sentinel, SizedSentinel, WeakInputCursor,
};

/// A cursor paired with the number of steps left before the end.
#[derive(Debug, Clone)]
pub struct CountedCursor<I>
where
    I: WeakInputCursor,
{
    base: I,
    remaining: I::Distance,
}

impl<I> CountedCursor<I>
where
    I: WeakInputCursor,
{
    /// Wraps `base`, allowing `n` steps.
    ///
    /// # Panics
    ///
    /// Panics if `n` is negative.
    #[inline]
    pub fn new(base: I, n: I::Distance) -> Self {
        assert!(
            n >= num_traits::zero(),
            "a counted cursor needs a non-negative count, got {}",
            n
        );
        Self { base, remaining: n }
    }

    /// Steps left before the end.
    #[inline]
    pub fn count(&self) -> I::Distance {
        self.remaining
    }

    /// The wrapped cursor.
    #[inline]
    pub fn base(&self) -> &I {
        &self.base
    }

    /// Releases the wrapped cursor.
    #[inline]
    pub fn into_base(self) -> I {
        self.base
    }
}

impl<I: WeakInputCursor> PartialEq for CountedCursor<I> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.remaining == other.remaining
    }
}

impl<I: WeakInputCursor> PartialOrd for CountedCursor<I> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(other.remaining.cmp(&self.remaining))
    }
}

impl<I: WeakInputCursor> Readable for CountedCursor<I> {
    type Value = I::Value;
    type Item = I::Item;

    #[inline]
    fn read(&self) -> I::Item {
        self.base.read()
    }
}

impl<I: WeakInputCursor> WeakInputCursor for CountedCursor<I> {
    type Distance = I::Distance;
    type Category = I::Category;

    #[inline]
    fn step(&mut self) {
        debug_assert!(
            self.remaining > num_traits::zero(),
            "stepped past the end of a counted sequence"
        );
        self.base.step();
        self.remaining = self.remaining - num_traits::one();
    }

    #[inline]
    fn advance(&mut self, n: I::Distance) {
        debug_assert!(n <= self.remaining, "advanced past the end of a counted sequence");
        self.base.advance(n);
        self.remaining = self.remaining - n;
    }
}

impl<I: InputCursor> InputCursor for CountedCursor<I> {}

impl<I: ForwardCursor> ForwardCursor for CountedCursor<I> {}

impl<I: BidirectionalCursor> BidirectionalCursor for CountedCursor<I> {
    #[inline]
    fn step_back(&mut self) {
        self.base.step_back();
        self.remaining = self.remaining + num_traits::one();
    }
}

impl<I: RandomAccessCursor> RandomAccessCursor for CountedCursor<I> {
    #[inline]
    fn jump(&mut self, n: I::Distance) {
        debug_assert!(n <= self.remaining, "jumped past the end of a counted sequence");
        self.base.jump(n);
        self.remaining = self.remaining - n;
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> I::Distance {
        origin.remaining - self.remaining
    }
}

impl<I: ContiguousCursor> ContiguousCursor for CountedCursor<I> {
    type Element = I::Element;

    #[inline]
    fn as_ptr(&self) -> *const I::Element {
        self.base.as_ptr()
    }
}

impl<I: IterMove> IterMove for CountedCursor<I> {
    type Moved = I::Moved;

    #[inline]
    fn iter_move(&self) -> I::Moved {
        self.base.iter_move()
    }
}

impl<I: Permutable> Permutable for CountedCursor<I> {
    #[inline]
    fn iter_swap(&self, other: &Self) {
        self.base.iter_swap(&other.base);
    }
}

/// The sentinel ending a [`CountedCursor`] when its count reaches zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CountSentinel;

impl<I: WeakInputCursor> Sentinel<CountedCursor<I>> for CountSentinel {
    #[inline]
    fn is_end(&self, cursor: &CountedCursor<I>) -> bool {
        cursor.remaining == num_traits::zero()
    }

    #[inline(always)]
    fn measure(&self, first: &CountedCursor<I>) -> Option<I::Distance> {
        Some(self.distance_from(first))
    }
}

impl<I: WeakInputCursor> SizedSentinel<CountedCursor<I>> for CountSentinel {
    #[inline]
    fn distance_from(&self, first: &CountedCursor<I>) -> I::Distance {
        first.remaining
    }
}

/// Bounds `base` to `n` steps.
#[inline]
pub fn counted<I: WeakInputCursor>(base: I, n: I::Distance) -> (CountedCursor<I>, CountSentinel) {
    (CountedCursor::new(base, n), CountSentinel)
}
