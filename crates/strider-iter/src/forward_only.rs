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

//! # Forward-Only Adaptor
//!
//! `ForwardOnly<C>` presents any multi-pass cursor as a plain forward cursor:
//! its category is `Forward`, it implements no tier above `ForwardCursor`,
//! and wrapping a sentinel in it hides the sentinel's constant-time
//! measurement. Algorithms therefore fall back to their forward strategies,
//! which makes the adaptor the natural way to exercise them.

use strider_core::cursor::{
    Forward, ForwardCursor, InputCursor, IterMove, Permutable, Readable, Sentinel,
    WeakInputCursor,
};

/// A cursor or sentinel restricted to the forward tier.
///
/// Only multi-pass cursors can be wrapped; a single-pass cursor would be
/// advertised as `Forward` without being one.
///
/// ```rust,compile_fail
/// # use std::io::Cursor;
/// # use strider_core::cursor::WeakInputCursor;
/// # use strider_iter::{forward_only::ForwardOnly, stream::ByteStreamCursor};
/// fn step_it<I: WeakInputCursor>(mut cursor: I) {
///     cursor.step();
/// }
/// step_it(ForwardOnly::new(ByteStreamCursor::new(Cursor::new(vec![1u8]))));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ForwardOnly<C> {
    inner: C,
}

impl<C> ForwardOnly<C> {
    /// Wraps `inner`.
    #[inline]
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped cursor or sentinel.
    #[inline]
    pub const fn get(&self) -> &C {
        &self.inner
    }

    /// Releases the wrapped cursor or sentinel.
    #[inline]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Readable> Readable for ForwardOnly<C> {
    type Value = C::Value;
    type Item = C::Item;

    #[inline]
    fn read(&self) -> C::Item {
        self.inner.read()
    }
}

impl<C: ForwardCursor> WeakInputCursor for ForwardOnly<C> {
    type Distance = C::Distance;
    type Category = Forward;

    #[inline]
    fn step(&mut self) {
        self.inner.step();
    }
}

impl<C: ForwardCursor> InputCursor for ForwardOnly<C> {}

impl<C: ForwardCursor> ForwardCursor for ForwardOnly<C> {}

impl<C: IterMove + ForwardCursor> IterMove for ForwardOnly<C> {
    type Moved = C::Moved;

    #[inline]
    fn iter_move(&self) -> C::Moved {
        self.inner.iter_move()
    }
}

impl<C: Permutable> Permutable for ForwardOnly<C> {
    #[inline]
    fn iter_swap(&self, other: &Self) {
        self.inner.iter_swap(&other.inner);
    }
}

impl<I, S> Sentinel<ForwardOnly<I>> for ForwardOnly<S>
where
    I: ForwardCursor,
    S: Sentinel<I>,
{
    #[inline]
    fn is_end(&self, cursor: &ForwardOnly<I>) -> bool {
        self.inner.is_end(&cursor.inner)
    }

    #[inline]
    fn measure(&self, _first: &ForwardOnly<I>) -> Option<I::Distance> {
        None
    }
}

/// Restricts a cursor/sentinel pair to the forward tier.
#[inline]
pub fn forward_only<I, S>(first: I, last: S) -> (ForwardOnly<I>, ForwardOnly<S>)
where
    I: ForwardCursor,
    S: Sentinel<I>,
{
    (ForwardOnly::new(first), ForwardOnly::new(last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_core::cursor::{Category, SliceCursor, ops::distance};

    fn category_of<I: WeakInputCursor>(_: &I) -> &'static str {
        <I::Category as Category>::NAME
    }

    #[test]
    fn test_forward_only_hides_measure_and_category() {
        let data = [1, 2, 3];
        let (first, last) = forward_only(SliceCursor::begin(&data), SliceCursor::end(&data));
        assert_eq!(last.measure(&first), None);
        assert_eq!(category_of(&first), "Forward");
        assert_eq!(distance(first, &last), 3);
    }

    #[test]
    fn test_forward_only_steps_with_loop() {
        let data = [1, 2, 3, 4];
        let mut cursor = ForwardOnly::new(SliceCursor::begin(&data));
        cursor.advance(3);
        assert_eq!(*cursor.read(), 4);
        assert_eq!(cursor.get().position(), 3);
    }

    #[test]
    fn test_forward_only_declares_forward_over_stronger_bases() {
        let data = [1, 2, 3];
        let contiguous = ForwardOnly::new(SliceCursor::begin(&data));
        assert_eq!(category_of(&contiguous), "Forward");

        let nested = ForwardOnly::new(ForwardOnly::new(SliceCursor::begin(&data)));
        assert_eq!(category_of(&nested), "Forward");
        assert_eq!(*nested.read(), 1);
    }
}
