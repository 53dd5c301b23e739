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

//! # Repeat-N View
//!
//! `RepeatN<T>` owns one value and presents it `count` times as a sized,
//! random-access sequence. Its cursors borrow the value and track only an
//! index.
//!
//! ```rust
//! # use strider_iter::repeat_n::RepeatN;
//! let zeros = RepeatN::new(0, 4);
//! assert_eq!(zeros.len(), 4);
//! assert_eq!(zeros.iter().copied().collect::<Vec<_>>(), vec![0, 0, 0, 0]);
//! ```

use std::cmp::Ordering;
use strider_core::{
    cursor::{
        BidirectionalCursor, ForwardCursor, InputCursor, IterMove, RandomAccess,
        RandomAccessCursor, Readable, Sentinel, SizedSentinel, WeakInputCursor,
    },
    iter::Walk,
    range::{IntoRange, SizedRange},
};

/// A view repeating one value a fixed number of times.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepeatN<T> {
    value: T,
    count: isize,
}

impl<T> RepeatN<T> {
    /// Repeats `value` `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds `isize::MAX`.
    #[inline]
    pub fn new(value: T, count: usize) -> Self {
        let count = match isize::try_from(count) {
            Ok(count) => count,
            Err(_) => panic!("repeat count {} exceeds isize::MAX", count),
        };
        Self { value, count }
    }

    /// Number of repetitions.
    #[inline]
    pub fn len(&self) -> usize {
        self.count as usize
    }

    /// Returns `true` if the view repeats the value zero times.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The repeated value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Begin and end cursors.
    #[inline]
    pub fn bounds(&self) -> (RepeatCursor<'_, T>, RepeatCursor<'_, T>) {
        (
            RepeatCursor {
                value: &self.value,
                pos: 0,
            },
            RepeatCursor {
                value: &self.value,
                pos: self.count,
            },
        )
    }

    /// Iterates over the repetitions.
    #[inline]
    pub fn iter(&self) -> Walk<RepeatCursor<'_, T>, RepeatCursor<'_, T>> {
        let (first, last) = self.bounds();
        Walk::new(first, last)
    }
}

/// A cursor into a [`RepeatN`] view.
pub struct RepeatCursor<'a, T> {
    value: &'a T,
    pos: isize,
}

impl<T> RepeatCursor<'_, T> {
    /// Index of the designated repetition.
    #[inline]
    pub fn position(&self) -> isize {
        self.pos
    }

    #[inline(always)]
    fn debug_assert_same_view(&self, other: &Self) {
        debug_assert!(
            std::ptr::eq(self.value, other.value),
            "cursors belong to different views"
        );
    }
}

impl<T> Clone for RepeatCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RepeatCursor<'_, T> {}

impl<T> std::fmt::Debug for RepeatCursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RepeatCursor({})", self.pos)
    }
}

impl<T> PartialEq for RepeatCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.debug_assert_same_view(other);
        self.pos == other.pos
    }
}

impl<T> PartialOrd for RepeatCursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.debug_assert_same_view(other);
        self.pos.partial_cmp(&other.pos)
    }
}

impl<'a, T> Readable for RepeatCursor<'a, T> {
    type Value = T;
    type Item = &'a T;

    #[inline]
    fn read(&self) -> &'a T {
        self.value
    }
}

impl<T> WeakInputCursor for RepeatCursor<'_, T> {
    type Distance = isize;
    type Category = RandomAccess;

    #[inline]
    fn step(&mut self) {
        self.pos += 1;
    }

    #[inline]
    fn advance(&mut self, n: isize) {
        self.jump(n);
    }
}

impl<T> InputCursor for RepeatCursor<'_, T> {}

impl<T> ForwardCursor for RepeatCursor<'_, T> {}

impl<T> BidirectionalCursor for RepeatCursor<'_, T> {
    #[inline]
    fn step_back(&mut self) {
        self.pos -= 1;
    }
}

impl<T> RandomAccessCursor for RepeatCursor<'_, T> {
    #[inline]
    fn jump(&mut self, n: isize) {
        self.pos += n;
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        self.debug_assert_same_view(origin);
        self.pos - origin.pos
    }
}

impl<T: Clone> IterMove for RepeatCursor<'_, T> {
    type Moved = T;

    #[inline]
    fn iter_move(&self) -> T {
        self.value.clone()
    }
}

impl<T> Sentinel<RepeatCursor<'_, T>> for RepeatCursor<'_, T> {
    #[inline]
    fn is_end(&self, cursor: &RepeatCursor<'_, T>) -> bool {
        self.pos == cursor.pos
    }

    #[inline(always)]
    fn measure(&self, first: &RepeatCursor<'_, T>) -> Option<isize> {
        Some(self.distance_from(first))
    }
}

impl<T> SizedSentinel<RepeatCursor<'_, T>> for RepeatCursor<'_, T> {
    #[inline]
    fn distance_from(&self, first: &RepeatCursor<'_, T>) -> isize {
        self.pos - first.pos
    }
}

impl<'a, T> IntoRange for &'a RepeatN<T> {
    type Cursor = RepeatCursor<'a, T>;
    type Sentinel = RepeatCursor<'a, T>;

    #[inline]
    fn into_bounds(self) -> (Self::Cursor, Self::Sentinel) {
        self.bounds()
    }

    #[inline(always)]
    fn measure(&self) -> Option<isize> {
        Some(self.count)
    }
}

impl<T> SizedRange for &RepeatN<T> {
    #[inline]
    fn size(&self) -> isize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_n_yields_count_copies() {
        let view = RepeatN::new('x', 3);
        assert_eq!(view.iter().collect::<String>(), "xxx");
        assert_eq!(view.iter().size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_repeat_n_empty() {
        let view = RepeatN::new(1u8, 0);
        assert!(view.is_empty());
        assert_eq!(view.iter().count(), 0);
        assert_eq!((&view).size(), 0);
    }

    #[test]
    fn test_repeat_cursor_random_access() {
        let view = RepeatN::new(String::from("ab"), 10);
        let (first, last) = (&view).into_bounds();
        let mut middle = first;
        middle.jump(7);
        assert_eq!(middle.read(), "ab");
        assert_eq!(middle.iter_move(), "ab");
        assert_eq!(last.distance_from(&middle), 3);
        assert_eq!(middle.offset_from(&first), 7);
        assert!(middle < last);
    }
}
