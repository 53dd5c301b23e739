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

//! # Cursor Walk
//!
//! Bridges a cursor/sentinel pair into a standard `Iterator`, so any
//! sequence the algorithms accept can also feed `for` loops and iterator
//! adaptors.
//!
//! ## Highlights
//!
//! - `size_hint` is exact when the sentinel is sized and `(0, None)`
//!   otherwise.
//! - Fused: once the sentinel reports the end, the cursor no longer moves.
//!
//! ## Usage
//!
//! ```rust
//! use strider_core::{cursor::SliceCursor, iter::walk};
//!
//! let data = [1, 2, 3];
//! let (first, last) = SliceCursor::bounds(&data);
//! let doubled: Vec<i32> = walk(first, last).map(|x| x * 2).collect();
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use crate::{
    cursor::{sentinel::Sentinel, tier::WeakInputCursor},
    num::distance::Distance,
};
use std::iter::FusedIterator;

/// An iterator reading every element between a cursor and a sentinel.
#[derive(Debug, Clone)]
pub struct Walk<I, S> {
    cursor: I,
    last: S,
}

impl<I, S> Walk<I, S> {
    /// Creates a walk from `cursor` up to `last`.
    #[inline]
    pub const fn new(cursor: I, last: S) -> Self {
        Self { cursor, last }
    }

    /// The cursor designating the next element to be read.
    #[inline]
    pub const fn cursor(&self) -> &I {
        &self.cursor
    }

    /// Returns the remaining bounds.
    #[inline]
    pub fn into_parts(self) -> (I, S) {
        (self.cursor, self.last)
    }
}

impl<I, S> Iterator for Walk<I, S>
where
    I: WeakInputCursor,
    S: Sentinel<I>,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.last.is_end(&self.cursor) {
            return None;
        }
        let item = self.cursor.read();
        self.cursor.step();
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.last.measure(&self.cursor) {
            Some(n) => {
                let n = n.to_index();
                (n, Some(n))
            }
            None => (0, None),
        }
    }
}

impl<I, S> FusedIterator for Walk<I, S>
where
    I: WeakInputCursor,
    S: Sentinel<I>,
{
}

/// Creates a [`Walk`] from `first` up to `last`.
#[inline]
pub fn walk<I, S>(first: I, last: S) -> Walk<I, S>
where
    I: WeakInputCursor,
    S: Sentinel<I>,
{
    Walk::new(first, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{sentinel::Unreachable, slice::SliceCursor};

    #[test]
    fn test_walk_reads_all_elements() {
        let data = [3, 1, 4, 1, 5];
        let (first, last) = SliceCursor::bounds(&data);
        assert_eq!(walk(first, last).copied().collect::<Vec<_>>(), data.to_vec());
    }

    #[test]
    fn test_walk_exact_size_hint() {
        let data = [0u8; 6];
        let (first, last) = SliceCursor::bounds(&data);
        let mut it = walk(first, last);
        assert_eq!(it.size_hint(), (6, Some(6)));
        it.next();
        assert_eq!(it.size_hint(), (5, Some(5)));
    }

    #[test]
    fn test_walk_unsized_hint() {
        let data = [1, 2];
        let it = walk(SliceCursor::begin(&data), Unreachable);
        assert_eq!(it.size_hint(), (0, None));
        assert_eq!(it.take(2).count(), 2);
    }

    #[test]
    fn test_walk_is_fused() {
        let data = [7];
        let (first, last) = SliceCursor::bounds(&data);
        let mut it = walk(first, last);
        assert_eq!(it.next(), Some(&7));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.cursor().position(), 1);
    }
}
