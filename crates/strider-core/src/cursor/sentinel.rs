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

//! # Sentinels
//!
//! A sentinel marks the end of a sequence without having to be a cursor of
//! the same type. `Sentinel<I>` only answers "is this cursor at the end?".
//! `SizedSentinel<I>` additionally computes the distance from a cursor to
//! the end in constant time.
//!
//! Algorithms that benefit from a known length call [`Sentinel::measure`]:
//! sized sentinels answer `Some(distance)`, plain sentinels answer `None`.
//! The answer is fixed by the sentinel type, so the branch folds away after
//! monomorphisation.
//!
//! A shared reference to a sentinel is itself a sentinel, so an algorithm
//! can lend its end marker to a sub-algorithm and keep using it afterwards.

use crate::cursor::tier::WeakInputCursor;

/// End-of-sequence marker for cursors of type `I`.
pub trait Sentinel<I: WeakInputCursor> {
    /// Returns `true` if `cursor` designates the end.
    fn is_end(&self, cursor: &I) -> bool;

    /// Returns the distance from `first` to the end when it is known in
    /// constant time, `None` otherwise.
    ///
    /// Implementors of [`SizedSentinel`] must return
    /// `Some(self.distance_from(first))`. There is no default: every
    /// sentinel states whether it selects the counted strategies.
    fn measure(&self, first: &I) -> Option<I::Distance>;
}

/// A sentinel whose distance from any reachable cursor is computable in
/// constant time.
pub trait SizedSentinel<I: WeakInputCursor>: Sentinel<I> {
    /// Returns the number of steps from `first` to the end.
    fn distance_from(&self, first: &I) -> I::Distance;
}

impl<I, S> Sentinel<I> for &S
where
    I: WeakInputCursor,
    S: Sentinel<I> + ?Sized,
{
    #[inline(always)]
    fn is_end(&self, cursor: &I) -> bool {
        (**self).is_end(cursor)
    }

    #[inline(always)]
    fn measure(&self, first: &I) -> Option<I::Distance> {
        (**self).measure(first)
    }
}

impl<I, S> SizedSentinel<I> for &S
where
    I: WeakInputCursor,
    S: SizedSentinel<I> + ?Sized,
{
    #[inline(always)]
    fn distance_from(&self, first: &I) -> I::Distance {
        (**self).distance_from(first)
    }
}

/// A sentinel no cursor ever reaches.
///
/// Useful with generators such as `Iota`, where the caller knows through
/// other means (a sorted search target) that the algorithm stops.
///
/// # Examples
///
/// ```rust
/// # use strider_core::cursor::{sentinel::{Sentinel, Unreachable}, slice::SliceCursor};
/// let data = [1, 2, 3];
/// let last = SliceCursor::end(&data);
/// assert!(!Unreachable.is_end(&last));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unreachable;

impl<I: WeakInputCursor> Sentinel<I> for Unreachable {
    #[inline(always)]
    fn is_end(&self, _cursor: &I) -> bool {
        false
    }

    #[inline(always)]
    fn measure(&self, _first: &I) -> Option<I::Distance> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::slice::SliceCursor;

    #[test]
    fn test_borrowed_sentinel_forwards() {
        let data = [1, 2, 3];
        let (first, last) = SliceCursor::bounds(&data);
        let borrowed = &last;
        assert!(!borrowed.is_end(&first));
        assert_eq!(Sentinel::measure(&borrowed, &first), Some(3));
        assert_eq!(borrowed.distance_from(&first), 3);
    }

    #[test]
    fn test_unreachable_never_measures() {
        let data = [1];
        let first = SliceCursor::begin(&data);
        assert_eq!(Unreachable.measure(&first), None);
    }
}
