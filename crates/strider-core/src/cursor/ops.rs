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

//! # Cursor Operations
//!
//! Free functions layered over the capability tiers: stepping by value,
//! bounded advancement and distance measurement. Each uses the cheapest
//! primitive the cursor/sentinel pair offers, a constant-time jump when the
//! sentinel is sized and a step loop otherwise.

use crate::cursor::{
    sentinel::Sentinel,
    tier::{BidirectionalCursor, WeakInputCursor},
};

/// Returns `cursor` moved one position forward.
#[inline]
pub fn next<I: WeakInputCursor>(mut cursor: I) -> I {
    cursor.step();
    cursor
}

/// Returns `cursor` moved `n` positions forward.
#[inline]
pub fn next_n<I: WeakInputCursor>(mut cursor: I, n: I::Distance) -> I {
    cursor.advance(n);
    cursor
}

/// Returns `cursor` moved one position backward.
#[inline]
pub fn prev<I: BidirectionalCursor>(mut cursor: I) -> I {
    cursor.step_back();
    cursor
}

/// Advances `cursor` by at most `n` positions, never passing `bound`.
///
/// Returns the part of `n` that could not be taken (zero unless the bound
/// was hit first).
///
/// # Panics
///
/// In debug builds, if `n` is negative.
///
/// # Examples
///
/// ```rust
/// # use strider_core::cursor::{ops::advance_bounded, slice::SliceCursor};
/// let data = [1, 2, 3];
/// let (mut first, last) = SliceCursor::bounds(&data);
/// assert_eq!(advance_bounded(&mut first, 5, &last), 2);
/// assert_eq!(first, last);
/// ```
pub fn advance_bounded<I, S>(cursor: &mut I, n: I::Distance, bound: &S) -> I::Distance
where
    I: WeakInputCursor,
    S: Sentinel<I>,
{
    let zero: I::Distance = num_traits::zero();
    debug_assert!(n >= zero, "called `advance_bounded` with a negative count");

    if let Some(available) = bound.measure(cursor) {
        debug_assert!(available >= zero, "sentinel lies before the cursor");
        if n >= available {
            cursor.advance(available);
            return n - available;
        }
        cursor.advance(n);
        return zero;
    }

    let mut remaining = n;
    while remaining > zero && !bound.is_end(cursor) {
        cursor.step();
        remaining = remaining - num_traits::one();
    }
    remaining
}

/// Advances `cursor` until it reaches `bound`.
pub fn advance_to<I, S>(cursor: &mut I, bound: &S)
where
    I: WeakInputCursor,
    S: Sentinel<I>,
{
    if let Some(available) = bound.measure(cursor) {
        cursor.advance(available);
        return;
    }
    while !bound.is_end(cursor) {
        cursor.step();
    }
}

/// Returns `cursor` moved up to `bound`.
#[inline]
pub fn next_to<I, S>(mut cursor: I, bound: &S) -> I
where
    I: WeakInputCursor,
    S: Sentinel<I>,
{
    advance_to(&mut cursor, bound);
    cursor
}

/// Counts the steps from `first` to `last`.
///
/// Constant time for sized sentinels; otherwise `first` is walked (and
/// consumed) up to the end.
///
/// # Examples
///
/// ```rust
/// # use strider_core::cursor::{ops::distance, slice::SliceCursor};
/// let data = [4, 5, 6, 7];
/// let (first, last) = SliceCursor::bounds(&data);
/// assert_eq!(distance(first, &last), 4);
/// ```
pub fn distance<I, S>(first: I, last: &S) -> I::Distance
where
    I: WeakInputCursor,
    S: Sentinel<I>,
{
    if let Some(n) = last.measure(&first) {
        return n;
    }
    let mut cursor = first;
    let mut n: I::Distance = num_traits::zero();
    while !last.is_end(&cursor) {
        cursor.step();
        n = n + num_traits::one();
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{sentinel::Unreachable, slice::SliceCursor};

    #[test]
    fn test_next_and_prev() {
        let data = [1, 2, 3];
        let first = SliceCursor::begin(&data);
        let second = next(first);
        assert_eq!(second.position(), 1);
        assert_eq!(prev(second), first);
        assert_eq!(next_n(first, 3), SliceCursor::end(&data));
    }

    #[test]
    fn test_advance_bounded_within_bound() {
        let data = [1, 2, 3, 4];
        let (mut first, last) = SliceCursor::bounds(&data);
        assert_eq!(advance_bounded(&mut first, 3, &last), 0);
        assert_eq!(first.position(), 3);
    }

    #[test]
    fn test_advance_bounded_clamps_and_reports_remainder() {
        let data = [1, 2];
        let (mut first, last) = SliceCursor::bounds(&data);
        assert_eq!(advance_bounded(&mut first, 7, &last), 5);
        assert_eq!(first, last);
    }

    #[test]
    fn test_advance_bounded_with_unsized_sentinel() {
        let data = [1, 2, 3];
        let mut first = SliceCursor::begin(&data);
        assert_eq!(advance_bounded(&mut first, 2, &Unreachable), 0);
        assert_eq!(first.position(), 2);
    }

    #[test]
    fn test_distance_and_next_to() {
        let data = [0u8; 9];
        let (first, last) = SliceCursor::bounds(&data);
        assert_eq!(distance(first, &last), 9);
        assert_eq!(next_to(first, &last), last);
    }

    #[test]
    fn test_advance_zero_is_noop() {
        let data = [1];
        let (mut first, last) = SliceCursor::bounds(&data);
        assert_eq!(advance_bounded(&mut first, 0, &last), 0);
        assert_eq!(first.position(), 0);
    }
}
