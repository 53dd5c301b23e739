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

//! # Partition Point
//!
//! Given a sequence partitioned by a predicate (every element satisfying it
//! precedes every element that doesn't), finds the boundary.
//!
//! ## Strategies
//!
//! - Known length: bisection, `O(log n)` predicate calls and `O(log n)`
//!   jumps for random-access cursors (`O(n)` steps otherwise).
//! - Unknown length: a linear scan up to the first element failing the
//!   predicate.
//!
//! `partition_point` picks bisection whenever the sentinel measures its
//! distance; the choice is fixed per sentinel type.

use crate::find::find_if_not;
use strider_core::{
    callable::{Predicate, Projection, project, test, wrap},
    cursor::{
        ForwardCursor, Readable, Sentinel,
        ops::{next, next_n},
    },
    num::distance::Distance,
    range::IntoRange,
};

/// Finds the partition point of the `n` elements starting at `first` by
/// bisection.
///
/// # Panics
///
/// In debug builds, if `n` is negative.
///
/// # Examples
///
/// ```rust
/// # use strider_algo::partition_point::partition_point_n;
/// # use strider_core::{callable::Identity, cursor::SliceCursor};
/// let data = [2, 4, 6, 7, 9];
/// let boundary = partition_point_n(SliceCursor::begin(&data), 5, |x: &i32| x % 2 == 0, Identity);
/// assert_eq!(boundary.position(), 3);
/// ```
pub fn partition_point_n<I, Pr, P>(first: I, n: I::Distance, pred: Pr, proj: P) -> I
where
    I: ForwardCursor,
    P: Projection<I::Value>,
    Pr: Predicate<P::Output>,
{
    let zero: I::Distance = num_traits::zero();
    debug_assert!(n >= zero, "called `partition_point_n` with a negative count");

    let mut pred = wrap(pred);
    let mut proj = wrap(proj);
    let mut first = first;
    let mut n = n;
    while n > zero {
        let half = n.half();
        let middle = next_n(first.clone(), half);
        if project(&mut proj, &middle, |v| test(&mut pred, v)) {
            first = next(middle);
            n = n - (half + num_traits::one());
        } else {
            n = half;
        }
    }
    first
}

/// Finds the partition point of `[first, last)`.
pub fn partition_point<I, S, Pr, P>(first: I, last: S, pred: Pr, proj: P) -> I
where
    I: ForwardCursor,
    S: Sentinel<I>,
    P: Projection<I::Value>,
    Pr: Predicate<P::Output>,
{
    match last.measure(&first) {
        Some(n) => partition_point_n(first, n, pred, proj),
        None => find_if_not(first, last, pred, proj),
    }
}

/// [`partition_point`] over a range.
pub fn partition_point_in<R, Pr, P>(rng: R, pred: Pr, proj: P) -> R::Cursor
where
    R: IntoRange,
    R::Cursor: ForwardCursor,
    P: Projection<<R::Cursor as Readable>::Value>,
    Pr: Predicate<P::Output>,
{
    let size = rng.measure();
    let (first, last) = rng.into_bounds();
    match size {
        Some(n) => partition_point_n(first, n, pred, proj),
        None => partition_point(first, last, pred, proj),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_core::{
        callable::{Identity, by_ref},
        cursor::SliceCursor,
        instrument::Counted,
    };
    use strider_iter::{
        counted::counted,
        forward_only::{ForwardOnly, forward_only},
    };

    fn is_small(x: &i32) -> bool {
        *x < 10
    }

    #[test]
    fn test_partition_point_all_true_and_all_false() {
        let small = [1, 2, 3];
        let large = [11, 12];
        assert_eq!(partition_point_in(&small, is_small, Identity).position(), 3);
        assert_eq!(partition_point_in(&large, is_small, Identity).position(), 0);
    }

    #[test]
    fn test_partition_point_empty() {
        let empty: [i32; 0] = [];
        assert_eq!(partition_point_in(&empty, is_small, Identity).position(), 0);
    }

    #[test]
    fn test_partition_point_bisects_when_sized() {
        let data: Vec<i32> = (0..64).collect();
        let mut pred = Counted::new(|x: &i32| *x < 40);
        let boundary = partition_point_in(&data, by_ref(&mut pred), Identity);
        assert_eq!(boundary.position(), 40);
        // ceil(log2(65)) = 7
        assert!(pred.calls() <= 7);
    }

    #[test]
    fn test_partition_point_scans_when_unsized() {
        let data: Vec<i32> = (0..64).collect();
        let (first, last) = forward_only(SliceCursor::begin(&data), SliceCursor::end(&data));
        let mut pred = Counted::new(|x: &i32| *x < 40);
        let boundary = partition_point(first, last, by_ref(&mut pred), Identity);
        assert_eq!(boundary.get().position(), 40);
        assert_eq!(pred.calls(), 41);
    }

    #[test]
    fn test_partition_point_counted_forward_bisects() {
        let data: Vec<i32> = (0..16).collect();
        let (first, last) = counted(ForwardOnly::new(SliceCursor::begin(&data)), 16);
        let mut pred = Counted::new(|x: &i32| *x < 5);
        let boundary = partition_point(first, last, by_ref(&mut pred), Identity);
        assert_eq!(boundary.base().get().position(), 5);
        assert!(pred.calls() <= 5);
    }
}
