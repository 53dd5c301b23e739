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

//! # Equal Range
//!
//! Finds the maximal subrange of a sorted sequence whose elements are
//! equivalent to a value under a strict weak order: every element before it
//! is ordered before the value, every element after it is ordered after.
//!
//! ## Strategies
//!
//! - Known length (`equal_range_n`, a sized sentinel or a sized range):
//!   bisection. When the middle element is equivalent, the lower bound is
//!   searched in the left half and the upper bound right of the middle.
//! - Unknown length: exponential probing from the start with steps
//!   `1, 2, 4, ...`. A probe clamped by the sentinel, or landing after the
//!   value, bounds a prefix that is then bisected; a probe landing on an
//!   equivalent element splits the search into a bisecting `lower_bound`
//!   over the prefix and an `upper_bound` from the probe. This terminates on
//!   unbounded sequences (`Iota` with `Unreachable`) whenever the value
//!   occurs or is exceeded.
//!
//! Comparator and projection are lent by reference to the sub-searches, so
//! a counting comparator sees every comparison of the whole call.

use crate::bounds::{lower_bound_n, upper_bound, upper_bound_n};
use std::cmp::Ordering;
use strider_core::{
    callable::{Projection, StrictWeakOrder, project, relate, wrap},
    cursor::{
        ForwardCursor, Readable, Sentinel, SliceCursor,
        ops::{advance_bounded, next, next_n},
    },
    num::distance::Distance,
    range::{Dangling, IntoRange, Range},
};

/// Finds the equal range of `value` among the `n` elements starting at
/// `first`, by bisection.
///
/// # Panics
///
/// In debug builds, if `n` is negative.
pub fn equal_range_n<I, T, C, P>(first: I, n: I::Distance, value: &T, comp: C, proj: P) -> Range<I>
where
    I: ForwardCursor,
    T: ?Sized,
    P: Projection<I::Value>,
    C: StrictWeakOrder<P::Output, T>,
{
    let zero: I::Distance = num_traits::zero();
    debug_assert!(n >= zero, "called `equal_range_n` with a negative count");

    let mut comp = wrap(comp);
    let mut proj = wrap(proj);
    let mut first = first;
    let mut dist = n;
    while dist > zero {
        let half = dist.half();
        let middle = next_n(first.clone(), half);
        let order = project(&mut proj, &middle, |pv| {
            if relate(&mut comp, pv, value) {
                Ordering::Less
            } else if relate(&mut comp, value, pv) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        match order {
            Ordering::Less => {
                first = next(middle);
                dist = dist - (half + num_traits::one());
            }
            Ordering::Greater => dist = half,
            Ordering::Equal => {
                let rest = dist - (half + num_traits::one());
                let lower = lower_bound_n(first, half, value, comp.by_ref(), proj.by_ref());
                let upper = upper_bound_n(next(middle), rest, value, comp.by_ref(), proj.by_ref());
                return Range::new(lower, upper);
            }
        }
    }
    Range::new(first.clone(), first)
}

/// Finds the equal range of `value` in `[first, last)`.
///
/// Bisects when the sentinel measures its distance, probes exponentially
/// otherwise.
///
/// # Examples
///
/// ```rust
/// # use strider_algo::equal_range::equal_range;
/// # use strider_core::{callable::{Identity, Less}, cursor::Unreachable};
/// # use strider_iter::iota::Iota;
/// let found = equal_range(Iota::new(0i64), Unreachable, &1_000i64, Less, Identity);
/// assert_eq!((found.begin().value(), found.end().value()), (1_000, 1_001));
/// ```
pub fn equal_range<I, S, T, C, P>(first: I, last: S, value: &T, comp: C, proj: P) -> Range<I>
where
    I: ForwardCursor,
    S: Sentinel<I>,
    T: ?Sized,
    P: Projection<I::Value>,
    C: StrictWeakOrder<P::Output, T>,
{
    if let Some(n) = last.measure(&first) {
        return equal_range_n(first, n, value, comp, proj);
    }

    let zero: I::Distance = num_traits::zero();
    let mut comp = wrap(comp);
    let mut proj = wrap(proj);
    let mut first = first;
    let mut dist: I::Distance = num_traits::one();
    loop {
        let mut mid = first.clone();
        let missing = advance_bounded(&mut mid, dist, &last);
        debug_assert!(missing >= zero);
        if missing > zero || last.is_end(&mid) {
            return equal_range_n(first, dist - missing, value, comp.by_ref(), proj.by_ref());
        }

        let order = project(&mut proj, &mid, |pv| {
            if relate(&mut comp, value, pv) {
                Ordering::Greater
            } else if !relate(&mut comp, pv, value) {
                Ordering::Equal
            } else {
                Ordering::Less
            }
        });
        match order {
            Ordering::Greater => {
                return equal_range_n(first, dist, value, comp.by_ref(), proj.by_ref());
            }
            Ordering::Equal => {
                let lower = lower_bound_n(first, dist, value, comp.by_ref(), proj.by_ref());
                let upper = upper_bound(mid, last, value, comp.by_ref(), proj.by_ref());
                return Range::new(lower, upper);
            }
            Ordering::Less => {
                first = next(mid);
                dist = dist.double_saturating();
            }
        }
    }
}

/// [`equal_range`] over a range; a sized range bisects over its size.
///
/// # Examples
///
/// ```rust
/// # use strider_algo::equal_range::equal_range_in;
/// # use strider_core::callable::{Identity, Less};
/// let data = vec![1, 2, 2, 2, 3, 5];
/// let found = equal_range_in(&data, &2, Less, Identity);
/// assert_eq!(found.into_iter().count(), 3);
/// ```
pub fn equal_range_in<R, T, C, P>(rng: R, value: &T, comp: C, proj: P) -> Range<R::Cursor>
where
    R: IntoRange,
    R::Cursor: ForwardCursor,
    T: ?Sized,
    P: Projection<<R::Cursor as Readable>::Value>,
    C: StrictWeakOrder<P::Output, T>,
{
    let size = rng.measure();
    let (first, last) = rng.into_bounds();
    match size {
        Some(n) => equal_range_n(first, n, value, comp, proj),
        None => equal_range(first, last, value, comp, proj),
    }
}

/// [`equal_range`] over an owned array literal; the result holds the
/// offsets of the equal range.
///
/// # Examples
///
/// ```rust
/// # use strider_algo::equal_range::equal_range_list;
/// # use strider_core::callable::{Identity, Less};
/// let found = equal_range_list([1, 2, 2, 2, 3, 5], &2, Less, Identity);
/// assert_eq!(found.offsets(), 1..4);
/// ```
pub fn equal_range_list<E, const N: usize, T, C, P>(
    list: [E; N],
    value: &T,
    comp: C,
    proj: P,
) -> Range<Dangling>
where
    T: ?Sized,
    P: Projection<E>,
    C: StrictWeakOrder<P::Output, T>,
{
    let origin = SliceCursor::begin(&list);
    let found = equal_range_n(origin, N as isize, value, comp, proj);
    Range::new(
        Dangling::between(&origin, found.begin()),
        Dangling::between(&origin, found.end()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_core::{
        callable::{Identity, Less, by_ref},
        cursor::Unreachable,
        instrument::Counted,
    };
    use strider_iter::{
        forward_only::{ForwardOnly, forward_only},
        iota::Iota,
    };

    const DATA: [i32; 6] = [1, 2, 2, 2, 3, 5];

    fn positions(found: &Range<SliceCursor<'_, i32>>) -> (usize, usize) {
        (found.begin().position(), found.end().position())
    }

    fn forward_positions(found: &Range<ForwardOnly<SliceCursor<'_, i32>>>) -> (usize, usize) {
        (found.begin().get().position(), found.end().get().position())
    }

    #[test]
    fn test_equal_range_scenario() {
        assert_eq!(positions(&equal_range_in(&DATA, &2, Less, Identity)), (1, 4));
    }

    #[test]
    fn test_equal_range_absent_value_is_empty_at_insertion_point() {
        assert_eq!(positions(&equal_range_in(&DATA, &4, Less, Identity)), (5, 5));
        assert_eq!(positions(&equal_range_in(&DATA, &0, Less, Identity)), (0, 0));
        assert_eq!(positions(&equal_range_in(&DATA, &9, Less, Identity)), (6, 6));
    }

    #[test]
    fn test_equal_range_empty_sequence() {
        let empty: [i32; 0] = [];
        let found = equal_range_in(&empty, &1, Less, Identity);
        assert!(found.is_empty());
    }

    #[test]
    fn test_equal_range_bisection_comparison_count() {
        let mut comp = Counted::new(Less);
        let found = equal_range_in(&DATA, &2, by_ref(&mut comp), Identity);
        assert_eq!(positions(&found), (1, 4));
        // middle: 2, lower half: 2, upper half: 2
        assert_eq!(comp.calls(), 6);
    }

    #[test]
    fn test_equal_range_probing_comparison_count() {
        let (first, last) = forward_only(SliceCursor::begin(&DATA), SliceCursor::end(&DATA));
        let mut comp = Counted::new(Less);
        let found = equal_range(first, last, &2, by_ref(&mut comp), Identity);
        assert_eq!(forward_positions(&found), (1, 4));
        // probe: 2, lower_bound_n over one element: 1, linear upper_bound: 4
        assert_eq!(comp.calls(), 7);
    }

    #[test]
    fn test_equal_range_probing_past_the_end() {
        let (first, last) = forward_only(SliceCursor::begin(&DATA), SliceCursor::end(&DATA));
        let mut comp = Counted::new(Less);
        let found = equal_range(first, last, &4, by_ref(&mut comp), Identity);
        assert_eq!(forward_positions(&found), (5, 5));
        assert_eq!(comp.calls(), 6);
    }

    #[test]
    fn test_equal_range_probing_matches_bisection() {
        let data = [0, 0, 1, 3, 3, 3, 3, 7, 8, 8, 12, 15, 15, 15];
        for value in -1..17 {
            let (first, last) = forward_only(SliceCursor::begin(&data), SliceCursor::end(&data));
            let probed = equal_range(first, last, &value, Less, Identity);
            let bisected = equal_range_in(&data, &value, Less, Identity);
            assert_eq!(forward_positions(&probed), positions(&bisected), "value {}", value);
        }
    }

    #[test]
    fn test_equal_range_probing_terminates_on_iota() {
        let found = equal_range(Iota::new(0i32), Unreachable, &37, Less, Identity);
        assert_eq!((found.begin().value(), found.end().value()), (37, 38));
    }

    #[test]
    fn test_equal_range_with_projection() {
        let data = [(1, 'a'), (3, 'b'), (3, 'c'), (4, 'd')];
        let found = equal_range_in(&data, &3, Less, |pair: &(i32, char)| pair.0);
        let letters: String = found.into_iter().map(|pair| pair.1).collect();
        assert_eq!(letters, "bc");
    }

    #[test]
    fn test_equal_range_list_matches_owned() {
        let owned = equal_range_in(&DATA, &2, Less, Identity);
        let listed = equal_range_list([1, 2, 2, 2, 3, 5], &2, Less, Identity);
        assert_eq!(listed.begin().offset(), owned.begin().position() as isize);
        assert_eq!(listed.end().offset(), owned.end().position() as isize);
    }
}
