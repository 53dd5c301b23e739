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

//! # Lower and Upper Bounds
//!
//! Searches in a sequence sorted with respect to a strict weak order:
//!
//! - `lower_bound`: the first element not ordered before `value`, i.e. the
//!   first element `e` with `!comp(e, value)`.
//! - `upper_bound`: the first element ordered after `value`, i.e. the first
//!   element `e` with `comp(value, e)`.
//!
//! Both are partition-point searches. With a known length (`_n`, a sized
//! sentinel or a sized range) they bisect; otherwise they scan linearly up
//! to the sentinel.

use crate::partition_point::{partition_point, partition_point_n};
use strider_core::{
    callable::{Predicate, Projection, Relation, StrictWeakOrder, relate},
    cursor::{ForwardCursor, Readable, Sentinel, SliceCursor},
    range::{Dangling, IntoRange},
};

/// `comp(e, value)`: true for elements ordered before `value`.
struct OrderedBefore<'v, C, T: ?Sized> {
    comp: C,
    value: &'v T,
}

impl<A, C, T> Predicate<A> for OrderedBefore<'_, C, T>
where
    A: ?Sized,
    C: Relation<A, T>,
    T: ?Sized,
{
    #[inline(always)]
    fn test(&mut self, element: &A) -> bool {
        relate(&mut self.comp, element, self.value)
    }
}

/// `!comp(value, e)`: true for elements not ordered after `value`.
struct NotOrderedAfter<'v, C, T: ?Sized> {
    comp: C,
    value: &'v T,
}

impl<A, C, T> Predicate<A> for NotOrderedAfter<'_, C, T>
where
    A: ?Sized,
    C: Relation<T, A>,
    T: ?Sized,
{
    #[inline(always)]
    fn test(&mut self, element: &A) -> bool {
        !relate(&mut self.comp, self.value, element)
    }
}

/// Finds the lower bound of `value` among the `n` elements starting at
/// `first`, by bisection.
pub fn lower_bound_n<I, T, C, P>(first: I, n: I::Distance, value: &T, comp: C, proj: P) -> I
where
    I: ForwardCursor,
    T: ?Sized,
    P: Projection<I::Value>,
    C: StrictWeakOrder<P::Output, T>,
{
    partition_point_n(first, n, OrderedBefore { comp, value }, proj)
}

/// Finds the lower bound of `value` in `[first, last)`.
///
/// # Examples
///
/// ```rust
/// # use strider_algo::bounds::lower_bound;
/// # use strider_core::{callable::{Identity, Less}, cursor::SliceCursor};
/// let data = [1, 2, 2, 3];
/// let (first, last) = SliceCursor::bounds(&data);
/// assert_eq!(lower_bound(first, last, &2, Less, Identity).position(), 1);
/// ```
pub fn lower_bound<I, S, T, C, P>(first: I, last: S, value: &T, comp: C, proj: P) -> I
where
    I: ForwardCursor,
    S: Sentinel<I>,
    T: ?Sized,
    P: Projection<I::Value>,
    C: StrictWeakOrder<P::Output, T>,
{
    partition_point(first, last, OrderedBefore { comp, value }, proj)
}

/// [`lower_bound`] over a range; a sized range bisects over its size.
pub fn lower_bound_in<R, T, C, P>(rng: R, value: &T, comp: C, proj: P) -> R::Cursor
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
        Some(n) => lower_bound_n(first, n, value, comp, proj),
        None => lower_bound(first, last, value, comp, proj),
    }
}

/// [`lower_bound`] over an owned array literal.
pub fn lower_bound_list<E, const N: usize, T, C, P>(
    list: [E; N],
    value: &T,
    comp: C,
    proj: P,
) -> Dangling
where
    T: ?Sized,
    P: Projection<E>,
    C: StrictWeakOrder<P::Output, T>,
{
    let origin = SliceCursor::begin(&list);
    let found = lower_bound_n(origin, N as isize, value, comp, proj);
    Dangling::between(&origin, &found)
}

/// Finds the upper bound of `value` among the `n` elements starting at
/// `first`, by bisection.
pub fn upper_bound_n<I, T, C, P>(first: I, n: I::Distance, value: &T, comp: C, proj: P) -> I
where
    I: ForwardCursor,
    T: ?Sized,
    P: Projection<I::Value>,
    C: StrictWeakOrder<P::Output, T>,
{
    partition_point_n(first, n, NotOrderedAfter { comp, value }, proj)
}

/// Finds the upper bound of `value` in `[first, last)`.
///
/// # Examples
///
/// ```rust
/// # use strider_algo::bounds::upper_bound;
/// # use strider_core::{callable::{Identity, Less}, cursor::SliceCursor};
/// let data = [1, 2, 2, 3];
/// let (first, last) = SliceCursor::bounds(&data);
/// assert_eq!(upper_bound(first, last, &2, Less, Identity).position(), 3);
/// ```
pub fn upper_bound<I, S, T, C, P>(first: I, last: S, value: &T, comp: C, proj: P) -> I
where
    I: ForwardCursor,
    S: Sentinel<I>,
    T: ?Sized,
    P: Projection<I::Value>,
    C: StrictWeakOrder<P::Output, T>,
{
    partition_point(first, last, NotOrderedAfter { comp, value }, proj)
}

/// [`upper_bound`] over a range; a sized range bisects over its size.
pub fn upper_bound_in<R, T, C, P>(rng: R, value: &T, comp: C, proj: P) -> R::Cursor
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
        Some(n) => upper_bound_n(first, n, value, comp, proj),
        None => upper_bound(first, last, value, comp, proj),
    }
}

/// [`upper_bound`] over an owned array literal.
///
/// # Examples
///
/// ```rust
/// # use strider_algo::bounds::upper_bound_list;
/// # use strider_core::callable::{Identity, Less};
/// let position = upper_bound_list([1, 2, 2, 3], &2, Less, Identity);
/// assert_eq!(position.offset(), 3);
/// ```
pub fn upper_bound_list<E, const N: usize, T, C, P>(
    list: [E; N],
    value: &T,
    comp: C,
    proj: P,
) -> Dangling
where
    T: ?Sized,
    P: Projection<E>,
    C: StrictWeakOrder<P::Output, T>,
{
    let origin = SliceCursor::begin(&list);
    let found = upper_bound_n(origin, N as isize, value, comp, proj);
    Dangling::between(&origin, &found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_core::{
        callable::{Greater, Identity, Less, by_ref},
        cursor::Unreachable,
        instrument::Counted,
    };
    use strider_iter::{forward_only::forward_only, iota::Iota};

    #[test]
    fn test_upper_bound_scenario() {
        let data = [1, 2, 2, 3];
        assert_eq!(upper_bound_in(&data, &2, Less, Identity).position(), 3);
        assert_eq!(lower_bound_in(&data, &2, Less, Identity).position(), 1);
    }

    #[test]
    fn test_bounds_of_absent_values() {
        let data = [10, 20, 30];
        assert_eq!(lower_bound_in(&data, &5, Less, Identity).position(), 0);
        assert_eq!(upper_bound_in(&data, &25, Less, Identity).position(), 2);
        assert_eq!(lower_bound_in(&data, &35, Less, Identity).position(), 3);
    }

    #[test]
    fn test_bounds_with_descending_order() {
        let data = [9, 7, 7, 3];
        assert_eq!(lower_bound_in(&data, &7, Greater, Identity).position(), 1);
        assert_eq!(upper_bound_in(&data, &7, Greater, Identity).position(), 3);
    }

    #[test]
    fn test_bounds_with_projection() {
        let people = [("ada", 36), ("bob", 41), ("cy", 41), ("dee", 58)];
        let age = |p: &(&str, i32)| p.1;
        assert_eq!(lower_bound_in(&people, &41, Less, age).position(), 1);
        assert_eq!(upper_bound_in(&people, &41, Less, age).position(), 3);
    }

    #[test]
    fn test_bounds_forward_only_match_sized() {
        let data = [1, 1, 4, 4, 4, 9];
        for value in 0..11 {
            let (first, last) = forward_only(SliceCursor::begin(&data), SliceCursor::end(&data));
            let linear = upper_bound(first, last, &value, Less, Identity);
            let bisected = upper_bound_in(&data, &value, Less, Identity);
            assert_eq!(linear.get().position(), bisected.position());
        }
    }

    #[test]
    fn test_upper_bound_unbounded_iota() {
        let found = upper_bound(Iota::new(0i64), Unreachable, &12i64, Less, Identity);
        assert_eq!(found.value(), 13);
    }

    #[test]
    fn test_bounds_list_return_offsets() {
        assert_eq!(lower_bound_list([1, 2, 2, 3], &2, Less, Identity).offset(), 1);
        assert_eq!(upper_bound_list([1, 2, 2, 3], &2, Less, Identity).offset(), 3);
        let empty: [i32; 0] = [];
        assert_eq!(upper_bound_list(empty, &2, Less, Identity).offset(), 0);
    }

    #[test]
    fn test_upper_bound_comparison_count() {
        let data: Vec<i32> = (0..100).collect();
        let mut comp = Counted::new(Less);
        let found = upper_bound_in(&data, &49, by_ref(&mut comp), Identity);
        assert_eq!(found.position(), 50);
        assert!(comp.calls() <= 7);
    }
}
