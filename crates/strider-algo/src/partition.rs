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

//! # Partition
//!
//! Reorders a sequence so that every element satisfying a predicate precedes
//! every element that does not, and returns the boundary. The relative order
//! within each group is not preserved.
//!
//! ## Strategies
//!
//! The strategy is chosen by the cursor's capability tier:
//!
//! - Forward: skip the leading run of satisfying elements, then swap each
//!   later satisfying element to the front of the failing block.
//! - Bidirectional and stronger: converging two-ended scan, swapping the
//!   first failing element from the front with the last satisfying element
//!   from the back until the cursors meet.

use crate::find::find_if_not;
use strider_core::{
    callable::{Predicate, Projection, project, test, wrap},
    cursor::{
        Bidirectional, BidirectionalCursor, Category, Contiguous, Forward, Permutable,
        RandomAccess, RandomAccessCursor, Readable, Sentinel, WeakInputCursor,
        ops::{next, next_to},
    },
    num::distance::Distance,
    range::PermutableRange,
};

/// Partitioning algorithm available for a capability tier.
///
/// Implemented for [`Forward`] and every stronger tag; single-pass cursors
/// cannot be partitioned.
pub trait PartitionStrategy<I, S>: Category
where
    I: Permutable,
    S: Sentinel<I>,
{
    /// Partitions `[first, last)` by `pred` and returns the boundary.
    fn partition<Pr, P>(first: I, last: S, pred: Pr, proj: P) -> I
    where
        P: Projection<I::Value>,
        Pr: Predicate<P::Output>;
}

impl<I, S> PartitionStrategy<I, S> for Forward
where
    I: Permutable,
    S: Sentinel<I>,
{
    fn partition<Pr, P>(first: I, last: S, pred: Pr, proj: P) -> I
    where
        P: Projection<I::Value>,
        Pr: Predicate<P::Output>,
    {
        let mut pred = wrap(pred);
        let mut proj = wrap(proj);

        let mut first = find_if_not(first, &last, pred.by_ref(), proj.by_ref());
        if last.is_end(&first) {
            return first;
        }

        let mut i = next(first.clone());
        while !last.is_end(&i) {
            if project(&mut proj, &i, |v| test(&mut pred, v)) {
                first.iter_swap(&i);
                first.step();
            }
            i.step();
        }
        first
    }
}

fn partition_converging<I, S, Pr, P>(first: I, last: S, pred: Pr, proj: P) -> I
where
    I: Permutable + BidirectionalCursor,
    S: Sentinel<I>,
    P: Projection<I::Value>,
    Pr: Predicate<P::Output>,
{
    let mut pred = wrap(pred);
    let mut proj = wrap(proj);
    let mut last = next_to(first.clone(), &last);
    let mut first = first;

    loop {
        loop {
            if first == last {
                return first;
            }
            if !project(&mut proj, &first, |v| test(&mut pred, v)) {
                break;
            }
            first.step();
        }
        loop {
            last.step_back();
            if first == last {
                return first;
            }
            if project(&mut proj, &last, |v| test(&mut pred, v)) {
                break;
            }
        }
        first.iter_swap(&last);
        first.step();
    }
}

macro_rules! impl_converging_strategy {
    ($($tag:ty),* $(,)?) => {
        $(
            impl<I, S> PartitionStrategy<I, S> for $tag
            where
                I: Permutable + BidirectionalCursor,
                S: Sentinel<I>,
            {
                #[inline]
                fn partition<Pr, P>(first: I, last: S, pred: Pr, proj: P) -> I
                where
                    P: Projection<I::Value>,
                    Pr: Predicate<P::Output>,
                {
                    partition_converging(first, last, pred, proj)
                }
            }
        )*
    };
}

impl_converging_strategy!(Bidirectional, RandomAccess, Contiguous);

/// Partitions `[first, last)` so that elements whose projection satisfies
/// `pred` come first; returns the first element of the second group.
///
/// # Examples
///
/// ```rust
/// # use strider_algo::partition::partition;
/// # use strider_core::{callable::Identity, cursor::SliceMutCursor};
/// let mut data = [1, 2, 3, 4, 5, 6];
/// // SAFETY: no element reference outlives a swap.
/// let (first, last) = unsafe { SliceMutCursor::bounds(&mut data) };
/// let boundary = partition(first, last, |x: &i32| x % 2 == 0, Identity);
/// assert_eq!(boundary.position(), 3);
/// assert!(data[..3].iter().all(|x| x % 2 == 0));
/// ```
pub fn partition<I, S, Pr, P>(first: I, last: S, pred: Pr, proj: P) -> I
where
    I: Permutable,
    S: Sentinel<I>,
    I::Category: PartitionStrategy<I, S>,
    P: Projection<I::Value>,
    Pr: Predicate<P::Output>,
{
    <I::Category as PartitionStrategy<I, S>>::partition(first, last, pred, proj)
}

/// [`partition`] over exclusively borrowed storage; returns the index of the
/// boundary.
///
/// ```rust
/// # use strider_algo::partition::partition_in;
/// # use strider_core::callable::Identity;
/// let mut data = vec![5, 8, 1, 4];
/// assert_eq!(partition_in(&mut data, |x: &i32| *x < 5, Identity), 2);
/// ```
pub fn partition_in<R, Pr, P>(rng: R, pred: Pr, proj: P) -> usize
where
    R: PermutableRange,
    R::Cursor: RandomAccessCursor,
    <R::Cursor as WeakInputCursor>::Category: PartitionStrategy<R::Cursor, R::Sentinel>,
    P: Projection<<R::Cursor as Readable>::Value>,
    Pr: Predicate<P::Output>,
{
    // SAFETY: element references only live inside `project`, which never
    // spans a swap.
    let (first, last) = unsafe { rng.permutable_bounds() };
    let origin = first.clone();
    let boundary = partition(first, last, pred, proj);
    boundary.offset_from(&origin).to_index()
}
