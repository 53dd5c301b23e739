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

//! # Equal
//!
//! Compares two sequences element by element with a binary predicate, each
//! side with its own projection.
//!
//! ## Strategies
//!
//! - Both lengths known in constant time (sized sentinels, or sized ranges):
//!   different lengths answer `false` without invoking the predicate; equal
//!   lengths scan bounded by the first sequence only.
//! - Otherwise both ends are checked at every step, and the sequences are
//!   equal when they end together.

use num_traits::ToPrimitive;
use strider_core::{
    callable::{Projection, Relation, project, relate, wrap},
    cursor::{InputCursor, Readable, Sentinel, SliceCursor},
    range::{IntoRange, Range},
};

#[inline(always)]
fn same_element<I1, I2, Pr, P1, P2>(
    first1: &I1,
    first2: &I2,
    pred: &mut Pr,
    proj1: &mut P1,
    proj2: &mut P2,
) -> bool
where
    I1: Readable,
    I2: Readable,
    P1: Projection<I1::Value>,
    P2: Projection<I2::Value>,
    Pr: Relation<P1::Output, P2::Output>,
{
    project(proj1, first1, |a| project(proj2, first2, |b| relate(pred, a, b)))
}

fn equal_bounded_by_first<I1, S1, I2, Pr, P1, P2>(
    first1: I1,
    last1: S1,
    first2: I2,
    mut pred: Pr,
    mut proj1: P1,
    mut proj2: P2,
) -> bool
where
    I1: InputCursor,
    S1: Sentinel<I1>,
    I2: InputCursor,
    P1: Projection<I1::Value>,
    P2: Projection<I2::Value>,
    Pr: Relation<P1::Output, P2::Output>,
{
    let (mut first1, mut first2) = (first1, first2);
    while !last1.is_end(&first1) {
        if !same_element(&first1, &first2, &mut pred, &mut proj1, &mut proj2) {
            return false;
        }
        first1.step();
        first2.step();
    }
    true
}

fn equal_bounded_by_both<I1, S1, I2, S2, Pr, P1, P2>(
    first1: I1,
    last1: S1,
    first2: I2,
    last2: S2,
    mut pred: Pr,
    mut proj1: P1,
    mut proj2: P2,
) -> bool
where
    I1: InputCursor,
    S1: Sentinel<I1>,
    I2: InputCursor,
    S2: Sentinel<I2>,
    P1: Projection<I1::Value>,
    P2: Projection<I2::Value>,
    Pr: Relation<P1::Output, P2::Output>,
{
    let (mut first1, mut first2) = (first1, first2);
    loop {
        match (last1.is_end(&first1), last2.is_end(&first2)) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }
        if !same_element(&first1, &first2, &mut pred, &mut proj1, &mut proj2) {
            return false;
        }
        first1.step();
        first2.step();
    }
}

#[allow(clippy::too_many_arguments)]
fn equal_measured<I1, S1, I2, S2, Pr, P1, P2>(
    first1: I1,
    last1: S1,
    size1: Option<I1::Distance>,
    first2: I2,
    last2: S2,
    size2: Option<I2::Distance>,
    pred: Pr,
    proj1: P1,
    proj2: P2,
) -> bool
where
    I1: InputCursor,
    S1: Sentinel<I1>,
    I2: InputCursor,
    S2: Sentinel<I2>,
    P1: Projection<I1::Value>,
    P2: Projection<I2::Value>,
    Pr: Relation<P1::Output, P2::Output>,
{
    let (pred, proj1, proj2) = (wrap(pred), wrap(proj1), wrap(proj2));
    match (size1, size2) {
        (Some(n1), Some(n2)) => {
            if n1.to_i128() != n2.to_i128() {
                return false;
            }
            equal_bounded_by_first(first1, last1, first2, pred, proj1, proj2)
        }
        _ => equal_bounded_by_both(first1, last1, first2, last2, pred, proj1, proj2),
    }
}

/// Returns `true` if `[first1, last1)` and `[first2, last2)` have the same
/// length and `pred` holds for every pair of projected elements.
///
/// # Examples
///
/// ```rust
/// # use strider_algo::equal::equal;
/// # use strider_core::{callable::{EqualTo, Identity}, cursor::SliceCursor};
/// let a = [1, 2, 3];
/// let b = [1, 2, 4];
/// let (f1, l1) = SliceCursor::bounds(&a);
/// let (f2, l2) = SliceCursor::bounds(&b);
/// assert!(equal(f1, l1, f1, l1, EqualTo, Identity, Identity));
/// assert!(!equal(f1, l1, f2, l2, EqualTo, Identity, Identity));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn equal<I1, S1, I2, S2, Pr, P1, P2>(
    first1: I1,
    last1: S1,
    first2: I2,
    last2: S2,
    pred: Pr,
    proj1: P1,
    proj2: P2,
) -> bool
where
    I1: InputCursor,
    S1: Sentinel<I1>,
    I2: InputCursor,
    S2: Sentinel<I2>,
    P1: Projection<I1::Value>,
    P2: Projection<I2::Value>,
    Pr: Relation<P1::Output, P2::Output>,
{
    let size1 = last1.measure(&first1);
    let size2 = last2.measure(&first2);
    equal_measured(first1, last1, size1, first2, last2, size2, pred, proj1, proj2)
}

/// [`equal`] over two ranges; a range that measures itself is preferred
/// over its sentinel.
pub fn equal_in<R1, R2, Pr, P1, P2>(rng1: R1, rng2: R2, pred: Pr, proj1: P1, proj2: P2) -> bool
where
    R1: IntoRange,
    R2: IntoRange,
    R1::Cursor: InputCursor,
    R2::Cursor: InputCursor,
    P1: Projection<<R1::Cursor as Readable>::Value>,
    P2: Projection<<R2::Cursor as Readable>::Value>,
    Pr: Relation<P1::Output, P2::Output>,
{
    let (size1, size2) = (rng1.measure(), rng2.measure());
    let (first1, last1) = rng1.into_bounds();
    let (first2, last2) = rng2.into_bounds();
    let size1 = size1.or_else(|| last1.measure(&first1));
    let size2 = size2.or_else(|| last2.measure(&first2));
    equal_measured(first1, last1, size1, first2, last2, size2, pred, proj1, proj2)
}

/// [`equal`] between an owned array literal and a range.
pub fn equal_list<E, const N: usize, R2, Pr, P1, P2>(
    list: [E; N],
    rng2: R2,
    pred: Pr,
    proj1: P1,
    proj2: P2,
) -> bool
where
    R2: IntoRange,
    R2::Cursor: InputCursor,
    P1: Projection<E>,
    P2: Projection<<R2::Cursor as Readable>::Value>,
    Pr: Relation<P1::Output, P2::Output>,
{
    let (first1, last1) = SliceCursor::bounds(&list);
    equal_in(Range::new(first1, last1), rng2, pred, proj1, proj2)
}
