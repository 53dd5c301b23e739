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

//! # Remove If
//!
//! Compacts the elements that do not satisfy a predicate into a prefix,
//! preserving their relative order, and returns the new logical end.
//!
//! Removed elements are exchanged, not overwritten: the positions past the
//! returned end hold exactly the removed values, in unspecified order. The
//! storage can be truncated there afterwards.

use crate::find::find_if;
use strider_core::{
    callable::{Predicate, Projection, project, test, wrap},
    cursor::{Permutable, RandomAccessCursor, Readable, Sentinel, ops::next},
    num::distance::Distance,
    range::PermutableRange,
};

/// Moves every element of `[first, last)` whose projection fails `pred` to
/// the front, in order, and returns the end of that prefix.
///
/// # Examples
///
/// ```rust
/// # use strider_algo::remove_if::remove_if;
/// # use strider_core::{callable::Identity, cursor::SliceMutCursor};
/// let mut data = [1, 0, 2, 0, 3];
/// // SAFETY: no element reference outlives a swap.
/// let (first, last) = unsafe { SliceMutCursor::bounds(&mut data) };
/// let end = remove_if(first, last, |x: &i32| *x == 0, Identity).position();
/// assert_eq!(data[..end], [1, 2, 3]);
/// ```
pub fn remove_if<I, S, Pr, P>(first: I, last: S, pred: Pr, proj: P) -> I
where
    I: Permutable,
    S: Sentinel<I>,
    P: Projection<I::Value>,
    Pr: Predicate<P::Output>,
{
    let mut pred = wrap(pred);
    let mut proj = wrap(proj);

    let mut first = find_if(first, &last, pred.by_ref(), proj.by_ref());
    if last.is_end(&first) {
        return first;
    }

    let mut i = next(first.clone());
    while !last.is_end(&i) {
        if !project(&mut proj, &i, |v| test(&mut pred, v)) {
            first.iter_swap(&i);
            first.step();
        }
        i.step();
    }
    first
}

/// [`remove_if`] over exclusively borrowed storage; returns the number of
/// kept elements.
///
/// ```rust
/// # use strider_algo::remove_if::remove_if_in;
/// # use strider_core::callable::Identity;
/// let mut words = vec!["keep", "", "this", ""];
/// let len = remove_if_in(&mut words, |w: &&str| w.is_empty(), Identity);
/// words.truncate(len);
/// assert_eq!(words, ["keep", "this"]);
/// ```
pub fn remove_if_in<R, Pr, P>(rng: R, pred: Pr, proj: P) -> usize
where
    R: PermutableRange,
    R::Cursor: RandomAccessCursor,
    P: Projection<<R::Cursor as Readable>::Value>,
    Pr: Predicate<P::Output>,
{
    // SAFETY: element references only live inside `project`, which never
    // spans a swap.
    let (first, last) = unsafe { rng.permutable_bounds() };
    let origin = first.clone();
    let end = remove_if(first, last, pred, proj);
    end.offset_from(&origin).to_index()
}
