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

//! # Find
//!
//! Linear searches for the first element whose projection does, or does
//! not, satisfy a predicate. They are the building blocks of the linear
//! partition-point scan, `partition` and `remove_if`.

use strider_core::{
    callable::{Predicate, Projection, project, test, wrap},
    cursor::{InputCursor, Readable, Sentinel},
    range::IntoRange,
};

#[inline(always)]
fn find_by<I, S, Pr, P>(first: I, last: S, mut pred: Pr, mut proj: P, wanted: bool) -> I
where
    I: InputCursor,
    S: Sentinel<I>,
    P: Projection<I::Value>,
    Pr: Predicate<P::Output>,
{
    let mut first = first;
    while !last.is_end(&first) {
        if project(&mut proj, &first, |v| test(&mut pred, v)) == wanted {
            break;
        }
        first.step();
    }
    first
}

/// Returns the first position in `[first, last)` whose projected element
/// satisfies `pred`, or the end position.
///
/// # Examples
///
/// ```rust
/// # use strider_algo::find::find_if;
/// # use strider_core::{callable::Identity, cursor::SliceCursor};
/// let data = [1, 3, 4, 5];
/// let (first, last) = SliceCursor::bounds(&data);
/// let even = find_if(first, last, |x: &i32| x % 2 == 0, Identity);
/// assert_eq!(even.position(), 2);
/// ```
pub fn find_if<I, S, Pr, P>(first: I, last: S, pred: Pr, proj: P) -> I
where
    I: InputCursor,
    S: Sentinel<I>,
    P: Projection<I::Value>,
    Pr: Predicate<P::Output>,
{
    find_by(first, last, wrap(pred), wrap(proj), true)
}

/// Returns the first position in `[first, last)` whose projected element
/// does not satisfy `pred`, or the end position.
pub fn find_if_not<I, S, Pr, P>(first: I, last: S, pred: Pr, proj: P) -> I
where
    I: InputCursor,
    S: Sentinel<I>,
    P: Projection<I::Value>,
    Pr: Predicate<P::Output>,
{
    find_by(first, last, wrap(pred), wrap(proj), false)
}

/// [`find_if`] over a range.
pub fn find_if_in<R, Pr, P>(rng: R, pred: Pr, proj: P) -> R::Cursor
where
    R: IntoRange,
    R::Cursor: InputCursor,
    P: Projection<<R::Cursor as Readable>::Value>,
    Pr: Predicate<P::Output>,
{
    let (first, last) = rng.into_bounds();
    find_if(first, last, pred, proj)
}

/// [`find_if_not`] over a range.
pub fn find_if_not_in<R, Pr, P>(rng: R, pred: Pr, proj: P) -> R::Cursor
where
    R: IntoRange,
    R::Cursor: InputCursor,
    P: Projection<<R::Cursor as Readable>::Value>,
    Pr: Predicate<P::Output>,
{
    let (first, last) = rng.into_bounds();
    find_if_not(first, last, pred, proj)
}
