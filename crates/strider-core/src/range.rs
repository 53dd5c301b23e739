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

//! # Ranges
//!
//! A range is anything that can be split into a cursor and a sentinel.
//! Algorithms accept ranges through their `_in` entry points and forward to
//! the cursor/sentinel form.
//!
//! ## Highlights
//!
//! - `IntoRange`: the conversion, with an optional constant-time `measure`
//!   that takes precedence over the sentinel's own measurement.
//! - `SizedRange`: ranges whose size is always known.
//! - `PermutableRange`: exclusive storage that hands out permutable cursors
//!   (used by the mutating algorithms).
//! - `Range<I, S>`: a non-owning view made of a cursor and a sentinel. It
//!   is the result type of `equal_range` and implements `IntoIterator`.
//! - `Dangling<D>`: a position into storage that no longer exists. It keeps
//!   only the offset from the start of that storage and can't be read.
//!
//! ```rust
//! # use strider_core::{cursor::SliceCursor, range::Range};
//! let data = [1, 2, 3, 4];
//! let view = Range::new(SliceCursor::at(&data, 1), SliceCursor::at(&data, 3));
//! assert_eq!(view.into_iter().copied().collect::<Vec<_>>(), vec![2, 3]);
//! ```

use crate::{
    cursor::{
        sentinel::Sentinel,
        tier::{Permutable, RandomAccessCursor, WeakInputCursor},
    },
    iter::Walk,
    num::distance::Distance,
};

/// Conversion into a cursor/sentinel pair.
pub trait IntoRange {
    /// Cursor designating the first element.
    type Cursor: WeakInputCursor;
    /// End marker.
    type Sentinel: Sentinel<Self::Cursor>;

    /// Splits the range into its bounds.
    fn into_bounds(self) -> (Self::Cursor, Self::Sentinel);

    /// Number of elements when known in constant time.
    #[inline(always)]
    fn measure(&self) -> Option<<Self::Cursor as WeakInputCursor>::Distance> {
        None
    }
}

/// A range whose size is known in constant time.
///
/// Implementors must also answer `IntoRange::measure` with
/// `Some(self.size())`.
pub trait SizedRange: IntoRange {
    /// Number of elements.
    fn size(&self) -> <Self::Cursor as WeakInputCursor>::Distance;
}

/// Exclusive storage that can be traversed by permutable cursors.
pub trait PermutableRange {
    /// Permutable cursor type.
    type Cursor: Permutable;
    /// End marker.
    type Sentinel: Sentinel<Self::Cursor>;

    /// Splits the storage into permutable bounds.
    ///
    /// # Safety
    ///
    /// Clones of the returned cursors alias the storage; the caller must not
    /// keep element references obtained through reads alive across swaps or
    /// moves performed through another clone.
    unsafe fn permutable_bounds(self) -> (Self::Cursor, Self::Sentinel);
}

/// A non-owning view delimited by a cursor and a sentinel.
///
/// No ordering between the bounds is validated by [`Range::new`]; the
/// random-access constructor [`Range::try_new`] checks it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Range<I, S = I> {
    first: I,
    last: S,
}

impl<I, S> Range<I, S> {
    /// Creates a view from its bounds.
    #[inline]
    pub const fn new(first: I, last: S) -> Self {
        Self { first, last }
    }

    /// The first position.
    #[inline]
    pub const fn begin(&self) -> &I {
        &self.first
    }

    /// The end marker.
    #[inline]
    pub const fn end(&self) -> &S {
        &self.last
    }

    /// Splits the view into its bounds.
    #[inline]
    pub fn into_parts(self) -> (I, S) {
        (self.first, self.last)
    }
}

impl<I, S> Range<I, S>
where
    I: WeakInputCursor,
    S: Sentinel<I>,
{
    /// Returns `true` if the view contains no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.last.is_end(&self.first)
    }
}

impl<I> Range<I, I>
where
    I: RandomAccessCursor,
{
    /// Creates a view if `first` does not lie after `last`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strider_core::{cursor::SliceCursor, range::Range};
    /// let data = [1, 2, 3];
    /// let (first, last) = SliceCursor::bounds(&data);
    /// assert!(Range::try_new(first, last).is_some());
    /// assert!(Range::try_new(last, first).is_none());
    /// ```
    #[inline]
    pub fn try_new(first: I, last: I) -> Option<Self> {
        if first <= last {
            Some(Self { first, last })
        } else {
            None
        }
    }

    /// Number of positions between the bounds.
    #[inline]
    pub fn len(&self) -> I::Distance {
        self.last.offset_from(&self.first)
    }
}

impl<I, S> IntoRange for Range<I, S>
where
    I: WeakInputCursor,
    S: Sentinel<I>,
{
    type Cursor = I;
    type Sentinel = S;

    #[inline]
    fn into_bounds(self) -> (I, S) {
        (self.first, self.last)
    }

    #[inline(always)]
    fn measure(&self) -> Option<I::Distance> {
        self.last.measure(&self.first)
    }
}

impl<I, S> IntoRange for &Range<I, S>
where
    I: WeakInputCursor + Clone,
    S: Sentinel<I> + Clone,
{
    type Cursor = I;
    type Sentinel = S;

    #[inline]
    fn into_bounds(self) -> (I, S) {
        (self.first.clone(), self.last.clone())
    }

    #[inline(always)]
    fn measure(&self) -> Option<I::Distance> {
        self.last.measure(&self.first)
    }
}

impl<I, S> IntoIterator for Range<I, S>
where
    I: WeakInputCursor,
    S: Sentinel<I>,
{
    type Item = I::Item;
    type IntoIter = Walk<I, S>;

    #[inline]
    fn into_iter(self) -> Walk<I, S> {
        Walk::new(self.first, self.last)
    }
}

/// A position into storage that no longer exists.
///
/// The only observable property is the offset from the start of the
/// storage it was computed on.
///
/// # Examples
///
/// ```rust
/// # use strider_core::range::Dangling;
/// let position: Dangling = Dangling::new(3);
/// assert_eq!(position.offset(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dangling<D = isize> {
    offset: D,
}

impl<D: Copy> Dangling<D> {
    /// Creates a dangling position at `offset`.
    #[inline]
    pub const fn new(offset: D) -> Self {
        Self { offset }
    }

    /// Offset from the start of the vanished storage.
    #[inline]
    pub const fn offset(&self) -> D {
        self.offset
    }
}

impl<D: Distance> Dangling<D> {
    /// The dangling counterpart of `position`, measured from `origin`.
    #[inline]
    pub fn between<I>(origin: &I, position: &I) -> Self
    where
        I: RandomAccessCursor<Distance = D>,
    {
        Self::new(position.offset_from(origin))
    }
}

impl<D: Distance> Range<Dangling<D>, Dangling<D>> {
    /// The offsets covered by the vanished subrange.
    #[inline]
    pub fn offsets(&self) -> std::ops::Range<D> {
        self.first.offset..self.last.offset
    }
}

impl<D: std::fmt::Display> std::fmt::Display for Dangling<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dangling@{}", self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::slice::SliceCursor;

    #[test]
    fn test_range_is_empty() {
        let data = [1, 2, 3];
        let (first, last) = SliceCursor::bounds(&data);
        assert!(!Range::new(first, last).is_empty());
        assert!(Range::new(last, last).is_empty());
    }

    #[test]
    fn test_range_len_and_measure() {
        let data = [1, 2, 3, 4, 5];
        let view = Range::new(SliceCursor::at(&data, 1), SliceCursor::at(&data, 4));
        assert_eq!(view.len(), 3);
        assert_eq!(IntoRange::measure(&view), Some(3));
        assert_eq!((&view).into_bounds().0.position(), 1);
    }

    #[test]
    fn test_range_into_iter() {
        let data = ['a', 'b', 'c'];
        let (first, last) = SliceCursor::bounds(&data);
        let collected: String = Range::new(first, last).into_iter().collect();
        assert_eq!(collected, "abc");
    }

    #[test]
    fn test_dangling_between_and_offsets() {
        let data = [1, 2, 3, 4];
        let origin = SliceCursor::begin(&data);
        let lower = Dangling::between(&origin, &SliceCursor::at(&data, 1));
        let upper = Dangling::between(&origin, &SliceCursor::at(&data, 3));
        let vanished = Range::new(lower, upper);
        assert_eq!(vanished.offsets(), 1..3);
        assert_eq!(format!("{}", upper), "dangling@3");
    }

    #[test]
    fn test_try_new_rejects_reversed_bounds() {
        let data = [1];
        let (first, last) = SliceCursor::bounds(&data);
        assert_eq!(Range::try_new(last, first), None);
    }
}
