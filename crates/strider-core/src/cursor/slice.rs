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

//! # Slice Cursors
//!
//! Contiguous cursors over Rust slices.
//!
//! - [`SliceCursor`] reads a shared `&[T]`. It is `Copy`, contiguous and its
//!   own sized sentinel.
//! - [`SliceMutCursor`] designates a position in an exclusively borrowed
//!   `&mut [T]` and supports [`Permutable`] and moving [`IterMove`]. Clones
//!   alias the same storage, so construction is `unsafe`; the safe range
//!   entry points of the algorithms create and consume them internally.
//!
//! ## Debug checks
//!
//! Comparing or measuring cursors taken from different slices is a
//! precondition violation and is asserted in debug builds.

use crate::{
    cursor::{
        category::Contiguous,
        sentinel::{Sentinel, SizedSentinel},
        tier::{
            BidirectionalCursor, ContiguousCursor, ForwardCursor, InputCursor, IterMove,
            Permutable, RandomAccessCursor, Readable, WeakInputCursor,
        },
    },
    range::{IntoRange, PermutableRange, SizedRange},
};
use std::{cmp::Ordering, marker::PhantomData, ptr::NonNull};

#[inline(always)]
fn shifted(pos: usize, n: isize, len: usize) -> usize {
    let target = pos as isize + n;
    debug_assert!(
        target >= 0 && target as usize <= len,
        "cursor moved outside of its slice: {} + {} not in [0, {}]",
        pos,
        n,
        len
    );
    target as usize
}

/// A read-only contiguous cursor over `&'a [T]`.
///
/// # Examples
///
/// ```rust
/// # use strider_core::cursor::{slice::SliceCursor, tier::{Readable, WeakInputCursor}};
/// let data = [10, 20, 30];
/// let mut cursor = SliceCursor::begin(&data);
/// cursor.step();
/// assert_eq!(*cursor.read(), 20);
/// assert_eq!(cursor.position(), 1);
/// ```
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor designating the first element.
    #[inline]
    pub const fn begin(slice: &'a [T]) -> Self {
        Self { slice, pos: 0 }
    }

    /// Cursor designating the past-the-end position.
    #[inline]
    pub const fn end(slice: &'a [T]) -> Self {
        Self {
            slice,
            pos: slice.len(),
        }
    }

    /// Cursor designating index `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > slice.len()`.
    #[inline]
    pub fn at(slice: &'a [T], pos: usize) -> Self {
        assert!(
            pos <= slice.len(),
            "cursor position {} out of bounds for a slice of length {}",
            pos,
            slice.len()
        );
        Self { slice, pos }
    }

    /// Begin and end cursors of `slice`.
    #[inline]
    pub const fn bounds(slice: &'a [T]) -> (Self, Self) {
        (Self::begin(slice), Self::end(slice))
    }

    /// Index of the designated position.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// The whole underlying slice.
    #[inline]
    pub const fn source(&self) -> &'a [T] {
        self.slice
    }

    #[inline(always)]
    fn debug_assert_same_source(&self, other: &Self) {
        debug_assert!(
            std::ptr::eq(self.slice.as_ptr(), other.slice.as_ptr())
                && self.slice.len() == other.slice.len(),
            "cursors belong to different slices"
        );
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> std::fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SliceCursor({}/{})", self.pos, self.slice.len())
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.debug_assert_same_source(other);
        self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> PartialOrd for SliceCursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.debug_assert_same_source(other);
        self.pos.partial_cmp(&other.pos)
    }
}

impl<'a, T> Readable for SliceCursor<'a, T> {
    type Value = T;
    type Item = &'a T;

    #[inline]
    fn read(&self) -> &'a T {
        match self.slice.get(self.pos) {
            Some(element) => element,
            None => panic!("read past the end of a slice of length {}", self.slice.len()),
        }
    }
}

impl<T> WeakInputCursor for SliceCursor<'_, T> {
    type Distance = isize;
    type Category = Contiguous;

    #[inline]
    fn step(&mut self) {
        debug_assert!(self.pos < self.slice.len(), "stepped past the end of a slice");
        self.pos += 1;
    }

    #[inline]
    fn advance(&mut self, n: isize) {
        self.jump(n);
    }
}

impl<T> InputCursor for SliceCursor<'_, T> {}

impl<T> ForwardCursor for SliceCursor<'_, T> {}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline]
    fn step_back(&mut self) {
        debug_assert!(self.pos > 0, "stepped before the start of a slice");
        self.pos -= 1;
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    #[inline]
    fn jump(&mut self, n: isize) {
        self.pos = shifted(self.pos, n, self.slice.len());
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        self.debug_assert_same_source(origin);
        self.pos as isize - origin.pos as isize
    }
}

impl<T> ContiguousCursor for SliceCursor<'_, T> {
    type Element = T;

    #[inline]
    fn as_ptr(&self) -> *const T {
        self.slice.as_ptr().wrapping_add(self.pos)
    }
}

impl<T: Clone> IterMove for SliceCursor<'_, T> {
    type Moved = T;

    #[inline]
    fn iter_move(&self) -> T {
        self.read().clone()
    }
}

impl<T> Sentinel<SliceCursor<'_, T>> for SliceCursor<'_, T> {
    #[inline]
    fn is_end(&self, cursor: &SliceCursor<'_, T>) -> bool {
        self.pos == cursor.pos
    }

    #[inline(always)]
    fn measure(&self, first: &SliceCursor<'_, T>) -> Option<isize> {
        Some(self.distance_from(first))
    }
}

impl<T> SizedSentinel<SliceCursor<'_, T>> for SliceCursor<'_, T> {
    #[inline]
    fn distance_from(&self, first: &SliceCursor<'_, T>) -> isize {
        self.pos as isize - first.pos as isize
    }
}

macro_rules! impl_shared_slice_range {
    ($($ty:ty => [$($gen:tt)*]),* $(,)?) => {
        $(
            impl<'a, T $($gen)*> IntoRange for &'a $ty {
                type Cursor = SliceCursor<'a, T>;
                type Sentinel = SliceCursor<'a, T>;

                #[inline]
                fn into_bounds(self) -> (Self::Cursor, Self::Sentinel) {
                    SliceCursor::bounds(&self[..])
                }

                #[inline(always)]
                fn measure(&self) -> Option<isize> {
                    Some(self.len() as isize)
                }
            }

            impl<'a, T $($gen)*> SizedRange for &'a $ty {
                #[inline]
                fn size(&self) -> isize {
                    self.len() as isize
                }
            }
        )*
    };
}

impl_shared_slice_range!(
    [T] => [],
    Vec<T> => [],
    [T; N] => [, const N: usize],
);

/// A permutable contiguous cursor over an exclusively borrowed slice.
///
/// All clones of a cursor designate positions in the same storage. Reads
/// return `&'a T`; a reference obtained that way must not be alive while
/// another clone swaps or moves the same element. That rule is the safety
/// contract of [`SliceMutCursor::bounds`].
pub struct SliceMutCursor<'a, T> {
    base: NonNull<T>,
    len: usize,
    pos: usize,
    _marker: PhantomData<&'a mut [T]>,
}

impl<'a, T> SliceMutCursor<'a, T> {
    /// Begin and end cursors of `slice`.
    ///
    /// # Safety
    ///
    /// The returned cursors and all their clones alias `slice`. The caller
    /// must not hold a reference produced by [`Readable::read`] across a
    /// call to [`Permutable::iter_swap`] or [`IterMove::iter_move`] that
    /// touches the same element.
    #[inline]
    pub unsafe fn bounds(slice: &'a mut [T]) -> (Self, Self) {
        let len = slice.len();
        let base = NonNull::from(slice).cast::<T>();
        let first = Self {
            base,
            len,
            pos: 0,
            _marker: PhantomData,
        };
        let last = Self {
            base,
            len,
            pos: len,
            _marker: PhantomData,
        };
        (first, last)
    }

    /// Index of the designated position.
    #[inline]
    pub const fn position(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    fn element_ptr(&self) -> *mut T {
        assert!(
            self.pos < self.len,
            "accessed past the end of a slice of length {}",
            self.len
        );
        // SAFETY: `pos < len`, so the offset stays inside the borrowed slice.
        unsafe { self.base.as_ptr().add(self.pos) }
    }

    #[inline(always)]
    fn debug_assert_same_source(&self, other: &Self) {
        debug_assert!(
            self.base == other.base && self.len == other.len,
            "cursors belong to different slices"
        );
    }
}

impl<T> Clone for SliceMutCursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            base: self.base,
            len: self.len,
            pos: self.pos,
            _marker: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for SliceMutCursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SliceMutCursor({}/{})", self.pos, self.len)
    }
}

impl<T> PartialEq for SliceMutCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.debug_assert_same_source(other);
        self.pos == other.pos
    }
}

impl<T> Eq for SliceMutCursor<'_, T> {}

impl<T> PartialOrd for SliceMutCursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.debug_assert_same_source(other);
        self.pos.partial_cmp(&other.pos)
    }
}

impl<'a, T> Readable for SliceMutCursor<'a, T> {
    type Value = T;
    type Item = &'a T;

    #[inline]
    fn read(&self) -> &'a T {
        // SAFETY: the pointer is in bounds and the construction contract
        // forbids keeping this reference across a mutation of the element.
        unsafe { &*self.element_ptr() }
    }
}

impl<T> WeakInputCursor for SliceMutCursor<'_, T> {
    type Distance = isize;
    type Category = Contiguous;

    #[inline]
    fn step(&mut self) {
        debug_assert!(self.pos < self.len, "stepped past the end of a slice");
        self.pos += 1;
    }

    #[inline]
    fn advance(&mut self, n: isize) {
        self.jump(n);
    }
}

impl<T> InputCursor for SliceMutCursor<'_, T> {}

impl<T> ForwardCursor for SliceMutCursor<'_, T> {}

impl<T> BidirectionalCursor for SliceMutCursor<'_, T> {
    #[inline]
    fn step_back(&mut self) {
        debug_assert!(self.pos > 0, "stepped before the start of a slice");
        self.pos -= 1;
    }
}

impl<T> RandomAccessCursor for SliceMutCursor<'_, T> {
    #[inline]
    fn jump(&mut self, n: isize) {
        self.pos = shifted(self.pos, n, self.len);
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        self.debug_assert_same_source(origin);
        self.pos as isize - origin.pos as isize
    }
}

impl<T> ContiguousCursor for SliceMutCursor<'_, T> {
    type Element = T;

    #[inline]
    fn as_ptr(&self) -> *const T {
        self.base.as_ptr().wrapping_add(self.pos)
    }
}

impl<T> Permutable for SliceMutCursor<'_, T> {
    #[inline]
    fn iter_swap(&self, other: &Self) {
        self.debug_assert_same_source(other);
        let a = self.element_ptr();
        let b = other.element_ptr();
        // SAFETY: both pointers are in bounds of the same borrowed slice;
        // `ptr::swap` permits `a == b`.
        unsafe { std::ptr::swap(a, b) }
    }
}

impl<T: Default> IterMove for SliceMutCursor<'_, T> {
    type Moved = T;

    #[inline]
    fn iter_move(&self) -> T {
        let placeholder = T::default();
        // SAFETY: in bounds; the element is replaced by a valid value.
        unsafe { std::ptr::replace(self.element_ptr(), placeholder) }
    }
}

impl<T> Sentinel<SliceMutCursor<'_, T>> for SliceMutCursor<'_, T> {
    #[inline]
    fn is_end(&self, cursor: &SliceMutCursor<'_, T>) -> bool {
        self.pos == cursor.pos
    }

    #[inline(always)]
    fn measure(&self, first: &SliceMutCursor<'_, T>) -> Option<isize> {
        Some(self.distance_from(first))
    }
}

impl<T> SizedSentinel<SliceMutCursor<'_, T>> for SliceMutCursor<'_, T> {
    #[inline]
    fn distance_from(&self, first: &SliceMutCursor<'_, T>) -> isize {
        self.pos as isize - first.pos as isize
    }
}

macro_rules! impl_permutable_slice_range {
    ($($ty:ty => [$($gen:tt)*]),* $(,)?) => {
        $(
            impl<'a, T $($gen)*> PermutableRange for &'a mut $ty {
                type Cursor = SliceMutCursor<'a, T>;
                type Sentinel = SliceMutCursor<'a, T>;

                #[inline]
                unsafe fn permutable_bounds(self) -> (Self::Cursor, Self::Sentinel) {
                    // SAFETY: forwarded to the caller.
                    unsafe { SliceMutCursor::bounds(&mut self[..]) }
                }
            }
        )*
    };
}

impl_permutable_slice_range!(
    [T] => [],
    Vec<T> => [],
    [T; N] => [, const N: usize],
);
