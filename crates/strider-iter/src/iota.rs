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

//! # Iota
//!
//! `Iota<D>` designates an integer and reads it by value; stepping
//! increments it. Paired with `Unreachable` it is an infinite sorted
//! sequence, the canonical input for algorithms that must terminate without
//! knowing the length.
//!
//! ```rust
//! # use strider_core::{cursor::Unreachable, iter::walk};
//! # use strider_iter::iota::Iota;
//! let squares: Vec<i64> = walk(Iota::new(1i64), Unreachable).map(|x| x * x).take(4).collect();
//! assert_eq!(squares, vec![1, 4, 9, 16]);
//! ```

use strider_core::{
    cursor::{
        BidirectionalCursor, ForwardCursor, InputCursor, IterMove, RandomAccess,
        RandomAccessCursor, Readable, Sentinel, SizedSentinel, WeakInputCursor,
    },
    num::distance::Distance,
    range::Range,
};

/// A random-access cursor over the integers of type `D`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iota<D> {
    value: D,
}

impl<D: Distance> Iota<D> {
    /// Cursor designating `value`.
    #[inline]
    pub const fn new(value: D) -> Self {
        Self { value }
    }

    /// The designated integer.
    #[inline]
    pub const fn value(&self) -> D {
        self.value
    }
}

impl<D: Distance> Readable for Iota<D> {
    type Value = D;
    type Item = D;

    #[inline]
    fn read(&self) -> D {
        self.value
    }
}

impl<D: Distance> WeakInputCursor for Iota<D> {
    type Distance = D;
    type Category = RandomAccess;

    #[inline]
    fn step(&mut self) {
        self.value = self.value + D::one();
    }

    #[inline]
    fn advance(&mut self, n: D) {
        self.jump(n);
    }
}

impl<D: Distance> InputCursor for Iota<D> {}

impl<D: Distance> ForwardCursor for Iota<D> {}

impl<D: Distance> BidirectionalCursor for Iota<D> {
    #[inline]
    fn step_back(&mut self) {
        self.value = self.value - D::one();
    }
}

impl<D: Distance> RandomAccessCursor for Iota<D> {
    #[inline]
    fn jump(&mut self, n: D) {
        self.value = self.value + n;
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> D {
        self.value - origin.value
    }
}

impl<D: Distance> IterMove for Iota<D> {
    type Moved = D;

    #[inline]
    fn iter_move(&self) -> D {
        self.value
    }
}

impl<D: Distance> Sentinel<Iota<D>> for Iota<D> {
    #[inline]
    fn is_end(&self, cursor: &Iota<D>) -> bool {
        self.value == cursor.value
    }

    #[inline(always)]
    fn measure(&self, first: &Iota<D>) -> Option<D> {
        Some(self.distance_from(first))
    }
}

impl<D: Distance> SizedSentinel<Iota<D>> for Iota<D> {
    #[inline]
    fn distance_from(&self, first: &Iota<D>) -> D {
        self.value - first.value
    }
}

/// The integers in `[start, end)` as a sized view.
///
/// # Panics
///
/// Panics if `start > end`.
#[inline]
pub fn iota_range<D: Distance>(start: D, end: D) -> Range<Iota<D>> {
    assert!(start <= end, "invalid iota bounds: {} > {}", start, end);
    Range::new(Iota::new(start), Iota::new(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_core::{cursor::ops::distance, range::IntoRange};

    #[test]
    fn test_iota_steps_and_jumps() {
        let mut cursor = Iota::new(5i32);
        cursor.step();
        assert_eq!(cursor.read(), 6);
        cursor.jump(-4);
        assert_eq!(cursor.value(), 2);
        cursor.step_back();
        assert_eq!(cursor.offset_from(&Iota::new(10)), -9);
    }

    #[test]
    fn test_iota_range_is_sized() {
        let view = iota_range(3i64, 8);
        assert_eq!(IntoRange::measure(&view), Some(5));
        let (first, last) = view.into_bounds();
        assert_eq!(distance(first, &last), 5);
        assert_eq!(iota_range(0i16, 3).into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "invalid iota bounds")]
    fn test_iota_range_rejects_reversed_bounds() {
        let _ = iota_range(4isize, 1);
    }
}
