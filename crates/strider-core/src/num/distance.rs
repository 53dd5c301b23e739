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

//! # Cursor Distances
//!
//! Every cursor names the signed integer type used to measure how far apart
//! two of its positions are. `Distance` collects the bounds the algorithms
//! rely on into one alias, in the same way the solver crates collect their
//! numeric bounds, and adds a handful of by-value helpers that the probing
//! and bisection strategies need.
//!
//! ## Highlights
//!
//! - Requires `PrimInt + Signed` from `num_traits` for arithmetic and
//!   comparisons, plus `Debug`/`Display` for diagnostics.
//! - `half` bisects a non-negative length.
//! - `double_saturating` grows an exponential probe step without overflowing.
//! - `to_index`/`from_index` convert between distances and slice indices.
//!
//! Implemented for all signed primitive integers.

use num_traits::{PrimInt, Signed};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A signed integer type measuring the distance between two cursor positions.
///
/// # Examples
///
/// ```rust
/// # use strider_core::num::distance::Distance;
/// assert_eq!(9isize.half(), 4);
/// assert_eq!(i8::MAX.double_saturating(), i8::MAX);
/// assert_eq!(7i64.to_index(), 7usize);
/// assert_eq!(i32::from_index(12), 12);
/// ```
pub trait Distance: PrimInt + Signed + Debug + Display + Hash + Default {
    /// Halves a non-negative distance, rounding towards zero.
    fn half(self) -> Self;

    /// Doubles the distance, clamping to the maximum value of the type.
    fn double_saturating(self) -> Self;

    /// Converts a non-negative distance into an index.
    fn to_index(self) -> usize;

    /// Converts an index into a distance.
    fn from_index(index: usize) -> Self;
}

macro_rules! impl_distance {
    ($($t:ty),* $(,)?) => {
        $(
            impl Distance for $t {
                #[inline(always)]
                fn half(self) -> Self {
                    debug_assert!(self >= 0, "called `half` on a negative distance");
                    self >> 1
                }

                #[inline(always)]
                fn double_saturating(self) -> Self {
                    self.saturating_add(self)
                }

                #[inline(always)]
                fn to_index(self) -> usize {
                    debug_assert!(self >= 0, "called `to_index` on a negative distance");
                    self as usize
                }

                #[inline(always)]
                fn from_index(index: usize) -> Self {
                    debug_assert!(
                        index <= <$t>::MAX as usize,
                        "index does not fit into the distance type"
                    );
                    index as $t
                }
            }
        )*
    };
}

impl_distance!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_rounds_towards_zero() {
        assert_eq!(0isize.half(), 0);
        assert_eq!(1isize.half(), 0);
        assert_eq!(7i32.half(), 3);
        assert_eq!(8i64.half(), 4);
    }

    #[test]
    fn test_double_saturating_clamps() {
        assert_eq!(1i16.double_saturating(), 2);
        assert_eq!(0x4000i16.double_saturating(), i16::MAX);
        assert_eq!(isize::MAX.double_saturating(), isize::MAX);
    }

    #[test]
    fn test_index_conversions() {
        assert_eq!(42isize.to_index(), 42);
        assert_eq!(i8::from_index(127), 127);
        assert_eq!(i64::from_index(0), 0);
    }

    #[test]
    #[should_panic(expected = "negative distance")]
    #[cfg(debug_assertions)]
    fn test_to_index_rejects_negative_in_debug() {
        let _ = (-1isize).to_index();
    }
}
