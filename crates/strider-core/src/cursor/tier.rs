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

//! # Capability Tiers
//!
//! The traits in this module describe what a cursor can do. A cursor is a
//! self-contained position: it knows how to read the element it designates
//! and how to move. Algorithms name the weakest tier they need and nothing
//! more.
//!
//! ```text
//! Readable
//!   └─ WeakInputCursor        step, advance, Distance, Category
//!        └─ InputCursor
//!             └─ ForwardCursor          Clone + PartialEq (multi-pass)
//!                  └─ BidirectionalCursor   step_back
//!                       └─ RandomAccessCursor   jump, offset_from, PartialOrd
//!                            └─ ContiguousCursor  as_ptr
//! ```
//!
//! Every tier is declared explicitly by each concrete cursor; nothing is
//! derived by blanket impls. Satisfying a stronger tier implies the weaker
//! ones through the supertrait chain.
//!
//! Mutation is layered next to the tiers: `Permutable` exchanges the
//! elements two cursors designate, and `IterMove` extracts the element a
//! cursor designates by value.

use crate::{cursor::category::Category, num::distance::Distance};
use std::borrow::Borrow;

/// A position that can read the element it designates.
///
/// `Item` is what a read produces (a reference for borrowed storage, a value
/// for generated or moved elements); it always borrows as `Value`, which is
/// what projections and comparators observe.
pub trait Readable {
    /// The element type observed by projections.
    type Value: ?Sized;
    /// The result of a read.
    type Item: Borrow<Self::Value>;

    /// Reads the designated element.
    ///
    /// # Panics
    ///
    /// Reading a past-the-end position is a precondition violation; cursors
    /// over finite storage panic.
    fn read(&self) -> Self::Item;
}

/// A move-only cursor that can step forward.
pub trait WeakInputCursor: Readable {
    /// Signed type measuring the distance between two positions.
    type Distance: Distance;
    /// Declared traversal strength.
    type Category: Category;

    /// Moves to the next position.
    fn step(&mut self);

    /// Moves `n` positions forward. `n` must be non-negative.
    ///
    /// Random-access cursors override this with a constant-time jump.
    #[inline]
    fn advance(&mut self, n: Self::Distance) {
        let zero: Self::Distance = num_traits::zero();
        debug_assert!(n >= zero, "called `advance` with a negative count");

        let mut remaining = n;
        while remaining > zero {
            self.step();
            remaining = remaining - num_traits::one();
        }
    }
}

/// A single-pass input cursor.
pub trait InputCursor: WeakInputCursor {}

/// A multi-pass cursor: copies designate the same element and compare equal.
pub trait ForwardCursor: InputCursor + Clone + PartialEq {}

/// A forward cursor that can also step backward.
pub trait BidirectionalCursor: ForwardCursor {
    /// Moves to the previous position.
    fn step_back(&mut self);
}

/// A bidirectional cursor with constant-time jumps and distances.
pub trait RandomAccessCursor: BidirectionalCursor + PartialOrd {
    /// Moves by `n` positions; negative values move backward.
    fn jump(&mut self, n: Self::Distance);

    /// Returns the signed distance from `origin` to `self`.
    fn offset_from(&self, origin: &Self) -> Self::Distance;
}

/// A random-access cursor whose elements are adjacent in memory.
pub trait ContiguousCursor: RandomAccessCursor {
    /// The stored element type.
    type Element;

    /// Returns a raw pointer to the designated element.
    fn as_ptr(&self) -> *const Self::Element;
}

/// Extraction of the designated element by value.
///
/// Cursors over exclusively borrowed storage move the element out and leave
/// a valid placeholder behind; cursors over shared storage clone.
pub trait IterMove: WeakInputCursor {
    /// The extracted value.
    type Moved;

    /// Extracts the designated element.
    fn iter_move(&self) -> Self::Moved;
}

/// Exchange of the elements designated by two positions of the same
/// sequence.
pub trait Permutable: ForwardCursor {
    /// Swaps the element at `self` with the element at `other`.
    ///
    /// Swapping a position with itself is a no-op.
    fn iter_swap(&self, other: &Self);
}

/// Reads through `cursor` and hands the borrowed value to `k`.
///
/// This is the single place where an `Item` is turned into the `Value`
/// observed by callables; [`project`](crate::callable::project) reads
/// through it.
#[inline(always)]
pub fn read_with<I, R>(cursor: &I, k: impl FnOnce(&I::Value) -> R) -> R
where
    I: Readable,
{
    let item = cursor.read();
    k(<I::Item as Borrow<I::Value>>::borrow(&item))
}
