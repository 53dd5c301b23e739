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

//! # Callables
//!
//! Algorithms observe elements through three kinds of user callables:
//!
//! - [`Projection`]: maps an element to the value the other callables see.
//! - [`Predicate`]: a unary test.
//! - [`Relation`]: a binary test; a [`StrictWeakOrder`] is a relation
//!   usable in both argument orders.
//!
//! Closures implement the matching trait automatically, and the zero-sized
//! defaults [`Identity`], [`Less`], [`Greater`] and [`EqualTo`] cover the
//! common cases.
//!
//! ## Composition modes
//!
//! An algorithm holds its callables by value for the duration of one call
//! ([`Wrapper`], created with [`wrap`]). When it delegates to another
//! algorithm it passes a [`RefWrapper`] obtained from [`Wrapper::by_ref`],
//! so the inner call observes and mutates the very same state instead of a
//! copy. Neither mode adds invocations: one projection call per element
//! read, one relation call per comparison.
//!
//! ```rust
//! # use strider_core::callable::{Predicate, by_ref, wrap};
//! let mut calls = 0;
//! let mut is_even = |x: &i32| {
//!     calls += 1;
//!     x % 2 == 0
//! };
//! {
//!     let mut shared = by_ref(&mut is_even);
//!     assert!(shared.test(&4));
//!     assert!(!shared.by_ref().test(&5));
//! }
//! let mut owned = wrap(is_even);
//! assert!(owned.test(&6));
//! drop(owned);
//! assert_eq!(calls, 3);
//! ```
//!
//! Projections are written in continuation-passing style: `project` hands
//! the projected value to a continuation instead of returning it, so a
//! projection may yield a borrow of its input ([`Identity`]) or a fresh
//! value (a closure) through the same interface.

use crate::cursor::tier::{Readable, read_with};

/// Maps an element of type `V` to the value observed by predicates and
/// relations.
pub trait Projection<V: ?Sized> {
    /// The projected type.
    type Output: ?Sized;

    /// Projects `value` and passes the result to `k`.
    fn project<R>(&mut self, value: &V, k: impl FnOnce(&Self::Output) -> R) -> R;
}

/// A unary test.
pub trait Predicate<A: ?Sized> {
    /// Evaluates the predicate.
    fn test(&mut self, value: &A) -> bool;
}

/// A binary test.
pub trait Relation<A: ?Sized, B: ?Sized> {
    /// Evaluates the relation.
    fn relate(&mut self, a: &A, b: &B) -> bool;
}

/// A relation inducing a strict weak ordering, callable with the
/// arguments in either order.
///
/// The ordering axioms (irreflexivity, transitivity, transitivity of
/// incomparability) are semantic requirements and are not checked.
pub trait StrictWeakOrder<A: ?Sized, B: ?Sized = A>: Relation<A, B> + Relation<B, A> {}

impl<R, A, B> StrictWeakOrder<A, B> for R
where
    R: Relation<A, B> + Relation<B, A> + ?Sized,
    A: ?Sized,
    B: ?Sized,
{
}

impl<F, V, U> Projection<V> for F
where
    F: FnMut(&V) -> U,
    V: ?Sized,
{
    type Output = U;

    #[inline(always)]
    fn project<R>(&mut self, value: &V, k: impl FnOnce(&Self::Output) -> R) -> R {
        let projected = (*self)(value);
        k(&projected)
    }
}

impl<F, A> Predicate<A> for F
where
    F: FnMut(&A) -> bool,
    A: ?Sized,
{
    #[inline(always)]
    fn test(&mut self, value: &A) -> bool {
        (*self)(value)
    }
}

impl<F, A, B> Relation<A, B> for F
where
    F: FnMut(&A, &B) -> bool,
    A: ?Sized,
    B: ?Sized,
{
    #[inline(always)]
    fn relate(&mut self, a: &A, b: &B) -> bool {
        (*self)(a, b)
    }
}

/// The identity projection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<V: ?Sized> Projection<V> for Identity {
    type Output = V;

    #[inline(always)]
    fn project<R>(&mut self, value: &V, k: impl FnOnce(&Self::Output) -> R) -> R {
        k(value)
    }
}

/// `a < b`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Less;

impl<A, B> Relation<A, B> for Less
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    #[inline(always)]
    fn relate(&mut self, a: &A, b: &B) -> bool {
        a < b
    }
}

/// `a > b`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Greater;

impl<A, B> Relation<A, B> for Greater
where
    A: PartialOrd<B> + ?Sized,
    B: ?Sized,
{
    #[inline(always)]
    fn relate(&mut self, a: &A, b: &B) -> bool {
        a > b
    }
}

/// `a == b`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EqualTo;

impl<A, B> Relation<A, B> for EqualTo
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    #[inline(always)]
    fn relate(&mut self, a: &A, b: &B) -> bool {
        a == b
    }
}

/// Owning adapter around a callable.
///
/// `Clone` exactly when the callable is; moving the wrapper moves the
/// callable and its state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Wrapper<F> {
    inner: F,
}

impl<F> Wrapper<F> {
    /// Takes ownership of `inner`.
    #[inline]
    pub const fn new(inner: F) -> Self {
        Self { inner }
    }

    /// A non-owning adapter observing the same callable.
    #[inline]
    pub fn by_ref(&mut self) -> RefWrapper<'_, F> {
        RefWrapper::new(&mut self.inner)
    }

    /// The wrapped callable.
    #[inline]
    pub const fn get(&self) -> &F {
        &self.inner
    }

    /// The wrapped callable, mutably.
    #[inline]
    pub fn get_mut(&mut self) -> &mut F {
        &mut self.inner
    }

    /// Releases the wrapped callable.
    #[inline]
    pub fn into_inner(self) -> F {
        self.inner
    }
}

/// Non-owning adapter around a callable borrowed from an outer scope.
#[derive(Debug)]
pub struct RefWrapper<'a, F: ?Sized> {
    inner: &'a mut F,
}

impl<'a, F: ?Sized> RefWrapper<'a, F> {
    /// Borrows `inner`.
    #[inline]
    pub fn new(inner: &'a mut F) -> Self {
        Self { inner }
    }

    /// A shorter-lived adapter observing the same callable.
    #[inline]
    pub fn by_ref(&mut self) -> RefWrapper<'_, F> {
        RefWrapper::new(&mut *self.inner)
    }

    /// The borrowed callable.
    #[inline]
    pub fn get(&self) -> &F {
        &*self.inner
    }
}

/// Wraps `f` in the owning adapter.
#[inline]
pub const fn wrap<F>(f: F) -> Wrapper<F> {
    Wrapper::new(f)
}

/// Wraps a borrowed callable in the non-owning adapter.
#[inline]
pub fn by_ref<F: ?Sized>(f: &mut F) -> RefWrapper<'_, F> {
    RefWrapper::new(f)
}

macro_rules! forward_callables {
    ($($adapter:ty => [$($gen:tt)*]),* $(,)?) => {
        $(
            impl<$($gen)* V> Projection<V> for $adapter
            where
                F: Projection<V>,
                V: ?Sized,
            {
                type Output = F::Output;

                #[inline(always)]
                fn project<R>(&mut self, value: &V, k: impl FnOnce(&Self::Output) -> R) -> R {
                    self.inner.project(value, k)
                }
            }

            impl<$($gen)* A> Predicate<A> for $adapter
            where
                F: Predicate<A>,
                A: ?Sized,
            {
                #[inline(always)]
                fn test(&mut self, value: &A) -> bool {
                    self.inner.test(value)
                }
            }

            impl<$($gen)* A, B> Relation<A, B> for $adapter
            where
                F: Relation<A, B>,
                A: ?Sized,
                B: ?Sized,
            {
                #[inline(always)]
                fn relate(&mut self, a: &A, b: &B) -> bool {
                    self.inner.relate(a, b)
                }
            }
        )*
    };
}

forward_callables!(
    Wrapper<F> => [F,],
    RefWrapper<'_, F> => [F: ?Sized,],
);

/// Projects the element designated by `cursor`, handing the projected value
/// to `k`.
///
/// This is the one indirection point through which every algorithm reads
/// and projects.
#[inline(always)]
pub fn project<I, P, R>(projection: &mut P, cursor: &I, k: impl FnOnce(&P::Output) -> R) -> R
where
    I: Readable,
    P: Projection<I::Value> + ?Sized,
{
    read_with(cursor, |value| projection.project(value, k))
}

/// Evaluates `predicate` on `value`.
#[inline(always)]
pub fn test<P, A>(predicate: &mut P, value: &A) -> bool
where
    P: Predicate<A> + ?Sized,
    A: ?Sized,
{
    predicate.test(value)
}

/// Evaluates `relation` on `(a, b)`.
#[inline(always)]
pub fn relate<C, A, B>(relation: &mut C, a: &A, b: &B) -> bool
where
    C: Relation<A, B> + ?Sized,
    A: ?Sized,
    B: ?Sized,
{
    relation.relate(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::slice::SliceCursor;

    #[test]
    fn test_default_relations() {
        assert!(relate(&mut Less, &1, &2));
        assert!(!relate(&mut Less, &2, &2));
        assert!(relate(&mut Greater, &3, &2));
        assert!(relate(&mut EqualTo, &"a", &"a"));
    }

    #[test]
    fn test_identity_projection_borrows() {
        let text = String::from("strider");
        let len = Identity.project(&text, |s: &String| s.len());
        assert_eq!(len, 7);
    }

    #[test]
    fn test_closure_projection_through_cursor() {
        let data = [(1, 'a'), (2, 'b')];
        let cursor = SliceCursor::at(&data, 1);
        let mut second = |pair: &(i32, char)| pair.1;
        assert_eq!(project(&mut second, &cursor, |c| *c), 'b');
    }

    #[test]
    fn test_ref_wrapper_shares_state() {
        let mut calls = 0u32;
        let mut less = |a: &i32, b: &i32| {
            calls += 1;
            a < b
        };
        let mut outer = by_ref(&mut less);
        assert!(outer.relate(&1, &2));
        {
            let mut inner = outer.by_ref();
            assert!(!inner.relate(&2, &1));
        }
        assert!(outer.relate(&0, &5));
        drop(outer);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_wrapper_clone_is_independent() {
        let counter = {
            let mut n = 0;
            move |_: &i32| {
                n += 1;
                n
            }
        };
        let mut a = wrap(counter);
        let mut b = a.clone();
        assert_eq!(a.project(&0, |v| *v), 1);
        assert_eq!(a.project(&0, |v| *v), 2);
        assert_eq!(b.project(&0, |v| *v), 1);
    }

    #[test]
    fn test_wrapper_by_ref_continues_state() {
        let counter = {
            let mut n = 0;
            move |_: &i32| {
                n += 1;
                n
            }
        };
        let mut owned = wrap(counter);
        assert_eq!(owned.by_ref().project(&0, |v| *v), 1);
        assert_eq!(owned.project(&0, |v| *v), 2);
    }

    #[test]
    fn test_strict_weak_order_is_blanket() {
        fn order<C: StrictWeakOrder<i32>>(mut c: C) -> bool {
            relate(&mut c, &1, &2)
        }
        assert!(order(Less));
        assert!(order(|a: &i32, b: &i32| a < b));
    }
}
