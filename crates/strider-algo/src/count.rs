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

//! # Count
//!
//! Counts the elements whose projection compares equal to a value. A single
//! pass over an input sequence; every element is visited.

use strider_core::{
    callable::{Projection, project, wrap},
    cursor::{InputCursor, Readable, Sentinel, SliceCursor, WeakInputCursor},
    range::IntoRange,
};

/// Counts the elements of `[first, last)` whose projection equals `value`.
///
/// # Examples
///
/// ```rust
/// # use strider_algo::count::count;
/// # use strider_core::{callable::Identity, cursor::SliceCursor};
/// let primes = [2, 3, 5, 7, 11, 13];
/// let (first, last) = SliceCursor::bounds(&primes);
/// assert_eq!(count(first, last, &5, Identity), 1);
/// ```
pub fn count<I, S, T, P>(first: I, last: S, value: &T, proj: P) -> I::Distance
where
    I: InputCursor,
    S: Sentinel<I>,
    T: ?Sized,
    P: Projection<I::Value>,
    P::Output: PartialEq<T>,
{
    let mut proj = wrap(proj);
    let mut first = first;
    let mut n: I::Distance = num_traits::zero();
    while !last.is_end(&first) {
        if project(&mut proj, &first, |pv| pv == value) {
            n = n + num_traits::one();
        }
        first.step();
    }
    n
}

/// [`count`] over a range.
pub fn count_in<R, T, P>(rng: R, value: &T, proj: P) -> <R::Cursor as WeakInputCursor>::Distance
where
    R: IntoRange,
    R::Cursor: InputCursor,
    T: ?Sized,
    P: Projection<<R::Cursor as Readable>::Value>,
    P::Output: PartialEq<T>,
{
    let (first, last) = rng.into_bounds();
    count(first, last, value, proj)
}

/// [`count`] over an owned array literal.
pub fn count_list<E, const N: usize, T, P>(list: [E; N], value: &T, proj: P) -> isize
where
    T: ?Sized,
    P: Projection<E>,
    P::Output: PartialEq<T>,
{
    let (first, last) = SliceCursor::bounds(&list);
    count(first, last, value, proj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strider_core::{
        callable::{Identity, by_ref},
        instrument::Counted,
    };
    use strider_iter::{
        repeat_n::RepeatN,
        stream::{ByteStreamCursor, EndOfStream},
    };

    #[test]
    fn test_count_scenario() {
        assert_eq!(count_in(&[2, 3, 5, 7, 11, 13], &5, Identity), 1);
        assert_eq!(count_list([2, 3, 5, 7, 11, 13], &4, Identity), 0);
    }

    #[test]
    fn test_count_repeat_n() {
        let zeros = RepeatN::new(0, 4);
        assert_eq!(count_in(&zeros, &0, Identity), 4);
    }

    #[test]
    fn test_count_with_projection() {
        let words = ["apple", "avocado", "banana", "apricot"];
        let initial = |w: &&str| w.as_bytes()[0];
        assert_eq!(count_in(&words, &b'a', initial), 3);
    }

    #[test]
    fn test_count_is_idempotent() {
        let data = vec![1, 1, 2, 1];
        let once = count_in(&data, &1, Identity);
        let twice = count_in(&data, &1, Identity);
        assert_eq!(once, 3);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_count_over_byte_stream() {
        let cursor = ByteStreamCursor::new(Cursor::new(b"mississippi".to_vec()));
        assert_eq!(count(cursor, EndOfStream, &b's', Identity), 4i64);
    }

    #[test]
    fn test_count_projects_every_element_once() {
        let data = [3, 1, 3];
        let mut proj = Counted::new(Identity);
        assert_eq!(count_in(&data, &3, by_ref(&mut proj)), 2);
        assert_eq!(proj.calls(), 3);
    }

    #[test]
    fn test_count_of_unsized_value() {
        let names = [String::from("x"), String::from("yy"), String::from("x")];
        let as_str = |s: &String| s.clone();
        assert_eq!(count_in(&names, "x", as_str), 2);
    }
}
