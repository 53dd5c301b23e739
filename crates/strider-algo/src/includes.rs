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

//! # Includes
//!
//! Tests whether every element of one sorted sequence is matched by an
//! element of another, with both sorted by the same strict weak order.
//! A single merge-style pass; each side has its own projection.

use strider_core::{
    callable::{Projection, StrictWeakOrder, project, relate, wrap},
    cursor::{InputCursor, Readable, Sentinel, SliceCursor},
    range::{IntoRange, Range},
};

enum Step {
    Mismatch,
    Matched,
    Skipped,
}

/// Returns `true` if the sorted `[first2, last2)` is a subsequence (by
/// equivalence) of the sorted `[first1, last1)`.
///
/// # Examples
///
/// ```rust
/// # use strider_algo::includes::includes;
/// # use strider_core::{callable::{Identity, Less}, cursor::SliceCursor};
/// let haystack = [1, 2, 3, 4, 5];
/// let needles = [2, 4];
/// let (f1, l1) = SliceCursor::bounds(&haystack);
/// let (f2, l2) = SliceCursor::bounds(&needles);
/// assert!(includes(f1, l1, f2, l2, Less, Identity, Identity));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn includes<I1, S1, I2, S2, C, P1, P2>(
    first1: I1,
    last1: S1,
    first2: I2,
    last2: S2,
    comp: C,
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
    C: StrictWeakOrder<P1::Output, P2::Output>,
{
    let (mut comp, mut proj1, mut proj2) = (wrap(comp), wrap(proj1), wrap(proj2));
    let (mut first1, mut first2) = (first1, first2);
    loop {
        if last2.is_end(&first2) {
            return true;
        }
        if last1.is_end(&first1) {
            return false;
        }
        let step = project(&mut proj1, &first1, |e1| {
            project(&mut proj2, &first2, |e2| {
                if relate(&mut comp, e2, e1) {
                    Step::Mismatch
                } else if !relate(&mut comp, e1, e2) {
                    Step::Matched
                } else {
                    Step::Skipped
                }
            })
        });
        match step {
            Step::Mismatch => return false,
            Step::Matched => first2.step(),
            Step::Skipped => {}
        }
        first1.step();
    }
}

/// [`includes`] over two ranges.
pub fn includes_in<R1, R2, C, P1, P2>(rng1: R1, rng2: R2, comp: C, proj1: P1, proj2: P2) -> bool
where
    R1: IntoRange,
    R2: IntoRange,
    R1::Cursor: InputCursor,
    R2::Cursor: InputCursor,
    P1: Projection<<R1::Cursor as Readable>::Value>,
    P2: Projection<<R2::Cursor as Readable>::Value>,
    C: StrictWeakOrder<P1::Output, P2::Output>,
{
    let (first1, last1) = rng1.into_bounds();
    let (first2, last2) = rng2.into_bounds();
    includes(first1, last1, first2, last2, comp, proj1, proj2)
}

/// [`includes`] with an owned array literal as the first sequence.
pub fn includes_list<E, const N: usize, R2, C, P1, P2>(
    list: [E; N],
    rng2: R2,
    comp: C,
    proj1: P1,
    proj2: P2,
) -> bool
where
    R2: IntoRange,
    R2::Cursor: InputCursor,
    P1: Projection<E>,
    P2: Projection<<R2::Cursor as Readable>::Value>,
    C: StrictWeakOrder<P1::Output, P2::Output>,
{
    let (first1, last1) = SliceCursor::bounds(&list);
    includes_in(Range::new(first1, last1), rng2, comp, proj1, proj2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_core::{
        callable::{Greater, Identity, Less, by_ref},
        instrument::Counted,
    };

    #[test]
    fn test_includes_scenario() {
        assert!(includes_in(&[1, 2, 3, 4, 5], &[2, 4], Less, Identity, Identity));
        assert!(!includes_in(&[1, 2, 3], &[2, 4], Less, Identity, Identity));
    }

    #[test]
    fn test_includes_empty_sequences() {
        let empty: [i32; 0] = [];
        assert!(includes_in(&[1, 2], &empty, Less, Identity, Identity));
        assert!(includes_in(&empty, &empty, Less, Identity, Identity));
        assert!(!includes_in(&empty, &[1], Less, Identity, Identity));
    }

    #[test]
    fn test_includes_duplicates_need_their_own_match() {
        assert!(includes_in(&[1, 2, 2, 3], &[2, 2], Less, Identity, Identity));
        assert!(!includes_in(&[1, 2, 3], &[2, 2], Less, Identity, Identity));
    }

    #[test]
    fn test_includes_descending_order() {
        assert!(includes_in(&[9, 7, 5, 3], &[7, 3], Greater, Identity, Identity));
        assert!(!includes_in(&[9, 7, 5, 3], &[8], Greater, Identity, Identity));
    }

    #[test]
    fn test_includes_with_projections() {
        let people = [("ada", 36u32), ("grace", 45), ("linus", 54)];
        let ages = [36u32, 54];
        let age = |p: &(&str, u32)| p.1;
        assert!(includes_in(&people, &ages, Less, age, Identity));
    }

    #[test]
    fn test_includes_list_matches_owned() {
        let needles = vec![3, 5];
        assert_eq!(
            includes_list([1, 3, 5, 7], &needles, Less, Identity, Identity),
            includes_in(&vec![1, 3, 5, 7], &needles, Less, Identity, Identity)
        );
    }

    #[test]
    fn test_includes_stops_at_first_mismatch() {
        let mut comp = Counted::new(Less);
        assert!(!includes_in(&[1, 3], &[2], by_ref(&mut comp), Identity, Identity));
        // 1 vs 2: two comparisons; 3 vs 2: comp(2, 3) holds.
        assert_eq!(comp.calls(), 3);
    }
}
