//! Property-based tests for slice cursors, bounded advancement and walks.

use proptest::prelude::*;

use strider_core::cursor::ops::{advance_bounded, distance};
use strider_core::cursor::{RandomAccessCursor, SliceCursor, Unreachable};
use strider_core::iter::walk;
use strider_core::range::{Dangling, Range};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn walk_matches_slice_iteration(data in prop::collection::vec(any::<i32>(), 0..64)) {
        let (first, last) = SliceCursor::bounds(&data);
        let walked: Vec<i32> = walk(first, last).copied().collect();
        prop_assert_eq!(walked, data);
    }

    #[test]
    fn advance_bounded_never_passes_the_end(len in 0usize..64, n in 0isize..128) {
        let data = vec![0u8; len];
        let (mut first, last) = SliceCursor::bounds(&data);
        let remaining = advance_bounded(&mut first, n, &last);

        let taken = n.min(len as isize);
        prop_assert_eq!(first.position() as isize, taken);
        prop_assert_eq!(remaining, n - taken);
    }

    #[test]
    fn sized_and_unsized_advance_agree(n in 0isize..32) {
        let data = vec![1u8; 64];
        let mut sized = SliceCursor::begin(&data);
        let mut unbounded = SliceCursor::begin(&data);
        let last = SliceCursor::end(&data);

        prop_assert_eq!(advance_bounded(&mut sized, n, &last), 0);
        prop_assert_eq!(advance_bounded(&mut unbounded, n, &Unreachable), 0);
        prop_assert_eq!(sized, unbounded);
    }

    #[test]
    fn distance_matches_offset(len in 0usize..64, start in 0usize..64) {
        let data = vec![0u16; len];
        let start = start.min(len);
        let first = SliceCursor::at(&data, start);
        let last = SliceCursor::end(&data);
        prop_assert_eq!(distance(first, &last), last.offset_from(&first));
    }

    #[test]
    fn dangling_offsets_match_positions(len in 1usize..32, a in 0usize..32, b in 0usize..32) {
        let data = vec![0i8; len];
        let (lo, hi) = (a.min(b).min(len), a.max(b).min(len));
        let origin = SliceCursor::begin(&data);
        let lower = Dangling::between(&origin, &SliceCursor::at(&data, lo));
        let upper = Dangling::between(&origin, &SliceCursor::at(&data, hi));
        prop_assert_eq!(Range::new(lower, upper).offsets(), lo as isize..hi as isize);
    }
}
