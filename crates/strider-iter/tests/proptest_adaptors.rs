//! Property-based tests for the cursor adaptors.

use proptest::prelude::*;

use std::io::Cursor;
use strider_core::cursor::{SizedSentinel, SliceCursor, SliceMutCursor, WeakInputCursor};
use strider_core::iter::walk;
use strider_iter::counted::counted;
use strider_iter::forward_only::forward_only;
use strider_iter::iota::{Iota, iota_range};
use strider_iter::move_cursor::{make_move_cursor, make_move_sentinel};
use strider_iter::repeat_n::RepeatN;
use strider_iter::stream::{ByteStreamCursor, EndOfStream};

/// A sized sentinel must select the counted strategies: its measure is the
/// exact distance.
fn measures_exactly<I, S>(first: &I, last: &S) -> bool
where
    I: WeakInputCursor,
    S: SizedSentinel<I>,
{
    last.measure(first) == Some(last.distance_from(first))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn counted_prefix_matches_slice_prefix(data in prop::collection::vec(any::<u32>(), 0..64), n in 0usize..64) {
        let n = n.min(data.len());
        let (first, last) = counted(SliceCursor::begin(&data), n as isize);
        let prefix: Vec<u32> = walk(first, last).copied().collect();
        prop_assert_eq!(&prefix[..], &data[..n]);
    }

    #[test]
    fn move_cursor_drains_every_element(data in prop::collection::vec(".{0,8}", 0..32)) {
        let mut source = data.clone();
        // SAFETY: reads go through `iter_move` only.
        let (first, last) = unsafe { SliceMutCursor::bounds(&mut source) };
        let moved: Vec<String> = walk(make_move_cursor(first), make_move_sentinel(last)).collect();
        prop_assert_eq!(moved, data);
        prop_assert!(source.iter().all(String::is_empty));
    }

    #[test]
    fn byte_stream_reproduces_input(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let cursor = ByteStreamCursor::new(Cursor::new(bytes.clone()));
        let read: Vec<u8> = walk(cursor, EndOfStream).collect();
        prop_assert_eq!(read, bytes);
    }

    #[test]
    fn forward_only_walks_the_same_elements(data in prop::collection::vec(any::<i16>(), 0..64)) {
        let (first, last) = forward_only(SliceCursor::begin(&data), SliceCursor::end(&data));
        let walked: Vec<i16> = walk(first, last).copied().collect();
        prop_assert_eq!(walked, data);
    }

    #[test]
    fn iota_range_matches_std_range(start in -100i32..100, len in 0i32..100) {
        let collected: Vec<i32> = iota_range(start, start + len).into_iter().collect();
        prop_assert_eq!(collected, (start..start + len).collect::<Vec<_>>());
    }

    #[test]
    fn repeat_n_has_exact_length(value in any::<u8>(), count in 0usize..128) {
        let view = RepeatN::new(value, count);
        prop_assert_eq!(view.iter().size_hint(), (count, Some(count)));
        prop_assert_eq!(view.iter().filter(|v| **v == value).count(), count);
    }

    #[test]
    fn sized_sentinels_measure_their_distance(data in prop::collection::vec(any::<u8>(), 0..64), skip in 0usize..64, start in -1_000i64..1_000, len in 0i64..1_000) {
        let skip = skip.min(data.len());
        let first = SliceCursor::at(&data, skip);
        let last = SliceCursor::end(&data);
        prop_assert!(measures_exactly(&first, &last));
        prop_assert!(measures_exactly(&make_move_cursor(first), &make_move_sentinel(last)));

        let (first, last) = counted(SliceCursor::begin(&data), skip as isize);
        prop_assert!(measures_exactly(&first, &last));

        prop_assert!(measures_exactly(&Iota::new(start), &Iota::new(start + len)));

        let view = RepeatN::new(0u8, skip);
        let (first, last) = view.bounds();
        prop_assert!(measures_exactly(&first, &last));
    }
}
