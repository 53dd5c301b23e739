//! Deterministic randomized workloads: every search strategy must agree
//! with the standard library on the same data, and the comparator budget of
//! bisection must hold on large inputs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use strider_algo::bounds::{lower_bound, lower_bound_in, upper_bound_in};
use strider_algo::equal_range::{equal_range, equal_range_in};
use strider_algo::partition::partition_in;
use strider_core::callable::{Identity, Less, by_ref};
use strider_core::cursor::SliceCursor;
use strider_core::instrument::Counted;
use strider_iter::forward_only::forward_only;

fn sorted_workload(seed: u64, len: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data: Vec<i64> = (0..len).map(|_| rng.random_range(-1_000..1_000)).collect();
    data.sort_unstable();
    data
}

#[test]
fn test_bounds_agree_with_std_on_seeded_data() {
    let data = sorted_workload(42, 4096);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..256 {
        let value: i64 = rng.random_range(-1_100..1_100);
        let lower = lower_bound_in(&data, &value, Less, Identity).position();
        let upper = upper_bound_in(&data, &value, Less, Identity).position();
        assert_eq!(lower, data.partition_point(|x| *x < value));
        assert_eq!(upper, data.partition_point(|x| *x <= value));
    }
}

#[test]
fn test_strategies_agree_on_seeded_data() {
    let data = sorted_workload(12345, 1024);
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..128 {
        let value: i64 = rng.random_range(-1_100..1_100);
        let bisected = equal_range_in(&data, &value, Less, Identity);

        let (first, last) = forward_only(SliceCursor::begin(&data), SliceCursor::end(&data));
        let probed = equal_range(first, last, &value, Less, Identity);
        assert_eq!(probed.begin().get().position(), bisected.begin().position());
        assert_eq!(probed.end().get().position(), bisected.end().position());

        let (first, last) = forward_only(SliceCursor::begin(&data), SliceCursor::end(&data));
        let linear = lower_bound(first, last, &value, Less, Identity);
        assert_eq!(linear.get().position(), bisected.begin().position());
    }
}

#[test]
fn test_bisection_comparator_budget() {
    let data = sorted_workload(0xDEADBEEF, 1 << 16);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..64 {
        let value: i64 = rng.random_range(-1_000..1_000);
        let mut comp = Counted::new(Less);
        lower_bound_in(&data, &value, by_ref(&mut comp), Identity);
        // ceil(log2(65536 + 1))
        assert!(comp.calls() <= 17, "lower_bound used {} comparisons", comp.calls());
    }
}

#[test]
fn test_partition_on_seeded_data() {
    let mut rng = ChaCha8Rng::seed_from_u64(2025);
    let mut data: Vec<i64> = (0..2048).map(|_| rng.random_range(-500..500)).collect();
    let mut expected = data.clone();
    expected.sort_unstable();

    let boundary = partition_in(&mut data, |x: &i64| x.rem_euclid(2) == 0, Identity);
    assert!(data[..boundary].iter().all(|x| x.rem_euclid(2) == 0));
    assert!(data[boundary..].iter().all(|x| x.rem_euclid(2) != 0));

    data.sort_unstable();
    assert_eq!(data, expected);
}
