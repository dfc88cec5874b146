//! Tests shared by both search primitives.

use probebench_test::{
    absent_keys, all_equal, binary_probe_bound, clustered_sorted, uniform_sorted, FLAT, SAMPLE,
};

use super::*;

fn both(values: &[i64], key: i64) -> [SearchOutcome; 2] {
    [binary_search(values, key), interpolation_search(values, key)]
}

fn fixtures() -> Vec<Vec<i64>> {
    vec![
        SAMPLE.to_vec(),
        FLAT.to_vec(),
        vec![1, 1, 2, 2, 2, 3, 9, 9, 40],
        uniform_sorted(1_000, 1_000_000, 11),
        uniform_sorted(777, 100, 12),
        clustered_sorted(2_000, 50, 0.02, 1_000_000, 13),
    ]
}

// ============================================================================
// Correctness
// ============================================================================

#[test]
fn test_present_keys_are_found() {
    for values in fixtures() {
        for &key in &values {
            for outcome in both(&values, key) {
                let index = outcome.index.expect("present key not found");
                assert_eq!(values[index], key);
            }
        }
    }
}

#[test]
fn test_absent_keys_are_not_found() {
    for values in fixtures() {
        for key in absent_keys(&values) {
            for outcome in both(&values, key) {
                assert_eq!(outcome.index, None, "key {key} reported present");
            }
        }
    }
}

#[test]
fn test_binary_probe_bound() {
    for values in fixtures() {
        let bound = binary_probe_bound(values.len());
        let keys = values.iter().copied().chain(absent_keys(&values));
        for key in keys {
            assert!(binary_search(&values, key).probes <= bound);
        }
    }
}

#[test]
fn test_searches_are_idempotent() {
    let values = clustered_sorted(5_000, 100, 0.01, 1_000_000, 21);
    for key in [0, 50, 99, 500_000, 2_000_000] {
        assert_eq!(binary_search(&values, key), binary_search(&values, key));
        assert_eq!(
            interpolation_search(&values, key),
            interpolation_search(&values, key)
        );
    }
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_sample_scenario() {
    let outcome = binary_search(&SAMPLE, 7);
    assert_eq!(outcome.index, Some(3));
    assert!(outcome.probes <= 3);

    for outcome in both(&SAMPLE, 4) {
        assert_eq!(outcome.index, None);
    }
}

#[test]
fn test_degenerate_window() {
    assert_eq!(interpolation_search(&FLAT, 2), SearchOutcome::found(0, 1));
    assert_eq!(interpolation_search(&FLAT, 5), SearchOutcome::not_found(1));
    assert_eq!(interpolation_search(&FLAT, 1), SearchOutcome::not_found(1));

    let large = all_equal(100_000, -7);
    assert_eq!(interpolation_search(&large, -7), SearchOutcome::found(0, 1));
}

// ============================================================================
// Distribution sensitivity
// ============================================================================

#[test]
fn test_clustered_data_degrades_interpolation() {
    const LEN: usize = 50_000;
    const MAX: i64 = 1_000_000_000;

    let average_probes = |values: &[i64]| {
        let step = values.len() / 500;
        let total: u64 = values
            .iter()
            .step_by(step)
            .map(|&key| u64::from(interpolation_search(values, key).probes))
            .sum();
        total as f64 / values.iter().step_by(step).count() as f64
    };

    let uniform = uniform_sorted(LEN, MAX, 5);
    let clustered = clustered_sorted(LEN, 1_000, 0.01, MAX, 5);

    assert!(average_probes(&clustered) > average_probes(&uniform));
}

// ============================================================================
// SortedArray
// ============================================================================

#[test]
fn test_sorted_array_rejects_unsorted() {
    let err = SortedArray::try_from_sorted(vec![1, 2, 5, 4]).unwrap_err();
    assert_eq!(err.index, 3);
}

#[test]
fn test_sorted_array_strategies() {
    let array = SortedArray::try_from(SAMPLE.to_vec()).unwrap();
    assert_eq!(BinarySearch.search(&array, 9).index, Some(4));
    assert_eq!(InterpolationSearch.search(&array, 9).index, Some(4));
    assert_eq!(array.to_string(), "[6 values, 1..=11]");
    assert_eq!(SortedArray::default().to_string(), "[empty]");
}
