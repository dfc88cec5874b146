//! Sorted array fixtures.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Small strictly increasing array with odd values.
pub const SAMPLE: [i64; 6] = [1, 3, 5, 7, 9, 11];

/// Array whose values are all equal.
pub const FLAT: [i64; 5] = [2, 2, 2, 2, 2];

/// Returns `len` copies of `value`.
pub fn all_equal(len: usize, value: i64) -> Vec<i64> {
    vec![value; len]
}

/// Returns `len` sorted values drawn uniformly from `[0, max_value]`.
pub fn uniform_sorted(len: usize, max_value: i64, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values: Vec<i64> = (0..len).map(|_| rng.random_range(0..=max_value)).collect();
    values.sort_unstable();
    values
}

/// Returns `len` sorted values: mostly from `[0, cluster_width)`, with a
/// fraction `outlier_ratio` spread over `[cluster_width, max_value]`.
pub fn clustered_sorted(
    len: usize,
    cluster_width: i64,
    outlier_ratio: f64,
    max_value: i64,
    seed: u64,
) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values: Vec<i64> = (0..len)
        .map(|_| {
            if rng.random_bool(outlier_ratio) {
                rng.random_range(cluster_width..=max_value)
            } else {
                rng.random_range(0..cluster_width)
            }
        })
        .collect();
    values.sort_unstable();
    values
}

/// Returns keys guaranteed not to occur in the sorted `values`: one below the
/// minimum, one above the maximum, and one inside every gap wider than one.
pub fn absent_keys(values: &[i64]) -> Vec<i64> {
    let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
        return vec![0];
    };
    let mut keys = vec![first - 1, last + 1];
    keys.extend(
        values
            .windows(2)
            .filter(|pair| pair[1] - pair[0] > 1)
            .map(|pair| pair[0] + 1),
    );
    keys
}

/// Upper bound on binary search probes for `n` elements: `⌈log2(n + 1)⌉`.
pub fn binary_probe_bound(n: usize) -> u32 {
    usize::BITS - n.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_bound() {
        assert_eq!(binary_probe_bound(0), 0);
        assert_eq!(binary_probe_bound(1), 1);
        assert_eq!(binary_probe_bound(6), 3);
        assert_eq!(binary_probe_bound(7), 3);
        assert_eq!(binary_probe_bound(8), 4);
    }

    #[test]
    fn test_absent_keys_are_absent() {
        let values = uniform_sorted(500, 10_000, 7);
        for key in absent_keys(&values) {
            assert!(values.binary_search(&key).is_err());
        }
    }

    #[test]
    fn test_seeded_arrays_are_reproducible() {
        assert_eq!(uniform_sorted(100, 1_000, 1), uniform_sorted(100, 1_000, 1));
        assert_eq!(
            clustered_sorted(100, 50, 0.1, 1_000_000, 3),
            clustered_sorted(100, 50, 0.1, 1_000_000, 3)
        );
    }
}
