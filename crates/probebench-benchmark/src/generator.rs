//! Sorted array generation.

use std::ops::RangeInclusive;

use probebench_config::DistributionConfig;
use probebench_core::SortedArray;
use rand::Rng;

/// Draws one value from `distribution`.
///
/// The configuration is assumed valid (see `BenchConfig::validate`); empty
/// ranges panic inside the random source.
pub fn sample_value<R: Rng + ?Sized>(distribution: &DistributionConfig, rng: &mut R) -> i64 {
    match distribution {
        DistributionConfig::Uniform(c) => rng.random_range(0..=c.max_value),
        DistributionConfig::Clustered(c) => {
            if rng.random_bool(c.outlier_ratio) {
                rng.random_range(c.cluster_width..=c.max_value)
            } else {
                rng.random_range(0..c.cluster_width)
            }
        }
    }
}

/// Builds a sorted array of `len` independent samples.
///
/// # Example
///
/// ```
/// use probebench_benchmark::generate_sorted;
/// use probebench_config::{DistributionConfig, UniformConfig};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let distribution = DistributionConfig::Uniform(UniformConfig { max_value: 100 });
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let array = generate_sorted(50, &distribution, &mut rng);
///
/// assert_eq!(array.len(), 50);
/// assert!(array.windows(2).all(|w| w[0] <= w[1]));
/// assert!(array.iter().all(|v| (0..=100).contains(v)));
/// ```
pub fn generate_sorted<R: Rng + ?Sized>(
    len: usize,
    distribution: &DistributionConfig,
    rng: &mut R,
) -> SortedArray {
    let values = (0..len).map(|_| sample_value(distribution, rng)).collect();
    SortedArray::from_unsorted(values)
}

/// Key range disjoint from every value `distribution` can produce.
///
/// Starts right above the distribution's maximum and is as wide as its value
/// range, so absent keys are spread like present ones.
pub fn absent_range(distribution: &DistributionConfig) -> RangeInclusive<i64> {
    let max_value = distribution.max_value();
    (max_value + 1)..=(2 * max_value + 1)
}

#[cfg(test)]
mod tests {
    use probebench_config::{ClusteredConfig, UniformConfig};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_clustered_values_stay_in_bounds() {
        let config = ClusteredConfig {
            cluster_width: 20,
            outlier_ratio: 0.1,
            max_value: 10_000,
        };
        let distribution = DistributionConfig::Clustered(config);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let array = generate_sorted(5_000, &distribution, &mut rng);

        let in_cluster = array.iter().filter(|&&v| v < 20).count();
        assert!(array.iter().all(|&v| (0..=10_000).contains(&v)));
        assert!(in_cluster > 4_000);
        assert!(in_cluster < 5_000);
    }

    #[test]
    fn test_same_seed_same_array() {
        let distribution = DistributionConfig::Uniform(UniformConfig::default());
        let a = generate_sorted(100, &distribution, &mut ChaCha8Rng::seed_from_u64(9));
        let b = generate_sorted(100, &distribution, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_absent_range_is_disjoint() {
        let distribution = DistributionConfig::Uniform(UniformConfig { max_value: 10 });
        assert_eq!(absent_range(&distribution), 11..=21);

        let distribution = DistributionConfig::Uniform(UniformConfig { max_value: 0 });
        assert_eq!(absent_range(&distribution), 1..=1);
    }
}
