//! Search suite driver.

use probebench_config::{BenchConfig, ConfigError, DistributionConfig, RngStream, SearchConfig};
use probebench_core::{BinarySearch, InterpolationSearch};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::generator::{absent_range, generate_sorted};
use crate::result::{SuiteReport, SuiteRow};
use crate::runner::QueryRunner;

/// Runs binary and interpolation search over every configured array size,
/// once per configured distribution.
///
/// Each distribution gets its own generator, seeded from the suite seed plus
/// the distribution's index. With [`RngStream::Shared`] that generator builds
/// the array and then draws both primitives' queries in turn; with
/// [`RngStream::Reseeded`] it draws one query seed per array and each
/// primitive replays a fresh generator from that seed.
#[derive(Debug, Clone)]
pub struct SearchSuite {
    search: SearchConfig,
    rng_stream: RngStream,
    seed: u64,
}

impl SearchSuite {
    /// Creates a suite from `config` without validating it.
    ///
    /// Draws a random seed when the configuration has none.
    pub fn new(config: &BenchConfig) -> Self {
        Self {
            search: config.search.clone(),
            rng_stream: config.rng_stream,
            seed: config.random_seed.unwrap_or_else(rand::random),
        }
    }

    /// Validates `config` and creates a suite from it.
    pub fn try_new(config: &BenchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Returns the seed of the first distribution's generator.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs every distribution and returns one report each.
    pub fn run(&self) -> Vec<SuiteReport> {
        self.search
            .distributions
            .iter()
            .enumerate()
            .map(|(index, distribution)| {
                self.run_distribution(distribution, self.seed.wrapping_add(index as u64))
            })
            .collect()
    }

    /// Runs every array size for one distribution.
    pub fn run_distribution(&self, distribution: &DistributionConfig, seed: u64) -> SuiteReport {
        let runner = QueryRunner::from_config(&self.search);
        let absent = absent_range(distribution);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut report = SuiteReport::new(
            format!("search/{}", distribution.name()),
            distribution.describe(),
            seed,
            self.rng_stream,
            runner.query_count(),
        );

        info!(
            event = "suite_start",
            suite = report.name.as_str(),
            sizes = self.search.sizes.len() as u64,
            queries = runner.query_count() as u64,
            seed,
        );

        let mut sink = 0usize;
        for &size in &self.search.sizes {
            let array = generate_sorted(size, distribution, &mut rng);

            let ((binary, binary_sink), (interpolation, interpolation_sink)) =
                match self.rng_stream {
                    RngStream::Shared => (
                        runner.run(&BinarySearch, &array, &absent, &mut rng),
                        runner.run(&InterpolationSearch, &array, &absent, &mut rng),
                    ),
                    RngStream::Reseeded => {
                        let query_seed: u64 = rng.random();
                        (
                            runner.run(
                                &BinarySearch,
                                &array,
                                &absent,
                                &mut ChaCha8Rng::seed_from_u64(query_seed),
                            ),
                            runner.run(
                                &InterpolationSearch,
                                &array,
                                &absent,
                                &mut ChaCha8Rng::seed_from_u64(query_seed),
                            ),
                        )
                    }
                };
            sink = sink
                .wrapping_add(binary_sink)
                .wrapping_add(interpolation_sink);

            debug!(
                event = "row_complete",
                suite = report.name.as_str(),
                size = size as u64,
                binary_probes = binary.avg_probes,
                interpolation_probes = interpolation.avg_probes,
            );

            report.add_row(SuiteRow {
                size,
                binary,
                interpolation,
            });
        }

        info!(
            event = "suite_end",
            suite = report.name.as_str(),
            rows = report.rows.len() as u64,
            sink = sink as u64,
        );
        report
    }
}
