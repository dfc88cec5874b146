//! Exponentiation benchmark.

use std::hint::black_box;

use probebench_config::PowerConfig;
use probebench_core::{pow_left_to_right, pow_right_to_left, PowStats};
use tracing::{debug, info};

use crate::result::{PowerReport, PowerRow};
use crate::timing::{measure, nanos_per_call};

/// Compares right-to-left and left-to-right exponentiation.
///
/// Both algorithms are warmed up at a fixed exponent, then for every
/// configured exponent each is run once for its value and multiplication
/// count and timed over `repetitions` calls.
///
/// # Example
///
/// ```
/// use probebench_benchmark::PowerBenchmark;
/// use probebench_config::PowerConfig;
///
/// let config = PowerConfig {
///     base: 2,
///     exponents: vec![0, 10, 70],
///     warmup: 10,
///     warmup_exponent: 5,
///     repetitions: 100,
/// };
/// let report = PowerBenchmark::new(&config).run();
///
/// assert_eq!(report.rows[1].right_to_left.value(), Some(1024));
/// assert!(!report.rows[2].left_to_right.is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PowerBenchmark<'a> {
    config: &'a PowerConfig,
}

impl<'a> PowerBenchmark<'a> {
    /// Creates a benchmark over `config`.
    pub fn new(config: &'a PowerConfig) -> Self {
        Self { config }
    }

    /// Runs warmup and measurement and returns one row per exponent.
    pub fn run(&self) -> PowerReport {
        let PowerConfig {
            base,
            ref exponents,
            warmup,
            warmup_exponent,
            repetitions,
        } = *self.config;

        info!(
            event = "power_start",
            base,
            exponents = exponents.len() as u64,
            repetitions = repetitions as u64,
        );

        let mut sink = 0i64;
        for _ in 0..warmup {
            sink ^= fold(&pow_right_to_left(black_box(base), black_box(warmup_exponent)));
            sink ^= fold(&pow_left_to_right(black_box(base), black_box(warmup_exponent)));
        }

        let mut rows = Vec::with_capacity(exponents.len());
        for &exponent in exponents {
            let right_to_left = pow_right_to_left(base, exponent);
            let left_to_right = pow_left_to_right(base, exponent);

            let (folded, elapsed) = measure(|| {
                (0..repetitions).fold(0i64, |acc, _| {
                    acc ^ fold(&pow_right_to_left(black_box(base), black_box(exponent)))
                })
            });
            sink ^= black_box(folded);
            let right_to_left_ns = nanos_per_call(elapsed, repetitions);

            let (folded, elapsed) = measure(|| {
                (0..repetitions).fold(0i64, |acc, _| {
                    acc ^ fold(&pow_left_to_right(black_box(base), black_box(exponent)))
                })
            });
            sink ^= black_box(folded);
            let left_to_right_ns = nanos_per_call(elapsed, repetitions);

            debug!(
                event = "power_row",
                exponent,
                right_to_left_muls = right_to_left.multiplications,
                left_to_right_muls = left_to_right.multiplications,
            );

            rows.push(PowerRow {
                exponent,
                right_to_left,
                left_to_right,
                right_to_left_ns,
                left_to_right_ns,
            });
        }

        info!(event = "power_end", rows = rows.len() as u64, sink);

        PowerReport {
            base,
            repetitions,
            rows,
        }
    }
}

fn fold(stats: &PowStats<i64>) -> i64 {
    stats.value().unwrap_or(0)
}
