//! Benchmark result types.

use std::time::Duration;

use probebench_config::RngStream;
use probebench_core::PowStats;
use serde::Serialize;

/// Aggregated result of one search primitive against one array.
///
/// Keeps the raw totals alongside the per-query averages derived from them.
///
/// # Example
///
/// ```
/// use probebench_benchmark::SearchSummary;
/// use std::time::Duration;
///
/// let summary = SearchSummary::new("binary", 1_000, 9_500, 500, Duration::from_micros(40));
/// assert_eq!(summary.avg_probes, 9.5);
/// assert_eq!(summary.found_rate, 0.5);
/// assert_eq!(summary.avg_ns, 40.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSummary {
    /// Search primitive name.
    pub strategy: &'static str,
    /// Measured queries.
    pub queries: u64,
    /// Probes summed over all measured queries.
    pub total_probes: u64,
    /// Queries whose key was located.
    pub hits: u64,
    /// Wall-clock time of the measured loop.
    pub elapsed_ns: u64,
    /// Average nanoseconds per query.
    pub avg_ns: f64,
    /// Average probes per query.
    pub avg_probes: f64,
    /// Fraction of queries that found a match.
    pub found_rate: f64,
}

impl SearchSummary {
    /// Creates a summary from raw totals.
    pub fn new(
        strategy: &'static str,
        queries: u64,
        total_probes: u64,
        hits: u64,
        elapsed: Duration,
    ) -> Self {
        let elapsed_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        let per_query = |total: u64| {
            if queries == 0 {
                0.0
            } else {
                total as f64 / queries as f64
            }
        };
        Self {
            strategy,
            queries,
            total_probes,
            hits,
            elapsed_ns,
            avg_ns: per_query(elapsed_ns),
            avg_probes: per_query(total_probes),
            found_rate: per_query(hits),
        }
    }

    /// Returns the measured loop duration.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns)
    }
}

/// One table row: both search primitives against the same array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteRow {
    /// Array length.
    pub size: usize,
    /// Binary search result.
    pub binary: SearchSummary,
    /// Interpolation search result.
    pub interpolation: SearchSummary,
}

/// Results of one distribution's suite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteReport {
    /// Suite name, e.g. `search/uniform`.
    pub name: String,
    /// Human readable distribution description.
    pub distribution: String,
    /// Seed the suite's generator started from.
    pub seed: u64,
    /// Random stream policy used.
    pub rng_stream: RngStream,
    /// Queries per (primitive, array) pair.
    pub query_count: usize,
    /// One row per array size, in configured order.
    pub rows: Vec<SuiteRow>,
}

impl SuiteReport {
    /// Creates an empty report.
    pub fn new(
        name: impl Into<String>,
        distribution: impl Into<String>,
        seed: u64,
        rng_stream: RngStream,
        query_count: usize,
    ) -> Self {
        Self {
            name: name.into(),
            distribution: distribution.into(),
            seed,
            rng_stream,
            query_count,
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn add_row(&mut self, row: SuiteRow) {
        self.rows.push(row);
    }

    /// Returns the row for `size`, if benchmarked.
    pub fn row(&self, size: usize) -> Option<&SuiteRow> {
        self.rows.iter().find(|row| row.size == size)
    }
}

/// One exponent of the exponentiation benchmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerRow {
    /// Exponent.
    pub exponent: i64,
    /// Right-to-left result and multiplication count.
    pub right_to_left: PowStats<i64>,
    /// Left-to-right result and multiplication count.
    pub left_to_right: PowStats<i64>,
    /// Average nanoseconds per right-to-left call.
    pub right_to_left_ns: u64,
    /// Average nanoseconds per left-to-right call.
    pub left_to_right_ns: u64,
}

/// Results of the exponentiation benchmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerReport {
    /// Base raised to every exponent.
    pub base: i64,
    /// Timed calls per (algorithm, exponent) pair.
    pub repetitions: usize,
    /// One row per exponent, in configured order.
    pub rows: Vec<PowerRow>,
}
