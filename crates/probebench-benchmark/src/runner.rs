//! Randomized query runner.

use std::hint::black_box;
use std::ops::RangeInclusive;

use probebench_config::SearchConfig;
use probebench_core::{SearchStrategy, SortedArray};
use rand::Rng;

use crate::result::SearchSummary;
use crate::timing::measure;

/// Draws `count` query keys.
///
/// Each key is, with probability `present_ratio`, a uniformly chosen element
/// of `array`; otherwise it is drawn from `absent`, which must be disjoint
/// from the array's values. An empty array only yields absent keys.
///
/// # Example
///
/// ```
/// use probebench_benchmark::draw_queries;
/// use probebench_core::SortedArray;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let array = SortedArray::from_unsorted(vec![1, 2, 3]);
/// let mut rng = ChaCha8Rng::seed_from_u64(0);
/// let keys = draw_queries(&array, 100, 1.0, &(10..=20), &mut rng);
/// assert!(keys.iter().all(|k| array.contains(k)));
/// ```
pub fn draw_queries<R: Rng + ?Sized>(
    array: &SortedArray,
    count: usize,
    present_ratio: f64,
    absent: &RangeInclusive<i64>,
    rng: &mut R,
) -> Vec<i64> {
    (0..count)
        .map(|_| {
            if !array.is_empty() && rng.random_bool(present_ratio) {
                array[rng.random_range(0..array.len())]
            } else {
                rng.random_range(absent.clone())
            }
        })
        .collect()
}

/// Runs one search primitive against one array.
///
/// Query keys are drawn before the clock starts; only the search calls are
/// timed. Every returned index is folded into a sink that passes through
/// [`black_box`], so the measured loop cannot be optimized away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryRunner {
    query_count: usize,
    present_ratio: f64,
    warmup_queries: usize,
}

impl QueryRunner {
    /// Creates a runner issuing `query_count` queries, half of them present.
    pub fn new(query_count: usize) -> Self {
        Self {
            query_count,
            present_ratio: 0.5,
            warmup_queries: 0,
        }
    }

    /// Creates a runner from the search section of a configuration.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            query_count: config.query_count,
            present_ratio: config.present_ratio,
            warmup_queries: config.warmup_queries,
        }
    }

    /// Sets the probability that a key is taken from the array.
    pub fn with_present_ratio(mut self, ratio: f64) -> Self {
        self.present_ratio = ratio;
        self
    }

    /// Sets the number of untimed queries issued before measuring.
    pub fn with_warmup_queries(mut self, count: usize) -> Self {
        self.warmup_queries = count;
        self
    }

    /// Returns the number of measured queries.
    pub fn query_count(&self) -> usize {
        self.query_count
    }

    /// Benchmarks `strategy` on `array` and returns the summary plus the sink
    /// value.
    pub fn run<S, R>(
        &self,
        strategy: &S,
        array: &SortedArray,
        absent: &RangeInclusive<i64>,
        rng: &mut R,
    ) -> (SearchSummary, usize)
    where
        S: SearchStrategy,
        R: Rng + ?Sized,
    {
        let keys = draw_queries(array, self.query_count, self.present_ratio, absent, rng);

        for &key in keys.iter().cycle().take(self.warmup_queries) {
            black_box(strategy.search(array, black_box(key)));
        }

        let ((total_probes, hits, sink), elapsed) = measure(|| {
            let mut total_probes = 0u64;
            let mut hits = 0u64;
            let mut sink = 0usize;
            for &key in &keys {
                let outcome = strategy.search(array, black_box(key));
                total_probes += u64::from(outcome.probes);
                match outcome.index {
                    Some(index) => {
                        hits += 1;
                        sink = sink.wrapping_add(index);
                    }
                    None => sink = sink.wrapping_sub(1),
                }
            }
            (total_probes, hits, black_box(sink))
        });

        let summary = SearchSummary::new(S::NAME, keys.len() as u64, total_probes, hits, elapsed);
        (summary, sink)
    }
}
