//! Benchmarking suites for probebench.
//!
//! This crate drives the algorithms from `probebench-core` through
//! reproducible micro-benchmarks and renders the results.
//!
//! # Overview
//!
//! - Generate sorted arrays from a configured value distribution
//! - Run randomized present/absent queries against each search primitive,
//!   counting probes and hits around a monotonic clock
//! - Time both exponentiation algorithms over a range of exponents
//! - Export results as fixed-width tables, CSV, Markdown or JSON
//!
//! # Zero-Erasure Design
//!
//! The query runner is generic over [`SearchStrategy`](probebench_core::SearchStrategy)
//! and the random source, so each measured loop compiles to direct calls.
//!
//! # Example
//!
//! ```
//! use probebench_benchmark::{SearchSuite, TableReport};
//! use probebench_config::BenchConfig;
//!
//! let config = BenchConfig::new()
//!     .with_random_seed(7)
//!     .with_sizes([100, 1000])
//!     .with_query_count(200);
//!
//! let reports = SearchSuite::new(&config).run();
//! assert_eq!(reports.len(), 2);
//! assert_eq!(reports[0].rows.len(), 2);
//!
//! let table = TableReport::search(&reports[0]);
//! assert!(table.contains("interp probes"));
//! ```

mod generator;
mod power;
mod report;
mod result;
mod runner;
mod suite;
mod timing;

pub use generator::{absent_range, generate_sorted, sample_value};
pub use power::PowerBenchmark;
pub use report::{CsvExporter, JsonExporter, MarkdownReport, TableReport, OVERFLOW_LABEL};
pub use result::{PowerReport, PowerRow, SearchSummary, SuiteReport, SuiteRow};
pub use runner::{draw_queries, QueryRunner};
pub use suite::SearchSuite;
pub use timing::measure;
