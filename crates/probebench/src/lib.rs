//! probebench - search and exponentiation micro-benchmarks in Rust
//!
//! Compares binary against interpolation search over generated sorted arrays,
//! and right-to-left against left-to-right exponentiation.
//!
//! # Example
//!
//! ```rust
//! use probebench::prelude::*;
//!
//! let array = SortedArray::from_unsorted(vec![11, 3, 7, 1, 9, 5]);
//! assert_eq!(BinarySearch.search(&array, 7).index, Some(3));
//! assert_eq!(InterpolationSearch.search(&array, 4).index, None);
//! ```

// Search primitives
pub use probebench_core::{
    binary_search, interpolation_search, BinarySearch, InterpolationSearch, SearchOutcome,
    SearchStrategy, SortedArray, UnsortedError,
};

// Exponentiation and base conversion
pub use probebench_core::{
    digit_count, pow_left_to_right, pow_right_to_left, to_base, PowError, PowStats, RadixError,
};

// Configuration
pub use probebench_config::{
    BenchConfig, ClusteredConfig, ConfigError, DistributionConfig, PowerConfig, ReportConfig,
    RngStream, SearchConfig, UniformConfig,
};

// Suites and reports
pub use probebench_benchmark::{
    CsvExporter, JsonExporter, MarkdownReport, PowerBenchmark, PowerReport, SearchSuite,
    SuiteReport, TableReport,
};

#[cfg(feature = "console")]
pub use probebench_console as console;

pub mod prelude {
    pub use super::{BinarySearch, InterpolationSearch, SearchStrategy, SortedArray};
    pub use super::{BenchConfig, DistributionConfig, RngStream};
    pub use super::{PowerBenchmark, SearchSuite, TableReport};
}
