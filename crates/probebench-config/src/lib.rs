//! Configuration system for probebench.
//!
//! Load suite configuration from TOML or YAML files to change array sizes,
//! query counts, value distributions and the random stream policy without
//! code changes. Every field has a default, so an empty file (or no file at
//! all) reproduces the standard suites.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use probebench_config::{BenchConfig, DistributionConfig, RngStream};
//!
//! let config = BenchConfig::from_toml_str(r#"
//!     random_seed = 42
//!     rng_stream = "reseeded"
//!
//!     [search]
//!     sizes = [1000, 10000]
//!     query_count = 5000
//!
//!     [[search.distributions]]
//!     type = "clustered"
//!     cluster_width = 500
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(42));
//! assert_eq!(config.rng_stream, RngStream::Reseeded);
//! assert_eq!(config.search.sizes, vec![1000, 10000]);
//! assert!(matches!(
//!     config.search.distributions[0],
//!     DistributionConfig::Clustered(_)
//! ));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use probebench_config::BenchConfig;
//!
//! let config = BenchConfig::load("probebench.toml").unwrap_or_default();
//! assert_eq!(config.search.query_count, 20_000);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Array sizes benchmarked by default.
pub const DEFAULT_SIZES: [usize; 7] = [1_000, 5_000, 10_000, 50_000, 100_000, 250_000, 500_000];

/// Queries issued per (primitive, array) pair by default.
pub const DEFAULT_QUERY_COUNT: usize = 20_000;

/// Largest `max_value` for which the absent-key range `[max + 1, 2 * max + 1]`
/// still fits in `i64`.
pub const MAX_VALUE_LIMIT: i64 = (i64::MAX - 1) / 2;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main benchmark configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BenchConfig {
    /// Random seed for reproducible suites. A fresh seed is drawn when unset.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// How the random stream is shared between search primitives.
    #[serde(default)]
    pub rng_stream: RngStream,

    /// Search suite configuration.
    #[serde(default)]
    pub search: SearchConfig,

    /// Exponentiation benchmark configuration.
    #[serde(default)]
    pub power: PowerConfig,

    /// Optional report files.
    #[serde(default)]
    pub report: ReportConfig,
}

impl BenchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML, anything else as
    /// TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, doesn't parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        let config = if is_yaml {
            Self::from_yaml_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the random stream policy.
    pub fn with_rng_stream(mut self, stream: RngStream) -> Self {
        self.rng_stream = stream;
        self
    }

    /// Replaces the benchmarked array sizes.
    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.search.sizes = sizes.into();
        self
    }

    /// Sets the number of queries per benchmark.
    pub fn with_query_count(mut self, count: usize) -> Self {
        self.search.query_count = count;
        self
    }

    /// Replaces the distributions with a single one.
    pub fn with_distribution(mut self, distribution: DistributionConfig) -> Self {
        self.search.distributions = vec![distribution];
        self
    }

    /// Checks value ranges that the type system cannot express.
    ///
    /// # Examples
    ///
    /// ```
    /// use probebench_config::BenchConfig;
    ///
    /// assert!(BenchConfig::new().validate().is_ok());
    /// assert!(BenchConfig::new().with_query_count(0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()?;
        self.power.validate()
    }
}

/// Random stream policy for the two search primitives of a suite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RngStream {
    /// One generator threads through array generation and both primitives'
    /// queries, so the primitives see different query sequences.
    #[default]
    Shared,

    /// Each primitive gets a generator reseeded from the same value, so both
    /// see identical query sequences.
    Reseeded,
}

/// Search suite configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    /// Array lengths, one table row each.
    pub sizes: Vec<usize>,

    /// Queries per (primitive, array) pair.
    pub query_count: usize,

    /// Probability that a query key is taken from the array.
    pub present_ratio: f64,

    /// Untimed queries issued before each measured loop.
    pub warmup_queries: usize,

    /// Value distributions, one suite each.
    pub distributions: Vec<DistributionConfig>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            query_count: DEFAULT_QUERY_COUNT,
            present_ratio: 0.5,
            warmup_queries: 0,
            distributions: vec![
                DistributionConfig::Uniform(UniformConfig::default()),
                DistributionConfig::Clustered(ClusteredConfig::default()),
            ],
        }
    }
}

impl SearchConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(invalid("search.sizes must not be empty"));
        }
        if self.sizes.contains(&0) {
            return Err(invalid("search.sizes must be positive"));
        }
        if self.query_count == 0 {
            return Err(invalid("search.query_count must be positive"));
        }
        if !(0.0..=1.0).contains(&self.present_ratio) {
            return Err(invalid(format!(
                "search.present_ratio must be in [0, 1], got {}",
                self.present_ratio
            )));
        }
        if self.distributions.is_empty() {
            return Err(invalid("search.distributions must not be empty"));
        }
        self.distributions
            .iter()
            .try_for_each(DistributionConfig::validate)
    }
}

/// Value distribution of generated arrays.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DistributionConfig {
    /// Values uniform over a wide range.
    Uniform(UniformConfig),

    /// Dense narrow cluster with a sparse wide tail.
    Clustered(ClusteredConfig),
}

impl DistributionConfig {
    /// Short name used in report headers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform(_) => "uniform",
            Self::Clustered(_) => "clustered",
        }
    }

    /// Inclusive upper bound of every generated value.
    pub fn max_value(&self) -> i64 {
        match self {
            Self::Uniform(c) => c.max_value,
            Self::Clustered(c) => c.max_value,
        }
    }

    /// One-line human readable description.
    ///
    /// # Examples
    ///
    /// ```
    /// use probebench_config::{DistributionConfig, UniformConfig};
    ///
    /// let uniform = DistributionConfig::Uniform(UniformConfig { max_value: 99 });
    /// assert_eq!(uniform.describe(), "uniform values in [0, 99]");
    /// ```
    pub fn describe(&self) -> String {
        match self {
            Self::Uniform(c) => format!("uniform values in [0, {}]", c.max_value),
            Self::Clustered(c) => format!(
                "clustered values in [0, {}) with {:.2}% outliers up to {}",
                c.cluster_width,
                c.outlier_ratio * 100.0,
                c.max_value
            ),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let max_value = self.max_value();
        if !(0..=MAX_VALUE_LIMIT).contains(&max_value) {
            return Err(invalid(format!(
                "{}: max_value must be in [0, {}], got {}",
                self.name(),
                MAX_VALUE_LIMIT,
                max_value
            )));
        }
        if let Self::Clustered(c) = self {
            if c.cluster_width < 1 || c.cluster_width > c.max_value {
                return Err(invalid(format!(
                    "clustered: cluster_width must be in [1, max_value], got {}",
                    c.cluster_width
                )));
            }
            if !(0.0..=1.0).contains(&c.outlier_ratio) {
                return Err(invalid(format!(
                    "clustered: outlier_ratio must be in [0, 1], got {}",
                    c.outlier_ratio
                )));
            }
        }
        Ok(())
    }
}

/// Uniform distribution parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct UniformConfig {
    /// Inclusive upper bound; values are drawn from `[0, max_value]`.
    pub max_value: i64,
}

impl Default for UniformConfig {
    fn default() -> Self {
        Self {
            max_value: 1_000_000_000,
        }
    }
}

/// Clustered distribution parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ClusteredConfig {
    /// Cluster values are drawn from `[0, cluster_width)`.
    pub cluster_width: i64,

    /// Probability that a value is an outlier instead of a cluster value.
    pub outlier_ratio: f64,

    /// Outliers are drawn from `[cluster_width, max_value]`.
    pub max_value: i64,
}

impl Default for ClusteredConfig {
    fn default() -> Self {
        Self {
            cluster_width: 1_000,
            outlier_ratio: 0.01,
            max_value: 1_000_000_000,
        }
    }
}

/// Exponentiation benchmark configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PowerConfig {
    /// Base raised to every exponent.
    pub base: i64,

    /// Exponents, one table row each.
    pub exponents: Vec<i64>,

    /// Untimed iterations of both algorithms before measuring.
    pub warmup: usize,

    /// Exponent used by the warmup iterations.
    pub warmup_exponent: i64,

    /// Timed calls per (algorithm, exponent) pair.
    pub repetitions: usize,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            base: 7,
            exponents: (0..=23).collect(),
            warmup: 2_000,
            warmup_exponent: 20,
            repetitions: 20_000,
        }
    }
}

impl PowerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.repetitions == 0 {
            return Err(invalid("power.repetitions must be positive"));
        }
        Ok(())
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ReportConfig {
    /// Write search results as CSV to this path.
    pub csv_output: Option<PathBuf>,

    /// Write search results as Markdown to this path.
    pub markdown_output: Option<PathBuf>,

    /// Write search results as JSON to this path.
    pub json_output: Option<PathBuf>,
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}

#[cfg(test)]
mod tests;
