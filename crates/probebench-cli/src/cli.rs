//! Command line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use probebench_config::RngStream;

/// Search and exponentiation micro-benchmarks
#[derive(Parser, Debug)]
#[command(name = "probebench")]
#[command(version)]
#[command(
    about = "Compare binary and interpolation search, and two exponentiation orders",
    long_about = "probebench generates sorted arrays, runs randomized present/absent queries \
                  against binary and interpolation search and reports latency, probe counts and \
                  hit rates. It also times right-to-left against left-to-right exponentiation \
                  and converts integers between bases."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

impl Cli {
    /// Returns the selected command, `search` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Search)
    }
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Configuration file (TOML, or YAML for .yaml/.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for search results
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Random seed, overriding the configuration
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Random stream policy, overriding the configuration
    #[arg(long, global = true, value_enum)]
    pub stream: Option<StreamArg>,

    /// Queries per primitive and array size
    #[arg(short, long, global = true)]
    pub queries: Option<usize>,

    /// Comma-separated array sizes
    #[arg(long, global = true, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Log one line per finished row
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the search suites (default)
    Search,

    /// Time right-to-left against left-to-right exponentiation
    Pow {
        /// Base x, overriding the configuration
        #[arg(allow_negative_numbers = true)]
        x: Option<i64>,
    },

    /// Convert p to base b
    Base {
        /// Non-negative integer to convert
        #[arg(allow_negative_numbers = true)]
        p: i64,

        /// Target base in [2, 36]
        b: u32,
    },
}

/// Search report formats.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Table,
    Csv,
    Markdown,
    Json,
}

/// Command line spelling of [`RngStream`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamArg {
    Shared,
    Reseeded,
}

impl From<StreamArg> for RngStream {
    fn from(arg: StreamArg) -> Self {
        match arg {
            StreamArg::Shared => RngStream::Shared,
            StreamArg::Reseeded => RngStream::Reseeded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("probebench").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_subcommand_runs_search() {
        let cli = parse(&[]);
        assert_eq!(cli.command(), Command::Search);
        assert_eq!(cli.global.format, Format::Table);
        assert!(cli.global.sizes.is_none());
    }

    #[test]
    fn test_search_overrides() {
        let cli = parse(&[
            "search",
            "--seed",
            "42",
            "--stream",
            "reseeded",
            "--sizes",
            "100,2000",
            "-q",
            "500",
            "--format",
            "csv",
        ]);
        assert_eq!(cli.command(), Command::Search);
        assert_eq!(cli.global.seed, Some(42));
        assert_eq!(cli.global.stream, Some(StreamArg::Reseeded));
        assert_eq!(cli.global.sizes, Some(vec![100, 2000]));
        assert_eq!(cli.global.queries, Some(500));
        assert_eq!(cli.global.format, Format::Csv);
    }

    #[test]
    fn test_pow_base_is_optional() {
        assert_eq!(parse(&["pow"]).command(), Command::Pow { x: None });
        assert_eq!(parse(&["pow", "-3"]).command(), Command::Pow { x: Some(-3) });
    }

    #[test]
    fn test_base_arguments() {
        assert_eq!(
            parse(&["base", "255", "16"]).command(),
            Command::Base { p: 255, b: 16 }
        );
        assert_eq!(
            parse(&["base", "-5", "2"]).command(),
            Command::Base { p: -5, b: 2 }
        );
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = Cli::try_parse_from(["probebench", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_stream_conversion() {
        assert_eq!(RngStream::from(StreamArg::Shared), RngStream::Shared);
        assert_eq!(RngStream::from(StreamArg::Reseeded), RngStream::Reseeded);
    }
}
