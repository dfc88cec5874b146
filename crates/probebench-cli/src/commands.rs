//! Command handlers.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use owo_colors::OwoColorize;
use probebench_benchmark::{
    CsvExporter, JsonExporter, MarkdownReport, PowerBenchmark, SearchSuite, SuiteReport,
    TableReport,
};
use probebench_config::{BenchConfig, ReportConfig};
use probebench_core::{digit_count, to_base};

use crate::cli::{Command, Format, GlobalArgs};
use crate::error::{CliError, CliResult};

/// Runs `command` and returns what it prints on stdout.
pub fn run(command: &Command, args: &GlobalArgs) -> CliResult<String> {
    match *command {
        Command::Search => search(args),
        Command::Pow { x } => pow(args, x),
        Command::Base { p, b } => base(p, b),
    }
}

/// Loads the configuration file, if any, and applies command line overrides.
pub fn load_config(args: &GlobalArgs) -> CliResult<BenchConfig> {
    let mut config = match &args.config {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::new(),
    };

    if let Some(seed) = args.seed {
        config = config.with_random_seed(seed);
    }
    if let Some(stream) = args.stream {
        config = config.with_rng_stream(stream.into());
    }
    if let Some(queries) = args.queries {
        config = config.with_query_count(queries);
    }
    if let Some(sizes) = &args.sizes {
        config = config.with_sizes(sizes.clone());
    }

    config.validate()?;
    Ok(config)
}

fn search(args: &GlobalArgs) -> CliResult<String> {
    let config = load_config(args)?;
    let reports = SearchSuite::new(&config).run();

    let output = render_search(&reports, args.format)?;
    write_report_files(&reports, &config.report)?;
    Ok(output)
}

/// Renders search reports in the requested format.
pub fn render_search(reports: &[SuiteReport], format: Format) -> CliResult<String> {
    Ok(match format {
        Format::Table => reports
            .iter()
            .map(TableReport::search)
            .collect::<Vec<_>>()
            .join("\n"),
        Format::Csv => CsvExporter::to_string(reports),
        Format::Markdown => MarkdownReport::to_string(reports),
        Format::Json => {
            let mut json = JsonExporter::to_string(reports)?;
            json.push('\n');
            json
        }
    })
}

fn write_report_files(reports: &[SuiteReport], report: &ReportConfig) -> CliResult {
    if let Some(path) = &report.csv_output {
        CsvExporter::to_file(reports, path).map_err(|e| write_error(path, e))?;
        announce(path);
    }
    if let Some(path) = &report.markdown_output {
        MarkdownReport::to_file(reports, path).map_err(|e| write_error(path, e))?;
        announce(path);
    }
    if let Some(path) = &report.json_output {
        JsonExporter::to_file(reports, path).map_err(|e| write_error(path, e))?;
        announce(path);
    }
    Ok(())
}

fn write_error(path: &Path, source: io::Error) -> CliError {
    CliError::Write {
        path: path.to_path_buf(),
        source,
    }
}

fn announce(path: &Path) {
    eprintln!("{} {}", "wrote".bright_green(), path.display());
}

fn pow(args: &GlobalArgs, x: Option<i64>) -> CliResult<String> {
    let mut power = load_config(args)?.power;
    if let Some(x) = x {
        power.base = x;
    }
    let report = PowerBenchmark::new(&power).run();
    Ok(TableReport::power(&report))
}

/// Converts `p` to base `b` and explains the cost.
pub fn base(p: i64, b: u32) -> CliResult<String> {
    let digits = to_base(p, b)?;
    let count = digit_count(p, b).unwrap_or(digits.len() as u32);

    let mut out = String::new();
    writeln!(out, "Result: {p} in base {b} = {digits}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Big-O Analysis:").unwrap();
    writeln!(out, "  Each iteration divides p by b, producing one digit.").unwrap();
    writeln!(out, "  {count} digits, about log_b(p).").unwrap();
    writeln!(out, "  Time Complexity: O(log_b(p))").unwrap();
    writeln!(out, "  Space Complexity: O(log_b(p)) for the output string.").unwrap();
    Ok(out)
}
