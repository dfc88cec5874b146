//! Report generation for benchmark results.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use probebench_config::RngStream;
use probebench_core::PowStats;

use crate::result::{PowerReport, SuiteReport};

/// Cell text for an exponentiation that produced no value.
pub const OVERFLOW_LABEL: &str = "OVERFLOW/INVALID";

const SEARCH_COLUMNS: [(&str, usize); 7] = [
    ("n", 10),
    ("bin avg ns", 14),
    ("interp avg ns", 16),
    ("bin probes", 13),
    ("interp probes", 16),
    ("bin found", 12),
    ("interp found", 14),
];

const POWER_COLUMNS: [(&str, usize); 7] = [
    ("n", 6),
    ("RTL result", 20),
    ("LTR result", 20),
    ("RTL mul", 10),
    ("LTR mul", 10),
    ("RTL avg ns", 18),
    ("LTR avg ns", 18),
];

const POWER_RULE_WIDTH: usize = 100;

fn stream_name(stream: RngStream) -> &'static str {
    match stream {
        RngStream::Shared => "shared",
        RngStream::Reseeded => "reseeded",
    }
}

/// Fixed-width, left-aligned terminal tables.
///
/// # Example
///
/// ```
/// use probebench_benchmark::{SearchSummary, SuiteReport, SuiteRow, TableReport};
/// use probebench_config::RngStream;
/// use std::time::Duration;
///
/// let mut report = SuiteReport::new("search/uniform", "uniform", 1, RngStream::Shared, 4);
/// report.add_row(SuiteRow {
///     size: 1000,
///     binary: SearchSummary::new("binary", 4, 38, 2, Duration::from_nanos(400)),
///     interpolation: SearchSummary::new("interpolation", 4, 9, 2, Duration::from_nanos(200)),
/// });
///
/// let table = TableReport::search(&report);
/// let lines: Vec<&str> = table.lines().collect();
/// assert!(lines[0].starts_with("search/uniform"));
/// assert!(lines[1].starts_with("n         bin avg ns"));
/// assert!(lines[2].chars().all(|c| c == '-'));
/// assert!(lines[3].starts_with("1000      100.00        50.00           9.50         2.25"));
/// ```
pub struct TableReport;

impl TableReport {
    /// Renders one search suite: header line, column header, rule, rows.
    pub fn search(report: &SuiteReport) -> String {
        let mut output = String::new();
        writeln!(
            output,
            "{}: {} (seed {}, {} stream, {} queries)",
            report.name,
            report.distribution,
            report.seed,
            stream_name(report.rng_stream),
            report.query_count
        )
        .unwrap();

        let mut width = 0;
        for (title, column) in SEARCH_COLUMNS {
            write!(output, "{:<column$}", title).unwrap();
            width += column;
        }
        writeln!(output).unwrap();
        writeln!(output, "{}", "-".repeat(width)).unwrap();

        let widths = SEARCH_COLUMNS.map(|(_, column)| column);
        for row in &report.rows {
            let cells = [
                row.size.to_string(),
                format!("{:.2}", row.binary.avg_ns),
                format!("{:.2}", row.interpolation.avg_ns),
                format!("{:.2}", row.binary.avg_probes),
                format!("{:.2}", row.interpolation.avg_probes),
                format!("{:.2}", row.binary.found_rate),
                format!("{:.2}", row.interpolation.found_rate),
            ];
            for (cell, column) in cells.iter().zip(widths) {
                write!(output, "{:<column$}", cell).unwrap();
            }
            writeln!(output).unwrap();
        }

        output
    }

    /// Renders the exponentiation table.
    ///
    /// # Example
    ///
    /// ```
    /// use probebench_benchmark::{PowerBenchmark, TableReport};
    /// use probebench_config::PowerConfig;
    ///
    /// let config = PowerConfig { exponents: vec![2, 30], warmup: 0, repetitions: 5, ..PowerConfig::default() };
    /// let table = TableReport::power(&PowerBenchmark::new(&config).run());
    ///
    /// assert!(table.contains("x = 7"));
    /// assert!(table.contains("OVERFLOW/INVALID"));
    /// assert!(table.lines().any(|line| line.starts_with("2     49                  49                  2         3")));
    /// ```
    pub fn power(report: &PowerReport) -> String {
        let mut output = String::new();
        writeln!(output, "x^n using right-to-left and left-to-right").unwrap();
        writeln!(output, "x = {}", report.base).unwrap();
        writeln!(output).unwrap();

        for (title, column) in POWER_COLUMNS {
            write!(output, "{:<column$}", title).unwrap();
        }
        writeln!(output).unwrap();
        writeln!(output, "{}", "-".repeat(POWER_RULE_WIDTH)).unwrap();

        let widths = POWER_COLUMNS.map(|(_, column)| column);
        for row in &report.rows {
            let cells = [
                row.exponent.to_string(),
                value_or_overflow(&row.right_to_left),
                value_or_overflow(&row.left_to_right),
                row.right_to_left.multiplications.to_string(),
                row.left_to_right.multiplications.to_string(),
                row.right_to_left_ns.to_string(),
                row.left_to_right_ns.to_string(),
            ];
            for (cell, column) in cells.iter().zip(widths) {
                write!(output, "{:<column$}", cell).unwrap();
            }
            writeln!(output).unwrap();
        }

        output
    }
}

fn value_or_overflow(stats: &PowStats<i64>) -> String {
    match stats.value() {
        Some(value) => value.to_string(),
        None => OVERFLOW_LABEL.to_string(),
    }
}

/// CSV exporter for search results.
///
/// One line per (suite, size, primitive).
///
/// # Example
///
/// ```
/// use probebench_benchmark::{CsvExporter, SuiteReport};
/// use probebench_config::RngStream;
///
/// let report = SuiteReport::new("search/uniform", "uniform", 1, RngStream::Shared, 10);
/// let csv = CsvExporter::to_string(&[report]);
/// assert!(csv.starts_with("suite,seed,rng_stream,n,strategy"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports search reports to a CSV string.
    pub fn to_string(reports: &[SuiteReport]) -> String {
        let mut output = String::new();

        writeln!(
            output,
            "suite,seed,rng_stream,n,strategy,queries,total_probes,hits,elapsed_ns,avg_ns,avg_probes,found_rate"
        )
        .unwrap();

        for report in reports {
            for row in &report.rows {
                for summary in [&row.binary, &row.interpolation] {
                    writeln!(
                        output,
                        "{},{},{},{},{},{},{},{},{},{:.2},{:.4},{:.4}",
                        report.name,
                        report.seed,
                        stream_name(report.rng_stream),
                        row.size,
                        summary.strategy,
                        summary.queries,
                        summary.total_probes,
                        summary.hits,
                        summary.elapsed_ns,
                        summary.avg_ns,
                        summary.avg_probes,
                        summary.found_rate,
                    )
                    .unwrap();
                }
            }
        }

        output
    }

    /// Exports search reports to a CSV file.
    pub fn to_file(reports: &[SuiteReport], path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(reports))
    }

    /// Writes search reports as CSV to a writer.
    pub fn write<W: Write>(reports: &[SuiteReport], mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(reports).as_bytes())
    }
}

/// Markdown report generator.
///
/// # Example
///
/// ```
/// use probebench_benchmark::{MarkdownReport, SuiteReport};
/// use probebench_config::RngStream;
///
/// let report = SuiteReport::new("search/clustered", "clustered", 3, RngStream::Reseeded, 10);
/// let md = MarkdownReport::to_string(&[report]);
/// assert!(md.contains("## search/clustered"));
/// assert!(md.contains("*No rows.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(reports: &[SuiteReport]) -> String {
        let mut output = String::new();

        writeln!(output, "# Search Benchmark").unwrap();
        writeln!(output).unwrap();

        for report in reports {
            writeln!(output, "## {}", report.name).unwrap();
            writeln!(output).unwrap();
            writeln!(output, "- **Distribution**: {}", report.distribution).unwrap();
            writeln!(output, "- **Seed**: {}", report.seed).unwrap();
            writeln!(output, "- **Stream**: {}", stream_name(report.rng_stream)).unwrap();
            writeln!(output, "- **Queries**: {}", report.query_count).unwrap();
            writeln!(output).unwrap();

            if report.rows.is_empty() {
                writeln!(output, "*No rows.*").unwrap();
                writeln!(output).unwrap();
                continue;
            }

            writeln!(
                output,
                "| n | Binary ns | Interp ns | Binary probes | Interp probes | Binary found | Interp found |"
            )
            .unwrap();
            writeln!(
                output,
                "|---|-----------|-----------|---------------|---------------|--------------|--------------|"
            )
            .unwrap();
            for row in &report.rows {
                writeln!(
                    output,
                    "| {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2}% | {:.2}% |",
                    row.size,
                    row.binary.avg_ns,
                    row.interpolation.avg_ns,
                    row.binary.avg_probes,
                    row.interpolation.avg_probes,
                    row.binary.found_rate * 100.0,
                    row.interpolation.found_rate * 100.0,
                )
                .unwrap();
            }
            writeln!(output).unwrap();
        }

        output
    }

    /// Writes a Markdown report to a file.
    pub fn to_file(reports: &[SuiteReport], path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(reports))
    }
}

/// JSON exporter for search results.
pub struct JsonExporter;

impl JsonExporter {
    /// Serializes search reports as pretty-printed JSON.
    pub fn to_string(reports: &[SuiteReport]) -> serde_json::Result<String> {
        serde_json::to_string_pretty(reports)
    }

    /// Writes search reports as JSON to a file.
    pub fn to_file(reports: &[SuiteReport], path: impl AsRef<Path>) -> io::Result<()> {
        let json = Self::to_string(reports).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::result::{SearchSummary, SuiteRow};

    fn sample_report() -> SuiteReport {
        let mut report = SuiteReport::new("search/uniform", "uniform", 42, RngStream::Shared, 2);
        report.add_row(SuiteRow {
            size: 1000,
            binary: SearchSummary::new("binary", 2, 20, 1, Duration::from_nanos(300)),
            interpolation: SearchSummary::new("interpolation", 2, 5, 1, Duration::from_nanos(100)),
        });
        report
    }

    #[test]
    fn test_search_table_layout() {
        let table = TableReport::search(&sample_report());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "search/uniform: uniform (seed 42, shared stream, 2 queries)"
        );
        assert_eq!(lines[2].len(), 95);
        assert_eq!(
            lines[3].trim_end(),
            "1000      150.00        50.00           10.00        2.50            0.50        0.50"
        );
    }

    #[test]
    fn test_csv_rows() {
        let csv = CsvExporter::to_string(&[sample_report()]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "search/uniform,42,shared,1000,binary,2,20,1,300,150.00,10.0000,0.5000"
        );
        assert!(lines[2].contains(",interpolation,"));
    }

    #[test]
    fn test_csv_write() {
        let mut buffer = Vec::new();
        CsvExporter::write(&[sample_report()], &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            CsvExporter::to_string(&[sample_report()])
        );
    }

    #[test]
    fn test_markdown_table() {
        let md = MarkdownReport::to_string(&[sample_report()]);
        assert!(md.contains("# Search Benchmark"));
        assert!(md.contains("| 1000 | 150.00 | 50.00 | 10.00 | 2.50 | 50.00% | 50.00% |"));
    }

    #[test]
    fn test_json_round_trip_fields() {
        let json = JsonExporter::to_string(&[sample_report()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["rng_stream"], "shared");
        assert_eq!(value[0]["rows"][0]["binary"]["total_probes"], 20);
        assert_eq!(value[0]["rows"][0]["interpolation"]["strategy"], "interpolation");
    }
}
