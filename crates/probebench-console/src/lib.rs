//! Colorful console output for benchmark progress.
//!
//! Provides a custom `tracing` layer that formats benchmark events with colors.
//! Events go to stderr so report tables on stdout can be piped cleanly.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (suite start/end, power start/end)
//! - **DEBUG**: One line per finished table row

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub use tracing::level_filters::LevelFilter;

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SUITE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output at INFO level.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default level.
pub fn init() {
    init_with_level(LevelFilter::INFO);
}

/// Initializes console output with the given default level.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init_with_level(level: LevelFilter) {
    INIT.get_or_init(|| {
        let directive = format!("probebench_benchmark={level}")
            .parse::<Directive>()
            .unwrap_or_else(|_| level.into());
        let filter = EnvFilter::builder()
            .with_default_directive(directive)
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BenchConsoleLayer)
            .try_init();
    });
}

/// Prints the banner to stderr.
pub fn print_banner() {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{} {}",
        "probebench".bright_cyan().bold(),
        format!("v{VERSION}").bright_white()
    );
    let _ = stderr.flush();
}

// Marks the start of a suite for elapsed time tracking.
fn mark_suite_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SUITE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since suite start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SUITE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

/// A tracing layer that formats benchmark events with colors.
pub struct BenchConsoleLayer;

impl<S: Subscriber> Layer<S> for BenchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("probebench") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    suite: Option<String>,
    message: Option<String>,
    sizes: Option<u64>,
    queries: Option<u64>,
    seed: Option<u64>,
    size: Option<u64>,
    rows: Option<u64>,
    exponents: Option<u64>,
    repetitions: Option<u64>,
    base: Option<i64>,
    exponent: Option<i64>,
    right_to_left_muls: Option<u64>,
    left_to_right_muls: Option<u64>,
    binary_probes: Option<f64>,
    interpolation_probes: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "suite" => self.suite = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "sizes" => self.sizes = Some(value),
            "queries" => self.queries = Some(value),
            "seed" => self.seed = Some(value),
            "size" => self.size = Some(value),
            "rows" => self.rows = Some(value),
            "exponents" => self.exponents = Some(value),
            "repetitions" => self.repetitions = Some(value),
            "right_to_left_muls" => self.right_to_left_muls = Some(value),
            "left_to_right_muls" => self.left_to_right_muls = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "base" => self.base = Some(value),
            "exponent" => self.exponent = Some(value),
            _ => self.record_u64(field, value as u64),
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "binary_probes" => self.binary_probes = Some(value),
            "interpolation_probes" => self.interpolation_probes = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "suite" => self.suite = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("suite_start") => format_suite_start(v),
        Some("row_complete") => format_row_complete(v),
        Some("suite_end") => format_suite_end(v),
        Some("power_start") => format_power_start(v),
        Some("power_row") => format_power_row(v),
        Some("power_end") => format_power_end(v),
        Some(_) => String::new(),
        None => v
            .message
            .as_deref()
            .map(|message| format!("{} {}", format_elapsed(), message))
            .unwrap_or_default(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_suite_start(v: &EventVisitor) -> String {
    mark_suite_start();
    format!(
        "{} {} {} │ {} sizes │ {} queries │ seed {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.suite.as_deref().unwrap_or("suite").white().bold(),
        format_count(v.sizes).bright_yellow(),
        format_count(v.queries).bright_yellow(),
        v.seed.unwrap_or(0).bright_magenta()
    )
}

fn format_row_complete(v: &EventVisitor) -> String {
    format!(
        "{} {} n = {:>9} │ binary {:>8.2} probes │ interpolation {:>10.2} probes",
        format_elapsed(),
        "·".bright_blue(),
        format_count(v.size).white(),
        v.binary_probes.unwrap_or(0.0).bright_cyan(),
        v.interpolation_probes.unwrap_or(0.0).bright_magenta()
    )
}

fn format_suite_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} complete │ {} rows",
        format_elapsed(),
        "■".bright_cyan().bold(),
        v.suite.as_deref().unwrap_or("suite").white().bold(),
        format_count(v.rows).bright_yellow()
    )
}

fn format_power_start(v: &EventVisitor) -> String {
    mark_suite_start();
    format!(
        "{} {} power │ x = {} │ {} exponents │ {} repetitions",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.base.unwrap_or(0).bright_magenta(),
        format_count(v.exponents).bright_yellow(),
        format_count(v.repetitions).bright_yellow()
    )
}

fn format_power_row(v: &EventVisitor) -> String {
    format!(
        "{} {} n = {:>3} │ {} vs {} multiplications",
        format_elapsed(),
        "·".bright_blue(),
        v.exponent.unwrap_or(0).white(),
        v.right_to_left_muls.unwrap_or(0).bright_cyan(),
        v.left_to_right_muls.unwrap_or(0).bright_magenta()
    )
}

fn format_power_end(v: &EventVisitor) -> String {
    format!(
        "{} {} power complete │ {} rows",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_count(v.rows).bright_yellow()
    )
}
