//! Configuration types and CLI options.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_ANALYSIS_DELAY_MS, DEFAULT_ANALYSIS_TIMEOUT_SECS};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration, parsed from the command line.
///
/// URLs can be given as arguments for one-shot analysis, or omitted to read
/// submissions interactively from stdin.
#[derive(Debug, Clone, Parser)]
#[command(name = "site_audit", version, about)]
pub struct Config {
    /// URLs to analyze; when empty, submissions are read from stdin
    pub urls: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Simulated analysis duration in milliseconds
    #[arg(long, default_value_t = DEFAULT_ANALYSIS_DELAY_MS)]
    pub delay_ms: u64,

    /// Per-analysis deadline in seconds
    #[arg(long, default_value_t = DEFAULT_ANALYSIS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Print results as JSON instead of the rendered card
    #[arg(long)]
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            urls: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            delay_ms: DEFAULT_ANALYSIS_DELAY_MS,
            timeout_seconds: DEFAULT_ANALYSIS_TIMEOUT_SECS,
            json: false,
        }
    }
}
