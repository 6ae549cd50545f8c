//! CLI command implementations for hgss-breed.

pub(crate) mod ingest;
pub(crate) mod plan;
pub(crate) mod rank;

mod output;

use clap::ValueEnum;
use hgss_breed::{DataError, Progress};
use indicatif::{ProgressBar, ProgressStyle};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// Output format for the `plan` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PlanFormat {
    /// Markdown sections, one per plan.
    Md,
    /// Machine-readable JSON output.
    Json,
    /// CSV format, one row per step.
    Csv,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<DataError> for CliError {
    fn from(e: DataError) -> Self {
        Self::new(e.to_string())
    }
}

/// Initialise `env_logger`; `RUST_LOG` wins over `-v` flags.
pub(crate) fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Size the global rayon pool if a thread count was given.
pub(crate) fn configure_threads(threads: Option<usize>) {
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }
}

/// Print to stdout, or write to `out` when given.
pub(crate) fn emit(out: Option<&Path>, text: &str) -> Result<(), CliError> {
    match out {
        Some(path) => fs::write(path, text)
            .map_err(|e| CliError::new(format!("Failed to write {}: {e}", path.display()))),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

/// Progress bar driven by the library's [`Progress`] hook.
#[derive(Debug)]
pub(crate) struct BarProgress(ProgressBar);

impl BarProgress {
    /// A bar over `len` pair evaluations, or a hidden one when disabled.
    pub(crate) fn new(len: u64, enabled: bool) -> Self {
        if !enabled {
            return Self(ProgressBar::hidden());
        }
        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pairs ({per_sec})")
                .expect("valid template")
                .progress_chars("=>-"),
        );
        Self(pb)
    }

    /// Finish and clear the bar.
    pub(crate) fn finish(&self) {
        self.0.finish_and_clear();
    }
}

impl Progress for BarProgress {
    fn advance(&self) {
        self.0.inc(1);
    }
}
