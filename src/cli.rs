//! Command-line interface definitions.
//!
//! The collector is a one-shot batch job, so the CLI is small: every flag is
//! an optional override of a constant from [`crate::config`], and a bare
//! `reforma_news` invocation reproduces the original dataset run exactly.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_ARTICLE_DELAY_MS, DEFAULT_OUTPUT_FILE, DEFAULT_PER_SOURCE_CAP};

/// Command-line arguments for the collector.
///
/// # Examples
///
/// ```sh
/// # Default run: writes dataset_reforma_final.csv in the working directory
/// reforma_news
///
/// # Smaller probe run with a custom destination
/// reforma_news -o /tmp/probe.csv --per-source-cap 5
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output path for the CSV dataset (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Maximum number of feed entries kept per source
    #[arg(long, default_value_t = DEFAULT_PER_SOURCE_CAP)]
    pub per_source_cap: usize,

    /// Pause between article downloads, in milliseconds
    #[arg(long, default_value_t = DEFAULT_ARTICLE_DELAY_MS)]
    pub article_delay_ms: u64,
}
