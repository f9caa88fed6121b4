//! # reforma_news
//!
//! One-shot batch collector for Argentine labor-reform news coverage.
//! Queries Google News RSS with a fixed set of site-scoped search phrases
//! (Infobae, Pagina 12, Clarin, El Destape), downloads each linked article,
//! extracts the body text, and writes the accumulated records to a CSV
//! dataset.
//!
//! ## Usage
//!
//! ```sh
//! reforma_news
//! reforma_news -o /data/dataset.csv --per-source-cap 50
//! ```
//!
//! ## Pipeline
//!
//! 1. **Feed retrieval**: one RSS search per catalog entry
//! 2. **Collection**: sequential article downloads, capped per source,
//!    with a fixed pause between downloads
//! 3. **Output**: CSV dataset plus a summary block on the console
//!
//! The run is fail-open end to end: a broken feed degrades its source to
//! zero entries, a broken article degrades to an empty body, and only
//! environment faults (unwritable output) abort the process.

use std::error::Error;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use reforma_news::article::ArticleFetcher;
use reforma_news::cli::Cli;
use reforma_news::collector;
use reforma_news::config::CollectorConfig;
use reforma_news::outputs::{csv, report};
use reforma_news::utils::ensure_writable_output;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("reforma_news starting up");

    let args = Cli::parse();
    debug!(?args.output_file, args.per_source_cap, args.article_delay_ms, "Parsed CLI arguments");

    let config = CollectorConfig::from_cli(&args);

    // Early check: fail before any network work if the output is doomed.
    ensure_writable_output(&config.output_file).await?;

    let fetcher = ArticleFetcher::new(&config)?;
    let datos = collector::run(&config, &fetcher).await;

    if csv::write_dataset_if_nonempty(&datos, &config.output_file)? {
        info!(path = %config.output_file.display(), "Se creó el archivo");
        report::log_summary(&report::summarize(&datos));
    }

    let elapsed = start_time.elapsed();
    info!(
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
