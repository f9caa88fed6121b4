//! Run configuration: the query catalog and the fixed collection parameters.
//!
//! Every tunable of a run lives in an immutable [`CollectorConfig`] built once
//! at startup and passed into the collector, rather than read from ambient
//! globals. The query catalog, locale, user-agent and article timeout are
//! compiled-in; output path, per-source cap and inter-article delay accept
//! CLI overrides that default to the same constants the dataset was
//! originally built with.

use std::path::PathBuf;
use std::time::Duration;

use once_cell::sync::Lazy;

use crate::cli::Cli;
use crate::models::SourceQuery;

/// Google News RSS search endpoint (query string appended per request).
pub const FEED_SEARCH_URL: &str = "https://news.google.com/rss/search";

/// Desktop browser user-agent sent with every article request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default output path for the CSV dataset.
pub const DEFAULT_OUTPUT_FILE: &str = "dataset_reforma_final.csv";

/// Default maximum number of feed entries kept per source.
pub const DEFAULT_PER_SOURCE_CAP: usize = 100;

/// Default pause between article downloads, in milliseconds.
pub const DEFAULT_ARTICLE_DELAY_MS: u64 = 500;

/// Per-request timeout for article downloads, in seconds.
pub const ARTICLE_TIMEOUT_SECS: u64 = 10;

/// The fixed catalog of outlets and site-scoped search phrases.
pub static DEFAULT_QUERIES: Lazy<Vec<SourceQuery>> = Lazy::new(|| {
    vec![
        SourceQuery::new("Infobae", "site:infobae.com reforma laboral"),
        SourceQuery::new("Pagina 12", "site:pagina12.com.ar reforma laboral"),
        SourceQuery::new("Clarin", "site:clarin.com reforma laboral"),
        SourceQuery::new("El Destape", "site:eldestapeweb.com reforma laboral"),
    ]
});

/// Immutable configuration for one collection run.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Catalog of (outlet, search phrase) pairs, processed in order.
    pub queries: Vec<SourceQuery>,
    /// Base URL of the RSS search endpoint.
    pub feed_search_url: String,
    /// Destination of the CSV dataset (overwritten on each run).
    pub output_file: PathBuf,
    /// Positional cap on feed entries per source.
    pub per_source_cap: usize,
    /// Unconditional pause after each article download.
    pub article_delay: Duration,
    /// Per-request timeout on article downloads.
    pub request_timeout: Duration,
    /// User-agent sent with article requests.
    pub user_agent: String,
}

impl CollectorConfig {
    /// Build the run configuration from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            queries: DEFAULT_QUERIES.clone(),
            feed_search_url: FEED_SEARCH_URL.to_string(),
            output_file: cli.output_file.clone(),
            per_source_cap: cli.per_source_cap,
            article_delay: Duration::from_millis(cli.article_delay_ms),
            request_timeout: Duration::from_secs(ARTICLE_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_queries_catalog() {
        assert_eq!(DEFAULT_QUERIES.len(), 4);
        assert_eq!(DEFAULT_QUERIES[0].medio, "Infobae");
        assert_eq!(DEFAULT_QUERIES[1].medio, "Pagina 12");
        assert_eq!(DEFAULT_QUERIES[2].medio, "Clarin");
        assert_eq!(DEFAULT_QUERIES[3].medio, "El Destape");
        for q in DEFAULT_QUERIES.iter() {
            assert!(q.query.starts_with("site:"));
            assert!(q.query.ends_with("reforma laboral"));
        }
    }

    #[test]
    fn test_user_agent_is_single_line() {
        assert!(!USER_AGENT.contains('\n'));
        assert!(USER_AGENT.starts_with("Mozilla/5.0"));
    }
}
