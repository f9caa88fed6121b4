//! Article download and body-text extraction.
//!
//! One GET per article URL through a shared client carrying the fixed
//! desktop user-agent and the 10-second request timeout, followed by
//! readability-style main-content extraction. When readability finds no
//! usable text the raw paragraphs are joined as a fallback.
//!
//! The public surface is fail-open: [`ArticleFetcher::fetch_text`] returns a
//! plain `String` and maps every failure (timeout, connection error, bad
//! status, unparseable HTML) to the empty string. A failed download degrades
//! one record, never the batch.

use std::io::Cursor;

use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::CollectorConfig;
use crate::error::FetchError;

/// HTTP client plus extraction pipeline for article bodies.
pub struct ArticleFetcher {
    client: Client,
}

impl ArticleFetcher {
    /// Build the fetcher from the run configuration.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`reqwest::Error`] if the client cannot be
    /// constructed.
    pub fn new(config: &CollectorConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Download one article and extract its body text.
    ///
    /// Never fails: any error is logged and converted to an empty string, so
    /// the caller needs no protective block around it.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch_text(&self, url: &str) -> String {
        match self.try_fetch_text(url).await {
            Ok(text) => text,
            Err(e) => {
                warn!(%url, error = %e, "No se pudo descargar el texto; se guarda vacío");
                String::new()
            }
        }
    }

    async fn try_fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        // Redirects are common behind news.google.com links; extract against
        // the final URL so relative links resolve.
        let base = Url::parse(response.url().as_str())?;
        let body = response.text().await?;

        let mut reader = Cursor::new(body.as_bytes());
        let text = match readability::extractor::extract(&mut reader, &base) {
            Ok(product) => normalize_text(&product.text),
            Err(e) => {
                debug!(%url, error = %e, "Readability falló; se intenta con los párrafos");
                String::new()
            }
        };
        if !text.is_empty() {
            return Ok(text);
        }
        let fallback = paragraph_fallback(&body);
        if fallback.is_empty() {
            return Err(FetchError::EmptyBody);
        }
        Ok(fallback)
    }
}

/// Join the text of every `<p>` element as a last-resort extraction.
fn paragraph_fallback(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = Selector::parse("p").unwrap();
    let paragraphs: Vec<String> = document
        .select(&selector)
        .map(|p| p.text().collect::<Vec<_>>().join(" ").trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    normalize_text(&paragraphs.join("\n\n"))
}

/// Trim each line and collapse runs of blank lines into one separator.
fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_break = false;
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            pending_break = !out.is_empty();
            continue;
        }
        if pending_break {
            out.push_str("\n\n");
            pending_break = false;
        } else if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line);
    }
    out
}
