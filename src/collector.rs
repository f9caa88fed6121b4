//! The sequential collection loop.
//!
//! Walks the query catalog in order. For each source: one feed fetch,
//! positional truncation to the per-source cap, then one article download
//! per retained entry with an unconditional pause after each. Feed failures
//! degrade the source to zero entries; article failures arrive here already
//! converted to empty body text. Nothing in this loop aborts the batch.

use tracing::{info, instrument, warn};

use crate::article::ArticleFetcher;
use crate::config::CollectorConfig;
use crate::feed;
use crate::models::Record;
use crate::utils::truncate_for_log;

/// Run the collection loop over the whole catalog and return the buffer of
/// records, in the order they were collected.
#[instrument(level = "info", skip_all)]
pub async fn run(config: &CollectorConfig, fetcher: &ArticleFetcher) -> Vec<Record> {
    let mut datos: Vec<Record> = Vec::new();

    for source in &config.queries {
        info!(medio = %source.medio, query = %source.query, "Consultando RSS");

        let entradas = match feed::fetch_entries(&config.feed_search_url, &source.query).await {
            Ok(entradas) => entradas,
            Err(e) => {
                warn!(medio = %source.medio, error = %e, "Feed ilegible; se sigue sin entradas");
                Vec::new()
            }
        };

        info!(medio = %source.medio, total = entradas.len(), "Procesando noticias");

        for (i, entry) in entradas.into_iter().take(config.per_source_cap).enumerate() {
            info!(
                n = i + 1,
                medio = %source.medio,
                titulo = %truncate_for_log(&entry.title, 40),
                "Guardando noticia"
            );

            let texto = fetcher.fetch_text(&entry.link).await;

            datos.push(Record {
                fecha: entry.published,
                medio: source.medio.clone(),
                titulo: entry.title,
                texto,
                url: entry.link,
            });

            // Applied after every entry, including the last of a source.
            tokio::time::sleep(config.article_delay).await;
        }
    }

    datos
}
