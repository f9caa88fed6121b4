//! Data models for feed entries and dataset records.
//!
//! Three flat shapes flow through the pipeline:
//! - [`SourceQuery`]: one catalog entry (outlet name + site-scoped search phrase)
//! - [`FeedEntry`]: one parsed `<item>` from the Google News RSS search feed
//! - [`Record`]: one row of the output dataset
//!
//! [`Record`] keeps the Spanish column names of the published dataset
//! (`fecha`, `medio`, `titulo`, `texto`, `url`); the CSV header row is
//! derived from the field names, so their order here is the column order.

use serde::{Deserialize, Serialize};

/// One entry of the query catalog: an outlet and its search phrase.
///
/// The phrase already embeds the `site:` scope, e.g.
/// `site:infobae.com reforma laboral`.
#[derive(Debug, Clone)]
pub struct SourceQuery {
    /// Display name of the outlet, copied verbatim into each [`Record`].
    pub medio: String,
    /// Site-scoped search phrase sent to the feed endpoint.
    pub query: String,
}

impl SourceQuery {
    pub fn new(medio: &str, query: &str) -> Self {
        Self {
            medio: medio.to_string(),
            query: query.to_string(),
        }
    }
}

/// One item parsed out of an RSS search feed.
///
/// All three fields are required; a feed item missing any of them is a
/// decoding fault, not a partially-filled entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// Article headline as published in the feed.
    pub title: String,
    /// Publication timestamp exactly as the feed provides it (not validated).
    pub published: String,
    /// Absolute URL of the article.
    pub link: String,
}

/// One row of the output dataset.
///
/// Records are immutable once appended; duplicate URLs across sources are
/// possible and kept. `texto` is empty when the article download or
/// extraction failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub fecha: String,
    pub medio: String,
    pub titulo: String,
    pub texto: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_csv_column_order() {
        let record = Record {
            fecha: "Mon, 24 Nov 2025 12:00:00 GMT".to_string(),
            medio: "Infobae".to_string(),
            titulo: "Título de prueba".to_string(),
            texto: String::new(),
            url: "https://example.com/nota".to_string(),
        };

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&record).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let header = out.lines().next().unwrap();
        assert_eq!(header, "fecha,medio,titulo,texto,url");
    }

    #[test]
    fn test_source_query_new() {
        let q = SourceQuery::new("Clarin", "site:clarin.com reforma laboral");
        assert_eq!(q.medio, "Clarin");
        assert!(q.query.starts_with("site:clarin.com"));
    }
}
