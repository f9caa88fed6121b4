//! Google News RSS search feed retrieval.
//!
//! Builds a site-scoped search URL against the feed endpoint, fetches it,
//! and decodes the RSS 2.0 body into typed [`FeedEntry`] values. Entries are
//! returned in feed order; no re-sorting or relevance ranking happens here.
//!
//! The feed fetch deliberately goes through a bare [`reqwest::get`] without
//! an explicit timeout, matching the behavior the dataset was collected
//! with. Only article downloads carry a timeout.

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, instrument};

use crate::error::FeedError;
use crate::models::FeedEntry;

/// Locale parameters fixed to the Argentine edition of Google News.
const FEED_LOCALE: &str = "hl=es-419&gl=AR&ceid=AR:es-419";

/// Build the RSS search URL for a query phrase.
///
/// Only spaces are percent-encoded; the `site:` colon stays literal, which
/// is exactly the form the dataset was originally collected with and the
/// endpoint accepts.
pub fn search_url(base: &str, query: &str) -> String {
    format!("{}?q={}&{}", base, query.replace(' ', "%20"), FEED_LOCALE)
}

/// Fetch and decode the search feed for one query phrase.
///
/// # Errors
///
/// Returns [`FeedError::Http`] on network failure, [`FeedError::Xml`] on
/// malformed XML, or [`FeedError::MissingField`] when an `<item>` omits
/// title, link or pubDate. Callers treat any of these as zero entries for
/// the source.
#[instrument(level = "debug", skip(base))]
pub async fn fetch_entries(base: &str, query: &str) -> Result<Vec<FeedEntry>, FeedError> {
    let url = search_url(base, query);
    debug!(%url, "Fetching RSS search feed");
    let body = reqwest::get(&url).await?.text().await?;
    parse_entries(&body)
}

/// Decode an RSS 2.0 body into feed entries.
///
/// Walks the XML event stream, collecting `title`, `link` and `pubDate` per
/// `<item>`. Elements outside items (channel title, descriptions, source
/// tags) are ignored.
pub fn parse_entries(xml: &str) -> Result<Vec<FeedEntry>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut in_item = false;
    let mut current_tag = String::new();
    let mut title: Option<String> = None;
    let mut link: Option<String> = None;
    let mut published: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = std::str::from_utf8(e.name().as_ref())
                    .unwrap_or("")
                    .to_string();
                if name == "item" {
                    in_item = true;
                    title = None;
                    link = None;
                    published = None;
                } else {
                    current_tag = name;
                }
            }
            Ok(Event::End(e)) => {
                // Closing a child element ends its capture scope; stray
                // character data between children must not be attributed to
                // the previous tag.
                current_tag.clear();
                if e.name().as_ref() == b"item" && in_item {
                    in_item = false;
                    let index = entries.len();
                    entries.push(FeedEntry {
                        title: title.take().ok_or(FeedError::MissingField {
                            index,
                            field: "title",
                        })?,
                        published: published.take().ok_or(FeedError::MissingField {
                            index,
                            field: "pubDate",
                        })?,
                        link: link.take().ok_or(FeedError::MissingField {
                            index,
                            field: "link",
                        })?,
                    });
                }
            }
            Ok(Event::Text(e)) => {
                if in_item {
                    let text = e.unescape().unwrap_or_default().into_owned();
                    match current_tag.as_str() {
                        "title" => title = Some(text),
                        "link" => link = Some(text),
                        "pubDate" => published = Some(text),
                        _ => {}
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if in_item {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    match current_tag.as_str() {
                        "title" => title = Some(text),
                        "link" => link = Some(text),
                        "pubDate" => published = Some(text),
                        _ => {}
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FeedError::Xml(e)),
            _ => {}
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>"site:infobae.com reforma laboral" - Google Noticias</title>
    <item>
      <title>El Gobierno presentó la reforma laboral</title>
      <link>https://news.google.com/rss/articles/abc123</link>
      <guid isPermaLink="false">abc123</guid>
      <pubDate>Mon, 24 Nov 2025 12:00:00 GMT</pubDate>
      <description>&lt;a href="..."&gt;El Gobierno presentó la reforma laboral&lt;/a&gt;</description>
      <source url="https://www.infobae.com">Infobae</source>
    </item>
    <item>
      <title>Qué cambia con la reforma laboral</title>
      <link>https://news.google.com/rss/articles/def456</link>
      <pubDate>Sun, 23 Nov 2025 09:30:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_entries_in_feed_order() {
        let entries = parse_entries(SAMPLE_FEED).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "El Gobierno presentó la reforma laboral");
        assert_eq!(entries[0].published, "Mon, 24 Nov 2025 12:00:00 GMT");
        assert_eq!(entries[0].link, "https://news.google.com/rss/articles/abc123");
        assert_eq!(entries[1].title, "Qué cambia con la reforma laboral");
    }

    #[test]
    fn test_parse_empty_channel() {
        let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel></channel></rss>"#;
        let entries = parse_entries(xml).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_missing_pubdate_is_typed_fault() {
        let xml = r#"<rss version="2.0"><channel><item>
            <title>Sin fecha</title>
            <link>https://example.com/nota</link>
        </item></channel></rss>"#;
        let err = parse_entries(xml).unwrap_err();
        match err {
            FeedError::MissingField { index, field } => {
                assert_eq!(index, 0);
                assert_eq!(field, "pubDate");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_search_url_encoding_and_locale() {
        let url = search_url(
            "https://news.google.com/rss/search",
            "site:infobae.com reforma laboral",
        );
        assert!(url.starts_with("https://news.google.com/rss/search?q="));
        // Spaces become %20; the site: colon stays literal.
        assert!(url.contains("q=site:infobae.com%20reforma%20laboral"));
        assert!(!url.contains(' '));
        assert!(url.ends_with("&hl=es-419&gl=AR&ceid=AR:es-419"));
    }

    #[test]
    fn test_stray_text_between_children_is_ignored() {
        let xml = r#"<rss version="2.0"><channel><item>
            <title>Título real</title>ruido suelto<link>https://example.com/nota</link>
            <pubDate>Sat, 22 Nov 2025 08:00:00 GMT</pubDate>basura</item></channel></rss>"#;
        let entries = parse_entries(xml).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Título real");
        assert_eq!(entries[0].link, "https://example.com/nota");
        assert_eq!(entries[0].published, "Sat, 22 Nov 2025 08:00:00 GMT");
    }

    #[test]
    fn test_cdata_title() {
        let xml = r#"<rss version="2.0"><channel><item>
            <title><![CDATA[Paro general & reforma]]></title>
            <link>https://example.com/nota</link>
            <pubDate>Sat, 22 Nov 2025 08:00:00 GMT</pubDate>
        </item></channel></rss>"#;
        let entries = parse_entries(xml).unwrap();
        assert_eq!(entries[0].title, "Paro general & reforma");
    }
}
