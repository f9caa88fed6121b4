//! End-of-run summary over the completed record buffer.
//!
//! Mirrors the quality check the dataset was originally published with:
//! total record count, a per-outlet breakdown, and how many records carry a
//! body longer than [`FULL_TEXT_THRESHOLD`] characters (the heuristic for
//! "extraction actually worked").

use itertools::Itertools;
use tracing::info;

use crate::models::Record;

/// Minimum body length, in characters, for a record to count as having
/// recovered the full text.
pub const FULL_TEXT_THRESHOLD: usize = 100;

/// Aggregated counts over one run's buffer.
#[derive(Debug, PartialEq, Eq)]
pub struct Summary {
    /// Total number of records collected.
    pub total: usize,
    /// Record count per outlet, descending by count then by name.
    pub por_medio: Vec<(String, usize)>,
    /// Records whose body exceeds [`FULL_TEXT_THRESHOLD`] characters.
    pub con_texto: usize,
}

/// Compute the summary for a record buffer.
pub fn summarize(records: &[Record]) -> Summary {
    let mut por_medio: Vec<(String, usize)> = records
        .iter()
        .map(|r| r.medio.clone())
        .counts()
        .into_iter()
        .collect();
    por_medio.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let con_texto = records
        .iter()
        .filter(|r| r.texto.chars().count() > FULL_TEXT_THRESHOLD)
        .count();

    Summary {
        total: records.len(),
        por_medio,
        con_texto,
    }
}

/// Emit the summary block on the console.
pub fn log_summary(summary: &Summary) {
    info!(total = summary.total, "Total de noticias");
    for (medio, count) in &summary.por_medio {
        info!(medio = %medio, noticias = *count, "Noticias por medio");
    }
    info!(
        con_texto = summary.con_texto,
        "Noticias con texto completo recuperado"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(medio: &str, texto: &str) -> Record {
        Record {
            fecha: "Mon, 24 Nov 2025 12:00:00 GMT".to_string(),
            medio: medio.to_string(),
            titulo: "Título".to_string(),
            texto: texto.to_string(),
            url: "https://example.com/nota".to_string(),
        }
    }

    #[test]
    fn test_summarize_counts_per_medio() {
        let long = "x".repeat(150);
        let records = vec![
            record("Infobae", &long),
            record("Infobae", ""),
            record("Clarin", &long),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.total, 3);
        assert_eq!(
            summary.por_medio,
            vec![("Infobae".to_string(), 2), ("Clarin".to_string(), 1)]
        );
        assert_eq!(summary.con_texto, 2);
    }

    #[test]
    fn test_threshold_is_strictly_greater_than() {
        let exactly_100 = "x".repeat(100);
        let records = vec![record("Infobae", &exactly_100)];
        assert_eq!(summarize(&records).con_texto, 0);

        let records = vec![record("Infobae", &"x".repeat(101))];
        assert_eq!(summarize(&records).con_texto, 1);
    }

    #[test]
    fn test_threshold_counts_characters_not_bytes() {
        // 101 accented characters exceed the threshold even though the
        // byte length is over 200 either way.
        let records = vec![record("Pagina 12", &"á".repeat(101))];
        assert_eq!(summarize(&records).con_texto, 1);

        let records = vec![record("Pagina 12", &"á".repeat(100))];
        assert_eq!(summarize(&records).con_texto, 0);
    }

    #[test]
    fn test_summarize_empty_buffer() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.por_medio.is_empty());
        assert_eq!(summary.con_texto, 0);
    }
}
