use crate::error::ExportError;
use crate::stats::Summary;
use crate::types::{ContactTableRow, RankingRow, ScoredContact, EXPORT_COLUMNS};
use crate::util::{format_int, format_number};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};
use tracing::info;

pub const DEFAULT_EXPORT_FILE: &str = "scored_contacts.csv";

/// Write contacts as CSV: input columns plus `score`, no index column.
/// The header is always written, so an empty result still exports a valid file.
pub fn write_export<W: Write>(writer: W, rows: &[ScoredContact]) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(EXPORT_COLUMNS)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// The export as UTF-8 bytes, ready for a download response.
pub fn export_csv_bytes(rows: &[ScoredContact]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_export(&mut buf, rows)?;
    Ok(buf)
}

pub fn write_csv<P: AsRef<Path>>(path: P, rows: &[ScoredContact]) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_export(file, rows)?;
    info!(path = %path.display(), rows = rows.len(), "filtered contacts exported");
    Ok(())
}

pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), ExportError> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

pub fn print_metrics(summary: &Summary) {
    println!("Total Contacts:      {}", format_int(summary.count));
    println!("Average Lead Score:  {}", summary.mean_score_label());
    println!("Highest Engagement:  {}", summary.max_engagement_label());
    println!();
}

pub fn contact_table_rows(rows: &[ScoredContact]) -> Vec<ContactTableRow> {
    rows.iter()
        .map(|c| ContactTableRow {
            name: c.name.clone(),
            email: c.email.clone(),
            engagement: format_number(c.engagement, 1),
            revenue: format_number(c.revenue, 2),
            industry_fit: format_number(c.industry_fit, 1),
            score: format_number(c.score, 1),
            tier: c.tier().label(),
        })
        .collect()
}

pub fn ranking_rows(ranked: &[ScoredContact]) -> Vec<RankingRow> {
    ranked
        .iter()
        .enumerate()
        .map(|(idx, c)| RankingRow {
            rank: idx + 1,
            name: c.name.clone(),
            score: format_number(c.score, 1),
        })
        .collect()
}

pub fn render_table<T>(rows: &[T], max_rows: usize) -> Option<String>
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().take(max_rows).cloned().collect();
    if slice.is_empty() {
        return None;
    }
    Some(Table::new(slice).with(Style::markdown()).to_string())
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    match render_table(rows, max_rows) {
        Some(table_str) => println!("{}\n", table_str),
        None => println!("(no rows)\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(name: &str, score: f64) -> ScoredContact {
        ScoredContact {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            engagement: 50.0,
            revenue: 1250.5,
            industry_fit: 80.0,
            score,
        }
    }

    #[test]
    fn export_has_header_and_score_last() {
        let bytes = export_csv_bytes(&[scored("ada", 74.0)]).expect("export succeeds");
        let text = String::from_utf8(bytes).expect("utf-8");
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("name,email,engagement,revenue,industry_fit,score")
        );
        assert_eq!(lines.next(), Some("ada,ada@example.com,50.0,1250.5,80.0,74.0"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_export_is_header_only() {
        let bytes = export_csv_bytes(&[]).expect("export succeeds");
        assert_eq!(
            String::from_utf8(bytes).expect("utf-8"),
            "name,email,engagement,revenue,industry_fit,score\n"
        );
    }

    #[test]
    fn export_quotes_fields_with_commas() {
        let mut c = scored("ada", 10.0);
        c.name = "Lovelace, Ada".to_string();
        let text = String::from_utf8(export_csv_bytes(&[c]).expect("export")).expect("utf-8");
        assert!(text.contains("\"Lovelace, Ada\""));
    }

    #[test]
    fn table_rows_carry_tier() {
        let rows = contact_table_rows(&[scored("a", 85.0), scored("b", 50.0), scored("c", 49.9)]);
        let tiers: Vec<&str> = rows.iter().map(|r| r.tier).collect();
        assert_eq!(tiers, vec!["High", "Medium", "Low"]);
        assert_eq!(rows[0].revenue, "1,250.50");
    }

    #[test]
    fn ranking_rows_are_numbered_from_one() {
        let rows = ranking_rows(&[scored("a", 90.0), scored("b", 80.0)]);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].score, "80.0");
    }

    #[test]
    fn render_table_respects_row_limit() {
        let rows = contact_table_rows(&[scored("a", 1.0), scored("b", 2.0), scored("c", 3.0)]);
        let table = render_table(&rows, 2).expect("non-empty table");
        assert!(table.contains("| a "));
        assert!(table.contains("| b "));
        assert!(!table.contains("| c "));
        assert!(render_table::<ContactTableRow>(&[], 5).is_none());
    }
}
