use crate::error::LoadError;
use crate::types::{Contact, RawRow, REQUIRED_COLUMNS};
use crate::util::parse_number;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub total_rows: usize,
    /// Header columns beyond the required set; read past, never used.
    pub ignored_columns: Vec<String>,
}

pub fn load_contacts<P: AsRef<Path>>(path: P) -> Result<(Vec<Contact>, LoadReport), LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (contacts, report) = from_reader(file)?;
    info!(path = %path.display(), rows = report.total_rows, "contacts loaded");
    Ok((contacts, report))
}

/// Parse contacts from any CSV source. The first row must be a header
/// containing every column in [`REQUIRED_COLUMNS`]; column order is free.
pub fn from_reader<R: Read>(reader: R) -> Result<(Vec<Contact>, LoadReport), LoadError> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    let ignored_columns = check_columns(&headers)?;
    if !ignored_columns.is_empty() {
        debug!(columns = ?ignored_columns, "ignoring extra columns");
    }

    let mut contacts = Vec::new();
    for result in rdr.records() {
        let record = result?;
        // Header sits on line 1.
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(contacts.len() as u64 + 2);
        if record.len() > headers.len() {
            return Err(LoadError::ExtraFields {
                line,
                expected: headers.len(),
                found: record.len(),
            });
        }
        let row: RawRow = record.deserialize(Some(&headers))?;
        contacts.push(clean_row(row, line)?);
    }

    let report = LoadReport {
        total_rows: contacts.len(),
        ignored_columns,
    };
    Ok((contacts, report))
}

fn check_columns(headers: &StringRecord) -> Result<Vec<String>, LoadError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns { missing });
    }
    Ok(headers
        .iter()
        .filter(|h| !REQUIRED_COLUMNS.contains(h))
        .map(str::to_string)
        .collect())
}

fn clean_row(row: RawRow, line: u64) -> Result<Contact, LoadError> {
    Ok(Contact {
        name: row.name.unwrap_or_default(),
        email: row.email.unwrap_or_default(),
        engagement: required_number(row.engagement, line, "engagement")?,
        revenue: required_number(row.revenue, line, "revenue")?,
        industry_fit: required_number(row.industry_fit, line, "industry_fit")?,
    })
}

fn required_number(
    value: Option<String>,
    line: u64,
    column: &'static str,
) -> Result<f64, LoadError> {
    let raw = value.ok_or(LoadError::MissingValue { line, column })?;
    parse_number(&raw).ok_or_else(|| LoadError::InvalidNumber {
        line,
        column,
        value: raw,
    })
}
