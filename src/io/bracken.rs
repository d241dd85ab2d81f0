//! Functions specifically for reading Bracken abundance reports.
//!
//! A report is tab-separated with a header row. Only the `name` and
//! `new_est_reads` columns are used; `taxonomy_id`, `fraction_total_reads`
//! and any other columns are ignored.

use super::BrackenError;
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// Columns every Bracken report must provide.
pub const REQUIRED_COLUMNS: [&str; 2] = ["name", "new_est_reads"];

/// A single row of a Bracken report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BrackenRecord {
    /// Taxon label, as written (Bracken pads some names with spaces).
    pub name: String,
    /// Re-estimated read count, kept as the raw text.
    pub new_est_reads: String,
    /// 1-based line number in the source file.
    #[serde(skip)]
    pub line: u64,
}

impl BrackenRecord {
    /// The taxon label with surrounding whitespace removed.
    pub fn taxon(&self) -> &str {
        self.name.trim()
    }
}

/// Reads every data row of a Bracken report, in file order.
///
/// # Arguments
///
/// * `path` - Path to the report.
///
/// # Returns
///
/// * `Result<Vec<BrackenRecord>, BrackenError>` - The rows, or an error if the
///   file cannot be opened, is not valid TSV, or lacks a required column.
pub fn read_report(path: &Path) -> Result<Vec<BrackenRecord>, BrackenError> {
    let file = File::open(path).map_err(|source| BrackenError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(file);
    let csv_error = |source: csv::Error| BrackenError::CsvError {
        path: path.to_path_buf(),
        source,
    };

    let headers = reader.headers().map_err(csv_error)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(BrackenError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut records = Vec::new();
    let mut row = StringRecord::new();
    while reader.read_record(&mut row).map_err(csv_error)? {
        let mut record: BrackenRecord = row.deserialize(Some(&headers)).map_err(csv_error)?;
        record.line = row.position().map_or(0, |p| p.line());
        records.push(record);
    }

    Ok(records)
}

/// Converts a read-count field to an integer.
///
/// Accepts anything that parses as a finite float (`"100"`, `"50.0"`,
/// `"1.2e3"`, with optional surrounding whitespace) and truncates toward
/// zero, so `"45.9"` becomes `45`. Returns `None` for text that is not a
/// number, for NaN and infinities, and for values outside the `i64` range.
pub fn coerce_read_count(raw: &str) -> Option<i64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    // i64::MAX is not representable as f64; 2^63 is the first value out of range.
    if truncated < -9_223_372_036_854_775_808.0 || truncated >= 9_223_372_036_854_775_808.0 {
        return None;
    }
    Some(truncated as i64)
}
