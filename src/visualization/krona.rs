//! Krona text input.
//!
//! `ktImportText` reads one taxon per line as `count<TAB>label`, with no
//! header. Labels are written as single-level names; Krona builds the
//! chart from them directly.

use crate::io::bracken::BrackenRecord;
use crate::io::{write_tsv, BrackenError};
use std::path::Path;

/// One line of Krona text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KronaRow<'a> {
    /// Read count, copied verbatim from the Bracken report.
    pub count: &'a str,
    /// Trimmed taxon label.
    pub taxon: &'a str,
}

impl<'a> From<&'a BrackenRecord> for KronaRow<'a> {
    fn from(record: &'a BrackenRecord) -> Self {
        KronaRow {
            count: &record.new_est_reads,
            taxon: record.taxon(),
        }
    }
}

/// Writes Krona rows, in order, to `output_path`.
pub fn write_krona(rows: &[KronaRow<'_>], output_path: &Path) -> Result<(), BrackenError> {
    write_tsv(output_path, |writer| {
        for row in rows {
            writer.write_record([row.count, row.taxon])?;
        }
        Ok(())
    })
}
