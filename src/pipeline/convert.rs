//! Bracken report to Krona text conversion.

use crate::io::bracken::read_report;
use crate::io::BrackenError;
use crate::visualization::{write_krona, KronaRow};
use log::info;
use std::path::Path;

/// Converts one Bracken report into Krona text input.
///
/// Every data row becomes one output line, in input order: the raw
/// `new_est_reads` value and the trimmed `name`. Returns the number of rows
/// written.
pub fn bracken_to_krona(input: &Path, output: &Path) -> Result<usize, BrackenError> {
    let records = read_report(input)?;
    let rows: Vec<KronaRow<'_>> = records.iter().map(KronaRow::from).collect();
    write_krona(&rows, output)?;

    info!(
        "Wrote {} Krona rows from {} to {}",
        rows.len(),
        input.display(),
        output.display()
    );
    Ok(rows.len())
}
