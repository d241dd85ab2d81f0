//! Input/Output operations module.
//!
//! Handles reading Bracken reports and writing the tab-separated tables
//! produced from them. Callers read every input before opening the output,
//! so a failed read never truncates an existing table.

pub mod bracken; // Sub-module specifically for Bracken report parsing

use crate::count_table::CountTable;
use csv::{Terminator, Writer, WriterBuilder};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

// --- Error Type ---
#[derive(Error, Debug)]
pub enum BrackenError {
    #[error("IO error reading {}: {source}", path.display())]
    IoError { path: PathBuf, source: io::Error },

    #[error("Malformed TSV in {}: {source}", path.display())]
    CsvError { path: PathBuf, source: csv::Error },

    #[error("{} is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error(
        "Invalid read count '{value}' for taxon '{taxon}' in {} (line {line})",
        path.display()
    )]
    InvalidCount {
        path: PathBuf,
        line: u64,
        taxon: String,
        value: String,
    },

    #[error("Cannot write output {}: {source}", path.display())]
    OutputError { path: PathBuf, source: io::Error },
}

/// Creates `output_path` and writes a tab-separated file to it.
///
/// The destination is opened like any other file: symlinks are followed,
/// permissions come from the process umask, and devices or FIFOs such as
/// `/dev/stdout` work.
///
/// # Arguments
///
/// * `output_path` - Destination file. Its directory must already exist.
/// * `write_rows` - Callback writing every record.
pub fn write_tsv<F>(output_path: &Path, write_rows: F) -> Result<(), BrackenError>
where
    F: FnOnce(&mut Writer<File>) -> Result<(), csv::Error>,
{
    let output_error = |source: io::Error| BrackenError::OutputError {
        path: output_path.to_path_buf(),
        source,
    };

    let file = File::create(output_path).map_err(output_error)?;
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);
    write_rows(&mut writer).map_err(|e| output_error(e.into()))?;
    writer.flush().map_err(output_error)?;
    Ok(())
}

/// Writes a CountTable as a samples-by-taxa TSV file.
///
/// The header is `Sample` followed by the taxa in table order; each row is
/// a sample label followed by its count for every taxon.
///
/// # Arguments
///
/// * `table` - The CountTable to write.
/// * `output_path` - The path to the output TSV file.
pub fn write_count_table(table: &CountTable, output_path: &Path) -> Result<(), BrackenError> {
    write_tsv(output_path, |writer| {
        // Prepare header: "Sample" followed by taxon names
        let mut header = Vec::with_capacity(table.taxon_names().len() + 1);
        header.push("Sample");
        header.extend(table.taxon_names().iter().map(String::as_str));
        writer.write_record(&header)?;

        for (sample, counts) in table.sample_names().iter().zip(table.counts_matrix().rows()) {
            let mut record = Vec::with_capacity(counts.len() + 1);
            record.push(sample.clone());
            record.extend(counts.iter().map(|count| count.to_string()));
            writer.write_record(&record)?;
        }
        Ok(())
    })
}
