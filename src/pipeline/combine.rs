//! Merging Bracken reports from several samples into one table.
//!
//! Rows are samples, columns are taxa. Every input is read completely
//! before the table is built, so nothing is written if any input fails.

use crate::count_table::{CountTable, CountTableBuilder};
use crate::io::bracken::{coerce_read_count, read_report};
use crate::io::BrackenError;
use crate::metadata::SampleNamer;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Reads every report and combines their counts into a single table.
///
/// # Arguments
///
/// * `files` - Bracken reports, one per sample, in the order rows should appear.
/// * `namer` - Derives each report's sample label from its file name.
///
/// # Returns
///
/// * `Result<CountTable, BrackenError>` - The combined table, or the first
///   error encountered while reading.
pub fn combine_reports(files: &[PathBuf], namer: &SampleNamer) -> Result<CountTable, BrackenError> {
    let mut builder = CountTableBuilder::new();
    debug!("Sample label patterns: {:?}", namer.patterns());

    for path in files {
        let sample = namer.sample_label(path);
        let counts = read_sample_counts(path)?;
        info!(
            "Read {} taxa for sample '{}' from {}",
            counts.len(),
            sample,
            path.display()
        );

        if builder.add_sample(sample.clone(), counts).is_some() {
            warn!(
                "Sample label '{}' derived more than once; keeping counts from {}",
                sample,
                path.display()
            );
        }
    }

    debug!("Combined {} samples", builder.sample_count());
    Ok(builder.build())
}

/// Reads one report into a taxon -> count map.
///
/// A taxon repeated within the file keeps the count from its last row.
fn read_sample_counts(path: &Path) -> Result<HashMap<String, i64>, BrackenError> {
    let mut counts = HashMap::new();

    for record in read_report(path)? {
        let count = coerce_read_count(&record.new_est_reads).ok_or_else(|| {
            BrackenError::InvalidCount {
                path: path.to_path_buf(),
                line: record.line,
                taxon: record.taxon().to_string(),
                value: record.new_est_reads.clone(),
            }
        })?;

        if let Some(previous) = counts.insert(record.taxon().to_string(), count) {
            debug!(
                "{} line {}: '{}' repeated, replacing {} with {}",
                path.display(),
                record.line,
                record.taxon(),
                previous,
                count
            );
        }
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::write_count_table;
    use std::fs;
    use tempfile::tempdir;

    fn write_report(dir: &Path, name: &str, rows: &[(&str, &str)]) -> PathBuf {
        let mut content = String::from("name\ttaxonomy_id\tnew_est_reads\n");
        for (taxon, reads) in rows {
            content.push_str(&format!("{}\t0\t{}\n", taxon, reads));
        }
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_two_sample_scenario() {
        let dir = tempdir().unwrap();
        let files = vec![
            write_report(dir.path(), "S1_bracken_S.txt", &[("Ecoli", "100")]),
            write_report(dir.path(), "S2_bracken_G.txt", &[("Salmonella", "50.0")]),
        ];
        let output = dir.path().join("combined.tsv");

        let table = combine_reports(&files, &SampleNamer::default()).unwrap();
        write_count_table(&table, &output).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Sample\tEcoli\tSalmonella\nS1\t100\t0\nS2\t0\t50\n"
        );
    }

    #[test]
    fn test_columns_are_trimmed_taxon_union() {
        let dir = tempdir().unwrap();
        let files = vec![
            write_report(
                dir.path(),
                "A_bracken_S.txt",
                &[("  Ecoli ", "1"), ("Bacillus", "2.9")],
            ),
            write_report(dir.path(), "B_bracken_S.txt", &[("Ecoli", "3"), ("Listeria", "1e2")]),
            write_report(dir.path(), "C.txt", &[]),
        ];

        let table = combine_reports(&files, &SampleNamer::default()).unwrap();

        assert_eq!(table.dimensions(), (3, 3));
        assert_eq!(table.sample_names(), &["A", "B", "C.txt"]);
        assert_eq!(table.taxon_names(), &["Bacillus", "Ecoli", "Listeria"]);
        let counts = table.counts_matrix();
        assert_eq!(counts.row(0).to_vec(), vec![2, 1, 0]);
        assert_eq!(counts.row(1).to_vec(), vec![0, 3, 100]);
        assert_eq!(counts.row(2).to_vec(), vec![0, 0, 0]);
    }

    #[test]
    fn test_repeated_taxon_last_row_wins() {
        let dir = tempdir().unwrap();
        let files = vec![write_report(
            dir.path(),
            "S1_bracken_S.txt",
            &[("Ecoli", "10"), ("Bacillus", "4"), (" Ecoli", "25")],
        )];

        let table = combine_reports(&files, &SampleNamer::default()).unwrap();

        assert_eq!(table.taxon_names(), &["Bacillus", "Ecoli"]);
        assert_eq!(table.counts_matrix().row(0).to_vec(), vec![4, 25]);
    }

    #[test]
    fn test_same_sample_label_later_file_replaces() {
        let dir = tempdir().unwrap();
        let files = vec![
            write_report(dir.path(), "S1_bracken_S.txt", &[("Ecoli", "10")]),
            write_report(dir.path(), "S2_bracken_S.txt", &[("Ecoli", "5")]),
            write_report(dir.path(), "S1_bracken_G.txt", &[("Escherichia", "12")]),
        ];

        let table = combine_reports(&files, &SampleNamer::default()).unwrap();

        assert_eq!(table.sample_names(), &["S1", "S2"]);
        assert_eq!(table.taxon_names(), &["Ecoli", "Escherichia"]);
        assert_eq!(table.counts_matrix().row(0).to_vec(), vec![0, 12]);
        assert_eq!(table.counts_matrix().row(1).to_vec(), vec![5, 0]);
    }

    #[test]
    fn test_invalid_count_reports_location() {
        let dir = tempdir().unwrap();
        let files = vec![write_report(
            dir.path(),
            "S1_bracken_S.txt",
            &[("Ecoli", "10"), ("Bacillus", "n/a")],
        )];

        match combine_reports(&files, &SampleNamer::default()) {
            Err(BrackenError::InvalidCount {
                line, taxon, value, ..
            }) => {
                assert_eq!(line, 3);
                assert_eq!(taxon, "Bacillus");
                assert_eq!(value, "n/a");
            }
            other => panic!("expected invalid count error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_input_aborts() {
        let dir = tempdir().unwrap();
        let files = vec![
            write_report(dir.path(), "S1_bracken_S.txt", &[("Ecoli", "10")]),
            dir.path().join("S2_bracken_S.txt"),
        ];

        let result = combine_reports(&files, &SampleNamer::default());

        assert!(matches!(result, Err(BrackenError::IoError { .. })));
    }
}
