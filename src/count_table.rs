//! Defines structures for combining per-sample taxon counts.
//!
//! Counts are accumulated per sample with a `CountTableBuilder` and then
//! frozen into a dense `CountTable` whose rows are samples and whose
//! columns are taxa. Pairs that were never recorded are zero.

use indexmap::IndexMap;
use ndarray::Array2;
use std::collections::{BTreeSet, HashMap};

/// Accumulates taxon counts for a sequence of samples.
///
/// Samples keep the position at which they were first added. The taxon
/// union is kept sorted by byte value, which matches code-point order for
/// UTF-8 labels.
#[derive(Debug, Default)]
pub struct CountTableBuilder {
    samples: IndexMap<String, HashMap<String, i64>>,
    taxa: BTreeSet<String>,
}

impl CountTableBuilder {
    /// Creates a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sample and its taxon counts.
    ///
    /// If the sample label was already added, its counts are replaced but
    /// its row position is kept, and the replaced counts are returned.
    /// Taxa from the replaced counts stay in the taxon union.
    pub fn add_sample(
        &mut self,
        sample: String,
        counts: HashMap<String, i64>,
    ) -> Option<HashMap<String, i64>> {
        self.taxa.extend(counts.keys().cloned());
        self.samples.insert(sample, counts)
    }

    /// Number of distinct samples added so far.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Freezes the accumulated counts into a dense table.
    pub fn build(self) -> CountTable {
        let taxon_names: Vec<String> = self.taxa.into_iter().collect();
        let mut counts = Array2::zeros((self.samples.len(), taxon_names.len()));

        for (mut row, sample_counts) in counts.rows_mut().into_iter().zip(self.samples.values()) {
            for (cell, taxon) in row.iter_mut().zip(&taxon_names) {
                if let Some(&count) = sample_counts.get(taxon) {
                    *cell = count;
                }
            }
        }

        CountTable {
            counts,
            taxon_names,
            sample_names: self.samples.into_keys().collect(),
        }
    }
}

/// Represents a combined count table.
///
/// Stores counts along with the sample names (rows, in first-seen order)
/// and taxon names (columns, sorted ascending).
#[derive(Debug, Clone, PartialEq)]
pub struct CountTable {
    /// The core count data matrix (samples x taxa).
    counts: Array2<i64>,

    /// Column labels.
    taxon_names: Vec<String>,

    /// Row labels.
    sample_names: Vec<String>,
}

impl CountTable {
    /// Returns the dimensions of the count table (samples, taxa).
    pub fn dimensions(&self) -> (usize, usize) {
        self.counts.dim()
    }

    /// Returns a reference to the underlying count matrix.
    pub fn counts_matrix(&self) -> &Array2<i64> {
        &self.counts
    }

    /// Returns the list of taxon names.
    pub fn taxon_names(&self) -> &[String] {
        &self.taxon_names
    }

    /// Returns the list of sample names.
    pub fn sample_names(&self) -> &[String] {
        &self.sample_names
    }
}
