//! Sample metadata handling module.
//!
//! Bracken reports carry no sample identifier of their own, so the sample
//! label is recovered from the report's file name by stripping the
//! rank-specific suffix the pipeline appended to it.

use crate::bio::TaxonomicLevel;
use std::path::Path;

/// Derives sample labels from Bracken report paths.
///
/// Every occurrence of each pattern is removed from the file's base name,
/// one pattern after another in list order. A name matching none of the
/// patterns is used unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleNamer {
    patterns: Vec<String>,
}

impl SampleNamer {
    /// Creates a namer that strips the given patterns, in order.
    pub fn new(patterns: Vec<String>) -> Self {
        SampleNamer { patterns }
    }

    /// Returns the patterns this namer strips.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns the sample label for a Bracken report path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the report; only its final component is used.
    ///   A path without a final component (e.g. `..`) is used whole.
    pub fn sample_label(&self, path: &Path) -> String {
        let base = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy();

        self.patterns
            .iter()
            .filter(|pattern| !pattern.is_empty())
            .fold(base.into_owned(), |label, pattern| {
                label.replace(pattern.as_str(), "")
            })
    }
}

// Species, genus and family report suffixes.
impl Default for SampleNamer {
    fn default() -> Self {
        Self::new(
            TaxonomicLevel::sample_suffix_levels()
                .iter()
                .map(TaxonomicLevel::bracken_suffix)
                .collect(),
        )
    }
}
