//! Taxonomic ranks as Bracken reports them.
//!
//! Bracken re-estimates abundances at a single rank per run and the usual
//! pipelines name the result `<sample>_bracken_<code>.txt`, where `<code>`
//! is the one-letter rank code passed to `bracken -l`.

use std::fmt;

/// Taxonomic ranks that Bracken output files are routinely produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxonomicLevel {
    Family,
    Genus,
    Species,
}

impl TaxonomicLevel {
    /// Returns a string representation of the taxonomic level.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxonomicLevel::Family => "family",
            TaxonomicLevel::Genus => "genus",
            TaxonomicLevel::Species => "species",
        }
    }

    /// The one-letter rank code Bracken uses (`-l S`, `-l G`, ...).
    pub fn bracken_code(&self) -> char {
        match self {
            TaxonomicLevel::Family => 'F',
            TaxonomicLevel::Genus => 'G',
            TaxonomicLevel::Species => 'S',
        }
    }

    /// File-name suffix of a Bracken report at this level, e.g. `_bracken_S.txt`.
    pub fn bracken_suffix(&self) -> String {
        format!("_bracken_{}.txt", self.bracken_code())
    }

    /// Levels whose report suffixes are stripped when deriving sample labels,
    /// in the order they are applied.
    pub fn sample_suffix_levels() -> [TaxonomicLevel; 3] {
        [
            TaxonomicLevel::Species,
            TaxonomicLevel::Genus,
            TaxonomicLevel::Family,
        ]
    }
}

impl fmt::Display for TaxonomicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
