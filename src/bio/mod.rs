//! Bioinformatics utilities module.
//!
//! Groups together the small amount of taxonomy knowledge needed to
//! interpret Bracken reports and the files they are written to.

pub mod taxonomy;

pub use taxonomy::TaxonomicLevel;
