//! Batch transforms over Bracken reports.
//!
//! Each transform is a one-shot pass: read input, reshape, write output.

pub mod combine;
pub mod convert;

pub use combine::combine_reports;
pub use convert::bracken_to_krona;
