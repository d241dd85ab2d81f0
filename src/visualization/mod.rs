//! Export formats for external visualization tools.

pub mod krona;

pub use krona::{write_krona, KronaRow};
