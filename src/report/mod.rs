//! Reporting utilities: formatted terminal output for scoring runs.

pub mod format;

pub use format::*;
