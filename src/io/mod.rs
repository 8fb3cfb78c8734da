//! Input/output helpers: score exports (CSV/JSON).

pub mod export;

pub use export::*;
