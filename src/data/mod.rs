//! Data acquisition: the FRED client and the offline synthetic dataset.

pub mod fred;
pub mod sample;

pub use fred::*;
pub use sample::*;
