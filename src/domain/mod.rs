//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - time series primitives (`SeriesPoint`, `Series`)
//! - the latest-value snapshot used for scoring (`IndicatorSnapshot`)
//! - composite score outputs (`CompositeScore`, `SubindexSet`)
//! - inversion episodes detected in spread series (`InversionEpisode`)

pub mod types;

pub use types::*;
