//! Indicator scoring: normalization, the composite index, and regimes.

pub mod composite;
pub mod normalize;
pub mod regime;

pub use composite::*;
pub use normalize::*;
pub use regime::*;
