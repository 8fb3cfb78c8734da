//! Time series transforms: alignment, derived metrics, downsampling.

pub mod align;
pub mod datekey;
pub mod derived;
pub mod lttb;

pub use align::*;
pub use derived::*;
pub use lttb::*;
