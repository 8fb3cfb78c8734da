//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during scoring
//! - exported to JSON/CSV
//! - consumed by a presentation layer without further conversion

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single observation in a time series.
///
/// `date` is an opaque, lexically sortable key: `YYYY-MM-DD`, `YYYY-MM`, or
/// `YYYY-Qn`. All points within one series use one consistent granularity.
/// The core never reparses dates except where the downsampler needs a numeric
/// timestamp for its geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// An ordered time series: strictly ascending by `date`, no duplicate keys.
///
/// Series are immutable once produced; every transform returns a new vector.
pub type Series = Vec<SeriesPoint>;

/// Latest value per indicator key (e.g. `"unemployment"`, `"cpi"`).
///
/// Missing indicators are simply absent. A `BTreeMap` keeps iteration order
/// deterministic for reports and exports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    values: BTreeMap<String, f64>,
}

impl IndicatorSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from the last point of each series.
    pub fn from_series(series: &BTreeMap<String, Series>) -> Self {
        Self::from_series_at(series, 0)
    }

    /// Build a snapshot from the `back`-th point counted from the end of each
    /// series (`back = 0` is the latest observation). Series shorter than
    /// `back + 1` points contribute nothing.
    pub fn from_series_at(series: &BTreeMap<String, Series>, back: usize) -> Self {
        let mut values = BTreeMap::new();
        for (key, points) in series {
            if points.len() > back {
                let point = &points[points.len() - 1 - back];
                if point.value.is_finite() {
                    values.insert(key.clone(), point.value);
                }
            }
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, f64)> {
        self.values.iter().map(|(k, v)| (k, *v))
    }
}

/// The five fixed sub-indices, each in [0,100] or `None` when every
/// constituent indicator was missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubindexSet {
    #[serde(rename = "LMI")]
    pub lmi: Option<f64>,
    #[serde(rename = "IMI")]
    pub imi: Option<f64>,
    #[serde(rename = "GSI")]
    pub gsi: Option<f64>,
    #[serde(rename = "CCI")]
    pub cci: Option<f64>,
    #[serde(rename = "PMI_SUB")]
    pub pmi_sub: Option<f64>,
}

/// The weighted composite score plus its sub-indices, all rounded to one
/// decimal. `value` is `None` only when all five sub-indices are missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    pub value: Option<f64>,
    pub subindices: SubindexSet,
}

/// A maximal contiguous run of negative values in a spread series.
///
/// `end` is never before `start`. `max_inversion` is the most negative value
/// observed inside the run (start and end inclusive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InversionEpisode {
    pub start: String,
    pub end: String,
    pub max_inversion: f64,
    pub ongoing: bool,
}
