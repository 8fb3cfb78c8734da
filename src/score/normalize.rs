//! Per-indicator normalization to a 0-100 "goodness" scale.
//!
//! Each indicator has its own piecewise-linear curve calibrated to historical
//! ranges: lower unemployment is better, inflation is penalized symmetrically
//! around the 2% target, PMI pivots at the 50 expansion threshold, and so on.
//! The mapping from key to curve is a closed enum so adding an indicator is a
//! data change in one match, not new control flow at call sites.

use serde::{Deserialize, Serialize};

/// Known indicator identifiers.
///
/// `Other` is the graceful-degradation bucket: unknown keys are not an error,
/// they score a neutral 50 and dilute nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Indicator {
    Unemployment,
    Cpi,
    #[serde(rename = "coreCPI")]
    CoreCpi,
    Ppi,
    GdpGrowth,
    Pmi,
    ConsumerConfidence,
    RetailSales,
    EmploymentGrowth,
    YieldCurve,
    PolicyRate,
    Other,
}

impl Indicator {
    pub fn from_key(key: &str) -> Self {
        match key {
            "unemployment" => Indicator::Unemployment,
            "cpi" => Indicator::Cpi,
            "coreCPI" => Indicator::CoreCpi,
            "ppi" => Indicator::Ppi,
            "gdpGrowth" => Indicator::GdpGrowth,
            "pmi" => Indicator::Pmi,
            "consumerConfidence" => Indicator::ConsumerConfidence,
            "retailSales" => Indicator::RetailSales,
            "employmentGrowth" => Indicator::EmploymentGrowth,
            "yieldCurve" => Indicator::YieldCurve,
            "policyRate" => Indicator::PolicyRate,
            _ => Indicator::Other,
        }
    }
}

/// Normalize a raw indicator value to [0,100]; `None` passes through.
pub fn normalize(value: Option<f64>, key: &str) -> Option<f64> {
    value.map(|v| score(v, Indicator::from_key(key)))
}

/// The indicator-specific piecewise curve, clamped to [0,100].
pub fn score(value: f64, indicator: Indicator) -> f64 {
    let raw = match indicator {
        // 2% = 100, 10% = 0.
        Indicator::Unemployment => 100.0 - (value - 2.0) * 12.5,

        // Symmetric penalty around the 2% target: 2% = 100, 0% or 4% = 60.
        Indicator::Cpi | Indicator::CoreCpi | Indicator::Ppi => 100.0 - (value - 2.0).abs() * 20.0,

        // Contraction is penalized much harder than slow growth.
        Indicator::GdpGrowth => {
            if value < 0.0 {
                50.0 + value * 5.0
            } else {
                value * 20.0
            }
        }

        // 50 is the expansion threshold; the slope steepens around it.
        Indicator::Pmi => {
            if value < 45.0 {
                value * 1.1
            } else if value < 50.0 {
                25.0 + (value - 45.0) * 5.0
            } else {
                50.0 + (value - 50.0) * 5.0
            }
        }

        // Typical survey range 80-120: 80 = 0, 100 = 50, 120 = 100.
        Indicator::ConsumerConfidence => (value - 80.0) * 2.5,

        // YoY growth: 0% = 25, 5%+ = 100, contraction drops off faster.
        Indicator::RetailSales => {
            if value < 0.0 {
                25.0 + value * 5.0
            } else {
                25.0 + value * 15.0
            }
        }

        // YoY growth: 0% = 25, 3%+ = 100.
        Indicator::EmploymentGrowth => {
            if value < 0.0 {
                25.0 + value * 10.0
            } else {
                25.0 + value * 25.0
            }
        }

        // Input in basis points. Deep inversion floors at 0, a mildly
        // positive curve is healthy, a very steep one caps at 100.
        Indicator::YieldCurve => {
            if value < -50.0 {
                0.0
            } else if value < 0.0 {
                25.0 + value * 0.5
            } else {
                50.0 + value * 0.25
            }
        }

        // Outside the 1-6% band policy is either too loose or too tight;
        // inside it the score peaks at the 3% neutral rate.
        Indicator::PolicyRate => {
            if value < 1.0 || value > 6.0 {
                40.0
            } else {
                70.0 + (3.0 - (value - 3.0).abs()) * 10.0
            }
        }

        Indicator::Other => 50.0,
    };

    raw.clamp(0.0, 100.0)
}
