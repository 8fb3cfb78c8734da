//! Regime classification from the composite score.
//!
//! Five ordered bands over [0,100] plus an `Unknown` pseudo-regime for
//! missing scores. Band edges, colors, and descriptions are fixed so that
//! consumers can rely on stable labels across runs.

use serde::{Deserialize, Serialize};

/// Qualitative macro regime, ordered best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Regime {
    Expansion,
    LateCycle,
    Slowdown,
    RecessionRisk,
    Recession,
    /// Insufficient data to classify.
    Unknown,
}

impl Regime {
    pub fn label(self) -> &'static str {
        match self {
            Regime::Expansion => "Expansion",
            Regime::LateCycle => "Late-Cycle",
            Regime::Slowdown => "Slowdown",
            Regime::RecessionRisk => "Recession Risk",
            Regime::Recession => "Recession",
            Regime::Unknown => "Unknown",
        }
    }

    /// Inclusive score range for the band; `None` for `Unknown`.
    pub fn range(self) -> Option<(f64, f64)> {
        match self {
            Regime::Expansion => Some((80.0, 100.0)),
            Regime::LateCycle => Some((60.0, 79.0)),
            Regime::Slowdown => Some((40.0, 59.0)),
            Regime::RecessionRisk => Some((20.0, 39.0)),
            Regime::Recession => Some((0.0, 19.0)),
            Regime::Unknown => None,
        }
    }

    /// Hex color for presentation layers.
    pub fn color(self) -> &'static str {
        match self {
            Regime::Expansion => "#3de07a",
            Regime::LateCycle => "#ffd95e",
            Regime::Slowdown => "#f97316",
            Regime::RecessionRisk => "#ef4444",
            Regime::Recession => "#991b1b",
            Regime::Unknown => "#6b7280",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Regime::Expansion => "Strong growth, stable inflation, robust employment",
            Regime::LateCycle => "Mature expansion, potential overheating signals",
            Regime::Slowdown => "Decelerating growth, mixed signals",
            Regime::RecessionRisk => "Weak indicators, elevated recession probability",
            Regime::Recession => "Negative growth, rising unemployment",
            Regime::Unknown => "Insufficient data",
        }
    }
}

/// Map a composite score to its regime band (inclusive lower bounds).
pub fn classify(score: Option<f64>) -> Regime {
    let Some(score) = score else {
        return Regime::Unknown;
    };
    if score.is_nan() {
        return Regime::Unknown;
    }
    if score >= 80.0 {
        Regime::Expansion
    } else if score >= 60.0 {
        Regime::LateCycle
    } else if score >= 40.0 {
        Regime::Slowdown
    } else if score >= 20.0 {
        Regime::RecessionRisk
    } else {
        Regime::Recession
    }
}

/// Trend direction of the composite score over recent history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Flat => "→",
        }
    }
}

/// Compare the last two history entries; a move of more than one point either
/// way counts as a trend, anything less is flat. Short histories are flat.
pub fn trend(history: &[f64]) -> Trend {
    if history.len() < 2 {
        return Trend::Flat;
    }
    let diff = history[history.len() - 1] - history[history.len() - 2];
    if diff > 1.0 {
        Trend::Up
    } else if diff < -1.0 {
        Trend::Down
    } else {
        Trend::Flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive_lower_bounds() {
        assert_eq!(classify(Some(100.0)), Regime::Expansion);
        assert_eq!(classify(Some(80.0)), Regime::Expansion);
        assert_eq!(classify(Some(79.9)), Regime::LateCycle);
        assert_eq!(classify(Some(60.0)), Regime::LateCycle);
        assert_eq!(classify(Some(59.9)), Regime::Slowdown);
        assert_eq!(classify(Some(40.0)), Regime::Slowdown);
        assert_eq!(classify(Some(20.0)), Regime::RecessionRisk);
        assert_eq!(classify(Some(19.9)), Regime::Recession);
        assert_eq!(classify(Some(0.0)), Regime::Recession);
    }

    #[test]
    fn missing_or_nan_scores_are_unknown() {
        assert_eq!(classify(None), Regime::Unknown);
        assert_eq!(classify(Some(f64::NAN)), Regime::Unknown);
        assert_eq!(Regime::Unknown.range(), None);
        assert_eq!(Regime::Unknown.description(), "Insufficient data");
    }

    #[test]
    fn trend_thresholds() {
        assert_eq!(trend(&[70.0, 72.5]), Trend::Up);
        assert_eq!(trend(&[70.0, 69.2]), Trend::Flat);
        assert_eq!(trend(&[70.0, 68.0]), Trend::Down);
    }

    #[test]
    fn short_histories_are_flat() {
        assert_eq!(trend(&[]), Trend::Flat);
        assert_eq!(trend(&[55.0]), Trend::Flat);
    }

    #[test]
    fn trend_uses_only_the_last_two_entries() {
        assert_eq!(trend(&[10.0, 90.0, 50.0, 51.5]), Trend::Up);
    }
}
