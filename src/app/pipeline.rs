//! Shared scoring pipeline used by every CLI command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load series -> derived signals -> snapshot -> composite -> regime/trend
//!
//! Commands then focus on presentation (tables vs. per-series output).

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::data::{FredClient, generate_sample};
use crate::domain::{CompositeScore, IndicatorSnapshot, InversionEpisode, Series};
use crate::error::AppError;
use crate::score::{Regime, Trend, classify, compute_composite, trend};
use crate::series::{detect_inversions, downsample, misery_index, real_rate, yield_spread};

/// Keys under which derived signals are stored next to the raw series.
pub const YIELD_SPREAD_KEY: &str = "yieldSpread";
pub const REAL_RATE_KEY: &str = "realRate";
pub const MISERY_INDEX_KEY: &str = "miseryIndex";

/// Pipeline configuration derived from CLI flags.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Use the synthetic offline dataset instead of FRED.
    pub offline: bool,
    /// Seed for the offline dataset.
    pub seed: u64,
    /// How many trailing observations feed the composite history.
    pub trend_depth: usize,
}

/// All computed outputs of a single scoring run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Raw indicator series plus the derived signals.
    pub series: BTreeMap<String, Series>,
    pub inversions: Vec<InversionEpisode>,
    pub snapshot: IndicatorSnapshot,
    pub composite: CompositeScore,
    pub regime: Regime,
    pub trend: Trend,
    /// Composite history (oldest first) backing the trend direction.
    pub history: Vec<f64>,
}

/// Load raw indicator series from the configured source.
pub fn load_series(config: &RunConfig) -> Result<BTreeMap<String, Series>, AppError> {
    if config.offline {
        generate_sample(config.seed)
    } else {
        FredClient::from_env()?.fetch_indicators()
    }
}

/// Execute the full scoring pipeline.
pub fn run_score(config: &RunConfig) -> Result<RunOutput, AppError> {
    let raw = load_series(config)?;
    run_with_series(config, raw)
}

/// Execute the scoring pipeline over pre-loaded series.
///
/// Useful for tests and for callers that already fetched data.
pub fn run_with_series(
    config: &RunConfig,
    raw: BTreeMap<String, Series>,
) -> Result<RunOutput, AppError> {
    // Composite history: snapshot the raw indicators at each of the last
    // `trend_depth` observations. Steps where nothing is computable (very
    // short series) contribute no entry.
    let depth = config.trend_depth.max(1);
    let mut history = Vec::with_capacity(depth);
    for back in (0..depth).rev() {
        let snap = IndicatorSnapshot::from_series_at(&raw, back);
        if let Some(value) = compute_composite(&snap).value {
            history.push(value);
        }
    }

    let snapshot = IndicatorSnapshot::from_series(&raw);
    let composite = compute_composite(&snapshot);
    let regime = classify(composite.value);
    let trend = trend(&history);

    let mut series = raw;
    let mut inversions = Vec::new();

    let spread = match (series.get("bondYield10Y"), series.get("bondYield2Y")) {
        (Some(long), Some(short)) => Some(yield_spread(long, short)),
        _ => None,
    };
    if let Some(spread) = spread {
        inversions = detect_inversions(&spread);
        series.insert(YIELD_SPREAD_KEY.to_string(), spread);
    }

    let real = match (series.get("policyRate"), series.get("cpi")) {
        (Some(nominal), Some(cpi)) => Some(real_rate(nominal, cpi)),
        _ => None,
    };
    if let Some(real) = real {
        series.insert(REAL_RATE_KEY.to_string(), real);
    }

    let misery = match (series.get("unemployment"), series.get("cpi")) {
        (Some(unemployment), Some(cpi)) => Some(misery_index(unemployment, cpi)),
        _ => None,
    };
    if let Some(misery) = misery {
        series.insert(MISERY_INDEX_KEY.to_string(), misery);
    }

    Ok(RunOutput {
        series,
        inversions,
        snapshot,
        composite,
        regime,
        trend,
        history,
    })
}

/// Downsample every series to the given render budget.
///
/// Each series is independent, so the map is processed in parallel.
pub fn downsample_all(
    series: &BTreeMap<String, Series>,
    max_points: usize,
) -> Result<BTreeMap<String, Series>, AppError> {
    series
        .par_iter()
        .map(|(key, points)| downsample(points, max_points).map(|s| (key.clone(), s)))
        .collect()
}
