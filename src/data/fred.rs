//! FRED API integration for the macro indicator set.
//!
//! Each indicator maps to one FRED series plus a transform: yields and rates
//! are used as published, while index-level series (CPI, retail sales,
//! industrial production) are converted to year-over-year percent change and
//! GDP to quarter-over-quarter annualized growth, so downstream scoring only
//! ever sees growth rates in percent.

use std::collections::BTreeMap;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::{Series, SeriesPoint};
use crate::error::AppError;

const BASE_URL: &str = "https://api.stlouisfed.org/fred/series/observations";
const OBS_START: &str = "1990-01-01";
const OBS_LIMIT: usize = 100_000;

/// Denominators smaller than this yield the zero sentinel instead of a
/// growth rate, so a rebased index can never produce infinities.
const MIN_DENOMINATOR: f64 = 1e-9;

/// How raw observations become indicator values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transform {
    /// Use the published level as-is (rates, yields, unemployment).
    Level,
    /// Year-over-year percent change, 12 observations apart (monthly series).
    YoyPercent,
    /// Quarter-over-quarter percent change, annualized (x4).
    QoqAnnualized,
}

/// Indicator key, FRED series id, and transform.
const INDICATOR_SERIES: [(&str, &str, Transform); 9] = [
    ("unemployment", "UNRATE", Transform::Level),
    ("cpi", "CPIAUCSL", Transform::YoyPercent),
    ("coreCPI", "CPILFESL", Transform::YoyPercent),
    ("gdpGrowth", "GDP", Transform::QoqAnnualized),
    ("bondYield10Y", "DGS10", Transform::Level),
    ("bondYield2Y", "DGS2", Transform::Level),
    ("policyRate", "FEDFUNDS", Transform::Level),
    ("retailSales", "RSXFS", Transform::YoyPercent),
    ("industrialProduction", "INDPRO", Transform::YoyPercent),
];

pub struct FredClient {
    client: Client,
    api_key: String,
}

impl FredClient {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("FRED_API_KEY")
            .map_err(|_| AppError::usage("Missing FRED_API_KEY in environment (.env)."))?;
        Ok(Self {
            client: Client::new(),
            api_key,
        })
    }

    /// Fetch and transform every indicator series.
    ///
    /// Indicators FRED does not cover (PMI, consumer confidence, PPI,
    /// employment growth) are simply absent from the result; the composite
    /// calculation tolerates the gaps.
    pub fn fetch_indicators(&self) -> Result<BTreeMap<String, Series>, AppError> {
        let mut out = BTreeMap::new();
        for (key, series_id, transform) in INDICATOR_SERIES {
            let raw = self.fetch_series(series_id)?;
            let series = apply_transform(raw, transform);
            if series.is_empty() {
                return Err(AppError::data(format!(
                    "No usable observations for series {series_id} ({key})."
                )));
            }
            out.insert(key.to_string(), series);
        }
        Ok(out)
    }

    fn fetch_series(&self, series_id: &str) -> Result<Series, AppError> {
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("series_id", series_id),
                ("api_key", &self.api_key),
                ("file_type", "json"),
                ("sort_order", "asc"),
                ("observation_start", OBS_START),
                ("limit", &OBS_LIMIT.to_string()),
            ])
            .send()
            .map_err(|e| AppError::data(format!("FRED request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::data(format!(
                "FRED request for {series_id} failed with status {}.",
                resp.status()
            )));
        }

        let body: ObservationsResponse = resp
            .json()
            .map_err(|e| AppError::data(format!("Failed to parse FRED response: {e}")))?;

        let mut out = Vec::new();
        for obs in body.observations {
            // FRED encodes missing values as ".".
            let Some(value) = parse_value(&obs.value) else {
                continue;
            };
            out.push(SeriesPoint::new(obs.date, value));
        }
        Ok(out)
    }
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct Observation {
    date: String,
    value: String,
}

fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed == "." || trimmed.is_empty() {
        return None;
    }
    let v = trimmed.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

fn apply_transform(series: Series, transform: Transform) -> Series {
    match transform {
        Transform::Level => series,
        Transform::YoyPercent => percent_change(series, 12, 1.0),
        Transform::QoqAnnualized => percent_change(series, 1, 4.0),
    }
}

/// Percent change against the observation `lag` steps earlier, scaled by
/// `annualize`. Near-zero base values emit the zero sentinel.
fn percent_change(series: Series, lag: usize, annualize: f64) -> Series {
    if series.len() <= lag {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(series.len() - lag);
    for i in lag..series.len() {
        let base = series[i - lag].value;
        let value = if base.abs() < MIN_DENOMINATOR {
            0.0
        } else {
            (series[i].value - base) / base * 100.0 * annualize
        };
        out.push(SeriesPoint::new(series[i].date.clone(), value));
    }
    out
}
