//! Largest-Triangle-Three-Buckets downsampling.
//!
//! Reduces a long series to at most `max_points` while preserving its visual
//! shape: the interior is partitioned into `max_points - 2` buckets and each
//! bucket keeps the single point forming the largest triangle with the
//! previously selected point and the next bucket's average. The first and
//! last input points are always kept verbatim, so peaks and endpoints survive
//! aggressive budgets.

use crate::domain::{Series, SeriesPoint};
use crate::error::AppError;
use crate::series::datekey::epoch_ms;

/// Downsample `series` to at most `max_points` points.
///
/// Returns the input unchanged when it already fits the budget. `max_points`
/// below 2 is a caller error: the algorithm cannot keep both endpoints.
pub fn downsample(series: &[SeriesPoint], max_points: usize) -> Result<Series, AppError> {
    if max_points < 2 {
        return Err(AppError::usage(format!(
            "Downsample budget must be at least 2 points (got {max_points})."
        )));
    }
    let n = series.len();
    if n <= max_points {
        return Ok(series.to_vec());
    }

    let xs = x_coords(series);
    let bucket_size = (n - 2) as f64 / (max_points - 2) as f64;

    let mut sampled: Series = Vec::with_capacity(max_points);
    sampled.push(series[0].clone());
    let mut prev_idx = 0usize;

    for i in 0..max_points - 2 {
        // Average of the *next* bucket serves as the projection anchor.
        let avg_start = ((i + 1) as f64 * bucket_size).floor() as usize + 1;
        let avg_end = (((i + 2) as f64 * bucket_size).floor() as usize + 1).min(n);
        let mut avg_x = 0.0;
        let mut avg_y = 0.0;
        let mut count = 0usize;
        for j in avg_start..avg_end {
            avg_x += xs[j];
            avg_y += series[j].value;
            count += 1;
        }
        let count = count.max(1) as f64;
        avg_x /= count;
        avg_y /= count;

        let range_offs = (i as f64 * bucket_size).floor() as usize + 1;
        let range_to = (((i + 1) as f64 * bucket_size).floor() as usize + 1).min(n);

        let ax = xs[prev_idx];
        let ay = series[prev_idx].value;

        // Shoelace cross term, halved. Strictly-greater comparison keeps the
        // first maximum in bucket-scan order on ties.
        let mut max_area = -1.0;
        let mut max_idx = range_offs;
        for j in range_offs..range_to {
            let area =
                ((ax - avg_x) * (series[j].value - ay) - (ax - xs[j]) * (avg_y - ay)).abs() * 0.5;
            if area > max_area {
                max_area = area;
                max_idx = j;
            }
        }
        sampled.push(series[max_idx].clone());
        prev_idx = max_idx;
    }

    sampled.push(series[n - 1].clone());
    Ok(sampled)
}

/// Numeric x-coordinate per point. Falls back to plain indices for the whole
/// series if any date key fails to parse, so one malformed key cannot skew
/// the geometry of its neighbors.
fn x_coords(series: &[SeriesPoint]) -> Vec<f64> {
    let parsed: Option<Vec<f64>> = series.iter().map(|p| epoch_ms(&p.date)).collect();
    parsed.unwrap_or_else(|| (0..series.len()).map(|i| i as f64).collect())
}
