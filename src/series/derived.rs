//! Derived economic signals built from pairs of aligned raw series.
//!
//! All combinations use inner-join semantics (`align_pair`): only dates
//! present in both inputs produce an output point, emitted in the first
//! argument's date order.

use crate::domain::{InversionEpisode, Series, SeriesPoint};
use crate::series::align::align_pair;

/// Yield-curve spread: long-term minus short-term yield per shared date.
///
/// Negative values mark an inverted curve, historically a recession signal.
pub fn yield_spread(long: &[SeriesPoint], short: &[SeriesPoint]) -> Series {
    combine(long, short, |l, s| l - s)
}

/// Real interest rate: nominal policy rate minus inflation per shared date.
///
/// Negative = accommodative policy, positive = restrictive.
pub fn real_rate(nominal: &[SeriesPoint], cpi: &[SeriesPoint]) -> Series {
    combine(nominal, cpi, |n, c| n - c)
}

/// Misery index: unemployment plus inflation per shared date.
pub fn misery_index(unemployment: &[SeriesPoint], cpi: &[SeriesPoint]) -> Series {
    combine(unemployment, cpi, |u, c| u + c)
}

fn combine(left: &[SeriesPoint], right: &[SeriesPoint], op: impl Fn(f64, f64) -> f64) -> Series {
    align_pair(left, right)
        .into_iter()
        .map(|p| SeriesPoint::new(p.date, op(p.left, p.right)))
        .collect()
}

/// Find maximal runs of negative values in a spread series.
///
/// Single linear pass with a running minimum: an episode opens at the first
/// negative point after a non-negative (or absent) state and closes at the
/// last point before the value returns to `>= 0`. A series that ends while
/// still negative emits a final episode with `ongoing = true`.
pub fn detect_inversions(spread: &[SeriesPoint]) -> Vec<InversionEpisode> {
    struct OpenEpisode {
        start: String,
        end: String,
        min: f64,
    }

    let mut episodes = Vec::new();
    let mut open: Option<OpenEpisode> = None;

    for point in spread {
        if point.value < 0.0 {
            match open.as_mut() {
                Some(ep) => {
                    ep.end = point.date.clone();
                    if point.value < ep.min {
                        ep.min = point.value;
                    }
                }
                None => {
                    open = Some(OpenEpisode {
                        start: point.date.clone(),
                        end: point.date.clone(),
                        min: point.value,
                    });
                }
            }
        } else if let Some(ep) = open.take() {
            episodes.push(InversionEpisode {
                start: ep.start,
                end: ep.end,
                max_inversion: ep.min,
                ongoing: false,
            });
        }
    }

    if let Some(ep) = open {
        episodes.push(InversionEpisode {
            start: ep.start,
            end: ep.end,
            max_inversion: ep.min,
            ongoing: true,
        });
    }

    episodes
}
