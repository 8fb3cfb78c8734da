//! Date-key parsing for series geometry.
//!
//! Series dates are opaque, lexically sortable strings everywhere else in the
//! core. The one exception is the downsampler, which needs a numeric timestamp
//! to compute triangle areas. This module converts the three supported
//! granularities to epoch milliseconds:
//!
//! - `YYYY-MM-DD` → that day
//! - `YYYY-MM`    → first day of the month
//! - `YYYY-Qn`    → first day of the quarter

use chrono::NaiveDate;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Convert a date key to epoch milliseconds, or `None` if it matches none of
/// the supported formats.
pub fn epoch_ms(date: &str) -> Option<f64> {
    let day = parse_day(date)?;
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    Some((day - epoch).num_days() as f64 * MS_PER_DAY)
}

fn parse_day(date: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(d);
    }

    let (year, rest) = date.split_once('-')?;
    let year: i32 = year.parse().ok()?;

    // Quarterly keys: "2024-Q3" → 2024-07-01.
    if let Some(q) = rest.strip_prefix('Q') {
        let q: u32 = q.parse().ok()?;
        if !(1..=4).contains(&q) {
            return None;
        }
        return NaiveDate::from_ymd_opt(year, (q - 1) * 3 + 1, 1);
    }

    // Monthly keys: "2024-07" → 2024-07-01.
    let month: u32 = rest.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_keys_parse() {
        assert_eq!(epoch_ms("1970-01-01"), Some(0.0));
        assert_eq!(epoch_ms("1970-01-02"), Some(86_400_000.0));
    }

    #[test]
    fn monthly_keys_parse_to_first_of_month() {
        assert_eq!(epoch_ms("2024-03"), epoch_ms("2024-03-01"));
    }

    #[test]
    fn quarterly_keys_parse_to_first_month() {
        assert_eq!(epoch_ms("2024-Q1"), epoch_ms("2024-01-01"));
        assert_eq!(epoch_ms("2024-Q3"), epoch_ms("2024-07-01"));
        assert_eq!(epoch_ms("2024-Q5"), None);
    }

    #[test]
    fn garbage_keys_are_rejected() {
        assert_eq!(epoch_ms("not-a-date"), None);
        assert_eq!(epoch_ms("2024"), None);
        assert_eq!(epoch_ms("2024-13"), None);
    }

    #[test]
    fn keys_order_matches_lexical_order() {
        let keys = ["2023-Q4", "2024-01", "2024-02-15", "2024-Q2"];
        let ms: Vec<f64> = keys.iter().map(|k| epoch_ms(k).unwrap()).collect();
        assert!(ms.windows(2).all(|w| w[0] < w[1]));
    }
}
