//! Date-keyed inner join across series.
//!
//! Every derived metric needs the same alignment step: pair up values that
//! share a date and silently drop the rest. Centralizing it here keeps each
//! metric a one-line combine and makes the join O(n) via a hash lookup
//! instead of a per-date scan.

use std::collections::HashMap;

use crate::domain::SeriesPoint;

/// A date shared by both inputs, with the value from each.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair {
    pub date: String,
    pub left: f64,
    pub right: f64,
}

/// Inner-join two series on their date keys.
///
/// Output order follows `left`; dates present in only one input contribute
/// nothing. Alignment never fails — disjoint inputs simply yield an empty
/// vector.
pub fn align_pair(left: &[SeriesPoint], right: &[SeriesPoint]) -> Vec<AlignedPair> {
    let by_date: HashMap<&str, f64> = right.iter().map(|p| (p.date.as_str(), p.value)).collect();

    left.iter()
        .filter_map(|p| {
            by_date.get(p.date.as_str()).map(|&r| AlignedPair {
                date: p.date.clone(),
                left: p.value,
                right: r,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: &[(&str, f64)]) -> Vec<SeriesPoint> {
        points
            .iter()
            .map(|(d, v)| SeriesPoint::new(*d, *v))
            .collect()
    }

    #[test]
    fn keeps_only_shared_dates_in_left_order() {
        let left = series(&[("2024-01", 1.0), ("2024-02", 2.0), ("2024-03", 3.0)]);
        let right = series(&[("2024-03", 30.0), ("2024-01", 10.0)]);

        let pairs = align_pair(&left, &right);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].date, "2024-01");
        assert_eq!((pairs[0].left, pairs[0].right), (1.0, 10.0));
        assert_eq!(pairs[1].date, "2024-03");
        assert_eq!((pairs[1].left, pairs[1].right), (3.0, 30.0));
    }

    #[test]
    fn disjoint_inputs_yield_empty() {
        let left = series(&[("2024-01", 1.0)]);
        let right = series(&[("2024-02", 2.0)]);
        assert!(align_pair(&left, &right).is_empty());
        assert!(align_pair(&left, &[]).is_empty());
        assert!(align_pair(&[], &right).is_empty());
    }
}
