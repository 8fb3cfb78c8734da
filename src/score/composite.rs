//! Composite macro index: five category sub-indices rolled into one score.
//!
//! Composite = 0.25·GSI + 0.25·IMI + 0.20·LMI + 0.20·CCI + 0.10·PMI_SUB
//!
//! Each sub-index is the unweighted mean of its constituents' normalized
//! scores, skipping missing indicators; the composite weights are then
//! re-normalized over the sub-indices that were actually computable, so a
//! sparse snapshot still produces a comparable 0-100 score.

use crate::domain::{CompositeScore, IndicatorSnapshot, SubindexSet};
use crate::score::normalize::normalize;

/// Constituents per sub-index. This is the single place to grow when a new
/// indicator joins a category.
const LMI_INPUTS: [&str; 2] = ["unemployment", "employmentGrowth"];
const IMI_INPUTS: [&str; 3] = ["cpi", "coreCPI", "ppi"];
const GSI_INPUTS: [&str; 3] = ["gdpGrowth", "pmi", "industrialProduction"];
const CCI_INPUTS: [&str; 2] = ["consumerConfidence", "retailSales"];
const PMI_SUB_INPUTS: [&str; 2] = ["yieldCurve", "policyRate"];

const WEIGHT_GSI: f64 = 0.25;
const WEIGHT_IMI: f64 = 0.25;
const WEIGHT_LMI: f64 = 0.20;
const WEIGHT_CCI: f64 = 0.20;
const WEIGHT_PMI_SUB: f64 = 0.10;

/// Compute the composite score and its sub-indices from a snapshot of latest
/// indicator values.
///
/// The `yieldCurve` input (in basis points) is always derived here from the
/// 10Y/2Y bond yields; a `yieldCurve` key already present in the snapshot is
/// discarded so the two can never disagree.
pub fn compute_composite(snapshot: &IndicatorSnapshot) -> CompositeScore {
    let mut data = snapshot.clone();
    data.remove("yieldCurve");
    if let (Some(y10), Some(y2)) = (snapshot.get("bondYield10Y"), snapshot.get("bondYield2Y")) {
        data.insert("yieldCurve", (y10 - y2) * 100.0);
    }

    let lmi = subindex(&data, &LMI_INPUTS);
    let imi = subindex(&data, &IMI_INPUTS);
    let gsi = subindex(&data, &GSI_INPUTS);
    let cci = subindex(&data, &CCI_INPUTS);
    let pmi_sub = subindex(&data, &PMI_SUB_INPUTS);

    let weighted = [
        (gsi, WEIGHT_GSI),
        (imi, WEIGHT_IMI),
        (lmi, WEIGHT_LMI),
        (cci, WEIGHT_CCI),
        (pmi_sub, WEIGHT_PMI_SUB),
    ];

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for (value, weight) in weighted {
        if let Some(v) = value {
            weighted_sum += v * weight;
            total_weight += weight;
        }
    }

    let value = if total_weight > 0.0 {
        Some(round1(weighted_sum / total_weight))
    } else {
        None
    };

    CompositeScore {
        value,
        subindices: SubindexSet {
            lmi: lmi.map(round1),
            imi: imi.map(round1),
            gsi: gsi.map(round1),
            cci: cci.map(round1),
            pmi_sub: pmi_sub.map(round1),
        },
    }
}

/// Unweighted mean of the normalized constituent scores, ignoring missing
/// indicators. `None` only when every constituent is missing.
fn subindex(data: &IndicatorSnapshot, inputs: &[&str]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for key in inputs {
        if let Some(score) = normalize(data.get(key), key) {
            sum += score;
            count += 1;
        }
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_snapshot_produces_all_subindices() {
        let mut snap = IndicatorSnapshot::new();
        snap.insert("unemployment", 4.0);
        snap.insert("employmentGrowth", 1.5);
        snap.insert("cpi", 2.5);
        snap.insert("coreCPI", 2.8);
        snap.insert("ppi", 1.5);
        snap.insert("gdpGrowth", 2.5);
        snap.insert("pmi", 52.0);
        snap.insert("industrialProduction", 1.0);
        snap.insert("consumerConfidence", 104.0);
        snap.insert("retailSales", 3.0);
        snap.insert("policyRate", 4.5);
        snap.insert("bondYield10Y", 4.2);
        snap.insert("bondYield2Y", 4.0);

        let score = compute_composite(&snap);
        assert!(score.value.is_some());
        let sub = score.subindices;
        for s in [sub.lmi, sub.imi, sub.gsi, sub.cci, sub.pmi_sub] {
            let s = s.expect("all subindices should be present");
            assert!((0.0..=100.0).contains(&s));
        }

        // LMI = mean(norm(4.0, unemployment)=75, norm(1.5, employmentGrowth)=62.5)
        assert_eq!(sub.lmi, Some(68.8));
        // PMI_SUB = mean(norm(20bp yieldCurve)=55, norm(4.5 policyRate)=85)
        assert_eq!(sub.pmi_sub, Some(70.0));
    }

    #[test]
    fn missing_constituents_are_skipped_within_a_subindex() {
        let mut snap = IndicatorSnapshot::new();
        snap.insert("cpi", 2.0); // coreCPI and ppi absent

        let score = compute_composite(&snap);
        assert_eq!(score.subindices.imi, Some(100.0));
        assert_eq!(score.subindices.lmi, None);
        assert_eq!(score.value, Some(100.0));
    }

    #[test]
    fn composite_reweights_over_available_subindices() {
        // GSI = 80 via gdpGrowth=4.0, IMI = 60 via cpi=4.0; everything else
        // absent. Composite = (80*0.25 + 60*0.25) / 0.5 = 70.0.
        let mut snap = IndicatorSnapshot::new();
        snap.insert("gdpGrowth", 4.0);
        snap.insert("cpi", 4.0);

        let score = compute_composite(&snap);
        assert_eq!(score.subindices.gsi, Some(80.0));
        assert_eq!(score.subindices.imi, Some(60.0));
        assert_eq!(score.subindices.lmi, None);
        assert_eq!(score.subindices.cci, None);
        assert_eq!(score.subindices.pmi_sub, None);
        assert_eq!(score.value, Some(70.0));
    }

    #[test]
    fn empty_snapshot_yields_null_composite() {
        let score = compute_composite(&IndicatorSnapshot::new());
        assert_eq!(score.value, None);
        assert_eq!(score.subindices, SubindexSet::default());
    }

    #[test]
    fn yield_curve_is_derived_from_bond_yields_in_bps() {
        // 10Y 4.0 / 2Y 4.3 → -30bp → norm = 25 - 15 = 10; policyRate absent.
        let mut snap = IndicatorSnapshot::new();
        snap.insert("bondYield10Y", 4.0);
        snap.insert("bondYield2Y", 4.3);

        let score = compute_composite(&snap);
        assert_eq!(score.subindices.pmi_sub, Some(10.0));
    }

    #[test]
    fn stale_yield_curve_key_is_ignored_when_yields_are_missing() {
        let mut snap = IndicatorSnapshot::new();
        snap.insert("yieldCurve", 150.0); // no bond yields to derive from

        let score = compute_composite(&snap);
        assert_eq!(score.subindices.pmi_sub, None);
        assert_eq!(score.value, None);
    }

    #[test]
    fn zero_valued_subindex_survives_rounding() {
        // unemployment 10% → LMI = 0.0, which must stay Some(0.0).
        let mut snap = IndicatorSnapshot::new();
        snap.insert("unemployment", 10.0);

        let score = compute_composite(&snap);
        assert_eq!(score.subindices.lmi, Some(0.0));
        assert_eq!(score.value, Some(0.0));
    }

    #[test]
    fn results_are_rounded_to_one_decimal() {
        let mut snap = IndicatorSnapshot::new();
        snap.insert("unemployment", 4.33); // 100 - 2.33*12.5 = 70.875
        let score = compute_composite(&snap);
        assert_eq!(score.subindices.lmi, Some(70.9));
        assert_eq!(score.value, Some(70.9));
    }
}
