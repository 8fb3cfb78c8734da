//! Formatted terminal output for scoring runs.
//!
//! We keep formatting code in one place so:
//! - the scoring/series code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::RunOutput;
use crate::domain::{InversionEpisode, Series};
use crate::score::{Indicator, normalize};

/// Fixed display order and weights for the sub-index table.
const SUBINDEX_ROWS: [(&str, &str, f64); 5] = [
    ("GSI", "Growth Strength", 0.25),
    ("IMI", "Inflation Management", 0.25),
    ("LMI", "Labor Market", 0.20),
    ("CCI", "Consumer Confidence", 0.20),
    ("PMI_SUB", "Policy / Market", 0.10),
];

/// Format the full run summary: sub-indices, composite, regime, trend.
pub fn format_score_summary(run: &RunOutput) -> String {
    let mut out = String::new();

    out.push_str("=== mpulse - Macro Composite Score ===\n\n");

    out.push_str(&format!(
        "{:<10} {:<22} {:>7} {:>8}\n",
        "subindex", "category", "weight", "score"
    ));
    out.push_str(&format!(
        "{:-<10} {:-<22} {:->7} {:->8}\n",
        "", "", "", ""
    ));
    let sub = &run.composite.subindices;
    for (key, category, weight) in SUBINDEX_ROWS {
        let value = match key {
            "GSI" => sub.gsi,
            "IMI" => sub.imi,
            "LMI" => sub.lmi,
            "CCI" => sub.cci,
            _ => sub.pmi_sub,
        };
        out.push_str(&format!(
            "{key:<10} {category:<22} {weight:>7.2} {:>8}\n",
            fmt_score(value)
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "Composite: {} {}  [{}]\n",
        fmt_score(run.composite.value),
        run.trend.arrow(),
        run.regime.label()
    ));
    out.push_str(&format!("Regime   : {}\n", run.regime.description()));
    if let Some((lo, hi)) = run.regime.range() {
        out.push_str(&format!("Band     : [{lo:.0}, {hi:.0}]\n"));
    }
    if run.history.len() >= 2 {
        let parts: Vec<String> = run.history.iter().map(|v| format!("{v:.1}")).collect();
        out.push_str(&format!("History  : {}\n", parts.join(" -> ")));
    }

    out
}

/// Format the per-indicator table: latest raw value and normalized score.
pub fn format_indicator_table(run: &RunOutput) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<24} {:>12} {:>8}\n",
        "indicator", "latest", "score"
    ));
    out.push_str(&format!("{:-<24} {:->12} {:->8}\n", "", "", ""));

    for (key, value) in run.snapshot.iter() {
        // Keys without a calibrated curve (bond yields, raw index levels)
        // would all print the neutral 50; show a dash instead.
        let score = if Indicator::from_key(key) == Indicator::Other {
            None
        } else {
            normalize(Some(value), key)
        };
        out.push_str(&format!(
            "{:<24} {value:>12.2} {:>8}\n",
            truncate(key, 24),
            fmt_score(score)
        ));
    }

    out
}

/// Format detected yield-curve inversion episodes.
pub fn format_inversions(episodes: &[InversionEpisode]) -> String {
    if episodes.is_empty() {
        return "No yield-curve inversions detected.\n".to_string();
    }

    let mut out = String::new();
    out.push_str("Yield-curve inversions:\n");
    out.push_str(&format!(
        "{:<12} {:<12} {:>10} {:<8}\n",
        "start", "end", "deepest", "status"
    ));
    out.push_str(&format!("{:-<12} {:-<12} {:->10} {:-<8}\n", "", "", "", ""));
    for ep in episodes {
        out.push_str(&format!(
            "{:<12} {:<12} {:>10.2} {:<8}\n",
            ep.start,
            ep.end,
            ep.max_inversion,
            if ep.ongoing { "ongoing" } else { "closed" }
        ));
    }
    out
}

/// Format one series as a two-column date/value table.
pub fn format_series(key: &str, series: &Series) -> String {
    let mut out = String::new();
    out.push_str(&format!("{key} ({} points)\n", series.len()));
    out.push_str(&format!("{:<12} {:>12}\n", "date", "value"));
    out.push_str(&format!("{:-<12} {:->12}\n", "", ""));
    for point in series {
        out.push_str(&format!("{:<12} {:>12.4}\n", point.date, point.value));
    }
    out
}

fn fmt_score(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "-".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::{RunConfig, run_score};
    use crate::domain::InversionEpisode;

    fn offline_run() -> RunOutput {
        run_score(&RunConfig {
            offline: true,
            seed: 42,
            trend_depth: 6,
        })
        .unwrap()
    }

    #[test]
    fn summary_names_every_subindex_and_the_regime() {
        let run = offline_run();
        let text = format_score_summary(&run);

        for key in ["GSI", "IMI", "LMI", "CCI", "PMI_SUB"] {
            assert!(text.contains(key), "missing {key} in summary");
        }
        assert!(text.contains(run.regime.label()));
        assert!(text.contains("Composite:"));
    }

    #[test]
    fn indicator_table_lists_snapshot_keys() {
        let run = offline_run();
        let text = format_indicator_table(&run);
        assert!(text.contains("unemployment"));
        assert!(text.contains("cpi"));
    }

    #[test]
    fn empty_inversions_have_a_friendly_message() {
        assert!(format_inversions(&[]).contains("No yield-curve inversions"));
    }

    #[test]
    fn inversion_rows_show_status() {
        let episodes = vec![InversionEpisode {
            start: "2022-07".to_string(),
            end: "2024-08".to_string(),
            max_inversion: -1.08,
            ongoing: true,
        }];
        let text = format_inversions(&episodes);
        assert!(text.contains("2022-07"));
        assert!(text.contains("ongoing"));
        assert!(text.contains("-1.08"));
    }

    #[test]
    fn series_table_has_one_row_per_point() {
        let run = offline_run();
        let series = &run.series["unemployment"];
        let text = format_series("unemployment", series);
        assert_eq!(text.lines().count(), series.len() + 3);
    }
}
