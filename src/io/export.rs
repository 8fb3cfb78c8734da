//! Export computed scores to CSV and JSON.
//!
//! The CSV is meant to be easy to consume in spreadsheets or downstream
//! scripts; the JSON is the "portable" representation of a full scoring run.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::pipeline::RunOutput;
use crate::domain::{CompositeScore, InversionEpisode};
use crate::error::AppError;
use crate::score::{Indicator, normalize};

/// A saved scoring run (JSON). The schema is stable for downstream tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreFile {
    pub tool: String,
    pub composite: CompositeScore,
    pub regime: String,
    pub trend: String,
    pub history: Vec<f64>,
    pub inversions: Vec<InversionEpisode>,
}

impl ScoreFile {
    pub fn from_run(run: &RunOutput) -> Self {
        Self {
            tool: "mpulse".to_string(),
            composite: run.composite,
            regime: run.regime.label().to_string(),
            trend: run.trend.arrow().to_string(),
            history: run.history.clone(),
            inversions: run.inversions.clone(),
        }
    }
}

/// Write per-indicator latest values and normalized scores to a CSV file.
pub fn write_scores_csv(path: &Path, run: &RunOutput) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(file, "indicator,latest,score")
        .map_err(|e| AppError::usage(format!("Failed to write export CSV header: {e}")))?;

    for (key, value) in run.snapshot.iter() {
        let score = if Indicator::from_key(key) == Indicator::Other {
            String::new()
        } else {
            normalize(Some(value), key)
                .map(|s| format!("{s:.1}"))
                .unwrap_or_default()
        };
        writeln!(file, "{key},{value:.4},{score}")
            .map_err(|e| AppError::usage(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write the full scoring run to a pretty-printed JSON file.
pub fn write_score_json(path: &Path, run: &RunOutput) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to create score JSON '{}': {e}",
            path.display()
        ))
    })?;

    serde_json::to_writer_pretty(file, &ScoreFile::from_run(run))
        .map_err(|e| AppError::usage(format!("Failed to write score JSON: {e}")))?;

    Ok(())
}

/// Read a previously exported score JSON file.
pub fn read_score_json(path: &Path) -> Result<ScoreFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::usage(format!("Failed to open score JSON '{}': {e}", path.display()))
    })?;
    let score: ScoreFile = serde_json::from_reader(file)
        .map_err(|e| AppError::usage(format!("Invalid score JSON: {e}")))?;
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::{RunConfig, run_score};

    fn offline_run() -> RunOutput {
        run_score(&RunConfig {
            offline: true,
            seed: 42,
            trend_depth: 6,
        })
        .unwrap()
    }

    #[test]
    fn score_json_round_trips() {
        let run = offline_run();
        let dir = std::env::temp_dir();
        let path = dir.join("mpulse_score_roundtrip.json");

        write_score_json(&path, &run).unwrap();
        let loaded = read_score_json(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.tool, "mpulse");
        assert_eq!(loaded.composite, run.composite);
        assert_eq!(loaded.regime, run.regime.label());
        assert_eq!(loaded.history, run.history);
    }

    #[test]
    fn csv_has_header_and_one_row_per_indicator() {
        let run = offline_run();
        let dir = std::env::temp_dir();
        let path = dir.join("mpulse_scores.csv");

        write_scores_csv(&path, &run).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("indicator,latest,score"));
        assert_eq!(lines.count(), run.snapshot.iter().count());
    }
}
