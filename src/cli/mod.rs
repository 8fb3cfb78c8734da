//! Command-line parsing for the macro scoring tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the scoring/series code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "mpulse", version, about = "Macro health composite score (FRED-based)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the composite score and print the full report.
    Score(ScoreArgs),
    /// Print one (downsampled) series, or an overview of all of them.
    Series(SeriesArgs),
}

/// Options shared by every command that runs the pipeline.
#[derive(Debug, Parser, Clone)]
pub struct SourceArgs {
    /// Use the synthetic offline dataset instead of FRED.
    #[arg(long)]
    pub offline: bool,

    /// Random seed for the offline dataset.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Options for the `score` command.
#[derive(Debug, Parser, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Trailing observations per indicator feeding the trend history.
    #[arg(long, default_value_t = 6)]
    pub trend_depth: usize,

    /// Export per-indicator scores to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the full scoring run (composite + regime + episodes) to JSON.
    #[arg(long = "export-score")]
    pub export_score: Option<PathBuf>,
}

/// Options for the `series` command.
#[derive(Debug, Parser, Clone)]
pub struct SeriesArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Indicator or derived-signal key (e.g. unemployment, yieldSpread).
    /// Omit to print an overview of every series.
    #[arg(short = 'i', long)]
    pub indicator: Option<String>,

    /// Downsampling budget (points) applied before printing.
    #[arg(long, default_value_t = 500)]
    pub max_points: usize,
}
