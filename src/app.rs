//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads indicator data (FRED or the offline sample)
//! - runs derived metrics + scoring
//! - prints reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, ScoreArgs, SeriesArgs};
use crate::error::AppError;

pub mod pipeline;

use pipeline::RunConfig;

/// Entry point for the `mpulse` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `mpulse` and `mpulse --offline` to behave like
    // `mpulse score ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Score(args) => handle_score(args),
        Command::Series(args) => handle_series(args),
    }
}

fn handle_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = RunConfig {
        offline: args.source.offline,
        seed: args.source.seed,
        trend_depth: args.trend_depth,
    };
    let run = pipeline::run_score(&config)?;

    println!("{}", crate::report::format_score_summary(&run));
    println!("{}", crate::report::format_indicator_table(&run));
    println!("{}", crate::report::format_inversions(&run.inversions));

    if let Some(path) = &args.export {
        crate::io::export::write_scores_csv(path, &run)?;
    }
    if let Some(path) = &args.export_score {
        crate::io::export::write_score_json(path, &run)?;
    }

    Ok(())
}

fn handle_series(args: SeriesArgs) -> Result<(), AppError> {
    let config = RunConfig {
        offline: args.source.offline,
        seed: args.source.seed,
        trend_depth: 1,
    };
    let run = pipeline::run_score(&config)?;
    let sampled = pipeline::downsample_all(&run.series, args.max_points)?;

    match &args.indicator {
        Some(key) => {
            let series = sampled.get(key).ok_or_else(|| {
                let known: Vec<&str> = sampled.keys().map(String::as_str).collect();
                AppError::usage(format!(
                    "Unknown series '{key}'. Available: {}.",
                    known.join(", ")
                ))
            })?;
            println!("{}", crate::report::format_series(key, series));
        }
        None => {
            for (key, series) in &sampled {
                let full_len = run.series[key].len();
                println!("{key:<24} {:>5} points (from {full_len})", series.len());
            }
        }
    }

    Ok(())
}

/// Rewrite argv so `mpulse` defaults to `mpulse score`.
///
/// Rules:
/// - `mpulse`                    -> `mpulse score`
/// - `mpulse --offline ...`      -> `mpulse score --offline ...`
/// - `mpulse --help/--version`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("score".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "score" | "series");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "score flags".
    if arg1.starts_with('-') {
        argv.insert(1, "score".to_string());
        return argv;
    }

    argv
}
