//! A tool to analyze MLB game results against configurable run-distribution criteria.
//!
//! # Overview
//!
//! `linescore` fetches completed games from the public MLB Stats API (or uses a
//! built-in sample dataset), classifies each game against two configurable
//! criteria plus a nine-way "push" breakdown, and prints a console report with
//! optional CSV export.
//!
//! A game matches a criterion when the combined runs scored in the first five
//! innings reach a minimum AND the total declared runs compare against a
//! threshold using a configurable operator. Games matching both criteria are
//! reported under Criteria X only.
//!
//! # Quick Start
//!
//! Analyze the built-in sample dataset:
//!
//! ```bash
//! linescore analyze
//! ```
//!
//! Fetch live results for a season:
//!
//! ```bash
//! linescore analyze --live --season 2024 --days 30
//! ```
//!
//! Export the matching games:
//!
//! ```bash
//! linescore analyze --csv                    # mlb_<season>_criteria_games.csv
//! linescore analyze --csv my_games.csv
//! ```
//!
//! # Configuration
//!
//! Settings are read from `linescore.toml`, `linescore.yml`, `linescore.yaml`,
//! or `linescore.json` in the current directory, or from an explicit
//! `--config` path. Generate a commented default file with:
//!
//! ```bash
//! linescore init
//! ```
//!
//! Check a configuration without running an analysis:
//!
//! ```bash
//! linescore validate
//! ```
//!
//! The criteria thresholds, comparison operators, push pivots, season, sample
//! size, and cache TTL are all configurable; see the generated file for the
//! full reference.
//!
//! # Caching
//!
//! Live fetches are cached per date under the platform cache directory
//! (override with `--cache-dir`) and reused for an hour by default, so
//! repeated analyses don't hammer the public API.

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use linescore::Result;

mod commands;

use crate::commands::{AnalyzeArgs, InitArgs, ValidateArgs, analyze, init_config, validate_config};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "linescore", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch or load game results, classify them, and print a report
    Analyze(Box<AnalyzeArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    match &Cli::parse().command {
        Command::Analyze(analyze_args) => analyze(analyze_args).await,
        Command::Init(init_args) => init_config(init_args),
        Command::Validate(validate_args) => validate_config(validate_args),
    }
}
