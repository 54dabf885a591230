//! The analyze command: fetch or load games, classify, and report.

use crate::commands::common::{Common, CommonArgs};
use camino::Utf8PathBuf;
use clap::Args;
use core::time::Duration;
use linescore::Result;
use linescore::criteria::{classify, push_breakdown};
use linescore::games::GameRecord;
use linescore::reports::{Analysis, DataSource, generate_console, generate_csv};
use linescore::schedule::{FetchOutcome, Provider, sample_games};

const LOG_TARGET: &str = "   analyze";

const SECONDS_PER_HOUR: u64 = 60 * 60;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Season year to analyze [default: from configuration]
    #[arg(long, value_name = "YEAR")]
    pub season: Option<i32>,

    /// Fetch live results from the MLB Stats API instead of the built-in sample data
    #[arg(long)]
    pub live: bool,

    /// Number of dates to sample across the season [default: from configuration]
    #[arg(long, value_name = "COUNT")]
    pub days: Option<u32>,

    /// Write matching games to a CSV file [default path: mlb_<season>_criteria_games.csv]
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub csv: Option<Option<Utf8PathBuf>>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub async fn analyze(args: &AnalyzeArgs) -> Result<()> {
    let common = Common::new(&args.common)?;

    let season = args.season.unwrap_or(common.config.season);
    let days = args.days.unwrap_or(common.config.sample_days);
    let spec_x = common.config.criterion_x.threshold_spec()?;
    let spec_y = common.config.criterion_y.threshold_spec()?;
    let pivot = common.config.push_pivot.push_pivot()?;

    let (games, source, total_fetched) = gather_games(&common, season, days, args.live).await;

    let analysis = Analysis {
        season,
        source,
        total_fetched,
        spec_x,
        spec_y,
        pivot,
        classification: classify(&games, spec_x, spec_y),
        push: push_breakdown(&games, pivot),
    };

    let mut console_output = String::new();
    generate_console(&analysis, common.use_colors(), &mut console_output)?;
    print!("{console_output}");

    if let Some(csv) = &args.csv {
        let path = csv.clone().unwrap_or_else(|| default_csv_name(season));
        generate_csv(&analysis, &path)?;
        println!("Wrote matching games to {path}");
    }

    Ok(())
}

/// Collect the games to analyze. Live fetching degrades to the sample data
/// when it fails or comes back empty, so a report is always produced.
async fn gather_games(common: &Common, season: i32, days: u32, live_flag: bool) -> (Vec<GameRecord>, DataSource, usize) {
    if live_flag || common.config.use_live_data {
        match fetch_live(common, season, days).await {
            Ok(outcome) if !outcome.records.is_empty() => {
                let fetched = outcome.fetched_games;
                return (outcome.records, DataSource::Live, fetched);
            }
            Ok(_) => {
                log::warn!(target: LOG_TARGET, "live fetch returned no usable games, falling back to sample data");
                eprintln!("No live games found, falling back to sample data");
            }
            Err(e) => {
                log::warn!(target: LOG_TARGET, "live fetch failed: {e:#}");
                eprintln!("Live fetch failed ({e:#}), falling back to sample data");
            }
        }
    }

    let games = sample_games();
    let total = games.len();
    (games, DataSource::Sample, total)
}

async fn fetch_live(common: &Common, season: i32, days: u32) -> Result<FetchOutcome> {
    let cache_ttl = Duration::from_secs(common.config.schedule_cache_ttl * SECONDS_PER_HOUR);
    let provider = Provider::new(Some(common.cache_dir.clone()), cache_ttl)?;
    let progress = common.progress();
    provider.fetch_season(season, days, &progress).await
}

fn default_csv_name(season: i32) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("mlb_{season}_criteria_games.csv"))
}
