use crate::Result;
use crate::games::{GameRecord, normalize};
use crate::schedule::cache::{self, CachedDay};
use crate::schedule::progress_reporter::ProgressReporter;
use crate::schedule::raw::SchedulePayload;
use chrono::{Days, NaiveDate, Utc};
use core::time::Duration;
use futures_util::future::join_all;
use ohno::IntoAppError;
use reqwest::Client;
use std::path::{Path, PathBuf};
use url::Url;

const LOG_TARGET: &str = "  schedule";

const SCHEDULE_ENDPOINT: &str = "https://statsapi.mlb.com/api/v1/schedule";
const USER_AGENT: &str = concat!("linescore/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Days between sampled dates when walking a season.
const DATE_STEP_DAYS: u64 = 3;

/// Number of dates fetched concurrently.
const FETCH_BATCH_SIZE: usize = 4;

/// Pause between fetch batches, to stay polite to the public API.
const BATCH_PAUSE: Duration = Duration::from_millis(100);

/// The result of a season fetch: normalized records plus the raw count of
/// final games seen, including games later dropped for missing inning data.
/// Match percentages are computed against the raw count.
#[derive(Debug)]
pub struct FetchOutcome {
    pub records: Vec<GameRecord>,
    pub fetched_games: usize,
}

/// Fetches completed games from the MLB Stats API schedule endpoint, with a
/// TTL-bounded on-disk cache of normalized per-day results.
#[derive(Debug)]
pub struct Provider {
    client: Client,
    cache_dir: Option<PathBuf>,
    cache_ttl: Duration,
}

impl Provider {
    /// Create a provider. When `cache_dir` is `None`, caching is disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(cache_dir: Option<PathBuf>, cache_ttl: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .into_app_err("unable to create HTTP client")?;

        Ok(Self {
            client,
            cache_dir,
            cache_ttl,
        })
    }

    /// Fetch a bounded sample of a season: `max_days` dates starting April 1,
    /// stepping 3 days. A failed date is logged and skipped, never fatal.
    pub async fn fetch_season(&self, season: i32, max_days: u32, progress: &ProgressReporter) -> Result<FetchOutcome> {
        let dates = sample_dates(season, max_days);
        progress.begin("Fetching", dates.len() as u64);

        let mut records = Vec::new();
        let mut fetched_games = 0;

        for batch in dates.chunks(FETCH_BATCH_SIZE) {
            let results = join_all(batch.iter().map(|date| self.fetch_day(*date))).await;

            for (date, result) in batch.iter().zip(results) {
                match result {
                    Ok((fetched, day_records)) => {
                        fetched_games += fetched;
                        records.extend(day_records);
                    }
                    Err(e) => log::warn!(target: LOG_TARGET, "skipping {date}: {e:#}"),
                }

                progress.advance(format!("{date} ({} games so far)", records.len()));
            }

            if batch.len() == FETCH_BATCH_SIZE {
                tokio::time::sleep(BATCH_PAUSE).await;
            }
        }

        progress.done();
        log::info!(target: LOG_TARGET, "fetched {fetched_games} final games across {} dates, {} with inning data", dates.len(), records.len());

        Ok(FetchOutcome { records, fetched_games })
    }

    async fn fetch_day(&self, date: NaiveDate) -> Result<(usize, Vec<GameRecord>)> {
        if let Some(day) = self.load_cached(date) {
            return Ok((day.fetched, day.records));
        }

        let date_param = date.to_string();
        let url = Url::parse_with_params(
            SCHEDULE_ENDPOINT,
            [("sportId", "1"), ("date", date_param.as_str()), ("hydrate", "linescore")],
        )
        .into_app_err("unable to build schedule URL")?;

        log::debug!(target: LOG_TARGET, "fetching schedule for {date}");

        let payload: SchedulePayload = self
            .client
            .get(url)
            .send()
            .await
            .into_app_err_with(|| format!("requesting schedule for {date}"))?
            .error_for_status()
            .into_app_err_with(|| format!("schedule request for {date} failed"))?
            .json()
            .await
            .into_app_err_with(|| format!("decoding schedule for {date}"))?;

        let finals: Vec<_> = payload
            .dates
            .iter()
            .flat_map(|day| day.games.iter())
            .filter(|game| game.is_final())
            .collect();

        let fetched = finals.len();
        let records: Vec<_> = finals.into_iter().filter_map(normalize).collect();

        self.store_cached(date, fetched, &records);
        Ok((fetched, records))
    }

    fn load_cached(&self, date: NaiveDate) -> Option<CachedDay> {
        let dir = self.cache_dir.as_ref()?;
        cache::load_day(cache_path(dir, date), self.cache_ttl, date.to_string())
    }

    fn store_cached(&self, date: NaiveDate, fetched: usize, records: &[GameRecord]) {
        let Some(dir) = &self.cache_dir else { return };

        let day = CachedDay {
            cached_at: Utc::now(),
            fetched,
            records: records.to_vec(),
        };

        if let Err(e) = cache::save_day(&day, cache_path(dir, date)) {
            log::debug!(target: LOG_TARGET, "unable to cache schedule for {date}: {e:#}");
        }
    }
}

fn cache_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(format!("schedule_{date}.json"))
}

/// The dates sampled for a season: `max_days` dates starting April 1 of the
/// season year, stepping 3 days between samples.
fn sample_dates(season: i32, max_days: u32) -> Vec<NaiveDate> {
    let Some(start) = NaiveDate::from_ymd_opt(season, 4, 1) else {
        return Vec::new();
    };

    let mut dates = Vec::with_capacity(max_days as usize);
    let mut date = start;
    for _ in 0..max_days {
        dates.push(date);
        match date.checked_add_days(Days::new(DATE_STEP_DAYS)) {
            Some(next) => date = next,
            None => break,
        }
    }

    dates
}
