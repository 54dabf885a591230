//! On-disk cache for fetched schedule days.

use crate::Result;
use crate::games::GameRecord;
use chrono::{DateTime, Utc};
use core::time::Duration;
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

const LOG_TARGET: &str = "     cache";

/// One fetched day of schedule results: the raw count of final games and the
/// normalized records that survived.
#[derive(Debug, Serialize, Deserialize)]
pub struct CachedDay {
    pub cached_at: DateTime<Utc>,
    pub fetched: usize,
    pub records: Vec<GameRecord>,
}

/// Load a cached day if it exists, parses, and is younger than the TTL.
pub fn load_day(path: impl AsRef<Path>, ttl: Duration, context: impl AsRef<str>) -> Option<CachedDay> {
    let path = path.as_ref();
    let ctx = context.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::debug!(target: LOG_TARGET, "Cache miss for {ctx}: {e:#}");
            return None;
        }
    };

    let reader = BufReader::new(file);
    let day: CachedDay = match serde_json::from_reader(reader) {
        Ok(day) => day,
        Err(e) => {
            log::debug!(target: LOG_TARGET, "Cache miss for {ctx}: {e:#}");
            return None;
        }
    };

    let age = Utc::now().signed_duration_since(day.cached_at);

    // A timestamp in the future means clock skew; treat the entry as fresh.
    if age.num_seconds() < 0 {
        log::debug!(target: LOG_TARGET, "Cache timestamp is in the future for {ctx} (clock skew), treating as fresh");
        return Some(day);
    }

    let age = age.to_std().unwrap_or(Duration::MAX);
    if age < ttl {
        log::debug!(target: LOG_TARGET, "Cache hit for {ctx} (age: {:.1} minutes)", age.as_secs_f64() / 60.0);
        Some(day)
    } else {
        log::debug!(target: LOG_TARGET,
            "Cache expired for {ctx} (age: {:.1} minutes, TTL: {:.1} minutes)",
            age.as_secs_f64() / 60.0,
            ttl.as_secs_f64() / 60.0
        );
        None
    }
}

/// Save a fetched day to the cache.
pub fn save_day(day: &CachedDay, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).into_app_err_with(|| format!("unable to create directory '{}'", parent.display()))?;
    }

    let file = File::create(path).into_app_err_with(|| format!("unable to create cache file '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, day).into_app_err_with(|| format!("unable to write cache file '{}'", path.display()))?;
    writer
        .flush()
        .into_app_err_with(|| format!("unable to flush cache file '{}'", path.display()))?;
    Ok(())
}
