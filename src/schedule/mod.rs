//! Fetching game results from the MLB Stats API, with caching and sample fallback.

mod cache;
mod progress_reporter;
mod provider;
mod raw;
mod sample;

pub use progress_reporter::ProgressReporter;
pub use provider::{FetchOutcome, Provider};
pub use raw::{RawGame, RawInning, RawInningSide, RawLinescore, RawSide, RawStatus, RawTeam, RawTeams, ScheduleDate, SchedulePayload};
pub use sample::sample_games;
