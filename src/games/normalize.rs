use crate::games::GameRecord;
use crate::schedule::RawGame;
use chrono::NaiveDate;

/// Convert a raw schedule feed game into a normalized record.
///
/// Returns `None` when the payload carries no inning breakdown or when the
/// game date is missing or malformed. Missing per-inning run values default
/// to zero; the declared final scores are carried over unchanged.
#[must_use]
pub fn normalize(game: &RawGame) -> Option<GameRecord> {
    let linescore = game.linescore.as_ref()?;
    if linescore.innings.is_empty() {
        return None;
    }

    // Game dates arrive as RFC 3339 timestamps; only the date portion matters.
    let date = NaiveDate::parse_from_str(game.game_date.get(..10)?, "%Y-%m-%d").ok()?;

    let runs = linescore
        .innings
        .iter()
        .map(|inning| (inning.away.runs.unwrap_or(0), inning.home.runs.unwrap_or(0)));

    Some(GameRecord::new(
        date,
        game.teams.away.team.name.clone(),
        game.teams.home.team.name.clone(),
        game.teams.away.score,
        game.teams.home.score,
        runs,
    ))
}
