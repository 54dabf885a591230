use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Combined runs scored by both teams in a single inning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningLine {
    inning_number: u32,
    away_runs: u32,
    home_runs: u32,
}

impl InningLine {
    #[must_use]
    pub const fn inning_number(&self) -> u32 {
        self.inning_number
    }

    #[must_use]
    pub const fn away_runs(&self) -> u32 {
        self.away_runs
    }

    #[must_use]
    pub const fn home_runs(&self) -> u32 {
        self.home_runs
    }

    #[must_use]
    pub const fn combined_runs(&self) -> u32 {
        self.away_runs + self.home_runs
    }
}

/// A completed game in normalized form: identity, declared final scores, and
/// the per-inning run breakdown.
///
/// Records are immutable after construction. The declared scores are taken
/// from the schedule feed as-is and are never reconciled against the inning
/// sums; total-run queries always use the declared scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    date: NaiveDate,
    away_team: String,
    home_team: String,
    away_score: u32,
    home_score: u32,
    innings: Vec<InningLine>,
}

/// Number of leading innings considered by the first-five query.
const FIRST_INNINGS: usize = 5;

impl GameRecord {
    /// Create a record from per-inning `(away_runs, home_runs)` pairs.
    ///
    /// Inning numbers are assigned positionally starting at 1, so they are
    /// always contiguous and strictly increasing.
    pub fn new(
        date: NaiveDate,
        away_team: impl Into<String>,
        home_team: impl Into<String>,
        away_score: u32,
        home_score: u32,
        inning_runs: impl IntoIterator<Item = (u32, u32)>,
    ) -> Self {
        let innings = (1u32..)
            .zip(inning_runs)
            .map(|(inning_number, (away_runs, home_runs))| InningLine {
                inning_number,
                away_runs,
                home_runs,
            })
            .collect();

        Self {
            date,
            away_team: away_team.into(),
            home_team: home_team.into(),
            away_score,
            home_score,
            innings,
        }
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    #[must_use]
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    #[must_use]
    pub const fn away_score(&self) -> u32 {
        self.away_score
    }

    #[must_use]
    pub const fn home_score(&self) -> u32 {
        self.home_score
    }

    #[must_use]
    pub fn innings(&self) -> &[InningLine] {
        &self.innings
    }

    /// Whether the record carries any inning breakdown at all. Records
    /// without inning data are excluded from criteria and push buckets.
    #[must_use]
    pub fn has_inning_data(&self) -> bool {
        !self.innings.is_empty()
    }

    /// Combined runs over the first five innings. Games shorter than five
    /// innings sum whatever innings are present.
    #[must_use]
    pub fn first_five_runs(&self) -> u32 {
        self.innings.iter().take(FIRST_INNINGS).map(InningLine::combined_runs).sum()
    }

    /// Total runs from the declared final scores, never from inning sums.
    #[must_use]
    pub const fn total_runs(&self) -> u32 {
        self.away_score + self.home_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    #[test]
    fn test_inning_numbers_assigned_positionally() {
        let game = GameRecord::new(date(), "Away", "Home", 3, 2, [(1, 0), (0, 1), (2, 1)]);
        let numbers: Vec<u32> = game.innings().iter().map(InningLine::inning_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_first_five_runs_full_game() {
        let game = GameRecord::new(
            date(),
            "Away",
            "Home",
            5,
            3,
            [(2, 1), (1, 2), (2, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
        );
        assert_eq!(game.first_five_runs(), 8);
    }

    #[test]
    fn test_first_five_runs_truncated_game() {
        // A three-inning game sums only what is present.
        let game = GameRecord::new(date(), "Away", "Home", 4, 2, [(2, 1), (1, 0), (1, 1)]);
        assert_eq!(game.first_five_runs(), 6);
    }

    #[test]
    fn test_first_five_ignores_later_innings() {
        let game = GameRecord::new(date(), "Away", "Home", 9, 0, [(0, 0), (0, 0), (0, 0), (0, 0), (1, 0), (8, 0)]);
        assert_eq!(game.first_five_runs(), 1);
    }

    #[test]
    fn test_total_runs_uses_declared_scores() {
        // Declared scores disagree with the inning sums; the declared scores win.
        let game = GameRecord::new(date(), "Away", "Home", 6, 4, [(1, 0), (0, 1)]);
        assert_eq!(game.total_runs(), 10);
    }

    #[test]
    fn test_has_inning_data() {
        let with = GameRecord::new(date(), "Away", "Home", 1, 0, [(1, 0)]);
        let without = GameRecord::new(date(), "Away", "Home", 1, 0, []);
        assert!(with.has_inning_data());
        assert!(!without.has_inning_data());
    }

    #[test]
    fn test_combined_runs() {
        let game = GameRecord::new(date(), "Away", "Home", 3, 2, [(2, 1)]);
        assert_eq!(game.innings()[0].combined_runs(), 3);
    }
}
