use crate::games::GameRecord;
use chrono::NaiveDate;

/// How many times the two curated games are repeated.
const SAMPLE_REPEATS: usize = 25;

/// The built-in fallback dataset: two curated games repeated into a
/// deterministic 50-game corpus. Used when live fetching is disabled or
/// fails, so a report can always be produced.
#[must_use]
pub fn sample_games() -> Vec<GameRecord> {
    let red_sox_yankees = GameRecord::new(
        NaiveDate::from_ymd_opt(2024, 5, 15).expect("literal date is valid"),
        "Boston Red Sox",
        "New York Yankees",
        5,
        3,
        [(2, 1), (1, 2), (2, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    );

    let cubs_cardinals = GameRecord::new(
        NaiveDate::from_ymd_opt(2024, 6, 22).expect("literal date is valid"),
        "Chicago Cubs",
        "St. Louis Cardinals",
        4,
        4,
        [(2, 1), (1, 2), (1, 1), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0), (0, 0)],
    );

    let mut games = Vec::with_capacity(SAMPLE_REPEATS * 2);
    for _ in 0..SAMPLE_REPEATS {
        games.push(red_sox_yankees.clone());
        games.push(cubs_cardinals.clone());
    }

    games
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{ThresholdSpec, classify};

    #[test]
    fn test_sample_is_deterministic() {
        let first = sample_games();
        let second = sample_games();
        assert_eq!(first.len(), 50);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_games_are_fully_classifiable() {
        let games = sample_games();
        assert!(games.iter().all(GameRecord::has_inning_data));

        // Both curated games score 8 in the first five innings with 8 total
        // runs, so the whole corpus matches Criterion X.
        let c = classify(&games, ThresholdSpec::criterion_x(), ThresholdSpec::criterion_y());
        assert_eq!(c.matches_x().len(), 50);
        assert_eq!(c.matches_y_only().len(), 0);
        assert_eq!(c.unmatched().len(), 0);
    }

    #[test]
    fn test_sample_game_values() {
        let games = sample_games();
        assert_eq!(games[0].away_team(), "Boston Red Sox");
        assert_eq!(games[0].first_five_runs(), 8);
        assert_eq!(games[0].total_runs(), 8);
        assert_eq!(games[1].home_team(), "St. Louis Cardinals");
        assert_eq!(games[1].total_runs(), 8);
        assert_eq!(games[1].innings().len(), 9);
    }
}
