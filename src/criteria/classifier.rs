use crate::criteria::ThresholdSpec;
use crate::games::GameRecord;

/// The outcome of classifying a corpus: X matches, Y-only matches, and the
/// remainder. The three sets are disjoint; games matching both criteria are
/// reported under X only, and games without inning data appear nowhere.
#[derive(Debug)]
pub struct Classification<'a> {
    matches_x: Vec<&'a GameRecord>,
    matches_y_only: Vec<&'a GameRecord>,
    unmatched: Vec<&'a GameRecord>,
}

impl<'a> Classification<'a> {
    #[must_use]
    pub fn matches_x(&self) -> &[&'a GameRecord] {
        &self.matches_x
    }

    #[must_use]
    pub fn matches_y_only(&self) -> &[&'a GameRecord] {
        &self.matches_y_only
    }

    #[must_use]
    pub fn unmatched(&self) -> &[&'a GameRecord] {
        &self.unmatched
    }

    /// Number of games placed in any of the three sets.
    #[must_use]
    pub fn classified_count(&self) -> usize {
        self.matches_x.len() + self.matches_y_only.len() + self.unmatched.len()
    }
}

/// Classify games against two criteria. A game matching both lands in
/// `matches_x` only; a game matching just Y lands in `matches_y_only`;
/// everything else with inning data is `unmatched`.
#[must_use]
pub fn classify<'a>(games: impl IntoIterator<Item = &'a GameRecord>, spec_x: ThresholdSpec, spec_y: ThresholdSpec) -> Classification<'a> {
    let mut matches_x = Vec::new();
    let mut matches_y_only = Vec::new();
    let mut unmatched = Vec::new();

    for game in games {
        if !game.has_inning_data() {
            continue;
        }

        if spec_x.matches(game) {
            matches_x.push(game);
        } else if spec_y.matches(game) {
            matches_y_only.push(game);
        } else {
            unmatched.push(game);
        }
    }

    Classification {
        matches_x,
        matches_y_only,
        unmatched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn game(innings: &[(u32, u32)], away_score: u32, home_score: u32) -> GameRecord {
        GameRecord::new(
            NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            "Away",
            "Home",
            away_score,
            home_score,
            innings.iter().copied(),
        )
    }

    fn default_specs() -> (ThresholdSpec, ThresholdSpec) {
        (ThresholdSpec::criterion_x(), ThresholdSpec::criterion_y())
    }

    #[test]
    fn test_x_subsumes_y() {
        // First five sum to 8, total 8: matches both X and Y, reported as X only.
        let games = vec![game(&[(2, 1), (1, 2), (2, 0)], 5, 3)];
        let (x, y) = default_specs();
        assert!(x.matches(&games[0]));
        assert!(y.matches(&games[0]));

        let c = classify(&games, x, y);
        assert_eq!(c.matches_x().len(), 1);
        assert_eq!(c.matches_y_only().len(), 0);
        assert_eq!(c.unmatched().len(), 0);
    }

    #[test]
    fn test_y_only_when_total_is_exactly_nine() {
        // First five sum to 7, total exactly 9: misses X (strict <), matches Y.
        let games = vec![game(&[(2, 1), (1, 1), (1, 0), (0, 1)], 5, 4)];
        let (x, y) = default_specs();

        let c = classify(&games, x, y);
        assert_eq!(c.matches_x().len(), 0);
        assert_eq!(c.matches_y_only().len(), 1);
        assert_eq!(c.unmatched().len(), 0);
    }

    #[test]
    fn test_y_only_when_first_five_is_exactly_six() {
        // First five sum to 6, total exactly 9: misses X's minimum, matches Y.
        let games = vec![game(&[(2, 1), (1, 1), (1, 0)], 5, 4)];
        let (x, y) = default_specs();

        let c = classify(&games, x, y);
        assert_eq!(c.matches_y_only().len(), 1);
        assert_eq!(c.matches_x().len(), 0);
    }

    #[test]
    fn test_unmatched_game() {
        let games = vec![game(&[(0, 0), (0, 1)], 1, 0)];
        let (x, y) = default_specs();

        let c = classify(&games, x, y);
        assert_eq!(c.matches_x().len(), 0);
        assert_eq!(c.matches_y_only().len(), 0);
        assert_eq!(c.unmatched().len(), 1);
    }

    #[test]
    fn test_games_without_innings_appear_nowhere() {
        let games = vec![game(&[], 5, 3), game(&[(2, 2), (2, 2)], 4, 4)];
        let (x, y) = default_specs();

        let c = classify(&games, x, y);
        assert_eq!(c.classified_count(), 1);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let games = vec![
            game(&[(2, 1), (1, 2), (2, 0)], 5, 3),
            game(&[(2, 1), (1, 1), (1, 0), (0, 1)], 5, 4),
            game(&[(0, 0)], 1, 0),
        ];
        let (x, y) = default_specs();

        let first = classify(&games, x, y);
        let second = classify(&games, x, y);
        assert_eq!(first.matches_x(), second.matches_x());
        assert_eq!(first.matches_y_only(), second.matches_y_only());
        assert_eq!(first.unmatched(), second.unmatched());
    }
}
