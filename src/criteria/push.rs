use crate::Result;
use crate::games::GameRecord;
use core::cmp::Ordering;
use ohno::bail;
use std::collections::BTreeMap;
use strum::{Display, EnumIter, IntoEnumIterator};

/// Where a value sits relative to a pivot, via strict comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum Relation {
    #[strum(to_string = "below")]
    Below,

    #[strum(to_string = "equal")]
    Equal,

    #[strum(to_string = "above")]
    Above,
}

impl Relation {
    #[must_use]
    pub fn of(value: u32, pivot: u32) -> Self {
        match value.cmp(&pivot) {
            Ordering::Less => Self::Below,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Above,
        }
    }
}

/// Pivots for the push breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushPivot {
    first5_pivot: u32,
    total_pivot: u32,
}

impl PushPivot {
    /// Create a pivot pair, rejecting zero pivots.
    ///
    /// # Errors
    ///
    /// Returns an error if either pivot is zero.
    pub fn new(first5_pivot: u32, total_pivot: u32) -> Result<Self> {
        if first5_pivot == 0 {
            bail!("first5_pivot must be at least 1");
        }

        if total_pivot == 0 {
            bail!("total_pivot must be at least 1");
        }

        Ok(Self { first5_pivot, total_pivot })
    }

    /// Default pivots: first-five runs against 6, total runs against 9.
    #[must_use]
    pub const fn default_pivots() -> Self {
        Self {
            first5_pivot: 6,
            total_pivot: 9,
        }
    }

    #[must_use]
    pub const fn first5_pivot(&self) -> u32 {
        self.first5_pivot
    }

    #[must_use]
    pub const fn total_pivot(&self) -> u32 {
        self.total_pivot
    }
}

/// One of the nine push buckets, identified by the relation of the game's
/// first-five runs and total runs to the pivots. Bucket identity is this
/// enum pair, never a formatted label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PushBucket {
    pub first_five: Relation,
    pub total: Relation,
}

impl PushBucket {
    /// All nine buckets in a fixed order.
    pub fn all() -> impl Iterator<Item = Self> {
        Relation::iter().flat_map(|first_five| Relation::iter().map(move |total| Self { first_five, total }))
    }

    /// The bucket a game falls into under the given pivots.
    #[must_use]
    pub fn of(game: &GameRecord, pivot: PushPivot) -> Self {
        Self {
            first_five: Relation::of(game.first_five_runs(), pivot.first5_pivot),
            total: Relation::of(game.total_runs(), pivot.total_pivot),
        }
    }
}

/// A complete nine-way partition of games with inning data. Every bucket is
/// always present, possibly empty.
#[derive(Debug)]
pub struct PushBreakdown<'a> {
    buckets: BTreeMap<PushBucket, Vec<&'a GameRecord>>,
}

impl<'a> PushBreakdown<'a> {
    #[must_use]
    pub fn games(&self, bucket: PushBucket) -> &[&'a GameRecord] {
        self.buckets.get(&bucket).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn count(&self, bucket: PushBucket) -> usize {
        self.games(bucket).len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PushBucket, &[&'a GameRecord])> {
        self.buckets.iter().map(|(bucket, games)| (*bucket, games.as_slice()))
    }
}

/// Partition games into the nine push buckets. Games without inning data are
/// absent from the partition entirely.
#[must_use]
pub fn push_breakdown<'a>(games: impl IntoIterator<Item = &'a GameRecord>, pivot: PushPivot) -> PushBreakdown<'a> {
    let mut buckets: BTreeMap<PushBucket, Vec<&'a GameRecord>> = PushBucket::all().map(|bucket| (bucket, Vec::new())).collect();

    for game in games {
        if game.has_inning_data() {
            buckets.entry(PushBucket::of(game, pivot)).or_default().push(game);
        }
    }

    PushBreakdown { buckets }
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

    #[test]
    fn test_relation_of() {
        assert_eq!(Relation::of(5, 6), Relation::Below);
        assert_eq!(Relation::of(6, 6), Relation::Equal);
        assert_eq!(Relation::of(7, 6), Relation::Above);
    }

    #[test]
    fn test_all_nine_buckets_enumerated() {
        let buckets: Vec<PushBucket> = PushBucket::all().collect();
        assert_eq!(buckets.len(), 9);
        // No duplicates.
        for (i, a) in buckets.iter().enumerate() {
            for b in &buckets[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_zero_pivot_rejected() {
        assert!(PushPivot::new(0, 9).is_err());
        assert!(PushPivot::new(6, 0).is_err());
        assert!(PushPivot::new(6, 9).is_ok());
    }

    #[test]
    fn test_exact_pivot_hits_equal_bucket() {
        // First five sum to exactly 6, declared total exactly 9.
        let g = game(&[(2, 1), (1, 1), (1, 0)], 5, 4);
        assert_eq!(g.first_five_runs(), 6);
        assert_eq!(g.total_runs(), 9);
        let bucket = PushBucket::of(&g, PushPivot::default_pivots());
        assert_eq!(bucket.first_five, Relation::Equal);
        assert_eq!(bucket.total, Relation::Equal);
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let games = vec![
            game(&[(0, 0), (1, 0)], 2, 1),          // first5=1 below, total=3 below
            game(&[(3, 3)], 5, 4),                  // first5=6 equal, total=9 equal
            game(&[(5, 4)], 8, 4),                  // first5=9 above, total=12 above
            game(&[(4, 4)], 4, 4),                  // first5=8 above, total=8 below
        ];

        let breakdown = push_breakdown(&games, PushPivot::default_pivots());

        // Every bucket is present and the counts sum to the input size.
        let total: usize = PushBucket::all().map(|b| breakdown.count(b)).sum();
        assert_eq!(total, games.len());
        assert_eq!(breakdown.iter().count(), 9);

        assert_eq!(
            breakdown.count(PushBucket {
                first_five: Relation::Above,
                total: Relation::Below,
            }),
            1
        );
    }

    #[test]
    fn test_games_without_innings_are_absent() {
        let games = vec![game(&[], 5, 4), game(&[(3, 3)], 5, 4)];
        let breakdown = push_breakdown(&games, PushPivot::default_pivots());
        let total: usize = PushBucket::all().map(|b| breakdown.count(b)).sum();
        assert_eq!(total, 1);
    }
}
