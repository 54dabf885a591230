use crate::Result;
use crate::games::GameRecord;
use ohno::bail;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Comparison applied to a game's total runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum TotalOp {
    #[strum(to_string = "<")]
    LessThan,

    #[strum(to_string = "<=")]
    LessOrEqual,

    #[strum(to_string = "==")]
    Equal,

    #[strum(to_string = ">")]
    GreaterThan,
}

impl TotalOp {
    #[must_use]
    pub const fn compare(self, total: u32, threshold: u32) -> bool {
        match self {
            Self::LessThan => total < threshold,
            Self::LessOrEqual => total <= threshold,
            Self::Equal => total == threshold,
            Self::GreaterThan => total > threshold,
        }
    }
}

/// A run-distribution criterion: a minimum for combined first-five-inning
/// runs plus an operator comparison on total declared runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdSpec {
    first5_minimum: u32,
    total_op: TotalOp,
    total_threshold: u32,
}

impl ThresholdSpec {
    /// Create a spec, rejecting zero thresholds.
    ///
    /// # Errors
    ///
    /// Returns an error if `first5_minimum` or `total_threshold` is zero.
    pub fn new(first5_minimum: u32, total_op: TotalOp, total_threshold: u32) -> Result<Self> {
        if first5_minimum == 0 {
            bail!("first5_minimum must be at least 1");
        }

        if total_threshold == 0 {
            bail!("total_threshold must be at least 1");
        }

        Ok(Self {
            first5_minimum,
            total_op,
            total_threshold,
        })
    }

    /// Default Criterion X: at least 7 runs in the first five innings and
    /// fewer than 9 total runs.
    #[must_use]
    pub const fn criterion_x() -> Self {
        Self {
            first5_minimum: 7,
            total_op: TotalOp::LessThan,
            total_threshold: 9,
        }
    }

    /// Default Criterion Y: at least 6 runs in the first five innings and
    /// at most 9 total runs.
    #[must_use]
    pub const fn criterion_y() -> Self {
        Self {
            first5_minimum: 6,
            total_op: TotalOp::LessOrEqual,
            total_threshold: 9,
        }
    }

    #[must_use]
    pub const fn first5_minimum(&self) -> u32 {
        self.first5_minimum
    }

    #[must_use]
    pub const fn total_op(&self) -> TotalOp {
        self.total_op
    }

    #[must_use]
    pub const fn total_threshold(&self) -> u32 {
        self.total_threshold
    }

    /// Whether a game satisfies this criterion. Games without inning data
    /// never match.
    #[must_use]
    pub fn matches(&self, game: &GameRecord) -> bool {
        game.has_inning_data()
            && game.first_five_runs() >= self.first5_minimum
            && self.total_op.compare(game.total_runs(), self.total_threshold)
    }
}
