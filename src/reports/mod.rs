//! Report generation from a classified corpus.

mod console;
mod csv;

pub use console::generate as generate_console;
pub use csv::generate as generate_csv;

use crate::criteria::{Classification, PushBreakdown, PushPivot, ThresholdSpec};
use strum::Display;

/// Where the analyzed games came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DataSource {
    #[strum(to_string = "live MLB Stats API")]
    Live,

    #[strum(to_string = "built-in sample data")]
    Sample,
}

/// Everything a report needs: the classified corpus, the criteria it was
/// classified against, and the raw fetched count.
///
/// `total_fetched` counts every final game seen during fetching, including
/// games later dropped for missing inning data; match percentages are
/// computed against it.
#[derive(Debug)]
pub struct Analysis<'a> {
    pub season: i32,
    pub source: DataSource,
    pub total_fetched: usize,
    pub spec_x: ThresholdSpec,
    pub spec_y: ThresholdSpec,
    pub pivot: PushPivot,
    pub classification: Classification<'a>,
    pub push: PushBreakdown<'a>,
}
