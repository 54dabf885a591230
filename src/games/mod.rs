//! Normalized game records and the normalizer that produces them.

mod normalize;
mod record;

pub use normalize::normalize;
pub use record::{GameRecord, InningLine};
