//! Run-distribution criteria: threshold specs, classification, and the push breakdown.

mod classifier;
mod push;
mod threshold;

pub use classifier::{Classification, classify};
pub use push::{PushBreakdown, PushBucket, PushPivot, Relation, push_breakdown};
pub use threshold::{ThresholdSpec, TotalOp};
