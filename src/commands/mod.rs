//! Command-line commands and orchestration.
//!
//! Each command follows the same pattern: parse arguments, load
//! configuration, then hand off to the library crate for fetching,
//! classification, and reporting.

mod analyze;
mod common;
mod init;
mod validate;

pub use analyze::{AnalyzeArgs, analyze};
pub use init::{InitArgs, init_config};
pub use validate::{ValidateArgs, validate_config};
