#[expect(clippy::module_inception, reason = "Config lives in its own module file")]
mod config;

pub use config::{Config, CriterionConfig, DEFAULT_CONFIG_YAML, PivotConfig};
