use crate::Result;
use crate::criteria::{PushPivot, ThresholdSpec, TotalOp};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Datelike, Utc};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration YAML content, embedded from `default_config.yml`
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../default_config.yml");

/// Range of sample day counts that produce reasonable results; values
/// outside it work but draw a warning.
const TYPICAL_SAMPLE_DAYS: core::ops::RangeInclusive<u32> = 10..=60;

fn default_season() -> i32 {
    Utc::now().year()
}

const fn default_sample_days() -> u32 {
    30
}

const fn default_schedule_cache_ttl() -> u64 {
    1
}

/// One criterion as written in a configuration file. Converted into a
/// validated [`ThresholdSpec`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CriterionConfig {
    pub first5_minimum: u32,
    pub total_operator: TotalOp,
    pub total_threshold: u32,
}

impl CriterionConfig {
    const fn criterion_x() -> Self {
        Self {
            first5_minimum: 7,
            total_operator: TotalOp::LessThan,
            total_threshold: 9,
        }
    }

    const fn criterion_y() -> Self {
        Self {
            first5_minimum: 6,
            total_operator: TotalOp::LessOrEqual,
            total_threshold: 9,
        }
    }

    /// Build the validated spec, failing fast on zero thresholds.
    pub fn threshold_spec(&self) -> Result<ThresholdSpec> {
        ThresholdSpec::new(self.first5_minimum, self.total_operator, self.total_threshold)
    }
}

/// Push pivots as written in a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PivotConfig {
    pub first5_pivot: u32,
    pub total_pivot: u32,
}

impl Default for PivotConfig {
    fn default() -> Self {
        Self {
            first5_pivot: 6,
            total_pivot: 9,
        }
    }
}

impl PivotConfig {
    /// Build the validated pivot pair, failing fast on zero pivots.
    pub fn push_pivot(&self) -> Result<PushPivot> {
        PushPivot::new(self.first5_pivot, self.total_pivot)
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Season year to analyze
    #[serde(default = "default_season")]
    pub season: i32,

    /// Fetch live results instead of using the built-in sample data
    #[serde(default)]
    pub use_live_data: bool,

    /// Number of dates to sample across the season
    #[serde(default = "default_sample_days")]
    pub sample_days: u32,

    /// Number of hours to keep fetched schedule data cached before re-fetching
    #[serde(default = "default_schedule_cache_ttl")]
    pub schedule_cache_ttl: u64,

    #[serde(default = "CriterionConfig::criterion_x")]
    pub criterion_x: CriterionConfig,

    #[serde(default = "CriterionConfig::criterion_y")]
    pub criterion_y: CriterionConfig,

    #[serde(default)]
    pub push_pivot: PivotConfig,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// criteria or pivots it defines are invalid
    pub fn load(base_path: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<(Self, Vec<String>)> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading linescore configuration from {path}"))?;
            (path.clone(), text)
        } else {
            let candidates = [
                base_path.join("linescore.toml"),
                base_path.join("linescore.yml"),
                base_path.join("linescore.yaml"),
                base_path.join("linescore.json"),
            ];

            let mut found = None;
            for path in &candidates {
                match fs::read_to_string(path) {
                    Ok(text) => {
                        found = Some((path.clone(), text));
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_app_err_with(|| format!("reading linescore configuration from {path}")),
                }
            }

            let Some(result) = found else {
                return Ok((Self::default(), Vec::new()));
            };
            result
        };

        let extension = final_path.extension().unwrap_or_default();
        let config: Self = match extension {
            "toml" => toml::from_str(&text).into_app_err_with(|| format!("parsing TOML configuration from {final_path}"))?,
            "yml" | "yaml" => serde_yaml::from_str(&text).into_app_err_with(|| format!("parsing YAML configuration from {final_path}"))?,
            "json" => serde_json::from_str(&text).into_app_err_with(|| format!("parsing JSON configuration from {final_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        // Criteria and pivots must construct cleanly; a zero threshold is a
        // hard error, not a warning.
        config.check()?;

        let mut warnings = Vec::new();
        config.validate(&mut warnings);
        Ok((config, warnings))
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save(&self, output_path: &Utf8Path) -> Result<()> {
        let extension = output_path.extension().unwrap_or_default();
        let text = match extension {
            "toml" => toml::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to TOML for saving to {output_path}"))?,
            "yml" | "yaml" => serde_yaml::to_string(self)
                .into_app_err_with(|| format!("serializing configuration to YAML for saving to {output_path}"))?,
            "json" => serde_json::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to JSON for saving to {output_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        fs::write(output_path, text).into_app_err_with(|| format!("writing configuration to {output_path}"))?;
        Ok(())
    }

    /// Save the default configuration to a file, preserving comments for YAML format
    ///
    /// For YAML output this writes the raw content of `default_config.yml`
    /// with all comments intact. Other formats are serialized from the
    /// default values and lose the comments.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default_with_comments(&self, output_path: &Utf8Path) -> Result<()> {
        let extension = output_path.extension().unwrap_or_default();

        if matches!(extension, "yml" | "yaml") {
            fs::write(output_path, DEFAULT_CONFIG_YAML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        } else {
            self.save(output_path)?;
        }

        Ok(())
    }

    /// Fail fast if the configured criteria or pivots cannot be constructed.
    fn check(&self) -> Result<()> {
        let _ = self.criterion_x.threshold_spec()?;
        let _ = self.criterion_y.threshold_spec()?;
        let _ = self.push_pivot.push_pivot()?;
        Ok(())
    }

    /// Detect configurations that are legal but probably not what was meant.
    fn validate(&self, warnings: &mut Vec<String>) {
        if !TYPICAL_SAMPLE_DAYS.contains(&self.sample_days) {
            warnings.push(format!(
                "sample_days of {} is outside the typical range of {}-{}",
                self.sample_days,
                TYPICAL_SAMPLE_DAYS.start(),
                TYPICAL_SAMPLE_DAYS.end()
            ));
        }

        if self.criterion_x == self.criterion_y {
            warnings.push("criterion_y is identical to criterion_x; no games will ever be reported under Y".to_string());
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        serde_yaml::from_str(DEFAULT_CONFIG_YAML).expect("default_config.yml should be valid YAML that deserializes to Config")
    }
}
