//! Shared argument handling and setup for the commands.

use camino::Utf8PathBuf;
use clap::Args;
use clap::ValueEnum;
use core::time::Duration;
use directories::BaseDirs;
use linescore::Result;
use linescore::config::Config;
use linescore::misc::ColorMode;
use linescore::schedule::ProgressReporter;
use ohno::{IntoAppError, app_err};
use std::path::PathBuf;

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

/// Arguments shared by all commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to configuration file [default: one of linescore.[toml|yml|yaml|json] ]
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Directory where fetched schedule data is cached [default: the platform cache directory]
    #[arg(long, value_name = "PATH")]
    pub cache_dir: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

pub struct Common {
    pub config: Config,
    pub cache_dir: PathBuf,
    color: ColorMode,
    log_level: LogLevel,
}

impl Common {
    /// Create a new Common processor with logger and config
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded or the cache
    /// directory cannot be determined
    pub fn new(args: &CommonArgs) -> Result<Self> {
        Self::init_logging(args.log_level);

        let base_path = current_dir_utf8()?;
        let (config, warnings) = Config::load(&base_path, args.config.as_ref())?;

        let cache_dir = if let Some(cache_path) = &args.cache_dir {
            cache_path.as_std_path().to_path_buf()
        } else {
            BaseDirs::new()
                .into_app_err("Failed to determine cache directory")?
                .cache_dir()
                .join("linescore")
        };

        if !warnings.is_empty() {
            eprintln!("\n⚠️  Configuration validation warnings:");
            for warning in &warnings {
                eprintln!("   {warning}");
            }
            eprintln!();
        }

        Ok(Self {
            config,
            cache_dir,
            color: args.color,
            log_level: args.log_level,
        })
    }

    pub fn use_colors(&self) -> bool {
        self.color.enabled()
    }

    /// Create a progress reporter for long-running fetches.
    ///
    /// When logging is disabled, use a short delay so the progress bar appears for long operations.
    /// When logging is enabled, use an infinite delay so the progress bar never appears (would interfere with log output).
    pub fn progress(&self) -> ProgressReporter {
        let delay = if self.log_level == LogLevel::None {
            Duration::from_millis(500)
        } else {
            Duration::MAX
        };

        ProgressReporter::new(delay, self.use_colors())
    }

    /// Initialize logger based on log level
    fn init_logging(log_level: LogLevel) {
        if log_level == LogLevel::None {
            return;
        }

        let level = match log_level {
            LogLevel::None => return, // Already checked above, but being explicit
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(log_level, LogLevel::Debug) || matches!(log_level, LogLevel::Trace))
            .init();
    }
}

/// The current directory as a UTF-8 path, for config file discovery.
pub fn current_dir_utf8() -> Result<Utf8PathBuf> {
    let dir = std::env::current_dir().into_app_err("unable to determine current directory")?;
    Utf8PathBuf::from_path_buf(dir).map_err(|path| app_err!("current directory {} is not valid UTF-8", path.display()))
}
