use crate::commands::common::current_dir_utf8;
use camino::Utf8PathBuf;
use clap::Parser;
use linescore::Result;
use linescore::config::Config;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file [default: one of linescore.[toml|yml|yaml|json] ]
    #[arg(value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

pub fn validate_config(args: &ValidateArgs) -> Result<()> {
    let base_path = current_dir_utf8()?;
    let (_, warnings) = Config::load(&base_path, args.config.as_ref())?;

    if warnings.is_empty() {
        println!("Configuration is valid");
    } else {
        println!("Configuration is valid, with warnings:");
        for warning in &warnings {
            println!("  {warning}");
        }
    }

    Ok(())
}
