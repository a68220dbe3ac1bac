//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    target: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            let path = init_config(target, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default config to {}", path.display()))
            );
        }
    }
    Ok(())
}

fn init_config(target: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = match target {
        Some(path) => path.to_path_buf(),
        None => Config::path()?,
    };

    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(&path)?;
    Ok(path)
}
