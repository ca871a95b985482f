//! Config command implementation

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;

pub fn execute(config: &Config, example: bool, output: Option<PathBuf>) -> Result<()> {
    if let Some(path) = output {
        Config::default().save_to_file(&path)?;
        log::info!("Wrote default configuration to {}", path.display());
    } else if example {
        print!("{}", Config::example_toml()?);
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}
