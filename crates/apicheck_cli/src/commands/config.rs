//! Effective configuration command.

use anyhow::Result;
use apicheck_core::Config;
use console::style;
use std::path::Path;

/// Print the configuration loaded from `path`, or save it to `write`.
pub fn run(path: &Path, write: Option<&Path>) -> Result<()> {
    let config = Config::load(path)?;

    match write {
        Some(target) => {
            config.save(target)?;
            println!(
                "{} Wrote configuration to {}",
                style("✓").green(),
                target.display()
            );
        }
        None => print!("{}", config.to_toml()?),
    }

    Ok(())
}
