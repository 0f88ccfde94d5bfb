use std::path::PathBuf;

use anyhow::{Result, bail};
use colored::Colorize;
use fluentgen_config::{CONFIG_FILE_NAME, FluentgenConfig};
use fluentgen_loader::save_config;

pub fn cmd_init() -> Result<()> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    save_config(&path, &FluentgenConfig::default())?;
    println!("{} {}", "Created".bright_green(), path.display());
    Ok(())
}
