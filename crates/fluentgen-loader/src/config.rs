use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fluentgen_config::{CONFIG_FILE_NAME, FluentgenConfig};
use tracing::debug;

/// Load fluentgen.json from the current directory.
pub fn load_config() -> Result<FluentgenConfig> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if !path.exists() {
        anyhow::bail!(
            "{} not found. Run 'fluentgen init' first.",
            CONFIG_FILE_NAME
        );
    }
    read_config(&path)
}

/// Write the config as pretty JSON, replacing any existing file.
pub fn save_config(path: &Path, config: &FluentgenConfig) -> Result<()> {
    let text = serde_json::to_string_pretty(config).context("serialize config")?;
    fs::write(path, text).with_context(|| format!("write config: {}", path.display()))?;
    debug!(path = %path.display(), "config saved");
    Ok(())
}

fn read_config(path: &Path) -> Result<FluentgenConfig> {
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: FluentgenConfig =
        serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}
