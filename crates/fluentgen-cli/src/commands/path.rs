use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use fluentgen_config::CONFIG_FILE_NAME;
use fluentgen_core::ArtifactKind;
use fluentgen_loader::{load_config, save_config};

/// Show remembered export directories, or set one when `kind` and `dir` are given.
pub fn cmd_path(kind: Option<ArtifactKind>, dir: Option<PathBuf>) -> Result<()> {
    let mut config = load_config()?;

    if let (Some(kind), Some(dir)) = (kind, dir) {
        println!(
            "{} {} -> {}",
            "Export path set:".bright_green(),
            kind,
            dir.display()
        );
        config.set_export_dir(kind, dir);
        save_config(Path::new(CONFIG_FILE_NAME), &config)?;
        return Ok(());
    }

    println!("{}", "Export paths:".bright_cyan().bold());
    for kind in ArtifactKind::ALL {
        let dir = config.export_dir(kind);
        let shown = if dir.as_os_str().is_empty() {
            "(not set)".dimmed().to_string()
        } else {
            dir.display().to_string().bright_white().to_string()
        };
        println!("  {} {}", format!("{}:", kind).cyan(), shown);
    }
    Ok(())
}
