use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use colored::Colorize;
use fluentgen_config::{CONFIG_FILE_NAME, FluentgenConfig};
use fluentgen_core::ArtifactKind;
use fluentgen_exporter::{ExportOutcome, export_all, generate};
use fluentgen_loader::{find_entity, load_config, save_config};
use tracing::debug;

use crate::utils::report_issues;

/// Export directories given on the command line.
#[derive(Debug, Default)]
pub struct ExportOverrides {
    pub model_dir: Option<PathBuf>,
    pub migration_dir: Option<PathBuf>,
    pub controller_dir: Option<PathBuf>,
}

impl ExportOverrides {
    /// Store every given directory in the config. Returns true if any was set.
    fn apply(self, config: &mut FluentgenConfig) -> bool {
        let mut changed = false;
        for (kind, dir) in [
            (ArtifactKind::Model, self.model_dir),
            (ArtifactKind::Migration, self.migration_dir),
            (ArtifactKind::Controller, self.controller_dir),
        ] {
            if let Some(dir) = dir {
                config.set_export_dir(kind, dir);
                changed = true;
            }
        }
        changed
    }
}

pub fn cmd_export(entity_name: &str, overrides: ExportOverrides, strict: bool) -> Result<()> {
    let mut config = load_config()?;
    if overrides.apply(&mut config) {
        save_config(Path::new(CONFIG_FILE_NAME), &config)?;
        debug!("export directories updated from command line");
    }

    let loaded = find_entity(&config, entity_name)?;
    report_issues(&loaded.entity, strict)?;

    let artifacts = generate(&loaded.entity, config.controller_style());
    let extension = config.file_extension();
    let results = export_all(&config, &loaded.entity.name, extension, &artifacts);

    let mut failures = 0;
    for (kind, result) in results {
        match result {
            Ok(ExportOutcome::Written(path)) => {
                println!(
                    "{} {} -> {}",
                    "Exported".bright_green(),
                    kind,
                    path.display()
                );
            }
            Ok(ExportOutcome::Skipped) => {
                println!(
                    "{} {} (no directory set, use 'fluentgen path {} <dir>')",
                    "Skipped".yellow(),
                    kind,
                    kind
                );
            }
            Err(err) => {
                failures += 1;
                eprintln!("{} {}", "error:".bright_red().bold(), err);
            }
        }
    }

    if failures > 0 {
        bail!("{} artifact(s) failed to export", failures);
    }
    Ok(())
}
