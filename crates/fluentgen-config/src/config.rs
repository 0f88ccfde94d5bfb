use std::path::{Path, PathBuf};

use fluentgen_core::ArtifactKind;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::controller_style::ControllerStyle;
use crate::file_format::FileFormat;

/// File name of the configuration in the project root.
pub const CONFIG_FILE_NAME: &str = "fluentgen.json";

/// Default extension of generated source files.
pub fn default_file_extension() -> String {
    "swift".to_string()
}

fn default_entities_dir() -> PathBuf {
    PathBuf::from("entities")
}

/// Top-level fluentgen configuration.
///
/// The three `*_dir` entries are the remembered export directories. An empty
/// path means no directory has been chosen and export of that artifact is
/// skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct FluentgenConfig {
    /// Directory holding entity definition files.
    #[serde(default = "default_entities_dir")]
    pub entities_dir: PathBuf,
    /// Format used when creating new entity files.
    #[serde(default)]
    pub entity_format: FileFormat,
    #[serde(default)]
    pub model_dir: PathBuf,
    #[serde(default)]
    pub migration_dir: PathBuf,
    #[serde(default)]
    pub controller_dir: PathBuf,
    /// Extension of generated files, without the dot.
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
    #[serde(default)]
    pub controller_style: ControllerStyle,
}

impl Default for FluentgenConfig {
    fn default() -> Self {
        Self {
            entities_dir: default_entities_dir(),
            entity_format: FileFormat::Json,
            model_dir: PathBuf::new(),
            migration_dir: PathBuf::new(),
            controller_dir: PathBuf::new(),
            file_extension: default_file_extension(),
            controller_style: ControllerStyle::default(),
        }
    }
}

impl FluentgenConfig {
    /// Path where entity definitions are stored.
    pub fn entities_dir(&self) -> &Path {
        &self.entities_dir
    }

    /// Preferred file format for new entity files.
    pub fn entity_format(&self) -> FileFormat {
        self.entity_format
    }

    /// Remembered export directory for an artifact kind (may be empty).
    pub fn export_dir(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Model => &self.model_dir,
            ArtifactKind::Migration => &self.migration_dir,
            ArtifactKind::Controller => &self.controller_dir,
        }
    }

    /// Remember a new export directory for an artifact kind.
    pub fn set_export_dir(&mut self, kind: ArtifactKind, dir: impl Into<PathBuf>) {
        let dir = dir.into();
        match kind {
            ArtifactKind::Model => self.model_dir = dir,
            ArtifactKind::Migration => self.migration_dir = dir,
            ArtifactKind::Controller => self.controller_dir = dir,
        }
    }

    /// Extension of generated files.
    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }

    /// Controller contract to generate.
    pub fn controller_style(&self) -> ControllerStyle {
        self.controller_style
    }
}
