use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the three generated outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Model,
    Migration,
    Controller,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Model,
        ArtifactKind::Migration,
        ArtifactKind::Controller,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Model => "model",
            ArtifactKind::Migration => "migration",
            ArtifactKind::Controller => "controller",
        }
    }

    /// File stem expected by Vapor's file layout conventions.
    pub fn file_stem(self, entity: &str) -> String {
        match self {
            ArtifactKind::Model => entity.to_string(),
            ArtifactKind::Migration => fluentgen_naming::migration_type_name(entity),
            ArtifactKind::Controller => fluentgen_naming::controller_type_name(entity),
        }
    }

    pub fn file_name(self, entity: &str, extension: &str) -> String {
        fluentgen_naming::file_name(&self.file_stem(entity), extension)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one generation run. Always built fresh, never appended to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    pub model: String,
    pub migration: String,
    pub controller: String,
}

impl GeneratedArtifacts {
    pub fn get(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Model => &self.model,
            ArtifactKind::Migration => &self.migration,
            ArtifactKind::Controller => &self.controller,
        }
    }

    /// Artifacts paired with their kind, in model, migration, controller order.
    pub fn iter(&self) -> impl Iterator<Item = (ArtifactKind, &str)> {
        ArtifactKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }
}
