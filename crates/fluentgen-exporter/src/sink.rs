use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use fluentgen_config::FluentgenConfig;
use fluentgen_core::{ArtifactKind, GeneratedArtifacts};
use thiserror::Error;
use tracing::{debug, error};

/// Resolves where each artifact kind is written.
pub trait ExportTargets {
    /// Target directory for `kind`. An empty path disables the export.
    fn target_dir(&self, kind: ArtifactKind) -> &Path;
}

impl ExportTargets for FluentgenConfig {
    fn target_dir(&self, kind: ArtifactKind) -> &Path {
        self.export_dir(kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    /// No directory configured for the artifact.
    Skipped,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write one artifact into `dir`, replacing any existing file.
pub fn export_artifact(
    dir: &Path,
    kind: ArtifactKind,
    entity_name: &str,
    extension: &str,
    content: &str,
) -> Result<ExportOutcome, ExportError> {
    if dir.as_os_str().is_empty() {
        debug!(%kind, entity = entity_name, "no export directory, skipping");
        return Ok(ExportOutcome::Skipped);
    }

    let path = dir.join(kind.file_name(entity_name, extension));
    match write_file(&path, content) {
        Ok(()) => {
            debug!(%kind, path = %path.display(), bytes = content.len(), "artifact written");
            Ok(ExportOutcome::Written(path))
        }
        Err(source) => {
            error!(%kind, path = %path.display(), error = %source, "artifact export failed");
            Err(ExportError::Write { path, source })
        }
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(content.as_bytes())?;
    writer.flush()
}

/// Export every artifact to its target directory.
///
/// Each kind is attempted independently; the result list is in model,
/// migration, controller order.
pub fn export_all<T: ExportTargets + ?Sized>(
    targets: &T,
    entity_name: &str,
    extension: &str,
    artifacts: &GeneratedArtifacts,
) -> Vec<(ArtifactKind, Result<ExportOutcome, ExportError>)> {
    artifacts
        .iter()
        .map(|(kind, content)| {
            let result = export_artifact(
                targets.target_dir(kind),
                kind,
                entity_name,
                extension,
                content,
            );
            (kind, result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluentgen_config::ControllerStyle;
    use fluentgen_core::{EntityDescriptor, Field, FieldType};
    use std::fs;
    use tempfile::tempdir;

    use crate::generate;

    fn artifacts() -> GeneratedArtifacts {
        let entity =
            EntityDescriptor::new("Post").with_field(Field::new("title", FieldType::String));
        generate(&entity, ControllerStyle::default())
    }

    #[test]
    fn test_empty_dir_is_noop() {
        let outcome =
            export_artifact(Path::new(""), ArtifactKind::Model, "Post", "swift", "x").unwrap();
        assert_eq!(outcome, ExportOutcome::Skipped);
    }

    #[test]
    fn test_writes_exact_content_and_overwrites() {
        let dir = tempdir().unwrap();
        export_artifact(dir.path(), ArtifactKind::Model, "Post", "swift", "old").unwrap();
        let outcome =
            export_artifact(dir.path(), ArtifactKind::Model, "Post", "swift", "new").unwrap();

        let path = dir.path().join("Post.swift");
        assert_eq!(outcome, ExportOutcome::Written(path.clone()));
        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn test_missing_directory_is_write_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = export_artifact(&missing, ArtifactKind::Migration, "Post", "swift", "x")
            .unwrap_err();
        let ExportError::Write { path, .. } = &err;
        assert_eq!(path, &missing.join("CreatePostMigration.swift"));
        assert!(err.to_string().contains("CreatePostMigration.swift"));
    }

    #[test]
    fn test_export_all_writes_each_kind_to_its_own_file() {
        let model_dir = tempdir().unwrap();
        let shared = tempdir().unwrap();
        let mut config = FluentgenConfig::default();
        config.set_export_dir(ArtifactKind::Model, model_dir.path());
        config.set_export_dir(ArtifactKind::Migration, shared.path());
        config.set_export_dir(ArtifactKind::Controller, shared.path());

        let generated = artifacts();
        let results = export_all(&config, "Post", "swift", &generated);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|(_, r)| r.is_ok()));

        let controller = fs::read_to_string(shared.path().join("PostController.swift")).unwrap();
        assert_eq!(controller, generated.controller);
        assert_ne!(controller, generated.migration);
        assert_eq!(
            fs::read_to_string(shared.path().join("CreatePostMigration.swift")).unwrap(),
            generated.migration
        );
        assert_eq!(
            fs::read_to_string(model_dir.path().join("Post.swift")).unwrap(),
            generated.model
        );
    }

    #[test]
    fn test_export_all_continues_after_failure() {
        let good = tempdir().unwrap();
        let mut config = FluentgenConfig::default();
        config.set_export_dir(ArtifactKind::Model, good.path().join("missing"));
        config.set_export_dir(ArtifactKind::Controller, good.path());

        let results = export_all(&config, "Post", "swift", &artifacts());
        assert!(matches!(results[0], (ArtifactKind::Model, Err(_))));
        assert!(matches!(
            results[1],
            (ArtifactKind::Migration, Ok(ExportOutcome::Skipped))
        ));
        assert!(matches!(
            results[2],
            (ArtifactKind::Controller, Ok(ExportOutcome::Written(_)))
        ));
    }

    #[test]
    fn test_custom_extension() {
        let dir = tempdir().unwrap();
        let outcome =
            export_artifact(dir.path(), ArtifactKind::Controller, "Tag", "txt", "c").unwrap();
        assert_eq!(
            outcome,
            ExportOutcome::Written(dir.path().join("TagController.txt"))
        );
    }
}
