use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fluentgen_config::{FileFormat, FluentgenConfig};
use fluentgen_core::EntityDescriptor;
use tracing::debug;

/// An entity definition together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedEntity {
    pub path: PathBuf,
    pub entity: EntityDescriptor,
}

/// Load all entity definitions from the entities directory (recursively).
///
/// Entities are sorted by name so listings are stable across platforms.
pub fn load_entities(config: &FluentgenConfig) -> Result<Vec<LoadedEntity>> {
    let entities_dir = config.entities_dir();
    if !entities_dir.exists() {
        return Ok(Vec::new());
    }

    let mut entities = Vec::new();
    load_entities_recursive(entities_dir, &mut entities)?;
    entities.sort_by(|a, b| a.entity.name.cmp(&b.entity.name));
    Ok(entities)
}

fn load_entities_recursive(dir: &Path, entities: &mut Vec<LoadedEntity>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read entities directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry.context("read directory entry")?;
        let path = entry.path();

        if path.is_dir() {
            load_entities_recursive(&path, entities)?;
            continue;
        }

        if path.is_file() && format_of(&path).is_some() {
            let entity = load_entity(&path)?;
            entities.push(LoadedEntity { path, entity });
        }
    }

    Ok(())
}

fn format_of(path: &Path) -> Option<FileFormat> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Some(FileFormat::Json),
        Some("yaml") => Some(FileFormat::Yaml),
        Some("yml") => Some(FileFormat::Yml),
        _ => None,
    }
}

/// Parse a single entity file; the format follows the file extension.
pub fn load_entity(path: &Path) -> Result<EntityDescriptor> {
    let Some(format) = format_of(path) else {
        anyhow::bail!("unsupported entity file extension: {}", path.display());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("read entity file: {}", path.display()))?;

    let entity: EntityDescriptor = if format.is_yaml() {
        serde_yaml::from_str(&content)
            .with_context(|| format!("parse YAML entity: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("parse JSON entity: {}", path.display()))?
    };
    debug!(
        path = %path.display(),
        entity = %entity.name,
        fields = entity.fields.len(),
        "entity loaded"
    );
    Ok(entity)
}

/// Find an entity by name among the definitions in the entities directory.
pub fn find_entity(config: &FluentgenConfig, name: &str) -> Result<LoadedEntity> {
    load_entities(config)?
        .into_iter()
        .find(|loaded| loaded.entity.name == name)
        .with_context(|| {
            format!(
                "entity '{}' not found in {}",
                name,
                config.entities_dir().display()
            )
        })
}

/// Default location of a new entity file.
pub fn entity_path(config: &FluentgenConfig, name: &str, format: FileFormat) -> PathBuf {
    config
        .entities_dir()
        .join(format!("{}.{}", name, format.extension()))
}

/// Write an entity definition, choosing JSON or YAML from the file extension.
pub fn save_entity(path: &Path, entity: &EntityDescriptor) -> Result<()> {
    let text = match format_of(path) {
        Some(format) if format.is_yaml() => {
            serde_yaml::to_string(entity).context("serialize entity as YAML")?
        }
        Some(_) => serde_json::to_string_pretty(entity).context("serialize entity as JSON")?,
        None => anyhow::bail!("unsupported entity file extension: {}", path.display()),
    };
    fs::write(path, text).with_context(|| format!("write entity file: {}", path.display()))?;
    debug!(path = %path.display(), entity = %entity.name, "entity saved");
    Ok(())
}
