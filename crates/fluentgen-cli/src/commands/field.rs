use anyhow::{Result, bail};
use colored::Colorize;
use fluentgen_core::{Field, FieldType};
use fluentgen_loader::{find_entity, load_config, save_entity};

use crate::utils::report_issues;

pub fn cmd_field_add(
    entity_name: &str,
    name: String,
    field_type: FieldType,
    key: Option<String>,
    optional: bool,
) -> Result<()> {
    let config = load_config()?;
    let mut loaded = find_entity(&config, entity_name)?;
    if loaded.entity.field(&name).is_some() {
        bail!("field '{}' already exists on {}", name, entity_name);
    }

    let field = Field::new(name, field_type)
        .with_key(key.unwrap_or_default())
        .with_optional(optional);
    println!(
        "{} {}.{}: {}",
        "Added field".bright_green(),
        entity_name,
        field.name.bright_white(),
        field.swift_type()
    );
    loaded.entity.fields.push(field);

    report_issues(&loaded.entity, false)?;
    save_entity(&loaded.path, &loaded.entity)
}

pub fn cmd_field_remove(entity_name: &str, name: &str) -> Result<()> {
    let config = load_config()?;
    let mut loaded = find_entity(&config, entity_name)?;
    if loaded.entity.remove_field(name).is_none() {
        bail!("field '{}' not found on {}", name, entity_name);
    }

    save_entity(&loaded.path, &loaded.entity)?;
    println!(
        "{} {}.{}",
        "Removed field".bright_green(),
        entity_name,
        name.bright_white()
    );
    Ok(())
}
