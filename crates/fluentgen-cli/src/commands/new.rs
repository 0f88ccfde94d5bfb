use std::fs;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use fluentgen_config::FileFormat;
use fluentgen_core::{EntityDescriptor, Field, FieldType};
use fluentgen_loader::{entity_path, load_config, load_entities, save_entity};
use fluentgen_naming::is_identifier;

use crate::utils::report_issues;

pub fn cmd_new(
    name: String,
    format: Option<FileFormat>,
    timestamps: bool,
    interactive: bool,
) -> Result<()> {
    let config = load_config()?;
    if !is_identifier(&name) {
        bail!("entity name is not a valid type identifier: '{}'", name);
    }

    let dir = config.entities_dir();
    if !dir.exists() {
        fs::create_dir_all(dir).context("create entities directory")?;
    }
    if load_entities(&config)?
        .iter()
        .any(|loaded| loaded.entity.name == name)
    {
        bail!("entity already exists: {}", name);
    }

    let format = format.unwrap_or(config.entity_format());
    let path = entity_path(&config, &name, format);
    if path.exists() {
        bail!("entity file already exists: {}", path.display());
    }

    let mut entity = EntityDescriptor::new(name).with_timestamps(timestamps);
    if interactive {
        prompt_fields(&mut entity)?;
        report_issues(&entity, false)?;
    }

    save_entity(&path, &entity)?;
    println!(
        "{} {}",
        "Created entity template:".bright_green(),
        path.display()
    );
    Ok(())
}

/// Ask for fields until an empty name is entered, then offer to drop some.
fn prompt_fields(entity: &mut EntityDescriptor) -> Result<()> {
    let types: Vec<&str> = FieldType::ALL.iter().map(|t| t.as_str()).collect();

    loop {
        let name: String = Input::new()
            .with_prompt("Field name (empty to finish)")
            .allow_empty(true)
            .interact_text()?;
        if name.is_empty() {
            break;
        }

        let type_idx = Select::new()
            .with_prompt("Type")
            .items(&types)
            .default(0)
            .interact()?;
        let key: String = Input::new()
            .with_prompt("Key (empty to use the field name)")
            .allow_empty(true)
            .interact_text()?;
        let optional = Confirm::new()
            .with_prompt("Optional?")
            .default(false)
            .interact()?;

        entity.fields.push(
            Field::new(name, FieldType::ALL[type_idx])
                .with_key(key)
                .with_optional(optional),
        );
    }

    while !entity.fields.is_empty()
        && Confirm::new()
            .with_prompt("Remove a field?")
            .default(false)
            .interact()?
    {
        let labels: Vec<String> = entity
            .fields
            .iter()
            .map(|f| format!("{}: {}", f.name, f.swift_type()))
            .collect();
        let idx = Select::new()
            .with_prompt("Field to remove")
            .items(&labels)
            .interact()?;
        // names may repeat at this point, the id does not
        let id = entity.fields[idx].id;
        entity.remove_field_by_id(id);
    }

    Ok(())
}
