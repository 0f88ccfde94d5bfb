use anyhow::Result;
use colored::Colorize;
use fluentgen_config::ControllerStyle;
use fluentgen_core::{ArtifactKind, EntityDescriptor};
use fluentgen_exporter::{generate, render_artifact};
use fluentgen_loader::{find_entity, load_config};
use tracing::debug;

use crate::utils::report_issues;

pub fn cmd_generate(
    entity_name: &str,
    artifact: Option<ArtifactKind>,
    style: Option<ControllerStyle>,
    strict: bool,
) -> Result<()> {
    let config = load_config()?;
    let loaded = find_entity(&config, entity_name)?;
    report_issues(&loaded.entity, strict)?;

    let style = style.unwrap_or(config.controller_style());
    debug!(entity = entity_name, ?artifact, ?style, "generating sources");
    let sources = render_sources(&loaded.entity, artifact, style);
    let print_headers = sources.len() > 1;
    for (kind, source) in sources {
        if print_headers {
            let file = kind.file_name(&loaded.entity.name, config.file_extension());
            println!("{}", format!("// {}", file).bright_cyan());
        }
        print!("{}", source);
    }
    Ok(())
}

/// One artifact, or all three in model, migration, controller order.
fn render_sources(
    entity: &EntityDescriptor,
    artifact: Option<ArtifactKind>,
    style: ControllerStyle,
) -> Vec<(ArtifactKind, String)> {
    match artifact {
        Some(kind) => vec![(kind, render_artifact(kind, entity, style))],
        None => generate(entity, style)
            .iter()
            .map(|(kind, source)| (kind, source.to_string()))
            .collect(),
    }
}
