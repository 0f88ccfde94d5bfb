use anyhow::Result;
use colored::Colorize;
use fluentgen_core::{ArtifactKind, collect_issues};
use fluentgen_loader::{load_config, load_entities};

pub fn cmd_status() -> Result<()> {
    let config = load_config()?;
    let entities = load_entities(&config)?;

    println!("{}", "Configuration:".bright_cyan().bold());
    println!(
        "  {} {}",
        "Entities directory:".cyan(),
        format!("{}", config.entities_dir().display()).bright_white()
    );
    println!("  {} {:?}", "Entity format:".cyan(), config.entity_format());
    println!(
        "  {} {}",
        "File extension:".cyan(),
        config.file_extension().bright_white()
    );
    println!(
        "  {} {:?}",
        "Controller style:".cyan(),
        config.controller_style()
    );
    for kind in ArtifactKind::ALL {
        let dir = config.export_dir(kind);
        let shown = if dir.as_os_str().is_empty() {
            "(not set)".dimmed().to_string()
        } else {
            format!("{}", dir.display()).bright_white().to_string()
        };
        println!("  {} {}", format!("{} directory:", kind).cyan(), shown);
    }
    println!();

    println!(
        "{} {}",
        "Entities:".bright_cyan().bold(),
        entities.len().to_string().bright_yellow()
    );
    for loaded in &entities {
        let entity = &loaded.entity;
        println!(
            "  {} {} {}{}",
            entity.name.bright_green(),
            format!("({} fields)", entity.fields.len()).bright_white(),
            format!("[{}]", entity.schema_name()).dimmed(),
            if entity.timestamps { " +timestamps" } else { "" }
        );
        for issue in collect_issues(entity) {
            println!("    {} {}", "warning:".bright_yellow(), issue);
        }
    }

    if entities.is_empty() {
        println!(
            "  {}",
            "No entities yet. Run 'fluentgen new <Name>' to create one.".bright_white()
        );
    }

    Ok(())
}
