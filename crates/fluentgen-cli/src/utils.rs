use anyhow::{Result, bail};
use colored::Colorize;
use fluentgen_core::{EntityDescriptor, collect_issues};

/// Print validation issues as warnings. With `strict`, any issue aborts.
pub fn report_issues(entity: &EntityDescriptor, strict: bool) -> Result<()> {
    let issues = collect_issues(entity);
    if issues.is_empty() {
        return Ok(());
    }

    for issue in &issues {
        eprintln!("{} {}", "warning:".bright_yellow().bold(), issue);
    }
    if strict {
        bail!(
            "entity '{}' has {} validation issue(s)",
            entity.name,
            issues.len()
        );
    }
    Ok(())
}
