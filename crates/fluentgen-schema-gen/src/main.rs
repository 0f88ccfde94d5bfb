use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use fluentgen_config::FluentgenConfig;
use fluentgen_core::EntityDescriptor;
use schemars::{Schema, schema_for};

#[derive(Debug, Parser)]
#[command(
    name = "fluentgen-schema-gen",
    about = "Emit JSON Schemas for fluentgen entity files and fluentgen.json."
)]
struct Args {
    /// Output directory for schema files.
    #[arg(short = 'o', long = "out", default_value = "schemas")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(args.out)
}

fn run(out: PathBuf) -> Result<()> {
    if !out.exists() {
        fs::create_dir_all(&out).with_context(|| format!("create dir {}", out.display()))?;
    }

    let schemas = [
        ("entity.schema.json", schema_for!(EntityDescriptor)),
        ("config.schema.json", schema_for!(FluentgenConfig)),
    ];

    println!("Wrote schemas:");
    for (file, schema) in &schemas {
        let path = out.join(file);
        write_schema(&path, schema)?;
        println!("  {}", path.display());
    }
    Ok(())
}

fn write_schema(path: &Path, schema: &Schema) -> Result<()> {
    let text = serde_json::to_string_pretty(schema)
        .with_context(|| format!("serialize {}", path.display()))?;
    fs::write(path, text).with_context(|| format!("write {}", path.display()))
}
