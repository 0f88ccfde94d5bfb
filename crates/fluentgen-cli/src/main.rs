use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use fluentgen_config::{ControllerStyle, FileFormat};
use fluentgen_core::{ArtifactKind, FieldType};

mod commands;
mod logging;
mod utils;
use commands::{
    ExportOverrides, cmd_export, cmd_field_add, cmd_field_remove, cmd_generate, cmd_init, cmd_new,
    cmd_path, cmd_status,
};

/// fluentgen command-line interface.
#[derive(Parser, Debug)]
#[command(name = "fluentgen", author, version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize fluentgen.json with defaults.
    Init,
    /// Create a new entity definition.
    New {
        name: String,
        /// Entity file format (defaults to the configured one).
        #[arg(short = 'f', long = "format", value_enum)]
        format: Option<FileFormat>,
        /// Do not add createdAt/updatedAt timestamps.
        #[arg(long)]
        no_timestamps: bool,
        /// Prompt for fields.
        #[arg(short, long)]
        interactive: bool,
    },
    /// Edit the fields of an entity.
    Field {
        #[command(subcommand)]
        command: FieldCommands,
    },
    /// Print generated sources to stdout.
    Generate {
        entity: String,
        /// Only print one artifact.
        #[arg(short, long, value_enum)]
        artifact: Option<ArtifactKind>,
        /// Controller style (defaults to the configured one).
        #[arg(long, value_enum)]
        style: Option<ControllerStyle>,
        /// Abort when the entity has validation issues.
        #[arg(long)]
        strict: bool,
    },
    /// Write generated sources to the export directories.
    Export {
        entity: String,
        #[arg(long)]
        model_dir: Option<PathBuf>,
        #[arg(long)]
        migration_dir: Option<PathBuf>,
        #[arg(long)]
        controller_dir: Option<PathBuf>,
        /// Abort when the entity has validation issues.
        #[arg(long)]
        strict: bool,
    },
    /// Show or set the remembered export directory of an artifact.
    Path {
        #[arg(value_enum, requires = "dir")]
        kind: Option<ArtifactKind>,
        dir: Option<PathBuf>,
    },
    /// Show configuration and entities.
    Status,
}

#[derive(Subcommand, Debug)]
enum FieldCommands {
    /// Append a field to an entity.
    Add {
        entity: String,
        name: String,
        /// Field type; Swift spellings are accepted in any case (`UUID`, `Boolean`).
        #[arg(
            short = 't',
            long = "type",
            value_parser = str::parse::<FieldType>,
            default_value_t = FieldType::String
        )]
        field_type: FieldType,
        /// Storage key (defaults to the field name).
        #[arg(short, long)]
        key: Option<String>,
        #[arg(short, long)]
        optional: bool,
    },
    /// Remove a field from an entity.
    Remove { entity: String, name: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Init => cmd_init(),
        Commands::New {
            name,
            format,
            no_timestamps,
            interactive,
        } => cmd_new(name, format, !no_timestamps, interactive),
        Commands::Field { command } => match command {
            FieldCommands::Add {
                entity,
                name,
                field_type,
                key,
                optional,
            } => cmd_field_add(&entity, name, field_type, key, optional),
            FieldCommands::Remove { entity, name } => cmd_field_remove(&entity, &name),
        },
        Commands::Generate {
            entity,
            artifact,
            style,
            strict,
        } => cmd_generate(&entity, artifact, style, strict),
        Commands::Export {
            entity,
            model_dir,
            migration_dir,
            controller_dir,
            strict,
        } => cmd_export(
            &entity,
            ExportOverrides {
                model_dir,
                migration_dir,
                controller_dir,
            },
            strict,
        ),
        Commands::Path { kind, dir } => cmd_path(kind, dir),
        Commands::Status => cmd_status(),
    }
}
