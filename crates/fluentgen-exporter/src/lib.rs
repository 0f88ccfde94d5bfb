//! Renders `EntityDescriptor`s into Vapor/Fluent Swift sources (model,
//! migration and controller) and writes them to the export directories.

pub mod controller;
pub mod migration;
pub mod model;
pub mod renderer;
pub mod sink;

pub use controller::{ControllerRenderer, render_controller};
pub use migration::{MigrationRenderer, render_migration};
pub use model::{ModelRenderer, render_model};
pub use renderer::{ArtifactRenderer, generate, render_artifact};
pub use sink::{ExportError, ExportOutcome, ExportTargets, export_all, export_artifact};
