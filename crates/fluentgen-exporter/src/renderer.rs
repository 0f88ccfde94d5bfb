use fluentgen_config::ControllerStyle;
use fluentgen_core::{ArtifactKind, EntityDescriptor, GeneratedArtifacts};

use crate::{controller::ControllerRenderer, migration::MigrationRenderer, model::ModelRenderer};

/// Common interface of the three source generators.
///
/// Rendering is pure: the same descriptor always yields the same text and
/// nothing is accumulated between calls. Which renderer serves which
/// [`ArtifactKind`] is decided by [`render_artifact`].
pub trait ArtifactRenderer {
    fn render(&self, entity: &EntityDescriptor) -> String;
}

/// Render a single artifact for the entity.
pub fn render_artifact(
    kind: ArtifactKind,
    entity: &EntityDescriptor,
    style: ControllerStyle,
) -> String {
    match kind {
        ArtifactKind::Model => ModelRenderer.render(entity),
        ArtifactKind::Migration => MigrationRenderer.render(entity),
        ArtifactKind::Controller => ControllerRenderer::new(style).render(entity),
    }
}

/// Render model, migration and controller in one pass.
pub fn generate(entity: &EntityDescriptor, style: ControllerStyle) -> GeneratedArtifacts {
    GeneratedArtifacts {
        model: render_artifact(ArtifactKind::Model, entity, style),
        migration: render_artifact(ArtifactKind::Migration, entity, style),
        controller: render_artifact(ArtifactKind::Controller, entity, style),
    }
}
