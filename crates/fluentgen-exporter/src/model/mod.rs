use fluentgen_core::{EntityDescriptor, Field};
use fluentgen_naming::to_lower_camel_case;

use crate::renderer::ArtifactRenderer;

/// Keys and triggers of the Fluent timestamps, in emission order.
pub(crate) const TIMESTAMPS: [(&str, &str); 2] =
    [("created_at", ".create"), ("updated_at", ".update")];

pub struct ModelRenderer;

impl ArtifactRenderer for ModelRenderer {
    fn render(&self, entity: &EntityDescriptor) -> String {
        render_model(entity)
    }
}

/// Render a Fluent `Model` class for the entity.
///
/// Follows the Fluent model format:
/// <https://docs.vapor.codes/fluent/model/>
pub fn render_model(entity: &EntityDescriptor) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("import Fluent".into());
    lines.push("import Vapor".into());
    lines.push(String::new());
    lines.push(format!("final class {}: Model, Content {{", entity.name));
    lines.push(format!("    static let schema = \"{}\"", entity.schema_name()));

    lines.push(String::new());
    lines.push("    @ID(key: .id)".into());
    lines.push("    var id:UUID?".into());

    for field in &entity.fields {
        render_field(&mut lines, field);
    }
    if entity.timestamps {
        render_timestamps(&mut lines);
    }

    lines.push(String::new());
    lines.push("    init() { }".into());
    lines.push(String::new());
    render_initializer(&mut lines, entity);

    lines.push("}".into());
    lines.push(String::new());

    lines.join("\n")
}

fn render_field(lines: &mut Vec<String>, field: &Field) {
    let wrapper = if field.is_optional {
        "OptionalField"
    } else {
        "Field"
    };
    lines.push(String::new());
    lines.push(format!("    @{}(key: \"{}\")", wrapper, field.resolved_key()));
    lines.push(format!("    var {}: {}", field.name, field.swift_type()));
}

fn render_timestamps(lines: &mut Vec<String>) {
    for (key, trigger) in TIMESTAMPS {
        lines.push(String::new());
        lines.push(format!("    @Timestamp(key: \"{}\", on: {})", key, trigger));
        lines.push(format!("    var {}: Date?", to_lower_camel_case(key)));
    }
}

fn render_initializer(lines: &mut Vec<String>, entity: &EntityDescriptor) {
    let mut params = vec!["id: UUID?".to_string()];
    params.extend(
        entity
            .fields
            .iter()
            .map(|f| format!("{}: {}", f.name, f.swift_type())),
    );
    lines.push(format!("    init({}) {{", params.join(", ")));
    lines.push("        self.id = id".into());
    for field in &entity.fields {
        lines.push(format!("        self.{0} = {0}", field.name));
    }
    lines.push("    }".into());
}
