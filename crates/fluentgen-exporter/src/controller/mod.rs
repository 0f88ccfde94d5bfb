use fluentgen_config::ControllerStyle;
use fluentgen_core::EntityDescriptor;
use fluentgen_naming::{controller_type_name, instance_name};

use crate::renderer::ArtifactRenderer;

/// Fallback local variable name when the entity has no name.
const FALLBACK_INSTANCE: &str = "item";

pub struct ControllerRenderer {
    pub style: ControllerStyle,
}

impl ControllerRenderer {
    pub fn new(style: ControllerStyle) -> Self {
        Self { style }
    }
}

impl ArtifactRenderer for ControllerRenderer {
    fn render(&self, entity: &EntityDescriptor) -> String {
        render_controller(entity, self.style)
    }
}

/// Render a Vapor `RouteCollection` with list, show and create routes
/// grouped under the entity schema name.
pub fn render_controller(entity: &EntityDescriptor, style: ControllerStyle) -> String {
    let mut lines: Vec<String> = Vec::new();
    if style.is_persistence() {
        lines.push("import Fluent".into());
    }
    lines.push("import Vapor".into());
    lines.push(String::new());
    lines.push(format!(
        "struct {}: RouteCollection {{",
        controller_type_name(&entity.name)
    ));
    lines.push("    func boot(routes: RoutesBuilder) throws {".into());
    lines.push(format!(
        "        let group = routes.grouped(\"{}\")",
        entity.schema_name()
    ));

    match style {
        ControllerStyle::Persistence => render_persistence(&mut lines, entity),
        ControllerStyle::Minimal => render_minimal(&mut lines),
    }

    lines.push("}".into());
    lines.push(String::new());

    lines.join("\n")
}

fn render_minimal(lines: &mut Vec<String>) {
    for registration in ["group.get(\"all\")", "group.get(\":id\")", "group.post"] {
        lines.push(format!("        {} {{ req in", registration));
        lines.push("            return Response(status: .ok)".into());
        lines.push("        }".into());
    }
    lines.push("    }".into());
}

fn render_persistence(lines: &mut Vec<String>, entity: &EntityDescriptor) {
    let ty = &entity.name;
    let mut var = instance_name(ty);
    if var.is_empty() {
        var = FALLBACK_INSTANCE.to_string();
    }

    lines.push("        group.get(\"all\", use: index)".into());
    lines.push("        group.get(\":id\", use: show)".into());
    lines.push("        group.post(use: create)".into());
    lines.push("    }".into());

    lines.push(String::new());
    lines.push(format!("    func index(req: Request) async throws -> [{}] {{", ty));
    lines.push(format!("        try await {}.query(on: req.db).all()", ty));
    lines.push("    }".into());

    // Missing id and lookup miss answer with different statuses.
    lines.push(String::new());
    lines.push(format!("    func show(req: Request) async throws -> {} {{", ty));
    lines.push("        guard let id = req.parameters.get(\"id\", as: UUID.self) else {".into());
    lines.push(format!(
        "            throw Abort(.badRequest, reason: \"Missing or invalid {} id\")",
        var
    ));
    lines.push("        }".into());
    lines.push(format!(
        "        guard let {} = try await {}.find(id, on: req.db) else {{",
        var, ty
    ));
    lines.push("            throw Abort(.notFound)".into());
    lines.push("        }".into());
    lines.push(format!("        return {}", var));
    lines.push("    }".into());

    lines.push(String::new());
    lines.push(format!("    func create(req: Request) async throws -> {} {{", ty));
    lines.push(format!("        let {} = try req.content.decode({}.self)", var, ty));
    lines.push(format!("        try await {}.save(on: req.db)", var));
    lines.push(format!("        return {}", var));
    lines.push("    }".into());
}
