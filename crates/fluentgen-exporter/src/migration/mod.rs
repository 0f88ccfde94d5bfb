use fluentgen_core::{EntityDescriptor, Field};
use fluentgen_naming::migration_type_name;

use crate::model::TIMESTAMPS;
use crate::renderer::ArtifactRenderer;

pub struct MigrationRenderer;

impl ArtifactRenderer for MigrationRenderer {
    fn render(&self, entity: &EntityDescriptor) -> String {
        render_migration(entity)
    }
}

/// Render a Fluent `AsyncMigration` creating (and reverting) the entity schema.
pub fn render_migration(entity: &EntityDescriptor) -> String {
    let schema = entity.schema_name();

    let mut lines: Vec<String> = Vec::new();
    lines.push("import Fluent".into());
    lines.push(String::new());
    lines.push(format!(
        "struct {}: AsyncMigration {{",
        migration_type_name(&entity.name)
    ));

    lines.push("    func prepare(on database: Database) async throws {".into());
    lines.push(format!("        try await database.schema(\"{}\")", schema));
    lines.push("            .id()".into());
    for field in &entity.fields {
        lines.push(format!("            {}", field_directive(field)));
    }
    if entity.timestamps {
        for (key, _) in TIMESTAMPS {
            lines.push(format!("            .field(\"{}\", .datetime, .required)", key));
        }
    }
    lines.push("            .create()".into());
    lines.push("    }".into());

    lines.push(String::new());
    lines.push("    func revert(on database: Database) async throws {".into());
    lines.push(format!("        try await database.schema(\"{}\").delete()", schema));
    lines.push("    }".into());
    lines.push("}".into());
    lines.push(String::new());

    lines.join("\n")
}

fn field_directive(field: &Field) -> String {
    let key = field.resolved_key();
    let ty = field.migration_type();
    if field.is_optional {
        format!(".field(\"{}\", {})", key, ty)
    } else {
        format!(".field(\"{}\", {}, .required)", key, ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluentgen_core::{FieldType, UNSUPPORTED_SENTINEL};
    use insta::assert_snapshot;
    use rstest::rstest;

    fn post() -> EntityDescriptor {
        EntityDescriptor::new("Post")
            .with_field(Field::new("title", FieldType::String))
            .with_field(
                Field::new("body", FieldType::String)
                    .with_key("content")
                    .with_optional(true),
            )
    }

    #[test]
    fn test_render_post_migration() {
        assert_snapshot!(render_migration(&post()), @r#"
import Fluent

struct CreatePostMigration: AsyncMigration {
    func prepare(on database: Database) async throws {
        try await database.schema("posts")
            .id()
            .field("title", .string, .required)
            .field("content", .string)
            .field("created_at", .datetime, .required)
            .field("updated_at", .datetime, .required)
            .create()
    }

    func revert(on database: Database) async throws {
        try await database.schema("posts").delete()
    }
}
"#);
    }

    #[test]
    fn test_type_name_uses_corrected_spelling() {
        let out = render_migration(&post());
        assert!(out.contains("struct CreatePostMigration: AsyncMigration"));
        assert!(!out.contains("Mirgration"));
    }

    #[test]
    fn test_revert_drops_same_schema() {
        let entity = EntityDescriptor::new("BlogPost");
        let out = render_migration(&entity);
        assert!(out.contains("database.schema(\"blogposts\")\n"));
        assert!(out.contains("database.schema(\"blogposts\").delete()"));
        assert_eq!(out.matches("\"blogposts\"").count(), 2);
    }

    #[test]
    fn test_empty_entity_keeps_id_and_create() {
        let out = render_migration(&EntityDescriptor::new("Tag").with_timestamps(false));
        assert!(out.contains("            .id()\n            .create()"));
        assert!(!out.contains(".field("));
    }

    #[test]
    fn test_timestamps_toggle_only_adds_two_directives() {
        let with = render_migration(&post());
        let without = render_migration(&post().with_timestamps(false));
        let block = concat!(
            "\n            .field(\"created_at\", .datetime, .required)",
            "\n            .field(\"updated_at\", .datetime, .required)",
        );
        assert_eq!(with.replacen(block, "", 1), without);
        assert!(!without.contains("created_at"));
    }

    #[rstest]
    #[case(FieldType::Bool, false, ".field(\"v\", .bool, .required)")]
    #[case(FieldType::Datetime, true, ".field(\"v\", .datetime)")]
    #[case(FieldType::Time, false, ".field(\"v\", .time, .required)")]
    #[case(FieldType::Date, false, ".field(\"v\", .date, .required)")]
    #[case(FieldType::Float, false, ".field(\"v\", .float, .required)")]
    #[case(FieldType::Double, true, ".field(\"v\", .double)")]
    #[case(FieldType::Data, false, ".field(\"v\", .data, .required)")]
    #[case(FieldType::Uuid, false, ".field(\"v\", .uuid, .required)")]
    #[case(FieldType::Dictionary, false, ".field(\"v\", .dictionary, .required)")]
    #[case(FieldType::Array, true, ".field(\"v\", .array)")]
    #[case(FieldType::Enumeration, false, ".field(\"v\", .enum, .required)")]
    fn test_field_directives(
        #[case] ty: FieldType,
        #[case] optional: bool,
        #[case] expected: &str,
    ) {
        let field = Field::new("v", ty).with_optional(optional);
        assert_eq!(field_directive(&field), expected);
    }

    #[test]
    fn test_custom_type_renders_sentinel() {
        let field = Field::new("payload", FieldType::Custom);
        assert_eq!(
            field_directive(&field),
            format!(".field(\"payload\", {}, .required)", UNSUPPORTED_SENTINEL)
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        assert_eq!(render_migration(&post()), render_migration(&post()));
    }
}
