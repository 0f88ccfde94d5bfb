#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::field::Field;

fn default_timestamps() -> bool {
    true
}

/// User-specified shape driving generation: a name, ordered fields and
/// whether Fluent timestamps are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct EntityDescriptor {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default = "default_timestamps")]
    pub timestamps: bool,
}

impl Default for EntityDescriptor {
    fn default() -> Self {
        Self {
            name: String::new(),
            fields: Vec::new(),
            timestamps: default_timestamps(),
        }
    }
}

impl EntityDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Pluralized schema name shared by the model, migration and controller.
    pub fn schema_name(&self) -> String {
        fluentgen_naming::schema_name(&self.name)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields whose type still renders the unsupported sentinel somewhere.
    pub fn unsupported_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_supported())
    }

    /// Remove the first field with the given name.
    pub fn remove_field(&mut self, name: &str) -> Option<Field> {
        let idx = self.fields.iter().position(|f| f.name == name)?;
        Some(self.fields.remove(idx))
    }

    /// Remove a field by its list identity.
    pub fn remove_field_by_id(&mut self, id: Uuid) -> Option<Field> {
        let idx = self.fields.iter().position(|f| f.id == id)?;
        Some(self.fields.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::field_type::FieldType;

    #[test]
    fn test_default_has_timestamps() {
        let entity = EntityDescriptor::default();
        assert_eq!(entity.name, "");
        assert!(entity.fields.is_empty());
        assert!(entity.timestamps);
    }

    #[test]
    fn test_schema_name() {
        assert_eq!(EntityDescriptor::new("Post").schema_name(), "posts");
        assert_eq!(EntityDescriptor::new("").schema_name(), "s");
    }

    #[test]
    fn test_builder_preserves_order() {
        let entity = EntityDescriptor::new("Post")
            .with_field(Field::new("b", FieldType::String))
            .with_field(Field::new("a", FieldType::Bool))
            .with_timestamps(false);
        let names: Vec<_> = entity.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(!entity.timestamps);
    }

    #[test]
    fn test_unsupported_fields() {
        let entity = EntityDescriptor::new("Thing")
            .with_field(Field::new("title", FieldType::String))
            .with_field(Field::new("kind", FieldType::Enumeration))
            .with_field(Field::new("payload", FieldType::Custom));
        let names: Vec<_> = entity
            .unsupported_fields()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["kind", "payload"]);
    }

    #[test]
    fn test_remove_field_by_name_and_id() {
        let keep = Field::new("keep", FieldType::String);
        let removed = Field::new("drop", FieldType::String);
        let drop_id = removed.id;
        let mut entity = EntityDescriptor::new("Thing")
            .with_field(keep)
            .with_field(removed)
            .with_field(Field::new("other", FieldType::Bool));

        assert_eq!(entity.remove_field_by_id(drop_id).unwrap().name, "drop");
        assert!(entity.remove_field_by_id(drop_id).is_none());
        assert_eq!(entity.remove_field("other").unwrap().name, "other");
        assert!(entity.remove_field("missing").is_none());
        assert_eq!(entity.fields.len(), 1);
        assert!(entity.field("keep").is_some());
    }

    #[test]
    fn test_deserialize_defaults_timestamps_to_true() {
        let entity: EntityDescriptor = serde_json::from_str(r#"{ "name": "Post" }"#).unwrap();
        assert!(entity.timestamps);
        assert!(entity.fields.is_empty());
    }

    #[test]
    fn test_serde_shape() {
        let entity = EntityDescriptor::new("Post")
            .with_field(
                Field::new("body", FieldType::String)
                    .with_key("content")
                    .with_optional(true),
            );
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Post",
                "fields": [
                    { "name": "body", "key": "content", "isOptional": true, "type": "string" }
                ],
                "timestamps": true
            })
        );
    }
}
