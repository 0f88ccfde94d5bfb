#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::field_type::{FieldType, TypeToken};

/// A single stored property of an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Swift property name.
    pub name: String,
    /// Database key. Empty means "same as `name`".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub r#type: FieldType,
    /// List identity for editing front ends. Never serialized, never rendered.
    #[serde(skip, default = "Uuid::new_v4")]
    #[cfg_attr(feature = "schema", schemars(skip))]
    pub id: Uuid,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            name: String::new(),
            key: String::new(),
            is_optional: false,
            r#type: FieldType::default(),
            id: Uuid::new_v4(),
        }
    }
}

// Identity is presentation-only, so equality ignores `id`.
impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.key == other.key
            && self.is_optional == other.is_optional
            && self.r#type == other.r#type
    }
}

impl Eq for Field {}

impl Field {
    pub fn new(name: impl Into<String>, r#type: FieldType) -> Self {
        Self {
            name: name.into(),
            r#type,
            ..Default::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_optional(mut self, is_optional: bool) -> Self {
        self.is_optional = is_optional;
        self
    }

    /// Storage key: `key` when set, otherwise `name`.
    pub fn resolved_key(&self) -> &str {
        if self.key.is_empty() {
            &self.name
        } else {
            &self.key
        }
    }

    /// Swift property type including the optional marker.
    pub fn swift_type(&self) -> String {
        self.r#type.to_swift_type(self.is_optional)
    }

    pub fn migration_type(&self) -> TypeToken {
        self.r#type.migration_type()
    }

    pub fn is_supported(&self) -> bool {
        self.r#type.is_supported()
    }
}
