use std::fmt;
use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder rendered in place of a type token that has no mapping yet.
///
/// It is an editor placeholder in Swift source, so generated code that still
/// contains it is easy to spot and never compiles silently.
pub const UNSUPPORTED_SENTINEL: &str = "<#not implemented#>";

/// Semantic type of an entity field.
///
/// Serialized in lower case. Deserialization goes through [`FromStr`], so entity
/// files may also use the Swift spellings in any case (`UUID`, `Boolean`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    String,
    Bool,
    Datetime,
    Time,
    Date,
    Float,
    Double,
    Data,
    Uuid,
    Dictionary,
    Array,
    Enumeration,
    Custom,
}

/// Result of a catalog lookup: either a concrete token or an explicit gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeToken {
    Supported(&'static str),
    Unsupported,
}

impl TypeToken {
    /// Returns true when the lookup produced a concrete token.
    pub fn is_supported(self) -> bool {
        matches!(self, TypeToken::Supported(_))
    }

    /// The concrete token, if any.
    pub fn as_supported(self) -> Option<&'static str> {
        match self {
            TypeToken::Supported(token) => Some(token),
            TypeToken::Unsupported => None,
        }
    }

    /// Text written into generated code: the token or [`UNSUPPORTED_SENTINEL`].
    pub fn render(self) -> &'static str {
        self.as_supported().unwrap_or(UNSUPPORTED_SENTINEL)
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

impl FieldType {
    /// Every catalog entry, in declaration order.
    pub const ALL: [FieldType; 13] = [
        FieldType::String,
        FieldType::Bool,
        FieldType::Datetime,
        FieldType::Time,
        FieldType::Date,
        FieldType::Float,
        FieldType::Double,
        FieldType::Data,
        FieldType::Uuid,
        FieldType::Dictionary,
        FieldType::Array,
        FieldType::Enumeration,
        FieldType::Custom,
    ];

    /// Serialized (lowercase) name.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Bool => "bool",
            FieldType::Datetime => "datetime",
            FieldType::Time => "time",
            FieldType::Date => "date",
            FieldType::Float => "float",
            FieldType::Double => "double",
            FieldType::Data => "data",
            FieldType::Uuid => "uuid",
            FieldType::Dictionary => "dictionary",
            FieldType::Array => "array",
            FieldType::Enumeration => "enumeration",
            FieldType::Custom => "custom",
        }
    }

    /// Swift type used for the stored property in the model.
    pub fn declaration_type(self) -> TypeToken {
        match self {
            FieldType::String => TypeToken::Supported("String"),
            FieldType::Bool => TypeToken::Supported("Bool"),
            FieldType::Datetime | FieldType::Time | FieldType::Date => {
                TypeToken::Supported("Date")
            }
            FieldType::Float => TypeToken::Supported("Float"),
            FieldType::Double => TypeToken::Supported("Double"),
            FieldType::Data => TypeToken::Supported("Data"),
            FieldType::Uuid => TypeToken::Supported("UUID"),
            FieldType::Dictionary => TypeToken::Supported("Dictionary<T>"),
            FieldType::Array => TypeToken::Supported("[T]"),
            FieldType::Enumeration | FieldType::Custom => TypeToken::Unsupported,
        }
    }

    /// Fluent `DatabaseSchema.DataType` token used by the migration.
    pub fn migration_type(self) -> TypeToken {
        match self {
            FieldType::String => TypeToken::Supported(".string"),
            FieldType::Bool => TypeToken::Supported(".bool"),
            FieldType::Datetime => TypeToken::Supported(".datetime"),
            FieldType::Time => TypeToken::Supported(".time"),
            FieldType::Date => TypeToken::Supported(".date"),
            FieldType::Float => TypeToken::Supported(".float"),
            FieldType::Double => TypeToken::Supported(".double"),
            FieldType::Data => TypeToken::Supported(".data"),
            FieldType::Uuid => TypeToken::Supported(".uuid"),
            FieldType::Dictionary => TypeToken::Supported(".dictionary"),
            FieldType::Array => TypeToken::Supported(".array"),
            FieldType::Enumeration => TypeToken::Supported(".enum"),
            FieldType::Custom => TypeToken::Unsupported,
        }
    }

    /// Returns true when both the declaration and migration tokens are mapped.
    pub fn is_supported(self) -> bool {
        self.declaration_type().is_supported() && self.migration_type().is_supported()
    }

    /// Convert to the Swift property type, appending `?` for optional fields.
    pub fn to_swift_type(self, optional: bool) -> String {
        let base = self.declaration_type().render();
        if optional {
            format!("{}?", base)
        } else {
            base.to_string()
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field type: {0}")]
pub struct UnknownFieldType(pub String);

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    /// Accepts the serialized names and the Swift spellings, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = match s.trim().to_ascii_lowercase().as_str() {
            "string" => FieldType::String,
            "bool" | "boolean" => FieldType::Bool,
            "datetime" => FieldType::Datetime,
            "time" => FieldType::Time,
            "date" => FieldType::Date,
            "float" => FieldType::Float,
            "double" => FieldType::Double,
            "data" => FieldType::Data,
            "uuid" => FieldType::Uuid,
            "dictionary" => FieldType::Dictionary,
            "array" => FieldType::Array,
            "enumeration" | "enum" => FieldType::Enumeration,
            "custom" => FieldType::Custom,
            _ => return Err(UnknownFieldType(s.to_string())),
        };
        Ok(ty)
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
