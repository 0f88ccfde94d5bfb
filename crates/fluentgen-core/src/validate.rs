use std::collections::HashSet;

use fluentgen_naming::is_identifier;

use crate::error::ValidationError;
use crate::schema::EntityDescriptor;

/// Database keys emitted by the generator itself.
const IDENTITY_KEY: &str = "id";
const TIMESTAMP_KEYS: [&str; 2] = ["created_at", "updated_at"];
const TIMESTAMP_PROPERTIES: [&str; 2] = ["createdAt", "updatedAt"];

/// Validate an entity descriptor before generation.
///
/// Generation itself accepts any descriptor; this is the optional caller-side
/// layer. Returns the first issue found, in the order of [`collect_issues`].
pub fn validate_entity(entity: &EntityDescriptor) -> Result<(), ValidationError> {
    match collect_issues(entity).into_iter().next() {
        Some(issue) => Err(issue),
        None => Ok(()),
    }
}

/// Collect every issue in an entity descriptor.
/// Checks for:
/// - Empty or non-identifier entity name
/// - Empty or non-identifier field names
/// - Field names shadowing generated properties (`id`, timestamps)
/// - Duplicate field names and duplicate resolved keys
/// - Resolved keys colliding with generated columns
/// - Field types without a full catalog mapping
pub fn collect_issues(entity: &EntityDescriptor) -> Vec<ValidationError> {
    let mut issues = Vec::new();

    if entity.name.is_empty() {
        issues.push(ValidationError::EmptyEntityName);
    } else if !is_identifier(&entity.name) {
        issues.push(ValidationError::InvalidEntityName(entity.name.clone()));
    }

    let mut names = HashSet::new();
    let mut keys = HashSet::new();

    for (idx, field) in entity.fields.iter().enumerate() {
        if field.name.is_empty() {
            issues.push(ValidationError::EmptyFieldName(idx));
        } else {
            if !is_identifier(&field.name) {
                issues.push(ValidationError::InvalidFieldName(field.name.clone()));
            }
            if is_reserved_name(&field.name, entity.timestamps) {
                issues.push(ValidationError::ReservedName(field.name.clone()));
            }
            if !names.insert(field.name.as_str()) {
                issues.push(ValidationError::DuplicateFieldName(field.name.clone()));
            }
        }

        let key = field.resolved_key();
        if !key.is_empty() {
            if is_reserved_key(key, entity.timestamps) {
                issues.push(ValidationError::ReservedKey(field.name.clone(), key.to_string()));
            }
            if !keys.insert(key) {
                issues.push(ValidationError::DuplicateKey(key.to_string()));
            }
        }

        if !field.is_supported() {
            issues.push(ValidationError::UnsupportedFieldType(field.name.clone(), field.r#type));
        }
    }

    issues
}

fn is_reserved_name(name: &str, timestamps: bool) -> bool {
    name == IDENTITY_KEY || (timestamps && TIMESTAMP_PROPERTIES.contains(&name))
}

fn is_reserved_key(key: &str, timestamps: bool) -> bool {
    key == IDENTITY_KEY || (timestamps && TIMESTAMP_KEYS.contains(&key))
}
