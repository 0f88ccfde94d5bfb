//! Naming conventions and helpers for fluentgen code generation.
//!
//! This crate provides the naming rules shared by every generated artifact:
//! schema names, Swift type names of the migration and controller, instance
//! variable names and artifact file names. It has no dependencies and can be
//! used by any other fluentgen crate.

// ============================================================================
// Schema Naming
// ============================================================================

/// Build the Fluent schema (table) name for an entity.
///
/// The rule is deliberately naive: lowercase the entity name and append `s`.
/// Irregular plurals are not handled.
///
/// # Examples
/// ```
/// use fluentgen_naming::schema_name;
///
/// assert_eq!(schema_name("Post"), "posts");
/// assert_eq!(schema_name("BlogPost"), "blogposts");
/// assert_eq!(schema_name("Person"), "persons");
/// assert_eq!(schema_name("Status"), "statuss");
/// assert_eq!(schema_name(""), "s");
/// ```
pub fn schema_name(entity: &str) -> String {
    format!("{}s", entity.to_lowercase())
}

// ============================================================================
// Type Naming
// ============================================================================

/// Name of the generated migration type.
///
/// # Examples
/// ```
/// use fluentgen_naming::migration_type_name;
///
/// assert_eq!(migration_type_name("Post"), "CreatePostMigration");
/// ```
pub fn migration_type_name(entity: &str) -> String {
    format!("Create{}Migration", entity)
}

/// Name of the generated route controller type.
///
/// # Examples
/// ```
/// use fluentgen_naming::controller_type_name;
///
/// assert_eq!(controller_type_name("Post"), "PostController");
/// ```
pub fn controller_type_name(entity: &str) -> String {
    format!("{}Controller", entity)
}

/// Local variable name for a single instance of the entity (lower camel case).
///
/// Only the first character is lowercased, so `BlogPost` becomes `blogPost`.
///
/// # Examples
/// ```
/// use fluentgen_naming::instance_name;
///
/// assert_eq!(instance_name("Post"), "post");
/// assert_eq!(instance_name("BlogPost"), "blogPost");
/// assert_eq!(instance_name(""), "");
/// ```
pub fn instance_name(entity: &str) -> String {
    let mut chars = entity.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert snake_case to lowerCamelCase.
///
/// # Examples
/// ```
/// use fluentgen_naming::to_lower_camel_case;
///
/// assert_eq!(to_lower_camel_case("created_at"), "createdAt");
/// assert_eq!(to_lower_camel_case("title"), "title");
/// ```
pub fn to_lower_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize = false;
    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize = !result.is_empty();
            continue;
        }
        if capitalize {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
        capitalize = false;
    }
    result
}

/// Returns true when `name` is usable as a plain Swift identifier.
///
/// Accepts ASCII letters, digits and `_`, not starting with a digit.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

// ============================================================================
// File Naming
// ============================================================================

/// Join a file stem and extension, tolerating a leading dot on the extension.
///
/// # Examples
/// ```
/// use fluentgen_naming::file_name;
///
/// assert_eq!(file_name("Post", "swift"), "Post.swift");
/// assert_eq!(file_name("Post", ".swift"), "Post.swift");
/// assert_eq!(file_name("Post", ""), "Post");
/// ```
pub fn file_name(stem: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        stem.to_string()
    } else {
        format!("{}.{}", stem, extension)
    }
}
