use thiserror::Error;

use crate::schema::FieldType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("entity name is empty")]
    EmptyEntityName,
    #[error("entity name is not a valid type identifier: '{0}'")]
    InvalidEntityName(String),
    #[error("field #{0} has an empty name")]
    EmptyFieldName(usize),
    #[error("field name is not a valid identifier: '{0}'")]
    InvalidFieldName(String),
    #[error("duplicate field name: {0}")]
    DuplicateFieldName(String),
    #[error("duplicate field key: {0}")]
    DuplicateKey(String),
    #[error("field '{0}' uses reserved key '{1}'")]
    ReservedKey(String, String),
    #[error("field '{0}' uses reserved property name")]
    ReservedName(String),
    #[error("field '{0}' has unsupported type '{1}'")]
    UnsupportedFieldType(String, FieldType),
}
