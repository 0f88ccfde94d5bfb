pub mod artifact;
pub mod error;
pub mod schema;
pub mod validate;

pub use artifact::{ArtifactKind, GeneratedArtifacts};
pub use error::ValidationError;
pub use schema::{
    EntityDescriptor, Field, FieldType, TypeToken, UNSUPPORTED_SENTINEL, UnknownFieldType,
};
pub use validate::{collect_issues, validate_entity};
