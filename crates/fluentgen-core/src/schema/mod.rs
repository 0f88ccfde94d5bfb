pub mod entity;
pub mod field;
pub mod field_type;

pub use entity::EntityDescriptor;
pub use field::Field;
pub use field_type::{FieldType, TypeToken, UNSUPPORTED_SENTINEL, UnknownFieldType};
