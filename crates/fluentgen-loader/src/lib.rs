pub mod config;
pub mod entities;

pub use config::{load_config, save_config};
pub use entities::{LoadedEntity, entity_path, find_entity, load_entities, load_entity, save_entity};
