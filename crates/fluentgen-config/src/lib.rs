pub mod config;
pub mod controller_style;
pub mod file_format;

pub use config::{CONFIG_FILE_NAME, FluentgenConfig, default_file_extension};
pub use controller_style::ControllerStyle;
pub use file_format::FileFormat;
