pub mod export;
pub mod field;
pub mod generate;
pub mod init;
pub mod new;
pub mod path;
pub mod status;

pub use export::{ExportOverrides, cmd_export};
pub use field::{cmd_field_add, cmd_field_remove};
pub use generate::cmd_generate;
pub use init::cmd_init;
pub use new::cmd_new;
pub use path::cmd_path;
pub use status::cmd_status;
