//! CLI commands module.

mod config;
mod fields;
mod generate;
mod inspect;
mod util;
mod verify;

pub use config::ConfigCommand;
pub use fields::FieldsCommand;
pub use generate::GenerateCommand;
pub use inspect::InspectCommand;
pub use verify::VerifyCommand;

// Re-export utils for use in commands
pub(crate) use util::*;
