//! Service configuration
//!
//! The settings the surrounding service reads from `config.yml`: block
//! explorer endpoints and credentials, and how verbose logging should be.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::ServiceConfig;

/// File name looked up in the project directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "config.yml";
