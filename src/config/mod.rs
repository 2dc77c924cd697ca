//! Configuration loading, defaults and validation.
//!
//! # Modules
//!
//! - [`schema`] - The `ProvisionConfig` structure and its defaults
//! - [`loader`] - Reading the optional YAML config file
//! - [`validator`] - Checks applied before anything is spawned

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{finalize, load_config, load_config_file, parse_config};
pub use schema::ProvisionConfig;
pub use validator::validate;
