//! Configuration file loading.

use crate::config::schema::ProvisionConfig;
use crate::config::validator::validate;
use crate::error::{BootstrapError, Result};
use std::fs;
use std::path::Path;

/// Load a single config file and parse it into `ProvisionConfig`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ProvisionConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BootstrapError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            BootstrapError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into `ProvisionConfig`.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProvisionConfig> {
    if content.trim().is_empty() {
        return Ok(ProvisionConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| BootstrapError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the config file if one is given (defaults otherwise) and validate it.
pub fn load_config(path: Option<&Path>) -> Result<ProvisionConfig> {
    let config = match path {
        Some(path) => load_config_file(path)?,
        None => ProvisionConfig::default(),
    };
    tracing::debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Validate a config after command-line overrides have been applied.
pub fn finalize(config: ProvisionConfig) -> Result<ProvisionConfig> {
    validate(&config)?;
    Ok(config)
}
