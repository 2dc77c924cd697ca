//! Configuration validation.
//!
//! Package names and versions end up on a `cmd /C` command line on
//! Windows, so they are restricted to the characters npm itself allows.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::config::schema::ProvisionConfig;
use crate::error::{BootstrapError, Result};

static PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(@[a-z0-9][a-z0-9._~-]*/)?[a-z0-9][a-z0-9._~-]*$").expect("valid regex")
});

static VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+(-[0-9A-Za-z.-]+)?(\+[0-9A-Za-z.-]+)?$").expect("valid regex")
});

static EXECUTABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._/\\:-]+$").expect("valid regex"));

/// Validate a loaded configuration, reporting every problem at once.
pub fn validate(config: &ProvisionConfig) -> Result<()> {
    let mut problems = Vec::new();

    if !PACKAGE_NAME.is_match(&config.package) {
        problems.push(format!("'{}' is not a valid npm package name", config.package));
    }

    if !VERSION.is_match(&config.version) {
        problems.push(format!(
            "'{}' is not an exact semantic version",
            config.version
        ));
    }

    if config.server_id.trim().is_empty() {
        problems.push("server_id must not be empty".to_string());
    }

    // Joined into `cmd /C` command lines on Windows.
    for (field, value) in [
        ("package_manager", &config.package_manager),
        ("global_bin", &config.global_bin),
    ] {
        if !EXECUTABLE.is_match(value) {
            problems.push(format!("{} '{}' is not a plain executable name", field, value));
        }
    }

    if config.interpreter.trim().is_empty() {
        problems.push("interpreter must not be empty".to_string());
    }

    if config.init_timeout_secs == 0 {
        problems.push("init_timeout_secs must be greater than zero".to_string());
    }

    if config.entry_point.is_empty() || Path::new(&config.entry_point).is_absolute() {
        problems.push(format!(
            "entry_point '{}' must be a relative path",
            config.entry_point
        ));
    }

    if config.install_subdir.is_empty() || Path::new(&config.install_subdir).is_absolute() {
        problems.push(format!(
            "install_subdir '{}' must be a relative path",
            config.install_subdir
        ));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(BootstrapError::ConfigValidationError {
            message: problems.join("; "),
        })
    }
}
