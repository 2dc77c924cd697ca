//! Error types for bootstrap operations.
//!
//! This module defines [`BootstrapError`], the error type used by every
//! fallible step, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration errors abort the binary before anything is spawned
//! - Process and IO errors inside provisioning are caught and logged by
//!   [`Provisioner::ensure_server_available`](crate::provision::Provisioner::ensure_server_available)
//! - Use `anyhow::Error` (via `BootstrapError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bootstrap operations.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A package manager command exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A process could not be spawned or waited on.
    #[error("Failed to run '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    /// The package manager's listing output was not the expected JSON.
    #[error("Unreadable dependency listing: {message}")]
    ListingParseError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;
