//! prisma-ls-bootstrap - Provision the Prisma language server at IDE startup.
//!
//! On startup the [`provision::Provisioner`] checks whether the pinned
//! version of `@prisma/language-server` is installed, installs it with npm
//! when it is not, and registers a `node <entry point> --stdio` launch
//! command with the language-client host.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration defaults, loading and validation
//! - [`error`] - Error types and result aliases
//! - [`host`] - Language-client host interface and in-memory registry
//! - [`log`] - Logging capability injected into the provisioner
//! - [`npm`] - Package manager commands and listing parsing
//! - [`provision`] - The check/install/register sequence
//! - [`shell`] - Process execution and platform detection
//! - [`ui`] - Progress indicators and terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use prisma_ls_bootstrap::provision::entry_point_path;
//!
//! let entry = entry_point_path(
//!     Path::new("/plugins/prisma/language_server"),
//!     "@prisma/language-server",
//!     "dist/src/cli.js",
//! );
//! assert!(entry.ends_with("node_modules/@prisma/language-server/dist/src/cli.js"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod log;
pub mod npm;
pub mod provision;
pub mod shell;
pub mod ui;

pub use error::{BootstrapError, Result};
