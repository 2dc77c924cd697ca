//! Command-line interface.
//!
//! The binary stands in for the IDE at startup: it provisions the server
//! and reports the server definition a language-client host would receive.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, LaunchArgs, LocationArgs, ProvisionArgs, StatusArgs};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
