//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.

pub mod dispatcher;
pub mod launch;
pub mod provision;
pub mod status;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
