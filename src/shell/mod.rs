//! Process execution and platform detection.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{CommandResult, CommandSpec, ProcessRunner, SystemRunner};
pub use mock::{ScriptedResponse, ScriptedRunner};
pub use platform::Platform;
