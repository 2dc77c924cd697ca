//! Scripted process runner for testing.
//!
//! `ScriptedRunner` implements [`ProcessRunner`] without spawning anything.
//! Responses are keyed by a subcommand word (`list`, `install`, ...) and
//! every invocation is recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use prisma_ls_bootstrap::shell::{CommandSpec, ProcessRunner, ScriptedRunner, ScriptedResponse};
//!
//! let mut runner = ScriptedRunner::new();
//! runner.respond_to("list", ScriptedResponse::exit(0, r#"{"dependencies":{}}"#));
//!
//! let result = runner
//!     .run(&CommandSpec::new("npm").args(["list", "--depth=0", "-json"]))
//!     .unwrap();
//! assert!(result.success);
//! assert_eq!(runner.invocations_of("list").len(), 1);
//! ```

use std::collections::HashMap;
use std::time::Duration;

use crate::error::{BootstrapError, Result};

use super::command::{CommandResult, CommandSpec, ProcessRunner};

/// A canned outcome for a scripted command.
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    /// The process ran and exited with this code and stdout.
    Exit { code: i32, stdout: String },
    /// The process could not be spawned.
    SpawnError { message: String },
}

impl ScriptedResponse {
    /// A process that exits with `code` after printing `stdout`.
    pub fn exit(code: i32, stdout: &str) -> Self {
        Self::Exit {
            code,
            stdout: stdout.to_string(),
        }
    }

    /// A process that fails to spawn.
    pub fn spawn_error(message: &str) -> Self {
        Self::SpawnError {
            message: message.to_string(),
        }
    }
}

/// Process runner that answers from a script and records invocations.
///
/// Commands with no matching script entry exit 0 with empty output.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, ScriptedResponse>,
    invocations: Vec<CommandSpec>,
}

impl ScriptedRunner {
    /// Create a runner with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer any command containing the word `subcommand` with `response`.
    pub fn respond_to(&mut self, subcommand: &str, response: ScriptedResponse) {
        self.responses.insert(subcommand.to_string(), response);
    }

    /// Every command run so far, in order.
    pub fn invocations(&self) -> &[CommandSpec] {
        &self.invocations
    }

    /// Commands run so far that contain the word `subcommand`.
    pub fn invocations_of(&self, subcommand: &str) -> Vec<&CommandSpec> {
        self.invocations
            .iter()
            .filter(|spec| mentions(spec, subcommand))
            .collect()
    }

    fn response_for(&self, spec: &CommandSpec) -> Option<&ScriptedResponse> {
        self.responses
            .iter()
            .find(|(word, _)| mentions(spec, word))
            .map(|(_, response)| response)
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&mut self, spec: &CommandSpec) -> Result<CommandResult> {
        self.invocations.push(spec.clone());

        match self.response_for(spec).cloned() {
            None => Ok(CommandResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
            Some(ScriptedResponse::Exit { code: 0, stdout }) => Ok(CommandResult::success(
                stdout,
                String::new(),
                Duration::ZERO,
            )),
            Some(ScriptedResponse::Exit { code, stdout }) => Ok(CommandResult::failure(
                Some(code),
                stdout,
                String::new(),
                Duration::ZERO,
            )),
            Some(ScriptedResponse::SpawnError { message }) => Err(BootstrapError::SpawnFailed {
                command: spec.to_string(),
                message,
            }),
        }
    }
}

/// Whether any argument (or any word of a shell-wrapped argument) is `word`.
fn mentions(spec: &CommandSpec, word: &str) -> bool {
    spec.args.iter().any(|arg| arg.split_whitespace().any(|w| w == word))
}
