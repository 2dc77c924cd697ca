//! Process execution.

use crate::error::{BootstrapError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A process invocation: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program to spawn.
    pub program: String,

    /// Arguments, in order.
    pub args: Vec<String>,

    /// Working directory (None inherits the current one).
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Create a spec for a program with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run in the given directory.
    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    /// Full argument vector, program first.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

/// Result of executing a process.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Spawns processes and waits for them to finish.
///
/// `Err` means the process could not be run at all. A process that ran and
/// exited non-zero is an `Ok` result with `success == false`.
pub trait ProcessRunner {
    /// Run a command to completion, capturing its output.
    fn run(&mut self, spec: &CommandSpec) -> Result<CommandResult>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new runner.
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&mut self, spec: &CommandSpec) -> Result<CommandResult> {
        let start = Instant::now();

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);

        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        // output() drains both pipes and waits, so the streams are closed here
        let output = cmd.output().map_err(|e| BootstrapError::SpawnFailed {
            command: spec.to_string(),
            message: e.to_string(),
        })?;

        let duration = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(CommandResult::success(stdout, stderr, duration))
        } else {
            Ok(CommandResult::failure(
                output.status.code(),
                stdout,
                stderr,
                duration,
            ))
        }
    }
}
