//! Logging capability handed to the provisioner.
//!
//! The provisioner does not log through a global; it receives a
//! [`ProvisionLog`]. [`TracingLog`] forwards to `tracing`, and
//! [`RecordingLog`] captures entries for assertions.
//!
//! # Example
//!
//! ```
//! use prisma_ls_bootstrap::log::{LogLevel, ProvisionLog, RecordingLog};
//!
//! let mut log = RecordingLog::new();
//! log.error("npm list failed");
//! assert!(log.contains(LogLevel::Error, "list failed"));
//! ```

/// Severity of a provisioning log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

/// Sink for provisioning diagnostics.
pub trait ProvisionLog {
    /// Record a message at `level`.
    fn log(&mut self, level: LogLevel, msg: &str);

    /// Record a debug message.
    fn debug(&mut self, msg: &str) {
        self.log(LogLevel::Debug, msg);
    }

    /// Record an informational message.
    fn info(&mut self, msg: &str) {
        self.log(LogLevel::Info, msg);
    }

    /// Record an error.
    fn error(&mut self, msg: &str) {
        self.log(LogLevel::Error, msg);
    }
}

/// Forwards entries to the `tracing` subscriber installed by the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl TracingLog {
    pub fn new() -> Self {
        Self
    }
}

impl ProvisionLog for TracingLog {
    fn log(&mut self, level: LogLevel, msg: &str) {
        match level {
            LogLevel::Debug => tracing::debug!("{}", msg),
            LogLevel::Info => tracing::info!("{}", msg),
            LogLevel::Error => tracing::error!("{}", msg),
        }
    }
}

/// Captures every entry in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingLog {
    entries: Vec<(LogLevel, String)>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in the order they were logged.
    pub fn entries(&self) -> &[(LogLevel, String)] {
        &self.entries
    }

    /// Messages logged at `level`.
    pub fn messages(&self, level: LogLevel) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.as_str())
            .collect()
    }

    /// Whether some entry at `level` contains `needle`.
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.messages(level).iter().any(|msg| msg.contains(needle))
    }
}

impl ProvisionLog for RecordingLog {
    fn log(&mut self, level: LogLevel, msg: &str) {
        self.entries.push((level, msg.to_string()));
    }
}
