//! Launch command construction.

use std::fmt;
use std::path::{Path, PathBuf};

use super::target::InstallLocation;
use crate::shell::Platform;

/// Flag selecting stdio transport on the language server.
pub const STDIO_FLAG: &str = "--stdio";

/// Path of `entry_point` inside the installed `package` under `install_dir`.
///
/// `@scope/name` becomes `node_modules/@scope/name`, then each segment of
/// `entry_point` is appended.
pub fn entry_point_path(install_dir: &Path, package: &str, entry_point: &str) -> PathBuf {
    let mut path = install_dir.join("node_modules");
    path.extend(package.split('/'));
    path.extend(entry_point.split('/').filter(|s| !s.is_empty()));
    path
}

/// The argument vector the host spawns to start the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    argv: Vec<String>,
    entry_point: Option<PathBuf>,
}

impl LaunchCommand {
    /// `[interpreter, <install_dir>/node_modules/<package>/<entry_point>, --stdio]`.
    pub fn local(interpreter: &str, install_dir: &Path, package: &str, entry_point: &str) -> Self {
        let entry = entry_point_path(install_dir, package, entry_point);
        Self {
            argv: vec![
                interpreter.to_string(),
                entry.to_string_lossy().into_owned(),
                STDIO_FLAG.to_string(),
            ],
            entry_point: Some(entry),
        }
    }

    /// `[global_bin, --stdio]`, resolved by the host through PATH.
    ///
    /// npm only writes `.cmd` shims for global bins on Windows, so there the
    /// command goes through `cmd /C`.
    pub fn global(global_bin: &str, platform: Platform) -> Self {
        let command_line = format!("{} {}", global_bin, STDIO_FLAG);
        let argv = match platform {
            Platform::Posix => vec![global_bin.to_string(), STDIO_FLAG.to_string()],
            Platform::Windows => vec!["cmd".to_string(), "/C".to_string(), command_line],
        };
        Self {
            argv,
            entry_point: None,
        }
    }

    /// Build the command for a location.
    pub fn for_location(
        location: &InstallLocation,
        interpreter: &str,
        package: &str,
        entry_point: &str,
        global_bin: &str,
        platform: Platform,
    ) -> Self {
        match location {
            InstallLocation::Local(dir) => Self::local(interpreter, dir, package, entry_point),
            InstallLocation::Global => Self::global(global_bin, platform),
        }
    }

    /// Full argument vector, program first.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Entry point script, when launched through an interpreter.
    pub fn entry_point(&self) -> Option<&Path> {
        self.entry_point.as_deref()
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv.join(" "))
    }
}
