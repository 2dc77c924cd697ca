//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandContext`] with the resolved config and output settings
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, LocationArgs};
use crate::config::{finalize, load_config, ProvisionConfig};
use crate::error::Result;
use crate::provision::InstallLocation;
use crate::ui::{OutputMode, Theme};

use super::launch::LaunchCommandCommand;
use super::provision::ProvisionCommand;
use super::status::StatusCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing its report to `out`.
    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// The exit code as a process status byte; out-of-range codes become 1.
    pub fn process_exit_code(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Everything a command needs after flags and config are merged.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: ProvisionConfig,
    pub location: InstallLocation,
    pub mode: OutputMode,
    pub theme: Theme,
}

impl CommandContext {
    /// Merge location flags into `config`, validate it and resolve the location.
    pub fn resolve(
        mut config: ProvisionConfig,
        location: &LocationArgs,
        cwd: &Path,
        mode: OutputMode,
        theme: Theme,
    ) -> Result<Self> {
        if location.global {
            config.global = true;
        }
        if let Some(home) = &location.plugin_home {
            config.plugin_home = Some(home.clone());
        }
        let config = finalize(config)?;

        let location = match &location.install_dir {
            Some(dir) if dir.is_absolute() => InstallLocation::Local(dir.clone()),
            Some(dir) => InstallLocation::Local(cwd.join(dir)),
            None => config.location(cwd),
        };

        Ok(Self {
            config,
            location,
            mode,
            theme,
        })
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    cwd: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher resolving relative paths against `cwd`.
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd }
    }

    /// Load config, build the context and run the selected command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        let config = load_config(cli.config.as_deref())?;
        let theme = if cli.no_color {
            Theme::plain()
        } else {
            Theme::for_terminal()
        };

        let (location, json) = match &cli.command {
            Commands::Provision(args) => (&args.location, args.json),
            Commands::Status(args) => (&args.location, args.json),
            Commands::LaunchCommand(args) => (&args.location, args.json),
        };
        let mode = OutputMode::from_flags(json, cli.quiet);
        let ctx = CommandContext::resolve(config, location, &self.cwd, mode, theme)?;

        tracing::debug!("Resolved install location: {}", ctx.location);

        match &cli.command {
            Commands::Provision(args) => ProvisionCommand::new(args.strict).execute(&ctx, out),
            Commands::Status(_) => StatusCommand.execute(&ctx, out),
            Commands::LaunchCommand(_) => LaunchCommandCommand.execute(&ctx, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(location: LocationArgs) -> Result<CommandContext> {
        CommandContext::resolve(
            ProvisionConfig::default(),
            &location,
            Path::new("/ide"),
            OutputMode::Quiet,
            Theme::plain(),
        )
    }

    #[test]
    fn command_result_codes() {
        assert_eq!(CommandResult::success().exit_code, 0);
        let failed = CommandResult::failure(1);
        assert!(!failed.success);
        assert_eq!(failed.exit_code, 1);
    }

    #[test]
    fn process_exit_code_never_truncates() {
        assert_eq!(CommandResult::success().process_exit_code(), 0);
        assert_eq!(CommandResult::failure(1).process_exit_code(), 1);
        assert_eq!(CommandResult::failure(256).process_exit_code(), 1);
        assert_eq!(CommandResult::failure(-1).process_exit_code(), 1);
    }

    #[test]
    fn default_location_is_cwd_subdir() {
        let ctx = resolve(LocationArgs::default()).unwrap();
        assert_eq!(
            ctx.location,
            InstallLocation::Local(PathBuf::from("/ide/language_server"))
        );
    }

    #[test]
    fn install_dir_flag_wins() {
        let ctx = resolve(LocationArgs {
            install_dir: Some(PathBuf::from("servers/prisma")),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            ctx.location,
            InstallLocation::Local(PathBuf::from("/ide/servers/prisma"))
        );
    }

    #[test]
    fn global_flag_selects_global() {
        let ctx = resolve(LocationArgs {
            global: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(ctx.location, InstallLocation::Global);
        assert!(ctx.config.global);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = CommandContext::resolve(
            ProvisionConfig {
                version: "next".into(),
                ..Default::default()
            },
            &LocationArgs::default(),
            Path::new("/ide"),
            OutputMode::Normal,
            Theme::plain(),
        );
        assert!(result.is_err());
    }
}
