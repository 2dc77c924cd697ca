//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Provision the Prisma language server and print its launch command.
#[derive(Debug, Parser)]
#[command(name = "prisma-ls-bootstrap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, global = true, env = "PRISMA_LS_BOOTSTRAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimal output (no spinner)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install the language server if needed and register its launch command
    Provision(ProvisionArgs),

    /// Check whether the required version is installed (never installs)
    Status(StatusArgs),

    /// Print the launch command without running the package manager
    LaunchCommand(LaunchArgs),
}

/// Where to check and install.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LocationArgs {
    /// Install directory (overrides <plugin-home>/<install_subdir>)
    #[arg(long, conflicts_with = "global")]
    pub install_dir: Option<PathBuf>,

    /// Use the package manager's global install instead of a directory
    #[arg(short, long)]
    pub global: bool,

    /// Plugin home directory
    #[arg(long, conflicts_with = "global")]
    pub plugin_home: Option<PathBuf>,
}

/// Arguments for the `provision` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProvisionArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero when the install failed
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `launch-command` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LaunchArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_provision_with_install_dir() {
        let cli = Cli::parse_from([
            "prisma-ls-bootstrap",
            "provision",
            "--install-dir",
            "/tmp/ls",
            "--strict",
        ]);
        match cli.command {
            Commands::Provision(args) => {
                assert_eq!(args.location.install_dir, Some(PathBuf::from("/tmp/ls")));
                assert!(args.strict);
                assert!(!args.json);
            }
            other => panic!("Expected Provision, got {:?}", other),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "prisma-ls-bootstrap",
            "status",
            "--global",
            "--debug",
            "--config",
            "bootstrap.yml",
        ]);
        assert!(cli.debug);
        assert_eq!(cli.config, Some(PathBuf::from("bootstrap.yml")));
        assert!(matches!(cli.command, Commands::Status(ref a) if a.location.global));
    }

    #[test]
    fn install_dir_conflicts_with_global() {
        let result = Cli::try_parse_from([
            "prisma-ls-bootstrap",
            "launch-command",
            "--global",
            "--install-dir",
            "/tmp/ls",
        ]);
        assert!(result.is_err());
    }
}
