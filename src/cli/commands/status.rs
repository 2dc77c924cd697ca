//! Status command implementation.
//!
//! The `status` command runs only the presence check. It exits 0 when the
//! required version is installed and 1 otherwise.

use std::io::Write;

use serde_json::json;

use crate::error::Result;
use crate::log::TracingLog;
use crate::provision::{InstallStatus, Provisioner};
use crate::shell::SystemRunner;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The status command implementation.
pub struct StatusCommand;

impl Command for StatusCommand {
    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<CommandResult> {
        let mut runner = SystemRunner::new();
        let mut log = TracingLog::new();

        let status =
            Provisioner::new(&ctx.config, &mut runner, &mut log).check_installed(&ctx.location)?;

        render(ctx, &status, out)?;

        if status.needs_install() {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

fn render(ctx: &CommandContext, status: &InstallStatus, out: &mut dyn Write) -> Result<()> {
    if ctx.mode.is_json() {
        let installed = match status {
            InstallStatus::UpToDate => Some(ctx.config.version.as_str()),
            InstallStatus::Outdated { installed } => Some(installed.as_str()),
            InstallStatus::NotInstalled => None,
        };
        let value = json!({
            "status": status.to_string(),
            "installed": installed,
            "required": ctx.config.version,
            "package": ctx.config.package,
            "location": ctx.location.to_string(),
        });
        let text = serde_json::to_string_pretty(&value).map_err(anyhow::Error::from)?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }

    let theme = &ctx.theme;
    let target = ctx.config.target();
    let line = match status {
        InstallStatus::UpToDate => theme.format_success(&format!("{}: {}", target, status)),
        _ => theme.format_warning(&format!("{}: {}", target, status)),
    };
    writeln!(out, "{}", line)?;
    writeln!(out, "{}", theme.format_field("location", &ctx.location.to_string()))?;
    Ok(())
}
