//! Provision command implementation.
//!
//! The `provision` command runs the full startup sequence against the real
//! package manager and prints the server definition it registered.

use std::io::Write;

use serde_json::json;

use crate::error::Result;
use crate::host::{ServerDefinition, ServerRegistry};
use crate::log::TracingLog;
use crate::provision::{ProvisionOutcome, Provisioned, Provisioner};
use crate::shell::SystemRunner;
use crate::ui::create_indicator;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The provision command implementation.
pub struct ProvisionCommand {
    strict: bool,
}

impl ProvisionCommand {
    /// Create a new provision command.
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

impl Command for ProvisionCommand {
    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<CommandResult> {
        let mut runner = SystemRunner::new();
        let mut log = TracingLog::new();
        let mut host = ServerRegistry::new();
        let mut progress = create_indicator(ctx.mode.shows_spinner());

        let provisioned = Provisioner::new(&ctx.config, &mut runner, &mut log)
            .ensure_server_available(&ctx.location, progress.as_mut(), &mut host);

        let Some(definition) = host.get(&ctx.config.server_id) else {
            return Err(anyhow::anyhow!(
                "server '{}' was not registered",
                ctx.config.server_id
            )
            .into());
        };

        report(ctx, &provisioned, definition, out)?;

        if self.strict && provisioned.outcome.is_failure() {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

/// Write the provisioning report as JSON or a themed summary.
pub fn report(
    ctx: &CommandContext,
    provisioned: &Provisioned,
    definition: &ServerDefinition,
    out: &mut dyn Write,
) -> Result<()> {
    let reason = match &provisioned.outcome {
        ProvisionOutcome::InstallFailed { reason } => Some(reason.as_str()),
        _ => None,
    };

    if ctx.mode.is_json() {
        let value = json!({
            "outcome": provisioned.outcome.label(),
            "reason": reason,
            "target": ctx.config.target().spec(),
            "location": ctx.location.to_string(),
            "server": definition,
        });
        let text = serde_json::to_string_pretty(&value).map_err(anyhow::Error::from)?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }

    let theme = &ctx.theme;
    let target = ctx.config.target();
    let headline = match &provisioned.outcome {
        ProvisionOutcome::UpToDate => theme.format_success(&format!("{} is up to date", target)),
        ProvisionOutcome::Installed => theme.format_success(&format!("Installed {}", target)),
        ProvisionOutcome::InstallFailed { reason } => {
            theme.format_error(&format!("Could not install {}: {}", target, reason))
        }
    };
    writeln!(out, "{}", headline)?;
    writeln!(out, "{}", theme.format_field("server", &definition.id))?;
    writeln!(out, "{}", theme.format_field("location", &ctx.location.to_string()))?;
    writeln!(
        out,
        "{}",
        theme.format_field(
            "command",
            &theme.command.apply_to(&provisioned.launch).to_string()
        )
    )?;
    writeln!(
        out,
        "{}",
        theme.format_field(
            "init timeout",
            &format!("{}s", definition.init_timeout.as_secs())
        )
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::LocationArgs;
    use crate::config::ProvisionConfig;
    use crate::ui::{OutputMode, Theme};
    use std::path::Path;
    use std::time::Duration;

    fn context(mode: OutputMode) -> CommandContext {
        CommandContext::resolve(
            ProvisionConfig::default(),
            &LocationArgs::default(),
            Path::new("/ide"),
            mode,
            Theme::plain(),
        )
        .unwrap()
    }

    fn provisioned(
        ctx: &CommandContext,
        outcome: ProvisionOutcome,
    ) -> (Provisioned, ServerDefinition) {
        let launch = crate::provision::LaunchCommand::for_location(
            &ctx.location,
            "node",
            &ctx.config.package,
            &ctx.config.entry_point,
            &ctx.config.global_bin,
            crate::shell::Platform::Posix,
        );
        let definition = ServerDefinition {
            id: "prisma".into(),
            command: launch.argv().to_vec(),
            init_timeout: Duration::from_secs(120),
        };
        (Provisioned { outcome, launch }, definition)
    }

    #[test]
    fn human_report_for_failed_install() {
        let ctx = context(OutputMode::Quiet);
        let (p, def) = provisioned(
            &ctx,
            ProvisionOutcome::InstallFailed {
                reason: "exit code 1".into(),
            },
        );
        let mut out = Vec::new();
        report(&ctx, &p, &def, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("✗ Could not install @prisma/language-server@3.0.28: exit code 1"));
        assert!(text.contains("server: prisma"));
        assert!(text.contains("init timeout: 120s"));
        assert!(text.contains("--stdio"));
    }

    #[test]
    fn json_report_has_outcome_and_server() {
        let ctx = context(OutputMode::Json);
        let (p, def) = provisioned(&ctx, ProvisionOutcome::Installed);
        let mut out = Vec::new();
        report(&ctx, &p, &def, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["outcome"], "installed");
        assert!(value["reason"].is_null());
        assert_eq!(value["server"]["id"], "prisma");
        assert_eq!(value["server"]["init_timeout_ms"], 120_000);
        assert_eq!(value["server"]["command"][0], "node");
    }
}
