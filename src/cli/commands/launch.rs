//! Launch-command command implementation.
//!
//! Prints the command the host would spawn, without running the package
//! manager. Useful for wiring the server into hosts that provision on
//! their own.

use std::io::Write;

use crate::error::Result;
use crate::provision::LaunchCommand;
use crate::shell::Platform;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The launch-command command implementation.
pub struct LaunchCommandCommand;

impl Command for LaunchCommandCommand {
    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<CommandResult> {
        let launch = LaunchCommand::for_location(
            &ctx.location,
            &ctx.config.interpreter,
            &ctx.config.package,
            &ctx.config.entry_point,
            &ctx.config.global_bin,
            Platform::detect(),
        );

        if ctx.mode.is_json() {
            let text = serde_json::to_string(launch.argv()).map_err(anyhow::Error::from)?;
            writeln!(out, "{}", text)?;
        } else {
            writeln!(out, "{}", launch)?;
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::LocationArgs;
    use crate::config::ProvisionConfig;
    use crate::ui::{OutputMode, Theme};
    use std::path::{Path, PathBuf};

    fn run(mode: OutputMode, location: LocationArgs) -> String {
        let ctx = CommandContext::resolve(
            ProvisionConfig::default(),
            &location,
            Path::new("/ide"),
            mode,
            Theme::plain(),
        )
        .unwrap();
        let mut out = Vec::new();
        let result = LaunchCommandCommand.execute(&ctx, &mut out).unwrap();
        assert!(result.success);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn json_is_argv_array() {
        let out = run(
            OutputMode::Json,
            LocationArgs {
                install_dir: Some(PathBuf::from("/srv/ls")),
                ..Default::default()
            },
        );
        let argv: Vec<String> = serde_json::from_str(&out).unwrap();

        assert_eq!(argv.len(), 3);
        assert_eq!(argv[0], "node");
        assert!(argv[1].ends_with("cli.js"));
        assert_eq!(argv[2], "--stdio");
    }

    #[test]
    fn plain_output_for_global() {
        let out = run(
            OutputMode::Normal,
            LocationArgs {
                global: true,
                ..Default::default()
            },
        );
        assert!(out.trim().ends_with("prisma-language-server --stdio"));
    }
}
