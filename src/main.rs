//! prisma-ls-bootstrap CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use prisma_ls_bootstrap::cli::{Cli, CommandDispatcher};
use prisma_ls_bootstrap::ui::Theme;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries the command's report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("prisma_ls_bootstrap=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("prisma_ls_bootstrap=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("prisma-ls-bootstrap starting with args: {:?}", cli);

    let cwd = std::env::current_dir().unwrap_or_default();
    let dispatcher = CommandDispatcher::new(cwd);
    let mut stdout = std::io::stdout().lock();

    match dispatcher.dispatch(&cli, &mut stdout) {
        Ok(result) => ExitCode::from(result.process_exit_code()),
        Err(e) => {
            let theme = if cli.no_color {
                Theme::plain()
            } else {
                Theme::for_terminal()
            };
            eprintln!("{}", theme.format_error(&format!("Error: {}", e)));
            ExitCode::from(1)
        }
    }
}
