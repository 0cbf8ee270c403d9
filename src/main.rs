//! rpbp-provision CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use rpbp_provision::cli::{Cli, CommandDispatcher};
use rpbp_provision::diagnostics::{DiagnosticSink, Level, LogConfig, LogSink};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for internal debug logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("rpbp_provision=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rpbp_provision=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("rpbp-provision starting with args: {:?}", cli);

    let config = LogConfig {
        level: if cli.quiet { Level::Warning } else { Level::Info },
        color: !cli.no_color && console::colors_enabled_stderr(),
    };
    let mut sink = LogSink::stderr(config);
    let mut stdout = std::io::stdout();

    match CommandDispatcher::new().dispatch(&cli, &mut sink, &mut stdout) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            sink.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
