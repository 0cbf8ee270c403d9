//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands, ProvisionArgs};
use crate::diagnostics::DiagnosticSink;
use crate::error::Result;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// Diagnostics go to `sink`; regular command output (listings,
    /// JSON) is written to `out`.
    fn execute(&self, sink: &mut dyn DiagnosticSink, out: &mut dyn Write) -> Result<CommandResult>;
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
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    pub fn dispatch(
        &self,
        cli: &Cli,
        sink: &mut dyn DiagnosticSink,
        out: &mut dyn Write,
    ) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Provision(args)) => {
                let cmd = super::provision::ProvisionCommand::new(
                    cli.provision_config(args.dry_run),
                    args.clone(),
                );
                cmd.execute(sink, out)
            }
            Some(Commands::Status(args)) => {
                let cmd = super::status::StatusCommand::new(cli.provision_config(false), args.clone());
                cmd.execute(sink, out)
            }
            Some(Commands::List) => super::list::ListCommand::new().execute(sink, out),
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(sink, out)
            }
            None => {
                // Default to a plain provisioning pass
                let args = ProvisionArgs::default();
                let cmd = super::provision::ProvisionCommand::new(cli.provision_config(false), args);
                cmd.execute(sink, out)
            }
        }
    }
}
