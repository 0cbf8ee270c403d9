//! Provision command implementation.
//!
//! The `rpbp-provision provision` command compiles missing model
//! artifacts and checks the host for required tools.

use std::io::Write;

use crate::cli::args::ProvisionArgs;
use crate::diagnostics::DiagnosticSink;
use crate::error::Result;
use crate::provision::{ProvisionConfig, ProvisionReport, Provisioner};
use crate::tools::SearchPath;

use super::dispatcher::{Command, CommandResult};

/// The provision command implementation.
pub struct ProvisionCommand {
    config: ProvisionConfig,
    args: ProvisionArgs,
    search_path: SearchPath,
}

impl ProvisionCommand {
    /// Create a new provision command that searches the process `PATH`.
    pub fn new(config: ProvisionConfig, args: ProvisionArgs) -> Self {
        Self {
            config,
            args,
            search_path: SearchPath::from_env(),
        }
    }

    /// Look tools up in `search_path` instead of `PATH`.
    pub fn with_search_path(mut self, search_path: SearchPath) -> Self {
        self.search_path = search_path;
        self
    }

    /// Get the run configuration.
    pub fn config(&self) -> &ProvisionConfig {
        &self.config
    }
}

/// One-line summary of a finished pass.
fn summarize(report: &ProvisionReport, dry_run: bool) -> String {
    let compile = &report.compile;
    let satisfied = report.tools.iter().filter(|g| g.is_satisfied()).count();
    let models = if dry_run {
        format!(
            "{} to compile, {} already present",
            compile.planned(),
            compile.skipped()
        )
    } else {
        format!(
            "{} compiled, {} already present, {} failed",
            compile.built(),
            compile.skipped(),
            compile.failures().count()
        )
    };
    format!(
        "Models: {}. Tools: {} of {} groups available.",
        models,
        satisfied,
        report.tools.len()
    )
}

impl Command for ProvisionCommand {
    fn execute(&self, sink: &mut dyn DiagnosticSink, _out: &mut dyn Write) -> Result<CommandResult> {
        let models_base = self.config.models_base_resolver();
        let compiler = self.config.compiler();

        let provisioner = Provisioner::new(models_base.as_ref(), &compiler, &self.search_path)
            .source_dir(&self.config.source_dir)
            .dry_run(self.config.dry_run);

        let report = provisioner.run(sink)?;
        sink.info(&summarize(&report, self.config.dry_run));

        if self.args.strict && !report.is_clean() {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}
