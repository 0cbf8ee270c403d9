//! List command implementation.
//!
//! The `rpbp-provision list` command prints the model catalog and the
//! required tool groups.

use std::io::Write;

use crate::diagnostics::DiagnosticSink;
use crate::error::Result;
use crate::models::{builtin_model_specs, ModelSpec};
use crate::tools::{builtin_tool_groups, ToolGroup};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    specs: Vec<ModelSpec>,
    groups: Vec<ToolGroup>,
}

impl ListCommand {
    /// List the built-in catalog and tool groups.
    pub fn new() -> Self {
        Self {
            specs: builtin_model_specs(),
            groups: builtin_tool_groups(),
        }
    }
}

impl Default for ListCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for ListCommand {
    fn execute(&self, _sink: &mut dyn DiagnosticSink, out: &mut dyn Write) -> Result<CommandResult> {
        writeln!(out, "Models:")?;
        let mut category = None;
        for spec in &self.specs {
            if category != Some(spec.category.as_str()) {
                writeln!(out, "  {}", spec.category)?;
                category = Some(spec.category.as_str());
            }
            writeln!(
                out,
                "    {} -> {}",
                spec.source.display(),
                spec.artifact.display()
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Tool groups:")?;
        for group in &self.groups {
            writeln!(
                out,
                "  {:<10} {} (from {})",
                group.name,
                group.programs.join(", "),
                group.provider
            )?;
        }

        Ok(CommandResult::success())
    }
}
