//! Status command implementation.
//!
//! The `rpbp-provision status` command shows which artifacts exist and
//! which tools are missing, without compiling anything.

use std::io::Write;

use anyhow::Context;

use crate::cli::args::StatusArgs;
use crate::diagnostics::DiagnosticSink;
use crate::error::Result;
use crate::models::{builtin_model_specs, ArtifactState};
use crate::provision::{inspect, ProvisionConfig, StatusReport};
use crate::tools::{builtin_tool_groups, SearchPath};

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    config: ProvisionConfig,
    args: StatusArgs,
    search_path: SearchPath,
}

impl StatusCommand {
    /// Create a new status command that searches the process `PATH`.
    pub fn new(config: ProvisionConfig, args: StatusArgs) -> Self {
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
}

fn state_label(state: ArtifactState) -> &'static str {
    match state {
        ArtifactState::Present => "[ok]     ",
        ArtifactState::Empty => "[empty]  ",
        ArtifactState::Absent => "[missing]",
    }
}

fn write_text(report: &StatusReport, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Models ({}):", report.models_base.display())?;
    for a in &report.artifacts {
        writeln!(out, "  {} {}", state_label(a.state), a.spec.artifact.display())?;
    }

    writeln!(out)?;
    writeln!(out, "Tools:")?;
    for g in &report.tools {
        if g.is_satisfied() {
            writeln!(out, "  [ok]      {}", g.group)?;
        } else {
            writeln!(
                out,
                "  [missing] {} ({}; install {})",
                g.group,
                g.missing.join(" "),
                g.provider
            )?;
        }
    }
    Ok(())
}

impl Command for StatusCommand {
    fn execute(&self, _sink: &mut dyn DiagnosticSink, out: &mut dyn Write) -> Result<CommandResult> {
        let models_base = self.config.models_base_resolver();
        let report = inspect(
            models_base.as_ref(),
            &self.search_path,
            &builtin_model_specs(),
            &builtin_tool_groups(),
        )?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize status")?;
            writeln!(out, "{}", json)?;
        } else {
            write_text(&report, out)?;
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MockSink;
    use std::fs;
    use tempfile::TempDir;

    fn run(temp: &TempDir, json: bool) -> String {
        let config = ProvisionConfig {
            models_base: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        let cmd = StatusCommand::new(config, StatusArgs { json })
            .with_search_path(SearchPath::default());
        let mut sink = MockSink::new();
        let mut out: Vec<u8> = Vec::new();

        let result = cmd.execute(&mut sink, &mut out).unwrap();

        assert!(result.success);
        assert!(sink.records().is_empty());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_status_marks_present_and_missing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("periodic")).unwrap();
        fs::write(temp.path().join("periodic/start-high-low-low.pkl"), b"x").unwrap();

        let text = run(&temp, false);

        assert!(text.lines().any(|l| l.contains("[ok]") && l.contains("start-high-low-low.pkl")));
        assert!(text
            .lines()
            .any(|l| l.contains("[missing]") && l.contains("no-periodicity.pkl")));
        assert!(text.contains("[missing] samtools (samtools; install SAMtools)"));
    }

    #[test]
    fn json_status_is_parseable() {
        let temp = TempDir::new().unwrap();

        let text = run(&temp, true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["artifacts"].as_array().unwrap().len(), 6);
        assert_eq!(value["artifacts"][0]["state"], "absent");
        assert_eq!(value["tools"][3]["group"], "bedtools");
        assert_eq!(value["tools"][3]["missing"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn status_does_not_create_models_base() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("not-yet");
        let config = ProvisionConfig {
            models_base: Some(base.clone()),
            ..Default::default()
        };
        let cmd = StatusCommand::new(config, StatusArgs::default())
            .with_search_path(SearchPath::default());

        cmd.execute(&mut MockSink::new(), &mut Vec::<u8>::new())
            .unwrap();

        assert!(!base.exists());
    }
}
