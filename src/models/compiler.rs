//! Idempotent model compilation.
//!
//! Each [`ModelSpec`] is materialized at most once: an artifact already on
//! disk is authoritative and skipped. Missing artifacts get their parent
//! directory chain created and the external compiler invoked, one at a
//! time. Compiler failures are reported and recorded but never abort the
//! pass, and whatever a failed compile wrote is removed, so an interrupted
//! or partially failed run can simply be repeated.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::diagnostics::DiagnosticSink;
use crate::error::{ProvisionError, Result};
use crate::models::catalog::ModelSpec;
use crate::shell::{execute, CommandLine, CommandOptions, CommandResult};

/// Default model compiler executable.
pub const DEFAULT_COMPILER: &str = "pickle-stan";

/// Turns a model definition into a serialized artifact.
pub trait ArtifactBuilder {
    /// Command line that `build` runs, for echoing before execution.
    fn command_line(&self, source: &Path, artifact: &Path) -> CommandLine;

    /// Compile `source` into `artifact`, blocking until done.
    fn build(&self, source: &Path, artifact: &Path) -> Result<CommandResult>;
}

/// Runs an external compiler as `<program> <source> <artifact>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCompiler {
    program: String,
}

impl ExternalCompiler {
    /// Compiler invoked as `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The compiler program.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ExternalCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_COMPILER)
    }
}

impl ArtifactBuilder for ExternalCompiler {
    fn command_line(&self, source: &Path, artifact: &Path) -> CommandLine {
        CommandLine::new(&self.program)
            .arg(source.as_os_str())
            .arg(artifact.as_os_str())
    }

    fn build(&self, source: &Path, artifact: &Path) -> Result<CommandResult> {
        // Compiler progress goes straight to the terminal; stderr is kept
        // for the failure report.
        let options = CommandOptions {
            capture_stdout: false,
            capture_stderr: true,
        };
        execute(&self.command_line(source, artifact), &options)
    }
}

/// What is currently at an artifact path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactState {
    /// Nothing there; must be built.
    Absent,
    /// A zero-byte file, left by an interrupted or failed compile.
    Empty,
    /// A non-empty file or other entry; treated as built.
    Present,
}

impl ArtifactState {
    /// Inspect `path`.
    pub fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Err(_) => ArtifactState::Absent,
            Ok(meta) if meta.is_file() && meta.len() == 0 => ArtifactState::Empty,
            Ok(_) => ArtifactState::Present,
        }
    }

    /// Whether compilation is needed.
    pub fn needs_build(&self) -> bool {
        !matches!(self, ArtifactState::Present)
    }
}

/// Result of processing one spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    /// Artifact already existed.
    Skipped,
    /// Compiler ran and the artifact now exists.
    Built,
    /// Dry run: compilation would have been attempted.
    Planned,
    /// Compilation was attempted and did not produce an artifact.
    Failed { reason: String },
}

/// One processed spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileEntry {
    /// The spec.
    pub spec: ModelSpec,
    /// Absolute artifact location.
    pub artifact: PathBuf,
    /// What happened.
    pub outcome: CompileOutcome,
}

/// Outcomes for a whole `compile_all` pass, in spec order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileReport {
    pub entries: Vec<CompileEntry>,
}

impl CompileReport {
    /// Number of specs with the given outcome kind.
    fn count(&self, pred: impl Fn(&CompileOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }

    /// Artifacts that were already present.
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, CompileOutcome::Skipped))
    }

    /// Artifacts compiled in this pass.
    pub fn built(&self) -> usize {
        self.count(|o| matches!(o, CompileOutcome::Built))
    }

    /// Artifacts a dry run would compile.
    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, CompileOutcome::Planned))
    }

    /// Entries whose compilation failed.
    pub fn failures(&self) -> impl Iterator<Item = &CompileEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, CompileOutcome::Failed { .. }))
    }

    /// Whether nothing failed.
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Compiles model definitions into cached artifacts.
pub struct ModelCompiler<'a> {
    builder: &'a dyn ArtifactBuilder,
    source_dir: PathBuf,
    dry_run: bool,
}

impl<'a> ModelCompiler<'a> {
    /// Compiler reading definitions from `source_dir`.
    pub fn new(builder: &'a dyn ArtifactBuilder, source_dir: impl Into<PathBuf>) -> Self {
        Self {
            builder,
            source_dir: source_dir.into(),
            dry_run: false,
        }
    }

    /// Report what would be built without touching the filesystem.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Materialize every spec's artifact under `models_base`, in order.
    pub fn compile_all(
        &self,
        specs: &[ModelSpec],
        models_base: &Path,
        sink: &mut dyn DiagnosticSink,
    ) -> CompileReport {
        let entries = specs
            .iter()
            .map(|spec| self.compile_one(spec, models_base, sink))
            .collect();
        CompileReport { entries }
    }

    /// Materialize a single spec's artifact.
    pub fn compile_one(
        &self,
        spec: &ModelSpec,
        models_base: &Path,
        sink: &mut dyn DiagnosticSink,
    ) -> CompileEntry {
        let artifact = spec.artifact_path(models_base);
        let source = spec.source_path(&self.source_dir);
        let outcome = self.materialize(&source, &artifact, sink);
        CompileEntry {
            spec: spec.clone(),
            artifact,
            outcome,
        }
    }

    fn materialize(
        &self,
        source: &Path,
        artifact: &Path,
        sink: &mut dyn DiagnosticSink,
    ) -> CompileOutcome {
        match ArtifactState::of(artifact) {
            ArtifactState::Present => {
                sink.info(&format!(
                    "A model already exists at: {}. Skipping.",
                    artifact.display()
                ));
                return CompileOutcome::Skipped;
            }
            ArtifactState::Empty => {
                let action = if self.dry_run { "Would rebuild" } else { "Rebuilding" };
                sink.warning(&format!(
                    "Empty model artifact at: {}. {}.",
                    artifact.display(),
                    action
                ));
            }
            ArtifactState::Absent => {}
        }

        let command = self.builder.command_line(source, artifact);

        if self.dry_run {
            sink.info(&format!("Would run: {}", command.display()));
            return CompileOutcome::Planned;
        }

        let outcome = match self.build(source, artifact, &command, sink) {
            Ok(()) => CompileOutcome::Built,
            Err(reason) => CompileOutcome::Failed { reason },
        };

        if let CompileOutcome::Failed { reason } = &outcome {
            sink.warning(&format!(
                "Model compilation failed for {}: {}",
                source.display(),
                reason
            ));
        }
        outcome
    }

    fn build(
        &self,
        source: &Path,
        artifact: &Path,
        command: &CommandLine,
        sink: &mut dyn DiagnosticSink,
    ) -> std::result::Result<(), String> {
        ensure_parent_dir(artifact).map_err(|e| e.to_string())?;

        sink.info(&command.display());
        let result = self
            .builder
            .build(source, artifact)
            .map_err(|e| e.to_string())?;
        tracing::debug!(
            "Compiler exited with {:?} after {:?}",
            result.exit_code,
            result.duration
        );

        if !result.success {
            let status = match result.exit_code {
                Some(code) => format!("exit code {}", code),
                None => "terminated by signal".to_string(),
            };
            let mut reason = match result.stderr_tail() {
                Some(tail) => format!("{}: {}", status, tail),
                None => status,
            };
            // A partial write must not pass for a finished artifact next run.
            if let Err(e) = discard_partial(artifact) {
                reason.push_str(&format!(
                    "; could not remove partial artifact {}: {}",
                    artifact.display(),
                    e
                ));
            }
            return Err(reason);
        }

        if ArtifactState::of(artifact).needs_build() {
            return Err("compiler exited successfully but wrote no artifact".to_string());
        }

        Ok(())
    }
}

/// Remove whatever a failed compile left at `artifact`.
fn discard_partial(artifact: &Path) -> std::io::Result<()> {
    match fs::remove_file(artifact) {
        Ok(()) => {
            tracing::debug!("Removed partial artifact {}", artifact.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Create the full directory chain above `artifact` if missing.
fn ensure_parent_dir(artifact: &Path) -> Result<()> {
    let Some(parent) = artifact.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.is_dir() {
        return Ok(());
    }
    tracing::debug!("Creating directory {}", parent.display());
    fs::create_dir_all(parent).map_err(|source| ProvisionError::DirectoryCreation {
        path: parent.to_path_buf(),
        source,
    })
}
