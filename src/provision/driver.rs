//! The post-installation provisioning pass.
//!
//! Resolves the models base once, compiles every catalog model, then
//! checks each required tool group. The two phases are independent and
//! neither rolls anything back: a pass interrupted halfway leaves the
//! artifacts it finished in place for the next run to skip.

use std::path::PathBuf;

use serde::Serialize;

use crate::diagnostics::DiagnosticSink;
use crate::error::Result;
use crate::models::{
    builtin_model_specs, ArtifactBuilder, ArtifactState, CompileReport, ModelCompiler, ModelSpec,
    ModelsBaseResolver, DEFAULT_SOURCE_DIR,
};
use crate::tools::{builtin_tool_groups, ExecutableResolver, GroupReport, ToolChecker, ToolGroup};

/// Everything a provisioning pass did.
#[derive(Debug, Clone)]
pub struct ProvisionReport {
    /// Base directory artifacts were written under.
    pub models_base: PathBuf,
    /// Per-model outcomes.
    pub compile: CompileReport,
    /// Per-group tool availability.
    pub tools: Vec<GroupReport>,
}

impl ProvisionReport {
    /// No compilation failed and every tool was found.
    pub fn is_clean(&self) -> bool {
        self.compile.is_clean() && self.tools.iter().all(GroupReport::is_satisfied)
    }
}

/// State of one catalog artifact, for `status`.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactStatus {
    #[serde(flatten)]
    pub spec: ModelSpec,
    pub path: PathBuf,
    pub state: ArtifactState,
}

/// Side-effect-free snapshot of provisioning state.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub models_base: PathBuf,
    pub artifacts: Vec<ArtifactStatus>,
    pub tools: Vec<GroupReport>,
}

/// Sequences model compilation and tool checks.
pub struct Provisioner<'a> {
    models_base: &'a dyn ModelsBaseResolver,
    builder: &'a dyn ArtifactBuilder,
    resolver: &'a dyn ExecutableResolver,
    specs: Vec<ModelSpec>,
    groups: Vec<ToolGroup>,
    source_dir: PathBuf,
    dry_run: bool,
}

impl<'a> Provisioner<'a> {
    /// Provisioner over the built-in model catalog and tool groups.
    pub fn new(
        models_base: &'a dyn ModelsBaseResolver,
        builder: &'a dyn ArtifactBuilder,
        resolver: &'a dyn ExecutableResolver,
    ) -> Self {
        Self {
            models_base,
            builder,
            resolver,
            specs: builtin_model_specs(),
            groups: builtin_tool_groups(),
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            dry_run: false,
        }
    }

    /// Replace the model catalog.
    pub fn with_specs(mut self, specs: Vec<ModelSpec>) -> Self {
        self.specs = specs;
        self
    }

    /// Replace the tool groups.
    pub fn with_groups(mut self, groups: Vec<ToolGroup>) -> Self {
        self.groups = groups;
        self
    }

    /// Read definitions from `dir`.
    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    /// Plan compilation without running it. Tool checks still run.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the provisioning pass.
    ///
    /// Fails only if the models base cannot be resolved; every other
    /// problem is reported on `sink` and recorded in the report.
    pub fn run(&self, sink: &mut dyn DiagnosticSink) -> Result<ProvisionReport> {
        let models_base = self.models_base.models_base()?;
        tracing::debug!("Models base: {}", models_base.display());

        let compile = ModelCompiler::new(self.builder, &self.source_dir)
            .dry_run(self.dry_run)
            .compile_all(&self.specs, &models_base, sink);

        let tools = ToolChecker::new(self.resolver).check_all(&self.groups, sink);

        Ok(ProvisionReport {
            models_base,
            compile,
            tools,
        })
    }
}

/// Inspect artifacts and tools without compiling or emitting diagnostics.
///
/// Nothing is created: a models base that does not exist yet reports
/// every artifact as absent.
pub fn inspect(
    models_base: &dyn ModelsBaseResolver,
    resolver: &dyn ExecutableResolver,
    specs: &[ModelSpec],
    groups: &[ToolGroup],
) -> Result<StatusReport> {
    let models_base = models_base.models_base()?;

    let artifacts = specs
        .iter()
        .map(|spec| {
            let path = spec.artifact_path(&models_base);
            ArtifactStatus {
                spec: spec.clone(),
                state: ArtifactState::of(&path),
                path,
            }
        })
        .collect();

    let checker = ToolChecker::new(resolver);
    let tools = groups.iter().map(|g| checker.inspect_group(g)).collect();

    Ok(StatusReport {
        models_base,
        artifacts,
        tools,
    })
}
