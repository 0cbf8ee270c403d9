//! Provisioning settings gathered from the command line.

use std::path::PathBuf;

use crate::models::{
    DefaultModelsBase, ExternalCompiler, FixedModelsBase, ModelsBaseResolver, DEFAULT_COMPILER,
    DEFAULT_SOURCE_DIR,
};

/// Settings for one provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionConfig {
    /// Explicit artifact base directory; resolved from the environment when `None`.
    pub models_base: Option<PathBuf>,
    /// Directory holding model definitions.
    pub source_dir: PathBuf,
    /// Model compiler executable.
    pub compiler: String,
    /// Report what would be compiled without doing it.
    pub dry_run: bool,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            models_base: None,
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            compiler: DEFAULT_COMPILER.to_string(),
            dry_run: false,
        }
    }
}

impl ProvisionConfig {
    /// Resolver for the artifact base directory.
    pub fn models_base_resolver(&self) -> Box<dyn ModelsBaseResolver> {
        match &self.models_base {
            Some(dir) => Box::new(FixedModelsBase(dir.clone())),
            None => Box::new(DefaultModelsBase::new()),
        }
    }

    /// The configured model compiler.
    pub fn compiler(&self) -> ExternalCompiler {
        ExternalCompiler::new(&self.compiler)
    }
}
