//! Model catalog: which definitions compile to which artifacts.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Built-in models as (category, name). Each compiles
/// `<category>/<name>.stan` to `<category>/<name>.pkl`.
const BUILTIN_MODELS: &[(&str, &str)] = &[
    ("nonperiodic", "no-periodicity"),
    ("nonperiodic", "start-high-high-low"),
    ("nonperiodic", "start-high-low-high"),
    ("periodic", "start-high-low-low"),
    ("untranslated", "gaussian-naive-bayes"),
    ("translated", "periodic-gaussian-mixture"),
];

/// Extension of model definition files.
pub const DEFINITION_EXTENSION: &str = "stan";

/// Extension of compiled artifacts.
pub const ARTIFACT_EXTENSION: &str = "pkl";

/// Default directory holding model definitions, relative to the working directory.
pub const DEFAULT_SOURCE_DIR: &str = "rpbp_models";

/// A model definition paired with the artifact it compiles to.
///
/// Both paths are relative: `source` to the definition directory,
/// `artifact` to the models base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSpec {
    /// Grouping label (e.g., "periodic").
    pub category: String,
    /// Definition path relative to the source directory.
    pub source: PathBuf,
    /// Artifact path relative to the models base.
    pub artifact: PathBuf,
}

impl ModelSpec {
    /// Pair a definition with an artifact name.
    pub fn new(
        category: impl Into<String>,
        source: impl Into<PathBuf>,
        artifact: impl Into<PathBuf>,
    ) -> Self {
        Self {
            category: category.into(),
            source: source.into(),
            artifact: artifact.into(),
        }
    }

    /// Conventional spec for `<category>/<name>`.
    pub fn conventional(category: &str, name: &str) -> Self {
        let stem = Path::new(category).join(name);
        Self::new(
            category,
            stem.with_extension(DEFINITION_EXTENSION),
            stem.with_extension(ARTIFACT_EXTENSION),
        )
    }

    /// Absolute location of the artifact under `models_base`.
    pub fn artifact_path(&self, models_base: &Path) -> PathBuf {
        models_base.join(&self.artifact)
    }

    /// Location of the definition under `source_dir`.
    pub fn source_path(&self, source_dir: &Path) -> PathBuf {
        source_dir.join(&self.source)
    }
}

/// The pipeline's models, in catalog order.
pub fn builtin_model_specs() -> Vec<ModelSpec> {
    BUILTIN_MODELS
        .iter()
        .map(|(category, name)| ModelSpec::conventional(category, name))
        .collect()
}
