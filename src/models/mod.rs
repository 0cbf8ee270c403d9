//! Statistical model artifacts.
//!
//! # Modules
//!
//! - [`catalog`] - Which definitions compile to which artifacts
//! - [`base`] - Where compiled artifacts are cached
//! - [`compiler`] - Idempotent, sequential compilation

pub mod base;
pub mod catalog;
pub mod compiler;

pub use base::{DefaultModelsBase, FixedModelsBase, ModelsBaseResolver};
pub use catalog::{builtin_model_specs, ModelSpec, DEFAULT_SOURCE_DIR};
pub use compiler::{
    ArtifactBuilder, ArtifactState, CompileEntry, CompileOutcome, CompileReport,
    ExternalCompiler, ModelCompiler, DEFAULT_COMPILER,
};
