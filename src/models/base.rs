//! Resolution of the directory compiled models are cached in.
//!
//! The default location follows the XDG base directory convention:
//! `$XDG_DATA_HOME/rpbp/models`, falling back to
//! `$HOME/.local/share/rpbp/models`. On Windows, `%LOCALAPPDATA%` is used.

use std::path::PathBuf;

use crate::error::{ProvisionError, Result};

/// Supplies the base directory for compiled model artifacts.
pub trait ModelsBaseResolver {
    /// Resolve the base directory. Called once per provisioning run.
    fn models_base(&self) -> Result<PathBuf>;
}

/// A base directory chosen up front (e.g., from `--models-base`).
///
/// A relative path is anchored at the working directory when resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedModelsBase(pub PathBuf);

impl ModelsBaseResolver for FixedModelsBase {
    fn models_base(&self) -> Result<PathBuf> {
        std::path::absolute(&self.0).map_err(|e| ProvisionError::ModelsBaseUnresolved {
            message: format!("{}: {}", self.0.display(), e),
        })
    }
}

/// Per-user data directory default.
pub struct DefaultModelsBase<F = fn(&str) -> Option<String>>
where
    F: Fn(&str) -> Option<String>,
{
    env_fn: F,
}

impl DefaultModelsBase {
    /// Read the process environment.
    pub fn new() -> Self {
        Self {
            env_fn: |key| std::env::var(key).ok(),
        }
    }
}

impl Default for DefaultModelsBase {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> DefaultModelsBase<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Resolve against a custom environment lookup (used by tests).
    pub fn with_env(env_fn: F) -> Self {
        Self { env_fn }
    }

    fn var(&self, key: &str) -> Option<PathBuf> {
        (self.env_fn)(key)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}

impl<F> ModelsBaseResolver for DefaultModelsBase<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn models_base(&self) -> Result<PathBuf> {
        let data_dir = if cfg!(windows) {
            self.var("LOCALAPPDATA").filter(|p| p.is_absolute())
        } else {
            self.var("XDG_DATA_HOME")
                .filter(|p| p.is_absolute())
                .or_else(|| {
                    self.var("HOME")
                        .filter(|p| p.is_absolute())
                        .map(|h| h.join(".local").join("share"))
                })
        };

        data_dir
            .map(|d| d.join("rpbp").join("models"))
            .ok_or_else(|| ProvisionError::ModelsBaseUnresolved {
                message: "no per-user data directory is configured; pass --models-base"
                    .to_string(),
            })
    }
}
