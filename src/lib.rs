//! rpbp-provision - Post-installation provisioning for the Rp-Bp pipeline.
//!
//! Compiles the pipeline's statistical model definitions into cached
//! artifacts under a per-user models directory, then checks the host for
//! the external programs the pipeline shells out to.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`diagnostics`] - Leveled operator messages and their sinks
//! - [`error`] - Error types and result aliases
//! - [`models`] - Model catalog, artifact location, and compilation
//! - [`provision`] - The provisioning pass tying models and tools together
//! - [`shell`] - External command execution
//! - [`tools`] - Required tool groups and executable lookup
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use rpbp_provision::models::builtin_model_specs;
//!
//! let specs = builtin_model_specs();
//! assert_eq!(specs.len(), 6);
//! assert_eq!(
//!     specs[0].artifact_path(Path::new("/models")),
//!     Path::new("/models/nonperiodic/no-periodicity.pkl")
//! );
//! ```
//!
//! For full provisioning runs, see the integration tests.

pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod provision;
pub mod shell;
pub mod tools;

pub use error::{ProvisionError, Result};
