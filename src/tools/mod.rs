//! Host readiness checks for required external programs.
//!
//! # Modules
//!
//! - [`path`] - Executable lookup on the search path
//! - [`registry`] - The pipeline's required tool groups
//! - [`checker`] - Grouped availability checks with aggregated warnings

pub mod checker;
pub mod path;
pub mod registry;

pub use checker::{GroupReport, ToolChecker, PIPELINE_NAME};
pub use path::{ExecutableResolver, SearchPath};
pub use registry::{builtin_tool_groups, ToolGroup};
