//! Executable lookup on the search path.
//!
//! Resolution walks `PATH` entries in order and returns the first match
//! that is a regular file with an execute bit. This does NOT shell out
//! to `which`, whose behavior varies across systems and is sometimes a
//! shell builtin with inconsistent error handling.

use std::path::{Path, PathBuf};

/// Maps a bare program name to an executable location.
pub trait ExecutableResolver {
    /// Resolve `program`, or `None` if it cannot be found.
    fn resolve(&self, program: &str) -> Option<PathBuf>;
}

/// An ordered list of directories searched for executables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    /// Search the given directories, in order.
    pub fn new(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }

    /// Search the directories on the process `PATH`.
    pub fn from_env() -> Self {
        Self::new(parse_system_path())
    }
}

impl ExecutableResolver for SearchPath {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        resolve_tool_path(program, &self.entries)
    }
}

/// Parse `PATH` into its directory entries.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Names containing a path separator are never searched for.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    if tool.is_empty() || tool.contains('/') || tool.contains(std::path::MAIN_SEPARATOR) {
        return None;
    }
    for dir in path_entries {
        for candidate in candidates(dir, tool) {
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(not(windows))]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    vec![dir.join(tool)]
}

#[cfg(windows)]
fn candidates(dir: &Path, tool: &str) -> Vec<PathBuf> {
    let pathext = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    let mut out = vec![dir.join(tool)];
    out.extend(
        pathext
            .split(';')
            .filter(|ext| !ext.is_empty())
            .map(|ext| dir.join(format!("{}{}", tool, ext))),
    );
    out
}
