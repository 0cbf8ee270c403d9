//! Diagnostic output for provisioning runs.
//!
//! Everything the operator sees about a run (skip notices, echoed
//! compiler commands, missing-tool warnings) flows through a
//! [`DiagnosticSink`]. Sinks are plain values constructed with their
//! configuration; nothing here touches process-global logging state.
//!
//! - [`DiagnosticSink`] trait, so the core can be tested with [`MockSink`]
//! - [`LogSink`] writes `LEVEL    : message` lines to any writer
//!
//! # Example
//!
//! ```
//! use rpbp_provision::diagnostics::{DiagnosticSink, Level, MockSink};
//!
//! let mut sink = MockSink::new();
//! sink.info("A model already exists at: /models/a.pkl. Skipping.");
//! sink.warning("Missing programs: samtools");
//!
//! assert_eq!(sink.infos().len(), 1);
//! assert!(sink.has_warning("samtools"));
//! assert_eq!(sink.records()[1].0, Level::Warning);
//! ```

pub mod log;
pub mod mock;

pub use self::log::{LogConfig, LogSink};
pub use mock::MockSink;

use std::fmt;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Level {
    /// Routine progress: skips, echoed commands.
    #[default]
    Info,
    /// Something the operator should act on.
    Warning,
    /// The run could not continue.
    Error,
}

impl Level {
    /// Upper-case label used as the line prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate to pad so width specifiers like {:<8} apply.
        f.pad(self.as_str())
    }
}

/// Append-only channel for operator-facing messages.
///
/// One call is one logical message.
pub trait DiagnosticSink {
    /// Record a message at the given level.
    fn log(&mut self, level: Level, msg: &str);

    /// Record an informational message.
    fn info(&mut self, msg: &str) {
        self.log(Level::Info, msg);
    }

    /// Record a warning.
    fn warning(&mut self, msg: &str) {
        self.log(Level::Warning, msg);
    }

    /// Record a fatal error.
    fn error(&mut self, msg: &str) {
        self.log(Level::Error, msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_ordering_puts_warning_above_info() {
        assert!(Level::Warning > Level::Info);
        assert!(Level::Error > Level::Warning);
    }

    #[test]
    fn level_display_respects_padding() {
        assert_eq!(format!("{:<8}|", Level::Info), "INFO    |");
        assert_eq!(format!("{:<8}|", Level::Warning), "WARNING |");
    }

    #[test]
    fn default_methods_route_through_log() {
        let mut sink = MockSink::new();
        sink.info("one");
        sink.warning("two");
        assert_eq!(
            sink.records(),
            &[
                (Level::Info, "one".to_string()),
                (Level::Warning, "two".to_string())
            ]
        );
    }
}
