//! Capturing sink for tests.
//!
//! `MockSink` implements [`DiagnosticSink`] and keeps every message, in
//! order, with its level so tests can assert on exactly what an operator
//! would have seen.

use super::{DiagnosticSink, Level};

/// Sink that records messages instead of printing them.
#[derive(Debug, Default)]
pub struct MockSink {
    records: Vec<(Level, String)>,
}

impl MockSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured messages in emission order.
    pub fn records(&self) -> &[(Level, String)] {
        &self.records
    }

    /// Captured informational messages.
    pub fn infos(&self) -> Vec<&str> {
        self.at_level(Level::Info)
    }

    /// Captured warnings.
    pub fn warnings(&self) -> Vec<&str> {
        self.at_level(Level::Warning)
    }

    /// Check if any info message contains `needle`.
    pub fn has_info(&self, needle: &str) -> bool {
        self.infos().iter().any(|m| m.contains(needle))
    }

    /// Check if any warning contains `needle`.
    pub fn has_warning(&self, needle: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(needle))
    }

    /// Drop everything captured so far.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn at_level(&self, level: Level) -> Vec<&str> {
        self.records
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl DiagnosticSink for MockSink {
    fn log(&mut self, level: Level, msg: &str) {
        self.records.push((level, msg.to_string()));
    }
}
