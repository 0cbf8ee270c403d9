//! Line-oriented log sink.

use std::io::Write;

use console::Style;

use super::{DiagnosticSink, Level};

/// Settings a [`LogSink`] is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogConfig {
    /// Messages below this level are dropped.
    pub level: Level,
    /// Style the level label.
    pub color: bool,
}

impl LogConfig {
    /// Whether a message at `level` passes the filter.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }
}

/// Writes `LEVEL    : message` lines to a writer.
pub struct LogSink<W: Write> {
    config: LogConfig,
    out: W,
    info_style: Style,
    warning_style: Style,
    error_style: Style,
}

impl LogSink<std::io::Stderr> {
    /// Sink writing to standard error.
    pub fn stderr(config: LogConfig) -> Self {
        Self::new(config, std::io::stderr())
    }
}

impl<W: Write> LogSink<W> {
    /// Create a sink over an arbitrary writer.
    pub fn new(config: LogConfig, out: W) -> Self {
        let (info_style, warning_style, error_style) = if config.color {
            (
                Style::new().magenta().force_styling(true),
                Style::new().color256(208).force_styling(true),
                Style::new().red().bold().force_styling(true),
            )
        } else {
            (Style::new(), Style::new(), Style::new())
        };
        Self {
            config,
            out,
            info_style,
            warning_style,
            error_style,
        }
    }

    /// Consume the sink and hand back its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn format_line(&self, level: Level, msg: &str) -> String {
        let label = format!("{:<8}", level);
        let label = match level {
            Level::Info => self.info_style.apply_to(label),
            Level::Warning => self.warning_style.apply_to(label),
            Level::Error => self.error_style.apply_to(label),
        };
        format!("{} : {}", label, msg)
    }
}

impl<W: Write> DiagnosticSink for LogSink<W> {
    fn log(&mut self, level: Level, msg: &str) {
        if !self.config.enabled(level) {
            return;
        }
        let line = self.format_line(level, msg);
        // A closed stderr must not abort provisioning.
        let _ = writeln!(self.out, "{}", line);
        let _ = self.out.flush();
    }
}
