//! Match transcript logging.
//!
//! `MatchLogger` writes leveled, categorized lines to stdout, to an in-memory
//! buffer, or both. Memory capture lets tests and training loops inspect what
//! happened in a match without scraping stdout.

use serde::{Deserialize, Serialize};

/// How much the logger says. Ordered: a message is emitted when its level is
/// at or below the configured verbosity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VerbosityLevel {
    /// Nothing at all.
    #[default]
    Silent,
    /// Eliminations and the final result.
    Minimal,
    /// Plus registrations and pairings.
    Normal,
    /// Plus every fight and hero power.
    Verbose,
}

/// Output destination for log messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputMode {
    /// Output only to stdout.
    #[default]
    Stdout,
    /// Capture only to the in-memory buffer.
    Memory,
    /// Both stdout and the in-memory buffer.
    Both,
}

/// A captured log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// Verbosity level of this entry.
    pub level: VerbosityLevel,
    /// Short category tag, e.g. "pairing" or "elimination".
    pub category: &'static str,
    /// The rendered message.
    pub message: String,
}

/// Leveled logger owned by a single match.
#[derive(Clone, Debug, Default)]
pub struct MatchLogger {
    verbosity: VerbosityLevel,
    output_mode: OutputMode,
    buffer: Vec<LogEntry>,
}

impl MatchLogger {
    /// Create a silent logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logger with the given verbosity and destination.
    #[must_use]
    pub fn with_settings(verbosity: VerbosityLevel, output_mode: OutputMode) -> Self {
        Self {
            verbosity,
            output_mode,
            buffer: Vec::new(),
        }
    }

    /// Current verbosity.
    #[must_use]
    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    /// Change the verbosity.
    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    /// Change where lines go.
    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    /// Whether a message at `level` would be emitted.
    #[must_use]
    pub fn enabled(&self, level: VerbosityLevel) -> bool {
        level != VerbosityLevel::Silent && level <= self.verbosity
    }

    /// Emit a line built lazily, so disabled levels never format anything.
    pub fn log_with(&mut self, level: VerbosityLevel, category: &'static str, message: impl FnOnce() -> String) {
        if !self.enabled(level) {
            return;
        }
        let message = message();
        if matches!(self.output_mode, OutputMode::Stdout | OutputMode::Both) {
            println!("[{category}] {message}");
        }
        if matches!(self.output_mode, OutputMode::Memory | OutputMode::Both) {
            self.buffer.push(LogEntry { level, category, message });
        }
    }

    /// Emit an elimination/result line.
    pub fn minimal(&mut self, category: &'static str, message: impl FnOnce() -> String) {
        self.log_with(VerbosityLevel::Minimal, category, message);
    }

    /// Emit a registration/pairing line.
    pub fn normal(&mut self, category: &'static str, message: impl FnOnce() -> String) {
        self.log_with(VerbosityLevel::Normal, category, message);
    }

    /// Emit a per-fight line.
    pub fn verbose(&mut self, category: &'static str, message: impl FnOnce() -> String) {
        self.log_with(VerbosityLevel::Verbose, category, message);
    }

    /// Captured entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.buffer
    }

    /// Captured entries of one category.
    pub fn entries_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a LogEntry> + 'a {
        self.buffer.iter().filter(move |e| e.category == category)
    }

    /// Drop all captured entries.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
