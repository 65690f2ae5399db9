//! Recoverable problems found while reading inputs.
//!
//! The loader and the analyzer never log directly; they hand each [`Warning`]
//! to the [`Diagnostics`] sink they were given. The binary uses
//! [`LogDiagnostics`], tests use [`RecordingDiagnostics`].

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A vector-file word is malformed in the configured encoding; the line is skipped.
    UndecodableWord {
        path: PathBuf,
        line: usize,
        encoding: &'static str,
    },
    /// A vector-file word was already read from an earlier line.
    DuplicateWord { path: PathBuf, word: String },
    /// A vector-file line has no space separating word and payload; the line is skipped.
    MissingVectorPayload { path: PathBuf, line: usize },
    /// The selected TSV field is empty. It still counts as a token.
    EmptyField {
        path: PathBuf,
        line: usize,
        field: usize,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndecodableWord {
                path,
                line,
                encoding,
            } => write!(
                f,
                "Failed to decode word on line {line} in {} as {encoding}",
                path.display()
            ),
            Self::DuplicateWord { path, word } => {
                write!(f, "duplicate word in {}: {word}", path.display())
            }
            Self::MissingVectorPayload { path, line } => write!(
                f,
                "No vector found on line {line} in {}, skipping",
                path.display()
            ),
            Self::EmptyField { path, line, field } => write!(
                f,
                "Empty field {field} on line {line} in {}",
                path.display()
            ),
        }
    }
}

pub trait Diagnostics {
    fn warn(&mut self, warning: Warning);
}

/// Forwards every warning to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&mut self, warning: Warning) {
        log::warn!("{warning}");
    }
}

/// Keeps warnings in memory, in the order they were raised.
#[derive(Debug, Default, Clone)]
pub struct RecordingDiagnostics {
    pub warnings: Vec<Warning>,
}

impl RecordingDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }
}
