//! Error types for the seeker crate.
//!
//! Filtering is lenient and never produces an error; only selection
//! resolution, strict column lookup and exporting can fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when resolving selections or exporting names.
#[derive(Debug, Error)]
pub enum SeekerError {
    /// A selection token could not be resolved against its candidates.
    #[error("invalid selection '{token}': {reason}")]
    InvalidSelection {
        token: String,
        reason: SelectionFailure,
    },

    /// A column name did not match any known alias.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// Writing the exported name list failed.
    #[error("failed to export names to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SeekerError {
    /// Create an invalid selection error.
    pub fn selection(token: impl Into<String>, reason: SelectionFailure) -> Self {
        Self::InvalidSelection {
            token: token.into(),
            reason,
        }
    }

    /// Returns the selection failure reason, if this is a selection error.
    pub fn selection_failure(&self) -> Option<&SelectionFailure> {
        match self {
            Self::InvalidSelection { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Why a selection token failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionFailure {
    /// The token was empty or only whitespace.
    #[error("empty selection")]
    Empty,

    /// A 1-based index fell outside `1..=len`.
    #[error("index {index} is out of range (1-{len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A 1-based inclusive range was reversed or out of bounds.
    #[error("range {start}-{end} is invalid for {len} items")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    /// No candidate carried the requested name.
    #[error("no game with that name")]
    NameNotFound,
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
