//! Error types shared across Subtext crates.

use std::path::PathBuf;

/// Top-level error type for Subtext operations.
#[derive(Debug, thiserror::Error)]
pub enum SubtextError {
    /// A transcript segment violates the segment invariants.
    ///
    /// `index` is the 0-based position of the segment in its sequence.
    #[error("Invalid segment #{} ({field}): {reason}", .index + 1)]
    InvalidSegment {
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Transcript error: {message}")]
    Transcript { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using SubtextError.
pub type SubtextResult<T> = Result<T, SubtextError>;

impl SubtextError {
    pub fn invalid_segment(index: usize, field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSegment {
            index,
            field,
            reason: reason.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn transcript(msg: impl Into<String>) -> Self {
        Self::Transcript {
            message: msg.into(),
        }
    }

    /// Position of the offending segment, if this is a segment failure.
    pub fn segment_index(&self) -> Option<usize> {
        match self {
            Self::InvalidSegment { index, .. } => Some(*index),
            _ => None,
        }
    }
}
