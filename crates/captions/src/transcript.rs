//! Transcripts produced by speech recognition.
//!
//! Reads the JSON document a Whisper-style recognizer emits: a top-level
//! `text` plus a `segments` array of `{start, end, text}` records. Both the
//! local model output and the hosted `verbose_json` response share this
//! shape. An optional `title` names the source media.

use std::path::Path;

use serde::Deserialize;
use subtext_common::error::{SubtextError, SubtextResult};

use crate::reflow::normalize;
use crate::segment::{validate_segments, Segment};

/// Result of a transcription job.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Transcript {
    /// Human-readable title of the source media.
    #[serde(default)]
    pub title: Option<String>,
    /// Detected or requested language.
    #[serde(default)]
    pub language: Option<String>,
    /// Full transcript text.
    #[serde(default)]
    pub text: Option<String>,
    /// Timed segments in playback order.
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Parse a transcript from JSON.
    pub fn from_json(json: &str) -> SubtextResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a transcript from a JSON file.
    pub fn load(path: &Path) -> SubtextResult<Self> {
        if !path.exists() {
            return Err(SubtextError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let transcript = Self::from_json(&content).map_err(|e| {
            SubtextError::transcript(format!("failed to parse {}: {e}", path.display()))
        })?;

        tracing::debug!(
            path = %path.display(),
            segments = transcript.segments.len(),
            language = ?transcript.language,
            "Loaded transcript"
        );
        Ok(transcript)
    }

    /// Check every segment, reporting the first malformed one.
    pub fn validate(&self) -> SubtextResult<()> {
        validate_segments(&self.segments)
    }

    /// The full spoken text: the recognizer's own `text` when present,
    /// otherwise the segment texts joined with single spaces.
    pub fn full_text(&self) -> String {
        match self.text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => self
                .segments
                .iter()
                .map(|s| normalize(&s.text))
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Title for naming outputs: the embedded title, else the file stem.
    pub fn display_title(&self, path: &Path) -> String {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| "untitled".to_string())
    }

    /// End time of the last segment, in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.segments.iter().map(|s| s.end).fold(0.0, f64::max)
    }
}
