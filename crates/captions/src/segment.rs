//! Timed transcript segments, the input of subtitle synthesis.

use serde::Deserialize;
use subtext_common::error::{SubtextError, SubtextResult};

use crate::timestamp::MAX_TIMESTAMP_SECS;

/// A single transcribed segment with timing.
///
/// Extra fields produced by speech recognizers (token ids, log
/// probabilities, ...) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Segment {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// Transcribed text.
    pub text: String,
}

impl Segment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Check the segment invariants.
    ///
    /// `index` is the segment's position in its sequence and is carried
    /// into the error so callers can point at the offending cue.
    pub fn validate(&self, index: usize) -> SubtextResult<()> {
        if !self.start.is_finite() {
            return Err(SubtextError::invalid_segment(
                index,
                "start",
                format!("start {} is not a finite number", self.start),
            ));
        }
        if self.start < 0.0 {
            return Err(SubtextError::invalid_segment(
                index,
                "start",
                format!("start {:.3}s is negative", self.start),
            ));
        }
        if self.start > MAX_TIMESTAMP_SECS {
            return Err(SubtextError::invalid_segment(
                index,
                "start",
                format!("start {:.3}s exceeds the {MAX_TIMESTAMP_SECS:e}s limit", self.start),
            ));
        }
        if !self.end.is_finite() {
            return Err(SubtextError::invalid_segment(
                index,
                "end",
                format!("end {} is not a finite number", self.end),
            ));
        }
        if self.end < self.start {
            return Err(SubtextError::invalid_segment(
                index,
                "end",
                format!(
                    "end {:.3}s is before start {:.3}s",
                    self.end, self.start
                ),
            ));
        }
        if self.end > MAX_TIMESTAMP_SECS {
            return Err(SubtextError::invalid_segment(
                index,
                "end",
                format!("end {:.3}s exceeds the {MAX_TIMESTAMP_SECS:e}s limit", self.end),
            ));
        }
        if let Some((offset, c)) = self.text.char_indices().find(|(_, c)| c.is_control()) {
            return Err(SubtextError::invalid_segment(
                index,
                "text",
                format!(
                    "contains control character U+{:04X} at byte {offset}",
                    c as u32
                ),
            ));
        }
        Ok(())
    }
}

/// Validate a whole segment sequence, stopping at the first malformed one.
pub fn validate_segments(segments: &[Segment]) -> SubtextResult<()> {
    segments
        .iter()
        .enumerate()
        .try_for_each(|(i, segment)| segment.validate(i))
}
