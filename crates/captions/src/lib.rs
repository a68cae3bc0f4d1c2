//! Subtext Captions
//!
//! Subtitle synthesis from timed transcript segments:
//! - **Reflow:** greedy word wrap followed by bottom-heavy pyramid ordering
//! - **Timestamps:** millisecond decomposition and per-format rendering
//! - **Documents:** SRT and WebVTT cue assembly
//! - **Transcripts:** Whisper-style JSON input and output file naming

pub mod naming;
pub mod reflow;
pub mod segment;
pub mod subtitles;
pub mod timestamp;
pub mod transcript;

pub use segment::*;
pub use subtitles::*;
pub use timestamp::*;
pub use transcript::*;
