//! Subtitle generation in SRT and VTT formats.

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use subtext_common::error::{SubtextError, SubtextResult};

use crate::reflow::reflow;
use crate::segment::{validate_segments, Segment};
use crate::timestamp::Timestamp;

/// Target subtitle document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtitleFormat {
    /// SubRip: numbered cues, comma millisecond separator.
    Srt,
    /// WebVTT: `WEBVTT` header, unnumbered cues, period separator.
    Vtt,
}

impl SubtitleFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Vtt => "vtt",
        }
    }

    /// Text emitted before the first cue.
    pub fn header(&self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "",
            SubtitleFormat::Vtt => "WEBVTT\n\n",
        }
    }

    pub fn millis_separator(&self) -> char {
        match self {
            SubtitleFormat::Srt => ',',
            SubtitleFormat::Vtt => '.',
        }
    }

    /// Whether cues carry a sequential index line.
    pub fn numbers_cues(&self) -> bool {
        matches!(self, SubtitleFormat::Srt)
    }

    /// Short display name ("SRT", "VTT").
    pub fn label(&self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "SRT",
            SubtitleFormat::Vtt => "VTT",
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for SubtitleFormat {
    type Err = SubtextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srt" => Ok(SubtitleFormat::Srt),
            "vtt" | "webvtt" => Ok(SubtitleFormat::Vtt),
            other => Err(SubtextError::config(format!(
                "unsupported subtitle format '{other}' (expected 'srt' or 'vtt')"
            ))),
        }
    }
}

/// Parameters for one formatting call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtitleOptions {
    pub format: SubtitleFormat,
    /// Maximum caption line width in characters. 0 disables reflow.
    pub max_width: usize,
}

impl SubtitleOptions {
    /// Build options, rejecting a negative line width.
    pub fn new(format: SubtitleFormat, max_width: i64) -> SubtextResult<Self> {
        let max_width = usize::try_from(max_width).map_err(|_| {
            SubtextError::config(format!(
                "maximum line width must be non-negative, got {max_width}"
            ))
        })?;
        Ok(Self { format, max_width })
    }

    /// Build options from a format selector string such as `"srt"`.
    pub fn parse(format: &str, max_width: i64) -> SubtextResult<Self> {
        Self::new(format.parse()?, max_width)
    }
}

/// One timed caption unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    /// 1-based position, present only for formats that number cues.
    pub index: Option<usize>,
    pub start: Timestamp,
    pub end: Timestamp,
    /// Display lines, never empty.
    pub lines: Vec<String>,
}

impl Cue {
    /// Build the cue for the segment at `position` (0-based).
    pub fn from_segment(position: usize, segment: &Segment, options: &SubtitleOptions) -> Self {
        Self {
            index: options.format.numbers_cues().then_some(position + 1),
            start: Timestamp::from_secs(segment.start),
            end: Timestamp::from_secs(segment.end),
            lines: reflow(&segment.text, options.max_width),
        }
    }

    /// Append this cue's block, including its trailing blank line.
    pub fn render_into(&self, format: SubtitleFormat, output: &mut String) {
        if let Some(index) = self.index {
            output.push_str(&format!("{index}\n"));
        }
        output.push_str(&format!(
            "{} --> {}\n",
            self.start.render(format),
            self.end.render(format),
        ));
        output.push_str(&self.lines.join("\n"));
        output.push_str("\n\n");
    }
}

/// Validate the segments and build one cue per segment, in input order.
pub fn build_cues(segments: &[Segment], options: &SubtitleOptions) -> SubtextResult<Vec<Cue>> {
    validate_segments(segments)?;
    Ok(segments
        .iter()
        .enumerate()
        .map(|(i, segment)| Cue::from_segment(i, segment, options))
        .collect())
}

/// Assemble a document from already-built cues.
pub fn render_cues(cues: &[Cue], format: SubtitleFormat) -> String {
    let mut output = String::from(format.header());
    for cue in cues {
        cue.render_into(format, &mut output);
    }
    output
}

/// Generate a complete subtitle document from transcription segments.
///
/// Fails without producing output if any segment is malformed.
pub fn format(segments: &[Segment], options: &SubtitleOptions) -> SubtextResult<String> {
    tracing::debug!(
        segments = segments.len(),
        format = %options.format,
        max_width = options.max_width,
        "Formatting subtitle document"
    );
    let cues = build_cues(segments, options)?;
    Ok(render_cues(&cues, options.format))
}

/// Generate SRT subtitle content from transcription segments.
pub fn generate_srt(segments: &[Segment], max_width: usize) -> SubtextResult<String> {
    format(
        segments,
        &SubtitleOptions {
            format: SubtitleFormat::Srt,
            max_width,
        },
    )
}

/// Generate WebVTT subtitle content from transcription segments.
pub fn generate_vtt(segments: &[Segment], max_width: usize) -> SubtextResult<String> {
    format(
        segments,
        &SubtitleOptions {
            format: SubtitleFormat::Vtt,
            max_width,
        },
    )
}

/// Write a complete document to a sink.
///
/// The document is fully formatted before the first byte is written, so a
/// validation failure leaves the sink untouched.
pub fn write_document<W: Write>(
    segments: &[Segment],
    options: &SubtitleOptions,
    sink: &mut W,
) -> SubtextResult<()> {
    let document = format(segments, options)?;
    sink.write_all(document.as_bytes())?;
    sink.flush()?;
    Ok(())
}

/// Save subtitles to a file. No file is created if validation fails.
pub fn save_subtitles(
    segments: &[Segment],
    options: &SubtitleOptions,
    path: &Path,
) -> SubtextResult<()> {
    let document = format(segments, options)?;
    std::fs::write(path, document)?;
    tracing::info!(
        path = %path.display(),
        cues = segments.len(),
        "Saved subtitles"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_segments() -> Vec<Segment> {
        vec![
            Segment::new(0.0, 2.5, "Hello world"),
            Segment::new(2.5, 5.0, "Goodbye"),
        ]
    }

    #[test]
    fn test_srt_generation() {
        let srt = generate_srt(&sample_segments(), 0).unwrap();
        assert_eq!(
            srt,
            "1\n00:00:00,000 --> 00:00:02,500\nHello world\n\n\
             2\n00:00:02,500 --> 00:00:05,000\nGoodbye\n\n"
        );
    }

    #[test]
    fn test_vtt_generation() {
        let vtt = generate_vtt(&sample_segments(), 0).unwrap();
        assert_eq!(
            vtt,
            "WEBVTT\n\n\
             00:00:00.000 --> 00:00:02.500\nHello world\n\n\
             00:00:02.500 --> 00:00:05.000\nGoodbye\n\n"
        );
    }

    #[test]
    fn test_empty_segment_list() {
        assert_eq!(generate_srt(&[], 0).unwrap(), "");
        assert_eq!(generate_vtt(&[], 0).unwrap(), "WEBVTT\n\n");
    }

    #[test]
    fn test_empty_text_keeps_cue() {
        let segments = vec![Segment::new(1.0, 2.0, "")];
        let srt = generate_srt(&segments, 10).unwrap();
        assert_eq!(srt, "1\n00:00:01,000 --> 00:00:02,000\n\n\n");
    }

    #[test]
    fn test_reflowed_body_uses_pyramid_lines() {
        let segments = vec![Segment::new(
            0.0,
            4.0,
            " the quick brown fox jumps over the lazy dog",
        )];
        let vtt = generate_vtt(&segments, 15).unwrap();
        assert_eq!(
            vtt,
            "WEBVTT\n\n00:00:00.000 --> 00:00:04.000\nthe lazy dog\nfox jumps over\nthe quick brown\n\n"
        );
    }

    #[test]
    fn test_index_follows_position_not_time() {
        let segments = vec![
            Segment::new(5.0, 6.0, "later"),
            Segment::new(1.0, 2.0, "earlier"),
        ];
        let cues = build_cues(&segments, &SubtitleOptions::parse("srt", 0).unwrap()).unwrap();
        assert_eq!(cues[0].index, Some(1));
        assert_eq!(cues[0].lines, vec!["later"]);
        assert_eq!(cues[1].index, Some(2));

        let cues = build_cues(&segments, &SubtitleOptions::parse("vtt", 0).unwrap()).unwrap();
        assert!(cues.iter().all(|cue| cue.index.is_none()));
    }

    #[test]
    fn test_time_past_limit_fails_instead_of_panicking() {
        let segments = vec![
            Segment::new(0.0, 1.0, "fine"),
            Segment::new(1e20, 1e20, "far future"),
        ];
        let err = generate_srt(&segments, 0).unwrap_err();
        assert_eq!(err.segment_index(), Some(1));
    }

    #[test]
    fn test_malformed_segment_aborts() {
        let segments = vec![
            Segment::new(0.0, 1.0, "fine"),
            Segment::new(3.0, 2.0, "backwards"),
        ];
        let err = generate_srt(&segments, 0).unwrap_err();
        assert_eq!(err.segment_index(), Some(1));
    }

    #[test]
    fn test_write_document_leaves_sink_empty_on_failure() {
        let segments = vec![Segment::new(3.0, 2.0, "backwards")];
        let options = SubtitleOptions::new(SubtitleFormat::Vtt, 0).unwrap();
        let mut sink = Vec::new();
        assert!(write_document(&segments, &options, &mut sink).is_err());
        assert!(sink.is_empty());

        write_document(&sample_segments(), &options, &mut sink).unwrap();
        assert!(sink.starts_with(b"WEBVTT\n\n00:00:00.000"));
    }

    #[test]
    fn test_negative_width_is_config_error() {
        let err = SubtitleOptions::new(SubtitleFormat::Srt, -1).unwrap_err();
        assert!(matches!(err, SubtextError::Config { .. }));
    }

    #[test]
    fn test_format_selector_parsing() {
        assert_eq!("srt".parse::<SubtitleFormat>().unwrap(), SubtitleFormat::Srt);
        assert_eq!(" VTT ".parse::<SubtitleFormat>().unwrap(), SubtitleFormat::Vtt);
        let err = "ass".parse::<SubtitleFormat>().unwrap_err();
        assert!(matches!(err, SubtextError::Config { .. }));
    }

    #[test]
    fn test_save_subtitles_skips_file_on_failure() {
        let dir = std::env::temp_dir().join("subtext_test_save");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let options = SubtitleOptions::new(SubtitleFormat::Srt, 0).unwrap();

        let bad = dir.join("bad.srt");
        assert!(save_subtitles(&[Segment::new(2.0, 1.0, "x")], &options, &bad).is_err());
        assert!(!bad.exists());

        let good = dir.join("good.srt");
        save_subtitles(&sample_segments(), &options, &good).unwrap();
        let content = std::fs::read_to_string(&good).unwrap();
        assert!(content.starts_with("1\n00:00:00,000 --> 00:00:02,500\nHello world\n\n"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
