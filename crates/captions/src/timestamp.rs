//! Subtitle timestamps.
//!
//! Seconds are rounded to the nearest millisecond (half up) and then
//! decomposed with carry, so a seconds or minutes field never reads 60.
//! Hours are unbounded and widen past two digits when needed.

use std::fmt;

use crate::subtitles::SubtitleFormat;

/// Largest time, in seconds, a segment may carry (about 31,700 years).
///
/// Keeps the microsecond intermediate of [`Timestamp::from_secs`] well
/// inside `u64`.
pub const MAX_TIMESTAMP_SECS: f64 = 1.0e12;

/// A decomposed subtitle timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub hours: u64,
    /// Always in `[0, 59]`.
    pub minutes: u8,
    /// Always in `[0, 59]`.
    pub seconds: u8,
    /// Always in `[0, 999]`.
    pub millis: u16,
}

impl Timestamp {
    /// Build a timestamp from a whole number of milliseconds.
    pub fn from_millis(total_ms: u64) -> Self {
        Self {
            hours: total_ms / 3_600_000,
            minutes: ((total_ms % 3_600_000) / 60_000) as u8,
            seconds: ((total_ms % 60_000) / 1000) as u8,
            millis: (total_ms % 1000) as u16,
        }
    }

    /// Build a timestamp from fractional seconds.
    ///
    /// The value is first snapped to whole microseconds so that decimal
    /// inputs such as `1.0005` round half up as written rather than as
    /// their nearest binary approximation. Negative and NaN inputs clamp
    /// to zero and values past [`MAX_TIMESTAMP_SECS`] saturate; segments
    /// are validated before they get here.
    pub fn from_secs(secs: f64) -> Self {
        let micros = (secs * 1_000_000.0).round() as u64;
        Self::from_millis(micros.saturating_add(500) / 1000)
    }

    /// Render with the given millisecond separator.
    pub fn render_with(&self, separator: char) -> String {
        format!(
            "{:02}:{:02}:{:02}{separator}{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }

    /// Render in the syntax of a subtitle format.
    pub fn render(&self, format: SubtitleFormat) -> String {
        self.render_with(format.millis_separator())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with('.'))
    }
}

/// Format seconds as SRT timestamp: HH:MM:SS,mmm
pub fn format_srt_time(secs: f64) -> String {
    Timestamp::from_secs(secs).render(SubtitleFormat::Srt)
}

/// Format seconds as VTT timestamp: HH:MM:SS.mmm
pub fn format_vtt_time(secs: f64) -> String {
    Timestamp::from_secs(secs).render(SubtitleFormat::Vtt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        assert_eq!(format_srt_time(0.0), "00:00:00,000");
        assert_eq!(format_srt_time(3661.5), "01:01:01,500");
        assert_eq!(format_vtt_time(3661.5), "01:01:01.500");
    }

    #[test]
    fn test_fractional_seconds_decompose() {
        assert_eq!(format_srt_time(3725.4), "01:02:05,400");
        assert_eq!(format_vtt_time(3725.4), "01:02:05.400");
        assert_eq!(format_vtt_time(2.5), "00:00:02.500");
    }

    #[test]
    fn test_rounds_to_nearest_millisecond() {
        assert_eq!(format_vtt_time(1.0004), "00:00:01.000");
        assert_eq!(format_vtt_time(1.0005), "00:00:01.001");
        assert_eq!(format_vtt_time(0.2999999), "00:00:00.300");
    }

    #[test]
    fn test_rounding_carries_into_minutes() {
        assert_eq!(format_vtt_time(59.999), "00:00:59.999");
        assert_eq!(format_vtt_time(59.9995), "00:01:00.000");
        assert_eq!(format_vtt_time(3599.9999), "01:00:00.000");
    }

    #[test]
    fn test_hours_widen_past_two_digits() {
        assert_eq!(format_srt_time(100.0 * 3600.0 + 1.0), "100:00:01,000");
        assert_eq!(format_srt_time(99.0 * 3600.0), "99:00:00,000");
    }

    #[test]
    fn test_millis_decomposition() {
        let ts = Timestamp::from_millis(3_725_400);
        assert_eq!(
            ts,
            Timestamp {
                hours: 1,
                minutes: 2,
                seconds: 5,
                millis: 400
            }
        );
        assert_eq!(ts.to_string(), "01:02:05.400");
    }

    #[test]
    fn test_invalid_input_clamps_to_zero() {
        assert_eq!(Timestamp::from_secs(-1.0), Timestamp::from_millis(0));
        assert_eq!(Timestamp::from_secs(f64::NAN), Timestamp::from_millis(0));
    }

    #[test]
    fn test_huge_input_saturates_without_overflow() {
        let ts = Timestamp::from_secs(1e20);
        assert_eq!(ts, Timestamp::from_millis(u64::MAX / 1000));
        assert_eq!(Timestamp::from_secs(f64::INFINITY), ts);
    }

    #[test]
    fn test_largest_allowed_time_renders_exactly() {
        assert_eq!(
            format_srt_time(MAX_TIMESTAMP_SECS),
            "277777777:46:40,000"
        );
    }
}
