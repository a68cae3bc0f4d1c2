//! Caption line reflow.
//!
//! Two separable passes:
//! 1. [`wrap`]: greedy word wrap at a maximum line width.
//! 2. [`pyramid`]: reorder whole lines into a bottom-heavy pyramid,
//!    shortest first, so each line is at least as long as the one above.
//!
//! Widths and lengths are counted in `char`s. Words are never split; a word
//! longer than the width occupies a line on its own.

/// Character length of a line.
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Trim and collapse every whitespace run to a single space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Greedy word wrap.
///
/// Always returns at least one line; empty input yields `[""]`. With
/// `max_width == 0` every word lands on its own line.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = char_len(word);
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Reorder lines by ascending length, keeping equal-length lines in order.
pub fn pyramid(mut lines: Vec<String>) -> Vec<String> {
    lines.sort_by_key(|line| char_len(line));
    lines
}

/// Reflow a caption into display lines.
///
/// A width of 0 disables reflow, as does text that already fits. Either
/// way the single returned line is the normalized text.
pub fn reflow(text: &str, max_width: usize) -> Vec<String> {
    let normalized = normalize(text);
    if max_width == 0 || char_len(&normalized) <= max_width {
        return vec![normalized];
    }
    pyramid(wrap(&normalized, max_width))
}

/// Join reflowed lines back into a single line of text.
pub fn reflow_join(lines: &[String]) -> String {
    lines.join(" ")
}
