//! Output file naming.

use std::path::{Path, PathBuf};

use crate::subtitles::SubtitleFormat;

/// Turn a media title into a filesystem-safe slug.
///
/// ASCII letters and digits are kept (lowercased); every other run of
/// characters becomes a single `-`. Titles with nothing usable map to
/// `"untitled"`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}

/// Path of the subtitle file for `title` inside `dir`.
pub fn output_path(dir: &Path, title: &str, format: SubtitleFormat) -> PathBuf {
    dir.join(format!("{}.{}", slugify(title), format.extension()))
}
