//! Render transcripts to subtitle files.

use std::path::PathBuf;

use subtext_captions::naming::output_path;
use subtext_captions::{save_subtitles, SubtitleOptions, Transcript};

pub fn run(
    transcripts: Vec<PathBuf>,
    format: String,
    output_dir: PathBuf,
    break_lines: i64,
) -> anyhow::Result<()> {
    // Reject bad settings before touching any transcript.
    let options = SubtitleOptions::parse(&format, break_lines)?;

    std::fs::create_dir_all(&output_dir)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", output_dir.display()))?;

    for path in transcripts {
        let transcript = Transcript::load(&path)?;
        let title = transcript.display_title(&path);

        tracing::info!(
            title = %title,
            segments = transcript.segments.len(),
            format = %options.format,
            max_width = options.max_width,
            "Generating subtitles"
        );

        println!("Text:\n{}", transcript.full_text());

        let out_path = output_path(&output_dir, &title, options.format);
        save_subtitles(&transcript.segments, &options, &out_path)
            .map_err(|e| anyhow::anyhow!("Failed to render {}: {e}", path.display()))?;

        let shown = std::fs::canonicalize(&out_path).unwrap_or(out_path);
        println!("Saved {} to {}", options.format.label(), shown.display());
    }

    Ok(())
}
