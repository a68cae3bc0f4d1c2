//! Validate a transcript's segments.

use std::path::PathBuf;

use subtext_captions::Transcript;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating transcript at: {}", path.display());

    let transcript = Transcript::load(&path)
        .map_err(|e| anyhow::anyhow!("Failed to load transcript: {e}"))?;

    println!("  Title: {}", transcript.display_title(&path));
    if let Some(ref language) = transcript.language {
        println!("  Language: {language}");
    }
    println!("  Segments: {}", transcript.segments.len());
    println!("  Duration: {:.1}s", transcript.duration_secs());

    let unordered = transcript
        .segments
        .windows(2)
        .filter(|pair| pair[1].start < pair[0].start)
        .count();
    if unordered > 0 {
        println!("  Warning: {unordered} segment(s) start before their predecessor");
    }

    match transcript.validate() {
        Ok(()) => {
            println!("\nTranscript is valid.");
            Ok(())
        }
        Err(e) => {
            println!("\nValidation issue:");
            println!("  - {e}");
            anyhow::bail!("transcript {} is not renderable", path.display())
        }
    }
}
