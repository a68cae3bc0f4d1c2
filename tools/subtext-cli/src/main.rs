//! Subtext CLI — Command-line interface for subtitle synthesis.
//!
//! Usage:
//!   subtext render <TRANSCRIPT>...   Render transcripts to SRT/VTT files
//!   subtext validate <TRANSCRIPT>    Check a transcript's segments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use subtext_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "subtext",
    about = "Generate SRT and WebVTT subtitles from speech transcripts",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the standard location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render transcript JSON files to subtitle documents
    Render {
        /// Transcript JSON files (Whisper segment output)
        #[arg(required = true)]
        transcripts: Vec<PathBuf>,

        /// Subtitle format to output: srt|vtt
        #[arg(long)]
        format: Option<String>,

        /// Directory to save the outputs
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Break captions into a bottom-heavy pyramid when a line exceeds
        /// N characters (0 disables)
        #[arg(long, allow_negative_numbers = true)]
        break_lines: Option<i64>,
    },

    /// Validate the segments of a transcript
    Validate {
        /// Path to the transcript JSON file
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    subtext_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Render {
            transcripts,
            format,
            output_dir,
            break_lines,
        } => commands::render::run(
            transcripts,
            format.unwrap_or(config.subtitles.format),
            output_dir.unwrap_or(config.output_dir),
            break_lines.unwrap_or(config.subtitles.break_lines),
        ),
        Commands::Validate { path } => commands::validate::run(path),
    }
}
