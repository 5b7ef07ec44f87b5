//! CLI module for SuperVideo
//!
//! This module handles command-line argument parsing and command dispatch.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::model::OperationKind;
use crate::output::ReportFormat;

pub mod commands;

const EXAMPLES: &str = "\
Split reads a text file next to the video (same name, .txt extension) with one
range per line: BEGINTIME ENDTIME FILENAME

Examples:
   supervideo split video.mp4                              Read video.txt and split video.mp4 into the listed chunks
   supervideo concat a.mp4 b.mp4 c.mp4 -o out.mp4          Join a, b and c into out.mp4
   supervideo timelapse vid.mp4 --speed 0.05 -o fast.mp4   Create a timelapse from vid.mp4 (smaller is faster)
   supervideo info video.mp4                               Show size, duration and streams";

/// SuperVideo
///
/// Split, concatenate, timelapse and inspect videos with ffmpeg.
#[derive(Parser, Debug)]
#[command(name = "supervideo")]
#[command(about = "Split, concatenate, timelapse and inspect videos with ffmpeg")]
#[command(version)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Operation to run
    #[arg(value_enum)]
    pub verb: Option<OperationKind>,

    /// Input video files
    pub inputs: Vec<PathBuf>,

    /// Re-encode instead of copying streams: slower, but cuts are frame accurate
    #[arg(short, long)]
    pub render: bool,

    /// Output file (required for concat and timelapse)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Presentation timestamp factor for timelapse; below 1 is faster [default: 0.02]
    #[arg(short, long)]
    pub speed: Option<f64>,

    /// Info report format
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Configuration file [default: ./supervideo.toml if present]
    #[arg(long, env = "SUPERVIDEO_CONFIG")]
    pub config: Option<PathBuf>,

    /// ffmpeg executable [default: ffmpeg on PATH]
    #[arg(long, env = "SUPERVIDEO_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// Kill an ffmpeg invocation after this many seconds (0 waits forever)
    #[arg(long, env = "SUPERVIDEO_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Logging filter, e.g. debug or supervideo_cli=trace
    #[arg(long, env = "SUPERVIDEO_LOG")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
