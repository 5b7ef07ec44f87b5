//! Metadata extraction from engine diagnostics
//!
//! When given an input and no output, ffmpeg describes the input on stderr:
//!
//! ```text
//!   Duration: 00:01:23.45, start: 0.000000, bitrate: 4162 kb/s
//!     Stream #0:0(und): Video: h264 (High), yuv420p, 1920x1080, 4012 kb/s, 29.97 fps (default)
//!     Stream #0:1(und): Audio: aac (LC), 48000 Hz, stereo, fltp, 128 kb/s (default)
//! ```
//!
//! The duration and each stream line are picked out of that text and reshaped
//! for display.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::model::*;
use crate::utils::Utils;

/// Disposition annotations that carry no information in the report
const DISPOSITION_MARKERS: &[&str] = &["(und)", "(default)"];

macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new($re).expect("valid pattern"))
    }};
}

fn duration_pattern() -> &'static Regex {
    regex!(r"Duration: ([\d.:]+),")
}

/// Stream lines only; input names echoed in other lines may contain "Stream" too
fn stream_pattern() -> &'static Regex {
    regex!(r"(?m)^[ \t]*(Stream #\d+:\d+.*)")
}

fn stream_kind_pattern() -> &'static Regex {
    regex!(r"^Stream #[^:]+:[^:]+: (\w+)")
}

/// Parses engine diagnostic text into a [`MediaReport`]
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Build the full report for `path` of `size_bytes` from its diagnostics
    pub fn extract(path: &str, size_bytes: u64, diagnostics: &str) -> MediaReport {
        MediaReport {
            path: path.to_string(),
            size_bytes,
            size: Utils::format_file_size(size_bytes),
            duration: Self::duration(diagnostics),
            streams: Self::streams(diagnostics).collect(),
        }
    }

    /// First `Duration: <timestamp>,` value, if any
    pub fn duration(diagnostics: &str) -> Option<String> {
        duration_pattern()
            .captures(diagnostics)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Stream descriptors in the order they appear
    pub fn streams(diagnostics: &str) -> impl Iterator<Item = StreamInfo> + '_ {
        stream_pattern()
            .captures_iter(diagnostics)
            .filter_map(|caps| caps.get(1))
            .map(|m| describe_stream(m.as_str()))
    }
}

/// Media type named by a raw `Stream #...` line
pub fn media_type_of(line: &str) -> MediaType {
    let kind = stream_kind_pattern()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());

    match kind {
        Some("Video") => MediaType::Video,
        Some("Audio") => MediaType::Audio,
        _ => MediaType::Other,
    }
}

/// Reshape one raw stream line for display.
///
/// `Stream` becomes `Channel`, disposition markers are dropped, the media type
/// starts its own line and the first fields move to indented continuation lines.
pub fn describe_stream(line: &str) -> StreamInfo {
    let media_type = media_type_of(line);

    let mut text = line.replacen("Stream", "Channel", 1);
    for marker in DISPOSITION_MARKERS {
        text = text.replace(marker, "");
    }

    if let Some(token) = media_type_token(media_type) {
        text = text.replacen(&format!(" {}", token), &format!("\n {}", token), 1);
    }

    let text = text
        .replacen(", ", "\n\t", 1)
        .replacen("kb/s, ", "kb/s\n\t", 1);

    StreamInfo {
        media_type,
        descriptor_text: text.trim_end().to_string(),
    }
}

/// Word the engine uses for a media type
pub fn media_type_token(media_type: MediaType) -> Option<&'static str> {
    match media_type {
        MediaType::Video => Some("Video"),
        MediaType::Audio => Some("Audio"),
        MediaType::Other => None,
    }
}
