//! Range file parsing
//!
//! A range file sits next to the video being split and shares its name with a
//! `.txt` extension. Each non-blank line reads `BEGIN END FILENAME...`; the
//! file name may contain spaces.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::model::TimeRangeEntry;
use crate::error::{SuperVideoError, SuperVideoResult};

/// Extension of the range file that accompanies a video
pub const RANGE_FILE_EXTENSION: &str = "txt";

/// Parsed range file: valid entries in file order plus per-line errors
#[derive(Debug, Default)]
pub struct RangeFile {
    pub entries: Vec<TimeRangeEntry>,
    pub errors: Vec<SuperVideoError>,
}

/// Path of the range file for `video`
pub fn range_file_path(video: &Path) -> PathBuf {
    video.with_extension(RANGE_FILE_EXTENSION)
}

impl RangeFile {
    /// Read and parse the range file that belongs to `video`
    pub fn load_for(video: &Path) -> SuperVideoResult<Self> {
        let path = range_file_path(video);
        debug!("Reading range file {}", path.display());
        let content = std::fs::read_to_string(&path)?;
        Ok(Self::parse(&content))
    }

    /// Parse range file content. A malformed line is recorded and skipped.
    pub fn parse(content: &str) -> Self {
        let mut range_file = RangeFile::default();

        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match parse_line(line, index + 1) {
                Ok(entry) => range_file.entries.push(entry),
                Err(e) => {
                    debug!("{}", e);
                    range_file.errors.push(e);
                }
            }
        }

        debug!(
            "Parsed {} range entries ({} malformed)",
            range_file.entries.len(),
            range_file.errors.len()
        );
        range_file
    }
}

fn parse_line(line: &str, number: usize) -> SuperVideoResult<TimeRangeEntry> {
    let mut tokens = line.split_whitespace();

    match (tokens.next(), tokens.next()) {
        (Some(begin), Some(end)) => {
            let filename = tokens.collect::<Vec<_>>().join(" ");
            if filename.is_empty() {
                return Err(malformed(line, number));
            }
            Ok(TimeRangeEntry::new(begin, end, filename, number))
        }
        _ => Err(malformed(line, number)),
    }
}

fn malformed(line: &str, number: usize) -> SuperVideoError {
    SuperVideoError::Parse {
        line: number,
        content: line.trim().to_string(),
    }
}
