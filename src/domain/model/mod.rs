// Domain models - Core types and data structures

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SuperVideoError;


/// Default presentation timestamp factor for timelapse
pub const DEFAULT_SPEED: f64 = 0.02;

/// One line of a split range file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRangeEntry {
    /// Start timestamp, passed to the engine verbatim
    pub begin: String,
    /// Absolute end timestamp, passed to the engine verbatim
    pub end: String,
    /// Target file name, may contain spaces
    pub filename: String,
    /// 1-based line number in the range file
    pub line: usize,
}

impl TimeRangeEntry {
    pub fn new(
        begin: impl Into<String>,
        end: impl Into<String>,
        filename: impl Into<String>,
        line: usize,
    ) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
            filename: filename.into(),
            line,
        }
    }

    /// Target path of the clip
    pub fn target(&self) -> PathBuf {
        PathBuf::from(&self.filename)
    }
}

/// Operation selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Split a video into the ranges listed in its .txt file
    Split,
    /// Join several videos into one
    Concat,
    /// Scale presentation timestamps (fast or slow motion)
    Timelapse,
    /// Show size, duration and streams
    Info,
}

impl OperationKind {
    /// Whether the operation writes a single named output file
    pub fn requires_output(&self) -> bool {
        matches!(self, OperationKind::Concat | OperationKind::Timelapse)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Split => "split",
            OperationKind::Concat => "concat",
            OperationKind::Timelapse => "timelapse",
            OperationKind::Info => "info",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved operation, built once before any execution
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub kind: OperationKind,
    pub inputs: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub render: bool,
    pub speed: f64,
}

impl Operation {
    pub fn new(kind: OperationKind, inputs: Vec<PathBuf>) -> Self {
        Self {
            kind,
            inputs,
            output: None,
            render: false,
            speed: DEFAULT_SPEED,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// First input, for verbs that take exactly one
    pub fn input(&self) -> Result<&PathBuf, SuperVideoError> {
        self.inputs.first().ok_or_else(|| {
            SuperVideoError::configuration(format!("{} requires an input file", self.kind))
        })
    }

    /// Output path, for verbs that require one
    pub fn output(&self) -> Result<&PathBuf, SuperVideoError> {
        self.output.as_ref().ok_or_else(|| {
            SuperVideoError::configuration(format!("{} requires --output <FILE>", self.kind))
        })
    }
}

/// Engine executable plus its ordered arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeCommand {
    pub executable: PathBuf,
    pub arguments: Vec<String>,
}

impl TranscodeCommand {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            arguments: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.arguments.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments.extend(args.into_iter().map(Into::into));
        self
    }

    /// Value following the first occurrence of `flag`
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        self.arguments
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.arguments.get(i + 1))
            .map(String::as_str)
    }

    pub fn contains(&self, arg: &str) -> bool {
        self.arguments.iter().any(|a| a == arg)
    }
}

impl fmt::Display for TranscodeCommand {
    /// Human-readable rendering for logs; never executed through a shell
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable.display())?;
        for arg in &self.arguments {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Captured outcome of one engine invocation
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub elapsed: Duration,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Engine diagnostics as text
    pub fn diagnostics(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }

    /// Last `count` non-blank diagnostic lines, oldest first
    pub fn diagnostic_tail(&self, count: usize) -> Vec<String> {
        let text = self.diagnostics();
        let mut tail: Vec<String> = text
            .lines()
            .rev()
            .map(str::trim_end)
            .filter(|l| !l.trim().is_empty())
            .take(count)
            .map(str::to_string)
            .collect();
        tail.reverse();
        tail
    }
}

/// Media type of a stream descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Audio,
    Other,
}

/// One stream descriptor extracted from engine diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamInfo {
    pub media_type: MediaType,
    pub descriptor_text: String,
}

/// Metadata report produced by the info operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaReport {
    pub path: String,
    pub size_bytes: u64,
    /// Human-readable size
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub streams: Vec<StreamInfo>,
}

/// Outcome of one split entry
#[derive(Debug)]
pub enum SplitOutcome {
    /// Clip written
    Completed { size: u64, elapsed: Duration },
    /// Target already present, engine not invoked
    Skipped,
    /// Entry failed; remaining entries still run
    Failed(SuperVideoError),
}

impl SplitOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SplitOutcome::Failed(_))
    }
}

/// Aggregate of a split run
#[derive(Debug, Default)]
pub struct SplitSummary {
    pub entries: Vec<(TimeRangeEntry, SplitOutcome)>,
    pub parse_errors: Vec<SuperVideoError>,
}

impl SplitSummary {
    pub fn completed(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| matches!(o, SplitOutcome::Completed { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| matches!(o, SplitOutcome::Skipped))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_failure()).count()
    }

    /// Whether every line parsed and every entry completed or was skipped
    pub fn is_clean(&self) -> bool {
        self.parse_errors.is_empty() && self.failed() == 0
    }
}

/// Outcome of a single-output operation (concat, timelapse)
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub output: PathBuf,
    pub size: u64,
    pub elapsed: Duration,
}
