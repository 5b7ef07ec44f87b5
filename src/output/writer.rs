//! Report writer
//!
//! Turns outcomes into the lines printed on stdout. Rendering is kept separate
//! from printing so the text can be checked without a terminal.

use std::io::Write;

use crate::domain::model::*;
use crate::error::{SuperVideoError, SuperVideoResult};
use crate::output::ReportFormat;
use crate::probe::media_type_token;
use crate::utils::style::{Color, Palette};
use crate::utils::Utils;

/// Renders reports in the configured format and colors
#[derive(Debug, Clone, Copy)]
pub struct ReportWriter {
    palette: Palette,
    format: ReportFormat,
}

impl ReportWriter {
    pub fn new(palette: Palette, format: ReportFormat) -> Self {
        Self { palette, format }
    }

    pub fn plain() -> Self {
        Self::new(Palette::plain(), ReportFormat::Text)
    }

    /// Prefix printed before a split entry runs
    pub fn split_entry_start(&self, entry: &TimeRangeEntry) -> String {
        format!("File {}...", self.palette.paint(&entry.filename, Color::Cyan))
    }

    /// Result printed after a split entry
    pub fn split_outcome(&self, outcome: &SplitOutcome) -> String {
        match outcome {
            SplitOutcome::Completed { size, elapsed } => format!(
                "{} {} {}",
                self.palette.paint("Ok", Color::Green),
                Utils::format_file_size(*size),
                Utils::format_elapsed(*elapsed)
            ),
            SplitOutcome::Skipped => {
                format!("Exists. {}", self.palette.paint("Skipping", Color::Orange))
            }
            SplitOutcome::Failed(error) => self.split_failure(error),
        }
    }

    fn split_failure(&self, error: &SuperVideoError) -> String {
        match error {
            SuperVideoError::EngineInvocation { exit_code, excerpt } => {
                let status = match exit_code {
                    Some(code) => format!("Error {}", code),
                    None => "Error (signal)".to_string(),
                };
                format!(
                    "{} {}",
                    self.palette.paint(&status, Color::Red),
                    excerpt.last().map(String::as_str).unwrap_or_default()
                )
            }
            other => format!("{} {}", self.palette.paint("Error", Color::Red), other),
        }
    }

    /// Line reported for a malformed range file entry
    pub fn parse_error(&self, error: &SuperVideoError) -> String {
        self.palette.paint(&error.to_string(), Color::Red)
    }

    /// Closing line of a split run
    pub fn split_summary(&self, summary: &SplitSummary) -> String {
        let mut line = format!(
            "{} written, {} skipped, {} failed",
            summary.completed(),
            summary.skipped(),
            summary.failed()
        );
        if !summary.parse_errors.is_empty() {
            line.push_str(&format!(", {} malformed lines", summary.parse_errors.len()));
        }
        self.palette.paint(&line, Color::Grey)
    }

    /// Line printed after concat or timelapse
    pub fn render_outcome(&self, kind: OperationKind, outcome: &RenderOutcome) -> String {
        format!(
            "{} {} {} {} {}",
            self.palette.paint(kind.as_str(), Color::Green),
            self.palette.paint(&outcome.output.display().to_string(), Color::Cyan),
            self.palette.paint("Ok", Color::Green),
            Utils::format_file_size(outcome.size),
            Utils::format_elapsed(outcome.elapsed)
        )
    }

    /// Info report in the configured format
    pub fn media_report(&self, report: &MediaReport) -> SuperVideoResult<String> {
        match self.format {
            ReportFormat::Text => Ok(self.media_report_text(report)),
            ReportFormat::Json => {
                serde_json::to_string_pretty(report).map_err(|e| SuperVideoError::Serialization {
                    message: e.to_string(),
                })
            }
            ReportFormat::Yaml => {
                serde_yaml::to_string(report).map_err(|e| SuperVideoError::Serialization {
                    message: e.to_string(),
                })
            }
        }
    }

    fn media_report_text(&self, report: &MediaReport) -> String {
        let mut lines = vec![format!(
            "{} {}",
            self.palette.paint("Size:", Color::Yellow),
            report.size
        )];

        if let Some(duration) = &report.duration {
            lines.push(format!(
                "{} {}",
                self.palette.paint("Duration:", Color::Yellow),
                duration
            ));
        }

        for stream in &report.streams {
            lines.push(self.stream(stream));
        }

        lines.join("\n")
    }

    fn stream(&self, stream: &StreamInfo) -> String {
        let color = match stream.media_type {
            MediaType::Video => Color::Green,
            MediaType::Audio => Color::Magenta,
            MediaType::Other => return stream.descriptor_text.clone(),
        };

        match media_type_token(stream.media_type) {
            Some(token) if self.palette.is_enabled() => stream.descriptor_text.replacen(
                &format!("\n {}", token),
                &format!("\n {}", self.palette.paint(token, color)),
                1,
            ),
            _ => stream.descriptor_text.clone(),
        }
    }
}

/// Receives split progress as entries run
pub trait SplitProgress {
    fn entry_started(&mut self, entry: &TimeRangeEntry);
    fn entry_finished(&mut self, entry: &TimeRangeEntry, outcome: &SplitOutcome);
    fn malformed_line(&mut self, error: &SuperVideoError);
}

/// Discards progress
pub struct SilentProgress;

impl SplitProgress for SilentProgress {
    fn entry_started(&mut self, _entry: &TimeRangeEntry) {}
    fn entry_finished(&mut self, _entry: &TimeRangeEntry, _outcome: &SplitOutcome) {}
    fn malformed_line(&mut self, _error: &SuperVideoError) {}
}

/// Prints each entry on one line: name first, outcome once the engine returns
pub struct ConsoleProgress<'a> {
    writer: &'a ReportWriter,
}

impl<'a> ConsoleProgress<'a> {
    pub fn new(writer: &'a ReportWriter) -> Self {
        Self { writer }
    }
}

impl SplitProgress for ConsoleProgress<'_> {
    fn entry_started(&mut self, entry: &TimeRangeEntry) {
        print!("{}", self.writer.split_entry_start(entry));
        let _ = std::io::stdout().flush();
    }

    fn entry_finished(&mut self, _entry: &TimeRangeEntry, outcome: &SplitOutcome) {
        println!("{}", self.writer.split_outcome(outcome));
    }

    fn malformed_line(&mut self, error: &SuperVideoError) {
        println!("{}", self.writer.parse_error(error));
    }
}
