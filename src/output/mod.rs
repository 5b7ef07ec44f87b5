//! Report rendering for command results

use serde::{Deserialize, Serialize};

pub mod writer;

pub use writer::{ConsoleProgress, ReportWriter, SilentProgress, SplitProgress};

/// Format of the info report
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Colored human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
}
