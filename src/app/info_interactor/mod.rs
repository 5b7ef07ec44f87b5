// Info interactor - Reports size, duration and streams of one input

use tracing::{debug, info};

use crate::domain::model::*;
use crate::engine::{classify, ArgumentBuilder, ProcessExecutor};
use crate::error::SuperVideoResult;
use crate::probe::MetadataExtractor;

/// Interactor for the info use case
pub struct InfoInteractor {
    builder: ArgumentBuilder,
    executor: ProcessExecutor,
}

impl InfoInteractor {
    pub fn new(builder: ArgumentBuilder, executor: ProcessExecutor) -> Self {
        Self { builder, executor }
    }

    /// Describe the input.
    ///
    /// Without an output file the engine always exits non-zero, so the status
    /// only matters when no stream could be read at all.
    pub async fn execute(&self, operation: &Operation) -> SuperVideoResult<MediaReport> {
        let input = operation.input()?;
        let size_bytes = tokio::fs::metadata(input).await?.len();
        info!("Inspecting {}", input.display());

        let command = self.builder.info(operation)?;
        let result = self.executor.run_unchecked(&command).await?;
        let diagnostics = result.diagnostics();

        let report =
            MetadataExtractor::extract(&input.display().to_string(), size_bytes, &diagnostics);
        debug!(
            "Found {} streams, duration {:?}",
            report.streams.len(),
            report.duration
        );

        if report.streams.is_empty() {
            classify(result)?;
        }
        Ok(report)
    }
}
