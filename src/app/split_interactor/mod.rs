// Split interactor - Cuts one clip per range file entry

use tracing::{debug, info};

use crate::domain::model::*;
use crate::engine::{ArgumentBuilder, ProcessExecutor};
use crate::error::SuperVideoResult;
use crate::output::SplitProgress;
use crate::planner::RangeFile;

/// Interactor for the split use case
pub struct SplitInteractor {
    builder: ArgumentBuilder,
    executor: ProcessExecutor,
}

impl SplitInteractor {
    pub fn new(builder: ArgumentBuilder, executor: ProcessExecutor) -> Self {
        Self { builder, executor }
    }

    /// Run every entry of the input's range file in file order.
    ///
    /// A malformed line or a failing entry is reported and the remaining
    /// entries still run. Only an unreadable range file aborts.
    pub async fn execute(
        &self,
        operation: &Operation,
        progress: &mut dyn SplitProgress,
    ) -> SuperVideoResult<SplitSummary> {
        let input = operation.input()?;
        info!("Splitting {}", input.display());

        let range_file = RangeFile::load_for(input)?;
        for parse_error in &range_file.errors {
            progress.malformed_line(parse_error);
        }

        let mut summary = SplitSummary {
            entries: Vec::with_capacity(range_file.entries.len()),
            parse_errors: range_file.errors,
        };

        for entry in range_file.entries {
            progress.entry_started(&entry);
            let outcome = self.run_entry(operation, &entry).await;
            progress.entry_finished(&entry, &outcome);
            summary.entries.push((entry, outcome));
        }

        info!(
            "Split finished: {} written, {} skipped, {} failed",
            summary.completed(),
            summary.skipped(),
            summary.failed()
        );
        Ok(summary)
    }

    async fn run_entry(&self, operation: &Operation, entry: &TimeRangeEntry) -> SplitOutcome {
        let command = match self.builder.split(operation, entry) {
            Ok(command) => command,
            Err(e) => return SplitOutcome::Failed(e),
        };

        match self.executor.run_unless_exists(&command, &entry.target()).await {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!("Entry on line {} ({}) failed: {}", entry.line, entry.filename, e);
                SplitOutcome::Failed(e)
            }
        }
    }
}
