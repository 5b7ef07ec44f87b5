// Timelapse interactor - Rescales presentation timestamps of one input

use tracing::info;

use crate::domain::model::*;
use crate::engine::executor::output_size;
use crate::engine::{ArgumentBuilder, ProcessExecutor};
use crate::error::SuperVideoResult;

/// Interactor for the timelapse use case
pub struct TimelapseInteractor {
    builder: ArgumentBuilder,
    executor: ProcessExecutor,
}

impl TimelapseInteractor {
    pub fn new(builder: ArgumentBuilder, executor: ProcessExecutor) -> Self {
        Self { builder, executor }
    }

    pub async fn execute(&self, operation: &Operation) -> SuperVideoResult<RenderOutcome> {
        let command = self.builder.timelapse(operation)?;
        let output = operation.output()?.clone();
        info!(
            "Applying speed factor {} to {}",
            operation.speed,
            operation.input()?.display()
        );

        let result = self.executor.run(&command).await?;
        Ok(RenderOutcome {
            size: output_size(&output).await,
            output,
            elapsed: result.elapsed,
        })
    }
}
