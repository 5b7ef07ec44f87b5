// Concat interactor - Joins several inputs through a transient manifest

use std::path::PathBuf;

use tracing::{info, warn};

use crate::domain::model::*;
use crate::engine::executor::output_size;
use crate::engine::{ArgumentBuilder, ConcatManifest, ProcessExecutor};
use crate::error::SuperVideoResult;

/// Interactor for the concat use case
pub struct ConcatInteractor {
    builder: ArgumentBuilder,
    executor: ProcessExecutor,
    manifest_dir: PathBuf,
}

impl ConcatInteractor {
    /// `manifest_dir` is where the manifest is written; relative inputs are
    /// resolved by the engine against it
    pub fn new(builder: ArgumentBuilder, executor: ProcessExecutor, manifest_dir: PathBuf) -> Self {
        Self {
            builder,
            executor,
            manifest_dir,
        }
    }

    /// Write the manifest, run the engine, and remove the manifest whatever
    /// the outcome
    pub async fn execute(&self, operation: &Operation) -> SuperVideoResult<RenderOutcome> {
        let output = operation.output()?.clone();
        info!(
            "Concatenating {} files into {}",
            operation.inputs.len(),
            output.display()
        );

        let manifest = ConcatManifest::create_in(&self.manifest_dir, &operation.inputs)?;
        let result = match self.builder.concat(operation, manifest.path()) {
            Ok(command) => self.executor.run(&command).await,
            Err(e) => Err(e),
        };

        // Release the manifest before propagating either outcome
        if let Err(e) = manifest.close() {
            warn!("Failed to remove concat manifest: {}", e);
            if result.is_ok() {
                return Err(e);
            }
        }

        let result = result?;
        Ok(RenderOutcome {
            size: output_size(&output).await,
            output,
            elapsed: result.elapsed,
        })
    }
}
