//! Process executor
//!
//! Runs engine invocations one at a time through an [`EnginePort`] and
//! classifies their outcome.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::model::*;
use crate::error::{SuperVideoError, SuperVideoResult};
use crate::ports::EnginePort;

/// Number of trailing diagnostic lines kept on failure
pub const DIAGNOSTIC_TAIL_LINES: usize = 3;

/// Runs and classifies engine invocations
#[derive(Clone)]
pub struct ProcessExecutor {
    engine: Arc<dyn EnginePort>,
}

impl ProcessExecutor {
    pub fn new(engine: Arc<dyn EnginePort>) -> Self {
        Self { engine }
    }

    /// Run `command`; a non-zero exit becomes an invocation error
    pub async fn run(&self, command: &TranscodeCommand) -> SuperVideoResult<ExecutionResult> {
        let result = self.run_unchecked(command).await?;
        classify(result)
    }

    /// Run `command` and return whatever it produced, regardless of exit status
    pub async fn run_unchecked(
        &self,
        command: &TranscodeCommand,
    ) -> SuperVideoResult<ExecutionResult> {
        debug!("Running: {}", command);
        let result = self.engine.invoke(command).await?;
        debug!(
            "Engine finished with {:?} in {:.2}s",
            result.exit_code,
            result.elapsed.as_secs_f64()
        );
        Ok(result)
    }

    /// Run `command` unless `target` already exists.
    ///
    /// An existing target is never overwritten; the invocation is skipped.
    pub async fn run_unless_exists(
        &self,
        command: &TranscodeCommand,
        target: &Path,
    ) -> SuperVideoResult<SplitOutcome> {
        if target.exists() {
            info!("{} already exists, skipping", target.display());
            return Ok(SplitOutcome::Skipped);
        }

        let result = self.run(command).await?;
        let size = output_size(target).await;
        Ok(SplitOutcome::Completed {
            size,
            elapsed: result.elapsed,
        })
    }
}

/// Turn a non-zero exit into an [`SuperVideoError::EngineInvocation`]
pub fn classify(result: ExecutionResult) -> SuperVideoResult<ExecutionResult> {
    if result.success() {
        return Ok(result);
    }

    let excerpt = result.diagnostic_tail(DIAGNOSTIC_TAIL_LINES);
    debug!(
        "Engine exited with {:?}: {}",
        result.exit_code,
        excerpt.join(" | ")
    );
    Err(SuperVideoError::EngineInvocation {
        exit_code: result.exit_code,
        excerpt,
    })
}

/// Size of a file written by the engine, 0 when it cannot be read
pub async fn output_size(path: &Path) -> u64 {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            warn!("Cannot stat {}: {}", path.display(), e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn result(exit_code: Option<i32>, stderr: &str) -> ExecutionResult {
        ExecutionResult {
            exit_code,
            stdout: Vec::new(),
            stderr: stderr.as_bytes().to_vec(),
            elapsed: Duration::from_millis(10),
        }
    }

    #[test]
    fn test_classify_success() {
        assert!(classify(result(Some(0), "")).is_ok());
    }

    #[test]
    fn test_classify_failure_keeps_tail() {
        let stderr = "ffmpeg version 6\nInput #0\nStream mapping:\n  Stream #0:0 -> #0:0\nout.mp4: Permission denied\n";
        match classify(result(Some(1), stderr)) {
            Err(SuperVideoError::EngineInvocation { exit_code, excerpt }) => {
                assert_eq!(exit_code, Some(1));
                assert_eq!(excerpt.len(), DIAGNOSTIC_TAIL_LINES);
                assert_eq!(excerpt.last().unwrap(), "out.mp4: Permission denied");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_classify_signal_termination() {
        assert!(matches!(
            classify(result(None, "")),
            Err(SuperVideoError::EngineInvocation { exit_code: None, .. })
        ));
    }
}
