//! FFmpeg execution adapter
//!
//! Spawns the ffmpeg binary with an explicit argument vector, buffers both
//! output streams and measures wall-clock time around the call.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::model::*;
use crate::error::{SuperVideoError, SuperVideoResult};
use crate::ports::EnginePort;

/// Executable name looked up on `PATH` when none is configured
pub const DEFAULT_ENGINE: &str = "ffmpeg";

/// FFmpeg-based execution adapter
#[derive(Debug, Clone)]
pub struct FFmpegAdapter {
    timeout: Option<Duration>,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter; `None` waits for the engine indefinitely
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// Resolve the engine executable from a configured path or `PATH`
    pub fn locate(configured: Option<&Path>) -> SuperVideoResult<PathBuf> {
        let candidate = configured.unwrap_or_else(|| Path::new(DEFAULT_ENGINE));

        let resolved = which::which(candidate).map_err(|e| {
            debug!("Engine lookup for {} failed: {}", candidate.display(), e);
            SuperVideoError::EngineNotFound {
                name: candidate.display().to_string(),
            }
        })?;

        debug!("Using engine at {}", resolved.display());
        Ok(resolved)
    }
}

#[async_trait]
impl EnginePort for FFmpegAdapter {
    async fn invoke(&self, command: &TranscodeCommand) -> SuperVideoResult<ExecutionResult> {
        let started = Instant::now();

        let child = Command::new(&command.executable)
            .args(&command.arguments)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => SuperVideoError::EngineNotFound {
                    name: command.executable.display().to_string(),
                },
                _ => SuperVideoError::IoError(e),
            })?;

        // Dropping the pending future on timeout kills the child
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| SuperVideoError::EngineTimeout {
                    seconds: limit.as_secs(),
                })??,
            None => child.wait_with_output().await?,
        };

        Ok(ExecutionResult {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
            elapsed: started.elapsed(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell(script: &str) -> TranscodeCommand {
        TranscodeCommand::new("sh").args(["-c", script])
    }

    #[tokio::test]
    async fn test_captures_streams_and_status() {
        let adapter = FFmpegAdapter::new(None);
        let result = adapter
            .invoke(&shell("echo out; echo err >&2; exit 3"))
            .await
            .unwrap();

        assert_eq!(result.exit_code, Some(3));
        assert_eq!(String::from_utf8_lossy(&result.stdout), "out\n");
        assert_eq!(result.diagnostics(), "err\n");
    }

    #[tokio::test]
    async fn test_missing_executable_is_engine_not_found() {
        let adapter = FFmpegAdapter::new(None);
        let err = adapter
            .invoke(&TranscodeCommand::new("/nonexistent/supervideo-engine"))
            .await
            .unwrap_err();
        assert!(matches!(err, SuperVideoError::EngineNotFound { .. }));
    }

    #[tokio::test]
    async fn test_timeout_is_reported() {
        let adapter = FFmpegAdapter::new(Some(Duration::from_millis(100)));
        let err = adapter.invoke(&shell("sleep 5")).await.unwrap_err();
        assert!(matches!(err, SuperVideoError::EngineTimeout { .. }));
    }

    #[test]
    fn test_locate_rejects_missing_engine() {
        let err = FFmpegAdapter::locate(Some(Path::new("/nonexistent/ffmpeg"))).unwrap_err();
        assert!(matches!(err, SuperVideoError::EngineNotFound { .. }));
    }

    #[test]
    fn test_locate_finds_executable_on_path() {
        assert!(FFmpegAdapter::locate(Some(Path::new("sh"))).is_ok());
    }
}
