// Ports - Interface definitions (contracts)

use async_trait::async_trait;

use crate::domain::model::*;
use crate::error::SuperVideoResult;

/// Port for running the external transcoding engine
#[async_trait]
pub trait EnginePort: Send + Sync {
    /// Run one invocation to completion and capture its streams and exit status.
    ///
    /// A non-zero exit is not an error at this level; classification happens in
    /// the executor. Errors are reserved for failures to spawn or wait.
    async fn invoke(&self, command: &TranscodeCommand) -> SuperVideoResult<ExecutionResult>;
}
