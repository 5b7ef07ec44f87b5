//! Command dispatch

use tracing::info;

use crate::app::AppContainer;
use crate::config_initialization::Settings;
use crate::domain::model::*;
use crate::domain::rules::OperationValidator;
use crate::error::SuperVideoResult;
use crate::output::{ConsoleProgress, ReportWriter};

/// How a dispatched operation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Everything completed
    Success,
    /// Split ran to the end but some entries failed or were malformed
    Incomplete,
}

/// Validate, wire the production engine, and run one operation
pub async fn execute(
    operation: &Operation,
    settings: &Settings,
    writer: &ReportWriter,
) -> SuperVideoResult<RunStatus> {
    OperationValidator::validate(operation)?;
    let container = AppContainer::new(settings)?;
    dispatch(operation, &container, writer).await
}

/// Run one operation with the given container.
///
/// Validation happens first; an invalid operation never reaches the engine.
pub async fn dispatch(
    operation: &Operation,
    container: &AppContainer,
    writer: &ReportWriter,
) -> SuperVideoResult<RunStatus> {
    OperationValidator::validate(operation)?;
    info!("Executing {} command", operation.kind);

    match operation.kind {
        OperationKind::Split => {
            let mut progress = ConsoleProgress::new(writer);
            let summary = container
                .split_interactor()
                .execute(operation, &mut progress)
                .await?;
            println!("{}", writer.split_summary(&summary));

            Ok(if summary.is_clean() {
                RunStatus::Success
            } else {
                RunStatus::Incomplete
            })
        }
        OperationKind::Concat => {
            let outcome = container.concat_interactor().execute(operation).await?;
            println!("{}", writer.render_outcome(operation.kind, &outcome));
            Ok(RunStatus::Success)
        }
        OperationKind::Timelapse => {
            let outcome = container.timelapse_interactor().execute(operation).await?;
            println!("{}", writer.render_outcome(operation.kind, &outcome));
            Ok(RunStatus::Success)
        }
        OperationKind::Info => {
            let report = container.info_interactor().execute(operation).await?;
            println!("{}", writer.media_report(&report)?);
            Ok(RunStatus::Success)
        }
    }
}
