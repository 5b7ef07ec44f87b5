// Domain rules - Validation applied before any side effect

use crate::domain::model::*;
use crate::error::{SuperVideoError, SuperVideoResult};
use crate::planner::range_file_path;

/// Checks an operation's verb-specific requirements
pub struct OperationValidator;

impl OperationValidator {
    /// Validate an operation; any failure is a configuration error and no engine
    /// invocation may follow it
    pub fn validate(operation: &Operation) -> SuperVideoResult<()> {
        Self::validate_inputs(operation)?;

        if operation.kind.requires_output() {
            operation.output()?;
        }

        match operation.kind {
            OperationKind::Split => Self::validate_range_file(operation),
            OperationKind::Timelapse => Self::validate_speed(operation.speed),
            OperationKind::Concat | OperationKind::Info => Ok(()),
        }
    }

    fn validate_inputs(operation: &Operation) -> SuperVideoResult<()> {
        let count = operation.inputs.len();
        match operation.kind {
            OperationKind::Concat if count == 0 => Err(SuperVideoError::configuration(
                "concat requires at least one input file",
            )),
            OperationKind::Concat => Ok(()),
            kind if count != 1 => Err(SuperVideoError::configuration(format!(
                "{} takes exactly one input file, got {}",
                kind, count
            ))),
            _ => Ok(()),
        }
    }

    fn validate_range_file(operation: &Operation) -> SuperVideoResult<()> {
        let ranges = range_file_path(operation.input()?);
        if !ranges.is_file() {
            return Err(SuperVideoError::configuration(format!(
                "split requires a range file at {}",
                ranges.display()
            )));
        }
        Ok(())
    }

    fn validate_speed(speed: f64) -> SuperVideoResult<()> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(SuperVideoError::configuration(format!(
                "--speed must be a positive number, got {}",
                speed
            )));
        }
        Ok(())
    }
}
