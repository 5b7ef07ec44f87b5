//! Error handling module for SuperVideo

use thiserror::Error;

/// Main error type for SuperVideo operations
#[derive(Error, Debug)]
pub enum SuperVideoError {
    /// A required option is missing or invalid for the selected verb
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A line of the range file could not be parsed
    #[error("Malformed range entry on line {line}: '{content}' (expected BEGIN END FILENAME)")]
    Parse { line: usize, content: String },

    /// The engine exited with a non-zero status
    #[error("{}", describe_invocation_failure(.exit_code, .excerpt))]
    EngineInvocation {
        exit_code: Option<i32>,
        excerpt: Vec<String>,
    },

    /// The engine executable could not be located
    #[error("Transcoding engine not found: {name}")]
    EngineNotFound { name: String },

    /// The engine did not finish within the configured timeout
    #[error("Transcoding engine timed out after {seconds}s")]
    EngineTimeout { seconds: u64 },

    /// Configuration file could not be read or parsed
    #[error("Invalid configuration file {path}: {message}")]
    ConfigFile { path: String, message: String },

    /// Report serialization error
    #[error("Failed to serialize report: {message}")]
    Serialization { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SuperVideoError {
    /// Shorthand for a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        SuperVideoError::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error was raised before any engine invocation because of bad input
    pub fn is_configuration(&self) -> bool {
        matches!(self, SuperVideoError::Configuration { .. })
    }
}

fn describe_invocation_failure(exit_code: &Option<i32>, excerpt: &[String]) -> String {
    let status = match exit_code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    };

    match excerpt.last() {
        Some(line) => format!("Transcoding engine failed ({}): {}", status, line),
        None => format!("Transcoding engine failed ({})", status),
    }
}

/// Result type alias for SuperVideo operations
pub type SuperVideoResult<T> = std::result::Result<T, SuperVideoError>;
