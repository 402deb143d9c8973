/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulator errors with serialization support
///
/// Every variant is raised before a simulation produces output; a failed run
/// never returns partial results.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid input: {0}")]
    #[diagnostic(
        code(scheduler::validation),
        help("Arrival must be >= 0, burst and quantum must be > 0, and pids must be unique and positive.")
    )]
    Validation(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(scheduler::configuration),
        help("Use one of: FCFS, SJF, SRTF, RR, Priority_Preemptive, Priority_NonPreemptive.")
    )]
    Configuration(String),

    #[error("Insufficient data: {0}")]
    #[diagnostic(
        code(scheduler::insufficient_data),
        help("Statistics need at least one completed process. Run a simulation on a non-empty workload.")
    )]
    InsufficientData(String),
}

impl SchedulerError {
    /// Stable machine-readable name of the error kind
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Configuration(_) => "configuration_error",
            Self::InsufficientData(_) => "insufficient_data_error",
        }
    }
}

/// Serializable error representation for CLI and API output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SerializableError {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SerializableError {
    /// Create a new serializable error
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create a new serializable error with details
    pub fn with_details(
        error_type: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl From<SchedulerError> for SerializableError {
    fn from(err: SchedulerError) -> Self {
        let help = err.help().map(|h| h.to_string());
        let mut out = SerializableError::new(err.kind(), err.to_string());
        out.details = help;
        out
    }
}
