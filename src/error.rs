use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::warn;

pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Hard errors raised for structurally invalid input. Domain-level
/// infeasibility (a task that cannot be placed) is never an error here; it is
/// reported through the returned log stream instead.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        details: Option<JsonValue>,
    },

    #[error("time arithmetic out of range: {0}")]
    TimeOutOfRange(String),

    #[error("{0}")]
    Other(String),
}

impl ScheduleError {
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "scheduler::validation", %message, "validation error");
        ScheduleError::Validation {
            message,
            details: None,
        }
    }

    pub fn validation_with_details(message: impl Into<String>, details: JsonValue) -> Self {
        let message = message.into();
        warn!(target: "scheduler::validation", %message, details = %details, "validation error with details");
        ScheduleError::Validation {
            message,
            details: Some(details),
        }
    }

    pub fn time_out_of_range(message: impl Into<String>) -> Self {
        ScheduleError::TimeOutOfRange(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        ScheduleError::Other(message.into())
    }
}
