use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

/// One entry of the engine's diagnostic stream. Entries carry a fully
/// rendered message and are append-only; construction mirrors the entry onto
/// the `tracing` pipeline for operators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        let message = message.into();
        info!(target: "scheduler::run", %message);
        LogEntry {
            level: LogLevel::Info,
            message,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "scheduler::run", %message);
        LogEntry {
            level: LogLevel::Warning,
            message,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "scheduler::run", %message);
        LogEntry {
            level: LogLevel::Error,
            message,
        }
    }
}
