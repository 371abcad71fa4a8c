//! Error types for scheduler operations.

use thiserror::Error;

use super::TaskId;

/// Errors produced by the scheduler itself, as opposed to task failures.
#[derive(Debug, Clone, Error)]
pub enum SchedulerError {
    /// A computation suspended with a payload; only bare suspension is accepted.
    #[error("protocol violation: task {task_id} suspended with payload {payload}")]
    ProtocolViolation {
        /// Task whose computation misbehaved.
        task_id: TaskId,
        /// The payload it tried to hand to the scheduler.
        payload: serde_json::Value,
    },
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Runtime adapter failure with context.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Errors raised by the bundled computations.
#[derive(Debug, Error)]
pub enum ComputationError {
    /// The searched sequence was exhausted without a match.
    #[error("not found")]
    NotFound,
    /// The computation was resumed after it had already finished.
    #[error("resumed after completion")]
    Finished,
    /// Writing progress output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
