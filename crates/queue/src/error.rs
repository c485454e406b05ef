//! Queue error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("task name must not be empty")]
    EmptyName,

    #[error("anchor task not found: {0}")]
    AnchorNotFound(String),

    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("task '{name}' failed: {source}")]
    TaskFailed {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

impl QueueError {
    /// Whether the call was rejected before touching the queue.
    ///
    /// Rejected calls never mutate state. Only [`QueueError::TaskFailed`]
    /// reports work that actually ran.
    pub fn is_rejected(&self) -> bool {
        !matches!(self, QueueError::TaskFailed { .. })
    }

    /// Name of the task that failed during execution, if any.
    pub fn failed_task(&self) -> Option<&str> {
        match self {
            QueueError::TaskFailed { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
