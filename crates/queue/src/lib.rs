//! In-process ordered task queue.
//!
//! A [`TaskQueue`] holds named, fallible, zero-argument actions in a
//! caller-controlled order (head, tail, or relative to another task) and
//! runs them once, in that order, when [`TaskQueue::execute`] is called.

pub mod config;
pub mod error;
pub mod metrics;
pub mod queue;
pub mod task;

pub use config::QueueConfig;
pub use error::{ConfigError, QueueError};
pub use metrics::{QueueMetrics, TaskStats};
pub use queue::TaskQueue;
pub use task::{ExecutionReport, InsertOutcome, Position, TaskAction};
