use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-task counters, keyed by task name in [`QueueMetrics::tasks`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskStats {
    /// Successful executions.
    pub executed: u64,
    /// Failed executions.
    pub failed: u64,
    /// Sum of the durations of successful executions.
    pub total_duration: Duration,
    /// Last time the task ran, successful or not.
    pub last_run: Option<DateTime<Utc>>,
}

impl TaskStats {
    /// Mean duration of successful executions. Failures are not counted.
    pub fn mean_duration(&self) -> Option<Duration> {
        let runs = u32::try_from(self.executed).ok().filter(|&n| n > 0)?;
        Some(self.total_duration / runs)
    }
}

/// Cumulative counters for a [`TaskQueue`](crate::TaskQueue).
///
/// Survives [`reset`](crate::TaskQueue::reset) and successful drains. Entries
/// are keyed by task name and never evicted, so a queue that sees a fresh
/// name every cycle should drain them with
/// [`take_metrics`](crate::TaskQueue::take_metrics).
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueueMetrics {
    /// Number of `execute` calls that found work to do.
    pub runs: u64,
    pub tasks: HashMap<String, TaskStats>,
}

impl QueueMetrics {
    pub fn task(&self, name: &str) -> Option<&TaskStats> {
        self.tasks.get(name)
    }

    /// Record a successful task execution.
    pub fn record_execution(&mut self, task_name: &str, duration: Duration) {
        let stats = self.tasks.entry(task_name.to_string()).or_default();
        stats.executed += 1;
        stats.total_duration = stats.total_duration.saturating_add(duration);
        stats.last_run = Some(Utc::now());
    }

    /// Record a failed task execution.
    pub fn record_failure(&mut self, task_name: &str) {
        let stats = self.tasks.entry(task_name.to_string()).or_default();
        stats.failed += 1;
        stats.last_run = Some(Utc::now());
    }
}
