use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use crate::error::QueueError;
use crate::task::ExecutionReport;

use super::TaskQueue;

impl TaskQueue {
    /// Run every queued task in order, holding the lock throughout.
    ///
    /// Each task is unlinked as soon as its action succeeds. On the first
    /// failure execution halts: the failing task stays at the head, followed
    /// by everything that did not run, and the error names it. A later call
    /// resumes from the failing task. On full success the queue is empty.
    pub fn execute(&self) -> Result<ExecutionReport, QueueError> {
        let started = Instant::now();
        let mut state = self.lock();
        let mut report = ExecutionReport::default();

        if !state.is_populated() {
            debug!(queue = %self.label(), "execute on empty queue");
            return Ok(report);
        }

        state.metrics.runs += 1;
        info!(queue = %self.label(), tasks = state.index.len(), "executing task queue");

        while let Some(name) = state.head.clone() {
            let Some(node) = state.index.get_mut(&name) else {
                break;
            };

            let task_started = Instant::now();
            let result = (node.action)();
            let elapsed = task_started.elapsed();

            if let Err(source) = result {
                state.metrics.record_failure(&name);
                error!(
                    queue = %self.label(),
                    task = %name,
                    error = %source,
                    remaining = state.index.len(),
                    "task failed, halting queue"
                );
                return Err(QueueError::TaskFailed { name, source });
            }

            self.warn_if_slow(&name, elapsed);
            state.metrics.record_execution(&name, elapsed);
            state.unlink(&name);
            report.executed.push(name);
        }

        state.clear();
        report.duration = started.elapsed();
        info!(
            queue = %self.label(),
            executed = report.executed.len(),
            duration_ms = report.duration.as_millis() as u64,
            "task queue drained"
        );
        Ok(report)
    }

    fn warn_if_slow(&self, name: &str, elapsed: Duration) {
        if let Some(threshold) = self.config.slow_task_threshold() {
            if elapsed > threshold {
                warn!(
                    queue = %self.label(),
                    task = %name,
                    elapsed_ms = elapsed.as_millis() as u64,
                    threshold_ms = self.config.slow_task_warn_ms,
                    "slow task"
                );
            }
        }
    }
}
