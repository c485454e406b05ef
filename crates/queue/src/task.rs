use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// A fallible, zero-argument unit of work held by the queue.
///
/// Actions run under the queue lock and must not call back into the
/// [`TaskQueue`](crate::TaskQueue) that is executing them.
pub type TaskAction = Box<dyn FnMut() -> anyhow::Result<()> + Send>;

/// Where a new task is linked into the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    Head,
    Tail,
    /// Immediately after the named anchor task.
    After(String),
    /// Immediately before the named anchor task.
    Before(String),
}

/// What an insert call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new task was linked in.
    Inserted,
    /// The name already existed; its action was swapped, position kept.
    Replaced,
}

/// A task entry in the queue arena.
///
/// Neighbors are referenced by name and resolved through the index.
pub(crate) struct TaskNode {
    pub(crate) action: TaskAction,
    pub(crate) prev: Option<String>,
    pub(crate) next: Option<String>,
}

impl TaskNode {
    pub(crate) fn new(action: TaskAction) -> Self {
        Self { action, prev: None, next: None }
    }
}

impl fmt::Debug for TaskNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskNode")
            .field("prev", &self.prev)
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

/// Result of a fully successful [`execute`](crate::TaskQueue::execute).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExecutionReport {
    /// Names of the tasks that ran, in execution order.
    pub executed: Vec<String>,
    /// Wall-clock time spent in `execute`.
    pub duration: Duration,
}

impl ExecutionReport {
    pub fn is_empty(&self) -> bool {
        self.executed.is_empty()
    }
}
