use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::warn;

use crate::config::QueueConfig;
use crate::metrics::QueueMetrics;
use crate::task::TaskNode;

/// Linked task arena guarded by the queue lock.
///
/// Either fully empty (no head, no tail, empty index) or fully linked.
#[derive(Debug, Default)]
pub(super) struct QueueState {
    pub(super) head: Option<String>,
    pub(super) tail: Option<String>,
    /// Every linked task, keyed by name.
    pub(super) index: HashMap<String, TaskNode>,
    pub(super) metrics: QueueMetrics,
}

impl QueueState {
    pub(super) fn is_populated(&self) -> bool {
        self.head.is_some() && self.tail.is_some() && !self.index.is_empty()
    }

    /// Walk head to tail. Bounded by the index size so a broken link can
    /// never loop forever.
    pub(super) fn names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.index.len());
        let mut cursor = self.head.as_deref();
        while let Some(name) = cursor {
            if names.len() == self.index.len() {
                break;
            }
            let Some(node) = self.index.get(name) else {
                break;
            };
            names.push(name.to_string());
            cursor = node.next.as_deref();
        }
        names
    }

    /// Drop every task. Metrics are kept.
    pub(super) fn clear(&mut self) {
        self.head = None;
        self.tail = None;
        self.index.clear();
    }
}

/// An ordered registry of named tasks, executed once in list order.
///
/// All structural changes and the whole of [`execute`](TaskQueue::execute)
/// run under one exclusive lock, so the queue can be shared across threads
/// behind an `Arc`. Task actions run while that lock is held: an action must
/// never call back into the queue that is executing it.
#[derive(Debug)]
pub struct TaskQueue {
    pub(super) config: QueueConfig,
    pub(super) state: Mutex<QueueState>,
}

impl TaskQueue {
    /// Create an empty queue with default config.
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    /// Create an empty queue with the given config.
    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            config,
            state: Mutex::new(QueueState::default()),
        }
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    pub(super) fn label(&self) -> &str {
        &self.config.label
    }

    /// Acquire the queue lock.
    ///
    /// A panicking action poisons the mutex. Tasks are unlinked only after
    /// their action returns, so the arena is still consistent and the guard
    /// is recovered.
    pub(super) fn lock(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!(queue = %self.label(), "task panicked during execute, recovering queue state");
            self.state.clear_poison();
            poisoned.into_inner()
        })
    }

    /// True iff head and tail are both set and the index is non-empty.
    pub fn is_populated(&self) -> bool {
        self.lock().is_populated()
    }

    pub fn is_empty(&self) -> bool {
        !self.is_populated()
    }

    pub fn len(&self) -> usize {
        self.lock().index.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().index.contains_key(name)
    }

    /// Task names in execution order.
    pub fn names(&self) -> Vec<String> {
        self.lock().names()
    }

    /// Snapshot of the cumulative execution metrics.
    pub fn metrics(&self) -> QueueMetrics {
        self.lock().metrics.clone()
    }

    /// Return the metrics gathered so far and start over from zero.
    ///
    /// Metrics are keyed by task name and outlive the tasks themselves;
    /// callers that use a new name per cycle drain them with this.
    pub fn take_metrics(&self) -> QueueMetrics {
        std::mem::take(&mut self.lock().metrics)
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}
