use tracing::{debug, warn};

use crate::error::QueueError;
use crate::task::TaskNode;

use super::core::QueueState;
use super::TaskQueue;

impl QueueState {
    /// Detach `name`, patching whichever neighbors exist and moving
    /// head/tail when an endpoint goes away.
    pub(super) fn unlink(&mut self, name: &str) -> Option<TaskNode> {
        let node = self.index.remove(name)?;

        match node.prev.as_deref() {
            Some(p) => {
                if let Some(prev_node) = self.index.get_mut(p) {
                    prev_node.next = node.next.clone();
                }
            }
            None => self.head = node.next.clone(),
        }
        match node.next.as_deref() {
            Some(n) => {
                if let Some(next_node) = self.index.get_mut(n) {
                    next_node.prev = node.prev.clone();
                }
            }
            None => self.tail = node.prev.clone(),
        }

        Some(node)
    }
}

impl TaskQueue {
    /// Remove a queued task. Removing an unknown name changes nothing.
    pub fn remove(&self, name: &str) -> Result<(), QueueError> {
        let mut state = self.lock();
        if state.unlink(name).is_some() {
            debug!(queue = %self.label(), task = %name, remaining = state.index.len(), "task removed");
            Ok(())
        } else {
            warn!(queue = %self.label(), task = %name, "remove of unknown task ignored");
            Err(QueueError::TaskNotFound(name.to_string()))
        }
    }

    /// Drop every queued task.
    pub fn reset(&self) {
        let mut state = self.lock();
        let dropped = state.index.len();
        state.clear();
        debug!(queue = %self.label(), dropped, "queue reset");
    }
}
