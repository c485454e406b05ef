use tracing::{debug, warn};

use crate::error::QueueError;
use crate::task::{InsertOutcome, Position, TaskAction, TaskNode};

use super::core::QueueState;
use super::TaskQueue;

impl QueueState {
    /// Link a new task at `position`, or swap the action of an existing one.
    ///
    /// The existing-name check runs first for every position, so a replaced
    /// task keeps its place and its anchor is never consulted.
    pub(super) fn link(
        &mut self,
        name: &str,
        action: TaskAction,
        position: &Position,
    ) -> Result<InsertOutcome, QueueError> {
        if let Some(node) = self.index.get_mut(name) {
            node.action = action;
            return Ok(InsertOutcome::Replaced);
        }

        let (prev, next) = match position {
            Position::Head => (None, self.head.clone()),
            Position::Tail => (self.tail.clone(), None),
            Position::After(anchor) => {
                let node = self
                    .index
                    .get(anchor)
                    .ok_or_else(|| QueueError::AnchorNotFound(anchor.clone()))?;
                (Some(anchor.clone()), node.next.clone())
            }
            Position::Before(anchor) => {
                let node = self
                    .index
                    .get(anchor)
                    .ok_or_else(|| QueueError::AnchorNotFound(anchor.clone()))?;
                (node.prev.clone(), Some(anchor.clone()))
            }
        };

        match prev.as_deref() {
            Some(p) => {
                if let Some(prev_node) = self.index.get_mut(p) {
                    prev_node.next = Some(name.to_string());
                }
            }
            None => self.head = Some(name.to_string()),
        }
        match next.as_deref() {
            Some(n) => {
                if let Some(next_node) = self.index.get_mut(n) {
                    next_node.prev = Some(name.to_string());
                }
            }
            None => self.tail = Some(name.to_string()),
        }

        let mut node = TaskNode::new(action);
        node.prev = prev;
        node.next = next;
        self.index.insert(name.to_string(), node);

        Ok(InsertOutcome::Inserted)
    }
}

impl TaskQueue {
    /// Insert `name` at `position`.
    ///
    /// If `name` is already queued its action is replaced and its position
    /// is left unchanged. Rejected calls (empty name, missing anchor) leave
    /// the queue untouched.
    pub fn insert_at(
        &self,
        name: &str,
        action: TaskAction,
        position: Position,
    ) -> Result<InsertOutcome, QueueError> {
        if name.is_empty() {
            warn!(queue = %self.label(), "rejected insert with empty task name");
            return Err(QueueError::EmptyName);
        }

        let mut state = self.lock();
        match state.link(name, action, &position) {
            Ok(outcome) => {
                debug!(queue = %self.label(), task = %name, ?position, ?outcome, "task queued");
                Ok(outcome)
            }
            Err(e) => {
                warn!(queue = %self.label(), task = %name, error = %e, "rejected insert");
                Err(e)
            }
        }
    }

    /// Append a task at the end of the queue.
    pub fn insert_tail<F>(&self, name: &str, action: F) -> Result<InsertOutcome, QueueError>
    where
        F: FnMut() -> anyhow::Result<()> + Send + 'static,
    {
        self.insert_at(name, Box::new(action), Position::Tail)
    }

    /// Prepend a task at the front of the queue.
    pub fn insert_head<F>(&self, name: &str, action: F) -> Result<InsertOutcome, QueueError>
    where
        F: FnMut() -> anyhow::Result<()> + Send + 'static,
    {
        self.insert_at(name, Box::new(action), Position::Head)
    }

    /// Insert a task immediately after `after_name`.
    pub fn insert_after<F>(
        &self,
        name: &str,
        action: F,
        after_name: &str,
    ) -> Result<InsertOutcome, QueueError>
    where
        F: FnMut() -> anyhow::Result<()> + Send + 'static,
    {
        self.insert_at(name, Box::new(action), Position::After(after_name.to_string()))
    }

    /// Insert a task immediately before `before_name`.
    pub fn insert_before<F>(
        &self,
        name: &str,
        action: F,
        before_name: &str,
    ) -> Result<InsertOutcome, QueueError>
    where
        F: FnMut() -> anyhow::Result<()> + Send + 'static,
    {
        self.insert_at(name, Box::new(action), Position::Before(before_name.to_string()))
    }
}
