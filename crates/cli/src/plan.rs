//! TOML plans: named shell steps loaded into a [`TaskQueue`].

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use ordq_queue::{Position, QueueConfig, TaskQueue};

/// A plan file: optional queue config plus steps in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One shell step. At most one of `position`, `after` and `before` may be set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub command: String,
    #[serde(default)]
    pub position: Option<Placement>,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Head,
    Tail,
}

impl Step {
    /// Resolve where this step goes. Defaults to the tail.
    pub fn position(&self) -> Result<Position> {
        match (self.position, &self.after, &self.before) {
            (None, None, None) | (Some(Placement::Tail), None, None) => Ok(Position::Tail),
            (Some(Placement::Head), None, None) => Ok(Position::Head),
            (None, Some(anchor), None) => Ok(Position::After(anchor.clone())),
            (None, None, Some(anchor)) => Ok(Position::Before(anchor.clone())),
            _ => bail!(
                "step '{}' sets more than one of position/after/before",
                self.name
            ),
        }
    }
}

impl Plan {
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let mut plan: Self = toml::from_str(toml_str).context("invalid plan")?;
        plan.queue.apply_env_overrides();
        Ok(plan)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read plan {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Insert every step, in file order, into a fresh queue.
    pub fn build_queue(&self) -> Result<TaskQueue> {
        let queue = TaskQueue::with_config(self.queue.clone());
        for step in &self.steps {
            let position = step.position()?;
            let action = shell_action(&step.name, &step.command);
            queue
                .insert_at(&step.name, Box::new(action), position)
                .with_context(|| format!("failed to queue step '{}'", step.name))?;
        }
        debug!(queue = %self.queue.label, steps = queue.len(), "plan loaded");
        Ok(queue)
    }
}

/// Action that runs `command` through `sh -c` and fails on a non-zero exit.
fn shell_action(name: &str, command: &str) -> impl FnMut() -> Result<()> + Send + 'static {
    let name = name.to_string();
    let command = command.to_string();
    move || {
        info!(step = %name, command = %command, "running step");
        let status = Command::new("sh")
            .arg("-c")
            .arg(&command)
            .status()
            .with_context(|| format!("failed to spawn `{command}`"))?;
        if !status.success() {
            bail!("`{command}` exited with {status}");
        }
        Ok(())
    }
}
