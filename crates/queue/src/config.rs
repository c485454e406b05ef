use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Queue configuration, typically parsed from the `[queue]` table of a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Label attached to every log event emitted by the queue.
    #[serde(default = "default_label")]
    pub label: String,
    /// Tasks running longer than this are logged at warn level. 0 = disabled.
    #[serde(default = "default_slow_task_warn_ms")]
    pub slow_task_warn_ms: u64,
}

fn default_label() -> String { "default".to_string() }
fn default_slow_task_warn_ms() -> u64 { 1000 }

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            slow_task_warn_ms: default_slow_task_warn_ms(),
        }
    }
}

impl QueueConfig {
    /// Parse config from a TOML string, then apply env overrides.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(toml_str)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load config from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Defaults with env overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Threshold above which a task is reported as slow.
    pub fn slow_task_threshold(&self) -> Option<Duration> {
        if self.slow_task_warn_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.slow_task_warn_ms))
        }
    }

    /// Override fields from `ORDQ_*` environment variables.
    ///
    /// Unparseable numeric values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("ORDQ_LABEL") {
            if !v.is_empty() {
                self.label = v;
            }
        }
        if let Ok(v) = std::env::var("ORDQ_SLOW_TASK_MS") {
            if let Ok(ms) = v.parse::<u64>() {
                self.slow_task_warn_ms = ms;
            }
        }
    }
}
