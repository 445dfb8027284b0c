//! Configuration loading and management
//!
//! Configuration only seeds a new session: the level curve and the task list.
//! Nothing is ever written back while playing.

mod io;
mod settings;

pub use settings::TaskConfig;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::progression::{Character, LevelCurve};
use crate::roster::{Task, TaskRoster};
use crate::session::Session;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Level curve and starting stats
    #[serde(default)]
    pub progression: LevelCurve,

    /// Task list (`[[task]]` tables). Absent means the built-in tasks.
    #[serde(default, rename = "task", skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<TaskConfig>>,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration to use.
    ///
    /// An explicit path must exist. Without one, `~/.questlog/config.toml` is used
    /// when present, otherwise the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            tracing::debug!("Loading config from {}", global_path.display());
            return Self::from_file(&global_path);
        }

        Ok(Self::default())
    }

    /// Check the level curve and task list
    pub fn validate(&self) -> Result<()> {
        if let Err(msg) = self.progression.validate() {
            bail!("Invalid [progression] section: {}", msg);
        }

        if let Some(tasks) = &self.tasks {
            let mut seen = HashSet::new();
            for task in tasks {
                if !seen.insert(task.id) {
                    bail!("Duplicate task id: {}", task.id);
                }
                if task.reward == 0 {
                    bail!("Task {} ({}) must have a reward of at least 1", task.id, task.title);
                }
                if task.title.trim().is_empty() {
                    bail!("Task {} has an empty title", task.id);
                }
            }
        }

        Ok(())
    }

    /// Tasks in display order, falling back to the built-in list
    pub fn task_list(&self) -> Vec<Task> {
        match &self.tasks {
            Some(tasks) => tasks.iter().map(TaskConfig::to_task).collect(),
            None => Task::seed(),
        }
    }

    pub fn roster(&self) -> Result<TaskRoster> {
        TaskRoster::new(self.task_list()).context("Invalid task list")
    }

    /// Start a fresh session from this configuration
    pub fn build_session(&self) -> Result<Session> {
        self.validate()?;
        let character = Character::new(self.progression);
        Ok(Session::new(character, self.roster()?))
    }
}
