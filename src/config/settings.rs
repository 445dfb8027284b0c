//! Task configuration types

use serde::{Deserialize, Serialize};

use crate::roster::Task;

/// One `[[task]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskConfig {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub reward: u32,
}

impl TaskConfig {
    pub fn to_task(&self) -> Task {
        Task::new(self.id, &self.title, &self.description, self.reward)
    }
}

impl From<&Task> for TaskConfig {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            reward: task.reward,
        }
    }
}
