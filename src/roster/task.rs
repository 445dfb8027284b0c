use serde::{Deserialize, Serialize};

/// A single checklist task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// EXP granted when the task is completed and rewards are claimed
    pub reward: u32,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        reward: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            reward,
            completed: false,
        }
    }

    /// Reward as shown next to the task, e.g. `+20 EXP`
    pub fn reward_label(&self) -> String {
        format!("+{} EXP", self.reward)
    }

    /// The built-in daily tasks
    pub fn seed() -> Vec<Task> {
        vec![
            Task::new(1, "Morning Training", "Complete 10 push-ups", 20),
            Task::new(2, "Study Session", "Study for 30 minutes", 25),
            Task::new(3, "Meditation", "Meditate for 15 minutes", 15),
        ]
    }
}
