//! Task roster
//!
//! A fixed, ordered list of tasks. Tasks are never added or removed after the
//! roster is built; only their completion flags change.

mod task;

pub use task::Task;

use std::collections::HashSet;

use tracing::debug;

use crate::error::{QuestError, Result};

/// Ordered collection of tasks with unique ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRoster {
    tasks: Vec<Task>,
}

impl Default for TaskRoster {
    fn default() -> Self {
        Self {
            tasks: Task::seed(),
        }
    }
}

impl TaskRoster {
    /// Build a roster, rejecting duplicate ids and zero rewards.
    pub fn new(tasks: Vec<Task>) -> Result<Self> {
        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.id) {
                return Err(QuestError::InvalidArgument(format!(
                    "duplicate task id {}",
                    task.id
                )));
            }
            if task.reward == 0 {
                return Err(QuestError::InvalidArgument(format!(
                    "task {} must have a positive reward",
                    task.id
                )));
            }
        }
        Ok(Self { tasks })
    }

    /// Tasks in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Flip the completion flag of task `id`, returning the new flag.
    pub fn toggle(&mut self, id: u32) -> Result<bool> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(QuestError::NotFound { id })?;

        task.completed = !task.completed;
        debug!(id, completed = task.completed, "Task toggled");
        Ok(task.completed)
    }

    /// True when every task is completed (vacuously true for an empty roster)
    pub fn all_completed(&self) -> bool {
        self.tasks.iter().all(|t| t.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Sum of rewards over completed tasks
    pub fn total_reward(&self) -> u32 {
        self.tasks
            .iter()
            .filter(|t| t.completed)
            .fold(0u32, |sum, t| sum.saturating_add(t.reward))
    }

    /// Mark every task incomplete
    pub fn reset_all(&mut self) {
        for task in &mut self.tasks {
            task.completed = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_roster() {
        let roster = TaskRoster::default();
        assert_eq!(roster.len(), 3);
        let ids: Vec<u32> = roster.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let rewards: Vec<u32> = roster.tasks().iter().map(|t| t.reward).collect();
        assert_eq!(rewards, vec![20, 25, 15]);
        assert!(roster.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn test_all_completed_only_after_every_task() {
        let mut roster = TaskRoster::default();
        assert!(!roster.all_completed());

        roster.toggle(1).unwrap();
        roster.toggle(2).unwrap();
        assert!(!roster.all_completed());

        roster.toggle(3).unwrap();
        assert!(roster.all_completed());

        // Unchecking one breaks it again
        roster.toggle(2).unwrap();
        assert!(!roster.all_completed());
    }

    #[test]
    fn test_total_reward_counts_completed_only() {
        let mut roster = TaskRoster::default();
        assert_eq!(roster.total_reward(), 0);

        roster.toggle(2).unwrap();
        assert_eq!(roster.total_reward(), 25);

        roster.toggle(1).unwrap();
        roster.toggle(3).unwrap();
        assert_eq!(roster.total_reward(), 60);
        assert_eq!(roster.completed_count(), 3);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut roster = TaskRoster::default();
        assert!(roster.toggle(1).unwrap());
        assert!(!roster.toggle(1).unwrap());
        assert_eq!(roster, TaskRoster::default());
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut roster = TaskRoster::default();
        roster.toggle(2).unwrap();
        let before = roster.clone();

        let err = roster.toggle(42).unwrap_err();
        assert_eq!(err, QuestError::NotFound { id: 42 });
        assert_eq!(roster, before);
    }

    #[test]
    fn test_reset_all() {
        let mut roster = TaskRoster::default();
        roster.toggle(1).unwrap();
        roster.toggle(3).unwrap();
        roster.reset_all();
        assert_eq!(roster.completed_count(), 0);
        assert_eq!(roster.total_reward(), 0);
    }

    #[test]
    fn test_empty_roster_is_vacuously_complete() {
        let roster = TaskRoster::new(Vec::new()).unwrap();
        assert!(roster.is_empty());
        assert!(roster.all_completed());
        assert_eq!(roster.total_reward(), 0);
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let tasks = vec![Task::new(1, "A", "a", 5), Task::new(1, "B", "b", 5)];
        assert!(matches!(
            TaskRoster::new(tasks),
            Err(QuestError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_new_rejects_zero_reward() {
        let tasks = vec![Task::new(1, "A", "a", 0)];
        assert!(matches!(
            TaskRoster::new(tasks),
            Err(QuestError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_reward_label() {
        let roster = TaskRoster::default();
        assert_eq!(roster.get(1).unwrap().reward_label(), "+20 EXP");
        assert!(roster.get(9).is_none());
    }
}
