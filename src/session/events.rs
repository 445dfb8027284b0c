//! Notifications emitted to the presentation layer

use serde::Serialize;

use crate::progression::{Character, LevelUp};
use crate::roster::{Task, TaskRoster};

/// Label for the claim action when it can be used
pub const CLAIM_READY_LABEL: &str = "Gain Experience";

/// Label for the claim action while tasks remain
pub const CLAIM_BLOCKED_LABEL: &str = "Complete All Tasks to Gain Experience";

/// Whether rewards can be claimed right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClaimStatus {
    pub claimable: bool,
    pub completed: usize,
    pub total: usize,
}

impl ClaimStatus {
    pub fn for_roster(roster: &TaskRoster) -> Self {
        Self {
            claimable: roster.all_completed(),
            completed: roster.completed_count(),
            total: roster.len(),
        }
    }

    pub fn label(&self) -> &'static str {
        if self.claimable {
            CLAIM_READY_LABEL
        } else {
            CLAIM_BLOCKED_LABEL
        }
    }

    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }
}

/// Everything a renderer needs to redraw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub character: Character,
    pub tasks: Vec<Task>,
    pub claim: ClaimStatus,
}

/// Events that can happen during a session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Character or task state changed
    StatsChanged(SessionSnapshot),
    /// The character just leveled up; play the celebration
    LeveledUp(LevelUp),
}

/// Callback subscribed to session events
pub type Listener = Box<dyn FnMut(&SessionEvent)>;
