//! Session: one character and one task roster, driven by user commands
//!
//! The session is the only place the two components meet. It validates commands,
//! runs the claim cycle and tells subscribed listeners what changed.
//!
//! # Usage
//!
//! ```ignore
//! let mut session = Session::default();
//! session.subscribe(|event| println!("{event:?}"));
//!
//! for id in [1, 2, 3] {
//!     session.toggle_task(id)?;
//! }
//! let result = session.claim_rewards()?;
//! ```

mod events;

pub use events::{
    ClaimStatus, Listener, SessionEvent, SessionSnapshot, CLAIM_BLOCKED_LABEL, CLAIM_READY_LABEL,
};

use tracing::{info, warn};

use crate::error::{QuestError, Result};
use crate::progression::{Character, LevelUpResult};
use crate::roster::{Task, TaskRoster};

/// Per-session game state plus its listeners
pub struct Session {
    character: Character,
    roster: TaskRoster,
    listeners: Vec<Listener>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Character::default(), TaskRoster::default())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("character", &self.character)
            .field("roster", &self.roster)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Session {
    pub fn new(character: Character, roster: TaskRoster) -> Self {
        Self {
            character,
            roster,
            listeners: Vec::new(),
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn roster(&self) -> &TaskRoster {
        &self.roster
    }

    /// Tasks in display order
    pub fn tasks(&self) -> &[Task] {
        self.roster.tasks()
    }

    pub fn claim_status(&self) -> ClaimStatus {
        ClaimStatus::for_roster(&self.roster)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            character: self.character.clone(),
            tasks: self.roster.tasks().to_vec(),
            claim: self.claim_status(),
        }
    }

    /// Register a listener for every subsequent event
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&SessionEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Toggle a task's completion, returning its new state
    pub fn toggle_task(&mut self, id: u32) -> Result<bool> {
        let completed = self.roster.toggle(id).inspect_err(|e| {
            warn!("Toggle rejected: {}", e);
        })?;
        self.notify_stats_changed();
        Ok(completed)
    }

    /// Claim the rewards of a fully completed roster.
    ///
    /// Adds the summed rewards to the character and resets every task. Fails with
    /// [`QuestError::PreconditionFailed`] while any task is incomplete, leaving all
    /// state unchanged.
    pub fn claim_rewards(&mut self) -> Result<LevelUpResult> {
        let status = self.claim_status();
        if !status.claimable {
            let err = QuestError::PreconditionFailed {
                remaining: status.remaining(),
            };
            warn!("Claim rejected: {}", err);
            return Err(err);
        }

        let reward = self.roster.total_reward();
        let result = self.character.gain_experience(i64::from(reward))?;
        self.roster.reset_all();

        info!(
            reward,
            level = self.character.level(),
            experience = %self.character.experience_label(),
            "Rewards claimed"
        );

        if let LevelUpResult::LeveledUp(level_up) = &result {
            self.emit(&SessionEvent::LeveledUp(level_up.clone()));
        }
        self.notify_stats_changed();

        Ok(result)
    }

    fn notify_stats_changed(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let event = SessionEvent::StatsChanged(self.snapshot());
        self.emit(&event);
    }

    fn emit(&mut self, event: &SessionEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorded(session: &mut Session) -> Rc<RefCell<Vec<SessionEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        session.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        events
    }

    fn complete_all(session: &mut Session) {
        let ids: Vec<u32> = session.tasks().iter().map(|t| t.id).collect();
        for id in ids {
            session.toggle_task(id).unwrap();
        }
    }

    #[test]
    fn test_claim_without_level_up() {
        let mut session = Session::default();
        complete_all(&mut session);

        let result = session.claim_rewards().unwrap();
        assert_eq!(result, LevelUpResult::NoLevelUp);
        assert_eq!(session.character().experience(), 60);
        assert!(session.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn test_claim_rejected_while_incomplete() {
        let mut session = Session::default();
        session.toggle_task(1).unwrap();
        let before = session.snapshot();

        let err = session.claim_rewards().unwrap_err();
        assert_eq!(err, QuestError::PreconditionFailed { remaining: 2 });
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_toggle_emits_stats_changed() {
        let mut session = Session::default();
        let events = recorded(&mut session);

        session.toggle_task(2).unwrap();

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        match &events[0] {
            SessionEvent::StatsChanged(snapshot) => {
                assert!(snapshot.tasks[1].completed);
                assert_eq!(snapshot.claim.completed, 1);
                assert!(!snapshot.claim.claimable);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_rejected_commands_emit_nothing() {
        let mut session = Session::default();
        let events = recorded(&mut session);

        assert!(session.toggle_task(99).is_err());
        assert!(session.claim_rewards().is_err());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_level_up_emits_celebration_before_stats() {
        let mut session = Session::default();
        complete_all(&mut session);
        session.claim_rewards().unwrap();
        complete_all(&mut session);

        let events = recorded(&mut session);
        let result = session.claim_rewards().unwrap();
        assert!(result.leveled_up());

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], SessionEvent::LeveledUp(l) if l.new_level == 2));
        match &events[1] {
            SessionEvent::StatsChanged(snapshot) => {
                assert_eq!(snapshot.character.level(), 2);
                assert_eq!(snapshot.claim.completed, 0);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_claim_status_labels() {
        let mut session = Session::default();
        assert_eq!(session.claim_status().label(), CLAIM_BLOCKED_LABEL);
        complete_all(&mut session);
        assert_eq!(session.claim_status().label(), CLAIM_READY_LABEL);
    }

    #[test]
    fn test_empty_roster_claims_zero() {
        let roster = TaskRoster::new(Vec::new()).unwrap();
        let mut session = Session::new(Character::default(), roster);

        let result = session.claim_rewards().unwrap();
        assert_eq!(result, LevelUpResult::NoLevelUp);
        assert_eq!(session.character().experience(), 0);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = Session::default();
        let second = Session::default();
        complete_all(&mut first);
        first.claim_rewards().unwrap();

        assert_eq!(first.character().experience(), 60);
        assert_eq!(second.character().experience(), 0);
    }

    #[test]
    fn test_event_json_shape() {
        let session = Session::default();
        let event = SessionEvent::StatsChanged(session.snapshot());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "stats_changed");
        assert_eq!(json["data"]["character"]["experience_to_next"], 100);
        assert_eq!(json["data"]["tasks"][0]["title"], "Morning Training");
    }
}
