//! Questlog - a gamified task list
//!
//! Check off the day's tasks, then claim their combined experience. Enough
//! experience levels the character up, raising strength and agility and making the
//! next level harder to reach.
//!
//! ## Components
//!
//! 1. **Progression**: the [`Character`] and its experience / level-up rules.
//! 2. **Roster**: the fixed [`TaskRoster`] whose completed rewards feed progression.
//! 3. **Session**: owns both, runs the claim cycle and notifies listeners so any
//!    front end can render state and celebrate level-ups.

pub mod config;
pub mod error;
pub mod progression;
pub mod roster;
pub mod session;

pub use error::{QuestError, Result};
pub use progression::{Character, LevelCurve, LevelUp, LevelUpResult};
pub use roster::{Task, TaskRoster};
pub use session::{ClaimStatus, Session, SessionEvent, SessionSnapshot};
