//! Character progression: experience, levels and stats
//!
//! A [`Character`] accumulates experience against a threshold. Reaching the
//! threshold levels the character up, raises strength and agility, and grows the
//! next threshold along its [`LevelCurve`].

mod character;
mod levels;

pub use character::{Character, LevelUp, LevelUpResult};
pub use levels::LevelCurve;
