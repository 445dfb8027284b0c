//! Character state and the experience / level-up state machine

use serde::Serialize;
use tracing::{debug, info};

use super::levels::LevelCurve;
use crate::error::{QuestError, Result};

/// A level up event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
    pub strength_gain: u32,
    pub agility_gain: u32,
    /// Threshold for the level just reached
    pub experience_to_next: u32,
}

/// Outcome of an experience gain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LevelUpResult {
    NoLevelUp,
    LeveledUp(LevelUp),
}

impl LevelUpResult {
    pub fn leveled_up(&self) -> bool {
        matches!(self, Self::LeveledUp(_))
    }

    pub fn level_up(&self) -> Option<&LevelUp> {
        match self {
            Self::LeveledUp(level_up) => Some(level_up),
            Self::NoLevelUp => None,
        }
    }
}

/// The player's character.
///
/// `experience` always stays below `experience_to_next`: a gain that reaches the
/// threshold levels up immediately and resets experience to zero. Any overshoot past
/// the threshold is dropped, so one gain is at most one level-up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    level: u32,
    experience: u32,
    experience_to_next: u32,
    strength: u32,
    agility: u32,
    #[serde(skip)]
    curve: LevelCurve,
}

impl Default for Character {
    fn default() -> Self {
        Self::new(LevelCurve::default())
    }
}

impl Character {
    /// Create a fresh character at the start of `curve`
    pub fn new(curve: LevelCurve) -> Self {
        Self {
            level: curve.starting_level.max(1),
            experience: 0,
            experience_to_next: curve.base_threshold.max(1),
            strength: curve.starting_stat,
            agility: curve.starting_stat,
            curve,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn experience_to_next(&self) -> u32 {
        self.experience_to_next
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn agility(&self) -> u32 {
        self.agility
    }

    /// Experience as shown in the stats panel, e.g. `60/100`
    pub fn experience_label(&self) -> String {
        format!("{}/{}", self.experience, self.experience_to_next)
    }

    /// Calculate progress percentage to next level (0.0 - 1.0)
    pub fn progress(&self) -> f32 {
        (self.experience as f32) / (self.experience_to_next as f32)
    }

    /// Add experience, leveling up once if the threshold is reached.
    ///
    /// Negative amounts, and amounts too large for the experience counter, are
    /// rejected with [`QuestError::InvalidArgument`] without touching state.
    pub fn gain_experience(&mut self, amount: i64) -> Result<LevelUpResult> {
        let amount = u32::try_from(amount).map_err(|_| {
            QuestError::InvalidArgument(format!(
                "experience amount must be between 0 and {}, got {}",
                u32::MAX,
                amount
            ))
        })?;

        let total = u64::from(self.experience) + u64::from(amount);
        if total >= u64::from(self.experience_to_next) {
            let level_up = self.level_up()?;
            info!(
                old_level = level_up.event.old_level,
                new_level = level_up.event.new_level,
                discarded = total - u64::from(level_up.old_threshold),
                "Level up"
            );
            return Ok(LevelUpResult::LeveledUp(level_up.event));
        }

        // total < experience_to_next, so it fits in u32
        self.experience = total as u32;
        debug!(amount, experience = self.experience, "Experience gained");
        Ok(LevelUpResult::NoLevelUp)
    }

    /// Apply one level-up. Fails without mutating if level or stats would overflow.
    fn level_up(&mut self) -> Result<AppliedLevelUp> {
        let old_level = self.level;
        let old_threshold = self.experience_to_next;
        let gain = self.curve.stat_gain;

        let overflow = |what: &str| {
            QuestError::InvalidArgument(format!("{} is already at its maximum", what))
        };
        let level = self.level.checked_add(1).ok_or_else(|| overflow("level"))?;
        let strength = self
            .strength
            .checked_add(gain)
            .ok_or_else(|| overflow("strength"))?;
        let agility = self
            .agility
            .checked_add(gain)
            .ok_or_else(|| overflow("agility"))?;

        self.level = level;
        self.strength = strength;
        self.agility = agility;
        self.experience_to_next = self.curve.next_threshold(old_threshold);
        self.experience = 0;

        Ok(AppliedLevelUp {
            old_threshold,
            event: LevelUp {
                old_level,
                new_level: self.level,
                strength_gain: gain,
                agility_gain: gain,
                experience_to_next: self.experience_to_next,
            },
        })
    }
}

struct AppliedLevelUp {
    old_threshold: u32,
    event: LevelUp,
}
