//! Level curve
//!
//! Defines the starting character values and how thresholds and stats grow per level.

use serde::{Deserialize, Serialize};

/// Tuning for character progression.
///
/// The defaults reproduce the classic curve: start at level 1 with 10 strength and
/// agility, need 100 EXP for the first level-up, then 1.5x more for each one after.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelCurve {
    #[serde(default = "default_starting_level")]
    pub starting_level: u32,

    /// Initial strength and agility
    #[serde(default = "default_starting_stat")]
    pub starting_stat: u32,

    /// EXP needed to leave the starting level
    #[serde(default = "default_base_threshold")]
    pub base_threshold: u32,

    /// Multiplier applied (then floored) to the threshold on every level-up
    #[serde(default = "default_threshold_growth")]
    pub threshold_growth: f64,

    /// Strength and agility added per level-up
    #[serde(default = "default_stat_gain")]
    pub stat_gain: u32,
}

fn default_starting_level() -> u32 {
    1
}

fn default_starting_stat() -> u32 {
    10
}

fn default_base_threshold() -> u32 {
    100
}

fn default_threshold_growth() -> f64 {
    1.5
}

fn default_stat_gain() -> u32 {
    5
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self {
            starting_level: default_starting_level(),
            starting_stat: default_starting_stat(),
            base_threshold: default_base_threshold(),
            threshold_growth: default_threshold_growth(),
            stat_gain: default_stat_gain(),
        }
    }
}

impl LevelCurve {
    /// Threshold for the level after one with `current` as its threshold.
    ///
    /// `floor(current * threshold_growth)`, clamped so it never shrinks and never
    /// leaves the `u32` range.
    pub fn next_threshold(&self, current: u32) -> u32 {
        let grown = (f64::from(current) * self.threshold_growth).floor();
        if !grown.is_finite() || grown >= f64::from(u32::MAX) {
            return u32::MAX;
        }
        (grown as u32).max(current)
    }

    /// Check the curve describes a valid progression.
    pub fn validate(&self) -> Result<(), String> {
        if self.starting_level == 0 {
            return Err("starting_level must be at least 1".to_string());
        }
        if self.base_threshold == 0 {
            return Err("base_threshold must be at least 1".to_string());
        }
        if !self.threshold_growth.is_finite() || self.threshold_growth < 1.0 {
            return Err(format!(
                "threshold_growth must be a finite number >= 1.0, got {}",
                self.threshold_growth
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_growth() {
        let curve = LevelCurve::default();
        assert_eq!(curve.next_threshold(100), 150);
        assert_eq!(curve.next_threshold(150), 225);
        assert_eq!(curve.next_threshold(225), 337); // floor(337.5)
        assert_eq!(curve.next_threshold(337), 505); // floor(505.5)
    }

    #[test]
    fn test_next_threshold_saturates() {
        let curve = LevelCurve::default();
        assert_eq!(curve.next_threshold(u32::MAX), u32::MAX);
        assert_eq!(curve.next_threshold(u32::MAX / 3 * 2 + 10), u32::MAX);
    }

    #[test]
    fn test_flat_curve_never_shrinks() {
        let curve = LevelCurve {
            threshold_growth: 1.0,
            ..LevelCurve::default()
        };
        assert_eq!(curve.next_threshold(100), 100);
        assert_eq!(curve.next_threshold(1), 1);
    }

    #[test]
    fn test_validate() {
        assert!(LevelCurve::default().validate().is_ok());

        let shrinking = LevelCurve {
            threshold_growth: 0.5,
            ..LevelCurve::default()
        };
        assert!(shrinking.validate().is_err());

        let nan = LevelCurve {
            threshold_growth: f64::NAN,
            ..LevelCurve::default()
        };
        assert!(nan.validate().is_err());

        let zero_threshold = LevelCurve {
            base_threshold: 0,
            ..LevelCurve::default()
        };
        assert!(zero_threshold.validate().is_err());

        let zero_level = LevelCurve {
            starting_level: 0,
            ..LevelCurve::default()
        };
        assert!(zero_level.validate().is_err());
    }
}
