//! Init command implementation

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use questlog::config::Config;

/// Default configuration content for questlog init
pub const DEFAULT_CONFIG: &str = r#"# Questlog Configuration
# =======================
#
# Check off every task, then claim the combined reward as experience.
# This file only seeds new sessions; progress is never saved back.

# ============================================================================
# PROGRESSION - Starting stats and how levels scale
# ============================================================================
#
# Available options:
#   starting_level   - Level of a fresh character (default: 1)
#   starting_stat    - Initial strength and agility (default: 10)
#   base_threshold   - EXP needed for the first level-up (default: 100)
#   threshold_growth - Threshold multiplier per level, floored (default: 1.5, must be >= 1.0)
#   stat_gain        - Strength and agility gained per level-up (default: 5)
#
# Experience past the threshold is discarded: one claim is at most one level-up.

[progression]
starting_level = 1
starting_stat = 10
base_threshold = 100
threshold_growth = 1.5
stat_gain = 5

# ============================================================================
# TASKS - The daily checklist, in display order
# ============================================================================
#
# Available options:
#   id          - Unique number used by `toggle <id>`
#   title       - Short name
#   description - What to do (optional)
#   reward      - EXP granted on claim (must be >= 1)
#
# Remove every [[task]] table to fall back to the built-in list.

[[task]]
id = 1
title = "Morning Training"
description = "Complete 10 push-ups"
reward = 20

[[task]]
id = 2
title = "Study Session"
description = "Study for 30 minutes"
reward = 25

[[task]]
id = 3
title = "Meditation"
description = "Meditate for 15 minutes"
reward = 15
"#;

/// Write the default config file (global path unless `--config` is given)
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    Config::write_file(&config_path, DEFAULT_CONFIG, force)?;
    info!("Wrote default config to {}", config_path.display());
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_matches_builtin_defaults() {
        let config = Config::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::with_explicit_defaults());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init_command(Some(path.clone()), false).unwrap();
        assert!(path.exists());

        let err = init_command(Some(path.clone()), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        init_command(Some(path.clone()), true).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.task_list().len(), 3);
    }
}
