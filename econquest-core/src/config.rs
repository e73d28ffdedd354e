//! Generator bounds for the synthetic roster.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    ACHIEVEMENT_CAP, COIN_CAP, DEFAULT_PLAYER_LABEL, LEVEL_MAX, LEVEL_MIN, MAX_XP, PLAYER_COUNT,
    XP_CAP,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("roster config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("roster must contain at least one player")]
    EmptyRoster,
    #[error("level range {min}..={max} is empty or starts at zero")]
    LevelRange { min: u32, max: u32 },
    #[error("xp cap {xp_cap} exceeds max xp {max_xp}")]
    XpCap { xp_cap: u32, max_xp: u32 },
    #[error("{field} cap must be positive")]
    ZeroCap { field: &'static str },
}

/// Shape of a generated roster. Missing JSON fields fall back to the page defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub count: usize,
    pub level_min: u32,
    pub level_max: u32,
    /// Exclusive upper bound for rolled xp.
    pub xp_cap: u32,
    pub max_xp: u32,
    /// Exclusive upper bound for rolled coins.
    pub coin_cap: u32,
    /// Exclusive upper bound for rolled achievement counts.
    pub achievement_cap: u32,
    /// Word placed before the id in player names.
    pub player_label: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            count: PLAYER_COUNT,
            level_min: LEVEL_MIN,
            level_max: LEVEL_MAX,
            xp_cap: XP_CAP,
            max_xp: MAX_XP,
            coin_cap: COIN_CAP,
            achievement_cap: ACHIEVEMENT_CAP,
            player_label: DEFAULT_PLAYER_LABEL.to_string(),
        }
    }
}

impl RosterConfig {
    /// Parse and validate a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the bounds are inconsistent.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Same bounds with a different name label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.player_label = label.into();
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Check that every stat range is non-empty.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyRoster);
        }
        if self.level_min == 0 || self.level_min > self.level_max {
            return Err(ConfigError::LevelRange {
                min: self.level_min,
                max: self.level_max,
            });
        }
        if self.xp_cap == 0 {
            return Err(ConfigError::ZeroCap { field: "xp" });
        }
        if self.coin_cap == 0 {
            return Err(ConfigError::ZeroCap { field: "coin" });
        }
        if self.achievement_cap == 0 {
            return Err(ConfigError::ZeroCap {
                field: "achievement",
            });
        }
        if self.xp_cap > self.max_xp {
            return Err(ConfigError::XpCap {
                xp_cap: self.xp_cap,
                max_xp: self.max_xp,
            });
        }
        Ok(())
    }

    /// Display name for a player id.
    #[must_use]
    pub fn player_name(&self, id: u32) -> String {
        format!("{} {id}", self.player_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_roster() {
        let cfg = RosterConfig::default();
        assert_eq!(cfg.count, 28);
        assert_eq!((cfg.level_min, cfg.level_max), (1, 20));
        assert_eq!(cfg.xp_cap, 800);
        assert_eq!(cfg.max_xp, 1000);
        assert_eq!(cfg.coin_cap, 5000);
        assert_eq!(cfg.achievement_cap, 15);
        assert_eq!(cfg.player_name(4), "Игрок 4");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = RosterConfig::from_json(r#"{ "count": 5, "player_label": "Player" }"#).unwrap();
        assert_eq!(cfg.count, 5);
        assert_eq!(cfg.coin_cap, 5000);
        assert_eq!(cfg.player_name(2), "Player 2");
    }

    #[test]
    fn rejects_inconsistent_bounds() {
        assert!(matches!(
            RosterConfig::from_json(r#"{ "count": 0 }"#),
            Err(ConfigError::EmptyRoster)
        ));
        assert!(matches!(
            RosterConfig::from_json(r#"{ "level_min": 5, "level_max": 4 }"#),
            Err(ConfigError::LevelRange { min: 5, max: 4 })
        ));
        assert!(matches!(
            RosterConfig::from_json(r#"{ "xp_cap": 1200 }"#),
            Err(ConfigError::XpCap { .. })
        ));
        assert!(matches!(
            RosterConfig::from_json(r#"{ "coin_cap": 0 }"#),
            Err(ConfigError::ZeroCap { field: "coin" })
        ));
        assert!(matches!(
            RosterConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
