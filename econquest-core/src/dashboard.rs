//! Everything the page renders, generated once per session.
use serde::{Deserialize, Serialize};

use crate::catalog::{Achievement, Ministry, list_achievements, list_ministries};
use crate::config::RosterConfig;
use crate::constants::LEADERBOARD_SIZE;
use crate::player::{Player, leaderboard};
use crate::rng::{RollSource, roster_rng};
use crate::seed::encode_roster_code;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub seed: u64,
    pub players: Vec<Player>,
    pub ministries: Vec<Ministry>,
    pub achievements: Vec<Achievement>,
}

impl Dashboard {
    /// Build a dashboard whose roster is reproducible from `seed`.
    #[must_use]
    pub fn generate(seed: u64, cfg: &RosterConfig) -> Self {
        Self::from_source(seed, cfg, &mut roster_rng(seed))
    }

    /// Build a dashboard drawing stats from an arbitrary source.
    #[must_use]
    pub fn from_source<S: RollSource + ?Sized>(
        seed: u64,
        cfg: &RosterConfig,
        source: &mut S,
    ) -> Self {
        Self {
            seed,
            players: cfg.generate(source),
            ministries: list_ministries(),
            achievements: list_achievements(),
        }
    }

    /// Players shown on the leaderboard view.
    #[must_use]
    pub fn leaders(&self) -> &[Player] {
        leaderboard(&self.players, LEADERBOARD_SIZE)
    }

    #[must_use]
    pub fn roster_code(&self) -> String {
        encode_roster_code(self.seed)
    }

    /// Load a dashboard snapshot from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a dashboard.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
