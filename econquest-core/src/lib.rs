//! EconQuest core
//!
//! Platform-agnostic data for the EconQuest economics dashboard: a seeded
//! synthetic player roster ranked by coins, the fixed ministry and
//! achievement catalog, and the tab selector. Nothing here touches the DOM.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod player;
pub mod rng;
pub mod seed;
pub mod validate;
pub mod view;

// Re-export commonly used types
pub use catalog::{
    Achievement, Ministry, Rarity, list_achievements, list_ministries, ministry_by_id,
};
pub use config::{ConfigError, RosterConfig};
pub use dashboard::Dashboard;
pub use player::{Player, generate_players, leaderboard, rank_by_coins};
pub use rng::{RngRolls, RollSource, RosterRolls, ScriptedRolls, derive_stream_seed, roster_rng};
pub use seed::{
    CODE_SPACE, canonical_seed, decode_roster_code, encode_roster_code, seed_from_entropy,
};
pub use validate::{RosterViolation, check_roster};
pub use view::{DashboardView, ParseViewError};
