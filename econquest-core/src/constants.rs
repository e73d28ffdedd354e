//! Default roster shape for the EconQuest dashboard.
//!
//! The generator reads these through `RosterConfig::default()`, so the page
//! and the tester agree on one roster size and one set of stat bounds.

// Roster ------------------------------------------------------------------
pub const PLAYER_COUNT: usize = 28;
pub const DEFAULT_PLAYER_LABEL: &str = "Игрок";

// Stat bounds (minimums inclusive, caps exclusive) ------------------------
pub const LEVEL_MIN: u32 = 1;
pub const LEVEL_MAX: u32 = 20;
pub const XP_CAP: u32 = 800;
pub const MAX_XP: u32 = 1000;
pub const COIN_CAP: u32 = 5000;
pub const ACHIEVEMENT_CAP: u32 = 15;

// Presentation ------------------------------------------------------------
pub const LEADERBOARD_SIZE: usize = 10;

// Seeding -----------------------------------------------------------------
pub(crate) const ROSTER_STREAM_TAG: &[u8] = b"econquest-roster";
