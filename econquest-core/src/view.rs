//! Active dashboard tab.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three dashboard views. Any view may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    #[default]
    Players,
    Leaderboard,
    Ministries,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dashboard view '{0}'")]
pub struct ParseViewError(pub String);

impl DashboardView {
    pub const ALL: [Self; 3] = [Self::Players, Self::Leaderboard, Self::Ministries];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Players => "players",
            Self::Leaderboard => "leaderboard",
            Self::Ministries => "ministries",
        }
    }

    /// Icon shown on the tab trigger.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Players => "Users",
            Self::Leaderboard => "Trophy",
            Self::Ministries => "Building",
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardView {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|view| view.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| ParseViewError(s.to_string()))
    }
}
