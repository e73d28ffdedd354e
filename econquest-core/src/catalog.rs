//! Fixed reference data: ministries and achievement badges.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fictional government department shown on the ministries view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ministry {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub budget: u64,
    pub decisions: u32,
    /// Percentage, 0..=100.
    pub influence: u8,
}

/// Display tier of an achievement badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Self; 4] = [Self::Common, Self::Rare, Self::Epic, Self::Legendary];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub rarity: Rarity,
}

struct MinistryRow {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    color: &'static str,
    budget: u64,
    decisions: u32,
    influence: u8,
}

const MINISTRIES: [MinistryRow; 3] = [
    MinistryRow {
        id: "finance",
        name: "Министерство финансов",
        icon: "Landmark",
        color: "text-yellow-500",
        budget: 1_500_000,
        decisions: 156,
        influence: 95,
    },
    MinistryRow {
        id: "bank",
        name: "Центральный банк",
        icon: "Building2",
        color: "text-blue-500",
        budget: 2_000_000,
        decisions: 203,
        influence: 98,
    },
    MinistryRow {
        id: "labor",
        name: "Трудовая комиссия",
        icon: "Users",
        color: "text-green-500",
        budget: 800_000,
        decisions: 124,
        influence: 87,
    },
];

const ACHIEVEMENTS: [(u32, &str, &str, Rarity); 4] = [
    (1, "Первые шаги", "Award", Rarity::Common),
    (2, "Экономист", "TrendingUp", Rarity::Rare),
    (3, "Магистр", "Crown", Rarity::Epic),
    (4, "Легенда", "Star", Rarity::Legendary),
];

impl From<&MinistryRow> for Ministry {
    fn from(row: &MinistryRow) -> Self {
        Self {
            id: row.id.to_string(),
            name: row.name.to_string(),
            icon: row.icon.to_string(),
            color: row.color.to_string(),
            budget: row.budget,
            decisions: row.decisions,
            influence: row.influence,
        }
    }
}

/// The three ministries, always in the same order.
#[must_use]
pub fn list_ministries() -> Vec<Ministry> {
    MINISTRIES.iter().map(Ministry::from).collect()
}

/// The four achievement badges, ordered by id.
#[must_use]
pub fn list_achievements() -> Vec<Achievement> {
    ACHIEVEMENTS
        .iter()
        .map(|&(id, name, icon, rarity)| Achievement {
            id,
            name: name.to_string(),
            icon: icon.to_string(),
            rarity,
        })
        .collect()
}

#[must_use]
pub fn ministry_by_id(id: &str) -> Option<Ministry> {
    MINISTRIES
        .iter()
        .find(|row| row.id == id)
        .map(Ministry::from)
}
