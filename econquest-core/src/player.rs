//! Synthetic player roster.
use serde::{Deserialize, Serialize};

use crate::config::RosterConfig;
use crate::rng::RollSource;

/// A generated player with gameplay-style stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub level: u32,
    pub xp: u32,
    pub max_xp: u32,
    pub coins: u32,
    pub achievements: u32,
    /// 1-based position by coins, fixed at generation.
    pub rank: u32,
}

impl Player {
    /// Experience bar fill in percent.
    #[must_use]
    pub fn xp_percent(&self) -> f32 {
        if self.max_xp == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let pct = self.xp as f32 / self.max_xp as f32 * 100.0;
        pct.clamp(0.0, 100.0)
    }

    /// Whether this player occupies one of the podium slots.
    #[must_use]
    pub const fn on_podium(&self) -> bool {
        self.rank >= 1 && self.rank <= 3
    }
}

impl RosterConfig {
    /// Roll `self.count` players and rank them by coins.
    #[must_use]
    pub fn generate<S: RollSource + ?Sized>(&self, source: &mut S) -> Vec<Player> {
        let mut players: Vec<Player> = (0..self.count)
            .map(|index| {
                let id = u32::try_from(index + 1).unwrap_or(u32::MAX);
                self.roll_player(source, id)
            })
            .collect();
        rank_by_coins(&mut players);
        players
    }

    fn roll_player<S: RollSource + ?Sized>(&self, source: &mut S, id: u32) -> Player {
        let level = source.roll(self.level_min..self.level_max.saturating_add(1));
        let xp = source.roll(0..self.xp_cap);
        let coins = source.roll(0..self.coin_cap);
        let achievements = source.roll(0..self.achievement_cap);
        Player {
            id,
            name: self.player_name(id),
            level,
            xp,
            max_xp: self.max_xp,
            coins,
            achievements,
            rank: 0,
        }
    }
}

/// Generate `count` players with the default stat bounds.
///
/// The result is sorted by coins descending (ties keep id order) and each
/// player's `rank` equals its position plus one.
#[must_use]
pub fn generate_players<S: RollSource + ?Sized>(source: &mut S, count: usize) -> Vec<Player> {
    RosterConfig::default().with_count(count).generate(source)
}

/// Stable sort by coins descending, then stamp ranks.
pub fn rank_by_coins(players: &mut [Player]) {
    players.sort_by(|a, b| b.coins.cmp(&a.coins));
    for (position, player) in players.iter_mut().enumerate() {
        player.rank = u32::try_from(position + 1).unwrap_or(u32::MAX);
    }
}

/// Top `limit` players of a ranked roster.
#[must_use]
pub fn leaderboard(players: &[Player], limit: usize) -> &[Player] {
    &players[..limit.min(players.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRolls;

    fn scripted_three() -> Vec<Player> {
        let mut rolls = ScriptedRolls::new(vec![
            4, 100, 200, 3, // id 1
            0, 0, 4000, 14, // id 2
            19, 799, 200, 0, // id 3
        ]);
        generate_players(&mut rolls, 3)
    }

    #[test]
    fn scripted_roster_is_exact() {
        let players = scripted_three();
        let ids: Vec<u32> = players.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        let top = &players[0];
        assert_eq!(top.name, "Игрок 2");
        assert_eq!((top.level, top.xp, top.coins, top.achievements), (1, 0, 4000, 14));
        assert_eq!(top.rank, 1);

        assert_eq!(players[1].level, 5);
        assert_eq!(players[2].level, 20);
        assert_eq!(players[2].xp, 799);
        assert!(players.iter().all(|p| p.max_xp == 1000));
    }

    #[test]
    fn coin_ties_keep_generation_order() {
        let players = scripted_three();
        assert_eq!(players[1].id, 1);
        assert_eq!(players[2].id, 3);
        assert_eq!(players[1].coins, players[2].coins);
        assert_eq!(players[1].rank, 2);
        assert_eq!(players[2].rank, 3);
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rolls = ScriptedRolls::default();
        assert!(generate_players(&mut rolls, 0).is_empty());
    }

    #[test]
    fn leaderboard_truncates_to_roster() {
        let players = scripted_three();
        assert_eq!(leaderboard(&players, 10).len(), 3);
        assert_eq!(leaderboard(&players, 2)[1].id, 1);
    }

    #[test]
    fn xp_percent_and_podium() {
        let mut player = scripted_three().remove(2);
        assert!((player.xp_percent() - 79.9).abs() < 0.01);
        assert!(player.on_podium());
        player.rank = 4;
        assert!(!player.on_podium());
        player.max_xp = 0;
        assert!(player.xp_percent().abs() < f32::EPSILON);
    }

    #[test]
    fn serializes_max_xp_in_camel_case() {
        let player = scripted_three().remove(0);
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["maxXp"], 1000);
        assert_eq!(json["rank"], 1);
    }
}
