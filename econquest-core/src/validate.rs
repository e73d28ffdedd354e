//! Invariant checks for a generated roster.
use std::collections::HashSet;

use thiserror::Error;

use crate::config::RosterConfig;
use crate::player::Player;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterViolation {
    #[error("expected {expected} players, found {actual}")]
    Length { expected: usize, actual: usize },
    #[error("player id {id} is outside 1..={count} or repeated")]
    Id { id: u32, count: usize },
    #[error("player {id} at position {position} has rank {rank}")]
    Rank { id: u32, position: usize, rank: u32 },
    #[error("coins rise from {previous} to {next} at position {position}")]
    Order {
        position: usize,
        previous: u32,
        next: u32,
    },
    #[error("player {id} has {stat} {value} outside {min}..{cap}")]
    Stat {
        id: u32,
        stat: &'static str,
        value: u32,
        min: u32,
        cap: u32,
    },
    #[error("player {id} is named '{name}', expected '{expected}'")]
    Name {
        id: u32,
        name: String,
        expected: String,
    },
}

/// Verify length, ids, ranks, ordering, stat bounds and names.
///
/// # Errors
///
/// Returns the first violation in roster order.
pub fn check_roster(players: &[Player], cfg: &RosterConfig) -> Result<(), RosterViolation> {
    if players.len() != cfg.count {
        return Err(RosterViolation::Length {
            expected: cfg.count,
            actual: players.len(),
        });
    }

    let mut seen = HashSet::with_capacity(players.len());
    let count = u32::try_from(cfg.count).unwrap_or(u32::MAX);
    for (position, player) in players.iter().enumerate() {
        if player.id == 0 || player.id > count || !seen.insert(player.id) {
            return Err(RosterViolation::Id {
                id: player.id,
                count: cfg.count,
            });
        }
        if usize::try_from(player.rank).ok() != Some(position + 1) {
            return Err(RosterViolation::Rank {
                id: player.id,
                position,
                rank: player.rank,
            });
        }
        if position > 0 && players[position - 1].coins < player.coins {
            return Err(RosterViolation::Order {
                position,
                previous: players[position - 1].coins,
                next: player.coins,
            });
        }
        check_stats(player, cfg)?;
        let expected = cfg.player_name(player.id);
        if player.name != expected {
            return Err(RosterViolation::Name {
                id: player.id,
                name: player.name.clone(),
                expected,
            });
        }
    }
    Ok(())
}

fn check_stats(player: &Player, cfg: &RosterConfig) -> Result<(), RosterViolation> {
    let bounds = [
        (
            "level",
            player.level,
            cfg.level_min,
            cfg.level_max.saturating_add(1),
        ),
        ("xp", player.xp, 0, cfg.xp_cap),
        ("coins", player.coins, 0, cfg.coin_cap),
        ("achievements", player.achievements, 0, cfg.achievement_cap),
        ("max_xp", player.max_xp, cfg.max_xp, cfg.max_xp.saturating_add(1)),
    ];
    for (stat, value, min, cap) in bounds {
        if !(min..cap).contains(&value) {
            return Err(RosterViolation::Stat {
                id: player.id,
                stat,
                value,
                min,
                cap,
            });
        }
    }
    Ok(())
}
