use econquest_core::{
    Dashboard, Rarity, RosterConfig, canonical_seed, check_roster, decode_roster_code,
    encode_roster_code, list_achievements, list_ministries, ministry_by_id, roster_rng,
};

/// Inputs for one scenario iteration.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioCtx<'a> {
    pub seed: u64,
    pub cfg: &'a RosterConfig,
}

pub type ScenarioCheck = fn(&ScenarioCtx<'_>) -> Result<(), String>;

#[derive(Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    check: ScenarioCheck,
}

impl Scenario {
    pub fn run(&self, ctx: &ScenarioCtx<'_>) -> Result<(), String> {
        (self.check)(ctx)
    }
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "roster-invariants",
        description: "Length, ids, ranks, coin ordering and stat bounds",
        check: roster_invariants,
    },
    Scenario {
        key: "rank-extremes",
        description: "Rank 1 holds the most coins, the last rank the fewest",
        check: rank_extremes,
    },
    Scenario {
        key: "deterministic-seed",
        description: "Same seed regenerates the same dashboard",
        check: deterministic_seed,
    },
    Scenario {
        key: "roster-code",
        description: "Roster codes reopen the roster they were printed for",
        check: roster_code,
    },
    Scenario {
        key: "catalog-stable",
        description: "Ministries and achievements are fixed and idempotent",
        check: catalog_stable,
    },
    Scenario {
        key: "json-contract",
        description: "Dashboard JSON keeps camelCase players and lowercase rarities",
        check: json_contract,
    },
];

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description)).collect()
}

#[must_use]
pub fn get_scenario(key: &str) -> Option<Scenario> {
    SCENARIOS.iter().find(|s| s.key == key).copied()
}

fn roster_invariants(ctx: &ScenarioCtx<'_>) -> Result<(), String> {
    let players = ctx.cfg.generate(&mut roster_rng(ctx.seed));
    check_roster(&players, ctx.cfg).map_err(|e| e.to_string())
}

fn rank_extremes(ctx: &ScenarioCtx<'_>) -> Result<(), String> {
    let players = ctx.cfg.generate(&mut roster_rng(ctx.seed));
    let (Some(first), Some(last)) = (players.first(), players.last()) else {
        return Err("empty roster".to_string());
    };
    let max = players.iter().map(|p| p.coins).max().unwrap_or_default();
    let min = players.iter().map(|p| p.coins).min().unwrap_or_default();
    if first.rank != 1 || first.coins != max {
        return Err(format!(
            "rank {} player has {} coins, max is {max}",
            first.rank, first.coins
        ));
    }
    if last.coins != min {
        return Err(format!(
            "rank {} player has {} coins, min is {min}",
            last.rank, last.coins
        ));
    }
    Ok(())
}

fn deterministic_seed(ctx: &ScenarioCtx<'_>) -> Result<(), String> {
    let first = Dashboard::generate(ctx.seed, ctx.cfg);
    let second = Dashboard::generate(ctx.seed, ctx.cfg);
    if first == second {
        Ok(())
    } else {
        Err(format!("seed {} produced two different dashboards", ctx.seed))
    }
}

fn roster_code(ctx: &ScenarioCtx<'_>) -> Result<(), String> {
    let canonical = canonical_seed(ctx.seed);
    let code = encode_roster_code(canonical);
    let decoded = decode_roster_code(&code).ok_or_else(|| format!("code {code} did not decode"))?;
    if decoded != canonical {
        return Err(format!("code {code} decoded to {decoded}, expected {canonical}"));
    }
    let printed = Dashboard::generate(canonical, ctx.cfg);
    let reopened = Dashboard::generate(decoded, ctx.cfg);
    if printed.players != reopened.players {
        return Err(format!("code {code} reopened a different roster"));
    }
    Ok(())
}

fn catalog_stable(_ctx: &ScenarioCtx<'_>) -> Result<(), String> {
    let ministries = list_ministries();
    if ministries.len() != 3 || ministries != list_ministries() {
        return Err("ministry list is not stable".to_string());
    }
    let finance = ministry_by_id("finance").ok_or("finance ministry missing")?;
    if ministries.first() != Some(&finance) {
        return Err("finance is not the first ministry".to_string());
    }
    if (finance.budget, finance.decisions, finance.influence) != (1_500_000, 156, 95) {
        return Err(format!("finance ministry changed: {finance:?}"));
    }

    let achievements = list_achievements();
    if achievements.len() != 4 || achievements != list_achievements() {
        return Err("achievement list is not stable".to_string());
    }
    let master = achievements
        .iter()
        .find(|a| a.id == 3)
        .ok_or("achievement 3 missing")?;
    if master.name != "Магистр" || master.rarity != Rarity::Epic {
        return Err(format!("achievement 3 changed: {master:?}"));
    }
    Ok(())
}

fn json_contract(ctx: &ScenarioCtx<'_>) -> Result<(), String> {
    let dashboard = Dashboard::generate(ctx.seed, ctx.cfg);
    let value = serde_json::to_value(&dashboard).map_err(|e| e.to_string())?;
    let first = value
        .pointer("/players/0")
        .ok_or("players array missing")?;
    if first.get("maxXp").is_none() || first.get("max_xp").is_some() {
        return Err("player max xp is not serialised as maxXp".to_string());
    }
    let rarities: Vec<&str> = value["achievements"]
        .as_array()
        .map(|items| items.iter().filter_map(|a| a["rarity"].as_str()).collect())
        .unwrap_or_default();
    let expected: Vec<&str> = Rarity::ALL.iter().map(|r| r.as_str()).collect();
    if rarities != expected {
        return Err(format!("unexpected rarities {rarities:?}"));
    }
    let text = value.to_string();
    let restored = Dashboard::from_json(&text).map_err(|e| e.to_string())?;
    if restored != dashboard {
        return Err("dashboard JSON does not restore".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_passes_on_defaults() {
        let cfg = RosterConfig::default();
        for seed in [0, 1337, u64::MAX] {
            let ctx = ScenarioCtx { seed, cfg: &cfg };
            for (key, _) in list_scenarios() {
                let scenario = get_scenario(key).unwrap();
                assert_eq!(scenario.run(&ctx), Ok(()), "{key} seed {seed}");
            }
        }
    }

    #[test]
    fn unknown_scenario_is_none() {
        assert!(get_scenario("smoke").is_none());
    }

    #[test]
    fn scenario_keys_are_unique() {
        let keys: Vec<&str> = list_scenarios().into_iter().map(|(k, _)| k).collect();
        for (i, key) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(key), "{key}");
        }
    }
}
