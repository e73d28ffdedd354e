use anyhow::{Result, bail};
use std::collections::HashSet;
use econquest_core::{decode_roster_code, encode_roster_code};

/// Seed plus the roster code it came from, when there was one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedInfo {
    pub seed: u64,
    pub code: Option<String>,
}

impl SeedInfo {
    #[must_use]
    pub const fn from_numeric(seed: u64) -> Self {
        Self { seed, code: None }
    }

    #[must_use]
    pub fn label(&self) -> String {
        self.code
            .clone()
            .unwrap_or_else(|| format!("{} ({})", self.seed, encode_roster_code(self.seed)))
    }
}

/// Resolve CLI seed tokens: literal integers or roster codes like `KEYNES42`.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<SeedInfo>> {
    let mut seeds = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Ok(value) = token.parse::<u64>() {
            seeds.push(SeedInfo::from_numeric(value));
        } else if let Ok(value) = token.parse::<i64>() {
            seeds.push(SeedInfo::from_numeric(value.unsigned_abs()));
        } else if let Some(seed) = decode_roster_code(token) {
            seeds.push(SeedInfo {
                seed,
                code: Some(token.trim().to_ascii_uppercase()),
            });
        } else {
            bail!("'{token}' is neither a numeric seed nor a roster code");
        }
    }
    if seeds.is_empty() {
        bail!("no seeds given");
    }
    let mut seen = HashSet::with_capacity(seeds.len());
    seeds.retain(|info| seen.insert(info.seed));
    Ok(seeds)
}
