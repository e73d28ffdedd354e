//! Injectable randomness for roster generation.
//!
//! Every stat draw goes through [`RollSource`], so callers decide whether the
//! numbers come from a seeded `ChaCha20` stream or from a scripted list.

use std::ops::Range;

use hmac::{Hmac, Mac};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;

use crate::constants::ROSTER_STREAM_TAG;

/// Source of uniform draws over half-open `u32` ranges.
pub trait RollSource {
    /// Draw a value in `range`. Empty ranges yield `range.start`.
    fn roll(&mut self, range: Range<u32>) -> u32;
}

impl<S: RollSource + ?Sized> RollSource for &mut S {
    fn roll(&mut self, range: Range<u32>) -> u32 {
        (**self).roll(range)
    }
}

/// Adapter that feeds [`RollSource`] from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngRolls<R> {
    rng: R,
}

impl<R: Rng> RngRolls<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RollSource for RngRolls<R> {
    fn roll(&mut self, range: Range<u32>) -> u32 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.gen_range(range)
    }
}

/// Roll source used by the dashboard.
pub type RosterRolls = RngRolls<ChaCha20Rng>;

/// Build the roster stream for a user-visible seed.
#[must_use]
pub fn roster_rng(seed: u64) -> RosterRolls {
    RngRolls::new(ChaCha20Rng::seed_from_u64(derive_stream_seed(
        seed,
        ROSTER_STREAM_TAG,
    )))
}

/// Domain-separate a user seed so unrelated streams never share state.
#[must_use]
pub fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()) else {
        return user_seed;
    };
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let mut seed_bytes = [0u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed_bytes)
}

/// Replays a fixed list of values, wrapping each into the requested range.
///
/// Useful when a caller needs an exact roster, e.g. fixtures and demos.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRolls {
    #[must_use]
    pub const fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self, range: Range<u32>) -> u32 {
        if range.is_empty() {
            return range.start;
        }
        let raw = self.values.get(self.cursor).copied().unwrap_or(0);
        self.cursor = self.cursor.saturating_add(1);
        let span = range.end - range.start;
        range.start + raw % span
    }
}
