//! Startup inputs read from the page URL.
use econquest_core::{DashboardView, decode_roster_code, seed_from_entropy};

/// Seed used when the page carries no `seed`/`code` parameter and no
/// browser entropy is available (native builds, tests).
pub const FALLBACK_SEED: u64 = 1337;

/// Resolve a roster seed from raw `seed` / `code` query values.
///
/// A numeric `seed` wins over `code` and is used as given. A code opens the
/// canonical roster of its slot.
#[must_use]
pub fn seed_from_params(seed: Option<&str>, code: Option<&str>) -> Option<u64> {
    seed.and_then(|s| s.trim().parse::<u64>().ok())
        .or_else(|| code.and_then(decode_roster_code))
}

/// Fold a clock reading and a random fraction into a roster seed.
#[must_use]
pub fn mix_entropy(now_ms: f64, noise: f64) -> u64 {
    seed_from_entropy(now_ms.to_bits() ^ noise.to_bits().rotate_left(29))
}

#[must_use]
pub fn view_from_param(view: Option<&str>) -> DashboardView {
    view.and_then(|v| v.parse().ok()).unwrap_or_default()
}

#[must_use]
pub fn initial_seed() -> u64 {
    let seed = query_param("seed");
    let code = query_param("code");
    seed_from_params(seed.as_deref(), code.as_deref()).unwrap_or_else(fresh_seed)
}

#[must_use]
pub fn initial_view() -> DashboardView {
    view_from_param(query_param("view").as_deref())
}

#[cfg(target_arch = "wasm32")]
fn fresh_seed() -> u64 {
    mix_entropy(js_sys::Date::now(), js_sys::Math::random())
}

#[cfg(not(target_arch = "wasm32"))]
fn fresh_seed() -> u64 {
    FALLBACK_SEED
}

#[cfg(target_arch = "wasm32")]
fn query_param(key: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search)
        .ok()?
        .get(key)
}

#[cfg(not(target_arch = "wasm32"))]
fn query_param(key: &str) -> Option<String> {
    let _ = key;
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use econquest_core::{RosterConfig, canonical_seed, encode_roster_code};
    use std::collections::HashSet;

    fn build_roster(seed: u64) -> Vec<econquest_core::Player> {
        econquest_core::Dashboard::generate(seed, &RosterConfig::default()).players
    }

    #[test]
    fn numeric_seed_beats_code_and_is_kept_verbatim() {
        assert_eq!(seed_from_params(Some(" 42 "), Some("KEYNES42")), Some(42));
        assert_eq!(seed_from_params(Some("65578"), None), Some(65578));
        assert_ne!(
            build_roster(42),
            build_roster(42 + econquest_core::CODE_SPACE)
        );
    }

    #[test]
    fn code_is_used_when_seed_is_garbage() {
        let seed = seed_from_params(Some("forty-two"), Some("hayek07")).unwrap();
        assert_eq!(encode_roster_code(seed), "HAYEK07");
        assert_eq!(canonical_seed(seed), seed);
        assert!(seed_from_params(None, Some("NOBODY01")).is_none());
        assert!(seed_from_params(None, None).is_none());
    }

    #[test]
    fn page_load_entropy_reaches_many_codes() {
        let words: HashSet<String> = (0..500_u32)
            .map(|k| {
                let now_ms = 1.76e12 + f64::from(k) * 16.0;
                let noise = f64::from(k) / 500.0;
                encode_roster_code(mix_entropy(now_ms, noise))
                    .trim_end_matches(|c: char| c.is_ascii_digit())
                    .to_string()
            })
            .collect();
        assert!(words.len() > 32, "{words:?}");
        assert_ne!(mix_entropy(1.76e12, 0.25), mix_entropy(1.76e12, 0.5));
    }

    #[test]
    fn view_param_defaults_to_players() {
        assert_eq!(view_from_param(Some("ministries")), DashboardView::Ministries);
        assert_eq!(view_from_param(Some("bogus")), DashboardView::Players);
        assert_eq!(view_from_param(None), DashboardView::Players);
    }

    #[test]
    fn native_startup_is_deterministic() {
        assert_eq!(initial_seed(), initial_seed());
        assert_eq!(initial_view(), DashboardView::Players);
    }
}
