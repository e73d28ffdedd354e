//! Reversible roster codes.
//! Code format: <ECONOMIST><NN>, e.g., KEYNES42, HAYEK07
//!
//! A code names one of `ECONOMISTS.len() * 100` slots. Any seed maps to the
//! slot `seed % CODE_SPACE`; decoding a code yields the canonical seed of its
//! slot, so codes are lossy for seeds that were not produced from a code.

use crate::rng::derive_stream_seed;

const NUMBERS_PER_WORD: u64 = 100;

/// Number of distinct roster codes.
pub const CODE_SPACE: u64 = ECONOMISTS.len() as u64 * NUMBERS_PER_WORD;

const ENTROPY_TAG: &[u8] = b"econquest-entropy";

pub const ECONOMISTS: [&str; 64] = [
    "SMITH", "RICARDO", "MARX", "KEYNES", "HAYEK", "MILL", "MALTHUS", "QUESNAY", "TURGOT", "SAY",
    "WALRAS", "JEVONS", "MENGER", "MARSHALL", "PIGOU", "FISHER", "VEBLEN", "PARETO", "SRAFFA",
    "ROBINSON", "KALECKI", "FRIEDMAN", "MISES", "SCHUMPETER", "SAMUELSON", "ARROW", "SOLOW",
    "HICKS", "LEONTIEF", "KANTOROVICH", "TUGAN", "KONDRATIEV", "CHAYANOV", "SLUTSKY", "BOHM",
    "SISMONDI", "LIST", "COURNOT", "THUNEN", "GESELL", "COASE", "BUCHANAN", "LUCAS", "SEN",
    "STIGLITZ", "KRUGMAN", "PETTY", "CANTILLON", "HUME", "LAW", "MUN", "BECKER", "NASH", "TOBIN",
    "MODIGLIANI", "FRISCH", "TINBERGEN", "KUZNETS", "MYRDAL", "OHLIN", "GALBRAITH", "MINSKY",
    "VICKREY", "DEBREU",
];

fn fnv1a64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(0x0100_0000_01b3)
    })
}

fn slot_of(seed: u64) -> (usize, u64) {
    let slot = seed % CODE_SPACE;
    let word = usize::try_from(slot / NUMBERS_PER_WORD).unwrap_or(0);
    (word, slot % NUMBERS_PER_WORD)
}

/// Canonical seed for a slot: hashed high bits over the slot index.
fn slot_seed(word: usize, nn: u64) -> u64 {
    let slot = word as u64 * NUMBERS_PER_WORD + nn;
    let code = format!("{}{nn:02}", ECONOMISTS[word]);
    (fnv1a64(code.as_bytes()) >> 16) * CODE_SPACE + slot
}

/// Uppercase the word part; `-`, `_` and spaces are ignored, anything else rejects.
fn parse_word(part: &str) -> Option<String> {
    let mut word = String::with_capacity(part.len());
    for c in part.chars() {
        match c {
            'a'..='z' | 'A'..='Z' => word.push(c.to_ascii_uppercase()),
            '-' | '_' | ' ' => {}
            _ => return None,
        }
    }
    Some(word)
}

/// Render the code of the slot `seed` falls into.
#[must_use]
pub fn encode_roster_code(seed: u64) -> String {
    let (word, nn) = slot_of(seed);
    format!("{}{nn:02}", ECONOMISTS[word])
}

/// Map a code back to its canonical seed. Case-insensitive.
#[must_use]
pub fn decode_roster_code(code: &str) -> Option<u64> {
    let s = code.trim();
    if s.len() < 3 {
        return None;
    }
    let split = s.len() - 2;
    if !s.is_char_boundary(split) {
        return None;
    }
    let (word_part, nn_part) = s.split_at(split);
    if !nn_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let nn: u64 = nn_part.parse().ok()?;
    let word = parse_word(word_part)?;
    let index = ECONOMISTS.iter().position(|w| *w == word)?;
    Some(slot_seed(index, nn))
}

/// Seed that round-trips through its own roster code.
#[must_use]
pub fn canonical_seed(seed: u64) -> u64 {
    let (word, nn) = slot_of(seed);
    slot_seed(word, nn)
}

/// Full-width roster seed from raw entropy such as clock bits.
///
/// The input is hashed first, so entropy whose low bits never change
/// (millisecond timestamps stored as `f64`) still spreads over every code.
#[must_use]
pub fn seed_from_entropy(entropy: u64) -> u64 {
    derive_stream_seed(entropy, ENTROPY_TAG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn encode_decode_roundtrips_code() {
        let seed = 0xDEAD_BEEF_CAFE_BABE;
        let code = encode_roster_code(seed);
        let canonical = decode_roster_code(&code).unwrap();
        assert_eq!(encode_roster_code(canonical), code);
    }

    #[test]
    fn keynes_42_stable() {
        let seed = decode_roster_code("KEYNES42").unwrap();
        assert_eq!(encode_roster_code(seed), "KEYNES42");
        assert_eq!(decode_roster_code("keynes42"), Some(seed));
        assert_eq!(decode_roster_code(" Keynes-42 "), Some(seed));
    }

    #[test]
    fn rejects_unknown_words_and_short_codes() {
        assert!(decode_roster_code("NOBODY11").is_none());
        assert!(decode_roster_code("7").is_none());
        assert!(decode_roster_code("SMITHxx").is_none());
        assert!(decode_roster_code("ИГРОК12").is_none());
    }

    #[test]
    fn digits_inside_the_word_are_rejected() {
        assert!(decode_roster_code("SMITH100").is_none());
        assert!(decode_roster_code("KEY1NES42").is_none());
        assert!(decode_roster_code("KEYNES.42").is_none());
        assert!(decode_roster_code("smith_00").is_some());
    }

    #[test]
    fn canonical_seed_is_a_fixed_point() {
        for seed in [0_u64, 42, 0xFFFF, u64::MAX] {
            let canonical = canonical_seed(seed);
            assert_eq!(canonical_seed(canonical), canonical);
            assert_eq!(encode_roster_code(canonical), encode_roster_code(seed));
        }
    }

    #[test]
    fn every_slot_has_its_own_code() {
        let codes: HashSet<String> = (0..CODE_SPACE).map(encode_roster_code).collect();
        assert_eq!(codes.len(), 6400);
        assert_eq!(encode_roster_code(0), "SMITH00");
        assert_eq!(encode_roster_code(CODE_SPACE - 1), "DEBREU99");
        assert_eq!(encode_roster_code(CODE_SPACE), "SMITH00");
        for code in ["SMITH00", "DEBREU99", "MARX07"] {
            let seed = decode_roster_code(code).unwrap();
            assert_eq!(encode_roster_code(seed), code);
        }
    }

    #[test]
    fn clock_entropy_spreads_over_words() {
        // Millisecond timestamps as f64 keep their low mantissa bits at zero.
        let words: HashSet<String> = (0..2000_u64)
            .map(|k| {
                let millis = 1.76e12 + (k * 7919) as f64;
                let noise = (k * 2_654_435_761) % u64::from(u32::MAX);
                let seed = seed_from_entropy(millis.to_bits() ^ (noise << 17));
                encode_roster_code(seed)
                    .trim_end_matches(|c: char| c.is_ascii_digit())
                    .to_string()
            })
            .collect();
        assert!(words.len() > 32, "only {} words: {words:?}", words.len());
    }

    #[test]
    fn entropy_seeds_are_not_folded_into_codes() {
        let seed = seed_from_entropy(0x1234_5678);
        assert_eq!(seed, seed_from_entropy(0x1234_5678));
        assert_ne!(seed, seed_from_entropy(0x1234_5679));
        assert!(decode_roster_code(&encode_roster_code(seed)).is_some());
    }

    #[test]
    fn economist_words_are_unique_letters() {
        for (i, word) in ECONOMISTS.iter().enumerate() {
            assert_eq!(parse_word(word).as_deref(), Some(*word));
            assert!(!ECONOMISTS[i + 1..].contains(word), "{word}");
        }
    }
}
