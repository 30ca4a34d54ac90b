use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 5;

/// Generates short, collision-resistant entity ids: a base-36 millisecond
/// timestamp plus a random base-36 suffix, with an optional human-readable
/// prefix (`proj_mbcd1x2k9qz`). Collision probability is accepted as
/// negligible; prior outputs are never tracked.
pub struct IdGen {
    rng: StdRng,
}

impl IdGen {
    pub fn new() -> Self {
        IdGen {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests
    pub fn seeded(seed: u64) -> Self {
        IdGen {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, prefix: &str, now: DateTime<Utc>) -> String {
        let ts = encode_base36(now.timestamp_millis().max(0) as u64);
        let mut suffix = String::with_capacity(SUFFIX_LEN);
        for _ in 0..SUFFIX_LEN {
            suffix.push(BASE36[self.rng.gen_range(0..BASE36.len())] as char);
        }
        if prefix.is_empty() {
            format!("{ts}{suffix}")
        } else {
            format!("{prefix}_{ts}{suffix}")
        }
    }
}

impl Default for IdGen {
    fn default() -> Self {
        IdGen::new()
    }
}

fn encode_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".into();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    // Digits are always ASCII
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fixed_now() -> DateTime<Utc> {
        "2025-06-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn prefix_is_joined_with_underscore() {
        let mut ids = IdGen::seeded(1);
        let id = ids.generate("proj", fixed_now());
        assert!(id.starts_with("proj_"));
        let bare = ids.generate("", fixed_now());
        assert!(!bare.contains('_'));
    }

    #[test]
    fn ids_are_distinct_within_one_millisecond() {
        let mut ids = IdGen::seeded(42);
        let now = fixed_now();
        let generated: HashSet<String> = (0..1000).map(|_| ids.generate("task", now)).collect();
        assert_eq!(generated.len(), 1000);
    }

    #[test]
    fn base36_known_values() {
        assert_eq!(encode_base36(0), "0");
        assert_eq!(encode_base36(35), "z");
        assert_eq!(encode_base36(36), "10");
        assert_eq!(encode_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn seeded_generator_is_reproducible() {
        let now = fixed_now();
        let a = IdGen::seeded(7).generate("phase", now);
        let b = IdGen::seeded(7).generate("phase", now);
        assert_eq!(a, b);
    }
}
