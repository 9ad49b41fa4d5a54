use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random source used for the fill pass.
pub type CaveRng = ChaCha8Rng;

const FNV_OFFSET: u64 = 0xCBF2_9CE4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// 64-bit FNV-1a over the UTF-8 bytes of `seed`. Stable across platforms and releases.
pub fn hash_seed(seed: &str) -> u64 {
    let mut h = FNV_OFFSET;
    for b in seed.as_bytes() {
        h ^= u64::from(*b);
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

pub fn rng_for_seed(seed: &str) -> CaveRng {
    ChaCha8Rng::seed_from_u64(hash_seed(seed))
}

/// Seed string for a non-reproducible run: the current UNIX time in nanoseconds.
pub fn time_seed() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    nanos.to_string()
}

/// The seed a run will actually use.
pub fn resolve_seed(seed: &str, use_random_seed: bool) -> String {
    if use_random_seed {
        let s = time_seed();
        log::info!("using time-derived seed {}", s);
        s
    } else {
        seed.to_string()
    }
}
