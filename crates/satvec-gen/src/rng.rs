//! Per-case RNG seeding with ChaCha8.
//!
//! Every test case owns a ChaCha8Rng seeded from its case seed. Within a
//! batch, case `i` uses `batch_seed + i`. Same seed -> same test case, always.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed of case `index` within a batch.
pub fn case_seed(batch_seed: u64, index: u64) -> u64 {
    batch_seed.wrapping_add(index)
}

/// Create the deterministic RNG for one test case.
pub fn case_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
