use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Build the environment generator. Without a seed one is drawn from entropy;
/// the seed actually used is returned so the run can be replayed.
pub fn seeded_rng(seed: Option<u64>) -> (ChaCha8Rng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (ChaCha8Rng::seed_from_u64(seed), seed)
}
