use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded random sequence of signed entries in `[-bound, bound]`.
pub(crate) fn random_sequence(seed: u64, n: usize, bound: i64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(-bound..=bound)).collect()
}
