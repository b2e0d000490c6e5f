use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seeded generator when a seed is configured, entropy otherwise.
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Uniformly picks one option; empty `options` yield `""`.
pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

/// Samples a random-size subset without replacement, in random order.
/// The size is clamped to the number of options.
pub fn pick_some<R: Rng + ?Sized>(
    rng: &mut R,
    options: &[&str],
    size: RangeInclusive<usize>,
) -> Vec<String> {
    let k = rng.gen_range(size).min(options.len());
    options
        .choose_multiple(rng, k)
        .map(|s| s.to_string())
        .collect()
}
