//! Caller-owned random sources.
//!
//! Every randomized step (k-means initialization, random target colors,
//! random basic maps) draws from a generator passed in by the caller, so
//! one seed reproduces a whole run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Color;

/// A generator seeded from `seed`, or from OS entropy when absent.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// A uniformly random color, each channel drawn independently.
pub fn random_color(rng: &mut impl Rng) -> Color {
    Color::new(rng.gen(), rng.gen(), rng.gen())
}
