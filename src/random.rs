//! Seedable random source owned by each algorithm instance.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the generator for one algorithm instance.
///
/// A fixed seed gives a reproducible run; `None` seeds from the thread RNG.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}
