//! Seeded random number generation.
//!
//! Every engine takes an explicit `&mut R: Rng`; runners build one here from
//! their configured seed so that independent runs never share a stream.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_selective_tsp::random::create_rng;
///
/// let mut a = create_rng(42);
/// let mut b = create_rng(42);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from an optional seed, falling back to OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => create_rng(s),
        None => StdRng::from_os_rng(),
    }
}
