use crate::RandSource;
use rand::{Rng, rng};

/// A [`RandSource`] backed by the thread-local RNG (`rand::rng()`).
///
/// The RNG is ChaCha-based, seeded from the operating system and reseeded
/// periodically. If the OS entropy source is unavailable the `rand` crate
/// panics on first use; generation never falls back to weaker randomness.
///
/// This type does not store the RNG; it reaches the thread-local generator on
/// each call, so it is `Send + Sync` and contention-free.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}
