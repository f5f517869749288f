/// A trait for random sources that return random `u64` values.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests. Sequencers mask the value down to the entropy
/// field width, so every bit should be uniformly distributed.
///
/// # Example
/// ```
/// use tickid::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn rand(&self) -> u64 {
///         1234
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), 1234);
/// ```
pub trait RandSource {
    /// Returns a random integer.
    fn rand(&self) -> u64;
}

impl<R: RandSource + ?Sized> RandSource for &R {
    fn rand(&self) -> u64 {
        (**self).rand()
    }
}

impl<R: RandSource + ?Sized> RandSource for std::sync::Arc<R> {
    fn rand(&self) -> u64 {
        (**self).rand()
    }
}
