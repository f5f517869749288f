/// A trait for time sources that return a wall-clock or monotonic timestamp.
///
/// This abstraction allows you to plug in a real system clock, a monotonic
/// timer, or a mocked time source in tests.
///
/// The unit is **milliseconds since the UNIX epoch**. Conversion to a layout's
/// own epoch and resolution happens in [`crate::Layout::ticks_at`], so one
/// clock serves every ID type.
///
/// # Example
///
/// ```
/// use tickid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn unix_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.unix_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since 1970-01-01 UTC.
    fn unix_millis(&self) -> u64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn unix_millis(&self) -> u64 {
        (**self).unix_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn unix_millis(&self) -> u64 {
        (**self).unix_millis()
    }
}
