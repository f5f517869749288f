use crate::{SystemClock, TimeSource};
use core::time::Duration;
use std::{
    sync::{
        Arc, OnceLock,
        atomic::{AtomicU64, Ordering},
    },
    thread::{self, JoinHandle},
    time::Instant,
};

/// State shared with the ticker thread.
#[derive(Debug)]
struct Ticker {
    elapsed: AtomicU64,
    _handle: OnceLock<JoinHandle<()>>,
}

/// A monotonic time source anchored to the wall clock once, at construction.
///
/// A background thread advances a shared millisecond counter using
/// [`Instant`]; reads are a single atomic load plus a fixed offset. The clock
/// never goes backwards, even if the system clock is stepped, at the price of
/// drifting from wall time over long uptimes.
///
/// Clones share the ticker. The thread exits once every clone is dropped.
///
/// # Example
///
/// ```
/// use tickid::{MonotonicClock, TimeSource};
///
/// let clock = MonotonicClock::new();
/// let a = clock.unix_millis();
/// std::thread::sleep(std::time::Duration::from_millis(3));
/// assert!(clock.unix_millis() >= a);
/// ```
#[derive(Clone, Debug)]
pub struct MonotonicClock {
    ticker: Arc<Ticker>,
    origin: u64,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Starts a clock whose origin is the current wall-clock time.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(SystemClock.unix_millis())
    }

    /// Starts a clock that reads `origin` (UNIX milliseconds) right now and
    /// advances monotonically from there.
    #[must_use]
    pub fn starting_at(origin: u64) -> Self {
        let start = Instant::now();
        let ticker = Arc::new(Ticker {
            elapsed: AtomicU64::new(0),
            _handle: OnceLock::new(),
        });

        let weak = Arc::downgrade(&ticker);
        let handle = thread::spawn(move || {
            let mut next = 0;
            loop {
                let Some(ticker) = weak.upgrade() else {
                    break;
                };

                let target = start + Duration::from_millis(next);
                let now = Instant::now();
                if now < target {
                    thread::sleep(target - now);
                }

                let elapsed = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                ticker.elapsed.store(elapsed, Ordering::Release);
                next = elapsed + 1;
            }
        });
        let _ = ticker._handle.set(handle);

        Self { ticker, origin }
    }
}

impl TimeSource for MonotonicClock {
    fn unix_millis(&self) -> u64 {
        self.origin
            .saturating_add(self.ticker.elapsed.load(Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin_and_never_decreases() {
        let clock = MonotonicClock::starting_at(1_000);
        let mut last = clock.unix_millis();
        assert!(last >= 1_000);
        for _ in 0..50 {
            let now = clock.unix_millis();
            assert!(now >= last);
            last = now;
            thread::sleep(Duration::from_micros(200));
        }
    }

    #[test]
    fn advances_with_elapsed_time() {
        let clock = MonotonicClock::starting_at(0);
        thread::sleep(Duration::from_millis(20));
        assert!(clock.unix_millis() >= 5);
    }

    #[test]
    fn tracks_the_wall_clock_at_start() {
        let wall = SystemClock.unix_millis();
        let clock = MonotonicClock::new();
        assert!(clock.unix_millis().abs_diff(wall) < 1_000);
    }
}
