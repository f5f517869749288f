use crate::TimeSource;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};
#[cfg(target_arch = "wasm32")]
use web_time::{SystemTime, UNIX_EPOCH};

/// The wall clock.
///
/// Follows every adjustment of the system clock, including steps backwards.
/// Sequencers absorb a regression by staying on the last tick they issued.
/// On `wasm32` the clock is read through `web-time`.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn unix_millis(&self) -> u64 {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis());
        u64::try_from(millis).unwrap_or(u64::MAX)
    }
}
