use super::interface::value_mask;
use super::mutex::{Mutex, lock};
use crate::{Issued, Layout, RandSource, TickSequencer};
use std::collections::HashSet;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Values drawn for one tick.
#[derive(Debug, Default)]
struct TickSet {
    tick: u64,
    seen: HashSet<u64>,
}

impl TickSet {
    fn reset(&mut self, tick: u64) {
        self.tick = tick;
        self.seen.clear();
    }

    fn is_full(&self, max: u64) -> bool {
        self.seen.len() as u64 >= max
    }

    fn draw(&mut self, rng: &impl RandSource, max: u64) -> Issued {
        loop {
            let value = rng.rand() & max;
            if value != 0 && self.seen.insert(value) {
                return Issued {
                    tick: self.tick,
                    value,
                };
            }
        }
    }
}

#[derive(Debug, Default)]
struct RandomState {
    /// The latest tick issued.
    current: TickSet,
    /// The last explicitly requested tick earlier than `current`.
    past: TickSet,
}

/// A lock-based sequencer that issues random values, unique within a tick.
///
/// Every value drawn for the current tick is remembered in a set; a draw that
/// repeats a remembered value (or is zero) is redrawn. When the tick
/// advances the set is cleared in place, so once it has grown to the peak
/// per-tick rate no further allocation happens.
///
/// Explicit requests for an earlier tick through
/// [`TickSequencer::issue_at`] draw against a second set that remembers the
/// most recent such tick. If that tick is full the value comes from the
/// latest tick instead.
///
/// IDs built from these values are k-sortable by time only: two IDs in the
/// same tick have no defined order.
///
/// ## Recommended When
/// - IDs should not reveal how many were issued in a tick
/// - The per-tick rate is far below the value space (the set grows with it)
///
/// ## See Also
/// - [`CounterSequencer`](crate::CounterSequencer)
#[derive(Debug)]
pub struct RandomSequencer<R: RandSource> {
    #[cfg(feature = "cache-padded")]
    state: crossbeam_utils::CachePadded<Mutex<RandomState>>,
    #[cfg(not(feature = "cache-padded"))]
    state: Mutex<RandomState>,
    max: u64,
    rng: R,
}

impl<R: RandSource> RandomSequencer<R> {
    /// Creates a sequencer drawing `bits`-wide values from `rng`.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is not in `1..=64`.
    ///
    /// # Example
    /// ```
    /// use tickid::{RandomSequencer, ThreadRandom, TickSequencer};
    ///
    /// let seq = RandomSequencer::new(16, ThreadRandom);
    /// let issued = seq.issue(7);
    /// assert_eq!(issued.tick, 7);
    /// assert!(issued.value >= 1 && issued.value <= 0xFFFF);
    /// ```
    pub fn new(bits: u32, rng: R) -> Self {
        let state = Mutex::new(RandomState::default());
        Self {
            #[cfg(feature = "cache-padded")]
            state: crossbeam_utils::CachePadded::new(state),
            #[cfg(not(feature = "cache-padded"))]
            state,
            max: value_mask(bits),
            rng,
        }
    }

    /// Creates a sequencer sized to the entropy field of `ID`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn for_layout<ID: Layout>(rng: R) -> Self {
        Self::new((ID::ENTROPY_BYTES * 8) as u32, rng)
    }

    /// Largest value this sequencer can issue.
    pub const fn max_value(&self) -> u64 {
        self.max
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn issue_impl(&self, mut tick: u64, exact: bool) -> Issued {
        let mut guard = lock(&self.state);
        let state = &mut *guard;

        loop {
            if tick > state.current.tick {
                state.current.reset(tick);
            }

            if tick == state.current.tick {
                // Every non-zero value is taken, no draw can succeed on this tick.
                if state.current.is_full(self.max) {
                    let next = tick.saturating_add(1);
                    Self::cold_fold_forward(tick, next);
                    state.current.reset(next);
                }
                return state.current.draw(&self.rng, self.max);
            }

            if !exact {
                Self::cold_clock_behind(tick, state.current.tick);
                tick = state.current.tick;
                continue;
            }

            if tick != state.past.tick {
                state.past.reset(tick);
            }
            if state.past.is_full(self.max) {
                Self::cold_fold_forward(tick, state.current.tick);
                tick = state.current.tick;
                continue;
            }
            return state.past.draw(&self.rng, self.max);
        }
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_behind(now: u64, last: u64) {
        #[cfg(feature = "tracing")]
        tracing::warn!(now, last, "clock moved backwards, reusing last tick");
        #[cfg(not(feature = "tracing"))]
        let _ = (now, last);
    }

    #[cold]
    #[inline(never)]
    fn cold_fold_forward(from: u64, to: u64) {
        #[cfg(feature = "tracing")]
        tracing::warn!(from, to, "random value space exhausted, folding forward");
        #[cfg(not(feature = "tracing"))]
        let _ = (from, to);
    }
}

impl<R: RandSource> TickSequencer for RandomSequencer<R> {
    fn issue(&self, tick: u64) -> Issued {
        self.issue_impl(tick, false)
    }

    fn issue_at(&self, tick: u64) -> Issued {
        self.issue_impl(tick, true)
    }
}
