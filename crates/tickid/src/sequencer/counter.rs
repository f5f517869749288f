use super::interface::value_mask;
use crate::{Issued, Layout, TickSequencer};
use portable_atomic::{AtomicU128, Ordering};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// First counter value of every tick. Zero is reserved so that no sequencer
/// ever produces the `NIL` ID.
const FLOOR: u64 = 1;

/// What a [`CounterSequencer`] does when the counter for a tick is used up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rollover {
    /// Move to the next tick and restart the counter. IDs keep strictly
    /// increasing, at the cost of running ahead of the clock under sustained
    /// overload.
    #[default]
    FoldForward,
    /// Restart the counter on the same tick. Values within the tick repeat,
    /// so uniqueness and ordering are lost once the counter wraps.
    Wrap,
}

/// A lock-free sequencer that issues an increasing counter per tick.
///
/// The last tick and counter live together in one [`AtomicU128`] (`tick` in
/// the high 64 bits, `counter` in the low 64 bits) and advance through a
/// compare-and-swap retry loop. With the default [`Rollover::FoldForward`],
/// `(tick, value)` pairs issued by one sequencer are strictly increasing in
/// issue order.
///
/// Explicit requests for an earlier tick through
/// [`TickSequencer::issue_at`] count on a second atomic that remembers the
/// most recent such tick.
///
/// ## Recommended When
/// - IDs must sort in generation order within a tick
/// - Throughput matters more than hiding the per-tick issue count
///
/// ## See Also
/// - [`RandomSequencer`](crate::RandomSequencer)
#[derive(Debug)]
pub struct CounterSequencer {
    #[cfg(feature = "cache-padded")]
    state: crossbeam_utils::CachePadded<AtomicU128>,
    #[cfg(not(feature = "cache-padded"))]
    state: AtomicU128,
    /// Tick and counter of the last explicitly requested earlier tick.
    past: AtomicU128,
    max: u64,
    rollover: Rollover,
}

#[derive(Clone, Copy)]
enum Step {
    Advance,
    Continue,
    Behind,
    Rolled,
}

impl CounterSequencer {
    /// Creates a sequencer whose counter is `bits` wide.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is not in `1..=64`.
    #[must_use]
    pub fn new(bits: u32) -> Self {
        let state = AtomicU128::new(0);
        Self {
            #[cfg(feature = "cache-padded")]
            state: crossbeam_utils::CachePadded::new(state),
            #[cfg(not(feature = "cache-padded"))]
            state,
            past: AtomicU128::new(0),
            max: value_mask(bits),
            rollover: Rollover::default(),
        }
    }

    /// Creates a sequencer sized to the entropy field of `ID`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn for_layout<ID: Layout>() -> Self {
        Self::new((ID::ENTROPY_BYTES * 8) as u32)
    }

    /// Sets the behavior on counter exhaustion.
    ///
    /// # Example
    /// ```
    /// use tickid::{CounterSequencer, Rollover, TickSequencer};
    ///
    /// let seq = CounterSequencer::new(1).with_rollover(Rollover::Wrap);
    /// assert_eq!(seq.issue(3).value, 1);
    /// // A 1-bit counter is full after one value; wrap stays on tick 3.
    /// let issued = seq.issue(3);
    /// assert_eq!((issued.tick, issued.value), (3, 1));
    /// ```
    #[must_use]
    pub const fn with_rollover(mut self, rollover: Rollover) -> Self {
        self.rollover = rollover;
        self
    }

    /// The configured [`Rollover`].
    #[must_use]
    pub const fn rollover(&self) -> Rollover {
        self.rollover
    }

    /// Largest value this sequencer can issue.
    #[must_use]
    pub const fn max_value(&self) -> u64 {
        self.max
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn unpack(raw: u128) -> (u64, u64) {
        ((raw >> 64) as u64, raw as u64)
    }

    const fn pack(tick: u64, counter: u64) -> u128 {
        ((tick as u128) << 64) | counter as u128
    }

    fn step(&self, tick: u64, last: u64, counter: u64) -> (u64, u64, Step) {
        if tick > last {
            return (tick, FLOOR, Step::Advance);
        }
        if counter < self.max {
            let step = if tick < last { Step::Behind } else { Step::Continue };
            return (last, counter + 1, step);
        }
        match self.rollover {
            Rollover::FoldForward => (last.saturating_add(1), FLOOR, Step::Rolled),
            Rollover::Wrap => (last, FLOOR, Step::Rolled),
        }
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn issue_impl(&self, tick: u64, exact: bool) -> Issued {
        let mut current = self.state.load(Ordering::Acquire);
        loop {
            let (last, counter) = Self::unpack(current);
            if exact && tick < last {
                return self.issue_past(tick);
            }
            let (next_tick, next_counter, step) = self.step(tick, last, counter);

            match self.state.compare_exchange_weak(
                current,
                Self::pack(next_tick, next_counter),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    match step {
                        Step::Behind => Self::cold_clock_behind(tick, last),
                        Step::Rolled => self.cold_rolled(last, next_tick),
                        Step::Advance | Step::Continue => {}
                    }
                    return Issued {
                        tick: next_tick,
                        value: next_counter,
                    };
                }
                // Another caller won the race; retry against its state.
                Err(actual) => current = actual,
            }
        }
    }

    /// Counts on a tick earlier than the current one without touching the
    /// current state. Only the most recent such tick is remembered.
    fn issue_past(&self, tick: u64) -> Issued {
        let mut current = self.past.load(Ordering::Acquire);
        loop {
            let (last, counter) = Self::unpack(current);
            let next_counter = if last != tick {
                FLOOR
            } else if counter < self.max {
                counter + 1
            } else {
                match self.rollover {
                    // The latest tick is the earliest one still guaranteed
                    // to be unused for this value.
                    Rollover::FoldForward => {
                        let (latest, _) = Self::unpack(self.state.load(Ordering::Acquire));
                        let issued = self.issue_impl(latest, false);
                        self.cold_rolled(tick, issued.tick);
                        return issued;
                    }
                    Rollover::Wrap => FLOOR,
                }
            };

            match self.past.compare_exchange_weak(
                current,
                Self::pack(tick, next_counter),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    if last == tick && counter >= self.max {
                        self.cold_rolled(tick, tick);
                    }
                    return Issued {
                        tick,
                        value: next_counter,
                    };
                }
                Err(actual) => current = actual,
            }
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
    fn cold_rolled(&self, from: u64, to: u64) {
        #[cfg(feature = "tracing")]
        tracing::warn!(from, to, rollover = ?self.rollover, "counter exhausted");
        #[cfg(not(feature = "tracing"))]
        let _ = (self, from, to);
    }
}

impl TickSequencer for CounterSequencer {
    fn issue(&self, tick: u64) -> Issued {
        self.issue_impl(tick, false)
    }

    fn issue_at(&self, tick: u64) -> Issued {
        self.issue_impl(tick, true)
    }
}
