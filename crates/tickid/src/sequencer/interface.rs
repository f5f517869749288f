use std::sync::Arc;

/// The outcome of one [`TickSequencer::issue`] or
/// [`TickSequencer::issue_at`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Issued {
    /// Tick to stamp into the ID. Never earlier than the requested tick.
    pub tick: u64,
    /// Entropy value, unique among values issued for `tick`. Never zero.
    pub value: u64,
}

/// Hands out per-tick unique entropy values.
///
/// Implementations own the shared tick state and are safe to call from any
/// number of threads. The issued tick may be later than the requested one:
/// when the wall clock steps backwards the sequencer stays on the last tick
/// it issued, and when a tick's value space runs out it folds forward to the
/// next tick.
///
/// # Example
/// ```
/// use tickid::{CounterSequencer, TickSequencer};
///
/// let seq = CounterSequencer::new(8);
/// let a = seq.issue(10);
/// let b = seq.issue(10);
/// assert_eq!((a.tick, a.value), (10, 1));
/// assert_eq!((b.tick, b.value), (10, 2));
///
/// // An earlier tick is served from the last one.
/// assert_eq!(seq.issue(9).tick, 10);
///
/// // Unless it is requested explicitly.
/// assert_eq!(seq.issue_at(9).tick, 9);
/// ```
pub trait TickSequencer {
    /// Issues a value for the current clock reading `tick`.
    ///
    /// A tick earlier than the last one issued is treated as clock
    /// regression and served from the last tick.
    fn issue(&self, tick: u64) -> Issued;

    /// Issues a value for an explicitly requested `tick`.
    ///
    /// Unlike [`TickSequencer::issue`], an earlier tick is honored and the
    /// sequencer's current tick is left alone. For a tick at or after the
    /// current one this behaves like [`TickSequencer::issue`]. For an earlier
    /// tick the value is unique among consecutive `issue_at` calls for that
    /// tick; it is not checked against values the clock-driven path handed
    /// out for the same tick before moving on. The returned tick only
    /// differs from `tick` when its value space is used up.
    ///
    /// The default forwards to [`TickSequencer::issue`].
    fn issue_at(&self, tick: u64) -> Issued {
        self.issue(tick)
    }
}

impl<S: TickSequencer + ?Sized> TickSequencer for &S {
    fn issue(&self, tick: u64) -> Issued {
        (**self).issue(tick)
    }

    fn issue_at(&self, tick: u64) -> Issued {
        (**self).issue_at(tick)
    }
}

impl<S: TickSequencer + ?Sized> TickSequencer for Arc<S> {
    fn issue(&self, tick: u64) -> Issued {
        (**self).issue(tick)
    }

    fn issue_at(&self, tick: u64) -> Issued {
        (**self).issue_at(tick)
    }
}

impl<S: TickSequencer + ?Sized> TickSequencer for Box<S> {
    fn issue(&self, tick: u64) -> Issued {
        (**self).issue(tick)
    }

    fn issue_at(&self, tick: u64) -> Issued {
        (**self).issue_at(tick)
    }
}

/// Largest value of a `bits`-wide field.
///
/// # Panics
///
/// Panics if `bits` is not in `1..=64`.
pub(crate) const fn value_mask(bits: u32) -> u64 {
    assert!(bits >= 1 && bits <= 64, "entropy width must be 1..=64 bits");
    if bits == 64 {
        u64::MAX
    } else {
        (1 << bits) - 1
    }
}
