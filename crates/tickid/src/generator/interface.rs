use crate::{Issued, Layout, TickSequencer, TimeSource, unix_millis_of};
use core::marker::PhantomData;
use std::time::SystemTime;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Generates IDs of type `ID` by stamping the current tick and a sequencer
/// value into the layout.
///
/// The generator itself holds no mutable state: the sequencer owns the tick
/// state and the tag is fixed at construction. A generator is `Send + Sync`
/// whenever its sequencer and time source are, so one instance can be shared
/// by reference (or [`Arc`](std::sync::Arc)) across threads.
///
/// Generation never fails and never yields [`Id::NIL`](crate::Id::NIL).
///
/// # Example
/// ```
/// use tickid::{CounterSequencer, Generator, Layout, MonoId, SystemClock};
///
/// let generator: Generator<MonoId, _, _> =
///     Generator::new(CounterSequencer::for_layout::<MonoId>(), SystemClock);
///
/// let a = generator.next_id();
/// let b = generator.next_id();
/// assert!(a < b);
/// assert!(a.combined() < b.combined());
/// ```
pub struct Generator<ID, S, T>
where
    ID: Layout,
    S: TickSequencer,
    T: TimeSource,
{
    sequencer: S,
    time: T,
    tag: u32,
    _id: PhantomData<fn() -> ID>,
}

impl<ID, S, T> Generator<ID, S, T>
where
    ID: Layout,
    S: TickSequencer,
    T: TimeSource,
{
    /// Creates a generator with an all-zero tag.
    pub const fn new(sequencer: S, time: T) -> Self {
        Self::with_tag(sequencer, time, 0)
    }

    /// Creates a generator that writes `tag` into the tag field.
    ///
    /// Only the low [`Layout::TAG_BYTES`] bytes of `tag` are kept.
    pub const fn with_tag(sequencer: S, time: T, tag: u32) -> Self {
        Self {
            sequencer,
            time,
            tag,
            _id: PhantomData,
        }
    }

    /// Generates an ID for the current time.
    ///
    /// If the clock reads earlier than the last issued tick, the ID is
    /// stamped with that tick instead.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> ID {
        let tick = ID::ticks_at(self.time.unix_millis());
        self.assemble(self.sequencer.issue(tick))
    }

    /// Generates an ID stamped with `at` instead of the current time.
    ///
    /// The tick of `at` is stamped even when it is earlier than ticks already
    /// issued.
    pub fn next_id_at(&self, at: SystemTime) -> ID {
        self.next_id_at_millis(unix_millis_of(at))
    }

    /// Generates an ID stamped with `unix_millis` milliseconds since
    /// 1970-01-01 UTC. See [`Generator::next_id_at`].
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id_at_millis(&self, unix_millis: u64) -> ID {
        self.assemble(self.sequencer.issue_at(ID::ticks_at(unix_millis)))
    }

    fn assemble(&self, issued: Issued) -> ID {
        ID::from_components(issued.tick, self.tag, issued.value)
    }

    /// The tag written into every ID.
    pub const fn tag(&self) -> u32 {
        self.tag
    }

    /// The sequencer handing out entropy values.
    pub const fn sequencer(&self) -> &S {
        &self.sequencer
    }

    /// The clock read by [`Generator::next_id`].
    pub const fn time_source(&self) -> &T {
        &self.time
    }
}

impl<ID, S, T> core::fmt::Debug for Generator<ID, S, T>
where
    ID: Layout,
    S: TickSequencer + core::fmt::Debug,
    T: TimeSource + core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Generator")
            .field("sequencer", &self.sequencer)
            .field("time", &self.time)
            .field("tag", &format_args!("{:08x}", self.tag))
            .finish()
    }
}
