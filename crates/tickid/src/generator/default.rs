use crate::{
    CounterSequencer, EntropyPolicy, Generator, Issued, Layout, ProcessTag, RandomSequencer,
    SystemClock, ThreadRandom, TickSequencer,
};

/// The sequencer matching a layout's [`EntropyPolicy`].
#[derive(Debug)]
pub enum PolicySequencer {
    /// For [`EntropyPolicy::Random`] layouts.
    Random(RandomSequencer<ThreadRandom>),
    /// For [`EntropyPolicy::Sequence`] layouts.
    Counter(CounterSequencer),
}

impl PolicySequencer {
    /// Picks [`RandomSequencer`] or [`CounterSequencer`] from `ID::POLICY`,
    /// sized to the entropy field of `ID`.
    #[must_use]
    pub fn for_layout<ID: Layout>() -> Self {
        match ID::POLICY {
            EntropyPolicy::Random => Self::Random(RandomSequencer::for_layout::<ID>(ThreadRandom)),
            EntropyPolicy::Sequence => Self::Counter(CounterSequencer::for_layout::<ID>()),
        }
    }
}

impl TickSequencer for PolicySequencer {
    fn issue(&self, tick: u64) -> Issued {
        match self {
            Self::Random(seq) => seq.issue(tick),
            Self::Counter(seq) => seq.issue(tick),
        }
    }

    fn issue_at(&self, tick: u64) -> Issued {
        match self {
            Self::Random(seq) => seq.issue_at(tick),
            Self::Counter(seq) => seq.issue_at(tick),
        }
    }
}

/// A generator with the policy sequencer, the wall clock and, for tagged
/// layouts, the [`ProcessTag`] of the current process.
///
/// Each ID type keeps one of these behind `Type::generate()`.
pub type DefaultGenerator<ID> = Generator<ID, PolicySequencer, SystemClock>;

impl<ID: Layout> Default for Generator<ID, PolicySequencer, SystemClock> {
    fn default() -> Self {
        let tag = if ID::TAG_BYTES > 0 {
            ProcessTag::current().as_u32()
        } else {
            0
        };
        Self::with_tag(PolicySequencer::for_layout::<ID>(), SystemClock, tag)
    }
}
