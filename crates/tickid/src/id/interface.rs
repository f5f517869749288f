use super::be_bytes::{max_for_width, read_be, write_be};
use crate::{Alphabet, InvalidIdReason, Result};
use core::fmt;
use core::hash::Hash;
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

/// Custom epoch: Wednesday, January 1, 2025 00:00:00 UTC
pub const CUSTOM_EPOCH: Duration = Duration::from_millis(1_735_689_600_000);

/// A trait for fixed-width identifiers backed by a byte array.
///
/// Equality, hashing and the derived [`Ord`] look at every byte. For
/// time-only (k-sortable) comparison see [`crate::ordering`].
pub trait Id:
    Copy
    + Clone
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Raw byte array, `[u8; SIZE]`.
    type Bytes: AsRef<[u8]>
        + AsMut<[u8]>
        + Default
        + Copy
        + fmt::Debug
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Hash;

    /// Text buffer, `[u8; TEXT_SIZE]`.
    type Text: AsRef<[u8]>
        + AsMut<[u8]>
        + Default
        + Copy
        + fmt::Debug
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Hash;

    /// Width of the binary form in bytes.
    const SIZE: usize;

    /// Width of the text form in symbols.
    const TEXT_SIZE: usize;

    /// The all-zero sentinel. Never produced by a generator.
    const NIL: Self;

    /// Alphabet used for the text form.
    const ALPHABET: &'static Alphabet;

    /// Borrows the raw bytes.
    fn as_bytes(&self) -> &[u8];

    /// Copies out the raw bytes.
    fn to_bytes(&self) -> Self::Bytes;

    /// Wraps raw bytes. Any byte pattern is structurally valid.
    fn from_bytes(bytes: Self::Bytes) -> Self;

    /// Builds an ID from a byte slice, validating only its length.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidId`] if `bytes.len() != Self::SIZE`.
    fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(InvalidIdReason::ByteLength {
                expected: Self::SIZE,
                found: bytes.len(),
            }
            .into());
        }
        let mut raw = Self::Bytes::default();
        raw.as_mut().copy_from_slice(bytes);
        Ok(Self::from_bytes(raw))
    }

    /// Returns `true` for the all-zero sentinel.
    fn is_nil(&self) -> bool {
        self.as_bytes().iter().all(|&b| b == 0)
    }
}

/// Unit of the time field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// One tick per second.
    Seconds,
    /// One tick per millisecond.
    Millis,
}

impl Resolution {
    /// Milliseconds per tick.
    #[must_use]
    pub const fn millis(self) -> u64 {
        match self {
            Self::Seconds => 1_000,
            Self::Millis => 1,
        }
    }
}

/// What the entropy field holds, and therefore how IDs are ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntropyPolicy {
    /// Random values, unique within a tick. Ordering looks at time only.
    Random,
    /// A per-tick counter. Ordering looks at the whole ID.
    Sequence,
}

/// Field layout of an ID: `time | tag | entropy`, big-endian, contiguous.
///
/// Usually implemented through [`crate::define_id!`]. All readers and the
/// constructor are provided from the width constants.
///
/// ```text
///  +-----------------+----------------+-------------------------+
///  | time (1..=8 B)  | tag (0..=4 B)  | entropy (1..=8 B)       |
///  +-----------------+----------------+-------------------------+
///  |<-- byte 0                                   byte SIZE-1 -->|
/// ```
pub trait Layout: Id {
    /// Width of the time field.
    const TIME_BYTES: usize;

    /// Width of the machine/process tag field.
    const TAG_BYTES: usize;

    /// Width of the random value or sequence counter.
    const ENTROPY_BYTES: usize;

    /// Unit of the time field.
    const RESOLUTION: Resolution;

    /// Origin of the time field, as an offset from the UNIX epoch.
    const EPOCH: Duration;

    /// How the entropy field is filled.
    const POLICY: EntropyPolicy;

    /// Number of leading bytes inspected by k-ordering.
    const ORDER_BYTES: usize = match Self::POLICY {
        EntropyPolicy::Random => Self::TIME_BYTES,
        EntropyPolicy::Sequence => Self::SIZE,
    };

    /// Returns the time field, in ticks since [`Layout::EPOCH`].
    fn time(&self) -> u64 {
        read_be(&self.as_bytes()[..Self::TIME_BYTES])
    }

    /// Borrows the tag field.
    fn tag(&self) -> &[u8] {
        &self.as_bytes()[Self::TIME_BYTES..Self::TIME_BYTES + Self::TAG_BYTES]
    }

    /// Returns the entropy field as an integer.
    fn entropy(&self) -> u64 {
        read_be(&self.as_bytes()[Self::TIME_BYTES + Self::TAG_BYTES..])
    }

    /// Returns time and entropy as one integer, `time << entropy_bits |
    /// entropy`.
    ///
    /// For sequence layouts this value strictly increases across IDs from one
    /// generator.
    fn combined(&self) -> u128 {
        (u128::from(self.time()) << (Self::ENTROPY_BYTES * 8)) | u128::from(self.entropy())
    }

    /// Largest representable time value.
    #[must_use]
    fn max_time() -> u64 {
        max_for_width(Self::TIME_BYTES)
    }

    /// Largest representable entropy value.
    #[must_use]
    fn max_entropy() -> u64 {
        max_for_width(Self::ENTROPY_BYTES)
    }

    /// Assembles an ID from its fields.
    ///
    /// Each value is truncated to its field width. `tag` keeps its low
    /// [`Layout::TAG_BYTES`] bytes.
    #[must_use]
    fn from_components(time: u64, tag: u32, entropy: u64) -> Self {
        let mut raw = Self::Bytes::default();
        let bytes = raw.as_mut();
        let (time_field, rest) = bytes.split_at_mut(Self::TIME_BYTES);
        let (tag_field, entropy_field) = rest.split_at_mut(Self::TAG_BYTES);
        write_be(time_field, time);
        write_be(tag_field, u64::from(tag));
        write_be(entropy_field, entropy);
        Self::from_bytes(raw)
    }

    /// Converts milliseconds since the UNIX epoch into ticks since
    /// [`Layout::EPOCH`]. Times before the epoch clamp to zero.
    #[must_use]
    fn ticks_at(unix_millis: u64) -> u64 {
        #[allow(clippy::cast_possible_truncation)]
        let epoch = Self::EPOCH.as_millis() as u64;
        unix_millis.saturating_sub(epoch) / Self::RESOLUTION.millis()
    }

    /// Milliseconds since the UNIX epoch at the start of this ID's tick.
    fn unix_millis(&self) -> u64 {
        #[allow(clippy::cast_possible_truncation)]
        let epoch = Self::EPOCH.as_millis() as u64;
        self.time()
            .saturating_mul(Self::RESOLUTION.millis())
            .saturating_add(epoch)
    }

    /// Returns the time field as a [`SystemTime`], truncated to the
    /// resolution.
    fn datetime(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(self.unix_millis())
    }
}

/// Milliseconds since the UNIX epoch for `at`; times before 1970 map to zero.
#[must_use]
pub fn unix_millis_of(at: SystemTime) -> u64 {
    let millis = at
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_millis();
    u64::try_from(millis).unwrap_or(u64::MAX)
}
