use core::fmt;

/// A result type defaulting to this crate's [`Error`].
///
/// Generation never fails; only parsing text or raw bytes back into an ID
/// produces errors.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `tickid` can produce.
///
/// There is exactly one kind of failure: the input does not describe a valid
/// identifier. The [`InvalidIdReason`] is carried for diagnostics only; callers
/// are not expected to branch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input is not a valid identifier.
    #[error("invalid identifier: {0}")]
    InvalidId(InvalidIdReason),
}

/// Why an input was rejected as an identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InvalidIdReason {
    /// The text form has the wrong number of symbols.
    Length {
        /// Fixed text length for the identifier type.
        expected: usize,
        /// Length of the rejected input.
        found: usize,
    },
    /// The text form contains a byte outside the alphabet.
    Symbol {
        /// The offending byte.
        byte: u8,
        /// Position of the first offending byte.
        index: usize,
    },
    /// The text decodes, but re-encoding it yields a different string. This
    /// happens when the unused trailing bits of the last symbol are set.
    NonCanonical,
    /// The binary form has the wrong number of bytes.
    ByteLength {
        /// Fixed byte width for the identifier type.
        expected: usize,
        /// Length of the rejected input.
        found: usize,
    },
}

impl fmt::Display for InvalidIdReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { expected, found } => {
                write!(f, "expected {expected} symbols, found {found}")
            }
            Self::Symbol { byte, index } => {
                write!(f, "byte {byte:#04x} at index {index} is not in the alphabet")
            }
            Self::NonCanonical => f.write_str("non-canonical encoding"),
            Self::ByteLength { expected, found } => {
                write!(f, "expected {expected} bytes, found {found}")
            }
        }
    }
}

impl From<InvalidIdReason> for Error {
    fn from(reason: InvalidIdReason) -> Self {
        Self::InvalidId(reason)
    }
}

impl Error {
    /// Returns the diagnostic reason carried by this error.
    #[must_use]
    pub const fn reason(&self) -> InvalidIdReason {
        match self {
            Self::InvalidId(reason) => *reason,
        }
    }
}
