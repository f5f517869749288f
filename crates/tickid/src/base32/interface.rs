use super::codec::{decode_into, encode_into, is_canonical};
use crate::{Id, InvalidIdReason, Result};
use core::fmt;
use core::marker::PhantomData;

/// Extension trait for encoding IDs to, and decoding them from, their
/// fixed-width base32 text form.
///
/// Every [`Id`] gets this trait through a blanket impl. Encoding never
/// allocates: [`Base32Ext::encode`] returns a stack formatter and
/// [`Base32Ext::encode_to_buf`] writes into a caller-supplied array.
///
/// The alphabet comes from [`Id::ALPHABET`].
pub trait Base32Ext: Id {
    /// Returns a zeroed, stack-allocated buffer sized for this ID's text form.
    #[must_use]
    fn buf() -> Self::Text {
        Self::Text::default()
    }

    /// Returns a formatter holding the text form of the ID.
    ///
    /// # Example
    ///
    /// ```
    /// use tickid::{Base32Ext, TickId};
    ///
    /// let id = TickId::from_array([0x4d, 0x88, 0xe1, 0x5b, 0x60, 0xf4, 0x86, 0xe4, 0x28, 0x41]);
    /// assert_eq!(id.encode(), "9p4f2pv0yj3f8b21");
    /// ```
    fn encode(&self) -> Base32Formatter<Self> {
        Base32Formatter::new(self)
    }

    /// Encodes the ID into `buf` and returns a `&str` view of it.
    ///
    /// # Example
    ///
    /// ```
    /// use tickid::{Base32Ext, TickId};
    ///
    /// let id = TickId::from_array([0x4d, 0x88, 0xe1, 0x5b, 0x60, 0xf4, 0x86, 0xe4, 0x28, 0x41]);
    /// let mut buf = TickId::buf();
    /// assert_eq!(id.encode_to_buf(&mut buf), "9p4f2pv0yj3f8b21");
    /// ```
    fn encode_to_buf<'buf>(&self, buf: &'buf mut Self::Text) -> &'buf str {
        encode_into(Self::ALPHABET, self.as_bytes(), buf.as_mut());
        // SAFETY: `Alphabet::new` only admits ASCII symbols and every byte of
        // `buf` was just written from the alphabet.
        unsafe { core::str::from_utf8_unchecked(AsRef::<[u8]>::as_ref(&*buf)) }
    }

    /// Decodes the text form of an ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidId`] if the input
    /// - is not exactly [`Id::TEXT_SIZE`] bytes long,
    /// - contains a byte outside the alphabet, or
    /// - is not the canonical encoding of the bytes it decodes to (unused
    ///   trailing bits of the last symbol are set).
    ///
    /// # Example
    ///
    /// ```
    /// use tickid::{Base32Ext, Error, ShortId};
    ///
    /// assert!(ShortId::decode("zzzzzzzzzzzzy").is_ok());
    /// // Same bytes, but the last symbol sets the padding bit
    /// assert!(matches!(ShortId::decode("zzzzzzzzzzzzz"), Err(Error::InvalidId(_))));
    /// ```
    ///
    /// [`Error::InvalidId`]: crate::Error::InvalidId
    fn decode(s: impl AsRef<[u8]>) -> Result<Self> {
        let text = s.as_ref();
        let mut bytes = Self::Bytes::default();
        decode_into(Self::ALPHABET, text, bytes.as_mut())?;

        let mut scratch = Self::buf();
        if !is_canonical(Self::ALPHABET, bytes.as_ref(), text, scratch.as_mut()) {
            return Err(InvalidIdReason::NonCanonical.into());
        }
        Ok(Self::from_bytes(bytes))
    }
}

impl<ID: Id> Base32Ext for ID {}

/// A stack buffer holding the text form of an ID.
///
/// Implements [`fmt::Display`] and [`AsRef<str>`], and compares equal to the
/// matching `&str`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base32Formatter<T: Id> {
    buf: T::Text,
    _id: PhantomData<T>,
}

impl<T: Id> Base32Formatter<T> {
    /// Encodes `id` into a new formatter.
    pub fn new(id: &T) -> Self {
        let mut buf = T::buf();
        id.encode_to_buf(&mut buf);
        Self {
            buf,
            _id: PhantomData,
        }
    }

    /// Returns a `&str` view of the text form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf` was filled by `encode_to_buf`, which only writes
        // ASCII alphabet symbols.
        unsafe { core::str::from_utf8_unchecked(self.buf.as_ref()) }
    }

    /// Consumes the formatter and returns the raw buffer.
    pub fn into_inner(self) -> T::Text {
        self.buf
    }
}

impl<T: Id> fmt::Display for Base32Formatter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: Id> fmt::Debug for Base32Formatter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<T: Id> AsRef<str> for Base32Formatter<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T: Id> PartialEq<str> for Base32Formatter<T> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<T: Id> PartialEq<&str> for Base32Formatter<T> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<T: Id> PartialEq<String> for Base32Formatter<T> {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}
