/// Marker stored in the reverse lookup table for bytes outside the alphabet.
///
/// Any value with one of the top three bits set works as a sentinel since
/// valid symbol values are `0..=31`.
pub(crate) const NO_VALUE: u8 = 0xFF;

/// The default alphabet: digits plus lowercase letters without `a`, `i`, `o`
/// and `u`.
///
/// `k` is placed before `j`, so plain string comparison of encoded IDs does
/// not always follow byte order. Compare IDs, not their text.
pub const DEFAULT_ALPHABET: Alphabet = Alphabet::new(b"0123456789bcdefghkjlmnpqrstvwxyz");

/// Crockford's base32 alphabet, upper case, without `I`, `L`, `O` and `U`.
///
/// Unlike a Crockford decoder, this alphabet is strict: lowercase input and
/// the `O`/`I`/`L` aliases are rejected.
pub const CROCKFORD_ALPHABET: Alphabet = Alphabet::new(b"0123456789ABCDEFGHJKMNPQRSTVWXYZ");

/// A 32-symbol base32 alphabet with its reverse lookup table.
///
/// Alphabets are built at compile time. [`Alphabet::new`] panics (and so fails
/// const evaluation) when a symbol repeats or is not URL-safe, which keeps
/// every encoded string valid ASCII.
///
/// # Example
///
/// ```
/// use tickid::Alphabet;
///
/// const LOWER: Alphabet = Alphabet::new(b"0123456789abcdefghjkmnpqrstvwxyz");
/// assert_eq!(LOWER.symbol(10), b'a');
/// assert_eq!(LOWER.value(b'z'), Some(31));
/// assert_eq!(LOWER.value(b'i'), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: [u8; 32],
    lookup: [u8; 256],
}

impl Alphabet {
    /// Builds an alphabet and its 256-entry reverse lookup table.
    ///
    /// # Panics
    ///
    /// Panics if a symbol appears twice or is not one of `0-9 A-Z a-z - _ . ~`.
    #[must_use]
    pub const fn new(symbols: &[u8; 32]) -> Self {
        let mut lookup = [NO_VALUE; 256];
        let mut i = 0;
        while i < 32 {
            let c = symbols[i];
            assert!(is_url_safe(c), "alphabet symbols must be URL-safe ASCII");
            assert!(lookup[c as usize] == NO_VALUE, "alphabet symbols must be unique");
            lookup[c as usize] = i as u8;
            i += 1;
        }
        Self {
            symbols: *symbols,
            lookup,
        }
    }

    /// Returns the symbol for a 5-bit value. Only the low five bits of `value`
    /// are used.
    #[inline(always)]
    #[allow(clippy::inline_always)]
    #[must_use]
    pub const fn symbol(&self, value: u8) -> u8 {
        self.symbols[(value & 0x1F) as usize]
    }

    /// Returns the 5-bit value of `byte`, or `None` if it is not a symbol.
    #[must_use]
    pub const fn value(&self, byte: u8) -> Option<u8> {
        match self.lookup[byte as usize] {
            NO_VALUE => None,
            v => Some(v),
        }
    }

    /// Raw lookup, returning [`NO_VALUE`] for bytes outside the alphabet.
    #[inline(always)]
    #[allow(clippy::inline_always)]
    pub(crate) const fn lookup(&self, byte: u8) -> u8 {
        self.lookup[byte as usize]
    }

    /// Returns the 32 symbols in value order.
    #[must_use]
    pub const fn symbols(&self) -> &[u8; 32] {
        &self.symbols
    }

    /// Returns the symbols as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match core::str::from_utf8(&self.symbols) {
            Ok(s) => s,
            Err(_) => unreachable!(),
        }
    }
}

impl core::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Alphabet").field(&self.as_str()).finish()
    }
}

const fn is_url_safe(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'-' | b'_' | b'.' | b'~')
}
