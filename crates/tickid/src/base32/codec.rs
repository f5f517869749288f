use super::alphabet::{Alphabet, NO_VALUE};
use crate::{InvalidIdReason, Result};

const BITS_PER_CHAR: usize = 5;

/// Number of base32 symbols needed for `bytes` raw bytes: `ceil(bytes * 8 /
/// 5)`.
#[must_use]
pub const fn base32_len(bytes: usize) -> usize {
    (bytes * 8).div_ceil(BITS_PER_CHAR)
}

/// Encodes `input` into `out`, five bits per symbol, most significant bits
/// first.
///
/// When `input.len() * 8` is not a multiple of five, the final symbol carries
/// the remaining bits left-aligned with zero padding on the right. No padding
/// symbols are emitted.
///
/// # Panics
///
/// Panics if `out.len() != base32_len(input.len())`. Callers encoding fixed
/// width IDs use arrays sized at compile time, so this never fires there.
#[inline]
pub fn encode_into(alphabet: &Alphabet, input: &[u8], out: &mut [u8]) {
    assert_eq!(out.len(), base32_len(input.len()), "output buffer size");

    let mut acc = 0_u16;
    let mut bits = 0;
    let mut o = 0;
    for &b in input {
        acc = (acc << 8) | u16::from(b);
        bits += 8;
        while bits >= BITS_PER_CHAR {
            bits -= BITS_PER_CHAR;
            out[o] = alphabet.symbol((acc >> bits) as u8);
            o += 1;
        }
    }
    if bits > 0 {
        out[o] = alphabet.symbol((acc << (BITS_PER_CHAR - bits)) as u8);
    }
}

/// Decodes `text` into `out` without checking that the encoding is canonical.
///
/// The per-symbol loop accumulates lookup results with a bitwise OR and only
/// tests for the invalid sentinel once, after the loop. Trailing padding bits
/// in the last symbol are discarded; pair with [`is_canonical`] to reject
/// strings that set them.
///
/// # Errors
///
/// - [`InvalidIdReason::Length`] if `text.len() != base32_len(out.len())`
/// - [`InvalidIdReason::Symbol`] if any byte is outside the alphabet
pub fn decode_into(alphabet: &Alphabet, text: &[u8], out: &mut [u8]) -> Result<()> {
    let expected = base32_len(out.len());
    if text.len() != expected {
        return Err(InvalidIdReason::Length {
            expected,
            found: text.len(),
        }
        .into());
    }

    let mut seen = 0_u8;
    let mut acc = 0_u16;
    let mut bits = 0;
    let mut o = 0;
    for &c in text {
        let v = alphabet.lookup(c);
        seen |= v;
        acc = (acc << BITS_PER_CHAR) | u16::from(v & 0x1F);
        bits += BITS_PER_CHAR;
        if bits >= 8 {
            bits -= 8;
            out[o] = (acc >> bits) as u8;
            o += 1;
        }
    }

    if seen & !0x1F != 0 {
        return Err(cold_invalid_symbol(alphabet, text));
    }
    debug_assert_eq!(o, out.len());
    Ok(())
}

#[cold]
#[inline(never)]
fn cold_invalid_symbol(alphabet: &Alphabet, text: &[u8]) -> crate::Error {
    let (index, byte) = text
        .iter()
        .copied()
        .enumerate()
        .find(|&(_, c)| alphabet.lookup(c) == NO_VALUE)
        .unwrap_or((0, text.first().copied().unwrap_or_default()));
    InvalidIdReason::Symbol { byte, index }.into()
}

/// Returns `true` when encoding `bytes` reproduces `text` exactly.
///
/// `scratch` must be `base32_len(bytes.len())` long; it receives the
/// re-encoded symbols.
#[must_use]
pub fn is_canonical(alphabet: &Alphabet, bytes: &[u8], text: &[u8], scratch: &mut [u8]) -> bool {
    encode_into(alphabet, bytes, scratch);
    *scratch == *text
}
