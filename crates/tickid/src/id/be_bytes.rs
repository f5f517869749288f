//! Big-endian helpers for fields of 0 to 8 bytes.

/// Reads an unsigned big-endian integer from `src` (at most 8 bytes).
#[inline]
#[must_use]
pub const fn read_be(src: &[u8]) -> u64 {
    debug_assert!(src.len() <= 8);
    let mut acc = 0_u64;
    let mut i = 0;
    while i < src.len() {
        acc = (acc << 8) | src[i] as u64;
        i += 1;
    }
    acc
}

/// Writes the low `dst.len()` bytes of `value` into `dst`, big-endian.
///
/// Higher bytes of `value` are dropped, which masks the value to the field
/// width.
#[inline]
pub const fn write_be(dst: &mut [u8], mut value: u64) {
    debug_assert!(dst.len() <= 8);
    let mut i = dst.len();
    while i > 0 {
        i -= 1;
        dst[i] = value as u8;
        value >>= 8;
    }
}

/// Largest unsigned value that fits in `bytes` bytes.
#[must_use]
pub const fn max_for_width(bytes: usize) -> u64 {
    if bytes >= 8 {
        u64::MAX
    } else {
        (1 << (bytes * 8)) - 1
    }
}
