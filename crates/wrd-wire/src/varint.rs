/// Number of bytes after which every bit of a `u64` has been filled.
/// ceil(64 / 7) = 10 bytes.
pub const MAX_VARINT_BYTES: usize = 10;

use crate::error::WireError;

/// Decode an unsigned LEB128 varint from the start of `buf`.
///
/// Each byte contributes its low 7 bits, least-significant group first;
/// a clear high bit ends the value. Groups past the 64th bit are
/// consumed but dropped, so an over-long encoding still terminates where
/// its last byte says it does.
///
/// # Returns
///
/// `(decoded_value, bytes_consumed)` on success.
///
/// # Errors
///
/// [`WireError::InsufficientData`] if `buf` ends while the continuation bit
/// is still set. The offset is relative to `buf`.
///
/// # Wire format examples
///
/// | Value   | Encoded bytes        | Length |
/// |---------|----------------------|--------|
/// | 0       | `[0x00]`             | 1      |
/// | 127     | `[0x7F]`             | 1      |
/// | 128     | `[0x80, 0x01]`       | 2      |
/// | 300     | `[0xAC, 0x02]`       | 2      |
/// | 16384   | `[0x80, 0x80, 0x01]` | 3      |
pub fn decode_varint(buf: &[u8]) -> Result<(u64, usize), WireError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    for (i, &byte) in buf.iter().enumerate() {
        if shift < 64 {
            result |= u64::from(byte & 0x7F) << shift;
        }
        shift = shift.saturating_add(7);

        // If MSB is clear, this is the last byte
        if byte & 0x80 == 0 {
            return Ok((result, i + 1));
        }
    }

    // Ran out of input while MSB was still set
    Err(WireError::short(0, buf.len() + 1, buf.len()))
}

/// Decode a varint from a buffer the caller has already validated.
///
/// Same bit layout as [`decode_varint`], without the end-of-input branch.
///
/// # Panics
///
/// Indexes past the end of `buf` (and panics) if the last byte still has
/// its continuation bit set.
#[inline]
#[must_use]
pub fn decode_varint_trusted(buf: &[u8]) -> (u64, usize) {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;
    let mut i = 0;
    loop {
        let byte = buf[i];
        i += 1;
        if shift < 64 {
            result |= u64::from(byte & 0x7F) << shift;
        }
        shift = shift.saturating_add(7);
        if byte & 0x80 == 0 {
            return (result, i);
        }
    }
}
