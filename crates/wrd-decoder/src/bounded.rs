use wrd_wire::varint::decode_varint;
use wrd_wire::{ByteOrder, FixedInt, LenencPrefix, WireError};

use crate::decode::Decode;
use crate::scan::{find_newline, find_nul, line_end, to_text};
use crate::unchecked::UncheckedDecoder;

/// Bounds-checked cursor over an untrusted buffer.
///
/// Every read validates its full span against the remaining length before
/// touching the buffer. A read that would run past the end returns
/// [`WireError::InsufficientData`] and leaves the cursor exactly where it
/// was, so the caller can fetch more bytes from its transport and retry
/// from the same frame start.
///
/// ```text
///   buf:  [ consumed ........ | remaining ................. ]
///          0                  pos                           len
/// ```
///
/// `pos <= len` holds after every call.
#[derive(Clone, Debug)]
pub struct BoundedDecoder<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BoundedDecoder<'a> {
    /// Create a decoder positioned at the start of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Validate that `n` bytes remain, step over them, and return an
    /// [`UncheckedDecoder`] over exactly that span.
    ///
    /// This is the intended handoff between the two modes: check a frame
    /// boundary once here, then decode the frame's fields without further
    /// checks.
    ///
    /// # Errors
    ///
    /// [`WireError::InsufficientData`] if fewer than `n` bytes remain. The
    /// cursor does not move.
    pub fn split_frame(&mut self, n: usize) -> Result<UncheckedDecoder<'a>, WireError> {
        let frame = self.take(n)?;
        Ok(UncheckedDecoder::new(frame))
    }

    /// Unread bytes, as an error-context helper.
    fn available(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Borrow the next `n` bytes and advance past them, or fail without
    /// moving.
    fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let end = self
            .pos
            .checked_add(n)
            .ok_or(WireError::short(self.pos, n, self.buf.len()))?;
        let span = self
            .buf
            .get(self.pos..end)
            .ok_or(WireError::short(self.pos, n, self.buf.len()))?;
        self.pos = end;
        Ok(span)
    }

    /// Error for a terminator scan that reached the end of the buffer.
    fn unterminated(&self) -> WireError {
        let available = self.available();
        WireError::InsufficientData {
            offset: self.pos,
            needed: available + 1,
            available,
        }
    }
}

impl Decode for BoundedDecoder<'_> {
    type Error = WireError;

    fn position(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, WireError> {
        self.take(n).map(<[u8]>::to_vec)
    }

    fn read_byte(&mut self) -> Result<u8, WireError> {
        let byte = *self
            .buf
            .get(self.pos)
            .ok_or(WireError::short(self.pos, 1, self.buf.len()))?;
        self.pos += 1;
        Ok(byte)
    }

    fn skip(&mut self, n: usize) -> Result<(), WireError> {
        self.take(n).map(|_| ())
    }

    fn read_fixed_string(&mut self, n: usize) -> Result<String, WireError> {
        if n == 0 {
            return Ok(String::new());
        }
        self.take(n).map(to_text)
    }

    fn read_cstring(&mut self) -> Result<String, WireError> {
        let rest = &self.buf[self.pos..];
        let nul = find_nul(rest).ok_or_else(|| self.unterminated())?;
        let text = to_text(&rest[..nul]);
        self.pos += nul + 1;
        Ok(text)
    }

    fn read_line(&mut self) -> Result<String, WireError> {
        let rest = &self.buf[self.pos..];
        let newline = find_newline(rest).ok_or_else(|| self.unterminated())?;
        let text = to_text(&rest[..line_end(rest, newline)]);
        self.pos += newline + 1;
        Ok(text)
    }

    fn read_int<T: FixedInt>(&mut self, order: ByteOrder) -> Result<T, WireError> {
        self.take(T::WIDTH).map(|span| T::from_slice(span, order))
    }

    fn read_varint(&mut self) -> Result<u64, WireError> {
        let (value, n) = decode_varint(&self.buf[self.pos..]).map_err(|_| self.unterminated())?;
        self.pos += n;
        Ok(value)
    }

    fn read_length_encoded_integer(&mut self) -> Result<u64, WireError> {
        let marker = *self
            .buf
            .get(self.pos)
            .ok_or(WireError::short(self.pos, 1, self.buf.len()))?;
        let prefix = LenencPrefix::from_marker(marker);

        // Validate marker + payload as one span before consuming any of it
        let span = self.take(prefix.encoded_len())?;
        Ok(prefix.value(&span[1..]))
    }
}
