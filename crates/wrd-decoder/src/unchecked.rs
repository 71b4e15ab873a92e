use std::convert::Infallible;

use wrd_wire::varint::decode_varint_trusted;
use wrd_wire::{ByteOrder, FixedInt, LenencPrefix};

use crate::decode::Decode;
use crate::scan::{find_newline, find_nul, line_end, to_text};

/// Cursor over a frame the caller has already validated.
///
/// Performs the same reads as [`BoundedDecoder`] with no length checks and
/// no failure path: `Self::Error` is [`Infallible`], so results unwrap with
/// an irrefutable `let Ok(v) = ...`.
///
/// # Caller contract
///
/// The buffer must hold a complete, well-formed frame for the reads issued
/// against it. Reading past the end is a contract violation; it panics on
/// slice indexing and never reads outside the buffer. [`skip`] does not
/// index at all, so an over-skip only surfaces on the next read.
///
/// Unterminated C strings and lines are not violations here: both return
/// every remaining byte and move the cursor to the end. The bounded decoder
/// reports the same input as insufficient data.
///
/// [`BoundedDecoder`]: crate::BoundedDecoder
/// [`skip`]: Decode::skip
#[derive(Clone, Debug)]
pub struct UncheckedDecoder<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> UncheckedDecoder<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    fn take(&mut self, n: usize) -> &'a [u8] {
        let span = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        span
    }

    /// Everything left, cursor moved to the end.
    fn take_rest(&mut self) -> &'a [u8] {
        let rest = &self.buf[self.pos..];
        self.pos = self.buf.len();
        rest
    }
}

impl Decode for UncheckedDecoder<'_> {
    type Error = Infallible;

    fn position(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, Infallible> {
        Ok(self.take(n).to_vec())
    }

    #[inline]
    fn read_byte(&mut self) -> Result<u8, Infallible> {
        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    fn skip(&mut self, n: usize) -> Result<(), Infallible> {
        self.pos += n;
        Ok(())
    }

    fn read_fixed_string(&mut self, n: usize) -> Result<String, Infallible> {
        if n == 0 {
            return Ok(String::new());
        }
        Ok(to_text(self.take(n)))
    }

    fn read_cstring(&mut self) -> Result<String, Infallible> {
        let rest = &self.buf[self.pos..];
        match find_nul(rest) {
            Some(nul) => {
                self.pos += nul + 1;
                Ok(to_text(&rest[..nul]))
            }
            None => Ok(to_text(self.take_rest())),
        }
    }

    fn read_line(&mut self) -> Result<String, Infallible> {
        let rest = &self.buf[self.pos..];
        match find_newline(rest) {
            Some(newline) => {
                self.pos += newline + 1;
                Ok(to_text(&rest[..line_end(rest, newline)]))
            }
            None => Ok(to_text(self.take_rest())),
        }
    }

    #[inline]
    fn read_int<T: FixedInt>(&mut self, order: ByteOrder) -> Result<T, Infallible> {
        Ok(T::from_slice(self.take(T::WIDTH), order))
    }

    fn read_varint(&mut self) -> Result<u64, Infallible> {
        let (value, n) = decode_varint_trusted(&self.buf[self.pos..]);
        self.pos += n;
        Ok(value)
    }

    fn read_length_encoded_integer(&mut self) -> Result<u64, Infallible> {
        let prefix = LenencPrefix::from_marker(self.buf[self.pos]);
        let span = self.take(prefix.encoded_len());
        Ok(prefix.value(&span[1..]))
    }
}
