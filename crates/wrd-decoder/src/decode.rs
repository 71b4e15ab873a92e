use wrd_wire::{ByteOrder, FixedInt, IntWidth};

/// The decoding contract shared by [`BoundedDecoder`] and
/// [`UncheckedDecoder`].
///
/// Both implementations walk a cursor forward over an immutable buffer and
/// agree on every value they produce. They differ only in what happens when
/// a read runs past the end:
///
/// ```text
/// ┌──────────────────┬──────────────────────┬─────────────────────────────┐
/// │ Decoder          │ Self::Error          │ Truncated read              │
/// ├──────────────────┼──────────────────────┼─────────────────────────────┤
/// │ BoundedDecoder   │ WireError            │ Err, cursor left unmoved    │
/// │ UncheckedDecoder │ Infallible           │ panics on slice indexing    │
/// └──────────────────┴──────────────────────┴─────────────────────────────┘
/// ```
///
/// The one place the two modes intentionally disagree on a *successful*
/// shape is an unterminated C string or line: the bounded decoder fails,
/// the unchecked decoder returns everything that remains.
///
/// Protocol parsers can be written once against this trait and run in
/// either mode:
///
/// ```
/// use wrd_decoder::{BoundedDecoder, Decode, UncheckedDecoder};
///
/// fn greeting<D: Decode>(d: &mut D) -> Result<(u16, String), D::Error> {
///     Ok((d.read_u16_be()?, d.read_cstring()?))
/// }
///
/// let frame = [0x00, 0x07, b'h', b'i', 0x00];
/// let checked = greeting(&mut BoundedDecoder::new(&frame)).unwrap();
/// let Ok(trusted) = greeting(&mut UncheckedDecoder::new(&frame));
/// assert_eq!(checked, trusted);
/// ```
///
/// Every method that returns bytes or text returns an owned copy; only
/// [`remaining`](Self::remaining) hands out a view into the buffer.
///
/// [`BoundedDecoder`]: crate::BoundedDecoder
/// [`UncheckedDecoder`]: crate::UncheckedDecoder
pub trait Decode {
    /// Failure produced by a truncated read.
    type Error: std::error::Error + 'static;

    /// Offset of the next unread byte.
    fn position(&self) -> usize;

    /// The unread suffix of the buffer.
    fn remaining(&self) -> &[u8];

    /// Copy the next `n` bytes out of the buffer.
    fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, Self::Error>;

    fn read_byte(&mut self) -> Result<u8, Self::Error>;

    /// Advance past `n` bytes without producing them.
    fn skip(&mut self, n: usize) -> Result<(), Self::Error>;

    /// Read the next `n` bytes as text. `n == 0` yields an empty string and
    /// consumes nothing.
    fn read_fixed_string(&mut self, n: usize) -> Result<String, Self::Error>;

    /// Read bytes up to the first NUL and advance past it.
    fn read_cstring(&mut self) -> Result<String, Self::Error>;

    /// Read bytes up to the first `\n`, dropping a `\r` directly before it,
    /// and advance past the `\n`.
    fn read_line(&mut self) -> Result<String, Self::Error>;

    /// Read a fixed-width integer in the given byte order.
    fn read_int<T: FixedInt>(&mut self, order: ByteOrder) -> Result<T, Self::Error>;

    /// Read an unsigned LEB128 varint.
    fn read_varint(&mut self) -> Result<u64, Self::Error>;

    /// Read a length-encoded integer (marker byte plus 0, 2, 3 or 8 payload
    /// bytes). The NULL marker `0xFB` decodes as `0`.
    fn read_length_encoded_integer(&mut self) -> Result<u64, Self::Error>;

    // ── Delegating forms ──────────────────────────────────────────────────

    /// Output-parameter form of [`read_fixed_string`](Self::read_fixed_string).
    /// `out` is untouched on failure.
    fn read_fixed_string_into(&mut self, out: &mut String, n: usize) -> Result<(), Self::Error> {
        *out = self.read_fixed_string(n)?;
        Ok(())
    }

    /// Output-parameter form of [`read_int`](Self::read_int).
    fn read_int_into<T: FixedInt>(&mut self, out: &mut T, order: ByteOrder) -> Result<(), Self::Error> {
        *out = self.read_int(order)?;
        Ok(())
    }

    /// Read an unsigned integer of `width` bits, widened to `u64`.
    fn read_fixed_width(&mut self, width: IntWidth, order: ByteOrder) -> Result<u64, Self::Error> {
        match width {
            IntWidth::W16 => self.read_int::<u16>(order).map(u64::from),
            IntWidth::W32 => self.read_int::<u32>(order).map(u64::from),
            IntWidth::W64 => self.read_int::<u64>(order),
        }
    }

    fn read_fixed_width_into(
        &mut self,
        out: &mut u64,
        width: IntWidth,
        order: ByteOrder,
    ) -> Result<(), Self::Error> {
        *out = self.read_fixed_width(width, order)?;
        Ok(())
    }

    fn read_u16_be(&mut self) -> Result<u16, Self::Error> {
        self.read_int(ByteOrder::Big)
    }

    fn read_u16_le(&mut self) -> Result<u16, Self::Error> {
        self.read_int(ByteOrder::Little)
    }

    fn read_u32_be(&mut self) -> Result<u32, Self::Error> {
        self.read_int(ByteOrder::Big)
    }

    fn read_u32_le(&mut self) -> Result<u32, Self::Error> {
        self.read_int(ByteOrder::Little)
    }

    fn read_u64_be(&mut self) -> Result<u64, Self::Error> {
        self.read_int(ByteOrder::Big)
    }

    fn read_u64_le(&mut self) -> Result<u64, Self::Error> {
        self.read_int(ByteOrder::Little)
    }

    fn read_i16_be(&mut self) -> Result<i16, Self::Error> {
        self.read_int(ByteOrder::Big)
    }

    fn read_i16_le(&mut self) -> Result<i16, Self::Error> {
        self.read_int(ByteOrder::Little)
    }

    fn read_i32_be(&mut self) -> Result<i32, Self::Error> {
        self.read_int(ByteOrder::Big)
    }

    fn read_i32_le(&mut self) -> Result<i32, Self::Error> {
        self.read_int(ByteOrder::Little)
    }

    /// `true` once every byte has been consumed.
    fn is_exhausted(&self) -> bool {
        self.remaining().is_empty()
    }
}
