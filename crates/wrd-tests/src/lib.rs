//! Fixture builders for wrd integration tests.
//!
//! The decoding crates are read-only by design, so tests assemble their
//! input frames here. [`FrameBuilder`] mirrors each read the decoders
//! offer with a matching `push_*` method.

use wrd_wire::ByteOrder;
use wrd_wire::lenenc::{LENENC_NULL, LENENC_U16, LENENC_U24, LENENC_U64};

/// Append-only byte buffer with one method per wire primitive.
///
/// ```
/// use wrd_tests::FrameBuilder;
///
/// let frame = FrameBuilder::new().u16_be(1).cstring("Hi").finish();
/// assert_eq!(frame, vec![0x00, 0x01, b'H', b'i', 0x00]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FrameBuilder {
    buf: Vec<u8>,
}

impl FrameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn byte(mut self, b: u8) -> Self {
        self.buf.push(b);
        self
    }

    #[must_use]
    pub fn bytes(mut self, data: &[u8]) -> Self {
        self.buf.extend_from_slice(data);
        self
    }

    #[must_use]
    pub fn u16_be(self, v: u16) -> Self {
        self.bytes(&v.to_be_bytes())
    }

    #[must_use]
    pub fn u16_le(self, v: u16) -> Self {
        self.bytes(&v.to_le_bytes())
    }

    #[must_use]
    pub fn u32_be(self, v: u32) -> Self {
        self.bytes(&v.to_be_bytes())
    }

    #[must_use]
    pub fn u32_le(self, v: u32) -> Self {
        self.bytes(&v.to_le_bytes())
    }

    #[must_use]
    pub fn u64_be(self, v: u64) -> Self {
        self.bytes(&v.to_be_bytes())
    }

    #[must_use]
    pub fn u64_le(self, v: u64) -> Self {
        self.bytes(&v.to_le_bytes())
    }

    /// Append a `u64` in the given order.
    #[must_use]
    pub fn u64(self, v: u64, order: ByteOrder) -> Self {
        match order {
            ByteOrder::Big => self.u64_be(v),
            ByteOrder::Little => self.u64_le(v),
        }
    }

    /// NUL-terminated string.
    #[must_use]
    pub fn cstring(self, s: &str) -> Self {
        self.bytes(s.as_bytes()).byte(0)
    }

    /// Text followed by `\r\n` when `crlf` is set, `\n` otherwise.
    #[must_use]
    pub fn line(self, s: &str, crlf: bool) -> Self {
        let this = self.bytes(s.as_bytes());
        if crlf { this.bytes(b"\r\n") } else { this.byte(b'\n') }
    }

    /// Unsigned LEB128 varint.
    #[must_use]
    pub fn varint(mut self, mut value: u64) -> Self {
        loop {
            // Take the lowest 7 bits
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value > 0 {
                // More bytes to come: set the continuation bit
                byte |= 0x80;
            }
            self.buf.push(byte);
            if value == 0 {
                return self;
            }
        }
    }

    /// Length-encoded integer in its shortest form. Values 0xFB..=0xFF do
    /// not fit the inline form and take the 2-byte form.
    #[must_use]
    pub fn lenenc(self, value: u64) -> Self {
        match value {
            0..0xFB => self.byte(value as u8),
            0xFB..=0xFFFF => self.byte(LENENC_U16).bytes(&value.to_le_bytes()[..2]),
            0x1_0000..=0xFF_FFFF => self.byte(LENENC_U24).bytes(&value.to_le_bytes()[..3]),
            _ => self.byte(LENENC_U64).bytes(&value.to_le_bytes()),
        }
    }

    /// The NULL marker.
    #[must_use]
    pub fn lenenc_null(self) -> Self {
        self.byte(LENENC_NULL)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
