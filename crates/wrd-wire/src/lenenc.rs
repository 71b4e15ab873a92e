/// Marker byte for the NULL sentinel.
pub const LENENC_NULL: u8 = 0xFB;

/// Marker byte for a 2-byte little-endian payload.
pub const LENENC_U16: u8 = 0xFC;

/// Marker byte for a 3-byte little-endian payload.
pub const LENENC_U24: u8 = 0xFD;

/// Marker byte for an 8-byte little-endian payload.
pub const LENENC_U64: u8 = 0xFE;

/// The form a length-encoded integer takes, selected by its first byte.
///
/// ```text
/// ┌────────────┬──────────────┬─────────────────────────────┐
/// │ Marker     │ Payload      │ Value                       │
/// ├────────────┼──────────────┼─────────────────────────────┤
/// │ 0x00..0xFA │ none         │ the marker itself           │
/// │ 0xFB       │ none         │ NULL, decoded as 0          │
/// │ 0xFC       │ 2 bytes LE   │ u16 widened to u64          │
/// │ 0xFD       │ 3 bytes LE   │ u24 widened to u64          │
/// │ 0xFE       │ 8 bytes LE   │ u64                         │
/// │ 0xFF       │ none         │ the marker itself (255)     │
/// └────────────┴──────────────┴─────────────────────────────┘
/// ```
///
/// The table is total: every byte value maps to exactly one form, so
/// there is no "invalid marker" case. `0xFF` is not a marker and falls
/// through to the inline form.
///
/// NULL and an inline zero decode to the same value. Callers that need to
/// tell them apart inspect the marker (see [`LenencPrefix::is_null`])
/// before reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LenencPrefix {
    Inline(u8),
    Null,
    U16,
    U24,
    U64,
}

impl LenencPrefix {
    /// Classify a marker byte.
    #[must_use]
    pub fn from_marker(marker: u8) -> Self {
        match marker {
            LENENC_NULL => Self::Null,
            LENENC_U16 => Self::U16,
            LENENC_U24 => Self::U24,
            LENENC_U64 => Self::U64,
            other => Self::Inline(other),
        }
    }

    /// Number of payload bytes that follow the marker.
    #[must_use]
    pub fn payload_len(self) -> usize {
        match self {
            Self::Inline(_) | Self::Null => 0,
            Self::U16 => 2,
            Self::U24 => 3,
            Self::U64 => 8,
        }
    }

    /// Total encoded length including the marker byte.
    #[must_use]
    pub fn encoded_len(self) -> usize {
        1 + self.payload_len()
    }

    #[must_use]
    pub fn is_null(self) -> bool {
        self == Self::Null
    }

    /// Assemble the value from the payload that followed the marker.
    ///
    /// `payload` must hold exactly [`payload_len`](Self::payload_len)
    /// bytes; it is read little-endian.
    #[must_use]
    pub fn value(self, payload: &[u8]) -> u64 {
        match self {
            Self::Inline(byte) => u64::from(byte),
            Self::Null => 0,
            Self::U16 | Self::U24 | Self::U64 => payload
                .iter()
                .rev()
                .fold(0u64, |acc, &b| (acc << 8) | u64::from(b)),
        }
    }
}
