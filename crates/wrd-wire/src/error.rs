/// The single failure a bounded read can produce.
///
/// Every primitive in this workspace either succeeds or reports that the
/// requested span runs past the end of the buffer. There is no
/// invalid-encoding case: the length-encoded integer table is total over
/// all marker bytes and varints simply drop bits past 64.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// The read needed `needed` bytes at `offset` but only `available`
    /// remained.
    ///
    /// For terminator scans (C strings, lines) no terminator was found, so
    /// `needed` is reported as one byte past everything that remained.
    #[error("insufficient data at offset {offset}: needed {needed} bytes, {available} available")]
    InsufficientData {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

impl WireError {
    /// Build an [`WireError::InsufficientData`] for a span of `needed`
    /// bytes requested at `offset` in a buffer of `len` bytes.
    #[must_use]
    pub fn short(offset: usize, needed: usize, len: usize) -> Self {
        Self::InsufficientData {
            offset,
            needed,
            available: len.saturating_sub(offset),
        }
    }

    /// Byte offset the failing read started at.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::InsufficientData { offset, .. } => *offset,
        }
    }
}
