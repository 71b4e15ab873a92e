/// Byte order of a fixed-width integer on the wire.
///
/// Network protocols are mostly big-endian; MySQL-family and most
/// file formats are little-endian. Both appear side by side often enough
/// that the order is a parameter, not a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Big,
    Little,
}

/// Width selector for reads that return the value widened to `u64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W16,
    W32,
    W64,
}

impl IntWidth {
    /// Width in bits (16, 32 or 64).
    #[must_use]
    pub fn bits(self) -> u32 {
        match self {
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Number of bytes a value of this width occupies.
    #[must_use]
    pub fn bytes(self) -> usize {
        match self {
            Self::W16 => 2,
            Self::W32 => 4,
            Self::W64 => 8,
        }
    }
}

/// An integer with a fixed on-wire width.
///
/// Implemented for `u16`, `u32`, `u64`, `i16`, `i32` and `i64`. Signed
/// types reinterpret the same bits as two's complement, so reading an
/// `i16` from `[0xFF, 0xFE]` big-endian yields `-2`.
pub trait FixedInt: Copy {
    /// Encoded size in bytes.
    const WIDTH: usize;

    /// Assemble a value from exactly [`Self::WIDTH`] bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != Self::WIDTH`. Decoders always hand over a
    /// span of the right length.
    fn from_slice(bytes: &[u8], order: ByteOrder) -> Self;
}

macro_rules! impl_fixed_int {
    ($($ty:ty),* $(,)?) => {$(
        impl FixedInt for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn from_slice(bytes: &[u8], order: ByteOrder) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$ty>()];
                raw.copy_from_slice(bytes);
                match order {
                    ByteOrder::Big => <$ty>::from_be_bytes(raw),
                    ByteOrder::Little => <$ty>::from_le_bytes(raw),
                }
            }
        }
    )*};
}

impl_fixed_int!(u16, u32, u64, i16, i32, i64);
