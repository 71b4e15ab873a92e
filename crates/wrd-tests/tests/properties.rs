//! Property tests over arbitrary buffers and values.

use proptest::prelude::*;
use wrd_decoder::{BoundedDecoder, ByteOrder, Decode, IntWidth, UncheckedDecoder, WireError};
use wrd_tests::FrameBuilder;

fn order() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::Big), Just(ByteOrder::Little)]
}

fn width() -> impl Strategy<Value = IntWidth> {
    prop_oneof![Just(IntWidth::W16), Just(IntWidth::W32), Just(IntWidth::W64)]
}

/// Largest value representable at `width`.
fn mask(width: IntWidth) -> u64 {
    match width {
        IntWidth::W16 => u64::from(u16::MAX),
        IntWidth::W32 => u64::from(u32::MAX),
        IntWidth::W64 => u64::MAX,
    }
}

/// Encode the low `width` bits of `value` in `order`.
fn encode(value: u64, width: IntWidth, order: ByteOrder) -> Vec<u8> {
    let full = FrameBuilder::new().u64(value, order).finish();
    let n = width.bytes();
    match order {
        ByteOrder::Big => full[8 - n..].to_vec(),
        ByteOrder::Little => full[..n].to_vec(),
    }
}

proptest! {
    #[test]
    fn read_bytes_takes_exact_prefix(buf in proptest::collection::vec(any::<u8>(), 0..64), n in 0usize..80) {
        let mut d = BoundedDecoder::new(&buf);
        match d.read_bytes(n) {
            Ok(bytes) => {
                prop_assert!(n <= buf.len());
                prop_assert_eq!(&bytes[..], &buf[..n]);
                prop_assert_eq!(d.position(), n);
            }
            Err(WireError::InsufficientData { offset, needed, available }) => {
                prop_assert!(n > buf.len());
                prop_assert_eq!((offset, needed, available), (0, n, buf.len()));
                prop_assert_eq!(d.position(), 0);
            }
        }
    }

    #[test]
    fn fixed_width_roundtrip(value in any::<u64>(), width in width(), order in order()) {
        let value = value & mask(width);
        let frame = encode(value, width, order);

        let mut checked = BoundedDecoder::new(&frame);
        prop_assert_eq!(checked.read_fixed_width(width, order).unwrap(), value);
        prop_assert!(checked.is_exhausted());

        let mut trusted = UncheckedDecoder::new(&frame);
        let Ok(decoded) = trusted.read_fixed_width(width, order);
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn fixed_width_extremes(width in width(), order in order()) {
        for value in [0, mask(width)] {
            let frame = encode(value, width, order);
            let mut d = BoundedDecoder::new(&frame);
            prop_assert_eq!(d.read_fixed_width(width, order).unwrap(), value);
        }
    }

    #[test]
    fn varint_roundtrip(value in any::<u64>()) {
        let frame = FrameBuilder::new().varint(value).finish();
        let mut d = BoundedDecoder::new(&frame);
        prop_assert_eq!(d.read_varint().unwrap(), value);
        prop_assert_eq!(d.position(), frame.len());
    }

    #[test]
    fn lenenc_roundtrip(value in any::<u64>()) {
        let frame = FrameBuilder::new().lenenc(value).finish();
        let mut checked = BoundedDecoder::new(&frame);
        let mut trusted = UncheckedDecoder::new(&frame);
        prop_assert_eq!(checked.read_length_encoded_integer().unwrap(), value);
        let Ok(decoded) = trusted.read_length_encoded_integer();
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(checked.position(), trusted.position());
    }

    #[test]
    fn skip_then_read_byte(buf in proptest::collection::vec(any::<u8>(), 1..64), n in 0usize..64) {
        let mut d = BoundedDecoder::new(&buf);
        if n < buf.len() {
            d.skip(n).unwrap();
            prop_assert_eq!(d.read_byte().unwrap(), buf[n]);
        } else if n > buf.len() {
            prop_assert!(d.skip(n).is_err());
            prop_assert_eq!(d.position(), 0);
        }
    }

    /// Whatever the bounded decoder accepts, the unchecked decoder reads
    /// the same way.
    #[test]
    fn accepted_prefixes_agree(buf in proptest::collection::vec(any::<u8>(), 0..48)) {
        let mut checked = BoundedDecoder::new(&buf);
        let mut trusted = UncheckedDecoder::new(&buf);
        loop {
            let before = checked.position();
            let Ok(a) = checked.read_length_encoded_integer() else {
                prop_assert_eq!(checked.position(), before);
                break;
            };
            let Ok(b) = trusted.read_length_encoded_integer();
            prop_assert_eq!(a, b);
            prop_assert_eq!(checked.position(), trusted.position());

            let Ok(s) = checked.read_cstring() else {
                prop_assert_eq!(checked.position(), trusted.position());
                break;
            };
            let Ok(t) = trusted.read_cstring();
            prop_assert_eq!(s, t);
        }
    }
}
