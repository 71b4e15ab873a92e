//! How each mode treats input that runs out early.
//!
//! The bounded decoder must report `InsufficientData` and leave the cursor
//! where it was; the unchecked decoder has no such path. Two shapes are
//! deliberately *not* failures in unchecked mode: an unterminated C string
//! and an unterminated line both return whatever remains. Those outcomes
//! are pinned here so neither mode drifts toward the other.

use wrd_decoder::{BoundedDecoder, Decode, UncheckedDecoder, WireError};

fn insufficient(offset: usize, needed: usize, available: usize) -> WireError {
    WireError::InsufficientData {
        offset,
        needed,
        available,
    }
}

// ── Unterminated C string ─────────────────────────────────────────────────────

#[test]
fn cstring_without_terminator_bounded_fails() {
    let mut d = BoundedDecoder::new(b"Hi");
    assert_eq!(d.read_cstring(), Err(insufficient(0, 3, 2)));
    assert_eq!(d.position(), 0);
    assert_eq!(d.remaining(), b"Hi");
}

#[test]
fn cstring_without_terminator_unchecked_returns_rest() {
    let mut d = UncheckedDecoder::new(b"Hi");
    let Ok(text) = d.read_cstring();
    assert_eq!(text, "Hi");
    assert_eq!(d.position(), 2);
}

#[test]
fn cstring_fallback_after_partial_consumption() {
    let buf = b"ab\0tail";
    let mut checked = BoundedDecoder::new(buf);
    let mut trusted = UncheckedDecoder::new(buf);

    assert_eq!(checked.read_cstring().unwrap(), "ab");
    let Ok(first) = trusted.read_cstring();
    assert_eq!(first, "ab");

    assert_eq!(checked.read_cstring(), Err(insufficient(3, 5, 4)));
    assert_eq!(checked.position(), 3);

    let Ok(rest) = trusted.read_cstring();
    assert_eq!(rest, "tail");
    assert_eq!(trusted.position(), buf.len());
}

// ── Unterminated line ─────────────────────────────────────────────────────────

#[test]
fn line_without_newline_bounded_fails() {
    let mut d = BoundedDecoder::new(b"Hello");
    assert_eq!(d.read_line(), Err(insufficient(0, 6, 5)));
    assert_eq!(d.position(), 0);
}

#[test]
fn line_without_newline_unchecked_returns_rest() {
    let mut d = UncheckedDecoder::new(b"Hello");
    let Ok(line) = d.read_line();
    assert_eq!(line, "Hello");
    assert!(d.is_exhausted());
}

#[test]
fn bare_cr_at_end_is_not_a_terminator() {
    let mut checked = BoundedDecoder::new(b"Hello\r");
    assert!(checked.read_line().is_err());

    let mut trusted = UncheckedDecoder::new(b"Hello\r");
    let Ok(line) = trusted.read_line();
    assert_eq!(line, "Hello\r");
}

// ── Bounded failures leave the cursor unmoved ─────────────────────────────────

#[test]
fn every_bounded_read_fails_cleanly_on_empty_input() {
    let mut d = BoundedDecoder::new(&[]);
    assert!(d.read_byte().is_err());
    assert!(d.read_bytes(1).is_err());
    assert!(d.skip(1).is_err());
    assert!(d.read_fixed_string(1).is_err());
    assert!(d.read_cstring().is_err());
    assert!(d.read_line().is_err());
    assert!(d.read_u16_be().is_err());
    assert!(d.read_u32_le().is_err());
    assert!(d.read_u64_be().is_err());
    assert!(d.read_i16_le().is_err());
    assert!(d.read_i32_be().is_err());
    assert!(d.read_varint().is_err());
    assert!(d.read_length_encoded_integer().is_err());
    assert_eq!(d.position(), 0);

    // Zero-length reads still succeed at the end of input
    assert_eq!(d.read_bytes(0).unwrap(), Vec::<u8>::new());
    assert_eq!(d.read_fixed_string(0).unwrap(), "");
    d.skip(0).unwrap();
}

#[test]
fn lenenc_span_checked_before_consumption() {
    let cases: [(&[u8], usize); 4] = [
        (&[0xFC, 0x01], 3),
        (&[0xFD, 0x01, 0x02], 4),
        (&[0xFE, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07], 9),
        (&[0xFE], 9),
    ];
    for (buf, needed) in cases {
        let mut d = BoundedDecoder::new(buf);
        assert_eq!(
            d.read_length_encoded_integer(),
            Err(insufficient(0, needed, buf.len())),
            "marker {:#04X}",
            buf[0]
        );
        assert_eq!(d.position(), 0);
    }
}

#[test]
fn failed_read_can_be_retried_with_a_smaller_request() {
    let mut d = BoundedDecoder::new(&[0x01, 0x02, 0x03]);
    assert!(d.read_u64_le().is_err());
    assert!(d.read_u32_le().is_err());
    assert_eq!(d.read_u16_le().unwrap(), 0x0201);
    assert_eq!(d.read_byte().unwrap(), 0x03);
    assert!(d.is_exhausted());
}

#[test]
fn skip_past_end_then_recover() {
    let mut d = BoundedDecoder::new(&[1, 2, 3, 4, 5]);
    d.skip(2).unwrap();
    assert_eq!(d.skip(4), Err(insufficient(2, 4, 3)));
    assert_eq!(d.read_byte().unwrap(), 3);
}

// ── Unchecked mode on short input ─────────────────────────────────────────────

#[test]
#[should_panic(expected = "out of range")]
fn unchecked_read_bytes_past_end_panics() {
    let mut d = UncheckedDecoder::new(&[1, 2]);
    let _ = d.read_bytes(3);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn unchecked_read_byte_past_end_panics() {
    let mut d = UncheckedDecoder::new(&[]);
    let _ = d.read_byte();
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn unchecked_varint_past_end_panics() {
    let mut d = UncheckedDecoder::new(&[0x80, 0x80]);
    let _ = d.read_varint();
}

#[test]
fn unchecked_skip_does_not_validate() {
    let mut d = UncheckedDecoder::new(&[1, 2]);
    let Ok(()) = d.skip(10);
    assert_eq!(d.position(), 10);
}
