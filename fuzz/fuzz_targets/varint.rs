#![no_main]

use libfuzzer_sys::fuzz_target;
use wrd_wire::varint::{decode_varint, decode_varint_trusted};

// Fuzz target: LEB128 varint codec.
//
// Catches bugs in:
// - Zero-length input
// - Shifts past 64 bits on long continuation runs
// - Disagreement between the checked and trusted decoders
fuzz_target!(|data: &[u8]| {
    if let Ok((value, len)) = decode_varint(data) {
        assert!(len >= 1 && len <= data.len());
        assert_eq!(decode_varint_trusted(&data[..len]), (value, len));
    }
});
