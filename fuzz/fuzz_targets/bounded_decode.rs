#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wrd_decoder::{BoundedDecoder, ByteOrder, Decode, IntWidth};

// Fuzz target: an arbitrary script of reads against arbitrary bytes.
//
// The bounded decoder must never panic, and a failed read must leave the
// cursor where it was.
#[derive(Arbitrary, Debug)]
enum Op {
    Byte,
    Bytes(u16),
    Skip(u16),
    FixedString(u16),
    CString,
    Line,
    Width(u8, bool),
    Signed(bool),
    Varint,
    Lenenc,
    Split(u16),
}

#[derive(Arbitrary, Debug)]
struct Input {
    ops: Vec<Op>,
    data: Vec<u8>,
}

fn order(big: bool) -> ByteOrder {
    if big { ByteOrder::Big } else { ByteOrder::Little }
}

fn step(d: &mut BoundedDecoder<'_>, op: &Op) -> bool {
    match *op {
        Op::Byte => d.read_byte().is_ok(),
        Op::Bytes(n) => d.read_bytes(usize::from(n)).is_ok(),
        Op::Skip(n) => d.skip(usize::from(n)).is_ok(),
        Op::FixedString(n) => d.read_fixed_string(usize::from(n)).is_ok(),
        Op::CString => d.read_cstring().is_ok(),
        Op::Line => d.read_line().is_ok(),
        Op::Width(w, big) => {
            let width = [IntWidth::W16, IntWidth::W32, IntWidth::W64][usize::from(w % 3)];
            d.read_fixed_width(width, order(big)).is_ok()
        }
        Op::Signed(big) => d.read_int::<i32>(order(big)).is_ok(),
        Op::Varint => d.read_varint().is_ok(),
        Op::Lenenc => d.read_length_encoded_integer().is_ok(),
        Op::Split(n) => d.split_frame(usize::from(n)).is_ok(),
    }
}

fuzz_target!(|input: Input| {
    let mut d = BoundedDecoder::new(&input.data);
    for op in &input.ops {
        let before = d.position();
        if !step(&mut d, op) {
            assert_eq!(d.position(), before, "failed {op:?} moved the cursor");
        }
        assert!(d.position() <= input.data.len());
    }
});
