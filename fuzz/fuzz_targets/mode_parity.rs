#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wrd_decoder::{BoundedDecoder, ByteOrder, Decode, UncheckedDecoder};

// Fuzz target: a frame the bounded decoder accepts decodes identically in
// unchecked mode.
//
// The bounded pass runs first; the unchecked pass only sees the prefix the
// bounded pass covered, so it must never panic and must yield the same
// values and the same final position.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum Field {
    Byte,
    Bytes(u8),
    FixedString(u8),
    CString,
    Line,
    U16(bool),
    U32(bool),
    U64(bool),
    I16(bool),
    Varint,
    Lenenc,
    Skip(u8),
}

#[derive(Debug, PartialEq)]
enum Value {
    Int(u64),
    Signed(i64),
    Raw(Vec<u8>),
    Text(String),
    Unit,
}

#[derive(Arbitrary, Debug)]
struct Input {
    layout: Vec<Field>,
    data: Vec<u8>,
}

fn order(big: bool) -> ByteOrder {
    if big { ByteOrder::Big } else { ByteOrder::Little }
}

fn read<D: Decode>(d: &mut D, field: Field) -> Result<Value, D::Error> {
    Ok(match field {
        Field::Byte => Value::Int(u64::from(d.read_byte()?)),
        Field::Bytes(n) => Value::Raw(d.read_bytes(usize::from(n))?),
        Field::FixedString(n) => Value::Text(d.read_fixed_string(usize::from(n))?),
        Field::CString => Value::Text(d.read_cstring()?),
        Field::Line => Value::Text(d.read_line()?),
        Field::U16(big) => Value::Int(u64::from(d.read_int::<u16>(order(big))?)),
        Field::U32(big) => Value::Int(u64::from(d.read_int::<u32>(order(big))?)),
        Field::U64(big) => Value::Int(d.read_int::<u64>(order(big))?),
        Field::I16(big) => Value::Signed(i64::from(d.read_int::<i16>(order(big))?)),
        Field::Varint => Value::Int(d.read_varint()?),
        Field::Lenenc => Value::Int(d.read_length_encoded_integer()?),
        Field::Skip(n) => {
            d.skip(usize::from(n))?;
            Value::Unit
        }
    })
}

fn walk<D: Decode>(d: &mut D, layout: &[Field]) -> Result<Vec<Value>, D::Error> {
    layout.iter().map(|&f| read(d, f)).collect()
}

fuzz_target!(|input: Input| {
    let mut checked = BoundedDecoder::new(&input.data);
    let Ok(expected) = walk(&mut checked, &input.layout) else {
        return;
    };
    let end = checked.position();

    let mut trusted = UncheckedDecoder::new(&input.data[..end]);
    let actual = walk(&mut trusted, &input.layout).unwrap_or_else(|e| match e {});

    assert_eq!(expected, actual);
    assert_eq!(trusted.position(), end);
});
