/// Field layouts: a tiny description language for "what is in this frame".
///
/// A layout is a comma-separated list of field tokens, read left to right:
///
/// ```text
/// ┌───────────────────────────┬──────────────────────────────────────────┐
/// │ Token                     │ Read                                     │
/// ├───────────────────────────┼──────────────────────────────────────────┤
/// │ u8                        │ one byte                                 │
/// │ u16be u16le u32be u32le   │ unsigned fixed-width integer             │
/// │ u64be u64le               │                                          │
/// │ i16be i16le i32be i32le   │ signed fixed-width integer               │
/// │ i64be i64le               │                                          │
/// │ varint                    │ unsigned LEB128                          │
/// │ lenenc                    │ length-encoded integer (0xFB → null)     │
/// │ cstr                      │ NUL-terminated text                      │
/// │ line                      │ `\n`-terminated text, `\r` stripped      │
/// │ bytes:N                   │ N raw bytes, shown as hex                │
/// │ str:N                     │ N bytes of text                          │
/// │ skip:N                    │ N bytes, not shown                       │
/// └───────────────────────────┴──────────────────────────────────────────┘
/// ```
///
/// `decode_fields` runs a layout against any [`Decode`] implementation, so
/// the same layout drives both the bounded and the unchecked decoder.
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use wrd_decoder::{ByteOrder, Decode, IntWidth};
use wrd_wire::LenencPrefix;

/// One field token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    U8,
    Unsigned { width: IntWidth, order: ByteOrder },
    Signed { width: IntWidth, order: ByteOrder },
    Varint,
    Lenenc,
    CString,
    Line,
    Bytes(usize),
    Str(usize),
    Skip(usize),
}

/// Why a layout string was rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{token}` needs a byte count, e.g. `{kind}:4`")]
    MissingCount { token: String, kind: &'static str },

    #[error("invalid byte count in `{0}`")]
    BadCount(String),
}

impl FromStr for Field {
    type Err = LayoutError;

    fn from_str(token: &str) -> Result<Self, LayoutError> {
        let token = token.trim();
        if let Some((kind, count)) = token.split_once(':') {
            let n: usize = count
                .parse()
                .map_err(|_| LayoutError::BadCount(token.to_string()))?;
            return match kind {
                "bytes" => Ok(Self::Bytes(n)),
                "str" => Ok(Self::Str(n)),
                "skip" => Ok(Self::Skip(n)),
                _ => Err(LayoutError::UnknownField(token.to_string())),
            };
        }

        let int = |width, order| Self::Unsigned { width, order };
        let sint = |width, order| Self::Signed { width, order };
        match token {
            "u8" => Ok(Self::U8),
            "u16be" => Ok(int(IntWidth::W16, ByteOrder::Big)),
            "u16le" => Ok(int(IntWidth::W16, ByteOrder::Little)),
            "u32be" => Ok(int(IntWidth::W32, ByteOrder::Big)),
            "u32le" => Ok(int(IntWidth::W32, ByteOrder::Little)),
            "u64be" => Ok(int(IntWidth::W64, ByteOrder::Big)),
            "u64le" => Ok(int(IntWidth::W64, ByteOrder::Little)),
            "i16be" => Ok(sint(IntWidth::W16, ByteOrder::Big)),
            "i16le" => Ok(sint(IntWidth::W16, ByteOrder::Little)),
            "i32be" => Ok(sint(IntWidth::W32, ByteOrder::Big)),
            "i32le" => Ok(sint(IntWidth::W32, ByteOrder::Little)),
            "i64be" => Ok(sint(IntWidth::W64, ByteOrder::Big)),
            "i64le" => Ok(sint(IntWidth::W64, ByteOrder::Little)),
            "varint" => Ok(Self::Varint),
            "lenenc" => Ok(Self::Lenenc),
            "cstr" => Ok(Self::CString),
            "line" => Ok(Self::Line),
            "bytes" => Err(missing_count(token, "bytes")),
            "str" => Err(missing_count(token, "str")),
            "skip" => Err(missing_count(token, "skip")),
            _ => Err(LayoutError::UnknownField(token.to_string())),
        }
    }
}

fn missing_count(token: &str, kind: &'static str) -> LayoutError {
    LayoutError::MissingCount {
        token: token.to_string(),
        kind,
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = |o: &ByteOrder| match o {
            ByteOrder::Big => "be",
            ByteOrder::Little => "le",
        };
        match self {
            Self::U8 => f.write_str("u8"),
            Self::Unsigned { width, order: o } => write!(f, "u{}{}", width.bits(), order(o)),
            Self::Signed { width, order: o } => write!(f, "i{}{}", width.bits(), order(o)),
            Self::Varint => f.write_str("varint"),
            Self::Lenenc => f.write_str("lenenc"),
            Self::CString => f.write_str("cstr"),
            Self::Line => f.write_str("line"),
            Self::Bytes(n) => write!(f, "bytes:{n}"),
            Self::Str(n) => write!(f, "str:{n}"),
            Self::Skip(n) => write!(f, "skip:{n}"),
        }
    }
}

/// An ordered list of fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout(pub Vec<Field>);

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, LayoutError> {
        if s.trim().is_empty() {
            return Err(LayoutError::Empty);
        }
        s.split(',').map(str::parse).collect::<Result<_, _>>().map(Self)
    }
}

// ── Decoding ──────────────────────────────────────────────────────────────────

/// A decoded field value, serialized untagged so JSON output reads
/// naturally (`42`, `-1`, `"text"`, `null`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Unsigned(u64),
    Signed(i64),
    Text(String),
    /// Raw bytes, hex-encoded.
    Hex(String),
    /// A length-encoded NULL marker.
    Null,
    /// Bytes stepped over by `skip:N`. Serializes as `{"skipped": N}` so it
    /// cannot be mistaken for a decoded integer.
    Skipped { skipped: usize },
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Signed(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Hex(h) => write!(f, "0x{h}"),
            Self::Null => f.write_str("null"),
            Self::Skipped { skipped } => write!(f, "({skipped} bytes skipped)"),
        }
    }
}

/// One row of decode output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub field: String,
    pub offset: usize,
    pub value: Value,
}

/// A decode failure pinned to the field that hit it.
#[derive(Debug, thiserror::Error)]
#[error("field {index} (`{field}`) at offset {offset}")]
pub struct FieldError<E: std::error::Error + 'static> {
    pub index: usize,
    pub field: Field,
    pub offset: usize,
    #[source]
    pub source: E,
}

/// Run `layout` against `d`, one read per field, in order.
///
/// # Errors
///
/// The first failing read, wrapped with its field position. With an
/// unchecked decoder the error type is uninhabited.
pub fn decode_fields<D: Decode>(
    d: &mut D,
    layout: &Layout,
) -> Result<Vec<Decoded>, FieldError<D::Error>> {
    let mut out = Vec::with_capacity(layout.0.len());
    for (index, field) in layout.0.iter().enumerate() {
        let offset = d.position();
        tracing::trace!(index, %field, offset, "decoding field");
        let value = read_field(d, *field).map_err(|source| FieldError {
            index,
            field: *field,
            offset,
            source,
        })?;
        out.push(Decoded {
            field: field.to_string(),
            offset,
            value,
        });
    }
    Ok(out)
}

fn read_field<D: Decode>(d: &mut D, field: Field) -> Result<Value, D::Error> {
    Ok(match field {
        Field::U8 => Value::Unsigned(u64::from(d.read_byte()?)),
        Field::Unsigned { width, order } => Value::Unsigned(d.read_fixed_width(width, order)?),
        Field::Signed { width, order } => Value::Signed(match width {
            IntWidth::W16 => i64::from(d.read_int::<i16>(order)?),
            IntWidth::W32 => i64::from(d.read_int::<i32>(order)?),
            IntWidth::W64 => d.read_int::<i64>(order)?,
        }),
        Field::Varint => Value::Unsigned(d.read_varint()?),
        Field::Lenenc => {
            // The decoder folds NULL into 0; peek the marker to keep them apart
            let is_null = d
                .remaining()
                .first()
                .is_some_and(|&marker| LenencPrefix::from_marker(marker).is_null());
            let v = d.read_length_encoded_integer()?;
            if is_null { Value::Null } else { Value::Unsigned(v) }
        }
        Field::CString => Value::Text(d.read_cstring()?),
        Field::Line => Value::Text(d.read_line()?),
        Field::Bytes(n) => Value::Hex(hex::encode(d.read_bytes(n)?)),
        Field::Str(n) => Value::Text(d.read_fixed_string(n)?),
        Field::Skip(n) => {
            d.skip(n)?;
            Value::Skipped { skipped: n }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrd_decoder::{BoundedDecoder, UncheckedDecoder};

    #[test]
    fn parse_layout() {
        let layout: Layout = "u16be, u32le,cstr,bytes:2,skip:1,lenenc".parse().unwrap();
        assert_eq!(
            layout.0,
            vec![
                Field::Unsigned {
                    width: IntWidth::W16,
                    order: ByteOrder::Big
                },
                Field::Unsigned {
                    width: IntWidth::W32,
                    order: ByteOrder::Little
                },
                Field::CString,
                Field::Bytes(2),
                Field::Skip(1),
                Field::Lenenc,
            ]
        );
    }

    #[test]
    fn parse_rejects_bad_tokens() {
        assert_eq!("".parse::<Layout>(), Err(LayoutError::Empty));
        assert_eq!(
            "u24be".parse::<Layout>(),
            Err(LayoutError::UnknownField("u24be".into()))
        );
        assert_eq!(
            "bytes:x".parse::<Layout>(),
            Err(LayoutError::BadCount("bytes:x".into()))
        );
        assert!(matches!(
            "str".parse::<Layout>(),
            Err(LayoutError::MissingCount { kind: "str", .. })
        ));
        assert_eq!(
            "u8,,u8".parse::<Layout>(),
            Err(LayoutError::UnknownField(String::new()))
        );
    }

    #[test]
    fn field_display_roundtrips() {
        for token in ["u8", "u16le", "u64be", "i32le", "i64be", "i64le", "varint", "lenenc", "cstr", "line", "bytes:3", "str:0", "skip:9"] {
            let field: Field = token.parse().unwrap();
            assert_eq!(field.to_string(), token);
        }
    }

    #[test]
    fn decode_in_both_modes() {
        let frame = [0x00, 0x01, 0x02, 0x00, 0x00, 0x00, b'H', b'i', 0x00, 0xFB, 0x00];
        let layout: Layout = "u16be,u32le,cstr,lenenc,lenenc".parse().unwrap();

        let checked = decode_fields(&mut BoundedDecoder::new(&frame), &layout).unwrap();
        let trusted = decode_fields(&mut UncheckedDecoder::new(&frame), &layout)
            .unwrap_or_else(|e| match e.source {});
        assert_eq!(checked, trusted);

        let values: Vec<_> = checked.iter().map(|d| d.value.to_string()).collect();
        assert_eq!(values, ["1", "2", "\"Hi\"", "null", "0"]);
        assert_eq!(checked[2].offset, 6);
    }

    #[test]
    fn failure_names_the_field() {
        let layout: Layout = "u8,u32be".parse().unwrap();
        let err = decode_fields(&mut BoundedDecoder::new(&[0x01, 0x02]), &layout).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.offset, 1);
        assert_eq!(err.to_string(), "field 1 (`u32be`) at offset 1");
    }

    #[test]
    fn json_values_are_untagged() {
        let row = Decoded {
            field: "lenenc".into(),
            offset: 0,
            value: Value::Null,
        };
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"field":"lenenc","offset":0,"value":null}"#
        );
        assert_eq!(serde_json::to_string(&Value::Signed(-2)).unwrap(), "-2");
    }

    #[test]
    fn json_skip_is_not_a_number() {
        assert_eq!(
            serde_json::to_string(&Value::Skipped { skipped: 3 }).unwrap(),
            r#"{"skipped":3}"#
        );
        assert_eq!(Value::Skipped { skipped: 3 }.to_string(), "(3 bytes skipped)");
    }

    #[test]
    fn signed_64_bit_fields() {
        let frame = [0xFF; 8];
        let layout: Layout = "i64be".parse().unwrap();
        let rows = decode_fields(&mut BoundedDecoder::new(&frame), &layout).unwrap();
        assert_eq!(rows[0].value, Value::Signed(-1));
        assert_eq!(rows[0].field, "i64be");
    }

    #[test]
    fn lenenc_null_only_for_marker() {
        let frame = [0xFB, 0x00, 0xFF];
        let layout: Layout = "lenenc,lenenc,lenenc".parse().unwrap();
        let rows = decode_fields(&mut BoundedDecoder::new(&frame), &layout).unwrap();
        let values: Vec<_> = rows.into_iter().map(|r| r.value).collect();
        assert_eq!(values, [Value::Null, Value::Unsigned(0), Value::Unsigned(255)]);
    }
}
