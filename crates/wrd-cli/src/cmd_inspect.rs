/// Implementation of `wrd inspect`.
///
/// Decodes a frame against a layout and prints one line per field, or a
/// JSON array with `--json`.
///
/// # Output format
///
/// ```text
/// 0000  u16be   = 258
/// 0002  u32le   = 16909060
/// 0006  cstr    = "Hello"
/// 000c  lenenc  = null
/// ---
/// 13 bytes decoded, 0 trailing
/// ```
///
/// In `validated` mode the values come from the unchecked decoder, run over
/// exactly the span the bounded pass covered.
use anyhow::{Context, Result};
use wrd_decoder::{BoundedDecoder, Decode, UncheckedDecoder};

use crate::layout::{Decoded, decode_fields};
use crate::{DecodeMode, InspectArgs, input};

/// Run the `wrd inspect` command.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or the frame is too short
/// for the layout.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes = input::load(&args.input)?;
    let (fields, consumed) = decode(&bytes, args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    print!("{}", render(&fields));
    println!("---");
    println!(
        "{consumed} bytes decoded, {} trailing",
        bytes.len() - consumed
    );
    Ok(())
}

fn decode(bytes: &[u8], args: &InspectArgs) -> Result<(Vec<Decoded>, usize)> {
    let mut checked = BoundedDecoder::new(bytes);
    let fields = decode_fields(&mut checked, &args.layout).context("frame too short for layout")?;
    let consumed = checked.position();

    match args.mode {
        DecodeMode::Bounded => Ok((fields, consumed)),
        DecodeMode::Validated => {
            tracing::debug!(consumed, "frame validated, re-decoding unchecked");
            let mut trusted = UncheckedDecoder::new(&bytes[..consumed]);
            let fields = decode_fields(&mut trusted, &args.layout)
                .unwrap_or_else(|e| match e.source {});
            Ok((fields, trusted.position()))
        }
    }
}

/// One aligned line per field: hex offset, field token, value.
fn render(fields: &[Decoded]) -> String {
    use std::fmt::Write as _;

    let width = fields.iter().map(|f| f.field.len()).max().unwrap_or(0);
    fields.iter().fold(String::new(), |mut out, f| {
        let _ = writeln!(
            out,
            "{:04x}  {:<width$}  = {}",
            f.offset, f.field, f.value
        );
        out
    })
}
