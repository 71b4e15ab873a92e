/// Implementation of `wrd validate`.
///
/// Runs the layout through the bounded decoder and reports whether the frame
/// is long enough to hold every field. Trailing bytes past the layout are
/// counted, not rejected. Exits with code 0 on success and code 1 on failure.
///
/// # Success output
///
/// ```text
/// ✓ ok: 13 bytes consumed, 2 trailing
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ field 2 (`cstr`) at offset 6: insufficient data at offset 6: needed 8 bytes, 7 available
/// ```
use anyhow::{Result, anyhow};
use wrd_decoder::{BoundedDecoder, Decode};

use crate::layout::decode_fields;
use crate::{ValidateArgs, input};

/// Run the `wrd validate` command.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or the frame is shorter
/// than the layout.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes = input::load(&args.input)?;
    match check(&bytes, &args.layout) {
        Ok(report) => {
            println!("✓ {report}");
            Ok(())
        }
        Err(diagnostic) => {
            println!("✗ {diagnostic}");
            Err(anyhow!("validation failed"))
        }
    }
}

fn check(bytes: &[u8], layout: &crate::layout::Layout) -> Result<String, String> {
    let mut d = BoundedDecoder::new(bytes);
    match decode_fields(&mut d, layout) {
        Ok(fields) => {
            tracing::info!(fields = fields.len(), consumed = d.position(), "frame valid");
            Ok(format!(
                "ok: {} bytes consumed, {} trailing",
                d.position(),
                d.remaining().len()
            ))
        }
        Err(e) => {
            tracing::debug!(offset = e.source.offset(), "frame truncated");
            Err(format!("{e}: {}", e.source))
        }
    }
}
