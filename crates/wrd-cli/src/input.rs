/// Load frame bytes from the source selected on the command line.
///
/// The decoders never do I/O; this is the transport side of the contract.
/// It always hands over a fully materialized buffer.
use std::fs;

use anyhow::{Context, Result, bail};

use crate::InputArgs;

/// Read the whole frame into memory.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the hex string is not
/// valid hex.
pub fn load(args: &InputArgs) -> Result<Vec<u8>> {
    match (&args.file, &args.hex) {
        (Some(path), None) => {
            let bytes =
                fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
            tracing::debug!(path = %path.display(), len = bytes.len(), "loaded frame");
            Ok(bytes)
        }
        (None, Some(text)) => parse_hex(text),
        _ => bail!("exactly one of --file or --hex is required"),
    }
}

fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = compact.strip_prefix("0x").unwrap_or(&compact);
    hex::decode(digits).with_context(|| format!("invalid hex input {text:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_ignores_whitespace_and_prefix() {
        assert_eq!(parse_hex("0x00 01\n02").unwrap(), vec![0x00, 0x01, 0x02]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn hex_rejects_odd_length() {
        assert!(parse_hex("abc").is_err());
    }

    #[test]
    fn both_sources_rejected() {
        let args = InputArgs {
            file: Some("frame.bin".into()),
            hex: Some("00".into()),
        };
        assert!(load(&args).is_err());
    }
}
