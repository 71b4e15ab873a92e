#![no_main]

use libfuzzer_sys::fuzz_target;
use wrd_decoder::{BoundedDecoder, Decode, UncheckedDecoder};
use wrd_wire::LenencPrefix;

// Fuzz target: length-encoded integers.
//
// Checks that the bounded decoder consumes exactly the marker plus its
// payload, fails without moving on a short span, and agrees with the
// unchecked decoder whenever the span is complete.
fuzz_target!(|data: &[u8]| {
    let Some(&marker) = data.first() else {
        return;
    };
    let span = LenencPrefix::from_marker(marker).encoded_len();

    let mut checked = BoundedDecoder::new(data);
    match checked.read_length_encoded_integer() {
        Ok(value) => {
            assert!(span <= data.len());
            assert_eq!(checked.position(), span);

            let mut trusted = UncheckedDecoder::new(&data[..span]);
            let other = trusted
                .read_length_encoded_integer()
                .unwrap_or_else(|e| match e {});
            assert_eq!(value, other);
        }
        Err(_) => {
            assert!(span > data.len());
            assert_eq!(checked.position(), 0);
        }
    }
});
