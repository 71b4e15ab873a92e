#![warn(clippy::pedantic)]

pub mod bounded;
pub mod decode;
pub mod unchecked;

mod scan;

pub use bounded::BoundedDecoder;
pub use decode::Decode;
pub use unchecked::UncheckedDecoder;
pub use wrd_wire::{ByteOrder, FixedInt, IntWidth, WireError};
