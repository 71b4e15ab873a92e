#![warn(clippy::pedantic)]

pub mod error;
pub mod lenenc;
pub mod order;
pub mod varint;

pub use error::WireError;
pub use lenenc::LenencPrefix;
pub use order::{ByteOrder, FixedInt, IntWidth};
