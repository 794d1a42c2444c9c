//! Protocol Layer: Big-Endian Payload Decoding
//!
//! Prinsip desain:
//! - Closed set of kinds: bool, int8..int64, uint8..uint64, float32, float64
//! - Arity dari caller: tidak ada length prefix di wire
//! - Atomic reads: read yang gagal tidak menggeser cursor

mod cursor;
mod decode;
mod error;
mod reader;
mod shape;

pub use cursor::Cursor;
pub use decode::{Scalar, Value, Values};
pub use error::{DecodeError, DecodeResult};
pub use reader::{Destination, Reader};
pub use shape::{Kind, Shape};
