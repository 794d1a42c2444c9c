//! Destination shapes dan ukuran byte-nya
//!
//! Layout di wire (big-endian, tanpa length prefix):
//! ┌──────────────────────────────┬───────┐
//! │ bool, int8, uint8            │ 1     │
//! │ int16, uint16                │ 2     │
//! │ int32, uint32, float32       │ 4     │
//! │ int64, uint64, float64       │ 8     │
//! │ <kind>[N]                    │ N × w │
//! └──────────────────────────────┴───────┘

use std::fmt;
use std::str::FromStr;

use super::error::{DecodeError, DecodeResult};

/// Scalar kind yang didukung reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
}

impl Kind {
    pub const ALL: [Kind; 11] = [
        Kind::Bool,
        Kind::Int8,
        Kind::Uint8,
        Kind::Int16,
        Kind::Uint16,
        Kind::Int32,
        Kind::Uint32,
        Kind::Int64,
        Kind::Uint64,
        Kind::Float32,
        Kind::Float64,
    ];

    /// Encoded width in bytes
    #[inline(always)]
    pub const fn width(self) -> usize {
        match self {
            Kind::Bool | Kind::Int8 | Kind::Uint8 => 1,
            Kind::Int16 | Kind::Uint16 => 2,
            Kind::Int32 | Kind::Uint32 | Kind::Float32 => 4,
            Kind::Int64 | Kind::Uint64 | Kind::Float64 => 8,
        }
    }

    /// Nama kind seperti yang dipakai di descriptor
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int8 => "int8",
            Kind::Uint8 => "uint8",
            Kind::Int16 => "int16",
            Kind::Uint16 => "uint16",
            Kind::Int32 => "int32",
            Kind::Uint32 => "uint32",
            Kind::Int64 => "int64",
            Kind::Uint64 => "uint64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a single read decodes: one scalar or a fixed-length run of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar(Kind),
    /// Homogeneous sequence; the arity comes from the caller, never the stream.
    Array(Kind, usize),
}

impl Shape {
    #[inline(always)]
    pub const fn kind(&self) -> Kind {
        match *self {
            Shape::Scalar(kind) | Shape::Array(kind, _) => kind,
        }
    }

    /// Number of bytes this shape consumes.
    ///
    /// `None` when the array is too long for its byte length to fit in `usize`.
    #[inline]
    pub const fn byte_len(&self) -> Option<usize> {
        match *self {
            Shape::Scalar(kind) => Some(kind.width()),
            Shape::Array(kind, len) => len.checked_mul(kind.width()),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar(kind) => write!(f, "{}", kind),
            Shape::Array(kind, len) => write!(f, "{}[{}]", kind, len),
        }
    }
}

/// Parse descriptor seperti `"uint8"` atau `"float32[3]"`.
///
/// Descriptor lain menghasilkan [`DecodeError::Unsupported`], termasuk
/// arity yang tidak muat di `usize`: teks seperti itu bukan shape sama sekali.
/// An arity that parses but whose byte length overflows is a valid shape;
/// reading it fails later with [`DecodeError::OutOfRange`].
impl FromStr for Shape {
    type Err = DecodeError;

    fn from_str(descriptor: &str) -> DecodeResult<Self> {
        let unsupported = || DecodeError::Unsupported(descriptor.to_string());

        let Some(open) = descriptor.find('[') else {
            return Kind::from_name(descriptor)
                .map(Shape::Scalar)
                .ok_or_else(unsupported);
        };

        let kind = Kind::from_name(&descriptor[..open]).ok_or_else(unsupported)?;
        let len = descriptor[open + 1..]
            .strip_suffix(']')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<usize>().ok())
            .ok_or_else(unsupported)?;

        Ok(Shape::Array(kind, len))
    }
}
