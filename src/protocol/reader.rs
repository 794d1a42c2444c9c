//! Packet payload reader
//!
//! Satu `Reader` per packet payload. Alur setiap read:
//! shape → byte length → `Cursor::take_bytes` → decode → tulis ke destination.
//! Block diambil atomik, jadi array tidak pernah terisi sebagian.

use super::cursor::Cursor;
use super::decode::{decode_array, decode_scalar, decode_values, Scalar, Value};
use super::error::{DecodeError, DecodeResult};
use super::shape::Shape;

mod sealed {
    /// Tulis decoded values; `raw` selalu tepat `shape().byte_len()` bytes.
    pub trait Fill {
        fn fill(&mut self, raw: &[u8]);
    }
}

/// Caller-owned storage that a [`Reader`] can decode into.
///
/// Implemented for every [`Scalar`], for slices of them and for arrays of
/// them. The slice length is the array arity; nothing is read from the
/// stream to determine it. Only [`Reader::read`] writes into a destination.
pub trait Destination: sealed::Fill {
    /// Shape yang dibutuhkan destination ini
    fn shape(&self) -> Shape;
}

impl<T: Scalar> sealed::Fill for T {
    #[inline(always)]
    fn fill(&mut self, raw: &[u8]) {
        *self = T::decode(raw);
    }
}

impl<T: Scalar> Destination for T {
    #[inline(always)]
    fn shape(&self) -> Shape {
        Shape::Scalar(T::KIND)
    }
}

impl<T: Scalar> sealed::Fill for [T] {
    #[inline(always)]
    fn fill(&mut self, raw: &[u8]) {
        decode_array(raw, self);
    }
}

impl<T: Scalar> Destination for [T] {
    #[inline(always)]
    fn shape(&self) -> Shape {
        Shape::Array(T::KIND, self.len())
    }
}

impl<T: Scalar, const N: usize> sealed::Fill for [T; N] {
    #[inline(always)]
    fn fill(&mut self, raw: &[u8]) {
        decode_array(raw, self.as_mut_slice());
    }
}

impl<T: Scalar, const N: usize> Destination for [T; N] {
    #[inline(always)]
    fn shape(&self) -> Shape {
        Shape::Array(T::KIND, N)
    }
}

/// Big-endian reader over one packet payload.
///
/// Not shareable across threads while reading: every operation takes
/// `&mut self`. Failed reads never move the position.
#[derive(Debug, Clone)]
pub struct Reader {
    cursor: Cursor,
}

macro_rules! typed_reads {
    ($($name:ident => $ty:ty;)*) => {
        $(
            #[doc = concat!("Read one `", stringify!($ty), "`.")]
            #[inline]
            pub fn $name(&mut self) -> DecodeResult<$ty> {
                self.read_scalar::<$ty>()
            }
        )*
    };
}

impl Reader {
    /// Membuat reader dari payload yang sudah lengkap
    pub fn new(payload: impl Into<Box<[u8]>>) -> Self {
        Self {
            cursor: Cursor::new(payload),
        }
    }

    /// Decode into `dst`, resolving the byte count from its shape.
    ///
    /// ```
    /// use gomine::protocol::Reader;
    ///
    /// let mut reader = Reader::new(vec![0x80, 0x00, 0x01, 0x00, 0x01]);
    ///
    /// let mut position = 0i16;
    /// reader.read(&mut position).unwrap();
    /// assert_eq!(position, -32768);
    ///
    /// let mut flags = [false; 3];
    /// reader.read(&mut flags).unwrap();
    /// assert_eq!(flags, [true, false, true]);
    /// ```
    pub fn read<D: Destination + ?Sized>(&mut self, dst: &mut D) -> DecodeResult<()> {
        let raw = self.take(dst.shape())?;
        sealed::Fill::fill(dst, raw);
        Ok(())
    }

    /// Read and return one scalar.
    #[inline]
    pub fn read_scalar<T: Scalar>(&mut self) -> DecodeResult<T> {
        let mut value = T::default();
        self.read(&mut value)?;
        Ok(value)
    }

    typed_reads! {
        read_bool => bool;
        read_i8 => i8;
        read_u8 => u8;
        read_i16 => i16;
        read_u16 => u16;
        read_i32 => i32;
        read_u32 => u32;
        read_i64 => i64;
        read_u64 => u64;
        read_f32 => f32;
        read_f64 => f64;
    }

    /// Read a fixed-length array whose arity is known at compile time.
    pub fn read_array<T: Scalar, const N: usize>(&mut self) -> DecodeResult<[T; N]> {
        let mut values = [T::default(); N];
        self.read(&mut values)?;
        Ok(values)
    }

    /// Read `len` values into a fresh `Vec`.
    ///
    /// Nothing is allocated when the payload is too short.
    pub fn read_vec<T: Scalar>(&mut self, len: usize) -> DecodeResult<Vec<T>> {
        let raw = self.take(Shape::Array(T::KIND, len))?;
        let mut values = vec![T::default(); len];
        decode_array(raw, &mut values);
        Ok(values)
    }

    /// Read whatever `shape` describes.
    pub fn read_shape(&mut self, shape: Shape) -> DecodeResult<Value> {
        let raw = self.take(shape)?;
        Ok(match shape {
            Shape::Scalar(kind) => decode_scalar(kind, raw),
            Shape::Array(kind, len) => Value::Array(decode_values(kind, len, raw)),
        })
    }

    /// Read a value described by a textual descriptor such as `"int32"` or
    /// `"float32[3]"`.
    ///
    /// Unknown descriptors fail with [`DecodeError::Unsupported`] before
    /// any byte is consumed.
    pub fn read_value(&mut self, descriptor: &str) -> DecodeResult<Value> {
        let shape = descriptor.parse::<Shape>().map_err(|err| {
            tracing::trace!(position = self.cursor.position(), %err, "unsupported read");
            err
        })?;
        self.read_shape(shape)
    }

    /// Bytes not yet consumed
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// Bytes consumed so far
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Total payload size
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    fn take(&mut self, shape: Shape) -> DecodeResult<&[u8]> {
        let position = self.cursor.position();
        let remaining = self.cursor.remaining();

        let result = match shape.byte_len() {
            Some(n) => self.cursor.take_bytes(n),
            None => Err(DecodeError::OutOfRange {
                requested: usize::MAX,
                remaining,
            }),
        };

        if let Err(err) = &result {
            tracing::trace!(position, %shape, %err, "read failed");
        }
        result
    }
}
