//! Scalar and array decoding
//!
//! Semua multi-byte value di-assemble big-endian ke unsigned integer dulu,
//! lalu di-reinterpret (two's complement untuk signed, IEEE-754 bits untuk float).
//! Tidak ada validasi di sini: caller sudah menjamin panjang slice.

use super::shape::Kind;

pub(crate) mod sealed {
    /// Unchecked decode hook. Callers outside the crate go through `Reader`,
    /// which always hands over exactly `KIND.width()` bytes.
    pub trait Sealed {
        fn decode(raw: &[u8]) -> Self;
    }
}

use sealed::Sealed;

/// A fixed-width value that can be decoded from the wire.
///
/// Implemented for `bool` and every primitive integer and float up to
/// 64 bits. Sealed: the set of kinds is closed.
pub trait Scalar: Copy + Default + Sealed {
    /// Kind tag untuk type ini
    const KIND: Kind;
}

impl Sealed for bool {
    /// Semua byte non-zero dianggap true, bukan hanya 0x01
    #[inline(always)]
    fn decode(raw: &[u8]) -> Self {
        debug_assert_eq!(raw.len(), 1);
        raw[0] != 0
    }
}

impl Scalar for bool {
    const KIND: Kind = Kind::Bool;
}

macro_rules! impl_scalar {
    ($($ty:ty => $kind:ident, $bits:ty, |$v:ident| $conv:expr;)*) => {
        $(
            impl Sealed for $ty {
                #[inline(always)]
                fn decode(raw: &[u8]) -> Self {
                    let mut bytes = [0u8; std::mem::size_of::<$bits>()];
                    bytes.copy_from_slice(raw);
                    let $v = <$bits>::from_be_bytes(bytes);
                    $conv
                }
            }

            impl Scalar for $ty {
                const KIND: Kind = Kind::$kind;
            }
        )*
    };
}

impl_scalar! {
    u8 => Uint8, u8, |v| v;
    i8 => Int8, u8, |v| v as i8;
    u16 => Uint16, u16, |v| v;
    i16 => Int16, u16, |v| v as i16;
    u32 => Uint32, u32, |v| v;
    i32 => Int32, u32, |v| v as i32;
    u64 => Uint64, u64, |v| v;
    i64 => Int64, u64, |v| v as i64;
    f32 => Float32, u32, |v| f32::from_bits(v);
    f64 => Float64, u64, |v| f64::from_bits(v);
}

/// Fill `dst` from a block of `dst.len() * T::KIND.width()` bytes.
///
/// Slot `i` is decoded from `raw[i * w..(i + 1) * w]`. The block length is
/// the caller's invariant: `Reader` takes it from the cursor in one piece.
#[inline]
pub(crate) fn decode_array<T: Scalar>(raw: &[u8], dst: &mut [T]) {
    debug_assert_eq!(raw.len(), dst.len() * T::KIND.width());

    for (slot, chunk) in dst.iter_mut().zip(raw.chunks_exact(T::KIND.width())) {
        *slot = T::decode(chunk);
    }
}

/// Hasil decode berbasis descriptor, di-tag dengan kind-nya
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int8(i8),
    Uint8(u8),
    Int16(i16),
    Uint16(u16),
    Int32(i32),
    Uint32(u32),
    Int64(i64),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Array(Values),
}

/// Homogeneous decoded sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Bool(Vec<bool>),
    Int8(Vec<i8>),
    Uint8(Vec<u8>),
    Int16(Vec<i16>),
    Uint16(Vec<u16>),
    Int32(Vec<i32>),
    Uint32(Vec<u32>),
    Int64(Vec<i64>),
    Uint64(Vec<u64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

/// Decode one scalar of `kind` from exactly `kind.width()` bytes.
pub(crate) fn decode_scalar(kind: Kind, raw: &[u8]) -> Value {
    match kind {
        Kind::Bool => Value::Bool(bool::decode(raw)),
        Kind::Int8 => Value::Int8(i8::decode(raw)),
        Kind::Uint8 => Value::Uint8(u8::decode(raw)),
        Kind::Int16 => Value::Int16(i16::decode(raw)),
        Kind::Uint16 => Value::Uint16(u16::decode(raw)),
        Kind::Int32 => Value::Int32(i32::decode(raw)),
        Kind::Uint32 => Value::Uint32(u32::decode(raw)),
        Kind::Int64 => Value::Int64(i64::decode(raw)),
        Kind::Uint64 => Value::Uint64(u64::decode(raw)),
        Kind::Float32 => Value::Float32(f32::decode(raw)),
        Kind::Float64 => Value::Float64(f64::decode(raw)),
    }
}

fn collect<T: Scalar>(raw: &[u8], len: usize) -> Vec<T> {
    debug_assert_eq!(raw.len(), len * T::KIND.width());
    let mut out = vec![T::default(); len];
    decode_array(raw, &mut out);
    out
}

/// Decode `len` values of `kind` from exactly `len * kind.width()` bytes.
///
/// The result always holds exactly `len` values.
pub(crate) fn decode_values(kind: Kind, len: usize, raw: &[u8]) -> Values {
    match kind {
        Kind::Bool => Values::Bool(collect(raw, len)),
        Kind::Int8 => Values::Int8(collect(raw, len)),
        Kind::Uint8 => Values::Uint8(collect(raw, len)),
        Kind::Int16 => Values::Int16(collect(raw, len)),
        Kind::Uint16 => Values::Uint16(collect(raw, len)),
        Kind::Int32 => Values::Int32(collect(raw, len)),
        Kind::Uint32 => Values::Uint32(collect(raw, len)),
        Kind::Int64 => Values::Int64(collect(raw, len)),
        Kind::Uint64 => Values::Uint64(collect(raw, len)),
        Kind::Float32 => Values::Float32(collect(raw, len)),
        Kind::Float64 => Values::Float64(collect(raw, len)),
    }
}

impl Values {
    pub fn len(&self) -> usize {
        match self {
            Values::Bool(v) => v.len(),
            Values::Int8(v) => v.len(),
            Values::Uint8(v) => v.len(),
            Values::Int16(v) => v.len(),
            Values::Uint16(v) => v.len(),
            Values::Int32(v) => v.len(),
            Values::Uint32(v) => v.len(),
            Values::Int64(v) => v.len(),
            Values::Uint64(v) => v.len(),
            Values::Float32(v) => v.len(),
            Values::Float64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::sealed::Sealed;
    use super::*;

    #[test]
    fn test_bool_nonzero_is_true() {
        assert!(!bool::decode(&[0x00]));
        for byte in [0x01, 0x7F, 0x80, 0xFF] {
            assert!(bool::decode(&[byte]), "byte {:#04x}", byte);
        }
    }

    #[test]
    fn test_signed_twos_complement() {
        assert_eq!(i16::decode(&[0x80, 0x00]), -32768);
        assert_eq!(i16::decode(&[0x7F, 0xFF]), 32767);
        assert_eq!(i16::decode(&[0xFF, 0xFF]), -1);
        assert_eq!(i8::decode(&[0x85]), -123);
        assert_eq!(i32::decode(&[0xFF, 0xFF, 0xFF, 0xFE]), -2);
        assert_eq!(i64::decode(&[0x80, 0, 0, 0, 0, 0, 0, 0]), i64::MIN);
    }

    #[test]
    fn test_unsigned_big_endian() {
        assert_eq!(u16::decode(&[0x12, 0x34]), 0x1234);
        assert_eq!(u32::decode(&[0xDE, 0xAD, 0xBE, 0xEF]), 0xDEAD_BEEF);
        assert_eq!(
            u64::decode(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]),
            0x0102_0304_0506_0708
        );
    }

    #[test]
    fn test_float_bit_reinterpretation() {
        assert_eq!(f32::decode(&[0x3F, 0x80, 0x00, 0x00]), 1.0);
        assert_eq!(f32::decode(&[0xC0, 0x49, 0x0F, 0xDB]), -std::f32::consts::PI);
        assert_eq!(
            f64::decode(&[0x40, 0x09, 0x21, 0xFB, 0x54, 0x44, 0x2D, 0x18]),
            std::f64::consts::PI
        );

        // NaN payload harus tetap utuh
        let nan = f32::decode(&[0x7F, 0xC0, 0x00, 0x01]);
        assert!(nan.is_nan());
        assert_eq!(nan.to_bits(), 0x7FC0_0001);

        let neg_zero = f64::decode(&[0x80, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(neg_zero.to_bits(), 0x8000_0000_0000_0000);
    }

    #[test]
    fn test_decode_array_slices() {
        let raw = [0x00, 0x01, 0xFF, 0xFE, 0x80, 0x00];
        let mut dst = [0i16; 3];
        decode_array(&raw, &mut dst);
        assert_eq!(dst, [1, -2, -32768]);
    }

    #[test]
    fn test_decode_scalar_tags() {
        assert_eq!(decode_scalar(Kind::Uint8, &[0x81]), Value::Uint8(129));
        assert_eq!(decode_scalar(Kind::Int8, &[0x81]), Value::Int8(-127));
        assert_eq!(decode_scalar(Kind::Bool, &[0x02]), Value::Bool(true));
        assert_eq!(
            decode_scalar(Kind::Float32, &[0x3F, 0x80, 0x00, 0x00]),
            Value::Float32(1.0)
        );
    }

    #[test]
    fn test_decode_values() {
        let raw = [0x01, 0x00, 0x01, 0x01, 0x00, 0x00];
        assert_eq!(
            decode_values(Kind::Bool, 6, &raw),
            Values::Bool(vec![true, false, true, true, false, false])
        );
        assert_eq!(
            decode_values(Kind::Uint16, 3, &raw),
            Values::Uint16(vec![0x0100, 0x0101, 0x0000])
        );
        assert!(decode_values(Kind::Float64, 0, &[]).is_empty());
    }

    #[test]
    fn test_decode_values_len_matches_for_every_kind() {
        let raw = [0xA5u8; 3 * 8];
        for kind in Kind::ALL {
            let block = &raw[..3 * kind.width()];
            assert_eq!(decode_values(kind, 3, block).len(), 3, "kind {}", kind);
        }
        assert_eq!(
            decode_values(Kind::Uint8, 3, &[1, 2, 3]),
            Values::Uint8(vec![1, 2, 3])
        );
    }
}
