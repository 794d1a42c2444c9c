//! Payload cursor
//!
//! Owns satu packet payload dan posisi baca. Posisi hanya bergerak maju.

use super::error::{DecodeError, DecodeResult};

/// Owned byte buffer with a forward-only read position.
///
/// Invariant: `position <= buffer.len()`.
#[derive(Debug, Clone)]
pub struct Cursor {
    buffer: Box<[u8]>,
    position: usize,
}

impl Cursor {
    /// Membuat cursor dari payload yang sudah diterima penuh
    pub fn new(payload: impl Into<Box<[u8]>>) -> Self {
        Self {
            buffer: payload.into(),
            position: 0,
        }
    }

    /// Take the next `n` bytes and advance past them.
    ///
    /// Fails with [`DecodeError::OutOfRange`] when fewer than `n` bytes
    /// remain; the position is left untouched in that case.
    #[inline]
    pub fn take_bytes(&mut self, n: usize) -> DecodeResult<&[u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(DecodeError::OutOfRange {
                requested: n,
                remaining,
            });
        }

        let start = self.position;
        self.position += n;
        Ok(&self.buffer[start..self.position])
    }

    /// Bytes not yet consumed
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Bytes consumed so far
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total payload size
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
