//! Decoder error types

use thiserror::Error;

/// Errors returned by the payload reader.
///
/// Both variants leave the cursor where it was before the failing call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload does not hold enough bytes for the requested shape.
    #[error("out of range: requested {requested} bytes, {remaining} remaining")]
    OutOfRange {
        /// Bytes the read needed.
        requested: usize,
        /// Bytes left in the payload.
        remaining: usize,
    },

    /// The requested shape is not a known scalar or array kind.
    #[error("unsupported type: {0}")]
    Unsupported(String),
}

/// Result type for decoder operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
