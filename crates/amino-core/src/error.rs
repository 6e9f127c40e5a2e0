//! # Error Types — Wire-Level Decode and Encode Failures
//!
//! Every primitive reports failures through [`AminoError`]. Errors carry
//! enough context to locate the problem (what was being read, how many bytes
//! were declared vs. available) but never a partially decoded value.

use thiserror::Error;

/// Failure of an Amino primitive encode or decode operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AminoError {
    /// The buffer ended before the value was complete.
    #[error("truncated input while reading {what}: needed {needed} bytes, {available} available")]
    TruncatedInput {
        /// What was being decoded.
        what: &'static str,
        /// Minimum number of bytes required.
        needed: usize,
        /// Number of bytes actually present.
        available: usize,
    },

    /// A varint used more bytes than its value requires.
    #[error("non-minimal varint: {length} bytes used for a value that needs {minimal}")]
    NonMinimalVarint {
        /// Number of bytes the encoding occupied.
        length: usize,
        /// Number of bytes the minimal encoding occupies.
        minimal: usize,
    },

    /// A varint carried more than 64 bits of payload.
    #[error("varint overflows 64 bits")]
    VarintOverflow,

    /// A decoded integer does not fit the target width.
    #[error("{kind} value {value} out of range")]
    OutOfRange {
        /// Target integer type name (e.g. "int8").
        kind: &'static str,
        /// The decoded value, rendered as text.
        value: String,
    },

    /// A bool byte other than 0x00 or 0x01.
    #[error("invalid bool byte 0x{0:02x}")]
    InvalidBool(u8),

    /// A declared length exceeds the remaining buffer.
    #[error("declared length {declared} exceeds {remaining} remaining bytes")]
    LengthOverflow {
        /// Length announced by the uvarint frame.
        declared: u64,
        /// Bytes left after the frame header.
        remaining: usize,
    },

    /// Text content is not valid UTF-8.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// A timestamp outside the representable range.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Leading bytes match neither the disfix nor the prefix pattern.
    #[error("malformed prefix: {0}")]
    MalformedPrefix(String),
}

impl AminoError {
    pub(crate) fn truncated(what: &'static str, needed: usize, available: usize) -> Self {
        Self::TruncatedInput {
            what,
            needed,
            available,
        }
    }
}
