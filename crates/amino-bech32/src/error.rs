use thiserror::Error;

/// Failure to encode or decode a Bech32 string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Bech32Error {
    /// A character outside the charset (data part) or outside printable
    /// ASCII (hrp).
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte position within the string.
        position: usize,
    },

    /// The checksum does not verify.
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// Regrouping left more than 4 padding bits or non-zero padding.
    #[error("invalid padding: {0}")]
    InvalidPadding(String),

    /// Empty hrp, missing separator, short data part, or total length over
    /// the maximum.
    #[error("invalid length: {0}")]
    InvalidLength(String),

    /// Upper- and lower-case characters mixed in one string.
    #[error("mixed-case string")]
    MixedCase,

    /// Decoded hrp differs from the one the caller required.
    #[error("expected hrp {expected:?}, found {found:?}")]
    InvalidHrp {
        /// The hrp the caller asked for.
        expected: String,
        /// The hrp present in the string.
        found: String,
    },
}
