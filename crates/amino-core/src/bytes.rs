//! # AminoBytes — Owned Wire Encodings
//!
//! Every encoder in the workspace returns `AminoBytes`. The inner buffer is
//! private and never mutated after construction, so a value handed to a
//! caller is exactly what the encoder produced.

use serde::{Deserialize, Serialize};

/// An owned, immutable Amino encoding (complete or partial).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AminoBytes(Vec<u8>);

impl AminoBytes {
    /// Wrap a finished encoding.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Borrow the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the encoding in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the wrapper and return the raw buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Render the encoding as upper-case hex, the notation go-amino uses in
    /// its documentation and test vectors.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(&self.0)
    }
}

impl AsRef<[u8]> for AminoBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for AminoBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<AminoBytes> for Vec<u8> {
    fn from(bytes: AminoBytes) -> Self {
        bytes.0
    }
}

impl PartialEq<[u8]> for AminoBytes {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for AminoBytes {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.0 == other
    }
}
