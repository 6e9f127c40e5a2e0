//! # Field Keys
//!
//! Struct fields are introduced by a key, `uvarint((number << 3) | typ3)`,
//! where the low three bits say how the value that follows is delimited.
//! The layout is shared with proto3.

use std::fmt;

use crate::error::AminoError;
use crate::varint::{decode_uvarint, put_uvarint};

/// Largest field number a key can carry.
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Wire type of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Typ3 {
    /// A uvarint (also used for bools and two's-complement integers).
    Varint = 0,
    /// Eight little-endian bytes.
    Fixed64 = 1,
    /// A uvarint length followed by that many bytes.
    ByteLength = 2,
    /// Four little-endian bytes.
    Fixed32 = 5,
}

impl Typ3 {
    pub fn from_u8(t: u8) -> Option<Self> {
        match t {
            0 => Some(Self::Varint),
            1 => Some(Self::Fixed64),
            2 => Some(Self::ByteLength),
            5 => Some(Self::Fixed32),
            _ => None,
        }
    }
}

impl fmt::Display for Typ3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Varint => "Varint",
            Self::Fixed64 => "8Byte",
            Self::ByteLength => "ByteLength",
            Self::Fixed32 => "4Byte",
        };
        f.write_str(name)
    }
}

/// Append the key for field `number` with wire type `typ3`.
pub fn put_field_key(buf: &mut Vec<u8>, number: u32, typ3: Typ3) {
    put_uvarint(buf, (u64::from(number) << 3) | typ3 as u64);
}

/// Read a field key from the front of `bz`.
///
/// # Errors
///
/// `InvalidEncoding` for field number 0, a number above
/// [`MAX_FIELD_NUMBER`], or a typ3 outside {0, 1, 2, 5}. Varint failures
/// propagate unchanged.
pub fn decode_field_key(bz: &[u8]) -> Result<(u32, Typ3, usize), AminoError> {
    let (key, n) = decode_uvarint(bz)?;
    let typ3 = Typ3::from_u8((key & 0x07) as u8)
        .ok_or_else(|| AminoError::InvalidEncoding(format!("invalid typ3 {}", key & 0x07)))?;
    let number = key >> 3;
    if number == 0 || number > u64::from(MAX_FIELD_NUMBER) {
        return Err(AminoError::InvalidEncoding(format!(
            "field number {number} out of range"
        )));
    }
    Ok((number as u32, typ3, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_keys_are_one_byte() {
        let mut buf = Vec::new();
        put_field_key(&mut buf, 1, Typ3::ByteLength);
        put_field_key(&mut buf, 2, Typ3::Varint);
        put_field_key(&mut buf, 3, Typ3::Fixed64);
        put_field_key(&mut buf, 4, Typ3::Fixed32);
        assert_eq!(buf, vec![0x0a, 0x10, 0x19, 0x25]);
    }

    #[test]
    fn test_key_round_trip_multi_byte() {
        let mut buf = Vec::new();
        put_field_key(&mut buf, 300, Typ3::ByteLength);
        assert_eq!(
            decode_field_key(&buf).unwrap(),
            (300, Typ3::ByteLength, buf.len())
        );
    }

    #[test]
    fn test_invalid_typ3_rejected() {
        assert!(matches!(
            decode_field_key(&[0x0b]),
            Err(AminoError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_field_zero_rejected() {
        assert!(matches!(
            decode_field_key(&[0x02]),
            Err(AminoError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_truncated_key() {
        assert!(matches!(
            decode_field_key(&[]),
            Err(AminoError::TruncatedInput { .. })
        ));
    }
}
