//! # Length Framing — Byte Slices and Strings
//!
//! A framed value is `uvarint(len) || raw bytes`. The same frame wraps byte
//! slices, UTF-8 strings, nested structs and length-prefixed top-level
//! encodings.

use crate::bytes::AminoBytes;
use crate::error::AminoError;
use crate::varint::{decode_uvarint, put_uvarint, uvarint_size};

/// Append `uvarint(len(bz)) || bz` to `buf`.
pub fn put_byte_slice(buf: &mut Vec<u8>, bz: &[u8]) {
    put_uvarint(buf, bz.len() as u64);
    buf.extend_from_slice(bz);
}

/// Encode a byte slice with its length frame.
pub fn encode_byte_slice(bz: &[u8]) -> AminoBytes {
    let mut buf = Vec::with_capacity(byte_slice_size(bz));
    put_byte_slice(&mut buf, bz);
    AminoBytes::new(buf)
}

/// Total length of [`encode_byte_slice`]'s output for `bz`.
pub fn byte_slice_size(bz: &[u8]) -> usize {
    uvarint_size(bz.len() as u64) + bz.len()
}

/// Borrow the framed payload at the front of `bz` without copying.
///
/// Returns the payload slice and the total bytes consumed (header plus
/// payload).
///
/// # Errors
///
/// Propagates uvarint failures of the header; `LengthOverflow` when the
/// declared length is larger than what remains.
pub fn read_frame(bz: &[u8]) -> Result<(&[u8], usize), AminoError> {
    let (declared, n) = decode_uvarint(bz)?;
    let remaining = bz.len() - n;
    let len = usize::try_from(declared)
        .ok()
        .filter(|len| *len <= remaining)
        .ok_or(AminoError::LengthOverflow {
            declared,
            remaining,
        })?;
    Ok((&bz[n..n + len], n + len))
}

/// Decode a length-framed byte slice.
pub fn decode_byte_slice(bz: &[u8]) -> Result<(Vec<u8>, usize), AminoError> {
    let (payload, n) = read_frame(bz)?;
    Ok((payload.to_vec(), n))
}

/// Encode a string as its UTF-8 bytes with a length frame.
pub fn encode_string(s: &str) -> AminoBytes {
    encode_byte_slice(s.as_bytes())
}

/// Decode a length-framed UTF-8 string.
///
/// # Errors
///
/// `InvalidEncoding` if the payload is not valid UTF-8, in addition to the
/// framing errors of [`read_frame`].
pub fn decode_string(bz: &[u8]) -> Result<(String, usize), AminoError> {
    let (payload, n) = read_frame(bz)?;
    let s = std::str::from_utf8(payload)
        .map_err(|e| AminoError::InvalidEncoding(format!("string is not UTF-8: {e}")))?;
    Ok((s.to_owned(), n))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn byte_slice_round_trip(bz in prop::collection::vec(any::<u8>(), 0..300)) {
            let enc = encode_byte_slice(&bz);
            prop_assert_eq!(enc.len(), byte_slice_size(&bz));
            prop_assert_eq!(decode_byte_slice(enc.as_bytes()).unwrap(), (bz, enc.len()));
        }

        #[test]
        fn string_round_trip(s in "\\PC{0,64}") {
            let enc = encode_string(&s);
            prop_assert_eq!(decode_string(enc.as_bytes()).unwrap(), (s, enc.len()));
        }

        /// Every strict prefix fails; none decodes to a shorter value.
        #[test]
        fn strict_prefix_never_decodes(bz in prop::collection::vec(any::<u8>(), 1..200)) {
            let enc = encode_byte_slice(&bz);
            for cut in 0..enc.len() {
                let failed = matches!(
                    decode_byte_slice(&enc.as_bytes()[..cut]),
                    Err(AminoError::TruncatedInput { .. }) | Err(AminoError::LengthOverflow { .. })
                );
                prop_assert!(failed);
            }
        }
    }
}
