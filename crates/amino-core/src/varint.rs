//! # Varints — Minimal-Length Variable Integers
//!
//! `uvarint` is the base-128 encoding used by Go's `encoding/binary`: seven
//! payload bits per byte, least-significant group first, with the `0x80`
//! continuation bit set on every byte but the last. `varint` folds a signed
//! value into the unsigned domain with zig-zag (`(n << 1) ^ (n >> 63)`)
//! before emitting it as a `uvarint`, exactly like `binary.PutVarint`.
//!
//! ## Canonical Form
//!
//! Encoders always produce the shortest form. Decoders reject any encoding
//! that is longer than [`uvarint_size`] of the value it carries, so every
//! integer has exactly one accepted wire representation.

use crate::bytes::AminoBytes;
use crate::error::AminoError;

/// Longest possible uvarint encoding of a `u64`.
pub const MAX_VARINT_LEN: usize = 10;

/// Append the uvarint encoding of `u` to `buf`.
pub fn put_uvarint(buf: &mut Vec<u8>, mut u: u64) {
    while u >= 0x80 {
        buf.push((u as u8) | 0x80);
        u >>= 7;
    }
    buf.push(u as u8);
}

/// Append the zig-zag varint encoding of `i` to `buf`.
pub fn put_varint(buf: &mut Vec<u8>, i: i64) {
    put_uvarint(buf, zigzag(i));
}

/// Encode an unsigned integer as a minimal-length uvarint.
pub fn encode_uvarint(u: u64) -> AminoBytes {
    let mut buf = Vec::with_capacity(uvarint_size(u));
    put_uvarint(&mut buf, u);
    AminoBytes::new(buf)
}

/// Encode a signed integer as a zig-zag varint.
pub fn encode_varint(i: i64) -> AminoBytes {
    let mut buf = Vec::with_capacity(varint_size(i));
    put_varint(&mut buf, i);
    AminoBytes::new(buf)
}

/// Decode a uvarint from the front of `bz`.
///
/// # Errors
///
/// - `TruncatedInput` if `bz` ends before a byte without the continuation bit.
/// - `VarintOverflow` if the payload exceeds 64 bits.
/// - `NonMinimalVarint` if the encoding carries redundant trailing groups.
pub fn decode_uvarint(bz: &[u8]) -> Result<(u64, usize), AminoError> {
    let mut value: u64 = 0;
    let mut shift: u32 = 0;
    for (i, &b) in bz.iter().enumerate() {
        // The tenth byte may only contribute the single remaining bit.
        if i == MAX_VARINT_LEN - 1 && b > 1 {
            return Err(AminoError::VarintOverflow);
        }
        value |= u64::from(b & 0x7f) << shift;
        if b < 0x80 {
            let length = i + 1;
            let minimal = uvarint_size(value);
            if length != minimal {
                return Err(AminoError::NonMinimalVarint { length, minimal });
            }
            return Ok((value, length));
        }
        shift += 7;
    }
    Err(AminoError::truncated("uvarint", bz.len() + 1, bz.len()))
}

/// Decode a zig-zag varint from the front of `bz`.
///
/// # Errors
///
/// Same as [`decode_uvarint`].
pub fn decode_varint(bz: &[u8]) -> Result<(i64, usize), AminoError> {
    let (u, n) = decode_uvarint(bz)?;
    Ok((unzigzag(u), n))
}

/// Number of bytes [`encode_uvarint`] produces for `u`.
pub fn uvarint_size(u: u64) -> usize {
    if u == 0 {
        return 1;
    }
    let bits = 64 - u.leading_zeros() as usize;
    (bits + 6) / 7
}

/// Number of bytes [`encode_varint`] produces for `i`.
pub fn varint_size(i: i64) -> usize {
    uvarint_size(zigzag(i))
}

fn zigzag(i: i64) -> u64 {
    ((i as u64) << 1) ^ ((i >> 63) as u64)
}

fn unzigzag(u: u64) -> i64 {
    ((u >> 1) as i64) ^ -((u & 1) as i64)
}
