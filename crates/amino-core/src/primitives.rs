//! # Primitive Codecs — Integers, Floats, Bools
//!
//! The width-to-wire mapping follows go-amino's `encoder.go`:
//!
//! | Type                  | Wire form                               |
//! |-----------------------|-----------------------------------------|
//! | `int8`, `int16`       | zig-zag varint                          |
//! | `int32`, `int64`      | 4 / 8 bytes little-endian               |
//! | `byte`, `uint8`, `uint16` | uvarint                             |
//! | `uint32`, `uint64`    | 4 / 8 bytes little-endian               |
//! | `float32`, `float64`  | IEEE-754 bits as `uint32` / `uint64`    |
//! | `bool`                | one byte, `0x00` or `0x01`              |
//!
//! Varint-carried narrow integers are range-checked on decode; a value that
//! does not fit the target width is `OutOfRange`, never silently truncated.

use crate::bytes::AminoBytes;
use crate::error::AminoError;
use crate::varint::{decode_uvarint, decode_varint, put_uvarint, put_varint};

// ─── Fixed-width little-endian ───────────────────────────────────────

/// Append `u` as 4 little-endian bytes.
pub fn put_fixed32(buf: &mut Vec<u8>, u: u32) {
    buf.extend_from_slice(&u.to_le_bytes());
}

/// Append `u` as 8 little-endian bytes.
pub fn put_fixed64(buf: &mut Vec<u8>, u: u64) {
    buf.extend_from_slice(&u.to_le_bytes());
}

/// Read 4 little-endian bytes from the front of `bz`.
pub fn read_fixed32(bz: &[u8]) -> Result<(u32, usize), AminoError> {
    let head: [u8; 4] = bz
        .get(..4)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| AminoError::truncated("fixed32", 4, bz.len()))?;
    Ok((u32::from_le_bytes(head), 4))
}

/// Read 8 little-endian bytes from the front of `bz`.
pub fn read_fixed64(bz: &[u8]) -> Result<(u64, usize), AminoError> {
    let head: [u8; 8] = bz
        .get(..8)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| AminoError::truncated("fixed64", 8, bz.len()))?;
    Ok((u64::from_le_bytes(head), 8))
}

// ─── Generated integer pairs ─────────────────────────────────────────

macro_rules! zigzag_int {
    (encode $encode:ident; decode $decode:ident; integer $int:ident; kind $kind:literal) => {
        #[doc = concat!("Encode `", $kind, "` as a zig-zag varint.")]
        pub fn $encode(i: $int) -> AminoBytes {
            encode_with(|buf| put_varint(buf, i64::from(i)))
        }

        #[doc = concat!("Decode a zig-zag varint that must fit `", $kind, "`.")]
        pub fn $decode(bz: &[u8]) -> Result<($int, usize), AminoError> {
            let (i, n) = decode_varint(bz)?;
            let narrowed = $int::try_from(i).map_err(|_| out_of_range($kind, i))?;
            Ok((narrowed, n))
        }
    };
}

macro_rules! uvarint_uint {
    (encode $encode:ident; decode $decode:ident; integer $int:ident; kind $kind:literal) => {
        #[doc = concat!("Encode `", $kind, "` as a uvarint.")]
        pub fn $encode(u: $int) -> AminoBytes {
            encode_with(|buf| put_uvarint(buf, u64::from(u)))
        }

        #[doc = concat!("Decode a uvarint that must fit `", $kind, "`.")]
        pub fn $decode(bz: &[u8]) -> Result<($int, usize), AminoError> {
            let (u, n) = decode_uvarint(bz)?;
            let narrowed = $int::try_from(u).map_err(|_| out_of_range($kind, u))?;
            Ok((narrowed, n))
        }
    };
}

macro_rules! fixed_int {
    (encode $encode:ident; decode $decode:ident; integer $int:ident; kind $kind:literal;
     wire $wire:ident; width $width:literal; put $put:ident; read $read:ident) => {
        #[doc = concat!("Encode `", $kind, "` as ", $width, " little-endian bytes.")]
        pub fn $encode(i: $int) -> AminoBytes {
            encode_with(|buf| $put(buf, i as $wire))
        }

        #[doc = concat!("Decode `", $kind, "` from ", $width, " little-endian bytes.")]
        pub fn $decode(bz: &[u8]) -> Result<($int, usize), AminoError> {
            let (u, n) = $read(bz)?;
            Ok((u as $int, n))
        }
    };
}

zigzag_int!(encode encode_int8; decode decode_int8; integer i8; kind "int8");
zigzag_int!(encode encode_int16; decode decode_int16; integer i16; kind "int16");
fixed_int!(encode encode_int32; decode decode_int32; integer i32; kind "int32";
    wire u32; width 4; put put_fixed32; read read_fixed32);
fixed_int!(encode encode_int64; decode decode_int64; integer i64; kind "int64";
    wire u64; width 8; put put_fixed64; read read_fixed64);

uvarint_uint!(encode encode_byte; decode decode_byte; integer u8; kind "byte");
uvarint_uint!(encode encode_uint8; decode decode_uint8; integer u8; kind "uint8");
uvarint_uint!(encode encode_uint16; decode decode_uint16; integer u16; kind "uint16");
fixed_int!(encode encode_uint32; decode decode_uint32; integer u32; kind "uint32";
    wire u32; width 4; put put_fixed32; read read_fixed32);
fixed_int!(encode encode_uint64; decode decode_uint64; integer u64; kind "uint64";
    wire u64; width 8; put put_fixed64; read read_fixed64);

// ─── Floats ──────────────────────────────────────────────────────────

/// Encode an `f32` as its IEEE-754 bit pattern.
///
/// go-amino marks float encoding as non-deterministic across platforms for
/// NaN payloads; the bit pattern is written exactly as given.
pub fn encode_float32(f: f32) -> AminoBytes {
    encode_uint32(f.to_bits())
}

/// Encode an `f64` as its IEEE-754 bit pattern.
pub fn encode_float64(f: f64) -> AminoBytes {
    encode_uint64(f.to_bits())
}

/// Decode an `f32` from its bit pattern.
pub fn decode_float32(bz: &[u8]) -> Result<(f32, usize), AminoError> {
    let (u, n) = read_fixed32(bz)?;
    Ok((f32::from_bits(u), n))
}

/// Decode an `f64` from its bit pattern.
pub fn decode_float64(bz: &[u8]) -> Result<(f64, usize), AminoError> {
    let (u, n) = read_fixed64(bz)?;
    Ok((f64::from_bits(u), n))
}

// ─── Bool ────────────────────────────────────────────────────────────

/// Encode a bool as `0x00` or `0x01`.
pub fn encode_bool(b: bool) -> AminoBytes {
    AminoBytes::new(vec![u8::from(b)])
}

/// Decode a bool; any byte other than `0x00`/`0x01` is `InvalidBool`.
pub fn decode_bool(bz: &[u8]) -> Result<(bool, usize), AminoError> {
    match bz.first() {
        Some(0x00) => Ok((false, 1)),
        Some(0x01) => Ok((true, 1)),
        Some(&other) => Err(AminoError::InvalidBool(other)),
        None => Err(AminoError::truncated("bool", 1, 0)),
    }
}

fn encode_with(write: impl FnOnce(&mut Vec<u8>)) -> AminoBytes {
    let mut buf = Vec::with_capacity(8);
    write(&mut buf);
    AminoBytes::new(buf)
}

fn out_of_range(kind: &'static str, value: impl ToString) -> AminoError {
    AminoError::OutOfRange {
        kind,
        value: value.to_string(),
    }
}
