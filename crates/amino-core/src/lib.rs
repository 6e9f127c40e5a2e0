//! # amino-core — Amino Wire Primitives
//!
//! The leaf crate of the Amino workspace. It defines the byte-level rules that
//! every other crate builds on, and those rules are a compatibility contract
//! with go-amino: changing any of them breaks interoperability with every
//! Tendermint / Cosmos SDK node that speaks the format.
//!
//! ## Modules
//!
//! - [`varint`]: minimal-length `uvarint` and zig-zag `varint`.
//! - [`primitives`]: fixed-width and varint-carried integers, floats, bools.
//! - [`framing`]: length-prefixed byte slices and strings.
//! - [`field`]: struct field keys and their wire types.
//! - [`time`]: timestamps as an Amino struct of seconds and nanoseconds.
//! - [`disfix`]: SHA-256 derived disambiguation and prefix bytes.
//!
//! ## Conventions
//!
//! Every `encode_*` function returns [`AminoBytes`]. Every `decode_*` function
//! takes a borrowed buffer and returns the value together with the number of
//! leading bytes it consumed, so callers can continue decoding the following
//! field from the same buffer.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `amino-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod bytes;
pub mod disfix;
pub mod error;
pub mod field;
pub mod framing;
pub mod primitives;
pub mod time;
pub mod varint;

pub use bytes::AminoBytes;
pub use disfix::{
    decode_disamb_prefix_bytes, name_to_disfix, DisambBytes, Disfix, PrefixBytes, TypeHeader,
};
pub use error::AminoError;
pub use field::{decode_field_key, put_field_key, Typ3, MAX_FIELD_NUMBER};
pub use framing::{
    byte_slice_size, decode_byte_slice, decode_string, encode_byte_slice, encode_string,
    put_byte_slice, read_frame,
};
pub use primitives::*;
pub use time::{decode_time, encode_time, put_time, MAX_SECONDS, MIN_SECONDS};
pub use varint::{
    decode_uvarint, decode_varint, encode_uvarint, encode_varint, put_uvarint, put_varint,
    uvarint_size, varint_size, MAX_VARINT_LEN,
};
