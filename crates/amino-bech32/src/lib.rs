//! # amino-bech32 — Bech32 Address Encoding
//!
//! Implements BIP-173 Bech32: a human-readable part (hrp), the separator
//! `1`, the payload regrouped into 5-bit words, and a 6-symbol BCH checksum,
//! all drawn from the charset `qpzry9x8gf2tvdw0s3jn54khce6mua7l`.
//!
//! Cosmos SDK chains render every account and validator address this way
//! (`cosmos1...`, `cosmosvaloper1...`), and the registry in `amino-registry`
//! uses [`decode_with_hrp`] to turn such strings into raw address bytes.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `amino-*` crates.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod checksum;
pub mod codec;
pub mod error;

pub use codec::{convert_bits, decode, decode_with_hrp, encode, CHARSET, MAX_LENGTH, SEPARATOR};
pub use error::Bech32Error;
