//! # amino-registry — Typed Amino Dispatch
//!
//! Encodes and decodes application types (Cosmos SDK messages and
//! transactions, Tendermint consensus and p2p messages, keys) between
//! go-amino JSON and go-amino binary.
//!
//! ## Architecture
//!
//! - [`catalog`]: serde descriptors for interfaces and type layouts,
//!   loaded from YAML or JSON.
//! - [`registry`]: the `Registry<Building>` → `Registry<Sealed>` typestate.
//!   Registration derives each concrete type's prefix bytes and rejects
//!   collisions. The sealed registry is immutable and `Send + Sync`.
//! - `binary`: the field walker for struct bodies and interface payloads.
//! - `json`: the go-amino JSON conventions for scalars, bytes, addresses,
//!   times and `{"type", "value"}` wrappers.
//! - [`names`] / [`well_known`]: registered names used across the Cosmos
//!   ecosystem and the `encode_*` / `decode_*` pairs generated for them by
//!   [`amino_codecs!`].
//!
//! ## Example
//!
//! ```
//! use amino_registry::{Catalog, Registry};
//! use serde_json::json;
//!
//! let catalog = Catalog::from_yaml_str(r#"
//! interfaces:
//!   - name: PubKey
//! types:
//!   - name: tendermint/PubKeyEd25519
//!     registered: true
//!     implements: [PubKey]
//!     value: { kind: bytes, length: 32 }
//! "#).unwrap();
//! let registry = Registry::from_catalog(&catalog).unwrap();
//!
//! let key = json!({
//!     "type": "tendermint/PubKeyEd25519",
//!     "value": "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=",
//! });
//! let amino = registry.encode("PubKey", &key, false).unwrap();
//! assert_eq!(&amino.as_bytes()[..5], &[0x16, 0x24, 0xde, 0x64, 0x20]);
//! assert_eq!(registry.decode("PubKey", amino.as_bytes(), false).unwrap(), key);
//! ```
//!
//! ## Logging
//!
//! Registration logs at `debug`, sealing at `info`, and each encode/decode
//! call at `trace`, all through `tracing`. No subscriber is installed here.
//!
//! ## Crate Policy
//!
//! - Depends on `amino-core` for wire primitives and `amino-bech32` for
//!   address fields.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod catalog;
pub mod error;
pub mod names;
pub mod registry;
pub mod well_known;

mod binary;
mod json;

pub use amino_core::AminoBytes;
pub use binary::MAX_DEPTH;
pub use catalog::{Catalog, FieldDescriptor, FieldKind, InterfaceDescriptor, TypeDescriptor};
pub use error::{CatalogError, DisfixPart, RegistryError};
pub use registry::{Building, Registry, RegistryState, Sealed};
