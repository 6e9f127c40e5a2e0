//! # Error Types — Registry and Catalog Failures
//!
//! [`RegistryError`] covers everything from descriptor validation through
//! value encoding. Wire-level and Bech32 failures are wrapped unchanged so
//! callers can still match on the underlying variant.

use std::fmt;
use std::path::PathBuf;

use amino_bech32::Bech32Error;
use amino_core::AminoError;
use thiserror::Error;

/// Half of a disfix involved in a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisfixPart {
    Disamb,
    Prefix,
}

impl fmt::Display for DisfixPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disamb => f.write_str("disamb"),
            Self::Prefix => f.write_str("prefix"),
        }
    }
}

/// Failure to build a registry or to encode/decode through one.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A wire primitive failed.
    #[error("amino error: {0}")]
    Amino(#[from] AminoError),

    /// An address field failed Bech32 conversion.
    #[error("bech32 error: {0}")]
    Bech32(#[from] Bech32Error),

    /// A value or byte stream does not have the shape its type declares.
    #[error("schema mismatch in {type_name}: {reason}")]
    SchemaMismatch {
        /// Type being encoded or decoded when the mismatch was found.
        type_name: String,
        /// What did not match.
        reason: String,
    },

    /// Two registered names derive the same disamb or prefix bytes.
    #[error("{part} {bytes} of {name:?} collides with already registered {existing:?}")]
    DisfixCollision {
        /// The name being registered.
        name: String,
        /// The name that already owns the bytes.
        existing: String,
        /// Which half of the disfix is shared.
        part: DisfixPart,
        /// The shared bytes, upper-case hex.
        bytes: String,
    },

    /// A type or interface name was registered twice.
    #[error("duplicate type name {0:?}")]
    DuplicateType(String),

    /// A name is not present in the registry.
    #[error("unknown type {0:?}")]
    UnknownType(String),

    /// A catalog descriptor is malformed.
    #[error("invalid descriptor for {name:?}: {reason}")]
    InvalidDescriptor {
        /// Type (or `type.field`) the descriptor belongs to.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Input continued past the end of the decoded value.
    #[error("{0} trailing bytes after decoded value")]
    TrailingBytes(usize),

    /// JSON input or output failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RegistryError {
    pub(crate) fn mismatch(type_name: &str, reason: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            type_name: type_name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn descriptor(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Failure to load a catalog file.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse failure.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parse failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension names no supported format.
    #[error("unsupported catalog format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}
