//! # Registry Typestate — Building and Sealed
//!
//! A registry maps type names to their layouts and registered prefixes to
//! concrete types. It is populated while `Building`, then sealed into an
//! immutable `Sealed` registry that performs encoding and decoding.
//!
//! ```text
//! Registry<Building> ──register_interface()/register_type()──▶ Registry<Building>
//!        │
//!        └──seal()──▶ Registry<Sealed> ──encode()/decode()──▶ ...
//! ```
//!
//! ## Integrity Invariant
//!
//! Within one registry a prefix identifies exactly one concrete type, and so
//! do the disamb bytes. A registration whose prefix or disamb is already
//! taken fails with `DisfixCollision` and leaves the registry untouched, so
//! the caller can rename and retry.
//!
//! ## Compile-Time Safety Example
//!
//! A registry that is still being built cannot encode:
//!
//! ```compile_fail
//! use amino_registry::{Building, Registry};
//!
//! let registry = Registry::<Building>::new();
//! // ERROR: no method named `encode` found for `Registry<Building>`
//! let _ = registry.encode("Coin", &serde_json::json!({}), false);
//! ```
//!
//! `Registry<Sealed>` holds only owned, immutable maps and is `Send + Sync`;
//! share it by reference or behind an `Arc`.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::marker::PhantomData;

use amino_core::{
    encode_byte_slice, name_to_disfix, read_frame, AminoBytes, DisambBytes, Disfix, PrefixBytes,
};
use serde_json::Value;

use crate::binary;
use crate::catalog::{effective_number, Catalog, FieldDescriptor, FieldKind, TypeDescriptor};
use crate::error::{DisfixPart, RegistryError};
use crate::json;

// ─── State Types ─────────────────────────────────────────────────────

/// Registry state: accepting registrations.
#[derive(Debug, Clone, Copy)]
pub struct Building;

/// Registry state: immutable, ready to encode and decode.
#[derive(Debug, Clone, Copy)]
pub struct Sealed;

mod private {
    pub trait Sealed {}
    impl Sealed for super::Building {}
    impl Sealed for super::Sealed {}
}

/// Marker trait for the two registry states.
pub trait RegistryState: private::Sealed + fmt::Debug {
    fn name() -> &'static str;
}

impl RegistryState for Building {
    fn name() -> &'static str {
        "BUILDING"
    }
}

impl RegistryState for Sealed {
    fn name() -> &'static str {
        "SEALED"
    }
}

// ─── Resolved layouts ────────────────────────────────────────────────

/// A field with its effective number.
#[derive(Debug, Clone)]
pub(crate) struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub number: u32,
    pub repeated: bool,
    pub fixed: bool,
    pub hrp: Option<String>,
    pub type_name: Option<String>,
    pub length: Option<usize>,
}

impl Field {
    fn resolve(idx: usize, fd: &FieldDescriptor) -> Self {
        Self {
            name: fd.name.clone(),
            kind: fd.kind,
            number: effective_number(idx, fd),
            repeated: fd.repeated,
            fixed: fd.fixed,
            hrp: fd.hrp.clone(),
            type_name: fd.type_name.clone(),
            length: fd.length,
        }
    }

    pub fn hrp(&self) -> &str {
        self.hrp.as_deref().unwrap_or_default()
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Shape {
    Struct(Vec<Field>),
    Value(Field),
}

#[derive(Debug, Clone)]
pub(crate) struct TypeEntry {
    pub name: String,
    pub disfix: Option<Disfix>,
    pub implements: Vec<String>,
    pub shape: Shape,
}

impl TypeEntry {
    fn resolve(desc: TypeDescriptor) -> Self {
        let shape = match &desc.value {
            Some(value) => Shape::Value(Field::resolve(0, value)),
            None => Shape::Struct(
                desc.fields
                    .iter()
                    .enumerate()
                    .map(|(idx, fd)| Field::resolve(idx, fd))
                    .collect(),
            ),
        };
        let disfix = desc.registered.then(|| name_to_disfix(&desc.name));
        Self {
            name: desc.name,
            disfix,
            implements: desc.implements,
            shape,
        }
    }

    pub fn implements(&self, interface: &str) -> bool {
        self.implements.iter().any(|i| i == interface)
    }

    /// Strip the `{"type", "value"}` wrapper from a registered concrete
    /// value. Unregistered structs are taken as given, so a struct whose own
    /// fields are `type` and `value` is not mistaken for a wrapper.
    pub fn unwrap_value<'v>(&self, v: &'v Value) -> Result<&'v Value, RegistryError> {
        match self.disfix {
            Some(_) => json::unwrap_concrete(&self.name, v),
            None => Ok(v),
        }
    }

    fn fields(&self) -> impl Iterator<Item = &Field> {
        let fields: &[Field] = match &self.shape {
            Shape::Struct(fields) => fields,
            Shape::Value(field) => std::slice::from_ref(field),
        };
        fields.iter()
    }
}

// ─── Registry ────────────────────────────────────────────────────────

/// Name-keyed table of interfaces and type layouts.
#[derive(Debug)]
pub struct Registry<S: RegistryState = Sealed> {
    types: HashMap<String, TypeEntry>,
    interfaces: HashSet<String>,
    by_prefix: HashMap<PrefixBytes, String>,
    by_disamb: HashMap<DisambBytes, String>,
    _state: PhantomData<S>,
}

impl<S: RegistryState> Registry<S> {
    /// Name of the current state ("BUILDING" or "SEALED").
    pub fn state_name(&self) -> &'static str {
        S::name()
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn interface_count(&self) -> usize {
        self.interfaces.len()
    }

    /// True if `name` is a registered interface or type.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name) || self.interfaces.contains(name)
    }

    pub fn is_interface(&self, name: &str) -> bool {
        self.interfaces.contains(name)
    }

    /// Disfix of a registered concrete type.
    pub fn disfix(&self, name: &str) -> Option<Disfix> {
        self.types.get(name).and_then(|e| e.disfix)
    }

    /// Name of the concrete type owning `prefix`.
    pub fn lookup_prefix(&self, prefix: &PrefixBytes) -> Option<&str> {
        self.by_prefix.get(prefix).map(String::as_str)
    }

    /// All type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All interface names, sorted.
    pub fn interface_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.interfaces.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for Registry<Building> {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry<Building> {
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
            interfaces: HashSet::new(),
            by_prefix: HashMap::new(),
            by_disamb: HashMap::new(),
            _state: PhantomData,
        }
    }

    /// Register every interface and type of `catalog`, then seal.
    pub fn from_catalog(catalog: &Catalog) -> Result<Registry<Sealed>, RegistryError> {
        catalog.validate()?;
        let mut registry = Self::new();
        for iface in &catalog.interfaces {
            registry.register_interface(iface.name.clone())?;
        }
        for desc in &catalog.types {
            registry.register_type(desc.clone())?;
        }
        registry.seal()
    }

    /// Declare an interface that registered types can implement.
    pub fn register_interface(&mut self, name: impl Into<String>) -> Result<(), RegistryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RegistryError::descriptor("<unnamed>", "empty interface name"));
        }
        if self.contains(&name) {
            return Err(RegistryError::DuplicateType(name));
        }
        tracing::debug!(name = %name, "registered interface");
        self.interfaces.insert(name);
        Ok(())
    }

    /// Register a type layout, returning its disfix if it is a registered
    /// concrete type.
    ///
    /// # Errors
    ///
    /// - `InvalidDescriptor` if the descriptor is malformed.
    /// - `DuplicateType` if the name is already taken.
    /// - `DisfixCollision` if its prefix or disamb belongs to another type.
    ///
    /// On error the registry is unchanged.
    pub fn register_type(&mut self, desc: TypeDescriptor) -> Result<Option<Disfix>, RegistryError> {
        desc.validate()?;
        self.insert(TypeEntry::resolve(desc))
    }

    fn insert(&mut self, entry: TypeEntry) -> Result<Option<Disfix>, RegistryError> {
        if self.contains(&entry.name) {
            return Err(RegistryError::DuplicateType(entry.name));
        }
        if let Some(disfix) = entry.disfix {
            if let Some(existing) = self.by_prefix.get(&disfix.prefix) {
                return Err(RegistryError::DisfixCollision {
                    name: entry.name,
                    existing: existing.clone(),
                    part: DisfixPart::Prefix,
                    bytes: disfix.prefix.to_string(),
                });
            }
            if let Some(existing) = self.by_disamb.get(&disfix.disamb) {
                return Err(RegistryError::DisfixCollision {
                    name: entry.name,
                    existing: existing.clone(),
                    part: DisfixPart::Disamb,
                    bytes: disfix.disamb.to_string(),
                });
            }
            tracing::debug!(
                name = %entry.name,
                prefix = %disfix.prefix,
                disamb = %disfix.disamb,
                "registered concrete type"
            );
            self.by_prefix.insert(disfix.prefix, entry.name.clone());
            self.by_disamb.insert(disfix.disamb, entry.name.clone());
        } else {
            tracing::debug!(name = %entry.name, "registered unprefixed type");
        }
        let disfix = entry.disfix;
        self.types.insert(entry.name.clone(), entry);
        Ok(disfix)
    }

    /// Register `desc` under a caller-chosen disfix.
    #[cfg(test)]
    pub(crate) fn register_with_disfix(
        &mut self,
        desc: TypeDescriptor,
        disfix: Disfix,
    ) -> Result<Option<Disfix>, RegistryError> {
        desc.validate()?;
        let mut entry = TypeEntry::resolve(desc);
        entry.disfix = Some(disfix);
        self.insert(entry)
    }

    /// Resolve every reference and freeze the registry.
    ///
    /// # Errors
    ///
    /// - `UnknownType` if an `implements` entry names no interface, a
    ///   `struct` field names no type, or an `interface` field names no
    ///   interface.
    /// - `InvalidDescriptor` if a `struct` field refers to a value type.
    pub fn seal(self) -> Result<Registry<Sealed>, RegistryError> {
        for entry in self.types.values() {
            if let Some(missing) = entry.implements.iter().find(|i| !self.interfaces.contains(*i)) {
                return Err(RegistryError::UnknownType(missing.clone()));
            }
            for field in entry.fields() {
                match field.kind {
                    FieldKind::Struct => match self.types.get(field.type_name()) {
                        None => return Err(RegistryError::UnknownType(field.type_name().into())),
                        Some(TypeEntry {
                            shape: Shape::Value(_),
                            ..
                        }) => {
                            return Err(RegistryError::descriptor(
                                format!("{}.{}", entry.name, field.name),
                                format!("{} is a value type, not a struct", field.type_name()),
                            ))
                        }
                        Some(_) => {}
                    },
                    FieldKind::Interface if !self.interfaces.contains(field.type_name()) => {
                        return Err(RegistryError::UnknownType(field.type_name().into()));
                    }
                    _ => {}
                }
            }
        }

        tracing::info!(
            types = self.types.len(),
            interfaces = self.interfaces.len(),
            "registry sealed"
        );
        Ok(Registry {
            types: self.types,
            interfaces: self.interfaces,
            by_prefix: self.by_prefix,
            by_disamb: self.by_disamb,
            _state: PhantomData,
        })
    }
}

impl Registry<Sealed> {
    pub(crate) fn entry(&self, name: &str) -> Result<&TypeEntry, RegistryError> {
        self.types
            .get(name)
            .ok_or_else(|| RegistryError::UnknownType(name.to_string()))
    }

    pub(crate) fn concrete_for_prefix(&self, prefix: &PrefixBytes) -> Option<&TypeEntry> {
        self.by_prefix.get(prefix).and_then(|name| self.types.get(name))
    }

    /// Encode `value` (go-amino JSON shape) as type or interface `name`.
    ///
    /// A registered concrete type is written as `prefix || body`, an
    /// unregistered struct as its body alone, and an interface as the
    /// chosen concrete's `prefix || body`. With `length_prefixed` the result
    /// is wrapped in a uvarint length frame.
    pub fn encode(
        &self,
        name: &str,
        value: &Value,
        length_prefixed: bool,
    ) -> Result<AminoBytes, RegistryError> {
        tracing::trace!(type_name = name, length_prefixed, "encode");
        let mut bare = Vec::new();
        if self.is_interface(name) {
            if value.is_null() {
                return Err(RegistryError::mismatch(name, "nil interface value"));
            }
            binary::put_interface(self, name, value, 0, &mut bare)?;
        } else {
            let entry = self.entry(name)?;
            if let Some(disfix) = entry.disfix {
                bare.extend_from_slice(disfix.prefix.as_bytes());
            }
            binary::put_body(self, entry, entry.unwrap_value(value)?, 0, &mut bare)?;
        }

        Ok(if length_prefixed {
            encode_byte_slice(&bare)
        } else {
            AminoBytes::new(bare)
        })
    }

    /// Decode `amino` as type or interface `name`, consuming all of it.
    ///
    /// Registered concrete types and interfaces decode to the wrapped
    /// `{"type", "value"}` form. The disfix header form is accepted in
    /// place of the bare prefix.
    pub fn decode(
        &self,
        name: &str,
        amino: &[u8],
        length_prefixed: bool,
    ) -> Result<Value, RegistryError> {
        tracing::trace!(type_name = name, length_prefixed, len = amino.len(), "decode");
        let bare = if length_prefixed {
            let (inner, consumed) = read_frame(amino)?;
            if consumed != amino.len() {
                return Err(RegistryError::TrailingBytes(amino.len() - consumed));
            }
            inner
        } else {
            amino
        };

        if self.is_interface(name) {
            return binary::read_interface(self, name, bare, 0)?
                .ok_or_else(|| RegistryError::mismatch(name, "nil interface value"));
        }
        let entry = self.entry(name)?;
        let body = match entry.disfix {
            Some(disfix) => binary::strip_header(entry, disfix, bare)?,
            None => bare,
        };
        binary::read_entry(self, entry, body, 0)
    }

    /// [`encode`](Self::encode) from JSON text.
    pub fn encode_json(
        &self,
        name: &str,
        json: &[u8],
        length_prefixed: bool,
    ) -> Result<AminoBytes, RegistryError> {
        let value: Value = serde_json::from_slice(json)?;
        self.encode(name, &value, length_prefixed)
    }

    /// [`decode`](Self::decode) to JSON text.
    pub fn decode_json(
        &self,
        name: &str,
        amino: &[u8],
        length_prefixed: bool,
    ) -> Result<Vec<u8>, RegistryError> {
        let value = self.decode(name, amino, length_prefixed)?;
        Ok(serde_json::to_vec(&value)?)
    }
}
