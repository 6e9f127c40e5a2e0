//! # Type Catalog — Declarative Type Descriptors
//!
//! Field layouts are data, not code. A catalog lists the interfaces and the
//! types of one application, and is loaded from YAML or JSON:
//!
//! ```yaml
//! interfaces:
//!   - name: PubKey
//! types:
//!   - name: tendermint/PubKeyEd25519
//!     registered: true
//!     implements: [PubKey]
//!     value: { kind: bytes, length: 32 }
//!   - name: StdSignature
//!     fields:
//!       - { name: pub_key, kind: interface, type: PubKey }
//!       - { name: signature, kind: bytes }
//! ```
//!
//! A type has either `fields` (a struct, possibly empty) or a single `value`
//! descriptor (a named scalar such as a key wrapping a byte array). Field
//! numbers default to the declaration index plus one.
//!
//! [`Catalog::validate`] checks each descriptor in isolation. References
//! between types are resolved when the registry is sealed.

use std::collections::HashSet;
use std::path::Path;

use amino_core::MAX_FIELD_NUMBER;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, RegistryError};

/// The value kinds a field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
    Bytes,
    /// Raw address bytes, rendered in JSON as Bech32 under the field's hrp.
    Address,
    Time,
    /// A nested struct type, named by `type`.
    Struct,
    /// An interface, named by `type`; values carry their concrete prefix.
    Interface,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Address => "address",
            Self::Time => "time",
            Self::Struct => "struct",
            Self::Interface => "interface",
        }
    }

    /// Kinds whose repeated form is packed into a single length-framed field.
    pub fn is_packable(&self) -> bool {
        !matches!(
            self,
            Self::String | Self::Bytes | Self::Address | Self::Time | Self::Struct | Self::Interface
        )
    }

    fn allows_fixed(&self) -> bool {
        matches!(self, Self::Int32 | Self::Int64 | Self::Uint32 | Self::Uint64)
    }

    fn needs_type(&self) -> bool {
        matches!(self, Self::Struct | Self::Interface)
    }
}

/// One field of a struct type, or the single value of a value type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDescriptor {
    /// JSON key. Unused for a value descriptor.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub kind: FieldKind,
    /// Explicit field number; defaults to declaration index + 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub repeated: bool,
    /// Little-endian fixed-width encoding for 32/64-bit integers.
    #[serde(default, skip_serializing_if = "is_false")]
    pub fixed: bool,
    /// Bech32 human-readable part of an `address` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hrp: Option<String>,
    /// Referenced type of a `struct` or `interface` field.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Exact byte length of a fixed-size `bytes` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl FieldDescriptor {
    /// A plain field of `kind` with every option at its default.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            number: None,
            repeated: false,
            fixed: false,
            hrp: None,
            type_name: None,
            length: None,
        }
    }

    fn validate(&self, owner: &str) -> Result<(), RegistryError> {
        let at = if self.name.is_empty() {
            owner.to_string()
        } else {
            format!("{owner}.{}", self.name)
        };
        let kind = self.kind.as_str();

        if let Some(number) = self.number {
            if number == 0 || number > MAX_FIELD_NUMBER {
                return Err(RegistryError::descriptor(
                    at,
                    format!("field number {number} outside 1..={MAX_FIELD_NUMBER}"),
                ));
            }
        }
        if self.fixed && !self.kind.allows_fixed() {
            return Err(RegistryError::descriptor(
                at,
                format!("`fixed` does not apply to {kind}"),
            ));
        }
        match (self.kind, &self.hrp) {
            (FieldKind::Address, None) => {
                return Err(RegistryError::descriptor(at, "address field needs `hrp`"));
            }
            (FieldKind::Address, Some(hrp)) if hrp.is_empty() => {
                return Err(RegistryError::descriptor(at, "empty `hrp`"));
            }
            (FieldKind::Address, Some(_)) | (_, None) => {}
            (_, Some(_)) => {
                return Err(RegistryError::descriptor(
                    at,
                    format!("`hrp` does not apply to {kind}"),
                ));
            }
        }
        match (self.kind.needs_type(), &self.type_name) {
            (true, None) => {
                return Err(RegistryError::descriptor(
                    at,
                    format!("{kind} field needs `type`"),
                ));
            }
            (false, Some(_)) => {
                return Err(RegistryError::descriptor(
                    at,
                    format!("`type` does not apply to {kind}"),
                ));
            }
            _ => {}
        }
        match (self.kind, self.length) {
            (FieldKind::Bytes, Some(0)) => {
                return Err(RegistryError::descriptor(at, "`length` must be positive"));
            }
            (FieldKind::Bytes, _) | (_, None) => {}
            (_, Some(_)) => {
                return Err(RegistryError::descriptor(
                    at,
                    format!("`length` does not apply to {kind}"),
                ));
            }
        }
        Ok(())
    }
}

/// A struct or value type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDescriptor {
    pub name: String,
    /// Registered concrete types carry prefix bytes on the wire and can
    /// fill interface slots.
    #[serde(default, skip_serializing_if = "is_false")]
    pub registered: bool,
    /// Interfaces this concrete type can fill.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Check the descriptor on its own, without resolving references.
    ///
    /// # Errors
    ///
    /// `InvalidDescriptor` naming the type or `type.field` at fault.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.name.is_empty() {
            return Err(RegistryError::descriptor("<unnamed>", "empty type name"));
        }
        if !self.implements.is_empty() && !self.registered {
            return Err(RegistryError::descriptor(
                &self.name,
                "only registered types can implement interfaces",
            ));
        }

        if let Some(value) = &self.value {
            if !self.fields.is_empty() {
                return Err(RegistryError::descriptor(
                    &self.name,
                    "a type has either `fields` or `value`, not both",
                ));
            }
            if value.repeated || value.kind.needs_type() {
                return Err(RegistryError::descriptor(
                    &self.name,
                    format!(
                        "`value` must be a single scalar, bytes, string, address or time, got {}{}",
                        if value.repeated { "repeated " } else { "" },
                        value.kind.as_str()
                    ),
                ));
            }
            return value.validate(&self.name);
        }

        let mut names = HashSet::new();
        let mut last_number = 0u32;
        for (idx, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(RegistryError::descriptor(
                    &self.name,
                    format!("field {} has no name", idx + 1),
                ));
            }
            if !names.insert(field.name.as_str()) {
                return Err(RegistryError::descriptor(
                    format!("{}.{}", self.name, field.name),
                    "duplicate field name",
                ));
            }
            field.validate(&self.name)?;
            let number = effective_number(idx, field);
            if number <= last_number {
                return Err(RegistryError::descriptor(
                    format!("{}.{}", self.name, field.name),
                    format!("field number {number} does not follow {last_number}"),
                ));
            }
            last_number = number;
        }
        Ok(())
    }
}

/// Field number of the `idx`-th declared field.
pub(crate) fn effective_number(idx: usize, field: &FieldDescriptor) -> u32 {
    field
        .number
        .unwrap_or_else(|| u32::try_from(idx + 1).unwrap_or(MAX_FIELD_NUMBER))
}

/// An interface that registered concrete types can implement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceDescriptor {
    pub name: String,
}

/// Interfaces and types of one application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    pub interfaces: Vec<InterfaceDescriptor>,
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

impl Catalog {
    /// Load a catalog, choosing the parser by extension: `.yaml` / `.yml`
    /// for YAML, `.json` for JSON.
    ///
    /// # Errors
    ///
    /// `UnsupportedFormat` for any other extension; otherwise the I/O or
    /// parse failure.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml") | Some("yml") => {
                let content = std::fs::read_to_string(path)?;
                Self::from_yaml_str(&content)
            }
            Some("json") => {
                let content = std::fs::read_to_string(path)?;
                Self::from_json_str(&content)
            }
            _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Validate every descriptor and reject names used twice.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen = HashSet::new();
        let names = self
            .interfaces
            .iter()
            .map(|i| i.name.as_str())
            .chain(self.types.iter().map(|t| t.name.as_str()));
        for name in names {
            if !seen.insert(name) {
                return Err(RegistryError::DuplicateType(name.to_string()));
            }
        }
        for iface in &self.interfaces {
            if iface.name.is_empty() {
                return Err(RegistryError::descriptor("<unnamed>", "empty interface name"));
            }
        }
        self.types.iter().try_for_each(TypeDescriptor::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
interfaces:
  - name: PubKey
types:
  - name: tendermint/PubKeyEd25519
    registered: true
    implements: [PubKey]
    value: { kind: bytes, length: 32 }
  - name: Coin
    fields:
      - { name: denom, kind: string }
      - { name: amount, kind: int64 }
  - name: Transfer
    fields:
      - { name: from, kind: address, hrp: cosmos }
      - { name: coins, kind: struct, type: Coin, repeated: true }
      - { name: height, kind: uint64, fixed: true, number: 7 }
"#;

    fn struct_type(fields: Vec<FieldDescriptor>) -> TypeDescriptor {
        TypeDescriptor {
            name: "T".into(),
            registered: false,
            implements: vec![],
            fields,
            value: None,
        }
    }

    #[test]
    fn test_parse_yaml_sample() {
        let catalog = Catalog::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(catalog.interfaces.len(), 1);
        assert_eq!(catalog.types.len(), 3);

        let key = &catalog.types[0];
        assert!(key.registered);
        assert_eq!(key.implements, vec!["PubKey".to_string()]);
        let value = key.value.as_ref().unwrap();
        assert_eq!(value.kind, FieldKind::Bytes);
        assert_eq!(value.length, Some(32));

        let transfer = &catalog.types[2];
        assert_eq!(transfer.fields[0].hrp.as_deref(), Some("cosmos"));
        assert_eq!(transfer.fields[1].type_name.as_deref(), Some("Coin"));
        assert!(transfer.fields[1].repeated);
        assert_eq!(transfer.fields[2].number, Some(7));
        catalog.validate().unwrap();
    }

    #[test]
    fn test_json_and_yaml_agree() {
        let from_yaml = Catalog::from_yaml_str(SAMPLE).unwrap();
        let json = serde_json::to_string(&from_yaml).unwrap();
        assert_eq!(Catalog::from_json_str(&json).unwrap(), from_yaml);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let bad = "types:\n  - name: T\n    fields:\n      - { name: a, kind: int128 }\n";
        assert!(matches!(
            Catalog::from_yaml_str(bad),
            Err(CatalogError::Yaml(_))
        ));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let bad = "types:\n  - name: T\n    fields:\n      - { name: a, kind: int64, fixd: true }\n";
        assert!(Catalog::from_yaml_str(bad).is_err());
    }

    #[test]
    fn test_default_field_numbers() {
        let fields = vec![
            FieldDescriptor::new("a", FieldKind::Bool),
            FieldDescriptor::new("b", FieldKind::Bool),
        ];
        assert_eq!(effective_number(0, &fields[0]), 1);
        assert_eq!(effective_number(1, &fields[1]), 2);
        struct_type(fields).validate().unwrap();
    }

    #[test]
    fn test_out_of_order_numbers_rejected() {
        let mut a = FieldDescriptor::new("a", FieldKind::Bool);
        a.number = Some(5);
        let b = FieldDescriptor::new("b", FieldKind::Bool);
        let err = struct_type(vec![a, b]).validate().unwrap_err();
        assert!(matches!(err, RegistryError::InvalidDescriptor { ref name, .. } if name == "T.b"));
    }

    #[test]
    fn test_field_option_rules() {
        let mut fixed_string = FieldDescriptor::new("s", FieldKind::String);
        fixed_string.fixed = true;
        assert!(struct_type(vec![fixed_string]).validate().is_err());

        let addr = FieldDescriptor::new("a", FieldKind::Address);
        assert!(struct_type(vec![addr]).validate().is_err());

        let nested = FieldDescriptor::new("n", FieldKind::Struct);
        assert!(struct_type(vec![nested]).validate().is_err());

        let mut sized_string = FieldDescriptor::new("s", FieldKind::String);
        sized_string.length = Some(4);
        assert!(struct_type(vec![sized_string]).validate().is_err());

        let mut zero_field = FieldDescriptor::new("z", FieldKind::Bool);
        zero_field.number = Some(0);
        assert!(struct_type(vec![zero_field]).validate().is_err());
    }

    #[test]
    fn test_duplicate_field_name_rejected() {
        let fields = vec![
            FieldDescriptor::new("a", FieldKind::Bool),
            FieldDescriptor::new("a", FieldKind::String),
        ];
        assert!(struct_type(fields).validate().is_err());
    }

    #[test]
    fn test_value_type_rules() {
        let mut t = struct_type(vec![]);
        t.value = Some(FieldDescriptor::new("", FieldKind::Bytes));
        t.validate().unwrap();

        t.fields = vec![FieldDescriptor::new("a", FieldKind::Bool)];
        assert!(t.validate().is_err());

        t.fields.clear();
        let mut nested = FieldDescriptor::new("", FieldKind::Struct);
        nested.type_name = Some("Coin".into());
        t.value = Some(nested);
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_implements_requires_registered() {
        let mut t = struct_type(vec![]);
        t.implements = vec!["Msg".into()];
        assert!(t.validate().is_err());
        t.registered = true;
        t.validate().unwrap();
    }

    #[test]
    fn test_duplicate_names_across_catalog() {
        let catalog = Catalog {
            interfaces: vec![InterfaceDescriptor { name: "T".into() }],
            types: vec![struct_type(vec![])],
        };
        assert!(matches!(
            catalog.validate(),
            Err(RegistryError::DuplicateType(name)) if name == "T"
        ));
    }

    #[test]
    fn test_from_path_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml = dir.path().join("catalog.yml");
        std::fs::write(&yaml, SAMPLE).unwrap();
        let loaded = Catalog::from_path(&yaml).unwrap();
        assert_eq!(loaded.types.len(), 3);

        let json = dir.path().join("catalog.json");
        std::fs::write(&json, serde_json::to_string(&loaded).unwrap()).unwrap();
        assert_eq!(Catalog::from_path(&json).unwrap(), loaded);

        let toml = dir.path().join("catalog.toml");
        std::fs::write(&toml, "").unwrap();
        assert!(matches!(
            Catalog::from_path(&toml),
            Err(CatalogError::UnsupportedFormat(_))
        ));

        assert!(matches!(
            Catalog::from_path(dir.path().join("missing.yaml")),
            Err(CatalogError::Io(_))
        ));
    }
}
