//! # Binary Body Walker
//!
//! Encodes and decodes struct bodies field by field in the go-amino binary
//! layout (proto3 compatible):
//!
//! | Field kind                              | typ3                       |
//! |-----------------------------------------|----------------------------|
//! | bool, int8, int16, uint8, uint16        | Varint                     |
//! | int32, int64, uint32, uint64            | Varint, or 4Byte / 8Byte if `fixed` |
//! | float32 / float64                       | 4Byte / 8Byte              |
//! | string, bytes, address, time, struct, interface | ByteLength         |
//! | any repeated field                      | ByteLength                 |
//!
//! int8 and int16 are zig-zag varints; int32 and int64 are two's-complement
//! uvarints, so negative values take ten bytes. Scalars equal to their
//! default are omitted, as are null times, structs and interfaces. Repeated
//! numeric fields are packed into one frame; other repeated fields repeat
//! the key for every element.
//!
//! Decoding walks the declared fields in order. Omitted fields receive
//! their default value; a key that is unknown, out of order, or carries the
//! wrong typ3 is a `SchemaMismatch`.
//!
//! Struct and interface values may nest at most [`MAX_DEPTH`] levels below
//! the top-level value, in both directions. Deeper input is a
//! `SchemaMismatch` rather than unbounded recursion.

use amino_core::{
    decode_bool, decode_disamb_prefix_bytes, decode_field_key, decode_float32, decode_float64,
    decode_int16, decode_int8, decode_time, decode_uvarint, put_byte_slice, put_field_key,
    put_fixed32, put_fixed64, put_time, put_uvarint, put_varint, read_fixed32, read_fixed64,
    read_frame, AminoError, Disfix, Typ3,
};
use serde_json::{Map, Value};

use crate::catalog::FieldKind;
use crate::error::RegistryError;
use crate::json::{self, Site};
use crate::registry::{Field, Registry, Sealed, Shape, TypeEntry};

/// Deepest struct or interface nesting the walker follows.
pub const MAX_DEPTH: usize = 64;

fn check_depth(type_name: &str, depth: usize) -> Result<(), RegistryError> {
    if depth > MAX_DEPTH {
        return Err(RegistryError::mismatch(
            type_name,
            format!("nesting exceeds {MAX_DEPTH} levels"),
        ));
    }
    Ok(())
}

/// A scalar ready to be written.
#[derive(Debug, Clone, Copy)]
enum Wire {
    Varint(u64),
    ZigZag(i64),
    Fixed32(u32),
    Fixed64(u64),
}

impl Wire {
    fn is_zero(&self) -> bool {
        match *self {
            Self::Varint(u) | Self::Fixed64(u) => u == 0,
            Self::ZigZag(i) => i == 0,
            Self::Fixed32(u) => u == 0,
        }
    }

    fn put(&self, buf: &mut Vec<u8>) {
        match *self {
            Self::Varint(u) => put_uvarint(buf, u),
            Self::ZigZag(i) => put_varint(buf, i),
            Self::Fixed32(u) => put_fixed32(buf, u),
            Self::Fixed64(u) => put_fixed64(buf, u),
        }
    }
}

/// Wire type a field's key carries.
pub(crate) fn field_typ3(field: &Field) -> Typ3 {
    if field.repeated {
        return Typ3::ByteLength;
    }
    match field.kind {
        FieldKind::Bool
        | FieldKind::Int8
        | FieldKind::Int16
        | FieldKind::Uint8
        | FieldKind::Uint16 => Typ3::Varint,
        FieldKind::Int32 | FieldKind::Uint32 if field.fixed => Typ3::Fixed32,
        FieldKind::Int64 | FieldKind::Uint64 if field.fixed => Typ3::Fixed64,
        FieldKind::Int32 | FieldKind::Uint32 | FieldKind::Int64 | FieldKind::Uint64 => {
            Typ3::Varint
        }
        FieldKind::Float32 => Typ3::Fixed32,
        FieldKind::Float64 => Typ3::Fixed64,
        FieldKind::String
        | FieldKind::Bytes
        | FieldKind::Address
        | FieldKind::Time
        | FieldKind::Struct
        | FieldKind::Interface => Typ3::ByteLength,
    }
}

// ─── Encoding ────────────────────────────────────────────────────────

/// Append the body of `entry` (no prefix) for the unwrapped `value`.
pub(crate) fn put_body(
    reg: &Registry<Sealed>,
    entry: &TypeEntry,
    value: &Value,
    depth: usize,
    buf: &mut Vec<u8>,
) -> Result<(), RegistryError> {
    check_depth(&entry.name, depth)?;
    match &entry.shape {
        Shape::Value(field) => {
            put_bare(reg, Site::new(&entry.name, ""), field, value, depth, buf)
        }
        Shape::Struct(fields) => {
            let site = Site::new(&entry.name, "");
            let obj = value
                .as_object()
                .ok_or_else(|| site.mismatch("expected a JSON object"))?;
            if let Some(unknown) = obj.keys().find(|k| !fields.iter().any(|f| f.name == **k)) {
                return Err(site.mismatch(format!("unknown field `{unknown}`")));
            }
            for field in fields {
                let v = obj.get(&field.name).unwrap_or(&Value::Null);
                put_field(reg, Site::new(&entry.name, &field.name), field, v, depth, buf)?;
            }
            Ok(())
        }
    }
}

/// Append `prefix || body` of the concrete value held in an interface slot.
pub(crate) fn put_interface(
    reg: &Registry<Sealed>,
    interface: &str,
    value: &Value,
    depth: usize,
    buf: &mut Vec<u8>,
) -> Result<(), RegistryError> {
    let (type_name, inner) = json::split_wrapped(value).ok_or_else(|| {
        RegistryError::mismatch(interface, "interface value must be {\"type\", \"value\"}")
    })?;
    let entry = reg.entry(type_name)?;
    let disfix = entry.disfix.ok_or_else(|| {
        RegistryError::mismatch(interface, format!("{type_name:?} is not a registered concrete type"))
    })?;
    if !entry.implements(interface) {
        return Err(RegistryError::mismatch(
            interface,
            format!("{type_name:?} does not implement it"),
        ));
    }
    buf.extend_from_slice(disfix.prefix.as_bytes());
    put_body(reg, entry, inner, depth, buf)
}

fn put_field(
    reg: &Registry<Sealed>,
    site: Site<'_>,
    field: &Field,
    v: &Value,
    depth: usize,
    buf: &mut Vec<u8>,
) -> Result<(), RegistryError> {
    if field.repeated {
        let items = match v {
            Value::Null => return Ok(()),
            Value::Array(items) => items,
            other => return Err(site.mismatch(format!("expected an array, found {other}"))),
        };
        if items.is_empty() {
            return Ok(());
        }
        if field.kind.is_packable() {
            let mut packed = Vec::with_capacity(items.len() * 2);
            for item in items {
                scalar_wire(site, field, item)?.put(&mut packed);
            }
            put_field_key(buf, field.number, Typ3::ByteLength);
            put_byte_slice(buf, &packed);
        } else {
            for item in items {
                if item.is_null() {
                    return Err(site.mismatch("null element in repeated field"));
                }
                put_field_key(buf, field.number, Typ3::ByteLength);
                put_byte_slice(buf, &framed_payload(reg, site, field, item, depth)?);
            }
        }
        return Ok(());
    }

    if field.kind.is_packable() {
        if v.is_null() {
            return Ok(());
        }
        let wire = scalar_wire(site, field, v)?;
        if !wire.is_zero() {
            put_field_key(buf, field.number, field_typ3(field));
            wire.put(buf);
        }
        return Ok(());
    }

    let payload = match (field.kind, field.length) {
        // Fixed-length byte arrays are always written.
        (FieldKind::Bytes, Some(length)) if v.is_null() => vec![0u8; length],
        _ if v.is_null() => return Ok(()),
        (FieldKind::String | FieldKind::Bytes | FieldKind::Address, None) => {
            let payload = framed_payload(reg, site, field, v, depth)?;
            if payload.is_empty() {
                return Ok(());
            }
            payload
        }
        _ => framed_payload(reg, site, field, v, depth)?,
    };
    put_field_key(buf, field.number, Typ3::ByteLength);
    put_byte_slice(buf, &payload);
    Ok(())
}

/// Convert a JSON scalar to its wire form.
fn scalar_wire(site: Site<'_>, field: &Field, v: &Value) -> Result<Wire, RegistryError> {
    let wire = match field.kind {
        FieldKind::Bool => Wire::Varint(u64::from(json::to_bool(site, v)?)),
        FieldKind::Int8 => {
            Wire::ZigZag(i64::from(json::narrow::<i8, i64>("int8", json::to_i64(site, v)?)?))
        }
        FieldKind::Int16 => {
            Wire::ZigZag(i64::from(json::narrow::<i16, i64>("int16", json::to_i64(site, v)?)?))
        }
        FieldKind::Int32 => {
            let i = json::narrow::<i32, i64>("int32", json::to_i64(site, v)?)?;
            if field.fixed {
                Wire::Fixed32(i as u32)
            } else {
                Wire::Varint(i64::from(i) as u64)
            }
        }
        FieldKind::Int64 => {
            let i = json::to_i64(site, v)?;
            if field.fixed {
                Wire::Fixed64(i as u64)
            } else {
                Wire::Varint(i as u64)
            }
        }
        FieldKind::Uint8 => {
            Wire::Varint(u64::from(json::narrow::<u8, u64>("uint8", json::to_u64(site, v)?)?))
        }
        FieldKind::Uint16 => {
            Wire::Varint(u64::from(json::narrow::<u16, u64>("uint16", json::to_u64(site, v)?)?))
        }
        FieldKind::Uint32 => {
            let u = json::narrow::<u32, u64>("uint32", json::to_u64(site, v)?)?;
            if field.fixed {
                Wire::Fixed32(u)
            } else {
                Wire::Varint(u64::from(u))
            }
        }
        FieldKind::Uint64 => {
            let u = json::to_u64(site, v)?;
            if field.fixed {
                Wire::Fixed64(u)
            } else {
                Wire::Varint(u)
            }
        }
        FieldKind::Float32 => {
            let f = json::to_f64(site, v)?;
            let narrowed = f as f32;
            if f.is_finite() && !narrowed.is_finite() {
                return Err(RegistryError::Amino(AminoError::OutOfRange {
                    kind: "float32",
                    value: f.to_string(),
                }));
            }
            Wire::Fixed32(narrowed.to_bits())
        }
        FieldKind::Float64 => Wire::Fixed64(json::to_f64(site, v)?.to_bits()),
        other => {
            return Err(site.mismatch(format!("{} is not a scalar kind", other.as_str())));
        }
    };
    Ok(wire)
}

/// The bytes that go inside the length frame of a ByteLength field.
fn framed_payload(
    reg: &Registry<Sealed>,
    site: Site<'_>,
    field: &Field,
    v: &Value,
    depth: usize,
) -> Result<Vec<u8>, RegistryError> {
    match field.kind {
        FieldKind::String => Ok(json::to_str(site, v)?.as_bytes().to_vec()),
        FieldKind::Bytes => {
            let bz = json::to_bytes(site, v)?;
            check_length(site, field, bz.len())?;
            Ok(bz)
        }
        FieldKind::Address => json::to_address(site, v, field.hrp()),
        FieldKind::Time => {
            let mut out = Vec::new();
            put_time(&mut out, &json::to_time(site, v)?)?;
            Ok(out)
        }
        FieldKind::Struct => {
            let entry = reg.entry(field.type_name())?;
            let mut out = Vec::new();
            put_body(reg, entry, entry.unwrap_value(v)?, depth + 1, &mut out)?;
            Ok(out)
        }
        FieldKind::Interface => {
            let mut out = Vec::new();
            put_interface(reg, field.type_name(), v, depth + 1, &mut out)?;
            Ok(out)
        }
        other => Err(site.mismatch(format!("{} is not a length-framed kind", other.as_str()))),
    }
}

/// Append the keyless encoding of a value type's single value.
fn put_bare(
    reg: &Registry<Sealed>,
    site: Site<'_>,
    field: &Field,
    v: &Value,
    depth: usize,
    buf: &mut Vec<u8>,
) -> Result<(), RegistryError> {
    if field.kind.is_packable() {
        scalar_wire(site, field, v)?.put(buf);
        return Ok(());
    }
    if field.kind == FieldKind::Time {
        put_time(buf, &json::to_time(site, v)?)?;
        return Ok(());
    }
    put_byte_slice(buf, &framed_payload(reg, site, field, v, depth)?);
    Ok(())
}

fn check_length(site: Site<'_>, field: &Field, actual: usize) -> Result<(), RegistryError> {
    match field.length {
        Some(expected) if expected != actual => Err(site.mismatch(format!(
            "expected {expected} bytes, found {actual}"
        ))),
        _ => Ok(()),
    }
}

// ─── Decoding ────────────────────────────────────────────────────────

/// Consume the prefix (or disfix) header of a registered concrete type,
/// returning the body that follows.
pub(crate) fn strip_header<'a>(
    entry: &TypeEntry,
    disfix: Disfix,
    bz: &'a [u8],
) -> Result<&'a [u8], RegistryError> {
    let (header, n) = decode_disamb_prefix_bytes(bz)?;
    if header.prefix != Some(disfix.prefix) {
        return Err(RegistryError::mismatch(
            &entry.name,
            match header.prefix {
                Some(found) => format!("prefix {found} does not match {}", disfix.prefix),
                None => "missing prefix bytes".to_string(),
            },
        ));
    }
    if let Some(disamb) = header.disamb {
        if disamb != disfix.disamb {
            return Err(RegistryError::mismatch(
                &entry.name,
                format!("disambiguation bytes {disamb} do not match {}", disfix.disamb),
            ));
        }
    }
    Ok(&bz[n..])
}

/// Decode the body of `entry`, wrapping registered concrete values.
pub(crate) fn read_entry(
    reg: &Registry<Sealed>,
    entry: &TypeEntry,
    body: &[u8],
    depth: usize,
) -> Result<Value, RegistryError> {
    let value = read_body(reg, entry, body, depth)?;
    Ok(match entry.disfix {
        Some(_) => json::wrap(&entry.name, value),
        None => value,
    })
}

fn read_body(
    reg: &Registry<Sealed>,
    entry: &TypeEntry,
    bz: &[u8],
    depth: usize,
) -> Result<Value, RegistryError> {
    check_depth(&entry.name, depth)?;
    match &entry.shape {
        Shape::Value(field) => {
            let (value, n) = read_bare(reg, Site::new(&entry.name, ""), field, bz, depth)?;
            if n != bz.len() {
                return Err(RegistryError::TrailingBytes(bz.len() - n));
            }
            Ok(value)
        }
        Shape::Struct(fields) => read_struct(reg, &entry.name, fields, bz, depth),
    }
}

/// Decode an interface payload, `None` for the nil (empty) payload.
pub(crate) fn read_interface(
    reg: &Registry<Sealed>,
    interface: &str,
    bz: &[u8],
    depth: usize,
) -> Result<Option<Value>, RegistryError> {
    let (header, n) = decode_disamb_prefix_bytes(bz)?;
    let Some(prefix) = header.prefix else {
        return Ok(None);
    };
    let entry = reg.concrete_for_prefix(&prefix).ok_or_else(|| {
        RegistryError::mismatch(interface, format!("no registered type has prefix {prefix}"))
    })?;
    if let (Some(found), Some(disfix)) = (header.disamb, entry.disfix) {
        if found != disfix.disamb {
            return Err(RegistryError::mismatch(
                interface,
                format!("disambiguation bytes {found} do not match {}", entry.name),
            ));
        }
    }
    if !entry.implements(interface) {
        return Err(RegistryError::mismatch(
            interface,
            format!("{:?} does not implement it", entry.name),
        ));
    }
    read_entry(reg, entry, &bz[n..], depth).map(Some)
}

fn read_struct(
    reg: &Registry<Sealed>,
    type_name: &str,
    fields: &[Field],
    bz: &[u8],
    depth: usize,
) -> Result<Value, RegistryError> {
    let mut out = Map::with_capacity(fields.len());
    let mut pos = 0;
    let mut next = 0;

    while pos < bz.len() {
        let (number, typ3, n) = decode_field_key(&bz[pos..])?;
        let idx = fields[next..]
            .iter()
            .position(|f| f.number == number)
            .map(|i| i + next)
            .ok_or_else(|| {
                RegistryError::mismatch(type_name, format!("unexpected field number {number}"))
            })?;
        for skipped in &fields[next..idx] {
            out.insert(skipped.name.clone(), default_value(skipped));
        }

        let field = &fields[idx];
        let site = Site::new(type_name, &field.name);
        let expected = field_typ3(field);
        if typ3 != expected {
            return Err(site.mismatch(format!("typ3 {typ3}, expected {expected}")));
        }
        pos += n;

        let value = if field.repeated && field.kind.is_packable() {
            let (frame, m) = read_frame(&bz[pos..])?;
            pos += m;
            read_packed(site, field, frame)?
        } else if field.repeated {
            let mut items = Vec::new();
            loop {
                let (frame, m) = read_frame(&bz[pos..])?;
                pos += m;
                items.push(read_framed(reg, site, field, frame, depth)?);
                if pos >= bz.len() {
                    break;
                }
                let (again, again_typ3, k) = decode_field_key(&bz[pos..])?;
                if again != number || again_typ3 != Typ3::ByteLength {
                    break;
                }
                pos += k;
            }
            Value::Array(items)
        } else if field.kind.is_packable() {
            let (value, m) = read_scalar(site, field, &bz[pos..])?;
            pos += m;
            value
        } else {
            let (frame, m) = read_frame(&bz[pos..])?;
            pos += m;
            read_framed(reg, site, field, frame, depth)?
        };

        out.insert(field.name.clone(), value);
        next = idx + 1;
    }

    for rest in &fields[next..] {
        out.insert(rest.name.clone(), default_value(rest));
    }
    Ok(Value::Object(out))
}

fn read_packed(site: Site<'_>, field: &Field, frame: &[u8]) -> Result<Value, RegistryError> {
    let mut items = Vec::new();
    let mut pos = 0;
    while pos < frame.len() {
        let (value, n) = read_scalar(site, field, &frame[pos..])?;
        items.push(value);
        pos += n;
    }
    Ok(Value::Array(items))
}

/// Read one scalar (no key) from the front of `bz`.
fn read_scalar(site: Site<'_>, field: &Field, bz: &[u8]) -> Result<(Value, usize), RegistryError> {
    let decoded = match field.kind {
        FieldKind::Bool => {
            let (b, n) = decode_bool(bz)?;
            (Value::Bool(b), n)
        }
        FieldKind::Int8 => {
            let (i, n) = decode_int8(bz)?;
            (Value::from(i), n)
        }
        FieldKind::Int16 => {
            let (i, n) = decode_int16(bz)?;
            (Value::from(i), n)
        }
        FieldKind::Int32 if field.fixed => {
            let (u, n) = read_fixed32(bz)?;
            (Value::from(u as i32), n)
        }
        FieldKind::Int32 => {
            let (u, n) = decode_uvarint(bz)?;
            (Value::from(json::narrow::<i32, i64>("int32", u as i64)?), n)
        }
        FieldKind::Int64 if field.fixed => {
            let (u, n) = read_fixed64(bz)?;
            (json::int64_value(u as i64), n)
        }
        FieldKind::Int64 => {
            let (u, n) = decode_uvarint(bz)?;
            (json::int64_value(u as i64), n)
        }
        FieldKind::Uint8 => {
            let (u, n) = decode_uvarint(bz)?;
            (Value::from(json::narrow::<u8, u64>("uint8", u)?), n)
        }
        FieldKind::Uint16 => {
            let (u, n) = decode_uvarint(bz)?;
            (Value::from(json::narrow::<u16, u64>("uint16", u)?), n)
        }
        FieldKind::Uint32 if field.fixed => {
            let (u, n) = read_fixed32(bz)?;
            (Value::from(u), n)
        }
        FieldKind::Uint32 => {
            let (u, n) = decode_uvarint(bz)?;
            (Value::from(json::narrow::<u32, u64>("uint32", u)?), n)
        }
        FieldKind::Uint64 if field.fixed => {
            let (u, n) = read_fixed64(bz)?;
            (json::uint64_value(u), n)
        }
        FieldKind::Uint64 => {
            let (u, n) = decode_uvarint(bz)?;
            (json::uint64_value(u), n)
        }
        FieldKind::Float32 => {
            let (f, n) = decode_float32(bz)?;
            (json::float_value(site, f64::from(f))?, n)
        }
        FieldKind::Float64 => {
            let (f, n) = decode_float64(bz)?;
            (json::float_value(site, f)?, n)
        }
        other => {
            return Err(site.mismatch(format!("{} is not a scalar kind", other.as_str())));
        }
    };
    Ok(decoded)
}

/// Decode the content of a ByteLength field's frame.
fn read_framed(
    reg: &Registry<Sealed>,
    site: Site<'_>,
    field: &Field,
    frame: &[u8],
    depth: usize,
) -> Result<Value, RegistryError> {
    match field.kind {
        FieldKind::String => {
            let s = std::str::from_utf8(frame)
                .map_err(|e| AminoError::InvalidEncoding(e.to_string()))?;
            Ok(Value::String(s.to_string()))
        }
        FieldKind::Bytes => {
            check_length(site, field, frame.len())?;
            Ok(json::bytes_value(frame))
        }
        FieldKind::Address => json::address_value(frame, field.hrp()),
        FieldKind::Time => {
            let (t, n) = decode_time(frame)?;
            if n != frame.len() {
                return Err(RegistryError::TrailingBytes(frame.len() - n));
            }
            Ok(json::time_value(&t))
        }
        FieldKind::Struct => {
            let entry = reg.entry(field.type_name())?;
            read_entry(reg, entry, frame, depth + 1)
        }
        FieldKind::Interface => {
            Ok(read_interface(reg, field.type_name(), frame, depth + 1)?.unwrap_or(Value::Null))
        }
        other => Err(site.mismatch(format!("{} is not a length-framed kind", other.as_str()))),
    }
}

/// Read a value type's keyless value from the front of `bz`.
fn read_bare(
    reg: &Registry<Sealed>,
    site: Site<'_>,
    field: &Field,
    bz: &[u8],
    depth: usize,
) -> Result<(Value, usize), RegistryError> {
    if field.kind.is_packable() {
        return read_scalar(site, field, bz);
    }
    if field.kind == FieldKind::Time {
        let (t, n) = decode_time(bz)?;
        return Ok((json::time_value(&t), n));
    }
    let (frame, n) = read_frame(bz)?;
    Ok((read_framed(reg, site, field, frame, depth)?, n))
}

/// Value of a field absent from the wire.
fn default_value(field: &Field) -> Value {
    if field.repeated {
        return Value::Array(Vec::new());
    }
    match field.kind {
        FieldKind::Bool => Value::Bool(false),
        FieldKind::Int8
        | FieldKind::Int16
        | FieldKind::Int32
        | FieldKind::Uint8
        | FieldKind::Uint16
        | FieldKind::Uint32 => Value::from(0),
        FieldKind::Int64 | FieldKind::Uint64 => Value::String("0".into()),
        FieldKind::Float32 | FieldKind::Float64 => Value::from(0.0),
        FieldKind::String | FieldKind::Address => Value::String(String::new()),
        FieldKind::Bytes => json::bytes_value(&vec![0u8; field.length.unwrap_or(0)]),
        FieldKind::Time | FieldKind::Struct | FieldKind::Interface => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, FieldDescriptor, InterfaceDescriptor, TypeDescriptor};
    use serde_json::json;

    fn fd(name: &str, kind: FieldKind) -> FieldDescriptor {
        FieldDescriptor::new(name, kind)
    }

    fn one_type(fields: Vec<FieldDescriptor>) -> Registry<Sealed> {
        let catalog = Catalog {
            interfaces: vec![],
            types: vec![TypeDescriptor {
                name: "T".into(),
                registered: false,
                implements: vec![],
                fields,
                value: None,
            }],
        };
        Registry::from_catalog(&catalog).unwrap()
    }

    fn hex_of(reg: &Registry<Sealed>, value: Value) -> String {
        reg.encode("T", &value, false).unwrap().to_hex()
    }

    #[test]
    fn test_defaults_omitted_and_restored() {
        let reg = one_type(vec![
            fd("b", FieldKind::Bool),
            fd("i", FieldKind::Int64),
            fd("s", FieldKind::String),
            fd("t", FieldKind::Time),
            fd("f", FieldKind::Float64),
        ]);
        let zero = json!({"b": false, "i": "0", "s": "", "t": null, "f": 0.0});
        assert_eq!(hex_of(&reg, zero.clone()), "");
        assert_eq!(hex_of(&reg, json!({})), "");
        assert_eq!(reg.decode("T", &[], false).unwrap(), zero);
    }

    #[test]
    fn test_signed_fields_two_complement_vs_zigzag() {
        let reg = one_type(vec![fd("a", FieldKind::Int64), fd("b", FieldKind::Int16)]);
        // int64 -1: ten-byte two's-complement uvarint; int16 -1: zig-zag 0x01.
        assert_eq!(
            hex_of(&reg, json!({"a": "-1", "b": -1})),
            "08FFFFFFFFFFFFFFFFFF011001"
        );
        let decoded = reg
            .decode("T", &hex::decode("08FFFFFFFFFFFFFFFFFF011001").unwrap(), false)
            .unwrap();
        assert_eq!(decoded, json!({"a": "-1", "b": -1}));
    }

    #[test]
    fn test_fixed_integers() {
        let mut a = fd("a", FieldKind::Uint32);
        a.fixed = true;
        let mut b = fd("b", FieldKind::Int64);
        b.fixed = true;
        let reg = one_type(vec![a, b]);
        assert_eq!(
            hex_of(&reg, json!({"a": 1, "b": "-2"})),
            "0D0100000011FEFFFFFFFFFFFFFF"
        );
    }

    #[test]
    fn test_float_fields() {
        let reg = one_type(vec![fd("x", FieldKind::Float32), fd("y", FieldKind::Float64)]);
        let value = json!({"x": 0.5, "y": -2.0});
        let bz = reg.encode("T", &value, false).unwrap();
        assert_eq!(bz.to_hex(), "0D0000003F1100000000000000C0");
        assert_eq!(reg.decode("T", bz.as_bytes(), false).unwrap(), value);
    }

    #[test]
    fn test_packed_repeated_numbers() {
        let mut f = fd("n", FieldKind::Uint64);
        f.repeated = true;
        let reg = one_type(vec![f]);
        let value = json!({"n": ["1", "300", "0"]});
        let bz = reg.encode("T", &value, false).unwrap();
        assert_eq!(bz.to_hex(), "0A0401AC0200");
        assert_eq!(reg.decode("T", bz.as_bytes(), false).unwrap(), value);
    }

    #[test]
    fn test_repeated_strings_repeat_key_and_keep_empty() {
        let mut f = fd("s", FieldKind::String);
        f.repeated = true;
        let reg = one_type(vec![f, fd("z", FieldKind::Bool)]);
        let value = json!({"s": ["a", "", "b"], "z": true});
        let bz = reg.encode("T", &value, false).unwrap();
        assert_eq!(bz.to_hex(), "0A01610A000A01621001");
        assert_eq!(reg.decode("T", bz.as_bytes(), false).unwrap(), value);
    }

    #[test]
    fn test_fixed_length_bytes_always_written() {
        let mut f = fd("k", FieldKind::Bytes);
        f.length = Some(2);
        let reg = one_type(vec![f]);
        assert_eq!(hex_of(&reg, json!({"k": "AAA="})), "0A020000");
        assert_eq!(hex_of(&reg, json!({})), "0A020000");
        assert_eq!(reg.decode("T", &[], false).unwrap(), json!({"k": "AAA="}));

        let err = reg.encode("T", &json!({"k": "AA=="}), false).unwrap_err();
        assert!(matches!(err, RegistryError::SchemaMismatch { .. }));
        let err = reg.decode("T", &[0x0a, 0x01, 0x00], false).unwrap_err();
        assert!(matches!(err, RegistryError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_empty_struct_field_is_written() {
        let catalog = Catalog {
            interfaces: vec![],
            types: vec![
                TypeDescriptor {
                    name: "Inner".into(),
                    registered: false,
                    implements: vec![],
                    fields: vec![fd("v", FieldKind::Uint8)],
                    value: None,
                },
                TypeDescriptor {
                    name: "T".into(),
                    registered: false,
                    implements: vec![],
                    fields: vec![{
                        let mut f = fd("inner", FieldKind::Struct);
                        f.type_name = Some("Inner".into());
                        f
                    }],
                    value: None,
                },
            ],
        };
        let reg = Registry::from_catalog(&catalog).unwrap();
        assert_eq!(hex_of(&reg, json!({"inner": {}})), "0A00");
        assert_eq!(hex_of(&reg, json!({"inner": null})), "");
        assert_eq!(
            reg.decode("T", &[0x0a, 0x00], false).unwrap(),
            json!({"inner": {"v": 0}})
        );
        assert_eq!(reg.decode("T", &[], false).unwrap(), json!({"inner": null}));
    }

    #[test]
    fn test_unknown_json_key_rejected() {
        let reg = one_type(vec![fd("a", FieldKind::Bool)]);
        let err = reg.encode("T", &json!({"a": true, "b": 1}), false).unwrap_err();
        assert!(err.to_string().contains("unknown field `b`"));
    }

    #[test]
    fn test_out_of_order_and_unknown_fields_rejected() {
        let reg = one_type(vec![fd("a", FieldKind::Bool), fd("b", FieldKind::Bool)]);
        // b then a.
        assert!(matches!(
            reg.decode("T", &[0x10, 0x01, 0x08, 0x01], false),
            Err(RegistryError::SchemaMismatch { .. })
        ));
        // a twice.
        assert!(matches!(
            reg.decode("T", &[0x08, 0x01, 0x08, 0x01], false),
            Err(RegistryError::SchemaMismatch { .. })
        ));
        // field 3 is not declared.
        assert!(matches!(
            reg.decode("T", &[0x18, 0x01], false),
            Err(RegistryError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn test_wrong_typ3_rejected() {
        let reg = one_type(vec![fd("a", FieldKind::Bool)]);
        let err = reg.decode("T", &[0x0a, 0x01, 0x01], false).unwrap_err();
        assert!(err.to_string().contains("typ3 ByteLength, expected Varint"));
    }

    #[test]
    fn test_narrow_field_out_of_range() {
        let reg = one_type(vec![fd("a", FieldKind::Uint8)]);
        assert!(matches!(
            reg.encode("T", &json!({"a": 256}), false),
            Err(RegistryError::Amino(AminoError::OutOfRange { kind: "uint8", .. }))
        ));
        assert!(matches!(
            reg.decode("T", &[0x08, 0x80, 0x02], false),
            Err(RegistryError::Amino(AminoError::OutOfRange { kind: "uint8", .. }))
        ));
    }

    #[test]
    fn test_truncated_body_fails() {
        let reg = one_type(vec![fd("s", FieldKind::String)]);
        let bz = reg.encode("T", &json!({"s": "hello"}), false).unwrap();
        for cut in 1..bz.len() {
            assert!(reg.decode("T", &bz.as_bytes()[..cut], false).is_err(), "cut {cut}");
        }
    }

    #[test]
    fn test_time_field() {
        let reg = one_type(vec![fd("t", FieldKind::Time)]);
        let value = json!({"t": "2019-01-01T00:00:00.5Z"});
        let bz = reg.encode("T", &value, false).unwrap();
        // key, frame, then seconds (0x08) and nanos (0x10).
        assert_eq!(&bz.as_bytes()[..3], &[0x0a, 0x0c, 0x08]);
        assert_eq!(reg.decode("T", bz.as_bytes(), false).unwrap(), value);

        // The epoch is a present but empty time.
        let epoch = reg.encode("T", &json!({"t": "1970-01-01T00:00:00Z"}), false).unwrap();
        assert_eq!(epoch, [0x0a, 0x00]);
    }

    #[test]
    fn test_interface_field_rules() {
        let catalog = Catalog {
            interfaces: vec![
                InterfaceDescriptor { name: "A".into() },
                InterfaceDescriptor { name: "B".into() },
            ],
            types: vec![
                TypeDescriptor {
                    name: "test/OnlyB".into(),
                    registered: true,
                    implements: vec!["B".into()],
                    fields: vec![fd("x", FieldKind::Uint16)],
                    value: None,
                },
                TypeDescriptor {
                    name: "T".into(),
                    registered: false,
                    implements: vec![],
                    fields: vec![{
                        let mut f = fd("a", FieldKind::Interface);
                        f.type_name = Some("A".into());
                        f
                    }],
                    value: None,
                },
            ],
        };
        let reg = Registry::from_catalog(&catalog).unwrap();
        let err = reg
            .encode("T", &json!({"a": {"type": "test/OnlyB", "value": {"x": 1}}}), false)
            .unwrap_err();
        assert!(err.to_string().contains("does not implement"));

        // Bare (unwrapped) interface values are rejected.
        assert!(reg.encode("T", &json!({"a": {"x": 1}}), false).is_err());

        // A payload naming a type outside the interface is rejected too.
        let prefix = reg.disfix("test/OnlyB").unwrap().prefix;
        let mut bz = vec![0x0a, 0x06];
        bz.extend_from_slice(prefix.as_bytes());
        bz.extend_from_slice(&[0x08, 0x01]);
        assert!(reg.decode("T", &bz, false).is_err());

        // An empty payload is the nil interface.
        assert_eq!(reg.decode("T", &[0x0a, 0x00], false).unwrap(), json!({"a": null}));
    }

    #[test]
    fn test_value_type_bare_encoding() {
        let mut reg = Registry::<crate::registry::Building>::new();
        reg.register_type(TypeDescriptor {
            name: "test/Height".into(),
            registered: true,
            implements: vec![],
            fields: vec![],
            value: Some(fd("", FieldKind::Int64)),
        })
        .unwrap();
        let reg = reg.seal().unwrap();
        let value = json!({"type": "test/Height", "value": "300"});
        let bz = reg.encode("test/Height", &value, false).unwrap();
        assert_eq!(&bz.as_bytes()[4..], &[0xac, 0x02]);
        assert_eq!(reg.decode("test/Height", bz.as_bytes(), false).unwrap(), value);

        let mut extra = bz.into_vec();
        extra.push(0x00);
        assert!(matches!(
            reg.decode("test/Height", &extra, false),
            Err(RegistryError::TrailingBytes(1))
        ));
    }

    #[test]
    fn test_invalid_utf8_string_rejected() {
        let reg = one_type(vec![fd("s", FieldKind::String)]);
        assert!(matches!(
            reg.decode("T", &[0x0a, 0x01, 0xff], false),
            Err(RegistryError::Amino(AminoError::InvalidEncoding(_)))
        ));
    }

    #[test]
    fn test_plain_struct_with_type_and_value_fields() {
        let catalog = Catalog {
            interfaces: vec![],
            types: vec![
                TypeDescriptor {
                    name: "Attr".into(),
                    registered: false,
                    implements: vec![],
                    fields: vec![fd("type", FieldKind::String), fd("value", FieldKind::String)],
                    value: None,
                },
                TypeDescriptor {
                    name: "T".into(),
                    registered: false,
                    implements: vec![],
                    fields: vec![{
                        let mut f = fd("attrs", FieldKind::Struct);
                        f.type_name = Some("Attr".into());
                        f.repeated = true;
                        f
                    }],
                    value: None,
                },
            ],
        };
        let reg = Registry::from_catalog(&catalog).unwrap();

        let attr = json!({"type": "transfer", "value": "x"});
        let bz = reg.encode("Attr", &attr, false).unwrap();
        assert_eq!(bz.to_hex(), "0A087472616E73666572120178");
        assert_eq!(reg.decode("Attr", bz.as_bytes(), false).unwrap(), attr);

        let nested = json!({"attrs": [attr]});
        let bz = reg.encode("T", &nested, false).unwrap();
        assert_eq!(bz.to_hex(), "0A0D0A087472616E73666572120178");
        assert_eq!(reg.decode("T", bz.as_bytes(), false).unwrap(), nested);
    }

    fn self_nesting() -> Registry<Sealed> {
        let child = |name: &str, kind: FieldKind, type_name: &str| {
            let mut f = fd(name, kind);
            f.type_name = Some(type_name.into());
            f
        };
        let catalog = Catalog {
            interfaces: vec![InterfaceDescriptor { name: "Key".into() }],
            types: vec![
                TypeDescriptor {
                    name: "Node".into(),
                    registered: false,
                    implements: vec![],
                    fields: vec![child("child", FieldKind::Struct, "Node")],
                    value: None,
                },
                TypeDescriptor {
                    name: "test/Multi".into(),
                    registered: true,
                    implements: vec!["Key".into()],
                    fields: vec![child("inner", FieldKind::Interface, "Key")],
                    value: None,
                },
            ],
        };
        Registry::from_catalog(&catalog).unwrap()
    }

    fn nested_nodes(levels: usize) -> Value {
        let mut v = json!({"child": null});
        for _ in 0..levels {
            v = json!({"child": v});
        }
        v
    }

    fn is_depth_error(err: &RegistryError) -> bool {
        matches!(
            err,
            RegistryError::SchemaMismatch { reason, .. } if reason.contains("nesting exceeds")
        )
    }

    #[test]
    fn test_struct_nesting_depth_limited() {
        let reg = self_nesting();

        let deepest = nested_nodes(MAX_DEPTH);
        let bz = reg.encode("Node", &deepest, false).unwrap();
        assert_eq!(reg.decode("Node", bz.as_bytes(), false).unwrap(), deepest);

        let err = reg.encode("Node", &nested_nodes(MAX_DEPTH + 1), false).unwrap_err();
        assert!(is_depth_error(&err), "{err}");

        // Built back to front so the frame lengths are known.
        let mut rev = Vec::new();
        for _ in 0..100_000 {
            let mut head = vec![0x0a];
            put_uvarint(&mut head, rev.len() as u64);
            rev.extend(head.iter().rev());
        }
        rev.reverse();
        let err = reg.decode("Node", &rev, false).unwrap_err();
        assert!(is_depth_error(&err), "{err}");
    }

    #[test]
    fn test_interface_nesting_depth_limited() {
        let reg = self_nesting();
        let prefix = reg.disfix("test/Multi").unwrap().prefix;

        let mut value = json!({"type": "test/Multi", "value": {"inner": null}});
        for _ in 0..=MAX_DEPTH {
            value = json!({"type": "test/Multi", "value": {"inner": value}});
        }
        let err = reg.encode("Key", &value, false).unwrap_err();
        assert!(is_depth_error(&err), "{err}");

        let mut rev = Vec::new();
        for _ in 0..10_000 {
            rev.extend(prefix.as_bytes().iter().rev());
            let mut head = vec![0x0a];
            put_uvarint(&mut head, rev.len() as u64);
            rev.extend(head.iter().rev());
        }
        rev.extend(prefix.as_bytes().iter().rev());
        rev.reverse();
        let err = reg.decode("Key", &rev, false).unwrap_err();
        assert!(is_depth_error(&err), "{err}");
    }
}
