//! # JSON Value Mapping
//!
//! Conversions between `serde_json::Value` and wire-level values, following
//! go-amino's JSON conventions:
//!
//! - 64-bit integers are decimal strings (numbers are accepted on input);
//!   narrower integers and floats are JSON numbers.
//! - Bytes are standard base64 with padding.
//! - Addresses are Bech32 under the field's hrp; the empty address is `""`.
//! - Times are RFC 3339 in UTC with trailing zeros of the fraction trimmed.
//! - Registered concrete values are wrapped as `{"type": name, "value": v}`.

use std::fmt;

use amino_core::AminoError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};

use crate::error::RegistryError;

/// Where a value sits, for error messages.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Site<'a> {
    pub type_name: &'a str,
    pub field: &'a str,
}

impl<'a> Site<'a> {
    pub fn new(type_name: &'a str, field: &'a str) -> Self {
        Self { type_name, field }
    }

    pub fn mismatch(&self, reason: impl fmt::Display) -> RegistryError {
        if self.field.is_empty() {
            RegistryError::mismatch(self.type_name, reason.to_string())
        } else {
            RegistryError::mismatch(self.type_name, format!("field `{}`: {reason}", self.field))
        }
    }

    fn expected(&self, what: &str, found: &Value) -> RegistryError {
        self.mismatch(format!("expected {what}, found {}", describe(found)))
    }
}

fn describe(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ─── JSON → wire values ──────────────────────────────────────────────

pub(crate) fn to_bool(site: Site<'_>, v: &Value) -> Result<bool, RegistryError> {
    v.as_bool().ok_or_else(|| site.expected("a bool", v))
}

pub(crate) fn to_i64(site: Site<'_>, v: &Value) -> Result<i64, RegistryError> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| site.mismatch(format!("{n} is not a 64-bit signed integer"))),
        Value::String(s) => s
            .parse()
            .map_err(|_| site.mismatch(format!("{s:?} is not a 64-bit signed integer"))),
        other => Err(site.expected("an integer", other)),
    }
}

pub(crate) fn to_u64(site: Site<'_>, v: &Value) -> Result<u64, RegistryError> {
    match v {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| site.mismatch(format!("{n} is not a 64-bit unsigned integer"))),
        Value::String(s) => s
            .parse()
            .map_err(|_| site.mismatch(format!("{s:?} is not a 64-bit unsigned integer"))),
        other => Err(site.expected("an unsigned integer", other)),
    }
}

/// Narrow a parsed integer to the target width, reporting `OutOfRange`.
pub(crate) fn narrow<T, U>(kind: &'static str, value: U) -> Result<T, RegistryError>
where
    T: TryFrom<U>,
    U: Copy + ToString,
{
    T::try_from(value).map_err(|_| {
        RegistryError::Amino(AminoError::OutOfRange {
            kind,
            value: value.to_string(),
        })
    })
}

pub(crate) fn to_f64(site: Site<'_>, v: &Value) -> Result<f64, RegistryError> {
    v.as_f64().ok_or_else(|| site.expected("a number", v))
}

pub(crate) fn to_str<'v>(site: Site<'_>, v: &'v Value) -> Result<&'v str, RegistryError> {
    v.as_str().ok_or_else(|| site.expected("a string", v))
}

pub(crate) fn to_bytes(site: Site<'_>, v: &Value) -> Result<Vec<u8>, RegistryError> {
    let s = to_str(site, v)?;
    STANDARD
        .decode(s)
        .map_err(|e| site.mismatch(format!("invalid base64: {e}")))
}

pub(crate) fn to_address(site: Site<'_>, v: &Value, hrp: &str) -> Result<Vec<u8>, RegistryError> {
    let s = to_str(site, v)?;
    if s.is_empty() {
        return Ok(Vec::new());
    }
    Ok(amino_bech32::decode_with_hrp(hrp, s)?)
}

pub(crate) fn to_time(site: Site<'_>, v: &Value) -> Result<DateTime<Utc>, RegistryError> {
    let s = to_str(site, v)?;
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| site.mismatch(format!("invalid RFC 3339 time {s:?}: {e}")))
}

// ─── wire values → JSON ──────────────────────────────────────────────

pub(crate) fn int64_value(i: i64) -> Value {
    Value::String(i.to_string())
}

pub(crate) fn uint64_value(u: u64) -> Value {
    Value::String(u.to_string())
}

pub(crate) fn float_value(site: Site<'_>, f: f64) -> Result<Value, RegistryError> {
    Number::from_f64(f)
        .map(Value::Number)
        .ok_or_else(|| site.mismatch(format!("{f} has no JSON representation")))
}

pub(crate) fn bytes_value(bz: &[u8]) -> Value {
    Value::String(STANDARD.encode(bz))
}

pub(crate) fn address_value(bz: &[u8], hrp: &str) -> Result<Value, RegistryError> {
    if bz.is_empty() {
        return Ok(Value::String(String::new()));
    }
    Ok(Value::String(amino_bech32::encode(hrp, bz)?))
}

pub(crate) fn time_value(t: &DateTime<Utc>) -> Value {
    let mut s = t.format("%Y-%m-%dT%H:%M:%S").to_string();
    let nanos = t.timestamp_subsec_nanos();
    if nanos != 0 {
        let fraction = format!("{nanos:09}");
        s.push('.');
        s.push_str(fraction.trim_end_matches('0'));
    }
    s.push('Z');
    Value::String(s)
}

// ─── Concrete type wrapper ───────────────────────────────────────────

/// Split `{"type": name, "value": v}` into its parts.
pub(crate) fn split_wrapped(v: &Value) -> Option<(&str, &Value)> {
    let obj = v.as_object()?;
    if obj.len() != 2 {
        return None;
    }
    let name = obj.get("type")?.as_str()?;
    let value = obj.get("value")?;
    Some((name, value))
}

pub(crate) fn wrap(name: &str, value: Value) -> Value {
    let mut obj = Map::with_capacity(2);
    obj.insert("type".into(), Value::String(name.to_string()));
    obj.insert("value".into(), value);
    Value::Object(obj)
}

/// Accept a registered concrete value either wrapped under its own name or
/// bare.
pub(crate) fn unwrap_concrete<'v>(name: &str, v: &'v Value) -> Result<&'v Value, RegistryError> {
    match split_wrapped(v) {
        Some((found, inner)) if found == name => Ok(inner),
        Some((found, _)) => Err(RegistryError::mismatch(
            name,
            format!("value is wrapped as {found:?}"),
        )),
        None => Ok(v),
    }
}
