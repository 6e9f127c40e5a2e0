//! # Time Codec — Timestamps as Seconds and Nanoseconds
//!
//! go-amino encodes `time.Time` as a two-field struct, mirroring
//! `google.protobuf.Timestamp`:
//!
//! ```text
//! 0x08 uvarint(seconds as u64)   -- field 1, typ3 varint, omitted when 0
//! 0x10 uvarint(nanos)            -- field 2, typ3 varint, omitted when 0
//! ```
//!
//! Seconds are two's complement, so instants before 1970 take ten bytes.
//! The Unix epoch itself encodes to zero bytes.
//!
//! ## Range
//!
//! Seconds must lie in `[MIN_SECONDS, MAX_SECONDS)`, i.e. years 0001 through
//! 9999 UTC; nanoseconds in `[0, 999_999_999]`. Anything else is
//! `InvalidTimestamp`, both when encoding and when decoding.

use chrono::{DateTime, Utc};

use crate::bytes::AminoBytes;
use crate::error::AminoError;
use crate::varint::{decode_uvarint, put_uvarint};

/// Seconds of `0001-01-01T00:00:00Z` relative to the Unix epoch.
pub const MIN_SECONDS: i64 = -62_135_596_800;

/// Seconds of `10000-01-01T00:00:00Z` relative to the Unix epoch (exclusive).
pub const MAX_SECONDS: i64 = 253_402_300_800;

const MAX_NANOS: u32 = 999_999_999;

const SECONDS_KEY: u64 = 1 << 3;
const NANOS_KEY: u64 = 2 << 3;

/// Append the Amino time encoding of `t` to `buf`.
///
/// # Errors
///
/// `InvalidTimestamp` if `t` is outside the representable range or carries a
/// leap-second nanosecond value.
pub fn put_time(buf: &mut Vec<u8>, t: &DateTime<Utc>) -> Result<(), AminoError> {
    let seconds = t.timestamp();
    let nanos = t.timestamp_subsec_nanos();
    check_range(seconds, u64::from(nanos))?;

    if seconds != 0 {
        put_uvarint(buf, SECONDS_KEY);
        put_uvarint(buf, seconds as u64);
    }
    if nanos != 0 {
        put_uvarint(buf, NANOS_KEY);
        put_uvarint(buf, u64::from(nanos));
    }
    Ok(())
}

/// Encode a UTC timestamp.
pub fn encode_time(t: &DateTime<Utc>) -> Result<AminoBytes, AminoError> {
    let mut buf = Vec::with_capacity(16);
    put_time(&mut buf, t)?;
    Ok(AminoBytes::new(buf))
}

/// Decode a timestamp from the front of `bz`.
///
/// Reads field 1 if it is next, then field 2 if it is next, and stops at the
/// first byte that starts neither. Missing fields are zero.
pub fn decode_time(bz: &[u8]) -> Result<(DateTime<Utc>, usize), AminoError> {
    let mut consumed = 0;

    let (seconds, n) = read_field(&bz[consumed..], 1, "seconds")?;
    consumed += n;
    let (nanos, n) = read_field(&bz[consumed..], 2, "nanoseconds")?;
    consumed += n;

    let seconds = seconds as i64;
    check_range(seconds, nanos)?;
    let t = DateTime::from_timestamp(seconds, nanos as u32).ok_or_else(|| {
        AminoError::InvalidTimestamp(format!("{seconds}s {nanos}ns is not representable"))
    })?;
    Ok((t, consumed))
}

/// Read varint field `number` if it is the next key in `bz`.
fn read_field(bz: &[u8], number: u64, what: &str) -> Result<(u64, usize), AminoError> {
    if bz.is_empty() {
        return Ok((0, 0));
    }
    let (key, key_len) = decode_uvarint(bz)?;
    if key >> 3 != number {
        return Ok((0, 0));
    }
    if key & 0x07 != 0 {
        return Err(AminoError::InvalidTimestamp(format!(
            "{what} field has wire type {}, expected varint",
            key & 0x07
        )));
    }
    let (value, value_len) = decode_uvarint(&bz[key_len..])?;
    Ok((value, key_len + value_len))
}

fn check_range(seconds: i64, nanos: u64) -> Result<(), AminoError> {
    if !(MIN_SECONDS..MAX_SECONDS).contains(&seconds) {
        return Err(AminoError::InvalidTimestamp(format!(
            "seconds {seconds} outside [{MIN_SECONDS}, {MAX_SECONDS})"
        )));
    }
    if nanos > u64::from(MAX_NANOS) {
        return Err(AminoError::InvalidTimestamp(format!(
            "nanoseconds {nanos} outside [0, {MAX_NANOS}]"
        )));
    }
    Ok(())
}
