//! # Bech32 Encode / Decode
//!
//! ## Encoding
//!
//! 1. Regroup the payload from 8-bit bytes into 5-bit words, zero-padding
//!    the final word (at most 4 padding bits).
//! 2. Append the six checksum words computed over the expanded hrp and the
//!    payload words.
//! 3. Emit `hrp || '1' || charset[word]...` in lower case.
//!
//! ## Decoding
//!
//! The string must be entirely lower- or entirely upper-case. The separator
//! is the *last* `1`, since the hrp itself may contain `1`. After checksum
//! verification the payload words are regrouped back to bytes; leftover
//! padding must be shorter than 5 bits and all zero.

use crate::checksum::{create_checksum, verify_checksum, CHECKSUM_LEN};
use crate::error::Bech32Error;

/// The 32 data symbols, indexed by word value.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Separator between hrp and data part.
pub const SEPARATOR: char = '1';

/// Maximum total length of a Bech32 string.
pub const MAX_LENGTH: usize = 90;

/// Word value of each ASCII symbol, or -1.
const CHARSET_REV: [i8; 128] = {
    let mut rev = [-1i8; 128];
    let mut i = 0;
    while i < CHARSET.len() {
        rev[CHARSET[i] as usize] = i as i8;
        i += 1;
    }
    rev
};

/// Encode `data` under the human-readable part `hrp`.
///
/// # Errors
///
/// - `InvalidLength` if `hrp` is empty or the result exceeds [`MAX_LENGTH`].
/// - `InvalidCharacter` if `hrp` holds characters outside ASCII 33..=126.
/// - `MixedCase` if `hrp` mixes upper- and lower-case letters.
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, Bech32Error> {
    if hrp.is_empty() {
        return Err(Bech32Error::InvalidLength("empty hrp".into()));
    }
    check_printable(hrp)?;
    check_case(hrp)?;
    let hrp = hrp.to_ascii_lowercase();

    let words = convert_bits(data, 8, 5, true)?;
    let total = hrp.len() + 1 + words.len() + CHECKSUM_LEN;
    if total > MAX_LENGTH {
        return Err(Bech32Error::InvalidLength(format!(
            "encoded length {total} exceeds {MAX_LENGTH}"
        )));
    }

    let checksum = create_checksum(&hrp, &words);
    let mut out = String::with_capacity(total);
    out.push_str(&hrp);
    out.push(SEPARATOR);
    for w in words.iter().chain(checksum.iter()) {
        out.push(char::from(CHARSET[usize::from(*w)]));
    }
    Ok(out)
}

/// Decode a Bech32 string into its (lower-case) hrp and payload bytes.
///
/// # Errors
///
/// See the module documentation; every failure maps to one
/// [`Bech32Error`] variant.
pub fn decode(bech: &str) -> Result<(String, Vec<u8>), Bech32Error> {
    if bech.len() > MAX_LENGTH {
        return Err(Bech32Error::InvalidLength(format!(
            "string length {} exceeds {MAX_LENGTH}",
            bech.len()
        )));
    }
    check_printable(bech)?;
    check_case(bech)?;
    let bech = bech.to_ascii_lowercase();

    let sep = bech
        .rfind(SEPARATOR)
        .ok_or_else(|| Bech32Error::InvalidLength("missing separator".into()))?;
    if sep == 0 {
        return Err(Bech32Error::InvalidLength("empty hrp".into()));
    }
    let (hrp, rest) = bech.split_at(sep);
    let data_part = &rest[1..];
    if data_part.len() < CHECKSUM_LEN {
        return Err(Bech32Error::InvalidLength(format!(
            "data part has {} symbols, checksum needs {CHECKSUM_LEN}",
            data_part.len()
        )));
    }

    let mut words = Vec::with_capacity(data_part.len());
    for (i, c) in data_part.char_indices() {
        let word = CHARSET_REV
            .get(c as usize)
            .copied()
            .filter(|w| *w >= 0)
            .ok_or(Bech32Error::InvalidCharacter {
                character: c,
                position: sep + 1 + i,
            })?;
        words.push(word as u8);
    }

    if !verify_checksum(hrp, &words) {
        return Err(Bech32Error::ChecksumMismatch);
    }
    words.truncate(words.len() - CHECKSUM_LEN);
    let data = convert_bits(&words, 5, 8, false)?;
    Ok((hrp.to_string(), data))
}

/// Decode a Bech32 string that must carry `expected_hrp`.
pub fn decode_with_hrp(expected_hrp: &str, bech: &str) -> Result<Vec<u8>, Bech32Error> {
    let (hrp, data) = decode(bech)?;
    if hrp != expected_hrp.to_ascii_lowercase() {
        return Err(Bech32Error::InvalidHrp {
            expected: expected_hrp.to_string(),
            found: hrp,
        });
    }
    Ok(data)
}

/// Regroup `data` from `from`-bit values into `to`-bit values.
///
/// With `pad`, a trailing partial group is zero-filled. Without it, the
/// leftover bits must number fewer than `from` and be zero.
///
/// # Errors
///
/// `InvalidPadding` for illegal leftover bits, or for an input value wider
/// than `from` bits.
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, Bech32Error> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max = (1u32 << to) - 1;
    let max_acc = (1u32 << (from + to - 1)) - 1;
    let mut out = Vec::with_capacity(data.len() * from as usize / to as usize + 1);

    for (i, &value) in data.iter().enumerate() {
        let v = u32::from(value);
        if v >> from != 0 {
            return Err(Bech32Error::InvalidPadding(format!(
                "value {v} at {i} exceeds {from} bits"
            )));
        }
        acc = ((acc << from) | v) & max_acc;
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & max) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & max) as u8);
        }
    } else if bits >= from {
        return Err(Bech32Error::InvalidPadding(format!(
            "{bits} leftover bits, at most {} allowed",
            from - 1
        )));
    } else if (acc << (to - bits)) & max != 0 {
        return Err(Bech32Error::InvalidPadding("non-zero padding bits".into()));
    }
    Ok(out)
}

fn check_printable(s: &str) -> Result<(), Bech32Error> {
    match s.char_indices().find(|(_, c)| !('!'..='~').contains(c)) {
        Some((position, character)) => Err(Bech32Error::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

fn check_case(s: &str) -> Result<(), Bech32Error> {
    let has_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Bech32Error::MixedCase);
    }
    Ok(())
}
