//! # Disfix — Type-Identifying Bytes Derived From Names
//!
//! Every registered concrete type is identified on the wire by bytes derived
//! from its registered name:
//!
//! 1. `h = SHA-256(name)`.
//! 2. Drop leading `0x00` bytes of `h`; the next 3 bytes are the
//!    [`DisambBytes`].
//! 3. Drop `0x00` bytes that follow; the next 4 bytes are the
//!    [`PrefixBytes`].
//!
//! Neither value can therefore start with `0x00`, which is what lets a
//! decoder tell the two header forms apart:
//!
//! ```text
//! prefix form:  PP PP PP PP              (4 bytes)
//! disfix form:  00 DD DD DD PP PP PP PP  (8 bytes)
//! ```
//!
//! ## Stability
//!
//! The derivation defines wire compatibility with every other Amino
//! implementation. `tendermint/PubKeyEd25519` must always yield disamb
//! `AC2679` and prefix `1624DE64`.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::AminoError;

/// Three bytes that disambiguate types sharing a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DisambBytes(pub [u8; 3]);

/// Four bytes written in front of every registered concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrefixBytes(pub [u8; 4]);

impl DisambBytes {
    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }
}

impl PrefixBytes {
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for DisambBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

impl fmt::Display for PrefixBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

/// Disambiguation and prefix bytes of one registered name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Disfix {
    pub disamb: DisambBytes,
    pub prefix: PrefixBytes,
}

impl Disfix {
    /// The 8-byte disfix header: `0x00 || disamb || prefix`.
    pub fn to_disfix_bytes(&self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out[1..4].copy_from_slice(&self.disamb.0);
        out[4..8].copy_from_slice(&self.prefix.0);
        out
    }
}

impl fmt::Display for Disfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.disamb, self.prefix)
    }
}

/// Derive the disfix of a registered name.
pub fn name_to_disfix(name: &str) -> Disfix {
    let hash = Sha256::digest(name.as_bytes());
    let mut rest = skip_zeros(&hash);

    let mut disamb = [0u8; 3];
    rest = fill(&mut disamb, rest);
    rest = skip_zeros(rest);

    let mut prefix = [0u8; 4];
    fill(&mut prefix, rest);

    Disfix {
        disamb: DisambBytes(disamb),
        prefix: PrefixBytes(prefix),
    }
}

fn skip_zeros(bz: &[u8]) -> &[u8] {
    let start = bz.iter().position(|b| *b != 0x00).unwrap_or(bz.len());
    &bz[start..]
}

/// Copy as many bytes as `out` holds from the front of `src`, returning the
/// remainder. A 32-byte digest always has enough non-zero bytes left.
fn fill<'a>(out: &mut [u8], src: &'a [u8]) -> &'a [u8] {
    let take = out.len().min(src.len());
    out[..take].copy_from_slice(&src[..take]);
    &src[take..]
}

/// Type information read from the front of an interface-typed value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeHeader {
    pub disamb: Option<DisambBytes>,
    pub prefix: Option<PrefixBytes>,
}

impl TypeHeader {
    pub fn has_disamb(&self) -> bool {
        self.disamb.is_some()
    }

    pub fn has_prefix(&self) -> bool {
        self.prefix.is_some()
    }

    /// True for the empty (nil interface) header.
    pub fn is_nil(&self) -> bool {
        self.disamb.is_none() && self.prefix.is_none()
    }
}

/// Read a disfix or prefix header from the front of `bz`.
///
/// An empty buffer is the nil interface value and yields an empty header
/// with zero bytes consumed.
///
/// # Errors
///
/// - `TruncatedInput` if a header is started but incomplete.
/// - `MalformedPrefix` if the disamb or prefix field starts with `0x00`.
pub fn decode_disamb_prefix_bytes(bz: &[u8]) -> Result<(TypeHeader, usize), AminoError> {
    match bz.first() {
        None => Ok((TypeHeader::default(), 0)),
        Some(0x00) => {
            let header: &[u8; 8] = bz
                .get(..8)
                .and_then(|s| s.try_into().ok())
                .ok_or_else(|| AminoError::truncated("disfix bytes", 8, bz.len()))?;
            if header[1] == 0x00 {
                return Err(AminoError::MalformedPrefix(
                    "disambiguation bytes start with 0x00".into(),
                ));
            }
            if header[4] == 0x00 {
                return Err(AminoError::MalformedPrefix(
                    "prefix bytes after disambiguation start with 0x00".into(),
                ));
            }
            let mut disamb = [0u8; 3];
            disamb.copy_from_slice(&header[1..4]);
            let mut prefix = [0u8; 4];
            prefix.copy_from_slice(&header[4..8]);
            Ok((
                TypeHeader {
                    disamb: Some(DisambBytes(disamb)),
                    prefix: Some(PrefixBytes(prefix)),
                },
                8,
            ))
        }
        Some(_) => {
            let prefix: [u8; 4] = bz
                .get(..4)
                .and_then(|s| s.try_into().ok())
                .ok_or_else(|| AminoError::truncated("prefix bytes", 4, bz.len()))?;
            Ok((
                TypeHeader {
                    disamb: None,
                    prefix: Some(PrefixBytes(prefix)),
                },
                4,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disfix_hex(name: &str) -> (String, String) {
        let d = name_to_disfix(name);
        (d.disamb.to_string(), d.prefix.to_string())
    }

    #[test]
    fn test_known_tendermint_key_prefixes() {
        assert_eq!(
            disfix_hex("tendermint/PubKeyEd25519"),
            ("AC2679".into(), "1624DE64".into())
        );
        assert_eq!(
            disfix_hex("tendermint/PubKeySecp256k1"),
            ("F8CCEA".into(), "EB5AE987".into())
        );
        assert_eq!(
            disfix_hex("tendermint/PrivKeyEd25519"),
            ("954568".into(), "A3288910".into())
        );
        assert_eq!(
            disfix_hex("tendermint/PubKeyMultisigThreshold"),
            ("B449AE".into(), "22C1F7E2".into())
        );
    }

    #[test]
    fn test_known_cosmos_prefixes() {
        assert_eq!(disfix_hex("cosmos-sdk/StdTx").1, "282816A9");
        assert_eq!(disfix_hex("cosmos-sdk/MsgSend").1, "A8A3619A");
        assert_eq!(disfix_hex("auth/StdTx").1, "F0625DEE");
    }

    #[test]
    fn test_msg_send_is_stable() {
        let a = name_to_disfix("MsgSend");
        let b = name_to_disfix("MsgSend");
        assert_eq!(a, b);
        assert_eq!(a.disamb.to_string(), "D4FF7D");
        assert_eq!(a.prefix.to_string(), "DC2AA085");
    }

    #[test]
    fn test_leading_zero_byte_skipped() {
        // SHA-256("zero/Probe233") = 00 58 1b 6b e6 d9 b1 1a ...
        assert_eq!(
            disfix_hex("zero/Probe233"),
            ("581B6B".into(), "E6D9B11A".into())
        );
    }

    #[test]
    fn test_zero_between_disamb_and_prefix_skipped() {
        // SHA-256("zero/Probe54") = a6 d2 32 00 be fc c4 98 ...
        assert_eq!(
            disfix_hex("zero/Probe54"),
            ("A6D232".into(), "BEFCC498".into())
        );
    }

    #[test]
    fn test_disfix_bytes_layout() {
        let d = name_to_disfix("tendermint/PubKeyEd25519");
        assert_eq!(
            d.to_disfix_bytes(),
            [0x00, 0xac, 0x26, 0x79, 0x16, 0x24, 0xde, 0x64]
        );
        assert_eq!(d.to_string(), "AC26791624DE64");
    }

    #[test]
    fn test_decode_prefix_form() {
        let (header, n) =
            decode_disamb_prefix_bytes(&[0x16, 0x24, 0xde, 0x64, 0x20]).unwrap();
        assert_eq!(n, 4);
        assert!(!header.has_disamb());
        assert_eq!(header.prefix, Some(PrefixBytes([0x16, 0x24, 0xde, 0x64])));
    }

    #[test]
    fn test_decode_disfix_form() {
        let d = name_to_disfix("tendermint/PubKeyEd25519");
        let mut bz = d.to_disfix_bytes().to_vec();
        bz.push(0x20);
        let (header, n) = decode_disamb_prefix_bytes(&bz).unwrap();
        assert_eq!(n, 8);
        assert_eq!(header.disamb, Some(d.disamb));
        assert_eq!(header.prefix, Some(d.prefix));
    }

    #[test]
    fn test_decode_empty_is_nil() {
        let (header, n) = decode_disamb_prefix_bytes(&[]).unwrap();
        assert_eq!(n, 0);
        assert!(header.is_nil());
    }

    #[test]
    fn test_decode_truncated() {
        assert!(matches!(
            decode_disamb_prefix_bytes(&[0x16, 0x24]),
            Err(AminoError::TruncatedInput { needed: 4, .. })
        ));
        assert!(matches!(
            decode_disamb_prefix_bytes(&[0x00, 0xac, 0x26, 0x79, 0x16]),
            Err(AminoError::TruncatedInput { needed: 8, .. })
        ));
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(
            decode_disamb_prefix_bytes(&[0x00, 0x00, 0x26, 0x79, 0x16, 0x24, 0xde, 0x64]),
            Err(AminoError::MalformedPrefix(_))
        ));
        assert!(matches!(
            decode_disamb_prefix_bytes(&[0x00, 0xac, 0x26, 0x79, 0x00, 0x24, 0xde, 0x64]),
            Err(AminoError::MalformedPrefix(_))
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let d = name_to_disfix("tendermint/PubKeyEd25519");
        let json = serde_json::to_string(&d).unwrap();
        let back: Disfix = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }
}
