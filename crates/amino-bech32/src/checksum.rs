//! # BCH Checksum
//!
//! The checksum is the remainder of a polynomial over GF(32) modulo the
//! BIP-173 generator, xor-ed with 1. Six 5-bit words are appended so that
//! `polymod(expand(hrp) || data || checksum) == 1` for every valid string.

const GENERATOR: [u32; 5] = [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3];

/// Number of 5-bit checksum words.
pub const CHECKSUM_LEN: usize = 6;

pub(crate) fn polymod(values: impl IntoIterator<Item = u8>) -> u32 {
    let mut chk: u32 = 1;
    for v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ u32::from(v);
        for (i, g) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

/// Expand the hrp into the words mixed into the checksum: the high three
/// bits of each character, a zero, then the low five bits of each character.
pub(crate) fn expand_hrp(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() * 2 + 1);
    out.extend(bytes.iter().map(|b| b >> 5));
    out.push(0);
    out.extend(bytes.iter().map(|b| b & 0x1f));
    out
}

/// Compute the six checksum words for `hrp` and 5-bit `data`.
pub fn create_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let values = expand_hrp(hrp)
        .into_iter()
        .chain(data.iter().copied())
        .chain([0u8; CHECKSUM_LEN]);
    let pm = polymod(values) ^ 1;
    let mut out = [0u8; CHECKSUM_LEN];
    for (i, word) in out.iter_mut().enumerate() {
        *word = ((pm >> (5 * (5 - i))) & 0x1f) as u8;
    }
    out
}

/// Verify that `data` (payload words followed by checksum words) carries a
/// valid checksum for `hrp`.
pub fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    polymod(expand_hrp(hrp).into_iter().chain(data.iter().copied())) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_hrp() {
        assert_eq!(expand_hrp("bc"), vec![3, 3, 0, 2, 3]);
    }

    #[test]
    fn test_checksum_verifies() {
        let data = [0u8, 1, 2, 3, 31];
        let mut full = data.to_vec();
        full.extend_from_slice(&create_checksum("cosmos", &data));
        assert!(verify_checksum("cosmos", &full));
        assert!(!verify_checksum("cosmoz", &full));
    }

    #[test]
    fn test_checksum_detects_single_word_change() {
        let data = [7u8; 32];
        let mut full = data.to_vec();
        full.extend_from_slice(&create_checksum("bc", &data));
        for i in 0..full.len() {
            let mut corrupted = full.clone();
            corrupted[i] ^= 0x01;
            assert!(!verify_checksum("bc", &corrupted), "undetected flip at {i}");
        }
    }
}
