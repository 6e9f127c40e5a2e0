//! BIP-173 reference vectors plus Cosmos address vectors.

use amino_bech32::{decode, encode, Bech32Error};

const VALID: &[&str] = &[
    "A12UEL5L",
    "a12uel5l",
    "an83characterlonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1tt5tgs",
    "abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw",
    "split1checkupstagehandshakeupstreamerranterredcaperred2y9e3w",
    "?1ezyfcl",
];

#[test]
fn test_valid_vectors_decode_and_reencode() {
    for s in VALID {
        let (hrp, data) = decode(s).unwrap_or_else(|e| panic!("{s}: {e}"));
        let again = encode(&hrp, &data).unwrap();
        assert_eq!(again, s.to_ascii_lowercase(), "re-encoding {s}");
    }
}

#[test]
fn test_charset_vector_payload() {
    // The data part spells out word values 0..32 in order.
    let (hrp, data) = decode("abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw").unwrap();
    assert_eq!(hrp, "abcdef");
    assert_eq!(
        hex::encode(data),
        "00443214c74254b635cf84653a56d7c675be77df"
    );
}

#[test]
fn test_invalid_vectors() {
    let cases: &[(&str, fn(&Bech32Error) -> bool)] = &[
        // HRP character out of range.
        ("\u{20}1nwldj5", |e| matches!(e, Bech32Error::InvalidCharacter { .. })),
        ("\u{7f}1axkwrx", |e| matches!(e, Bech32Error::InvalidCharacter { .. })),
        // Overall max length exceeded.
        (
            "an84characterslonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1569pvx",
            |e| matches!(e, Bech32Error::InvalidLength(_)),
        ),
        // No separator.
        ("pzry9x0s0muk", |e| matches!(e, Bech32Error::InvalidLength(_))),
        // Empty HRP.
        ("1pzry9x0s0muk", |e| matches!(e, Bech32Error::InvalidLength(_))),
        ("10a06t8", |e| matches!(e, Bech32Error::InvalidLength(_))),
        // Invalid data character.
        ("x1b4n0q5v", |e| matches!(e, Bech32Error::InvalidCharacter { .. })),
        // Too short checksum.
        ("li1dgmt3", |e| matches!(e, Bech32Error::InvalidLength(_))),
        // Checksum calculated with upper-case hrp.
        ("A1G7SGD8", |e| matches!(e, Bech32Error::ChecksumMismatch)),
    ];
    for (s, check) in cases {
        let err = decode(s).expect_err(s);
        assert!(check(&err), "{s:?} gave {err:?}");
    }
}

#[test]
fn test_cosmos_round_trips() {
    for hrp in ["cosmos", "bc"] {
        for len in [0usize, 1, 20, 32] {
            let data: Vec<u8> = (0..len).map(|i| (i * 7) as u8).collect();
            let s = encode(hrp, &data).unwrap();
            assert!(s.starts_with(&format!("{hrp}1")));
            assert_eq!(decode(&s).unwrap(), (hrp.to_string(), data));
        }
    }
}

#[test]
fn test_32_byte_vector() {
    assert_eq!(
        encode("cosmos", &[1u8; 32]).unwrap(),
        "cosmos1qyqszqgpqyqszqgpqyqszqgpqyqszqgpqyqszqgpqyqszqgpqyqs2m6sx4"
    );
}

#[test]
fn test_every_single_character_corruption_detected() {
    let s = encode("cosmos", &[0u8; 20]).unwrap();
    let data_start = s.rfind('1').unwrap() + 1;
    for pos in data_start..s.len() {
        for replacement in b"qpzry9x8gf2tvdw0s3jn54khce6mua7l" {
            if s.as_bytes()[pos] == *replacement {
                continue;
            }
            let mut bytes = s.clone().into_bytes();
            bytes[pos] = *replacement;
            let corrupted = String::from_utf8(bytes).unwrap();
            assert_eq!(
                decode(&corrupted),
                Err(Bech32Error::ChecksumMismatch),
                "corruption at {pos} undetected"
            );
        }
    }
}
