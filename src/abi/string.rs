//! Single `string` argument encoding.
//!
//! Layout: one big-endian length word, then the UTF-8 bytes right-padded
//! with zeros to a whole number of words.

use alloy::primitives::hex;
use alloy::primitives::U256;

use crate::abi::types::{encode_word, AbiError, AbiResult, WORD_HEX_LEN, WORD_SIZE};

/// Encode `value` as length word + padded data, as unprefixed hex.
pub fn encode_string_arg(value: &str) -> String {
    let data = hex::encode(value.as_bytes());

    // Already word-aligned data (including empty) takes no padding.
    let remainder = data.len() % WORD_HEX_LEN;
    let padding = if remainder == 0 { 0 } else { WORD_HEX_LEN - remainder };

    let mut encoded = String::with_capacity(WORD_HEX_LEN + data.len() + padding);
    encoded.push_str(&encode_word(value.len()));
    encoded.push_str(&data);
    encoded.extend(std::iter::repeat('0').take(padding));
    encoded
}

/// Decode a length-prefixed string. Bytes past the declared length are ignored.
pub fn decode_string_arg(raw_hex: &str) -> AbiResult<String> {
    let raw_hex = raw_hex.strip_prefix("0x").unwrap_or(raw_hex);
    let raw = hex::decode(raw_hex).map_err(|e| AbiError::InvalidHex(e.to_string()))?;

    if raw.len() < WORD_SIZE {
        return Err(AbiError::TooShort {
            expected: WORD_SIZE,
            actual: raw.len(),
        });
    }

    let (length_word, data) = raw.split_at(WORD_SIZE);
    let declared = U256::from_be_slice(length_word);
    let length = usize::try_from(declared)
        .ok()
        .filter(|length| *length <= data.len())
        .ok_or(AbiError::LengthOutOfRange {
            declared,
            available: data.len(),
        })?;

    String::from_utf8(data[..length].to_vec()).map_err(|e| AbiError::InvalidUtf8(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty() {
        let encoded = encode_string_arg("");
        assert_eq!(encoded.len(), 64);
        assert!(encoded.chars().all(|c| c == '0'));
    }

    #[test]
    fn test_encode_short() {
        let encoded = encode_string_arg("hi");
        assert_eq!(encoded.len(), 128);
        assert_eq!(&encoded[..64], &format!("{:064x}", 2));
        assert!(encoded[64..].starts_with("6869"));
        assert!(encoded[68..].chars().all(|c| c == '0'));
    }

    #[test]
    fn test_encode_exact_word() {
        let value = "0123456789abcdef0123456789abcdef";
        assert_eq!(value.len(), 32);

        let encoded = encode_string_arg(value);
        // Length word plus exactly one data word, no padding word.
        assert_eq!(encoded.len(), 128);
        assert_eq!(&encoded[64..], hex::encode(value));
    }

    #[test]
    fn test_encode_length_always_word_multiple() {
        for n in 0..=100 {
            let encoded = encode_string_arg(&"x".repeat(n));
            assert_eq!(encoded.len() % 64, 0, "length {}", n);
            assert_eq!(encoded.len(), 64 + n.div_ceil(32) * 64, "length {}", n);
            assert!(!encoded.contains(char::is_whitespace));
        }
    }

    #[test]
    fn test_round_trip() {
        for n in 0..=1000 {
            let value = "a".repeat(n);
            assert_eq!(decode_string_arg(&encode_string_arg(&value)).unwrap(), value);
        }

        for value in ["hello world", "ünïcødé ✓", "line\nbreak", "\0"] {
            assert_eq!(decode_string_arg(&encode_string_arg(value)).unwrap(), value);
        }
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let mut encoded = encode_string_arg("abc");
        encoded.push_str(&"ff".repeat(32));
        assert_eq!(decode_string_arg(&encoded).unwrap(), "abc");
    }

    #[test]
    fn test_decode_accepts_prefix() {
        let encoded = format!("0x{}", encode_string_arg("abc"));
        assert_eq!(decode_string_arg(&encoded).unwrap(), "abc");
    }

    #[test]
    fn test_decode_too_short() {
        let result = decode_string_arg(&"0".repeat(62));
        assert_eq!(
            result,
            Err(AbiError::TooShort {
                expected: 32,
                actual: 31
            })
        );
    }

    #[test]
    fn test_decode_invalid_hex() {
        let input = format!("{}zz", "0".repeat(62));
        assert!(matches!(decode_string_arg(&input), Err(AbiError::InvalidHex(_))));

        // Odd number of digits.
        assert!(matches!(
            decode_string_arg(&"0".repeat(65)),
            Err(AbiError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_decode_length_out_of_range() {
        let input = format!("{:064x}{}", 5, "61".repeat(3));
        assert!(matches!(
            decode_string_arg(&input),
            Err(AbiError::LengthOutOfRange { available: 3, .. })
        ));

        let huge = "f".repeat(64);
        assert!(matches!(
            decode_string_arg(&huge),
            Err(AbiError::LengthOutOfRange { available: 0, .. })
        ));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let input = format!("{:064x}ff{}", 1, "0".repeat(62));
        assert!(matches!(decode_string_arg(&input), Err(AbiError::InvalidUtf8(_))));
    }
}
