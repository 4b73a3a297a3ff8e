//! Call data for the value contract.

use alloy::primitives::hex;

use crate::abi::selector::{hash_selector, GET_VALUE_SIGNATURE, UPDATE_SIGNATURE};
use crate::abi::string::{decode_string_arg, encode_string_arg};
use crate::abi::types::{encode_word, AbiError, AbiResult, WORD_HEX_LEN, WORD_SIZE};

/// `0x` plus the offset word that `getvalue()` places before its string.
///
/// Only valid for the single-string return of `getvalue()`.
const GET_VALUE_PREFIX_LEN: usize = 2 + WORD_HEX_LEN;

/// Call data for `getvalue()`: the bare selector.
pub fn get_value_call_data() -> String {
    format!("0x{}", hash_selector(GET_VALUE_SIGNATURE))
}

/// Call data for `update(string)`: selector, one offset word, one string.
pub fn update_call_data(value: &str) -> String {
    format!(
        "0x{}{}{}",
        hash_selector(UPDATE_SIGNATURE),
        encode_word(WORD_SIZE),
        encode_string_arg(value)
    )
}

/// Normalize compiled bytecode into `0x`-prefixed creation data.
///
/// Surrounding whitespace and an existing `0x` prefix are tolerated.
pub fn deploy_data(bytecode: &str) -> AbiResult<String> {
    let bytecode = bytecode.trim();
    let bytecode = bytecode.strip_prefix("0x").unwrap_or(bytecode);
    if bytecode.is_empty() {
        return Err(AbiError::TooShort {
            expected: 1,
            actual: 0,
        });
    }
    hex::decode(bytecode).map_err(|e| AbiError::InvalidHex(e.to_string()))?;
    Ok(format!("0x{}", bytecode.to_ascii_lowercase()))
}

/// Decode the string returned by an `eth_call` to `getvalue()`.
pub fn decode_get_value_result(result_hex: &str) -> AbiResult<String> {
    let payload = result_hex
        .get(GET_VALUE_PREFIX_LEN..)
        .ok_or(AbiError::TooShort {
            expected: 2 * WORD_SIZE,
            actual: result_hex.len().saturating_sub(2) / 2,
        })?;
    decode_string_arg(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_value_call_data() {
        assert_eq!(get_value_call_data(), "0x69bd01c4");
    }

    #[test]
    fn test_update_call_data() {
        let data = update_call_data("hello");
        assert!(data.starts_with("0x3d7403a3"));
        assert_eq!(data.len(), 2 + 8 + 64 * 3);
        assert_eq!(&data[10..74], format!("{:064x}", 32));
        assert_eq!(&data[74..138], format!("{:064x}", 5));
        assert!(data[138..].starts_with("68656c6c6f"));
        assert!(!data.contains(char::is_whitespace));
    }

    #[test]
    fn test_update_call_data_empty() {
        let data = update_call_data("");
        assert_eq!(data.len(), 2 + 8 + 64 * 2);
    }

    #[test]
    fn test_deploy_data() {
        assert_eq!(deploy_data("6080604052\n").unwrap(), "0x6080604052");
        assert_eq!(deploy_data("0x6080AB").unwrap(), "0x6080ab");
        assert!(matches!(deploy_data("60806g"), Err(AbiError::InvalidHex(_))));
        assert!(matches!(deploy_data("  "), Err(AbiError::TooShort { .. })));
    }

    #[test]
    fn test_decode_get_value_result() {
        let returned = format!("0x{}{}", encode_word(32), encode_string_arg("stored value"));
        assert_eq!(decode_get_value_result(&returned).unwrap(), "stored value");
    }

    #[test]
    fn test_decode_get_value_result_short() {
        assert!(matches!(
            decode_get_value_result("0x"),
            Err(AbiError::TooShort { .. })
        ));
        // Prefix present but no length word.
        let returned = format!("0x{}", encode_word(32));
        assert!(matches!(
            decode_get_value_result(&returned),
            Err(AbiError::TooShort { .. })
        ));
    }
}
