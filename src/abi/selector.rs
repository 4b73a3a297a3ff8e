//! Function selector hashing.
//!
//! Contracts dispatch on the first four bytes of the legacy keccak-256 hash
//! of the method signature. Standardized SHA3-256 uses different padding and
//! yields selectors that match nothing.

use alloy::primitives::keccak256;

use crate::abi::types::{Selector, SELECTOR_SIZE};

/// Signature of the read method exposed by the value contract.
pub const GET_VALUE_SIGNATURE: &str = "getvalue()";

/// Signature of the write method exposed by the value contract.
pub const UPDATE_SIGNATURE: &str = "update(string)";

/// Compute the selector for a method signature such as `"update(string)"`.
pub fn hash_selector(signature: &str) -> Selector {
    let digest = keccak256(signature.as_bytes());
    let mut selector = [0u8; SELECTOR_SIZE];
    selector.copy_from_slice(&digest[..SELECTOR_SIZE]);
    Selector(selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_selectors() {
        assert_eq!(hash_selector(GET_VALUE_SIGNATURE).to_hex(), "69bd01c4");
        assert_eq!(hash_selector(UPDATE_SIGNATURE).to_hex(), "3d7403a3");
        assert_eq!(
            hash_selector("transfer(address,uint256)").to_hex(),
            "a9059cbb"
        );
    }

    #[test]
    fn test_not_sha3_256() {
        // Leading bytes of SHA3-256 over the same signatures.
        assert_ne!(hash_selector(GET_VALUE_SIGNATURE).to_hex(), "6c30f85a");
        assert_ne!(hash_selector(UPDATE_SIGNATURE).to_hex(), "9901ac54");
    }

    #[test]
    fn test_selector_length() {
        for signature in ["", "a()", "getvalue()", "update(string)", "ü(ß)"] {
            let selector = hash_selector(signature);
            assert_eq!(selector.as_bytes().len(), 4);
            assert_eq!(selector.to_hex().len(), 8);
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(hash_selector("update(string)"), hash_selector("update(string)"));
        assert_ne!(hash_selector("update(string)"), hash_selector("update(bytes)"));
    }
}
