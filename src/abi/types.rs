//! ABI word sizes, the selector type and codec errors.

use alloy::primitives::hex;
use alloy::primitives::U256;
use std::fmt;
use thiserror::Error;

/// Size of one ABI word in bytes.
pub const WORD_SIZE: usize = 32;

/// Size of one ABI word rendered as hex.
pub const WORD_HEX_LEN: usize = WORD_SIZE * 2;

/// Size of a function selector in bytes.
pub const SELECTOR_SIZE: usize = 4;

/// First four bytes of the keccak-256 hash of a method signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector(pub [u8; SELECTOR_SIZE]);

impl Selector {
    /// Raw selector bytes.
    pub fn as_bytes(&self) -> &[u8; SELECTOR_SIZE] {
        &self.0
    }

    /// Lowercase hex without a `0x` prefix, as embedded in call data.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Selector> for [u8; SELECTOR_SIZE] {
    fn from(selector: Selector) -> Self {
        selector.0
    }
}

/// Errors produced while decoding ABI payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// Input is not valid hex.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Input is shorter than the fixed-size prefix it must carry.
    #[error("Encoded value too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    /// Length word points past the end of the available data.
    #[error("Declared string length {declared} exceeds the {available} bytes available")]
    LengthOutOfRange { declared: U256, available: usize },

    /// Decoded bytes are not UTF-8.
    #[error("Decoded string is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

/// Result type for ABI operations.
pub type AbiResult<T> = Result<T, AbiError>;

/// Encode an integer as one ABI word (64 hex chars, big-endian).
pub(crate) fn encode_word(value: usize) -> String {
    format!("{:064x}", value)
}
