//! Minimal contract ABI codec.
//!
//! # Data Flow
//! ```text
//! method signature ("update(string)")
//!     → selector.rs (keccak-256, first 4 bytes)
//! string argument
//!     → string.rs (length word + zero-padded data)
//!     → calldata.rs ("0x" + selector + offset word + argument)
//! ```
//!
//! # Design Decisions
//! - Only the single-string-argument calling convention is supported
//! - Hex inside call data is lowercase with no `0x` prefix
//! - Decoding never panics on short or inconsistent input

pub mod calldata;
pub mod selector;
pub mod string;
pub mod types;

pub use calldata::{decode_get_value_result, deploy_data, get_value_call_data, update_call_data};
pub use selector::hash_selector;
pub use string::{decode_string_arg, encode_string_arg};
pub use types::{AbiError, AbiResult, Selector};
