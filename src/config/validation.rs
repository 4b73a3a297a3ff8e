//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ClientConfig → Result<(), Vec<ValidationError>>

use std::fmt;
use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingSender,
    InvalidSender(String),
    InvalidRpcUrl(String),
    ZeroTimeout(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingSender => {
                write!(f, "sender address is not set (use MY_ETH_ADDR or --from)")
            }
            ValidationError::InvalidSender(addr) => {
                write!(f, "sender address '{}' is not 0x followed by 40 hex digits", addr)
            }
            ValidationError::InvalidRpcUrl(reason) => write!(f, "invalid RPC URL: {}", reason),
            ValidationError::ZeroTimeout(field) => write!(f, "{} must be greater than zero", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that `addr` looks like an account address.
pub fn is_valid_address(addr: &str) -> bool {
    addr.strip_prefix("0x")
        .map(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}

/// Validate a loaded configuration.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let sender = &config.account.address;
    if sender.is_empty() {
        errors.push(ValidationError::MissingSender);
    } else if !is_valid_address(sender) {
        errors.push(ValidationError::InvalidSender(sender.clone()));
    }

    match Url::parse(&config.node.rpc_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::InvalidRpcUrl(format!(
            "unsupported scheme '{}'",
            url.scheme()
        ))),
        Err(e) => errors.push(ValidationError::InvalidRpcUrl(e.to_string())),
    }

    if config.node.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("node.request_timeout_secs"));
    }
    if config.confirmation.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("confirmation.timeout_secs"));
    }
    if config.confirmation.poll_interval_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("confirmation.poll_interval_ms"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
