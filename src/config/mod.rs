//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (MY_ETH_ADDR, ETH_RPC_URL)
//!     → command-line overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - The sender address lives here, never in global state
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_with, ConfigError};
pub use schema::{AccountConfig, ClientConfig, ConfirmationConfig, NodeConfig, ObservabilityConfig};
pub use validation::{validate_config, ValidationError};
