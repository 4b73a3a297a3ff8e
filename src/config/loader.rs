//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the sender address.
pub const SENDER_ENV_VAR: &str = "MY_ETH_ADDR";

/// Environment variable overriding the node endpoint.
pub const RPC_URL_ENV_VAR: &str = "ETH_RPC_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse a TOML file into a configuration without validating it.
pub fn read_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Overlay values found through `lookup` (normally the process environment).
///
/// Empty values are ignored.
pub fn apply_overrides<F>(config: &mut ClientConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(address) = lookup(SENDER_ENV_VAR) {
        config.account.address = address.trim().to_string();
    }
    if let Some(url) = lookup(RPC_URL_ENV_VAR) {
        config.node.rpc_url = url.trim().to_string();
    }
}

/// Load configuration, then validate it.
///
/// Precedence, lowest first: defaults, the TOML file at `path`, the
/// environment, then `cli_overrides`.
pub fn load_config<F>(path: Option<&Path>, cli_overrides: F) -> Result<ClientConfig, ConfigError>
where
    F: FnOnce(&mut ClientConfig),
{
    load_config_with(path, |key| std::env::var(key).ok(), cli_overrides)
}

/// [`load_config`] with environment variables read through `lookup`.
pub fn load_config_with<L, F>(
    path: Option<&Path>,
    lookup: L,
    cli_overrides: F,
) -> Result<ClientConfig, ConfigError>
where
    L: Fn(&str) -> Option<String>,
    F: FnOnce(&mut ClientConfig),
{
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => ClientConfig::default(),
    };

    apply_overrides(&mut config, lookup);
    cli_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
