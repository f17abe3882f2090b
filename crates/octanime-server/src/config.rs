//! Server configuration loaded from the environment

use std::net::SocketAddr;

use crate::error::ConfigError;

/// Environment variable holding the listen address
pub const BIND_ADDR_VAR: &str = "OCTANIME_BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Process-level settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read settings from the process environment
    ///
    /// # Errors
    /// Returns `InvalidBindAddr` if `OCTANIME_BIND_ADDR` is set but unparseable
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var(BIND_ADDR_VAR).ok())
    }

    fn from_value(value: Option<String>) -> Result<Self, ConfigError> {
        let value = value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let parsed: Result<SocketAddr, _> = value.trim().parse();
        let bind_addr = parsed.map_err(|source| ConfigError::InvalidBindAddr { value, source })?;

        Ok(Self { bind_addr })
    }
}
