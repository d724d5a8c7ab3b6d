use std::net::SocketAddr;
use std::path::Path;

use menagerie_gate::GateConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Configuration for the menagerie API server.
///
/// Every field has a sensible default, so a missing or partial TOML file is
/// fine; anything not set falls back to [`Default`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the server listens on.
    pub bind_addr: SocketAddr,
    /// Access-gate settings shared by all guarded endpoints.
    pub gate: GateConfig,
    /// Upper bound on a request body, creature image included.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            gate: GateConfig::default(),
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    /// Parses configuration from TOML text.
    pub fn parse(raw: &str) -> ServerResult<Self> {
        toml::from_str(raw).map_err(|e| ServerError::Config(e.to_string()))
    }
}
