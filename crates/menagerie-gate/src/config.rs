use serde::{Deserialize, Serialize};

/// Configuration for the access gate.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// The single static API key that guarded operations require.
    pub api_key: String,
    /// When `true`, the gate admits every request without looking at the
    /// credential. Useful for local demos and tests.
    pub permissive: bool,
}

impl GateConfig {
    /// Demo key assumed when nothing else is configured.
    pub const DEFAULT_API_KEY: &'static str = "my-secret-api-key";

    /// A configuration requiring the given key.
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            permissive: false,
        }
    }

    /// A configuration that admits every request.
    ///
    /// Guarded endpoints behave exactly like unguarded ones under this
    /// configuration. Intended for local single-user use.
    pub fn permissive() -> Self {
        Self {
            permissive: true,
            ..Default::default()
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            api_key: Self::DEFAULT_API_KEY.to_string(),
            permissive: false,
        }
    }
}
