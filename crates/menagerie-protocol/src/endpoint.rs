/// HTTP endpoint paths served by the menagerie API.
pub mod endpoints {
    pub const HEALTH: &str = "/health";
    pub const API_DOCS: &str = "/api-docs";
    pub const MESSAGES: &str = "/messages";
    pub const CREATURES: &str = "/creatures";
    pub const CREATURE: &str = "/creatures/:id";
    pub const CREATURE_IMAGE: &str = "/creatures/:id/image";
}

/// Request header carrying the API key on guarded endpoints.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
