use std::sync::Arc;

use menagerie_service::ResourceService;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// The menagerie API server: one resource service, one listening socket.
pub struct ApiServer {
    config: ServerConfig,
    service: Arc<ResourceService>,
}

impl ApiServer {
    /// Creates a server with empty stores from its configuration.
    pub fn new(config: ServerConfig) -> Self {
        let service = Arc::new(ResourceService::new(config.gate.clone()));
        Self { config, service }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Builds the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.service), self.config.max_body_bytes)
    }

    /// Binds the socket and serves requests until shutdown.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("menagerie API listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
