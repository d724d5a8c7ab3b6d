use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use menagerie_protocol::endpoints;
use menagerie_service::ResourceService;

use crate::handler;

/// Builds the axum router with all menagerie endpoints.
pub fn build_router(service: Arc<ResourceService>, max_body_bytes: usize) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::API_DOCS, get(handler::api_docs_handler))
        .route(
            endpoints::MESSAGES,
            get(handler::get_messages_handler).post(handler::post_message_handler),
        )
        .route(
            endpoints::CREATURES,
            get(handler::list_creatures_handler).post(handler::create_creature_handler),
        )
        .route(endpoints::CREATURE, put(handler::rename_creature_handler))
        .route(endpoints::CREATURE_IMAGE, get(handler::creature_image_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}
