use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use menagerie_protocol::{
    Ack, CreatureRecord, ErrorResponse, HealthResponse, MessagesResponse,
    PostMessageRequest, PostMessageResponse, RenameCreatureRequest, API_KEY_HEADER,
};
use menagerie_service::{CreatureSubmission, ResourceService, ServiceError};
use menagerie_types::{CreatureId, ImageBlob};

use crate::docs;
use crate::error::ApiError;

/// Pulls the API key out of the request headers, if one was sent.
fn credential(headers: &HeaderMap) -> Option<&str> {
    headers.get(API_KEY_HEADER).and_then(|value| value.to_str().ok())
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Serves the OpenAPI document.
pub async fn api_docs_handler() -> Json<serde_json::Value> {
    Json(docs::openapi_document())
}

/// GET /messages — guarded listing of all messages.
pub async fn get_messages_handler(
    State(service): State<Arc<ResourceService>>,
    headers: HeaderMap,
) -> Result<Json<MessagesResponse>, ApiError> {
    let messages = service.messages(credential(&headers))?;
    Ok(Json(MessagesResponse::from(messages)))
}

/// POST /messages — guarded append.
///
/// A rejected message answers 400 with the fixed
/// `{"success":false,"message":"No message provided"}` body rather than the
/// uniform error shape; everything else goes through [`ApiError`].
pub async fn post_message_handler(
    State(service): State<Arc<ResourceService>>,
    headers: HeaderMap,
    Json(body): Json<PostMessageRequest>,
) -> Response {
    match service.post_message(credential(&headers), body.message.as_deref()) {
        Ok(message) => {
            Json(PostMessageResponse::accepted(message.into_string())).into_response()
        }
        Err(ServiceError::Validation(_)) => {
            (StatusCode::BAD_REQUEST, Json(PostMessageResponse::rejected())).into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

/// GET /creatures — open listing; image payloads are replaced by compact
/// references.
pub async fn list_creatures_handler(
    State(service): State<Arc<ResourceService>>,
) -> Json<Vec<CreatureRecord>> {
    let records = service
        .creatures()
        .iter()
        .map(CreatureRecord::from)
        .collect();
    Json(records)
}

/// POST /creatures — open creation from a multipart form.
///
/// Recognized fields are `name`, `description`, `elements`, and the `image`
/// file; anything else is ignored. Defaulting and elements parsing live in
/// the service layer, so an empty form still creates a creature.
pub async fn create_creature_handler(
    State(service): State<Arc<ResourceService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<CreatureRecord>), ApiError> {
    let mut submission = CreatureSubmission::default();

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("name") => submission.name = Some(field.text().await?),
            Some("description") => submission.description = Some(field.text().await?),
            Some("elements") => submission.elements = Some(field.text().await?),
            Some("image") => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await?;
                submission.image = Some(ImageBlob::new(content_type, data));
            }
            _ => {}
        }
    }

    let creature = service.create_creature(submission);
    Ok((StatusCode::CREATED, Json(CreatureRecord::from(&creature))))
}

/// PUT /creatures/:id — rename.
pub async fn rename_creature_handler(
    State(service): State<Arc<ResourceService>>,
    Path(id): Path<u64>,
    Json(body): Json<RenameCreatureRequest>,
) -> Result<Json<Ack>, ApiError> {
    service.rename_creature(CreatureId::new(id), &body.name)?;
    Ok(Json(Ack::ok("Creature name updated")))
}

/// GET /creatures/:id/image — the raw stored payload under its stored
/// content type. Missing creature and missing attachment both answer 404.
pub async fn creature_image_handler(
    State(service): State<Arc<ResourceService>>,
    Path(id): Path<u64>,
) -> Response {
    let image = service
        .creature(CreatureId::new(id))
        .and_then(|creature| creature.image);

    match image {
        Some(blob) => {
            ([(header::CONTENT_TYPE, blob.content_type)], blob.data).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Creature not found")),
        )
            .into_response(),
    }
}
