//! HTTP surface of the artifact store.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use vitrine_render::{ArtifactDescriptor, RenderError};

use crate::store::ArtifactStore;

/// Shared route state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ArtifactStore>,

    /// Base URL used to build absolute preview links.
    pub public_base: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateArtifactRequest {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub code: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub component: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArtifactRequest {
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub code: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub component: Option<String>,
}

/// Client-facing failure. The message is passed through unaltered.
enum ApiError {
    Validation(String),
    Render(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Render(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (
            status,
            Json(serde_json::json!({ "success": false, "error": message })),
        )
            .into_response()
    }
}

impl From<RenderError> for ApiError {
    fn from(error: RenderError) -> Self {
        match &error {
            RenderError::InvalidId(_) | RenderError::InvalidComponent(_) => {
                ApiError::Validation(error.to_string())
            }
            _ => ApiError::Render(error.to_string()),
        }
    }
}

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/artifacts/create", post(create_artifact))
        .route("/api/artifacts/{id}", put(update_artifact))
        .route("/api/artifacts", get(list_artifacts))
        .route("/health", get(health))
}

async fn create_artifact(
    State(state): State<AppState>,
    Json(req): Json<CreateArtifactRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (Some(id), Some(content_type), Some(code)) = (req.id, req.content_type, req.code) else {
        return Err(ApiError::Validation(
            "Missing required fields: id, type, and code are required".to_string(),
        ));
    };

    let descriptor = ArtifactDescriptor {
        id,
        content_type,
        payload: code,
        language: req.language,
        component: req.component,
    };

    let stored = state.store.put(&descriptor).await?;

    tracing::info!("Created artifact {}", stored.id);

    Ok(Json(serde_json::json!({
        "success": true,
        "id": stored.id,
        "url": stored.url,
        "previewUrl": format!("{}{}", state.public_base, stored.url),
    })))
}

async fn update_artifact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateArtifactRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (Some(content_type), Some(code)) = (req.content_type, req.code) else {
        return Err(ApiError::Validation(
            "Missing required fields: type and code are required".to_string(),
        ));
    };

    let descriptor = ArtifactDescriptor {
        id,
        content_type,
        payload: code,
        language: req.language,
        component: req.component,
    };

    let stored = state.store.put(&descriptor).await?;

    tracing::info!("Updated artifact {}", stored.id);

    Ok(Json(serde_json::json!({
        "success": true,
        "id": stored.id,
        "url": stored.url,
    })))
}

async fn list_artifacts(State(state): State<AppState>) -> Json<serde_json::Value> {
    let artifacts = state.store.list().await;

    Json(serde_json::json!({ "success": true, "artifacts": artifacts }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
