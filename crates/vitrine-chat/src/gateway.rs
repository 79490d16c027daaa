//! Chat gateway service.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::client::{ArtifactClient, ClientError, CreatedArtifact};
use crate::protocol::{ClientMessage, ServerMessage};
use crate::responder;

/// Configuration for the chat gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Port to listen on.
    pub port: u16,

    /// Host to bind to.
    pub host: String,

    /// Base URL of the artifact service.
    pub artifact_service: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
            artifact_service: "http://127.0.0.1:3001".to_string(),
        }
    }
}

/// Errors that can occur with the gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),
}

/// Shared gateway state.
pub struct GatewayState {
    client: ArtifactClient,
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
    #[serde(rename = "userId", default)]
    user_id: Option<String>,
}

/// Build the gateway router.
pub fn router(config: &GatewayConfig) -> Router {
    let state = Arc::new(GatewayState {
        client: ArtifactClient::new(config.artifact_service.clone()),
    });

    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/ws", get(ws_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn chat_handler(
    State(state): State<Arc<GatewayState>>,
    Json(req): Json<ChatRequest>,
) -> Response {
    let user = req.user_id.as_deref().unwrap_or("anonymous");
    tracing::info!("Processing message from {}", user);

    match process_message(&state, &req.message).await {
        Ok((text, artifacts)) => Json(serde_json::json!({
            "success": true,
            "response": text,
            "artifacts": artifacts,
        }))
        .into_response(),
        Err(e) => {
            tracing::error!("Chat processing failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "success": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Run the responder and create every draft it produced through the store,
/// before the reply goes back to the caller.
async fn process_message(
    state: &GatewayState,
    message: &str,
) -> Result<(String, Vec<CreatedArtifact>), ClientError> {
    let reply = responder::respond(message);

    let mut artifacts = Vec::with_capacity(reply.drafts.len());
    for draft in &reply.drafts {
        tracing::info!("Creating artifact {} ({})", draft.id, draft.content_type);
        artifacts.push(state.client.create(draft).await?);
    }

    Ok((reply.text, artifacts))
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<GatewayState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle one chat socket: each inbound message gets exactly one reply.
async fn handle_socket(mut socket: WebSocket, state: Arc<GatewayState>) {
    while let Some(Ok(message)) = socket.recv().await {
        let Message::Text(text) = message else {
            continue;
        };

        let reply = match serde_json::from_str::<ClientMessage>(&text) {
            Ok(ClientMessage::ChatMessage { message, .. }) => {
                match process_message(&state, &message).await {
                    Ok((response, artifacts)) => ServerMessage::ChatResponse {
                        response,
                        artifacts,
                    },
                    Err(e) => ServerMessage::ChatError {
                        error: e.to_string(),
                    },
                }
            }
            Err(e) => ServerMessage::ChatError {
                error: format!("Invalid message: {}", e),
            },
        };

        let json = serde_json::to_string(&reply).unwrap();
        if socket.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }
}

/// The chat gateway service.
pub struct ChatGateway {
    config: GatewayConfig,
}

impl ChatGateway {
    /// Create a new chat gateway.
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    /// Start the gateway.
    pub async fn start(self) -> Result<(), GatewayError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .expect("Invalid address");

        let app = router(&self.config);

        tracing::info!("Chat gateway listening at http://{}", addr);
        tracing::info!("Artifact service expected at {}", self.config.artifact_service);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| GatewayError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}
