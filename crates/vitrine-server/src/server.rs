//! Artifact service runtime.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::routes::{api_router, AppState};
use crate::store::{ArtifactStore, ARTIFACTS_PREFIX};

/// Configuration for the artifact service.
#[derive(Debug, Clone)]
pub struct ArtifactServerConfig {
    /// Directory rendered documents are written to and served from.
    pub artifacts_dir: PathBuf,

    /// Port to listen on.
    pub port: u16,

    /// Host to bind to.
    pub host: String,
}

impl Default for ArtifactServerConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from("artifacts"),
            port: 3001,
            host: "127.0.0.1".to_string(),
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),
}

/// The artifact store service.
pub struct ArtifactServer {
    config: ArtifactServerConfig,
}

impl ArtifactServer {
    /// Create a new artifact server.
    pub fn new(config: ArtifactServerConfig) -> Self {
        Self { config }
    }

    /// Build the full router: the JSON API plus static serving of the
    /// rendered documents.
    pub fn router(config: &ArtifactServerConfig) -> Router {
        let state = AppState {
            store: Arc::new(ArtifactStore::new(&config.artifacts_dir)),
            public_base: format!("http://{}:{}", config.host, config.port),
        };

        api_router()
            .nest_service(ARTIFACTS_PREFIX, ServeDir::new(&config.artifacts_dir))
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Start the artifact service.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .expect("Invalid address");

        let app = Self::router(&self.config);

        tracing::info!("Artifact service listening at http://{}", addr);
        tracing::info!("Documents served under http://{}{}/", addr, ARTIFACTS_PREFIX);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}
