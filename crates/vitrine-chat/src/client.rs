//! HTTP client for the artifact store's create interface.

use serde::{Deserialize, Serialize};

use vitrine_render::ArtifactDescriptor;

/// Errors from the artifact store client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Artifact service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Artifact service rejected {id}: {message}")]
    Rejected { id: String, message: String },
}

/// An artifact reference returned by the store's create interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedArtifact {
    pub id: String,
    pub url: String,
    #[serde(rename = "previewUrl", default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

/// Client for the artifact store's create endpoint.
#[derive(Debug, Clone)]
pub struct ArtifactClient {
    base_url: String,
    http: reqwest::Client,
}

impl ArtifactClient {
    /// Create a client for the given artifact service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// The configured artifact service base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create (or overwrite) an artifact through the store.
    pub async fn create(
        &self,
        descriptor: &ArtifactDescriptor,
    ) -> Result<CreatedArtifact, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/artifacts/create", self.base_url))
            .json(descriptor)
            .send()
            .await?;

        let status = response.status();
        let body: serde_json::Value = response.json().await?;

        if !status.is_success() || body["success"].as_bool() != Some(true) {
            let message = body["error"].as_str().unwrap_or("unknown error").to_string();
            return Err(ClientError::Rejected {
                id: descriptor.id.clone(),
                message,
            });
        }

        Ok(CreatedArtifact {
            id: body["id"].as_str().unwrap_or(&descriptor.id).to_string(),
            url: body["url"].as_str().unwrap_or_default().to_string(),
            preview_url: body["previewUrl"].as_str().map(str::to_string),
        })
    }
}
