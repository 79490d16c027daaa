//! One-shot render command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use vitrine_render::{ArtifactDescriptor, Renderer};

/// Render a single descriptor to disk and print the document path.
pub async fn run(
    id: String,
    content_type: String,
    payload: PathBuf,
    language: Option<String>,
    component: Option<String>,
    output: PathBuf,
) -> Result<()> {
    let payload = tokio::fs::read_to_string(&payload)
        .await
        .with_context(|| format!("Failed to read payload from {}", payload.display()))?;

    let descriptor = ArtifactDescriptor {
        id,
        content_type,
        payload,
        language,
        component,
    };

    let path = Renderer::new(output).render(&descriptor).await?;

    tracing::info!("Rendered artifact {}", descriptor.id);
    println!("{}", path.display());

    Ok(())
}
