//! Artifact service command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use vitrine_server::{ArtifactServer, ArtifactServerConfig};

use crate::config::load_config;

/// Run the artifact store service.
pub async fn run(
    config_path: &Path,
    port: u16,
    artifacts_dir: Option<PathBuf>,
    open: bool,
) -> Result<()> {
    let file_config = load_config(config_path)?;

    let config = ArtifactServerConfig {
        host: file_config.server.host,
        port,
        artifacts_dir: artifacts_dir
            .unwrap_or_else(|| PathBuf::from(&file_config.server.artifacts_dir)),
    };

    if open {
        let url = format!("http://{}:{}/api/artifacts", config.host, config.port);
        let _ = open::that(&url);
    }

    ArtifactServer::new(config).start().await?;

    Ok(())
}
