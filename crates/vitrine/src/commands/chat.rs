//! Chat gateway command.

use std::path::Path;

use anyhow::Result;

use vitrine_chat::{ChatGateway, GatewayConfig};

use crate::config::load_config;

/// Run the chat gateway.
pub async fn run(config_path: &Path, port: u16, artifact_service: Option<String>) -> Result<()> {
    let file_config = load_config(config_path)?;

    let config = GatewayConfig {
        host: file_config.chat.host,
        port,
        artifact_service: artifact_service.unwrap_or(file_config.chat.artifact_service),
    };

    ChatGateway::new(config).start().await?;

    Ok(())
}
