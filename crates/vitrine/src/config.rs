//! Configuration file loading (vitrine.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure (vitrine.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub chat: ChatSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_artifact_service")]
    pub artifact_service: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            artifacts_dir: default_artifacts_dir(),
        }
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            artifact_service: default_artifact_service(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_artifacts_dir() -> String {
    "artifacts".to_string()
}
fn default_artifact_service() -> String {
    "http://127.0.0.1:3001".to_string()
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
