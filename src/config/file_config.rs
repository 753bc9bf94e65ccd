use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Server settings (override CLI)
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub logging_level: Option<String>,
    pub request_timeout_sec: Option<u64>,

    // Collaborator files
    pub data_path: Option<String>,
    pub translations_path: Option<String>,
    pub templates_dir: Option<String>,
    pub static_dir: Option<String>,
    pub static_cache_age_sec: Option<usize>,

    pub proxy: Option<ProxyConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ProxyConfig {
    /// Base URL of the external artist API, an empty string disables the proxy.
    pub external_api_url: Option<String>,
    pub timeout_sec: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
