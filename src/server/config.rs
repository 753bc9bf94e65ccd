use super::RequestsLoggingLevel;
use crate::config::{AppConfig, ProxySettings};
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
    pub static_cache_age_sec: usize,
    pub request_timeout_sec: u64,
    pub proxy: Option<ProxySettings>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            templates_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
            static_cache_age_sec: 3600,
            request_timeout_sec: 10,
            proxy: None,
        }
    }
}

impl From<&AppConfig> for ServerConfig {
    fn from(config: &AppConfig) -> Self {
        ServerConfig {
            requests_logging_level: config.logging_level.clone(),
            templates_dir: config.templates_dir.clone(),
            static_dir: config.static_dir.clone(),
            static_cache_age_sec: config.static_cache_age_sec,
            request_timeout_sec: config.request_timeout_sec,
            proxy: config.proxy.clone(),
        }
    }
}
