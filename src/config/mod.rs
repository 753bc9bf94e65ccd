mod file_config;

pub use file_config::{FileConfig, ProxyConfig};

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_EXTERNAL_API_URL: &str = "https://groupietrackers.herokuapp.com/api";

/// CLI arguments that can be used for config resolution.
/// TOML config values take precedence over these.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub bind_address: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub request_timeout_sec: u64,
    pub data_path: PathBuf,
    pub translations_path: PathBuf,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
    pub static_cache_age_sec: usize,
    pub external_api_url: Option<String>,
    pub proxy_timeout_sec: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            bind_address: "127.0.0.1".to_owned(),
            port: 8080,
            logging_level: RequestsLoggingLevel::Path,
            request_timeout_sec: 10,
            data_path: PathBuf::from("api/artists.json"),
            translations_path: PathBuf::from("i18n/translations.json"),
            templates_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
            static_cache_age_sec: 3600,
            external_api_url: None,
            proxy_timeout_sec: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub request_timeout_sec: u64,

    pub data_path: PathBuf,
    pub translations_path: PathBuf,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
    pub static_cache_age_sec: usize,

    pub proxy: Option<ProxySettings>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySettings {
    pub external_api_url: String,
    pub timeout_sec: u64,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let bind_address = file
            .bind_address
            .unwrap_or_else(|| cli.bind_address.clone());
        let port = file.port.unwrap_or(cli.port);

        let logging_level = match file.logging_level {
            Some(s) => match parse_logging_level(&s) {
                Some(level) => level,
                None => bail!("Invalid logging_level in config file: {}", s),
            },
            None => cli.logging_level.clone(),
        };

        let request_timeout_sec = file.request_timeout_sec.unwrap_or(cli.request_timeout_sec);
        if request_timeout_sec == 0 {
            bail!("request_timeout_sec must be greater than 0");
        }

        let data_path = file
            .data_path
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.data_path.clone());
        let translations_path = file
            .translations_path
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.translations_path.clone());
        let templates_dir = file
            .templates_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.templates_dir.clone());
        let static_dir = file
            .static_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.static_dir.clone());
        let static_cache_age_sec = file
            .static_cache_age_sec
            .unwrap_or(cli.static_cache_age_sec);

        let proxy_file = file.proxy.unwrap_or_default();
        let external_api_url = proxy_file
            .external_api_url
            .or_else(|| cli.external_api_url.clone())
            .unwrap_or_else(|| DEFAULT_EXTERNAL_API_URL.to_owned());
        let proxy = if external_api_url.trim().is_empty() {
            None
        } else {
            if !external_api_url.starts_with("http://") && !external_api_url.starts_with("https://")
            {
                bail!("external_api_url must be an http(s) URL: {}", external_api_url);
            }
            Some(ProxySettings {
                external_api_url: external_api_url.trim_end_matches('/').to_owned(),
                timeout_sec: proxy_file.timeout_sec.unwrap_or(cli.proxy_timeout_sec),
            })
        };

        Ok(Self {
            bind_address,
            port,
            logging_level,
            request_timeout_sec,
            data_path,
            translations_path,
            templates_dir,
            static_dir,
            static_cache_age_sec,
            proxy,
        })
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
