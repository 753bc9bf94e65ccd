use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use artist_catalog_server::catalog::{initial_artists, ArtistStore};
use artist_catalog_server::config::{AppConfig, CliConfig, FileConfig};
use artist_catalog_server::i18n::Translations;
use artist_catalog_server::server::{run_server, RequestsLoggingLevel, ServerConfig};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file, its values override the command line ones.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The address to bind to.
    #[clap(long, default_value = "127.0.0.1")]
    pub bind_address: String,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 8080)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Maximum time in seconds spent serving a single request.
    #[clap(long, default_value_t = 10)]
    pub request_timeout_sec: u64,

    /// JSON file with the artists loaded at startup.
    #[clap(long, default_value = "api/artists.json")]
    pub data_path: PathBuf,

    /// JSON file with the translations, shaped as {locale: {key: value}}.
    #[clap(long, default_value = "i18n/translations.json")]
    pub translations_path: PathBuf,

    /// Directory holding the HTML page templates.
    #[clap(long, default_value = "templates")]
    pub templates_dir: PathBuf,

    /// Directory served under /static.
    #[clap(long, default_value = "static")]
    pub static_dir: PathBuf,

    /// The maximum age of static files in the cache in seconds.
    #[clap(long, default_value_t = 3600)]
    pub static_cache_age_sec: usize,

    /// Base URL of the external artist API served under /api/proxy.
    /// An empty value disables the proxy.
    #[clap(long)]
    pub external_api_url: Option<String>,

    /// Timeout in seconds for external API requests.
    #[clap(long, default_value_t = 10)]
    pub proxy_timeout_sec: u64,
}

impl From<&CliArgs> for CliConfig {
    fn from(args: &CliArgs) -> Self {
        CliConfig {
            bind_address: args.bind_address.clone(),
            port: args.port,
            logging_level: args.logging_level.clone(),
            request_timeout_sec: args.request_timeout_sec,
            data_path: args.data_path.clone(),
            translations_path: args.translations_path.clone(),
            templates_dir: args.templates_dir.clone(),
            static_dir: args.static_dir.clone(),
            static_cache_age_sec: args.static_cache_age_sec,
            external_api_url: args.external_api_url.clone(),
            proxy_timeout_sec: args.proxy_timeout_sec,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&CliConfig::from(&cli_args), file_config)?;

    let store = Arc::new(ArtistStore::new(initial_artists(&config.data_path)));
    info!("Artist store ready with {} artists", store.len());

    let translations = Arc::new(Translations::default());
    if let Err(err) = translations.load(&config.translations_path) {
        warn!("Could not load translations: {:#}", err);
    }
    if translations.locales_count() == 0 {
        warn!("No translations available, keys will be shown as is");
    }

    info!("Ready to serve at {}!", config.listen_address());
    run_server(
        ServerConfig::from(&config),
        store,
        translations,
        &config.listen_address(),
    )
    .await
}
