//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own store and fixture files.

use super::constants::*;
use super::fixtures::{create_fixtures, Fixtures};
use artist_catalog_server::catalog::{fallback_artists, ArtistStore};
use artist_catalog_server::config::ProxySettings;
use artist_catalog_server::i18n::Translations;
use artist_catalog_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Spawns `app` on a random local port, returning its base URL and the
/// channel that shuts it down.
async fn serve_on_random_port(app: Router) -> (String, u16, oneshot::Sender<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let port = listener
        .local_addr()
        .expect("Failed to get local address")
        .port();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .expect("Server failed");
    });

    (format!("http://127.0.0.1:{}", port), port, shutdown_tx)
}

/// Test server instance with its own artist store
///
/// When dropped, the server gracefully shuts down and temp files are removed.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    pub port: u16,

    /// The store behind the server, for direct inspection in tests
    pub store: Arc<ArtistStore>,

    _fixtures: Fixtures,
    _shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a server seeded with the fallback artists and no proxy.
    pub async fn spawn() -> Self {
        Self::spawn_with_proxy(None).await
    }

    /// Spawns a server whose `/api/proxy` forwards to `external_api_url`.
    ///
    /// # Panics
    ///
    /// Panics if fixture creation, port binding or startup fails.
    pub async fn spawn_with_proxy(external_api_url: Option<String>) -> Self {
        let fixtures = create_fixtures().expect("Failed to create fixtures");

        let store = Arc::new(ArtistStore::new(fallback_artists()));
        let translations = Arc::new(Translations::default());
        translations
            .load(&fixtures.translations_path)
            .expect("Failed to load translations");

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            templates_dir: fixtures.templates_dir.clone(),
            static_dir: fixtures.static_dir.clone(),
            static_cache_age_sec: STATIC_CACHE_AGE_SEC,
            request_timeout_sec: 10,
            proxy: external_api_url.map(|external_api_url| ProxySettings {
                external_api_url,
                timeout_sec: 2,
            }),
        };

        let app = make_app(config, store.clone(), translations).expect("Failed to build app");
        let (base_url, port, shutdown_tx) = serve_on_random_port(app).await;

        let server = Self {
            base_url,
            port,
            store,
            _fixtures: fixtures,
            _shutdown_tx: Some(shutdown_tx),
        };
        server.wait_for_ready().await;
        server
    }

    /// Waits for the server to become ready by polling the /api endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/api", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Stand-in for the external artist API.
///
/// Serves `/api/artists` as JSON and `/api/teapot` with a 418.
pub struct MockUpstream {
    /// Base URL to configure as the external API url (ends with `/api`)
    pub api_url: String,
    _shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockUpstream {
    pub async fn spawn() -> Self {
        let app = Router::new()
            .route(
                "/api/artists",
                get(|| async {
                    Json(json!([
                        {"id": 1, "name": "Queen", "members": ["Freddie Mercury"]},
                        {"id": 2, "name": "SOJA", "members": ["Jacob Hemphill"]}
                    ]))
                }),
            )
            .route(
                "/api/teapot",
                get(|| async { (StatusCode::IM_A_TEAPOT, "short and stout") }),
            );
        let (base_url, _, shutdown_tx) = serve_on_random_port(app).await;

        Self {
            api_url: format!("{}/api", base_url),
            _shutdown_tx: Some(shutdown_tx),
        }
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
