use anyhow::{Context, Result};
use std::{sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::{header, Method},
    middleware,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
};
use tracing::info;

use super::artists::make_artists_routes;
use super::locale::make_locale_routes;
use super::pages::make_page_routes;
use super::proxy::{make_proxy_routes, ArtistApiProxy};
use super::{http_cache, log_requests, state::*, ServerConfig};

#[derive(Serialize)]
struct ApiInfo {
    pub base: &'static str,
    pub artists: &'static str,
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn api_info(State(state): State<ServerState>) -> Json<ApiInfo> {
    Json(ApiInfo {
        base: "/api",
        artists: "/api/artists",
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    })
}

fn api_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn make_app(
    config: ServerConfig,
    store: GuardedArtistStore,
    translations: GuardedTranslations,
) -> Result<Router> {
    let proxy = match &config.proxy {
        Some(settings) => {
            info!("Proxying /api/proxy to {}", settings.external_api_url);
            Some(Arc::new(ArtistApiProxy::new(settings)?))
        }
        None => None,
    };
    let state = ServerState::new(config.clone(), store, translations, proxy);

    let mut api_routes: Router = Router::new()
        .route("/api", get(api_info))
        .with_state(state.clone())
        .merge(make_artists_routes(state.clone()))
        .merge(make_locale_routes(state.clone()));

    if let Some(proxy_routes) = make_proxy_routes(&state) {
        api_routes = api_routes.merge(proxy_routes);
    }
    let api_routes = api_routes.layer(api_cors_layer());

    let static_routes: Router = Router::new()
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(middleware::from_fn_with_state(
            config.static_cache_age_sec,
            http_cache,
        ));

    let app: Router = make_page_routes(state.clone())
        .merge(api_routes)
        .merge(static_routes)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn_with_state(state, log_requests))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.request_timeout_sec,
                ))),
        );

    Ok(app)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Could not listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}

pub async fn run_server(
    config: ServerConfig,
    store: GuardedArtistStore,
    translations: GuardedTranslations,
    listen_address: &str,
) -> Result<()> {
    let app = make_app(config, store, translations)?;

    let listener = tokio::net::TcpListener::bind(listen_address)
        .await
        .with_context(|| format!("Could not bind {}", listen_address))?;
    info!("Server started on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
