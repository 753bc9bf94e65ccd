//! Same-origin proxy to the external artist API.
//!
//! `GET /api/proxy/{*path}` is forwarded to `<external_api_url>/<path>`, so the
//! front end can read upstream resources without cross-origin requests.

use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::error::ApiError;
use super::state::ServerState;
use crate::config::ProxySettings;

pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        if let Some(content_type) = self.content_type {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, content_type);
        }
        response
    }
}

/// HTTP client for the external artist API.
pub struct ArtistApiProxy {
    client: reqwest::Client,
    base_url: Url,
}

impl ArtistApiProxy {
    pub fn new(settings: &ProxySettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_sec))
            .build()
            .context("Failed to create HTTP client")?;
        let base_url = Url::parse(&settings.external_api_url)
            .with_context(|| format!("Invalid external API url {}", settings.external_api_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("External API url {} can't be a base", base_url);
        }
        Ok(Self { client, base_url })
    }

    /// Upstream URL for a proxied `path`, rejecting any path walking out of
    /// the base URL.
    pub fn upstream_url(&self, path: &str, query: Option<&str>) -> Result<Url, ApiError> {
        if path.split('/').any(|segment| segment == "..") {
            return Err(ApiError::InvalidPath);
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidPath)?
            .pop_if_empty()
            .extend(path.split('/').filter(|s| !s.is_empty()));
        url.set_query(query.filter(|q| !q.is_empty()));
        Ok(url)
    }

    pub async fn fetch(&self, path: &str, query: Option<&str>) -> Result<UpstreamResponse, ApiError> {
        let url = self.upstream_url(path, query)?;
        debug!("Proxying GET {}", url);
        let response = self.client.get(url.clone()).send().await.map_err(|err| {
            warn!("Upstream request to {} failed: {}", url, err);
            ApiError::Upstream
        })?;

        let status = response.status();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response.bytes().await.map_err(|err| {
            warn!("Could not read upstream response from {}: {}", url, err);
            ApiError::Upstream
        })?;

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}

async fn proxy_get(
    State(proxy): State<Arc<ArtistApiProxy>>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<UpstreamResponse, ApiError> {
    proxy.fetch(&path, query.as_deref()).await
}

/// Proxy routes, only when an external API is configured.
pub fn make_proxy_routes(state: &ServerState) -> Option<Router> {
    let proxy = state.proxy.clone()?;
    Some(
        Router::new()
            .route("/api/proxy/{*path}", get(proxy_get))
            .with_state(proxy),
    )
}
