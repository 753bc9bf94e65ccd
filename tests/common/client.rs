//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per server endpoint.
//! When routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

/// HTTP test client, keeping cookies between requests
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET on any path of the server
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    // ========================================================================
    // Artists
    // ========================================================================

    /// GET /api/artists
    pub async fn list_artists(&self) -> Response {
        self.get("/api/artists").await
    }

    /// GET /api/artists?name=
    pub async fn search_artists(&self, name: &str) -> Response {
        self.client
            .get(self.url("/api/artists"))
            .query(&[("name", name)])
            .send()
            .await
            .expect("Search request failed")
    }

    /// POST /api/artists
    pub async fn create_artist(&self, artist: &Value) -> Response {
        self.client
            .post(self.url("/api/artists"))
            .json(artist)
            .send()
            .await
            .expect("Create request failed")
    }

    /// POST /api/artists with a raw body
    pub async fn create_artist_raw(&self, body: &str) -> Response {
        self.client
            .post(self.url("/api/artists"))
            .header("content-type", "application/json")
            .body(body.to_owned())
            .send()
            .await
            .expect("Create request failed")
    }

    /// GET /api/artists/{id}
    pub async fn get_artist(&self, id: i64) -> Response {
        self.get(&format!("/api/artists/{}", id)).await
    }

    /// PUT /api/artists/{id}
    pub async fn replace_artist(&self, id: i64, artist: &Value) -> Response {
        self.client
            .put(self.url(&format!("/api/artists/{}", id)))
            .json(artist)
            .send()
            .await
            .expect("Replace request failed")
    }

    /// DELETE /api/artists/{id}
    pub async fn delete_artist(&self, id: i64) -> Response {
        self.client
            .delete(self.url(&format!("/api/artists/{}", id)))
            .send()
            .await
            .expect("Delete request failed")
    }

    // ========================================================================
    // Locale
    // ========================================================================

    /// GET /api/i18n
    pub async fn get_i18n(&self) -> Response {
        self.get("/api/i18n").await
    }

    /// GET /api/i18n?lang=
    pub async fn get_i18n_with_lang(&self, lang: &str) -> Response {
        self.client
            .get(self.url("/api/i18n"))
            .query(&[("lang", lang)])
            .send()
            .await
            .expect("i18n request failed")
    }

    /// GET /api/i18n with an Accept-Language header
    pub async fn get_i18n_with_accept_language(&self, accept_language: &str) -> Response {
        self.client
            .get(self.url("/api/i18n"))
            .header("accept-language", accept_language)
            .send()
            .await
            .expect("i18n request failed")
    }

    // ========================================================================
    // Proxy
    // ========================================================================

    /// GET /api/proxy/{path}
    pub async fn proxy(&self, path: &str) -> Response {
        self.get(&format!("/api/proxy/{}", path)).await
    }
}
