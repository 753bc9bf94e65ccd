//! Cache-Control header for successful responses

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

pub async fn http_cache(
    State(max_age_sec): State<usize>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    if response.status().is_success() {
        let value = HeaderValue::from_str(&format!("max-age={}", max_age_sec))
            .unwrap_or_else(|_| HeaderValue::from_static("no-cache"));
        response.headers_mut().insert(header::CACHE_CONTROL, value);
    }

    response
}
