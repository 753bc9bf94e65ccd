use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::state::{GuardedTranslations, ServerState};
use crate::i18n::Translations;

pub const LANG_COOKIE_KEY: &str = "lang";
pub const LANG_COOKIE_MAX_AGE_DAYS: i64 = 30;

#[derive(Deserialize, Debug, Default)]
pub struct LocaleQuery {
    pub lang: Option<String>,
}

#[derive(Serialize)]
struct LocaleResponse {
    lang: String,
    translations: HashMap<String, String>,
}

/// Locale for a request, from its `lang` query parameter, `lang` cookie and
/// `Accept-Language` header.
pub fn request_locale(
    translations: &Translations,
    query: &LocaleQuery,
    jar: &CookieJar,
    headers: &HeaderMap,
) -> String {
    let cookie = jar.get(LANG_COOKIE_KEY).map(Cookie::value);
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    translations.resolve(query.lang.as_deref(), cookie, accept_language)
}

async fn get_locale(
    State(translations): State<GuardedTranslations>,
    Query(query): Query<LocaleQuery>,
    jar: CookieJar,
    headers: HeaderMap,
) -> impl IntoResponse {
    let lang = request_locale(&translations, &query, &jar, &headers);

    let cookie = Cookie::build((LANG_COOKIE_KEY, lang.clone()))
        .path("/")
        .max_age(time::Duration::days(LANG_COOKIE_MAX_AGE_DAYS))
        .http_only(true)
        .build();

    let body = LocaleResponse {
        translations: translations.get_all(&lang),
        lang: lang.clone(),
    };
    (
        jar.add(cookie),
        [(header::CONTENT_LANGUAGE, lang)],
        Json(body),
    )
}

pub fn make_locale_routes(state: ServerState) -> Router {
    Router::new()
        .route("/api/i18n", get(get_locale))
        .with_state(state)
}
