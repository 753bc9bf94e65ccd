//! HTML front end: static page templates and the rendered artists list.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use std::path::Path;
use tracing::error;

use super::locale::{request_locale, LocaleQuery};
use super::state::ServerState;
use super::ServerConfig;
use crate::catalog::Artist;
use crate::i18n::Translations;

pub const HOME_TEMPLATE: &str = "home.html";
pub const ARTIST_TEMPLATE: &str = "artist.html";

async fn serve_template(templates_dir: &Path, name: &str) -> Response {
    let path = templates_dir.join(name);
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!("Could not read template {}: {}", path.display(), err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

async fn home(State(config): State<ServerConfig>) -> Response {
    serve_template(&config.templates_dir, HOME_TEMPLATE).await
}

async fn artist_page(State(config): State<ServerConfig>) -> Response {
    serve_template(&config.templates_dir, ARTIST_TEMPLATE).await
}

async fn artists_page(
    State(state): State<ServerState>,
    Query(query): Query<LocaleQuery>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Html<String> {
    let lang = request_locale(&state.translations, &query, &jar, &headers);
    let artists = state.store.list(None);
    Html(render_artists_page(&artists, &state.translations, &lang))
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_artist_card(artist: &Artist, t: &dyn Fn(&str) -> String) -> String {
    let members: String = artist
        .members
        .iter()
        .map(|m| format!("<li>{}</li>", escape_html(m)))
        .collect();
    let image = if artist.image.is_empty() {
        String::new()
    } else {
        format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(&artist.image),
            escape_html(&artist.name)
        )
    };
    format!(
        r#"<article class="note-card" data-id="{id}" tabindex="0">
  {image}
  <h2>{name}</h2>
  <p><strong>{creation_label}:</strong> {creation_date}</p>
  <p><strong>{album_label}:</strong> {first_album}</p>
  <p><strong>{members_label}:</strong></p>
  <ul>{members}</ul>
  <p><strong>{locations_label}:</strong> {locations}</p>
</article>"#,
        id = artist.id,
        image = image,
        name = escape_html(&artist.name),
        creation_label = escape_html(&t("artists.creationDate")),
        creation_date = artist.creation_date,
        album_label = escape_html(&t("artists.firstAlbum")),
        first_album = escape_html(&artist.first_album),
        members_label = escape_html(&t("artists.members")),
        members = members,
        locations_label = escape_html(&t("artists.locations")),
        locations = escape_html(&artist.locations),
    )
}

pub fn render_artists_page(artists: &[Artist], translations: &Translations, lang: &str) -> String {
    let t = |key: &str| translations.get(lang, key);
    let cards: String = if artists.is_empty() {
        format!("<p>{}</p>", escape_html(&t("artists.empty")))
    } else {
        artists
            .iter()
            .map(|a| render_artist_card(a, &t))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <h1>{title}</h1>
  <main class="notes">
{cards}
  </main>
  <script src="/static/app.js"></script>
</body>
</html>
"#,
        lang = escape_html(lang),
        title = escape_html(&t("artists.title")),
        cards = cards,
    )
}

pub fn make_page_routes(state: ServerState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/groupes", get(artists_page))
        .route("/artist", get(artist_page))
        .route("/artists/{id}", get(artist_page))
        .with_state(state)
}
