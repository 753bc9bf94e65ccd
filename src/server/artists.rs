//! JSON API over the artist store.
//!
//! `/api/artists` lists and creates, `/api/artists/{id}` reads, replaces and
//! deletes a single artist. Input is validated before the store is touched.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    routing::{any, get},
    Json, Router,
};
use tracing::debug;

use super::error::{method_not_allowed, ApiError};
use super::state::{GuardedArtistStore, ServerState};
use crate::catalog::{Artist, ArtistId};

/// Everything after `/api/artists/`. Extra segments or bytes that aren't
/// UTF-8 make an invalid id like any other non-integer.
type RawArtistId = Result<Path<String>, PathRejection>;

fn parse_artist_id(raw: &str) -> Result<ArtistId, ApiError> {
    raw.parse::<ArtistId>().map_err(|_| ApiError::InvalidId)
}

fn artist_id(raw: RawArtistId) -> Result<ArtistId, ApiError> {
    match raw {
        Ok(Path(raw)) => parse_artist_id(&raw),
        Err(rejection) => {
            debug!("Rejected artist id: {}", rejection);
            Err(ApiError::InvalidId)
        }
    }
}

// The body is decoded whatever its Content-Type, any id it carries is
// overwritten by the store. A `null` body stands for an all-default artist.
fn parse_artist_body(body: &[u8]) -> Result<Artist, ApiError> {
    serde_json::from_slice::<Option<Artist>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|err| {
            debug!("Rejected artist body: {}", err);
            ApiError::InvalidJson
        })
}

/// First `name` parameter, later repetitions are ignored.
fn name_filter(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str())
}

async fn list_artists(
    State(store): State<GuardedArtistStore>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<Artist>> {
    Json(store.list(name_filter(&params)))
}

async fn create_artist(
    State(store): State<GuardedArtistStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<Artist>), ApiError> {
    let artist = parse_artist_body(&body)?;
    let stored = store.insert(artist)?;
    debug!("Created artist {} \"{}\"", stored.id, stored.name);
    Ok((StatusCode::CREATED, Json(stored)))
}

async fn get_artist(
    State(store): State<GuardedArtistStore>,
    raw_id: RawArtistId,
) -> Result<Json<Artist>, ApiError> {
    let id = artist_id(raw_id)?;
    Ok(Json(store.get(id)?))
}

async fn put_artist(
    State(store): State<GuardedArtistStore>,
    raw_id: RawArtistId,
    body: Bytes,
) -> Result<Json<Artist>, ApiError> {
    let id = artist_id(raw_id)?;
    let artist = parse_artist_body(&body)?;
    Ok(Json(store.replace(id, artist)?))
}

async fn delete_artist(
    State(store): State<GuardedArtistStore>,
    raw_id: RawArtistId,
) -> Result<StatusCode, ApiError> {
    let id = artist_id(raw_id)?;
    store.delete(id)?;
    debug!("Deleted artist {}", id);
    Ok(StatusCode::NO_CONTENT)
}

async fn missing_artist_id() -> ApiError {
    ApiError::InvalidId
}

// The id is checked before the method.
async fn artist_method_not_allowed(raw_id: RawArtistId) -> ApiError {
    match artist_id(raw_id) {
        Ok(_) => ApiError::MethodNotAllowed,
        Err(err) => err,
    }
}

pub fn make_artists_routes(state: ServerState) -> Router {
    Router::new()
        .route(
            "/api/artists",
            get(list_artists)
                .post(create_artist)
                .fallback(method_not_allowed),
        )
        .route("/api/artists/", any(missing_artist_id))
        .route(
            "/api/artists/{*id}",
            get(get_artist)
                .put(put_artist)
                .delete(delete_artist)
                .fallback(artist_method_not_allowed),
        )
        .with_state(state)
}
