use super::{Artist, ArtistId};
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Reads a JSON array of artists from `path`.
pub fn load_seed_artists<P: AsRef<Path>>(path: P) -> Result<Vec<Artist>> {
    let path = path.as_ref();
    let file_text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let artists: Vec<Artist> = serde_json::from_str(&file_text)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
    if artists.is_empty() {
        bail!("Seed file {} contains no artists", path.display());
    }
    if artists.iter().any(|a| a.id == ArtistId::MAX) {
        bail!(
            "Seed file {} uses id {}, no id would be left for new artists",
            path.display(),
            ArtistId::MAX
        );
    }
    Ok(artists)
}

/// Seed data for the store: the content of the seed file when it can be
/// used, otherwise the built-in fallback artists.
pub fn initial_artists<P: AsRef<Path>>(path: P) -> Vec<Artist> {
    match load_seed_artists(&path) {
        Ok(artists) => {
            info!(
                "Loaded {} artists from {}",
                artists.len(),
                path.as_ref().display()
            );
            artists
        }
        Err(err) => {
            warn!("{:#}, using fallback artists", err);
            fallback_artists()
        }
    }
}

pub fn fallback_artists() -> Vec<Artist> {
    vec![
        Artist {
            id: 1,
            image: String::new(),
            name: "Queen".to_owned(),
            members: vec![
                "Freddie Mercury".to_owned(),
                "Brian May".to_owned(),
                "John Deacon".to_owned(),
                "Roger Taylor".to_owned(),
            ],
            creation_date: 1970,
            first_album: "Queen".to_owned(),
            locations: "London, UK".to_owned(),
            concert_dates: "1973-07-13".to_owned(),
            relations: "none".to_owned(),
        },
        Artist {
            id: 2,
            image: String::new(),
            name: "Linkin Park".to_owned(),
            members: vec![
                "Chester Bennington".to_owned(),
                "Mike Shinoda".to_owned(),
                "Brad Delson".to_owned(),
                "Dave Farrell".to_owned(),
                "Rob Bourdon".to_owned(),
                "Joe Hahn".to_owned(),
            ],
            creation_date: 1996,
            first_album: "Hybrid Theory".to_owned(),
            locations: "Agoura Hills, California, USA".to_owned(),
            concert_dates: "2000-10-24".to_owned(),
            relations: "nu metal".to_owned(),
        },
    ]
}
