//! Fixture files for the test server: templates, static files, translations.

use super::constants::*;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const TRANSLATIONS_JSON: &str = r#"{
    "fr": {
        "artists.title": "Groupes",
        "artists.members": "Membres",
        "artists.creationDate": "Date de création",
        "artists.firstAlbum": "Premier album",
        "artists.locations": "Lieux",
        "artists.empty": "Aucun groupe",
        "home.title": "Accueil"
    },
    "en": {
        "artists.title": "Bands",
        "artists.members": "Members",
        "artists.creationDate": "Creation date",
        "artists.firstAlbum": "First album",
        "artists.locations": "Locations",
        "artists.empty": "No bands",
        "home.title": "Home"
    }
}"#;

pub struct Fixtures {
    pub dir: TempDir,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
    pub translations_path: PathBuf,
}

/// Creates a temporary directory holding templates, static files and a
/// fr/en translations file.
pub fn create_fixtures() -> Result<Fixtures> {
    let dir = TempDir::new()?;

    let templates_dir = dir.path().join("templates");
    fs::create_dir_all(&templates_dir)?;
    fs::write(templates_dir.join("home.html"), HOME_HTML)?;
    fs::write(templates_dir.join("artist.html"), ARTIST_HTML)?;

    let static_dir = dir.path().join("static");
    fs::create_dir_all(&static_dir)?;
    fs::write(static_dir.join("style.css"), STYLE_CSS)?;

    let translations_path = dir.path().join("translations.json");
    fs::write(&translations_path, TRANSLATIONS_JSON)?;

    Ok(Fixtures {
        dir,
        templates_dir,
        static_dir,
        translations_path,
    })
}
