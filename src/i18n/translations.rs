use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};
use tracing::info;

pub const DEFAULT_LOCALE: &str = "fr";

pub type TranslationTable = HashMap<String, HashMap<String, String>>;

/// Translation strings keyed by locale then by key.
///
/// Written once when loaded, read by every request afterwards.
#[derive(Debug, Default)]
pub struct Translations {
    table: RwLock<TranslationTable>,
}

impl Translations {
    pub fn from_table(table: TranslationTable) -> Translations {
        Translations {
            table: RwLock::new(table),
        }
    }

    /// Replaces the table with the content of a `{locale: {key: value}}`
    /// JSON file. On error the current table is left untouched.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file_text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read translations {}", path.display()))?;
        let table: TranslationTable = serde_json::from_str(&file_text)
            .with_context(|| format!("Failed to parse translations {}", path.display()))?;
        info!("Loaded translations for {} locales", table.len());
        *self
            .table
            .write()
            .unwrap_or_else(PoisonError::into_inner) = table;
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, TranslationTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.read().contains_key(locale)
    }

    pub fn locales_count(&self) -> usize {
        self.read().len()
    }

    /// Looks `key` up in `locale`, then in the default locale, and gives
    /// back the key itself when neither has it.
    pub fn get(&self, locale: &str, key: &str) -> String {
        let table = self.read();
        [locale, DEFAULT_LOCALE]
            .iter()
            .find_map(|l| table.get(*l).and_then(|entries| entries.get(key)))
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }

    /// All the strings of `locale`, or of the default locale when `locale`
    /// is unknown.
    pub fn get_all(&self, locale: &str) -> HashMap<String, String> {
        let table = self.read();
        table
            .get(locale)
            .or_else(|| table.get(DEFAULT_LOCALE))
            .cloned()
            .unwrap_or_default()
    }

    /// Picks the first candidate naming a known locale, in the order query
    /// parameter, cookie, `Accept-Language` header.
    pub fn resolve(
        &self,
        query: Option<&str>,
        cookie: Option<&str>,
        accept_language: Option<&str>,
    ) -> String {
        let from_header = accept_language.and_then(parse_accept_language);
        let locale = [query, cookie, from_header.as_deref()]
            .into_iter()
            .flatten()
            .filter(|candidate| !candidate.is_empty())
            .find(|candidate| self.has_locale(candidate))
            .unwrap_or(DEFAULT_LOCALE)
            .to_owned();
        locale
    }
}

/// Primary language of the first `Accept-Language` entry, lowercased and
/// stripped of its quality value and region (`en-US;q=0.8` gives `en`).
pub fn parse_accept_language(header: &str) -> Option<String> {
    let first = header.split(',').next()?.trim();
    let tag = first.split(';').next()?.trim();
    let language = tag.split('-').next()?.trim();
    if language.is_empty() {
        return None;
    }
    Some(language.to_lowercase())
}
