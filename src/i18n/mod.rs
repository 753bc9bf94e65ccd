mod translations;

pub use translations::{
    parse_accept_language, TranslationTable, Translations, DEFAULT_LOCALE,
};
