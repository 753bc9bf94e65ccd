//! Artist Catalog Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog;
pub mod config;
pub mod i18n;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog::{Artist, ArtistId, ArtistStore};
pub use i18n::Translations;
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
