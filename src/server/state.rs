use axum::extract::FromRef;

use crate::catalog::ArtistStore;
use crate::i18n::Translations;
use std::sync::Arc;
use std::time::Instant;

use super::proxy::ArtistApiProxy;
use super::ServerConfig;

pub type GuardedArtistStore = Arc<ArtistStore>;
pub type GuardedTranslations = Arc<Translations>;
pub type OptionalProxy = Option<Arc<ArtistApiProxy>>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub store: GuardedArtistStore,
    pub translations: GuardedTranslations,
    pub proxy: OptionalProxy,
    pub hash: String,
}

impl ServerState {
    pub fn new(
        config: ServerConfig,
        store: GuardedArtistStore,
        translations: GuardedTranslations,
        proxy: OptionalProxy,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            store,
            translations,
            proxy,
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedArtistStore {
    fn from_ref(input: &ServerState) -> Self {
        input.store.clone()
    }
}

impl FromRef<ServerState> for GuardedTranslations {
    fn from_ref(input: &ServerState) -> Self {
        input.translations.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
