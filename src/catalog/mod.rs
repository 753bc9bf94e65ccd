mod artist;
mod load;
mod store;

pub use artist::{Artist, ArtistId};
pub use load::{fallback_artists, initial_artists, load_seed_artists};
pub use store::{ArtistStore, StoreError};
