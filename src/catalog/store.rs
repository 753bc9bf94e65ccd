//! In-memory artist store.
//!
//! All the records live in a single ordered `Vec` guarded by one mutex, together
//! with the id allocator. Every operation takes the lock for its whole duration,
//! so any two concurrent operations behave as if they ran one after the other.

use super::{Artist, ArtistId};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Artist {0} not found")]
    NotFound(ArtistId),
    #[error("No artist id left to allocate")]
    IdsExhausted,
}

#[derive(Debug)]
struct ArtistCollection {
    items: Vec<Artist>,
    // None once ArtistId::MAX has been handed out.
    next_id: Option<ArtistId>,
}

impl ArtistCollection {
    fn position(&self, id: ArtistId) -> Result<usize, StoreError> {
        self.items
            .iter()
            .position(|a| a.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

#[derive(Debug)]
pub struct ArtistStore {
    collection: Mutex<ArtistCollection>,
}

impl Default for ArtistStore {
    fn default() -> Self {
        ArtistStore {
            collection: Mutex::new(ArtistCollection {
                items: Vec::new(),
                next_id: Some(1),
            }),
        }
    }
}

impl ArtistStore {
    pub fn new(seed: Vec<Artist>) -> ArtistStore {
        let store = ArtistStore::default();
        store.initialize(seed);
        store
    }

    // A panic while holding the lock can't leave the collection half-written,
    // every mutation below is a single Vec operation.
    fn lock(&self) -> MutexGuard<'_, ArtistCollection> {
        self.collection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the whole collection, the next id becomes one more than the
    /// highest seeded id (or 1 for an empty seed). A seed holding
    /// `ArtistId::MAX` leaves no id to allocate.
    pub fn initialize(&self, seed: Vec<Artist>) {
        let next_id = match seed.iter().map(|a| a.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        let mut collection = self.lock();
        collection.items = seed;
        collection.next_id = next_id;
    }

    /// Returns a copy of the records whose name contains `filter`, ignoring
    /// case, in insertion order. No filter (or an empty one) matches all.
    pub fn list(&self, filter: Option<&str>) -> Vec<Artist> {
        let needle = filter.filter(|f| !f.is_empty()).map(str::to_lowercase);
        let collection = self.lock();
        match needle {
            None => collection.items.clone(),
            Some(needle) => collection
                .items
                .iter()
                .filter(|a| a.name_contains(&needle))
                .cloned()
                .collect(),
        }
    }

    /// Stores `artist` under a freshly allocated id, whatever id it carried.
    pub fn insert(&self, mut artist: Artist) -> Result<Artist, StoreError> {
        let mut collection = self.lock();
        let id = collection.next_id.ok_or(StoreError::IdsExhausted)?;
        artist.id = id;
        collection.next_id = id.checked_add(1);
        collection.items.push(artist.clone());
        Ok(artist)
    }

    pub fn replace(&self, id: ArtistId, artist: Artist) -> Result<Artist, StoreError> {
        let mut collection = self.lock();
        let index = collection.position(id)?;
        let stored = &mut collection.items[index];
        stored.replace_fields(artist);
        Ok(stored.clone())
    }

    pub fn delete(&self, id: ArtistId) -> Result<(), StoreError> {
        let mut collection = self.lock();
        let index = collection.position(id)?;
        collection.items.remove(index);
        Ok(())
    }

    pub fn get(&self, id: ArtistId) -> Result<Artist, StoreError> {
        let collection = self.lock();
        let index = collection.position(id)?;
        Ok(collection.items[index].clone())
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
