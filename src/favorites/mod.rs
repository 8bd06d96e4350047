mod store;

pub use store::{DirectoryStore, KeyValueStore, MemoryStore, StoreError};

use log::{error, warn};
use std::collections::HashSet;
use thiserror::Error;

/// Storage key the favorites blob lives under.
pub const FAVORITES_STORAGE_KEY: &str = "recipeApp_favorites";

/// The set of favorited recipe ids.
///
/// The whole set persists as one JSON array of ids under
/// [`FAVORITES_STORAGE_KEY`]. Loading is forgiving: a missing, unreadable
/// or malformed blob yields the empty set, so a bad favorites file can
/// never keep a catalog from opening.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: HashSet<u32>,
}

#[derive(Error, Debug)]
pub enum FavoritesError {
    #[error("Failed to access favorites storage: {0}")]
    StoreError(#[from] StoreError),

    #[error("Stored favorites are not a JSON id array: {0}")]
    FormatError(#[from] serde_json::Error),
}

impl FavoriteSet {
    pub fn new() -> Self {
        FavoriteSet::default()
    }

    /// Whether `id` is currently favorited.
    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Returns a copy of this set with `id` flipped: added when absent,
    /// removed when present. Toggling the same id twice restores the
    /// original set.
    pub fn toggled(&self, id: u32) -> FavoriteSet {
        let mut ids = self.ids.clone();
        if !ids.insert(id) {
            ids.remove(&id);
        }
        FavoriteSet { ids }
    }

    /// Returns the favorited ids in ascending order.
    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Loads the favorites from `store`, falling back to the empty set on
    /// any failure. The failure is logged, not surfaced.
    pub fn load(store: &dyn KeyValueStore) -> FavoriteSet {
        match FavoriteSet::try_load(store) {
            Ok(favorites) => favorites,
            Err(err) => {
                warn!("Falling back to empty favorites: {err}");
                FavoriteSet::new()
            }
        }
    }

    /// Loads the favorites from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the blob is not a
    /// JSON array of ids. A missing blob is not an error, it loads as the
    /// empty set.
    pub fn try_load(store: &dyn KeyValueStore) -> Result<FavoriteSet, FavoritesError> {
        let ids: Vec<u32> = match store.get(FAVORITES_STORAGE_KEY)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        Ok(ids.into_iter().collect())
    }

    /// Persists the favorites to `store`, logging instead of surfacing any
    /// failure.
    pub fn save(&self, store: &dyn KeyValueStore) {
        if let Err(err) = self.try_save(store) {
            error!("Failed to persist favorites: {err}");
        }
    }

    /// Persists the favorites to `store` as one JSON array, ids ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn try_save(&self, store: &dyn KeyValueStore) -> Result<(), FavoritesError> {
        let json = serde_json::to_string(&self.ids())?;
        store.set(FAVORITES_STORAGE_KEY, &json)?;
        Ok(())
    }
}

impl FromIterator<u32> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        FavoriteSet {
            ids: iter.into_iter().collect(),
        }
    }
}
