//! UniFFI bindings for cross-platform support (iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! Complex types are converted to simpler representations suitable for FFI.

use crate::catalog::{Catalog, CatalogError};
use crate::favorites::{DirectoryStore, FavoriteSet, KeyValueStore};
use crate::model::Recipe;
use crate::query::{query, FilterMode, QueryState, SortMode};
use crate::render;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum DeckError {
    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Recipe not found: {message}")]
    NotFound { message: String },
}

impl From<CatalogError> for DeckError {
    fn from(e: CatalogError) -> Self {
        DeckError::CatalogError {
            message: e.to_string(),
        }
    }
}

/// FFI-safe snapshot of one recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct DeckRecipe {
    pub id: u32,
    pub title: String,
    /// Total preparation time in minutes
    pub time: u32,
    /// Difficulty token: easy, medium or hard
    pub difficulty: String,
    pub description: String,
    pub category: String,
    pub ingredients: Vec<String>,
    /// Step tree rendered as nested list markup
    pub steps_html: String,
    /// Step tree as a JSON string for hosts that walk the raw structure
    pub steps_json: String,
    /// Favorite state at the time of the snapshot
    pub favorite: bool,
}

fn snapshot(recipe: &Recipe, favorites: &FavoriteSet) -> DeckRecipe {
    DeckRecipe {
        id: recipe.id,
        title: recipe.title.clone(),
        time: recipe.time,
        difficulty: recipe.difficulty.to_string(),
        description: recipe.description.clone(),
        category: recipe.category.clone(),
        ingredients: recipe.ingredients.clone(),
        steps_html: render::render_steps(&recipe.steps),
        steps_json: serde_json::to_string(&recipe.steps).unwrap_or_default(),
        favorite: favorites.contains(recipe.id),
    }
}

struct DeckState {
    query: QueryState,
    favorites: FavoriteSet,
}

/// A stateful deck handle for host shells.
///
/// The deck owns the catalog, the current query state and the favorites
/// set. UI events call the `set_*` and `toggle_favorite` methods, then the
/// shell reads the resulting view through `visible` or the render methods.
#[derive(uniffi::Object)]
pub struct RecipeDeck {
    catalog: Catalog,
    store: Box<dyn KeyValueStore>,
    state: Mutex<DeckState>,
}

#[uniffi::export]
impl RecipeDeck {
    /// Replaces the search query.
    pub fn set_search(&self, search: String) {
        let mut state = self.state();
        state.query = state.query.with_search(search);
    }

    /// Selects a filter by its key. Unknown keys select all recipes.
    pub fn set_filter(&self, key: String) {
        let mut state = self.state();
        state.query = state.query.with_filter(FilterMode::from_key(&key));
    }

    /// Selects a sort order by its key. `None` or an unknown key restores
    /// catalog order.
    pub fn set_sort(&self, key: Option<String>) {
        let mode = key.as_deref().and_then(SortMode::from_key);
        let mut state = self.state();
        state.query = state.query.with_sort(mode);
    }

    /// Returns the recipes selected by the current state, in display order.
    pub fn visible(&self) -> Vec<DeckRecipe> {
        let state = self.state();
        query(self.catalog.recipes(), &state.query, &state.favorites)
            .into_iter()
            .map(|recipe| snapshot(recipe, &state.favorites))
            .collect()
    }

    /// Renders cards for the visible recipes as one markup string.
    pub fn render_visible(&self) -> String {
        let state = self.state();
        let visible = query(self.catalog.recipes(), &state.query, &state.favorites);
        render::render_cards(&visible, &state.favorites)
    }

    /// Renders the card for one recipe.
    pub fn render_card(&self, id: u32) -> Result<String, DeckError> {
        let recipe = self.recipe_by_id(id)?;
        Ok(render::render_card(recipe, &self.state().favorites))
    }

    /// Renders the steps list for one recipe.
    pub fn render_steps(&self, id: u32) -> Result<String, DeckError> {
        Ok(render::render_steps(&self.recipe_by_id(id)?.steps))
    }

    /// Renders the ingredients list for one recipe.
    pub fn render_ingredients(&self, id: u32) -> Result<String, DeckError> {
        Ok(render::render_ingredients(&self.recipe_by_id(id)?.ingredients))
    }

    /// Flips the favorite state of `id`, persists the set and returns the
    /// new state.
    pub fn toggle_favorite(&self, id: u32) -> bool {
        let mut state = self.state();
        state.favorites = state.favorites.toggled(id);
        state.favorites.save(self.store.as_ref());
        state.favorites.contains(id)
    }

    /// Whether `id` is currently favorited.
    pub fn is_favorite(&self, id: u32) -> bool {
        self.state().favorites.contains(id)
    }

    /// Returns the favorited ids in ascending order.
    pub fn favorite_ids(&self) -> Vec<u32> {
        self.state().favorites.ids()
    }

    /// The `Showing X of Y recipes` counter line for the current view.
    pub fn counter_text(&self) -> String {
        let state = self.state();
        let shown = query(self.catalog.recipes(), &state.query, &state.favorites).len();
        render::counter_text(shown, self.catalog.len())
    }

    /// The search status line for the current view. Empty while no search
    /// is active.
    pub fn search_results_text(&self) -> String {
        let state = self.state();
        let matches = query(self.catalog.recipes(), &state.query, &state.favorites).len();
        render::search_results_text(&state.query.search, matches)
    }

    /// Looks up one recipe by id.
    pub fn recipe(&self, id: u32) -> Option<DeckRecipe> {
        let state = self.state();
        self.catalog
            .get(id)
            .map(|recipe| snapshot(recipe, &state.favorites))
    }
}

impl RecipeDeck {
    fn new(catalog: Catalog, store: Box<dyn KeyValueStore>) -> Self {
        let favorites = FavoriteSet::load(store.as_ref());
        RecipeDeck {
            catalog,
            store,
            state: Mutex::new(DeckState {
                query: QueryState::default(),
                favorites,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, DeckState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn recipe_by_id(&self, id: u32) -> Result<&Recipe, DeckError> {
        self.catalog.get(id).ok_or_else(|| DeckError::NotFound {
            message: format!("No recipe with id {id}"),
        })
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Opens a deck over the built-in sample catalog.
///
/// Favorites persist in `storage_dir` and are loaded back on the next open.
/// A missing or unreadable favorites blob opens the deck with none.
///
/// # Arguments
/// * `storage_dir` - Directory for persisted state
///
/// # Returns
/// The deck handle.
#[uniffi::export]
pub fn open_deck(storage_dir: String) -> Arc<RecipeDeck> {
    let store = DirectoryStore::new(storage_dir);
    Arc::new(RecipeDeck::new(Catalog::sample(), Box::new(store)))
}

/// Opens a deck over a caller-provided catalog.
///
/// # Arguments
/// * `catalog_yaml` - YAML list of recipes
/// * `storage_dir` - Directory for persisted state
///
/// # Returns
/// The deck handle, or an error if the catalog does not parse or its ids
/// are not unique and positive.
#[uniffi::export]
pub fn open_deck_with_catalog(
    catalog_yaml: String,
    storage_dir: String,
) -> Result<Arc<RecipeDeck>, DeckError> {
    let catalog = Catalog::from_yaml(&catalog_yaml)?;
    let store = DirectoryStore::new(storage_dir);
    Ok(Arc::new(RecipeDeck::new(catalog, Box::new(store))))
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
