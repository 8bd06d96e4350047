pub mod catalog;
pub mod favorites;
pub mod ffi;
pub mod model;
pub mod query;
pub mod render;

uniffi::setup_scaffolding!();

pub use catalog::{Catalog, CatalogError};
pub use favorites::{
    DirectoryStore, FavoriteSet, FavoritesError, KeyValueStore, MemoryStore, StoreError,
    FAVORITES_STORAGE_KEY,
};
pub use model::*;
pub use query::{
    filter_recipes, query, search_recipes, sort_recipes, FilterMode, QueryState, SortMode,
    QUICK_RECIPE_TIME_LIMIT,
};
pub use render::{
    counter_text, render_card, render_cards, render_ingredients, render_step, render_steps,
    search_results_text,
};
