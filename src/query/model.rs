use crate::favorites::FavoriteSet;
use crate::model::{Difficulty, Recipe};
use crate::query::QUICK_RECIPE_TIME_LIMIT;
use std::cmp::Ordering;

/// Which recipes the filter stage keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Favorites,
    Quick,
    Easy,
    Medium,
    Hard,
}

impl FilterMode {
    /// Parses a filter key from the UI. Unknown keys fall back to `All`.
    pub fn from_key(key: &str) -> FilterMode {
        match key {
            "all" => FilterMode::All,
            "favorites" => FilterMode::Favorites,
            "quick" => FilterMode::Quick,
            "easy" => FilterMode::Easy,
            "medium" => FilterMode::Medium,
            "hard" => FilterMode::Hard,
            _ => FilterMode::All,
        }
    }

    /// Returns the key this mode is selected by.
    pub fn as_key(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Favorites => "favorites",
            FilterMode::Quick => "quick",
            FilterMode::Easy => "easy",
            FilterMode::Medium => "medium",
            FilterMode::Hard => "hard",
        }
    }

    /// Whether `recipe` passes this filter.
    pub fn matches(&self, recipe: &Recipe, favorites: &FavoriteSet) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Favorites => favorites.contains(recipe.id),
            FilterMode::Quick => recipe.time < QUICK_RECIPE_TIME_LIMIT,
            FilterMode::Easy => recipe.difficulty == Difficulty::Easy,
            FilterMode::Medium => recipe.difficulty == Difficulty::Medium,
            FilterMode::Hard => recipe.difficulty == Difficulty::Hard,
        }
    }
}

/// Which order the sort stage produces. `None` in [`QueryState::sort`]
/// leaves the upstream order untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Alphabetical by title, case-insensitive.
    Name,
    /// Ascending preparation time.
    Time,
}

impl SortMode {
    /// Parses a sort key from the UI. Unknown keys mean no sorting.
    pub fn from_key(key: &str) -> Option<SortMode> {
        match key {
            "name" => Some(SortMode::Name),
            "time" => Some(SortMode::Time),
            _ => None,
        }
    }

    /// Returns the key this mode is selected by.
    pub fn as_key(&self) -> &'static str {
        match self {
            SortMode::Name => "name",
            SortMode::Time => "time",
        }
    }

    /// Compares two recipes under this mode. Ties compare equal, so a
    /// stable sort keeps their upstream order.
    pub fn compare(&self, a: &Recipe, b: &Recipe) -> Ordering {
        match self {
            SortMode::Name => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortMode::Time => a.time.cmp(&b.time),
        }
    }
}

/// The complete input to one run of the query pipeline.
///
/// A `QueryState` is an immutable value: UI events replace the whole state
/// with one of the `with_*` copies instead of mutating it in place. The
/// default state (empty search, `All` filter, no sort) selects the catalog
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub search: String,
    pub filter: FilterMode,
    pub sort: Option<SortMode>,
}

impl QueryState {
    /// Returns a copy of this state with a new search query.
    pub fn with_search(&self, search: impl Into<String>) -> QueryState {
        QueryState {
            search: search.into(),
            ..self.clone()
        }
    }

    /// Returns a copy of this state with a new filter mode.
    pub fn with_filter(&self, filter: FilterMode) -> QueryState {
        QueryState {
            filter,
            ..self.clone()
        }
    }

    /// Returns a copy of this state with a new sort mode.
    pub fn with_sort(&self, sort: Option<SortMode>) -> QueryState {
        QueryState {
            sort,
            ..self.clone()
        }
    }
}
