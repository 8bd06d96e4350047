mod model;

pub use model::{FilterMode, QueryState, SortMode};

use crate::favorites::FavoriteSet;
use crate::model::Recipe;

/// Recipes strictly faster than this many minutes count as quick.
pub const QUICK_RECIPE_TIME_LIMIT: u32 = 30;

/// Runs the query pipeline over a catalog's recipes: search, then filter,
/// then sort.
///
/// The pipeline never touches the input slice. It returns borrows into it,
/// in display order, each recipe at most once.
///
/// # Arguments
///
/// * `recipes` - The catalog's recipes in baseline order
/// * `state` - Search query, filter mode and sort mode to apply
/// * `favorites` - Favorites consulted by [`FilterMode::Favorites`]
///
/// # Returns
///
/// The recipes to display, in order.
///
/// # Examples
///
/// ```
/// use recipe_deck::{query, Catalog, FavoriteSet, QueryState};
///
/// let catalog = Catalog::sample();
/// let state = QueryState::default().with_search("chicken");
/// let visible = query(catalog.recipes(), &state, &FavoriteSet::new());
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].title, "Chicken Tikka Masala");
/// ```
pub fn query<'a>(
    recipes: &'a [Recipe],
    state: &QueryState,
    favorites: &FavoriteSet,
) -> Vec<&'a Recipe> {
    let found = search_recipes(recipes, &state.search);
    let kept = filter_recipes(found, state.filter, favorites);
    sort_recipes(kept, state.sort)
}

/// Keeps recipes whose title or any ingredient contains `search` as a
/// case-insensitive substring. An empty or whitespace-only query keeps
/// every recipe.
pub fn search_recipes<'a>(recipes: &'a [Recipe], search: &str) -> Vec<&'a Recipe> {
    if search.trim().is_empty() {
        return recipes.iter().collect();
    }

    let needle = search.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| recipe_matches(recipe, &needle))
        .collect()
}

fn recipe_matches(recipe: &Recipe, needle: &str) -> bool {
    if recipe.title.to_lowercase().contains(needle) {
        return true;
    }
    recipe
        .ingredients
        .iter()
        .any(|ingredient| ingredient.to_lowercase().contains(needle))
}

/// Keeps recipes that pass `mode`, preserving their order.
pub fn filter_recipes<'a>(
    recipes: Vec<&'a Recipe>,
    mode: FilterMode,
    favorites: &FavoriteSet,
) -> Vec<&'a Recipe> {
    recipes
        .into_iter()
        .filter(|recipe| mode.matches(recipe, favorites))
        .collect()
}

/// Orders recipes under `mode`; `None` keeps the incoming order. The sort
/// is stable, so recipes comparing equal keep their relative order.
pub fn sort_recipes<'a>(mut recipes: Vec<&'a Recipe>, mode: Option<SortMode>) -> Vec<&'a Recipe> {
    if let Some(mode) = mode {
        recipes.sort_by(|a, b| mode.compare(a, b));
    }
    recipes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::Difficulty;
    use std::collections::HashSet;

    fn favorites_of(ids: &[u32]) -> FavoriteSet {
        ids.iter().copied().collect()
    }

    fn titles<'a>(recipes: &[&'a Recipe]) -> Vec<&'a str> {
        recipes.iter().map(|recipe| recipe.title.as_str()).collect()
    }

    fn ids(recipes: &[&Recipe]) -> Vec<u32> {
        recipes.iter().map(|recipe| recipe.id).collect()
    }

    fn timed(id: u32, title: &str, time: u32) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            time,
            difficulty: Difficulty::Easy,
            description: String::new(),
            category: "test".to_string(),
            ingredients: vec![],
            steps: vec![],
        }
    }

    #[test]
    fn test_default_state_is_identity() {
        let catalog = Catalog::sample();
        let visible = query(catalog.recipes(), &QueryState::default(), &FavoriteSet::new());
        assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_whitespace_search_is_identity() {
        let catalog = Catalog::sample();
        let state = QueryState::default().with_search("   ");
        let visible = query(catalog.recipes(), &state, &FavoriteSet::new());
        assert_eq!(visible.len(), 8);
    }

    #[test]
    fn test_search_matches_title_case_insensitively() {
        let catalog = Catalog::sample();
        let state = QueryState::default().with_search("chicken");
        let visible = query(catalog.recipes(), &state, &FavoriteSet::new());
        assert_eq!(titles(&visible), vec!["Chicken Tikka Masala"]);
    }

    #[test]
    fn test_search_matches_ingredients() {
        let catalog = Catalog::sample();
        // Hits Carbonara only through its "Salt for pasta water" ingredient.
        let state = QueryState::default().with_search("PASTA");
        let visible = query(catalog.recipes(), &state, &FavoriteSet::new());
        assert_eq!(titles(&visible), vec!["Classic Spaghetti Carbonara"]);
    }

    #[test]
    fn test_search_without_matches_is_empty() {
        let catalog = Catalog::sample();
        let state = QueryState::default().with_search("dragon fruit");
        let visible = query(catalog.recipes(), &state, &FavoriteSet::new());
        assert!(visible.is_empty());
    }

    #[test]
    fn test_quick_filter_is_strict() {
        let catalog = Catalog::sample();
        let state = QueryState {
            search: String::new(),
            filter: FilterMode::Quick,
            sort: Some(SortMode::Time),
        };
        let visible = query(catalog.recipes(), &state, &FavoriteSet::new());

        // Pad Thai sits at exactly 30 minutes and stays out.
        assert_eq!(
            titles(&visible),
            vec!["Greek Salad", "Vegetable Stir Fry", "Classic Spaghetti Carbonara"]
        );
    }

    #[test]
    fn test_favorites_filter() {
        let catalog = Catalog::sample();
        let state = QueryState::default().with_filter(FilterMode::Favorites);

        let none = query(catalog.recipes(), &state, &FavoriteSet::new());
        assert!(none.is_empty());

        let some = query(catalog.recipes(), &state, &favorites_of(&[2, 5]));
        assert_eq!(titles(&some), vec!["Chicken Tikka Masala", "Beef Wellington"]);
    }

    #[test]
    fn test_difficulty_filter() {
        let catalog = Catalog::sample();
        let state = QueryState::default().with_filter(FilterMode::Hard);
        let visible = query(catalog.recipes(), &state, &FavoriteSet::new());
        assert_eq!(titles(&visible), vec!["Homemade Croissants", "Beef Wellington"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let catalog = Catalog::sample();
        let state = QueryState::default().with_sort(Some(SortMode::Name));
        let visible = query(catalog.recipes(), &state, &FavoriteSet::new());
        assert_eq!(
            titles(&visible),
            vec![
                "Beef Wellington",
                "Chicken Tikka Masala",
                "Classic Spaghetti Carbonara",
                "Greek Salad",
                "Homemade Croissants",
                "Margherita Pizza",
                "Pad Thai",
                "Vegetable Stir Fry",
            ]
        );
    }

    #[test]
    fn test_time_sort_is_ascending() {
        let catalog = Catalog::sample();
        let state = QueryState::default().with_sort(Some(SortMode::Time));
        let visible = query(catalog.recipes(), &state, &FavoriteSet::new());
        let times: Vec<u32> = visible.iter().map(|recipe| recipe.time).collect();
        assert_eq!(times, vec![15, 20, 25, 30, 45, 60, 120, 180]);
    }

    #[test]
    fn test_sort_keeps_order_of_equal_keys() {
        let recipes = vec![
            timed(1, "Bravo", 30),
            timed(2, "Alpha", 30),
            timed(3, "Charlie", 10),
        ];
        let state = QueryState::default().with_sort(Some(SortMode::Time));
        let visible = query(&recipes, &state, &FavoriteSet::new());
        assert_eq!(ids(&visible), vec![3, 1, 2]);

        let recipes = vec![timed(1, "pesto", 5), timed(2, "Pesto", 5)];
        let state = QueryState::default().with_sort(Some(SortMode::Name));
        let visible = query(&recipes, &state, &FavoriteSet::new());
        assert_eq!(ids(&visible), vec![1, 2]);
    }

    #[test]
    fn test_combined_search_filter_sort() {
        let catalog = Catalog::sample();
        let state = QueryState {
            search: "garlic".to_string(),
            filter: FilterMode::All,
            sort: Some(SortMode::Time),
        };
        let visible = query(catalog.recipes(), &state, &FavoriteSet::new());
        assert_eq!(
            titles(&visible),
            vec!["Vegetable Stir Fry", "Chicken Tikka Masala", "Beef Wellington"]
        );
    }

    #[test]
    fn test_result_is_subset_without_duplicates() {
        let catalog = Catalog::sample();
        let state = QueryState {
            search: "a".to_string(),
            filter: FilterMode::Medium,
            sort: Some(SortMode::Name),
        };
        let visible = query(catalog.recipes(), &state, &favorites_of(&[1, 3]));

        let seen: HashSet<u32> = ids(&visible).into_iter().collect();
        assert_eq!(seen.len(), visible.len());
        for recipe in &visible {
            assert!(catalog.get(recipe.id).is_some());
        }
    }

    #[test]
    fn test_same_state_gives_same_result() {
        let catalog = Catalog::sample();
        let state = QueryState {
            search: "oil".to_string(),
            filter: FilterMode::Easy,
            sort: Some(SortMode::Name),
        };
        let favorites = favorites_of(&[4]);

        let first = ids(&query(catalog.recipes(), &state, &favorites));
        let second = ids(&query(catalog.recipes(), &state, &favorites));
        assert_eq!(first, second);
    }
}
