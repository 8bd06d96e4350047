use crate::model::Recipe;
use std::collections::HashSet;
use thiserror::Error;

/// An ordered, validated collection of recipes.
///
/// The catalog owns its recipes and keeps them in load order. That order is
/// the baseline every query result is derived from. Construction checks that
/// every id is positive and unique, so lookups and favorites can rely on ids
/// alone.
///
/// # Examples
///
/// ```
/// use recipe_deck::Catalog;
///
/// let catalog = Catalog::sample();
/// assert_eq!(catalog.len(), 8);
/// assert_eq!(catalog.get(4).unwrap().title, "Greek Salad");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse catalog: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Recipe \"{0}\" has id 0, ids must be positive")]
    ZeroId(String),

    #[error("Recipe id {0} is used more than once")]
    DuplicateId(u32),
}

impl Catalog {
    /// Creates a catalog from recipes, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if any recipe has id 0 or shares an id with an
    /// earlier recipe.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            if recipe.id == 0 {
                return Err(CatalogError::ZeroId(recipe.title.clone()));
            }
            if !seen.insert(recipe.id) {
                return Err(CatalogError::DuplicateId(recipe.id));
            }
        }
        Ok(Catalog { recipes })
    }

    /// Parses a catalog from a YAML list of recipes.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the id checks of
    /// [`Catalog::new`] fail.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_yaml::from_str(yaml)?;
        Catalog::new(recipes)
    }

    /// Parses a catalog from a JSON array of recipes.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the id checks of
    /// [`Catalog::new`] fail.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Catalog::new(recipes)
    }

    /// Returns the built-in catalog of eight sample recipes.
    pub fn sample() -> Self {
        Catalog::from_yaml(include_str!("sample.yaml")).expect("built-in catalog is valid")
    }

    /// Returns all recipes in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Iterates over the recipes in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Looks up a recipe by id.
    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
