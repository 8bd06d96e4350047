use super::step::StepNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How much kitchen skill a recipe assumes.
///
/// Serialized as its lowercase name, which is also the token used in filter
/// keys and markup class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Returns the lowercase token for this difficulty.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry.
///
/// Recipes are plain data: the catalog owns them and the query and render
/// layers only ever borrow them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier, unique and non-zero within a catalog.
    pub id: u32,
    pub title: String,
    /// Total preparation time in minutes.
    pub time: u32,
    pub difficulty: Difficulty,
    pub description: String,
    pub category: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<StepNode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_difficulty_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), r#""easy""#);
        assert_eq!(
            serde_yaml::from_str::<Difficulty>("hard").unwrap(),
            Difficulty::Hard
        );
    }

    #[test]
    fn test_difficulty_display_matches_token() {
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn test_recipe_from_yaml() {
        let recipe: Recipe = serde_yaml::from_str(indoc! {r#"
            id: 4
            title: Greek Salad
            time: 15
            difficulty: easy
            description: Fresh salad with feta and olives
            category: salad
            ingredients:
              - Tomatoes
              - Feta cheese
            steps:
              - Chop the tomatoes
              - step: Dress
                substeps:
                  - Whisk oil and vinegar
        "#})
        .unwrap();

        assert_eq!(recipe.id, 4);
        assert_eq!(recipe.title, "Greek Salad");
        assert_eq!(recipe.time, 15);
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.steps[0], StepNode::leaf("Chop the tomatoes"));
        assert_eq!(
            recipe.steps[1],
            StepNode::branch("Dress", vec![StepNode::leaf("Whisk oil and vinegar")])
        );
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        assert!(serde_yaml::from_str::<Difficulty>("expert").is_err());
    }
}
