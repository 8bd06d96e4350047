use crate::favorites::FavoriteSet;
use crate::model::{Recipe, StepNode};
use html_escape::encode_text;

/// Renders one step node as a list item.
///
/// A leaf becomes a plain `<li>`. A branch becomes an `<li>` holding its
/// bold label and a nested list of its children, rendered one level deeper.
/// The nested list is classed `substeps-list` at depth 0 and
/// `nested-substeps-level-{depth}` below that, so styling can follow the
/// nesting.
///
/// All recipe text is escaped; class names, ids and data attributes come
/// from the closed vocabulary of this module.
pub fn render_step(node: &StepNode, depth: usize) -> String {
    match node {
        StepNode::Leaf(text) => format!("<li>{}</li>", encode_text(text)),
        StepNode::Branch { label, substeps } => {
            let children: String = substeps
                .iter()
                .map(|child| render_step(child, depth + 1))
                .collect();
            format!(
                "<li><strong>{}</strong><ul class=\"{}\">{}</ul></li>",
                encode_text(label),
                nesting_class(depth),
                children
            )
        }
    }
}

fn nesting_class(depth: usize) -> String {
    if depth == 0 {
        "substeps-list".to_string()
    } else {
        format!("nested-substeps-level-{depth}")
    }
}

/// Renders a recipe's steps as an ordered `steps-list`.
pub fn render_steps(steps: &[StepNode]) -> String {
    let items: String = steps.iter().map(|step| render_step(step, 0)).collect();
    format!("<ol class=\"steps-list\">{items}</ol>")
}

/// Renders a recipe's ingredients as an unordered `ingredients-list`.
pub fn render_ingredients(ingredients: &[String]) -> String {
    let items: String = ingredients
        .iter()
        .map(|ingredient| format!("<li>{}</li>", encode_text(ingredient)))
        .collect();
    format!("<ul class=\"ingredients-list\">{items}</ul>")
}

/// Renders one recipe card.
///
/// The card carries the heart button reflecting the recipe's favorite
/// state and the two collapsed sections (`ingredients-{id}`, `steps-{id}`)
/// the host shell toggles.
pub fn render_card(recipe: &Recipe, favorites: &FavoriteSet) -> String {
    let favorited = favorites.contains(recipe.id);
    let heart_class = if favorited { "heart-btn active" } else { "heart-btn" };
    let heart_icon = if favorited { "❤️" } else { "🤍" };

    format!(
        "<div class=\"recipe-card\" data-id=\"{id}\">\
         <div class=\"recipe-card-header\">\
         <h3>{title}</h3>\
         <button class=\"{heart_class}\" data-id=\"{id}\" aria-label=\"Add to favorites\">{heart_icon}</button>\
         </div>\
         <div class=\"recipe-meta\">\
         <span>⏱️ {time} min</span>\
         <span class=\"difficulty {difficulty}\">{difficulty}</span>\
         </div>\
         <p>{description}</p>\
         <div class=\"recipe-actions\">\
         <button class=\"toggle-btn toggle-ingredients\" data-id=\"{id}\" data-section=\"ingredients\">📋 Show Ingredients</button>\
         <button class=\"toggle-btn toggle-steps\" data-id=\"{id}\" data-section=\"steps\">👨‍🍳 Show Steps</button>\
         </div>\
         <div class=\"expandable-section ingredients-section\" id=\"ingredients-{id}\" style=\"display: none;\">\
         <h4>Ingredients:</h4>{ingredients}\
         </div>\
         <div class=\"expandable-section steps-section\" id=\"steps-{id}\" style=\"display: none;\">\
         <h4>Steps:</h4>{steps}\
         </div>\
         </div>",
        id = recipe.id,
        title = encode_text(&recipe.title),
        heart_class = heart_class,
        heart_icon = heart_icon,
        time = recipe.time,
        difficulty = recipe.difficulty,
        description = encode_text(&recipe.description),
        ingredients = render_ingredients(&recipe.ingredients),
        steps = render_steps(&recipe.steps),
    )
}

/// Renders cards for `recipes` in order. No recipes renders as the empty
/// string.
pub fn render_cards(recipes: &[&Recipe], favorites: &FavoriteSet) -> String {
    recipes
        .iter()
        .map(|recipe| render_card(recipe, favorites))
        .collect()
}

/// The catalog counter line, `Showing X of Y recipes`. The plural follows
/// the catalog total.
pub fn counter_text(shown: usize, total: usize) -> String {
    let plural = if total == 1 { "" } else { "s" };
    format!("Showing {shown} of {total} recipe{plural}")
}

/// The search status line. Empty while no search is active, otherwise
/// either the match count or a no-results notice quoting the query.
pub fn search_results_text(search: &str, matches: usize) -> String {
    if search.trim().is_empty() {
        return String::new();
    }
    if matches == 0 {
        format!("No recipes found for \"{search}\"")
    } else {
        let plural = if matches == 1 { "" } else { "s" };
        format!("Found {matches} recipe{plural}")
    }
}
