use std::cmp::Reverse;

use brokeeats_shared::recipe::{Recipe, recipes};
use serde::Serialize;

/// Percentage at which a match is highlighted as strong.
pub const STRONG_MATCH_PERCENTAGE: u8 = 70;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMatch<'a> {
    pub recipe: &'a Recipe,
    /// Pantry names found in the recipe, in pantry order.
    pub matched_ingredients: Vec<String>,
    pub match_percentage: u8,
}

impl RecipeMatch<'_> {
    pub fn matched_count(&self) -> usize {
        self.matched_ingredients.len()
    }

    pub fn is_strong(&self) -> bool {
        self.match_percentage >= STRONG_MATCH_PERCENTAGE
    }
}

/// Share of a recipe's ingredient lines covered by `matched` pantry names.
///
/// Computed as `round(100 * matched / lines)`. It counts pantry names, not
/// ingredient lines, so a name hitting several lines counts once and several
/// names hitting one line count several times. Values above 100 are clamped.
pub fn match_percentage(matched: usize, lines: usize) -> u8 {
    if lines == 0 {
        return 0;
    }

    let percentage = ((100 * matched) as f64 / lines as f64).round();

    percentage.min(100.0) as u8
}

#[derive(Clone, Copy, Debug)]
pub struct PantryMatcher<'a> {
    catalog: &'a [Recipe],
}

impl Default for PantryMatcher<'static> {
    fn default() -> Self {
        Self::new(recipes())
    }
}

impl<'a> PantryMatcher<'a> {
    pub fn new(catalog: &'a [Recipe]) -> Self {
        Self { catalog }
    }

    /// Pantry names whose lowercase form appears anywhere in the recipe's
    /// ingredient text. Plain substring search: "Egg" also hits "eggplant".
    pub fn matching_ingredients<S: AsRef<str>>(recipe: &Recipe, pantry: &[S]) -> Vec<String> {
        let text = recipe.ingredient_text();

        pantry
            .iter()
            .filter_map(|name| {
                let name: &str = name.as_ref();
                text.contains(&name.to_lowercase()).then(|| name.to_owned())
            })
            .collect()
    }

    /// Recipes using at least one pantry name, most matches first.
    ///
    /// Ties keep catalog order.
    pub fn find<S: AsRef<str>>(&self, pantry: &[S]) -> Vec<RecipeMatch<'a>> {
        let mut matches = self
            .catalog
            .iter()
            .filter_map(|recipe| {
                let matched_ingredients = Self::matching_ingredients(recipe, pantry);
                if matched_ingredients.is_empty() {
                    return None;
                }

                Some(RecipeMatch {
                    match_percentage: match_percentage(
                        matched_ingredients.len(),
                        recipe.ingredients.len(),
                    ),
                    recipe,
                    matched_ingredients,
                })
            })
            .collect::<Vec<_>>();

        matches.sort_by_key(|m| Reverse(m.matched_count()));

        tracing::debug!(
            pantry = pantry.len(),
            matches = matches.len(),
            "matched pantry against catalog"
        );

        matches
    }
}
