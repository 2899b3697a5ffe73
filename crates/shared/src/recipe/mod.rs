mod catalog;

pub use catalog::*;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// A catalog recipe.
///
/// Ingredient lines are free text ("1 cup white rice"), so pantry matching
/// works on substrings rather than on structured ingredients.
#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1, message = "At least 1 ingredient is required"))]
    pub ingredients: Vec<String>,
    #[validate(length(min = 1, message = "At least 1 instruction step is required"))]
    pub instructions: Vec<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub estimated_cost: f64,
    #[validate(range(min = 1))]
    pub servings: u32,
    #[validate(range(min = 1))]
    pub cook_time: u32,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Recipe {
    /// Ingredient lines joined with a space and lowercased.
    pub fn ingredient_text(&self) -> String {
        self.ingredients.join(" ").to_lowercase()
    }

    pub fn cost_per_serving(&self) -> f64 {
        self.estimated_cost / self.servings as f64
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
