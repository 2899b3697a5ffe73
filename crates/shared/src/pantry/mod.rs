use serde::{Deserialize, Serialize};

/// An ingredient the user can mark as available.
///
/// `category` is a free-text grouping key. One of the seed categories is
/// literally named "Pantry" (oil, salt, pepper, soy sauce).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub selected: bool,
}

impl PantryItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            selected: false,
        }
    }
}

const SEED: [(&str, &str, &str); 18] = [
    ("1", "Rice", "Grains"),
    ("2", "Pasta", "Grains"),
    ("3", "Bread", "Grains"),
    ("4", "Oats", "Grains"),
    ("5", "Black Beans", "Protein"),
    ("6", "Lentils", "Protein"),
    ("7", "Eggs", "Protein"),
    ("8", "Peanut Butter", "Protein"),
    ("9", "Cheese", "Dairy"),
    ("10", "Milk", "Dairy"),
    ("11", "Onions", "Vegetables"),
    ("12", "Garlic", "Vegetables"),
    ("13", "Carrots", "Vegetables"),
    ("14", "Potatoes", "Vegetables"),
    ("15", "Olive Oil", "Pantry"),
    ("16", "Salt", "Pantry"),
    ("17", "Pepper", "Pantry"),
    ("18", "Soy Sauce", "Pantry"),
];

/// Fresh, unselected copies of the seed ingredients.
pub fn pantry_ingredients() -> Vec<PantryItem> {
    SEED.iter()
        .map(|(id, name, category)| PantryItem::new(*id, *name, *category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_start_unselected() {
        let items = pantry_ingredients();
        assert_eq!(items.len(), 18);
        assert!(items.iter().all(|i| !i.selected));
    }

    #[test]
    fn seeds_cover_five_categories() {
        let mut categories = pantry_ingredients()
            .into_iter()
            .map(|i| i.category)
            .collect::<Vec<_>>();
        categories.dedup();
        assert_eq!(
            categories,
            vec!["Grains", "Protein", "Dairy", "Vegetables", "Pantry"]
        );
    }
}
