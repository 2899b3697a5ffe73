use std::sync::LazyLock;

use super::{Difficulty, Recipe};

static RECIPES: LazyLock<Vec<Recipe>> = LazyLock::new(|| {
    vec![
        Recipe {
            id: "1".to_owned(),
            name: "Basic Rice and Beans".to_owned(),
            description: "A protein-packed, filling meal that costs under $1 per serving"
                .to_owned(),
            ingredients: lines(&[
                "1 cup white rice",
                "1 can black beans",
                "1 onion",
                "garlic",
                "cumin",
                "salt",
            ]),
            instructions: lines(&[
                "Cook rice according to package directions",
                "Sauté diced onion and garlic",
                "Add beans, cumin, and salt",
                "Serve over rice",
            ]),
            estimated_cost: 0.85,
            servings: 4,
            cook_time: 25,
            difficulty: Difficulty::Easy,
            tags: lines(&["vegetarian", "protein", "filling"]),
            image: Some(
                "https://images.unsplash.com/photo-1586201375761-83865001e31c?w=400".to_owned(),
            ),
        },
        Recipe {
            id: "2".to_owned(),
            name: "Pasta with Garlic Oil".to_owned(),
            description: "Simple Italian pasta dish with just a few ingredients".to_owned(),
            ingredients: lines(&[
                "1 lb pasta",
                "6 cloves garlic",
                "1/2 cup olive oil",
                "red pepper flakes",
                "parmesan",
            ]),
            instructions: lines(&[
                "Cook pasta until al dente",
                "Heat olive oil and sauté sliced garlic",
                "Add red pepper flakes",
                "Toss with pasta and parmesan",
            ]),
            estimated_cost: 1.20,
            servings: 4,
            cook_time: 15,
            difficulty: Difficulty::Easy,
            tags: lines(&["vegetarian", "quick", "italian"]),
            image: Some(
                "https://images.unsplash.com/photo-1621996346565-e3dbc353d2e5?w=400".to_owned(),
            ),
        },
        Recipe {
            id: "3".to_owned(),
            name: "Egg Fried Rice".to_owned(),
            description: "Transform leftover rice into a delicious meal".to_owned(),
            ingredients: lines(&[
                "2 cups cooked rice",
                "3 eggs",
                "2 green onions",
                "soy sauce",
                "vegetable oil",
            ]),
            instructions: lines(&[
                "Heat oil in large pan",
                "Scramble eggs and set aside",
                "Fry rice until heated through",
                "Add eggs back in with soy sauce and green onions",
            ]),
            estimated_cost: 0.95,
            servings: 2,
            cook_time: 10,
            difficulty: Difficulty::Easy,
            tags: lines(&["quick", "protein", "leftover-friendly"]),
            image: Some(
                "https://images.unsplash.com/photo-1603133872878-684f208fb84b?w=400".to_owned(),
            ),
        },
        Recipe {
            id: "4".to_owned(),
            name: "Lentil Soup".to_owned(),
            description: "Hearty and nutritious soup perfect for cold days".to_owned(),
            ingredients: lines(&[
                "1 cup red lentils",
                "1 onion",
                "2 carrots",
                "2 celery stalks",
                "vegetable broth",
                "bay leaves",
            ]),
            instructions: lines(&[
                "Sauté diced vegetables",
                "Add lentils and broth",
                "Simmer for 20 minutes",
                "Season with salt and pepper",
            ]),
            estimated_cost: 1.10,
            servings: 6,
            cook_time: 30,
            difficulty: Difficulty::Easy,
            tags: lines(&["vegetarian", "healthy", "soup"]),
            image: Some(
                "https://images.unsplash.com/photo-1547592166-23ac45744acd?w=400".to_owned(),
            ),
        },
        Recipe {
            id: "5".to_owned(),
            name: "Peanut Butter Sandwich".to_owned(),
            description: "Classic protein-rich sandwich".to_owned(),
            ingredients: lines(&[
                "2 slices bread",
                "2 tbsp peanut butter",
                "1 tbsp jelly (optional)",
            ]),
            instructions: lines(&[
                "Spread peanut butter on one slice",
                "Add jelly if desired",
                "Close sandwich and enjoy",
            ]),
            estimated_cost: 0.45,
            servings: 1,
            cook_time: 2,
            difficulty: Difficulty::Easy,
            tags: lines(&["quick", "protein", "no-cook"]),
            image: Some(
                "https://images.unsplash.com/photo-1509440159596-0249088772ff?w=400".to_owned(),
            ),
        },
        Recipe {
            id: "6".to_owned(),
            name: "Baked Potato with Toppings".to_owned(),
            description: "Filling potato with budget-friendly toppings".to_owned(),
            ingredients: lines(&[
                "1 large potato",
                "butter",
                "salt",
                "pepper",
                "cheese (optional)",
                "green onions",
            ]),
            instructions: lines(&[
                "Bake potato at 425°F for 45 minutes",
                "Cut open and fluff with fork",
                "Add butter, salt, pepper",
                "Top with cheese and green onions",
            ]),
            estimated_cost: 0.75,
            servings: 1,
            cook_time: 50,
            difficulty: Difficulty::Easy,
            tags: lines(&["vegetarian", "filling", "customizable"]),
            image: Some(
                "https://images.unsplash.com/photo-1518977676601-b53f82aba655?w=400".to_owned(),
            ),
        },
        Recipe {
            id: "7".to_owned(),
            name: "Ramen Upgrade".to_owned(),
            description: "Transform instant ramen into a proper meal".to_owned(),
            ingredients: lines(&[
                "1 pack instant ramen",
                "1 egg",
                "green onions",
                "sriracha",
                "sesame oil",
            ]),
            instructions: lines(&[
                "Cook ramen according to package",
                "Add beaten egg in last minute",
                "Top with green onions",
                "Drizzle with sriracha and sesame oil",
            ]),
            estimated_cost: 0.65,
            servings: 1,
            cook_time: 5,
            difficulty: Difficulty::Easy,
            tags: lines(&["quick", "protein", "spicy"]),
            image: Some(
                "https://images.unsplash.com/photo-1569718212165-3a8278d5f624?w=400".to_owned(),
            ),
        },
        Recipe {
            id: "8".to_owned(),
            name: "Bean and Cheese Quesadilla".to_owned(),
            description: "Crispy tortilla filled with beans and cheese".to_owned(),
            ingredients: lines(&[
                "2 flour tortillas",
                "1/2 cup refried beans",
                "1/2 cup shredded cheese",
                "salsa",
            ]),
            instructions: lines(&[
                "Spread beans on one tortilla",
                "Add cheese and top with second tortilla",
                "Cook in pan until crispy and cheese melts",
                "Serve with salsa",
            ]),
            estimated_cost: 0.90,
            servings: 1,
            cook_time: 8,
            difficulty: Difficulty::Easy,
            tags: lines(&["vegetarian", "quick", "mexican"]),
            image: Some(
                "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=400".to_owned(),
            ),
        },
    ]
});

fn lines(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

/// The built-in recipe catalog, in display order.
pub fn recipes() -> &'static [Recipe] {
    RECIPES.as_slice()
}

pub fn find_recipe(id: &str) -> Option<&'static Recipe> {
    recipes().iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use validator::Validate;

    use super::*;

    #[test]
    fn catalog_has_eight_valid_recipes() {
        assert_eq!(recipes().len(), 8);
        for recipe in recipes() {
            assert!(recipe.validate().is_ok(), "{} is invalid", recipe.name);
        }
    }

    #[test]
    fn recipe_ids_are_unique() {
        let ids = recipes().iter().map(|r| r.id.as_str()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), recipes().len());
    }

    #[test]
    fn find_recipe_by_id() {
        assert_eq!(find_recipe("3").map(|r| r.name.as_str()), Some("Egg Fried Rice"));
        assert!(find_recipe("42").is_none());
    }
}
