use anyhow::Result;
use brokeeats_shared::recipe::{Recipe, find_recipe};

use super::Context;

pub fn lookup_recipe(id: &str) -> brokeeats_shared::Result<&'static Recipe> {
    match find_recipe(id.trim()) {
        Some(recipe) => Ok(recipe),
        None => brokeeats_shared::not_found!("recipe {}", id.trim()),
    }
}

pub fn render_recipe(ctx: &Context, recipe: &Recipe) -> Result<String> {
    if ctx.json {
        return Ok(serde_json::to_string_pretty(recipe)?);
    }

    let mut out = format!("{}\n{}\n\n", recipe.name, recipe.description);
    out.push_str(&format!(
        "Cost: {} ({} per serving)  Servings: {}  Cook time: {} min  Difficulty: {}\n",
        ctx.money(recipe.estimated_cost),
        ctx.money(recipe.cost_per_serving()),
        recipe.servings,
        recipe.cook_time,
        recipe.difficulty
    ));

    if !recipe.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", recipe.tags.join(", ")));
    }

    out.push_str("\nIngredients\n");
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("  - {ingredient}\n"));
    }

    out.push_str("\nInstructions\n");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("  {}. {instruction}\n", step + 1));
    }

    Ok(out.trim_end().to_owned())
}

pub fn run_recipe(ctx: &Context, id: &str) -> Result<()> {
    let recipe = lookup_recipe(id)?;
    tracing::info!(id = recipe.id.as_str(), "recipe detail");

    println!("{}", render_recipe(ctx, recipe)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_recipe_is_not_found() {
        let err = lookup_recipe("99").unwrap_err();
        assert!(matches!(err, brokeeats_shared::Error::NotFound(_)));
        assert_eq!(err.to_string(), "recipe 99 not found");
    }

    #[test]
    fn renders_numbered_instructions() {
        let ctx = Context::new(&crate::Config::default(), false);
        let out = render_recipe(&ctx, lookup_recipe(" 5 ").unwrap()).unwrap();

        assert!(out.starts_with("Peanut Butter Sandwich\nClassic protein-rich sandwich"));
        assert!(out.contains("Cost: $0.45 ($0.45 per serving)"));
        assert!(out.contains("  - 2 tbsp peanut butter"));
        assert!(out.ends_with("  3. Close sandwich and enjoy"));
    }
}
