use anyhow::Result;
use brokeeats_pantry::{PantryMatcher, PantryQuery, PantrySelection, RecipeMatch};
use brokeeats_shared::Error;

use super::Context;

/// Builds the matcher query from either a JSON handoff or pantry names.
///
/// Names go through a [`PantrySelection`], so only seed ingredients are
/// accepted there; the JSON handoff is passed through as is.
pub fn pantry_query(
    names: &[String],
    selection: Option<&str>,
) -> brokeeats_shared::Result<PantryQuery> {
    if let Some(json) = selection {
        return PantryQuery::from_json(json);
    }

    let mut pantry = PantrySelection::default();
    for name in names {
        let name = name.trim();
        let already_selected = pantry
            .selected()
            .any(|i| i.name.eq_ignore_ascii_case(name));

        if already_selected {
            continue;
        }

        pantry
            .toggle_by_name(name)
            .map_err(|_| Error::InvalidInput(format!("Unknown pantry ingredient: {name}")))?;
    }

    pantry.query()
}

pub fn render_matches(
    ctx: &Context,
    query: &PantryQuery,
    matches: &[RecipeMatch<'_>],
) -> Result<String> {
    if ctx.json {
        return Ok(serde_json::to_string_pretty(matches)?);
    }

    let mut out = format!(
        "Recipes You Can Make ({})\nWith: {}\n",
        matches.len(),
        query.ingredients().join(", ")
    );

    if matches.is_empty() {
        out.push_str("\nNo matching recipes. Try selecting more ingredients from your pantry.");
        return Ok(out);
    }

    for m in matches {
        out.push_str(&format!(
            "\n{} [{}]\n  {}% match{}  {}  {} min\n  You have: {}\n",
            m.recipe.name,
            m.recipe.id,
            m.match_percentage,
            if m.is_strong() { " (strong)" } else { "" },
            ctx.money(m.recipe.estimated_cost),
            m.recipe.cook_time,
            m.matched_ingredients.join(", ")
        ));
    }

    Ok(out.trim_end().to_owned())
}

pub fn run_pantry(ctx: &Context, names: &[String], selection: Option<&str>) -> Result<()> {
    let query = pantry_query(names, selection)?;
    let matches = PantryMatcher::default().find(query.ingredients());

    tracing::info!(
        ingredients = query.ingredients().len(),
        matches = matches.len(),
        "pantry recipes matched"
    );

    println!("{}", render_matches(ctx, &query, &matches)?);

    Ok(())
}
