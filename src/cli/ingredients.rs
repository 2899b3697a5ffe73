use anyhow::Result;
use brokeeats_pantry::PantrySelection;
use brokeeats_shared::pantry::PantryItem;
use serde::Serialize;

use super::Context;

#[derive(Serialize)]
struct CategoryView<'a> {
    category: &'a str,
    items: Vec<&'a PantryItem>,
}

pub fn render_ingredients(ctx: &Context, selection: &PantrySelection) -> Result<String> {
    let groups = selection.grouped();

    if ctx.json {
        let view = groups
            .into_iter()
            .map(|(category, items)| CategoryView { category, items })
            .collect::<Vec<_>>();

        return Ok(serde_json::to_string_pretty(&view)?);
    }

    let mut out = String::new();
    for (category, items) in groups {
        let names = items.iter().map(|i| i.name.as_str()).collect::<Vec<_>>();
        out.push_str(&format!("{category}: {}\n", names.join(", ")));
    }

    Ok(out.trim_end().to_owned())
}

pub fn run_ingredients(ctx: &Context) -> Result<()> {
    println!("{}", render_ingredients(ctx, &PantrySelection::default())?);

    Ok(())
}
