use anyhow::Result;
use brokeeats_mealplan::{BudgetInput, BudgetPlan, BudgetSelector};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use super::Context;

/// Parses the freeform budget and day fields into a checked [`BudgetInput`].
pub fn parse_budget_input(
    budget: Option<&str>,
    days: Option<&str>,
) -> brokeeats_shared::Result<BudgetInput> {
    let budget = budget.map(str::trim).filter(|v| !v.is_empty());
    let days = days.map(str::trim).filter(|v| !v.is_empty());

    let (Some(budget), Some(days)) = (budget, days) else {
        brokeeats_shared::invalid!("Please enter both budget and number of days");
    };

    let Ok(total_budget) = budget.parse::<f64>() else {
        brokeeats_shared::invalid!("Please enter valid positive numbers");
    };

    let days = match days.parse::<i64>() {
        Ok(days) if days > 0 => u32::try_from(days).ok(),
        _ => None,
    };

    let Some(days) = days else {
        brokeeats_shared::invalid!("Please enter valid positive numbers");
    };

    let input = BudgetInput::new(total_budget, days);
    input.check()?;

    Ok(input)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanView<'a> {
    #[serde(flatten)]
    plan: &'a BudgetPlan<'a>,
    total_cost: f64,
    savings: f64,
}

pub fn render_plan(ctx: &Context, plan: &BudgetPlan<'_>) -> Result<String> {
    if ctx.json {
        let view = PlanView {
            plan,
            total_cost: plan.total_cost(),
            savings: plan.savings(),
        };

        return Ok(serde_json::to_string_pretty(&view)?);
    }

    let mut out = String::from("Your Meal Plan\n");
    out.push_str(&format!(
        "Budget: {} ({} per day for {} days)\n",
        ctx.money(plan.total_budget),
        ctx.money(plan.daily_budget),
        plan.days
    ));

    if plan.is_empty() {
        out.push_str("\nNo recipes found for your budget. ");
        out.push_str("Try increasing your budget or reducing the number of days.");
        return Ok(out);
    }

    out.push_str(&format!(
        "Total cost: {}  Savings: {}\n\nRecommended Recipes\n",
        ctx.money(plan.total_cost()),
        ctx.money(plan.savings())
    ));

    for (day, recipe) in plan.recipes.iter().enumerate() {
        out.push_str(&format!(
            "Day {:<3} {:<28} {:>7}  {:>3} min  {}  [{}]\n",
            day + 1,
            recipe.name,
            ctx.money(recipe.estimated_cost),
            recipe.cook_time,
            recipe.difficulty,
            recipe.id
        ));
    }

    Ok(out.trim_end().to_owned())
}

pub fn run_plan(ctx: &Context, budget: Option<&str>, days: Option<&str>) -> Result<()> {
    let input = parse_budget_input(budget, days)?;
    let selector = BudgetSelector::default();

    let plan = match ctx.seed {
        Some(seed) => BudgetPlan::generate(&selector, input, &mut StdRng::seed_from_u64(seed))?,
        None => BudgetPlan::generate(&selector, input, &mut rand::rng())?,
    };

    tracing::info!(
        total_budget = plan.total_budget,
        days = plan.days,
        recipes = plan.recipes.len(),
        seeded = ctx.seed.is_some(),
        "meal plan generated"
    );

    println!("{}", render_plan(ctx, &plan)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numbers() {
        let input = parse_budget_input(Some(" 10 "), Some("2")).unwrap();
        assert_eq!(input, BudgetInput::new(10.0, 2));
        assert_eq!(input.daily_budget(), 5.0);
    }

    #[test]
    fn missing_values_are_rejected() {
        for (budget, days) in [(None, Some("2")), (Some("10"), None), (Some(""), Some(" "))] {
            let err = parse_budget_input(budget, days).unwrap_err();
            assert!(err.is_invalid_input());
            assert!(err.to_string().contains("both budget and number of days"));
        }
    }

    #[test]
    fn non_positive_values_are_rejected() {
        for (budget, days) in [
            ("0", "2"),
            ("10", "0"),
            ("-3", "2"),
            ("10", "-1"),
            ("ten", "2"),
            ("10", "2.5"),
            ("NaN", "2"),
            ("10", "99999999999"),
            ("1e12", "4000000000"),
            ("1e12", "367"),
        ] {
            let err = parse_budget_input(Some(budget), Some(days)).unwrap_err();
            assert!(err.is_invalid_input(), "{budget}/{days}");
        }
    }

    #[test]
    fn empty_plan_renders_no_results() {
        let ctx = Context::new(&crate::Config::default(), false);
        let selector = BudgetSelector::default();
        let plan =
            BudgetPlan::generate(&selector, BudgetInput::new(0.5, 5), &mut rand::rng()).unwrap();

        let out = render_plan(&ctx, &plan).unwrap();
        assert!(out.contains("No recipes found for your budget"));
    }
}
