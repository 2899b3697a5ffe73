use brokeeats_shared::recipe::{Recipe, recipes};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::RandomSource;

/// Recipes may cost up to half again the daily budget.
pub const BUDGET_SLACK: f64 = 1.5;

/// Longest plan accepted, one year. Keep in sync with the `days` rule below.
pub const MAX_DAYS: u32 = 366;

#[derive(Validate, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetInput {
    #[validate(range(exclusive_min = 0.0, message = "Budget must be a positive number"))]
    pub total_budget: f64,
    #[validate(range(
        min = 1,
        max = 366,
        message = "Days must be a positive number of at most 366"
    ))]
    pub days: u32,
}

impl BudgetInput {
    pub fn new(total_budget: f64, days: u32) -> Self {
        Self { total_budget, days }
    }

    pub fn daily_budget(&self) -> f64 {
        self.total_budget / self.days as f64
    }

    /// Rejects non-positive or non-finite budgets and a zero day count.
    pub fn check(&self) -> brokeeats_shared::Result<()> {
        if !self.total_budget.is_finite() {
            brokeeats_shared::invalid!("Budget must be a finite number");
        }

        self.validate()?;

        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct BudgetSelector<'a> {
    catalog: &'a [Recipe],
}

impl Default for BudgetSelector<'static> {
    fn default() -> Self {
        Self::new(recipes())
    }
}

impl<'a> BudgetSelector<'a> {
    pub fn new(catalog: &'a [Recipe]) -> Self {
        Self { catalog }
    }

    /// Catalog recipes costing at most `daily_budget * BUDGET_SLACK`, in catalog order.
    pub fn candidates(&self, daily_budget: f64) -> Vec<&'a Recipe> {
        let limit = daily_budget * BUDGET_SLACK;

        self.catalog
            .iter()
            .filter(|recipe| recipe.estimated_cost <= limit)
            .collect()
    }

    /// Picks one candidate per day, uniformly and with replacement.
    ///
    /// Returns an empty list when no recipe is affordable. `input` is
    /// expected to have passed [`BudgetInput::check`].
    pub fn select<S: RandomSource + ?Sized>(
        &self,
        input: &BudgetInput,
        rng: &mut S,
    ) -> Vec<&'a Recipe> {
        let candidates = self.candidates(input.daily_budget());

        tracing::debug!(
            daily_budget = input.daily_budget(),
            candidates = candidates.len(),
            days = input.days,
            "selecting budget recipes"
        );

        if candidates.is_empty() {
            return vec![];
        }

        (0..input.days)
            .map(|_| candidates[rng.pick_index(candidates.len())])
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlan<'a> {
    pub total_budget: f64,
    pub days: u32,
    pub daily_budget: f64,
    pub recipes: Vec<&'a Recipe>,
}

impl<'a> BudgetPlan<'a> {
    pub fn generate<S: RandomSource + ?Sized>(
        selector: &BudgetSelector<'a>,
        input: BudgetInput,
        rng: &mut S,
    ) -> brokeeats_shared::Result<Self> {
        input.check()?;

        let recipes = selector.select(&input, rng);

        if recipes.is_empty() {
            tracing::warn!(
                total_budget = input.total_budget,
                days = input.days,
                "no recipes found for budget"
            );
        }

        Ok(Self {
            total_budget: input.total_budget,
            days: input.days,
            daily_budget: input.daily_budget(),
            recipes,
        })
    }

    pub fn total_cost(&self) -> f64 {
        self.recipes.iter().map(|r| r.estimated_cost).sum()
    }

    /// Budget left over; negative when the slack pushed the plan over budget.
    pub fn savings(&self) -> f64 {
        self.total_budget - self.total_cost()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.recipes.len() == self.days as usize
    }
}
