mod ingredients;
mod pantry;
mod plan;
mod recipe;

pub use ingredients::*;
pub use pantry::*;
pub use plan::*;
pub use recipe::*;

use crate::Config;

/// Settings shared by every command's rendering.
#[derive(Debug, Clone)]
pub struct Context {
    pub json: bool,
    pub currency: String,
    pub seed: Option<u64>,
}

impl Context {
    pub fn new(config: &Config, json: bool) -> Self {
        Self {
            json,
            currency: config.display.currency_symbol.to_owned(),
            seed: config.planner.seed,
        }
    }

    pub fn money(&self, value: f64) -> String {
        if value < 0.0 {
            format!("-{}{:.2}", self.currency, value.abs())
        } else {
            format!("{}{:.2}", self.currency, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_formats_two_decimals() {
        let ctx = Context::new(&Config::default(), false);
        assert_eq!(ctx.money(1.2), "$1.20");
        assert_eq!(ctx.money(0.0), "$0.00");
        assert_eq!(ctx.money(-0.4), "-$0.40");
    }
}
