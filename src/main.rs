use anyhow::Result;
use brokeeats::cli::{Context, run_ingredients, run_pantry, run_plan, run_recipe};
use clap::{Parser, Subcommand};

/// brokeeats - Budget meal planning
#[derive(Parser)]
#[command(name = "brokeeats", version)]
#[command(about = "Budget meal planning from a built-in recipe list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick one affordable recipe per day
    Plan {
        /// Total budget for the whole period
        #[arg(long)]
        budget: Option<String>,

        /// Number of days to plan
        #[arg(long)]
        days: Option<String>,

        /// Seed for a reproducible plan (overrides config file)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Rank recipes by the pantry ingredients you have
    Pantry {
        /// Pantry ingredient names, e.g. Eggs Rice "Soy Sauce"
        names: Vec<String>,

        /// Selected ingredients as a JSON array of names
        #[arg(long, conflicts_with = "names")]
        selection: Option<String>,
    },
    /// List pantry ingredients by category
    Ingredients,
    /// Show a recipe
    Recipe {
        /// Recipe id
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = brokeeats::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    brokeeats::observability::init_observability(&config.logging.level, config.logging.format)?;

    let mut ctx = Context::new(&config, cli.json);

    let result = match cli.command {
        Commands::Plan { budget, days, seed } => {
            ctx.seed = seed.or(ctx.seed);
            run_plan(&ctx, budget.as_deref(), days.as_deref())
        }
        Commands::Pantry { names, selection } => run_pantry(&ctx, &names, selection.as_deref()),
        Commands::Ingredients => run_ingredients(&ctx),
        Commands::Recipe { id } => run_recipe(&ctx, &id),
    };

    if let Err(err) = &result {
        if let Some(brokeeats_shared::Error::InvalidInput(message)) =
            err.downcast_ref::<brokeeats_shared::Error>()
        {
            eprintln!("Invalid input: {message}");
            std::process::exit(2);
        }
    }

    result
}
