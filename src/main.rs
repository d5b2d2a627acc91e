mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealplanner::{SaveOutcome, Session, SessionOptions};
use mealplanner_db::FileStore;
use time::{Date, OffsetDateTime};

use cli::{plan::PlanCommand, recipes::RecipesCommand, shopping::ShoppingCommand};

/// mealplanner - weekly meal planning and shopping lists
#[derive(Parser)]
#[command(name = "mealplanner")]
#[command(about = "Plan weekly meals and build the shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Profile to work on (defaults to profile.default from the config)
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Any day of the week to work on, YYYY-MM-DD (defaults to today)
    #[arg(long, global = true, value_parser = parse_week)]
    week: Option<Date>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the recipe library
    Recipes {
        #[command(subcommand)]
        command: RecipesCommand,
    },
    /// Show or edit the weekly plan
    Plan {
        #[command(subcommand)]
        command: PlanCommand,
    },
    /// Show, check off or export the shopping list
    Shopping {
        #[command(subcommand)]
        command: ShoppingCommand,
    },
}

fn parse_week(value: &str) -> Result<Date, String> {
    mealplanner_shared::parse_date(value).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealplanner::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealplanner::observability::init_observability(&config.observability)?;

    let profile = cli.profile.unwrap_or_else(|| config.profile.default.to_owned());
    let week = cli.week.unwrap_or_else(|| OffsetDateTime::now_utc().date());
    let store = FileStore::new(&config.data.dir);

    let mut session = Session::open(store, &profile, week, SessionOptions::from(&config))?;

    let result = match cli.command {
        Commands::Recipes { command } => cli::recipes::run(&mut session, command),
        Commands::Plan { command } => cli::plan::run(&mut session, command),
        Commands::Shopping { command } => cli::shopping::run(&mut session, command),
    };

    if session.save() == SaveOutcome::Failed {
        anyhow::bail!("plan for week {} could not be saved", session.week_key());
    }

    result
}
