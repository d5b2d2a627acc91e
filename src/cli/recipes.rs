use std::{fs, path::PathBuf};

use clap::{Args, Subcommand};
use mealplanner::Session;
use mealplanner_db::Store;
use mealplanner_recipe::{IngredientInput, RecipeFilter, RecipeInput};
use mealplanner_shared::recipe::IngredientUnit;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

#[derive(Subcommand)]
pub enum RecipesCommand {
    /// List recipes, optionally filtered
    List {
        /// Text searched in name and description
        #[arg(long, default_value = "")]
        query: String,

        #[arg(long)]
        category: Option<String>,

        /// Longest preparation time in minutes (0 = no limit)
        #[arg(long, default_value_t = 0)]
        max_time: u32,
    },
    /// List the categories in use
    Categories,
    /// Add a recipe
    Add {
        #[command(flatten)]
        recipe: RecipeArgs,
    },
    /// Change a recipe; options not given keep their current value
    Edit {
        id: u64,

        #[command(flatten)]
        recipe: RecipeArgs,
    },
    /// Delete a recipe
    Delete { id: u64 },
    /// Import recipes from a `{"recipes": [...]}` JSON file
    Import { file: PathBuf },
    /// Export all recipes as JSON (stdout when no file is given)
    Export { file: Option<PathBuf> },
}

#[derive(Args, Default)]
pub struct RecipeArgs {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    category: Option<String>,

    /// Preparation time in minutes
    #[arg(long)]
    time: Option<u32>,

    /// Servings the ingredient quantities are written for
    #[arg(long)]
    servings: Option<u32>,

    #[arg(long)]
    image: Option<String>,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    instructions: Option<String>,

    /// NAME:QUANTITY:UNIT, repeatable; replaces every ingredient when given
    #[arg(long = "ingredient", value_parser = parse_ingredient)]
    ingredients: Vec<IngredientInput>,
}

impl RecipeArgs {
    fn apply(self, mut input: RecipeInput) -> RecipeInput {
        if let Some(name) = self.name {
            input.name = name;
        }
        if let Some(category) = self.category {
            input.category = category;
        }
        if let Some(time) = self.time {
            input.time = time;
        }
        if let Some(servings) = self.servings {
            input.servings = servings;
        }
        if let Some(image) = self.image {
            input.image = image;
        }
        if let Some(description) = self.description {
            input.description = description;
        }
        if let Some(instructions) = self.instructions {
            input.instructions = instructions;
        }
        if !self.ingredients.is_empty() {
            input.ingredients = self.ingredients;
        }

        input
    }
}

fn parse_ingredient(value: &str) -> Result<IngredientInput, String> {
    let mut parts = value.rsplitn(3, ':');
    let (Some(unit), Some(quantity), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected NAME:QUANTITY:UNIT, got '{value}'"));
    };

    let quantity = quantity
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid quantity '{quantity}' in '{value}'"))?;

    Ok(IngredientInput {
        name: name.trim().to_owned(),
        quantity,
        unit: IngredientUnit::parse(unit),
    })
}

pub fn run<S: Store>(session: &mut Session<S>, command: RecipesCommand) -> anyhow::Result<()> {
    match command {
        RecipesCommand::List {
            query,
            category,
            max_time,
        } => list(
            session,
            &RecipeFilter {
                query,
                category,
                max_time,
            },
        ),
        RecipesCommand::Categories => {
            for category in mealplanner_recipe::categories(session.catalog()) {
                println!("{category}");
            }

            Ok(())
        }
        RecipesCommand::Add { recipe } => {
            let id = session.add_recipe(recipe.apply(RecipeInput::default()))?;
            println!("Added recipe {id}");

            Ok(())
        }
        RecipesCommand::Edit { id, recipe } => {
            let Some(current) = session.catalog().get(id) else {
                anyhow::bail!("recipe {id} not found");
            };

            let input = recipe.apply(RecipeInput::from(current));
            session.update_recipe(id, input)?;
            println!("Updated recipe {id}");

            Ok(())
        }
        RecipesCommand::Delete { id } => {
            let recipe = session.delete_recipe(id)?;
            println!("Deleted recipe {id} ({})", recipe.name);

            Ok(())
        }
        RecipesCommand::Import { file } => {
            let data = fs::read(&file)?;
            let imported = session.import_recipes(&data)?;
            println!("Imported {imported} recipes into profile '{}'", session.profile());

            Ok(())
        }
        RecipesCommand::Export { file } => {
            let data = session.export_recipes()?;
            super::write_output(file.as_deref(), &data)
        }
    }
}

fn list<S: Store>(session: &Session<S>, filter: &RecipeFilter) -> anyhow::Result<()> {
    #[derive(Tabled)]
    struct RecipeRow {
        #[tabled(rename = "ID")]
        id: u64,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Category")]
        category: String,
        #[tabled(rename = "Time (min)")]
        time: u32,
        #[tabled(rename = "Servings")]
        servings: u32,
    }

    let recipes = mealplanner_recipe::filter(session.catalog(), filter);
    if recipes.is_empty() {
        eprintln!("No recipes found");
        return Ok(());
    }

    let rows: Vec<RecipeRow> = recipes
        .into_iter()
        .map(|r| RecipeRow {
            id: r.id,
            name: r.name.to_owned(),
            category: r.category.to_owned(),
            time: r.time,
            servings: r.servings,
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(3..)).with(Alignment::right()))
        .to_string();
    println!("{table}");

    Ok(())
}
