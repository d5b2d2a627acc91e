use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use mealplanner::Session;
use mealplanner_db::Store;
use mealplanner_shopping::format_quantity;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

#[derive(Subcommand)]
pub enum ShoppingCommand {
    /// Show the week's shopping list, still-to-buy items first
    Show,
    /// Mark an item as purchased, or unmark it
    Check { name: String, unit: String },
    /// Mark every item as not purchased
    Reset,
    /// Export the list (stdout when no file is given)
    Export {
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

pub fn run<S: Store>(session: &mut Session<S>, command: ShoppingCommand) -> anyhow::Result<()> {
    match command {
        ShoppingCommand::Show => {}
        ShoppingCommand::Check { name, unit } => {
            let purchased = session.toggle_item(&name, &unit)?;
            tracing::info!(name = %name, unit = %unit, purchased, "item toggled");
        }
        ShoppingCommand::Reset => session.reset_checklist()?,
        ShoppingCommand::Export { file, format } => {
            let items = session.shopping_list();
            let data = match format {
                ExportFormat::Csv => mealplanner_shopping::to_csv(&items)?.into_bytes(),
                ExportFormat::Xlsx => mealplanner_shopping::to_xlsx(&items)?,
            };
            return super::write_output(file.as_deref(), &data);
        }
    }

    show(session);

    Ok(())
}

fn show<S: Store>(session: &Session<S>) {
    #[derive(Tabled)]
    struct ItemRow {
        #[tabled(rename = "")]
        check: &'static str,
        #[tabled(rename = "Ingredient")]
        name: String,
        #[tabled(rename = "Quantity")]
        quantity: String,
        #[tabled(rename = "Unit")]
        unit: String,
    }

    let items = session.shopping_list();
    if items.is_empty() {
        eprintln!("Nothing to buy for the week of {}", session.week_key());
        return;
    }

    let rows: Vec<ItemRow> = items
        .into_iter()
        .map(|item| ItemRow {
            check: if item.purchased { "[x]" } else { "[ ]" },
            quantity: format_quantity(item.quantity),
            name: item.name,
            unit: item.unit,
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}
