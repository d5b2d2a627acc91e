use clap::{Subcommand, ValueEnum};
use mealplanner::{SaveOutcome, Session};
use mealplanner_db::Store;
use mealplanner_mealplan::SetSlotInput;
use mealplanner_shared::mealplan::Meal;
use tabled::{Table, Tabled, settings::Style};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Subcommand)]
pub enum PlanCommand {
    /// Show the week's lunch/dinner grid
    Show,
    /// Put a recipe in a slot
    Set {
        #[arg(value_enum)]
        day: Weekday,

        /// lunch/pranzo or dinner/cena
        #[arg(value_parser = parse_meal)]
        meal: Meal,

        recipe_id: u64,

        #[arg(long, default_value_t = 2)]
        servings: u32,
    },
    /// Empty a slot
    Clear {
        #[arg(value_enum)]
        day: Weekday,

        #[arg(value_parser = parse_meal)]
        meal: Meal,
    },
}

fn parse_meal(value: &str) -> Result<Meal, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("unknown meal '{value}', expected lunch or dinner"))
}

pub fn run<S: Store>(session: &mut Session<S>, command: PlanCommand) -> anyhow::Result<()> {
    match command {
        PlanCommand::Show => {}
        PlanCommand::Set {
            day,
            meal,
            recipe_id,
            servings,
        } => {
            let outcome = session.set_slot(SetSlotInput {
                day: day.index(),
                meal,
                recipe_id,
                servings,
            })?;
            report(outcome);
        }
        PlanCommand::Clear { day, meal } => {
            let outcome = session.clear_slot(day.index(), meal)?;
            report(outcome);
        }
    }

    show(session);

    Ok(())
}

fn report(outcome: SaveOutcome) {
    if outcome == SaveOutcome::Failed {
        eprintln!("Plan could not be saved; it will be retried on exit");
    }
}

fn show<S: Store>(session: &Session<S>) {
    #[derive(Tabled)]
    struct DayRow {
        #[tabled(rename = "Date")]
        date: String,
        #[tabled(rename = "Lunch")]
        lunch: String,
        #[tabled(rename = "Dinner")]
        dinner: String,
    }

    let catalog = session.catalog();
    let plan = session.plan();

    let cell = |day: usize, meal: Meal| -> String {
        let Some(slot) = plan.slot(day, meal) else {
            return String::new();
        };
        let Some(recipe_id) = slot.recipe_id else {
            return "-".to_owned();
        };

        match catalog.get(recipe_id) {
            Some(recipe) => format!("{} ({} serv.)", recipe.label(), slot.servings),
            None => format!("#{recipe_id} (missing)"),
        }
    };

    let rows: Vec<DayRow> = plan
        .days
        .iter()
        .enumerate()
        .map(|(index, day)| DayRow {
            date: format!("{} {}", day.date.weekday(), mealplanner_shared::format_date(day.date)),
            lunch: cell(index, Meal::Lunch),
            dinner: cell(index, Meal::Dinner),
        })
        .collect();

    println!("Week of {} ({})", mealplanner_shared::format_date(plan.start), session.profile());
    println!("{}", Table::new(&rows).with(Style::rounded()));
}
