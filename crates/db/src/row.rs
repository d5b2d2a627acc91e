use mealplanner_shared::{
    lenient,
    mealplan::{DayPlan, Meal, Slot, WeeklyPlan},
    shopping::LineItem,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// One stored plan slot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct PlanRow {
    pub week_start: Date,
    pub date: Date,
    pub meal: String,
    #[serde(default, deserialize_with = "lenient::optional_id")]
    pub recipe_id: Option<u64>,
    #[serde(
        default = "lenient::default_servings",
        deserialize_with = "lenient::servings"
    )]
    pub servings: u32,
}

impl PlanRow {
    pub fn from_plan(plan: &WeeklyPlan) -> Vec<Self> {
        plan.days
            .iter()
            .flat_map(|day| {
                day.slots.iter().map(|(meal, slot)| Self {
                    week_start: plan.start,
                    date: day.date,
                    meal: meal.to_string(),
                    recipe_id: slot.recipe_id,
                    servings: slot.servings,
                })
            })
            .collect()
    }

    /// Day entries of `week_start` found in `rows`. Rows with an unknown
    /// meal are skipped.
    pub fn into_days(rows: Vec<Self>, week_start: Date) -> Vec<DayPlan> {
        let mut days: Vec<DayPlan> = Vec::new();

        for row in rows.into_iter().filter(|row| row.week_start == week_start) {
            let Ok(meal) = row.meal.trim().parse::<Meal>() else {
                tracing::debug!(meal = %row.meal, date = %row.date, "unknown meal in stored plan, skipping");
                continue;
            };

            let slot = Slot {
                recipe_id: row.recipe_id,
                servings: row.servings,
            };

            match days.iter_mut().find(|day| day.date == row.date) {
                Some(day) => {
                    day.slots.insert(meal, slot);
                }
                None => {
                    let mut day = DayPlan {
                        date: row.date,
                        slots: Default::default(),
                    };
                    day.slots.insert(meal, slot);
                    days.push(day);
                }
            }
        }

        days
    }
}

/// One stored checklist entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct ChecklistRow {
    pub week_start: Date,
    #[serde(flatten)]
    pub item: LineItem,
}
