mod file;
mod profile;
mod row;

pub use file::*;
pub use profile::*;

use std::collections::BTreeMap;

use mealplanner_shared::{
    mealplan::WeeklyPlan, recipe::RecipeCatalog, shopping::LineItem,
};
use time::Date;

/// Checklists of one profile keyed by week start.
pub type Checklists = BTreeMap<Date, Vec<LineItem>>;

/// Persistence of everything a profile owns.
///
/// Loading a plan or checklists that were never saved yields an empty value
/// rather than an error.
pub trait Store {
    /// `None` when the profile has never saved a recipe library.
    fn load_recipes(&self, profile: &str) -> mealplanner_shared::Result<Option<RecipeCatalog>>;

    fn save_recipes(&self, profile: &str, catalog: &RecipeCatalog) -> mealplanner_shared::Result<()>;

    fn load_plan(&self, profile: &str, week_start: Date) -> mealplanner_shared::Result<WeeklyPlan>;

    /// Replaces the stored rows of `plan.start`; other weeks are untouched.
    fn save_plan(&self, profile: &str, plan: &WeeklyPlan) -> mealplanner_shared::Result<()>;

    fn load_checklists(&self, profile: &str) -> mealplanner_shared::Result<Checklists>;

    fn save_checklists(&self, profile: &str, checklists: &Checklists) -> mealplanner_shared::Result<()>;
}
