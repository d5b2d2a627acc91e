pub mod aggregation;
pub mod checklist;
pub mod export;
pub mod store;
pub mod unit;

pub use aggregation::IngredientAggregationService;
pub use checklist::{presentation_order, reconcile};
pub use export::{to_csv, to_xlsx, write_csv};
pub use store::{ChecklistStore, DEFAULT_RETAINED_WEEKS};
pub use unit::format_quantity;

use mealplanner_shared::{mealplan::WeeklyPlan, recipe::RecipeCatalog, shopping::LineItem};

/// Shopping list of `plan`, see [`IngredientAggregationService::aggregate`].
pub fn aggregate(plan: &WeeklyPlan, catalog: &RecipeCatalog) -> Vec<LineItem> {
    IngredientAggregationService::aggregate(plan, catalog)
}
