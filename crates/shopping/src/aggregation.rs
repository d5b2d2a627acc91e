use std::collections::HashMap;

use mealplanner_shared::{
    mealplan::WeeklyPlan,
    recipe::{Ingredient, IngredientUnit, RecipeCatalog},
    shopping::LineItem,
};

use crate::unit;

/// Ingredient Aggregation Service
///
/// Stateless domain service that turns a week of planned meals into one
/// consolidated shopping list:
/// - "flour 200g" + " FLOUR 0.3kg" = "Flour 500 g"
/// - "water 800ml" + "water 0.5l" = "Water 1.3 l"
/// - "egg 2 pcs" + "egg 100 g" = 2 separate line items (different base units)
pub struct IngredientAggregationService;

impl IngredientAggregationService {
    /// Builds the shopping list for `plan`.
    ///
    /// Slots whose recipe is missing from `catalog` are skipped. Each recipe
    /// is scaled by `requested servings / base servings`, quantities are
    /// summed per (normalized name, base unit) and the result is sorted by
    /// (name, unit). Purchased flags are all false.
    pub fn aggregate(plan: &WeeklyPlan, catalog: &RecipeCatalog) -> Vec<LineItem> {
        let mut groups: HashMap<(String, IngredientUnit), f64> = HashMap::new();
        let mut visited = 0usize;

        for (day, meal, slot) in plan.slots() {
            let Some(recipe_id) = slot.recipe_id else {
                continue;
            };

            let Some(recipe) = catalog.get(recipe_id) else {
                tracing::debug!(day, %meal, recipe_id, "planned recipe not in catalog, skipping");
                continue;
            };

            visited += 1;

            let scale = f64::from(slot.servings) / f64::from(recipe.base_servings());

            for ingredient in &recipe.ingredients {
                Self::accumulate(&mut groups, ingredient, scale);
            }
        }

        let mut result: Vec<LineItem> = groups
            .into_iter()
            .map(|((name, base_unit), base_quantity)| {
                let (quantity, unit) = unit::to_display(&base_unit, base_quantity);
                LineItem::new(name, quantity, unit.to_string())
            })
            .collect();

        result.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.unit.cmp(&b.unit)));

        tracing::debug!(slots = visited, items = result.len(), "shopping list aggregated");

        result
    }

    /// Drops line items whose quantity rounds to zero.
    pub fn without_zero_quantities(items: Vec<LineItem>) -> Vec<LineItem> {
        items.into_iter().filter(|item| item.quantity > 0.0).collect()
    }

    /// Normalize ingredient name (trim, title case)
    ///
    /// The first letter of every run of letters is upper-cased and the rest
    /// lower-cased, so "pepe NERO" and " Pepe nero" both become "Pepe Nero".
    pub fn normalize_name(name: &str) -> String {
        let mut normalized = String::with_capacity(name.len());
        let mut previous_is_letter = false;

        for c in name.trim().chars() {
            if previous_is_letter {
                normalized.extend(c.to_lowercase());
            } else {
                normalized.extend(c.to_uppercase());
            }
            previous_is_letter = c.is_alphabetic();
        }

        normalized
    }

    fn accumulate(
        groups: &mut HashMap<(String, IngredientUnit), f64>,
        ingredient: &Ingredient,
        scale: f64,
    ) {
        let name = Self::normalize_name(&ingredient.name);
        if name.is_empty() {
            return;
        }

        let (base_unit, factor) = unit::to_base(&ingredient.unit);
        *groups.entry((name, base_unit)).or_insert(0.0) += ingredient.quantity * scale * factor;
    }
}
