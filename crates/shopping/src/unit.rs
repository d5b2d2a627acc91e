use mealplanner_shared::recipe::IngredientUnit;

/// Base unit an ingredient is accumulated in, and the factor converting a
/// quantity expressed in `unit` into it.
///
/// Unknown units are their own base with factor 1, so they only ever merge
/// with the exact same unit.
pub fn to_base(unit: &IngredientUnit) -> (IngredientUnit, f64) {
    match unit {
        IngredientUnit::G => (IngredientUnit::G, 1.0),
        IngredientUnit::Kg => (IngredientUnit::G, 1000.0),
        IngredientUnit::Ml => (IngredientUnit::Ml, 1.0),
        IngredientUnit::L => (IngredientUnit::Ml, 1000.0),
        IngredientUnit::Pcs => (IngredientUnit::Pcs, 1.0),
        IngredientUnit::Tbsp => (IngredientUnit::Tbsp, 1.0),
        IngredientUnit::Tsp => (IngredientUnit::Tsp, 1.0),
        IngredientUnit::Other(other) => (IngredientUnit::Other(other.clone()), 1.0),
    }
}

/// Picks the friendly unit for an accumulated base quantity.
///
/// Grams and millilitres switch to kg / l from 1000 upwards. This is the only
/// place quantities get rounded.
pub fn to_display(base_unit: &IngredientUnit, base_quantity: f64) -> (f64, IngredientUnit) {
    match base_unit {
        IngredientUnit::G if base_quantity >= 1000.0 => {
            (round2(base_quantity / 1000.0), IngredientUnit::Kg)
        }
        IngredientUnit::Ml if base_quantity >= 1000.0 => {
            (round2(base_quantity / 1000.0), IngredientUnit::L)
        }
        other => (round2(base_quantity), other.clone()),
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Renders a display quantity without a trailing `.0` for whole numbers.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", round2(value))
    }
}
