use mealplanner_shared::mealplan::WeeklyPlan;
use serde::Serialize;
use sha3::{Digest, Sha3_224};

#[derive(Serialize)]
struct CanonicalSlot<'a> {
    date: String,
    meal: &'a str,
    recipe_id: Option<u64>,
    servings: u32,
}

/// Hex digest of the slot assignments of `plan`.
///
/// Two plans with the same recipes and servings on the same dates always
/// produce the same fingerprint.
pub fn fingerprint(plan: &WeeklyPlan) -> String {
    let canonical: Vec<CanonicalSlot> = plan
        .days
        .iter()
        .flat_map(|day| {
            day.slots.iter().map(move |(meal, slot)| CanonicalSlot {
                date: mealplanner_shared::format_date(day.date),
                meal: meal.as_ref(),
                recipe_id: slot.recipe_id,
                servings: slot.servings,
            })
        })
        .collect();

    let mut hasher = Sha3_224::default();
    // Serializing plain structs of strings and integers cannot fail.
    hasher.update(serde_json::to_vec(&canonical).unwrap_or_default());

    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
