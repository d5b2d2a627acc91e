use mealplanner_shared::{
    mealplan::{DayPlan, Meal, Slot, WeeklyPlan},
    recipe::RecipeCatalog,
};
use strum::VariantArray;
use time::Date;
use validator::Validate;

pub const MIN_SERVINGS: u32 = 1;
pub const MAX_SERVINGS: u32 = 12;

#[derive(Validate, Clone, Debug)]
pub struct SetSlotInput {
    #[validate(range(max = 6))]
    pub day: usize,
    pub meal: Meal,
    pub recipe_id: u64,
    pub servings: u32,
}

/// Assigns a recipe to one slot. Servings are clamped to 1..=12.
pub fn set_slot(
    plan: &mut WeeklyPlan,
    catalog: &RecipeCatalog,
    input: SetSlotInput,
) -> mealplanner_shared::Result<()> {
    input.validate()?;

    if !catalog.contains(input.recipe_id) {
        mealplanner_shared::not_found!("recipe {}", input.recipe_id);
    }

    let Some(slot) = plan.slot_mut(input.day, input.meal) else {
        mealplanner_shared::user!("no slot for day {} {}", input.day, input.meal);
    };

    slot.recipe_id = Some(input.recipe_id);
    slot.servings = input.servings.clamp(MIN_SERVINGS, MAX_SERVINGS);

    Ok(())
}

pub fn clear_slot(plan: &mut WeeklyPlan, day: usize, meal: Meal) -> mealplanner_shared::Result<()> {
    let Some(slot) = plan.slot_mut(day, meal) else {
        mealplanner_shared::user!("no slot for day {day} {meal}");
    };

    slot.recipe_id = None;

    Ok(())
}

/// Rebuilds a plan for the week of `start` from loosely stored days.
///
/// Days outside the week are ignored, missing days and meals become empty
/// slots, and a day listed twice keeps its last occurrence per meal.
pub fn normalize(start: Date, days: impl IntoIterator<Item = DayPlan>) -> WeeklyPlan {
    let mut plan = WeeklyPlan::empty(start);

    for day in days {
        let Some(target) = plan.days.iter_mut().find(|d| d.date == day.date) else {
            tracing::debug!(date = %day.date, "planned day outside of week, ignoring");
            continue;
        };

        for (meal, slot) in day.slots {
            target.slots.insert(meal, slot);
        }
    }

    for day in &mut plan.days {
        for meal in Meal::VARIANTS {
            day.slots.entry(*meal).or_insert_with(Slot::default);
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealplanner_shared::recipe::Recipe;
    use time::macros::date;

    fn catalog() -> RecipeCatalog {
        vec![Recipe {
            id: 1,
            name: "Carbonara".to_owned(),
            ..Default::default()
        }]
        .into()
    }

    #[test]
    fn test_set_slot_clamps_servings() {
        let mut plan = WeeklyPlan::empty(date!(2025 - 10 - 20));

        set_slot(
            &mut plan,
            &catalog(),
            SetSlotInput {
                day: 2,
                meal: Meal::Dinner,
                recipe_id: 1,
                servings: 40,
            },
        )
        .unwrap();

        let slot = plan.slot(2, Meal::Dinner).unwrap();
        assert_eq!(slot.recipe_id, Some(1));
        assert_eq!(slot.servings, MAX_SERVINGS);
    }

    #[test]
    fn test_set_slot_rejects_bad_input() {
        let mut plan = WeeklyPlan::empty(date!(2025 - 10 - 20));
        let input = SetSlotInput {
            day: 7,
            meal: Meal::Lunch,
            recipe_id: 1,
            servings: 2,
        };

        assert!(set_slot(&mut plan, &catalog(), input.clone()).is_err());
        assert!(
            set_slot(
                &mut plan,
                &catalog(),
                SetSlotInput {
                    day: 0,
                    recipe_id: 9,
                    ..input
                }
            )
            .is_err()
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn test_clear_slot() {
        let mut plan = WeeklyPlan::empty(date!(2025 - 10 - 20));
        plan.slot_mut(0, Meal::Lunch).unwrap().recipe_id = Some(1);

        clear_slot(&mut plan, 0, Meal::Lunch).unwrap();

        assert!(plan.is_empty());
        assert!(clear_slot(&mut plan, 9, Meal::Lunch).is_err());
    }

    #[test]
    fn test_normalize_fills_missing_meals() {
        let start = date!(2025 - 10 - 20);
        let mut tuesday = DayPlan {
            date: date!(2025 - 10 - 21),
            slots: Default::default(),
        };
        tuesday.slots.insert(
            Meal::Dinner,
            Slot {
                recipe_id: Some(3),
                servings: 4,
            },
        );
        let outside = DayPlan::empty(date!(2025 - 11 - 03));

        let plan = normalize(start, [tuesday, outside]);

        assert_eq!(plan.days.len(), 7);
        assert_eq!(plan.slot(1, Meal::Lunch), Some(&Slot::default()));
        assert_eq!(plan.slot(1, Meal::Dinner).unwrap().recipe_id, Some(3));
        assert_eq!(plan.slots().filter(|(_, _, s)| !s.is_empty()).count(), 1);
    }
}
