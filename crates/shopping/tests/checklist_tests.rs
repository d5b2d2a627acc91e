use mealplanner_shared::{
    mealplan::{Meal, WeeklyPlan},
    recipe::{Ingredient, Recipe, RecipeCatalog},
    shopping::{LineItem, WeekKey},
};
use mealplanner_shopping::{ChecklistStore, IngredientAggregationService, presentation_order, reconcile};
use time::{Duration, macros::date};

fn item(name: &str, unit: &str, purchased: bool) -> LineItem {
    LineItem {
        purchased,
        ..LineItem::new(name, 100.0, unit)
    }
}

#[test]
fn test_reconcile_preserves_purchased_state() {
    let previous = vec![item("Garlic", "g", false), item("Tomato", "g", true)];
    let new_list = vec![item("Basil", "g", false), item("Tomato", "g", false)];

    let result = reconcile(new_list, Some(&previous));

    assert_eq!(result.len(), 2);
    assert_eq!(result[0], item("Basil", "g", false));
    assert_eq!(result[1], item("Tomato", "g", true));
    assert!(result.iter().all(|i| i.name != "Garlic"));
}

#[test]
fn test_reconcile_new_items_start_unchecked_even_if_flagged() {
    let result = reconcile(vec![item("Basil", "g", true)], None);

    assert!(!result[0].purchased);
}

#[test]
fn test_presentation_order_puts_purchased_last() {
    let items = vec![
        item("Basil", "g", true),
        item("Tomato", "g", false),
        item("Aglio", "pcs", false),
    ];

    let ordered = presentation_order(items);
    let names: Vec<_> = ordered.iter().map(|i| i.name.as_str()).collect();

    assert_eq!(names, ["Aglio", "Tomato", "Basil"]);
}

#[test]
fn test_recalculation_after_plan_edit_keeps_flags() {
    let catalog: RecipeCatalog = vec![
        Recipe {
            id: 1,
            name: "Pomodoro".to_owned(),
            servings: 2,
            ingredients: vec![
                Ingredient::new("Tomato", 300.0, "g"),
                Ingredient::new("Garlic", 1.0, "pcs"),
            ],
            ..Default::default()
        },
        Recipe {
            id: 2,
            name: "Pesto".to_owned(),
            servings: 2,
            ingredients: vec![
                Ingredient::new("Basil", 50.0, "g"),
                Ingredient::new("tomato", 100.0, "g"),
            ],
            ..Default::default()
        },
    ]
    .into();

    let key = WeekKey::new("Default", date!(2025 - 10 - 20));
    let mut plan = WeeklyPlan::empty(key.week_start);
    plan.slot_mut(0, Meal::Lunch).unwrap().recipe_id = Some(1);

    let mut store = ChecklistStore::default();
    store.refresh(&key, IngredientAggregationService::aggregate(&plan, &catalog));
    assert!(store.toggle(&key, "Tomato", "g").unwrap());
    assert!(store.toggle(&key, "Garlic", "pcs").unwrap());

    plan.slot_mut(0, Meal::Lunch).unwrap().recipe_id = Some(2);
    plan.slot_mut(1, Meal::Dinner).unwrap().servings = 4;
    let refreshed = store.refresh(&key, IngredientAggregationService::aggregate(&plan, &catalog));

    assert_eq!(refreshed.len(), 2);
    assert_eq!(refreshed[0].name, "Basil");
    assert!(!refreshed[0].purchased);
    assert_eq!((refreshed[1].name.as_str(), refreshed[1].quantity), ("Tomato", 100.0));
    assert!(refreshed[1].purchased);
}

#[test]
fn test_weeks_do_not_share_checklists() {
    let this_week = WeekKey::new("Default", date!(2025 - 10 - 20));
    let next_week = WeekKey::new("Default", date!(2025 - 10 - 27));
    let other_profile = WeekKey::new("Anna", date!(2025 - 10 - 20));

    let mut store = ChecklistStore::default();
    store.refresh(&this_week, vec![item("Tomato", "g", false)]);
    store.toggle(&this_week, "Tomato", "g").unwrap();

    let next = store.refresh(&next_week, vec![item("Tomato", "g", false)]);
    assert!(!next[0].purchased);

    let other = store.refresh(&other_profile, vec![item("Tomato", "g", false)]);
    assert!(!other[0].purchased);

    assert!(store.get(&this_week).unwrap()[0].purchased);
}

#[test]
fn test_store_retains_limited_weeks_per_profile() {
    let start = date!(2025 - 01 - 06);
    let mut store = ChecklistStore::new(3);
    let other = WeekKey::new("Anna", start);
    store.refresh(&other, vec![item("Tomato", "g", false)]);

    for week in 0..5 {
        let key = WeekKey::new("Default", start + Duration::weeks(week));
        store.refresh(&key, vec![item("Tomato", "g", false)]);
    }

    let weeks: Vec<_> = store.weeks("Default").map(|(key, _)| key.week_start).collect();
    assert_eq!(
        weeks,
        [
            start + Duration::weeks(2),
            start + Duration::weeks(3),
            start + Duration::weeks(4)
        ]
    );
    assert!(store.get(&other).is_some());

    let past = WeekKey::new("Default", start);
    store.refresh(&past, vec![item("Tomato", "g", false)]);
    assert!(store.get(&past).is_some());
    assert_eq!(store.weeks("Default").count(), 3);
}

#[test]
fn test_store_toggle_and_reset_errors() {
    let key = WeekKey::new("Default", date!(2025 - 10 - 20));
    let mut store = ChecklistStore::default();

    assert!(store.toggle(&key, "Tomato", "g").is_err());
    assert!(store.reset(&key).is_err());

    store.refresh(&key, vec![item("Tomato", "g", false)]);
    assert!(store.toggle(&key, "Basil", "g").is_err());
    store.toggle(&key, "Tomato", "g").unwrap();
    store.reset(&key).unwrap();

    assert!(!store.get(&key).unwrap()[0].purchased);
}

#[test]
fn test_empty_recomputation_clears_checklist() {
    let key = WeekKey::new("Default", date!(2025 - 10 - 20));
    let mut store = ChecklistStore::default();
    store.refresh(&key, vec![item("Tomato", "g", false)]);
    store.toggle(&key, "Tomato", "g").unwrap();

    assert!(store.refresh(&key, Vec::new()).is_empty());

    let back = store.refresh(&key, vec![item("Tomato", "g", false)]);
    assert!(!back[0].purchased);
}

#[test]
fn test_browsing_empty_weeks_keeps_purchased_flags() {
    let current = WeekKey::new("Default", date!(2025 - 10 - 20));
    let mut store = ChecklistStore::default();
    store.refresh(&current, vec![item("Tomato", "g", false)]);
    store.toggle(&current, "Tomato", "g").unwrap();

    for week in 1..=8 {
        let key = WeekKey::new("Default", current.week_start + Duration::weeks(week));
        assert!(store.refresh(&key, Vec::new()).is_empty());
        assert!(store.get(&key).is_none());
    }

    assert_eq!(store.weeks("Default").count(), 1);
    assert!(store.get(&current).unwrap()[0].purchased);
}

#[test]
fn test_store_evicts_weeks_without_purchases_first() {
    let start = date!(2025 - 01 - 06);
    let mut store = ChecklistStore::new(2);

    let oldest = WeekKey::new("Default", start);
    store.refresh(&oldest, vec![item("Tomato", "g", false)]);
    store.toggle(&oldest, "Tomato", "g").unwrap();

    let planned = WeekKey::new("Default", start + Duration::weeks(1));
    store.refresh(&planned, vec![item("Basil", "g", false)]);

    let newest = WeekKey::new("Default", start + Duration::weeks(2));
    store.refresh(&newest, vec![item("Garlic", "pcs", false)]);

    assert!(store.get(&oldest).unwrap()[0].purchased);
    assert!(store.get(&planned).is_none());
    assert!(store.get(&newest).is_some());

    let later = WeekKey::new("Default", start + Duration::weeks(3));
    store.refresh(&later, vec![item("Egg", "pcs", false)]);

    assert!(store.get(&oldest).is_some());
    assert!(store.get(&newest).is_none());
    assert!(store.get(&later).is_some());
}
