use mealplanner_db::{Checklists, FileStore, Store};
use mealplanner_shared::{
    mealplan::{Meal, WeeklyPlan},
    recipe::{Ingredient, Recipe, RecipeCatalog},
    shopping::LineItem,
};
use temp_dir::TempDir;
use time::macros::date;

fn catalog() -> RecipeCatalog {
    vec![Recipe {
        id: 1,
        name: "Carbonara".to_owned(),
        ingredients: vec![Ingredient::new("Spaghetti", 200.0, "g")],
        ..Default::default()
    }]
    .into()
}

#[test]
fn test_missing_files_load_empty() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = FileStore::new(dir.child("data"));

    assert!(store.load_recipes("Default")?.is_none());
    assert!(store.load_checklists("Default")?.is_empty());

    let plan = store.load_plan("Default", date!(2025 - 10 - 22))?;
    assert_eq!(plan, WeeklyPlan::empty(date!(2025 - 10 - 20)));

    Ok(())
}

#[test]
fn test_recipes_are_stored_per_profile() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = FileStore::new(dir.path());

    store.save_recipes("Default", &catalog())?;
    store.save_recipes("My Diet", &RecipeCatalog::default())?;

    assert!(dir.child("recipes.json").exists());
    assert!(dir.child("recipes__My_Diet.json").exists());

    assert_eq!(store.load_recipes("default")?, Some(catalog()));
    assert_eq!(store.load_recipes("My Diet")?, Some(RecipeCatalog::default()));

    Ok(())
}

#[test]
fn test_save_plan_replaces_only_its_week() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = FileStore::new(dir.path());

    let mut first = WeeklyPlan::empty(date!(2025 - 10 - 20));
    first.days[0].slots.get_mut(&Meal::Lunch).unwrap().recipe_id = Some(1);
    let mut second = WeeklyPlan::empty(date!(2025 - 10 - 27));
    second.days[3].slots.get_mut(&Meal::Dinner).unwrap().recipe_id = Some(1);

    store.save_plan("Default", &first)?;
    store.save_plan("Default", &second)?;

    first.days[0].slots.get_mut(&Meal::Lunch).unwrap().servings = 6;
    store.save_plan("Default", &first)?;

    assert_eq!(store.load_plan("Default", first.start)?, first);
    assert_eq!(store.load_plan("Default", second.start)?, second);
    assert!(store.load_plan("Family", first.start)?.is_empty());

    Ok(())
}

#[test]
fn test_plan_rows_are_loaded_leniently() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.child("planner_slots.json"),
        r#"[
            {"week_start": "2025-10-20", "date": "2025-10-21", "meal": "pranzo", "recipe_id": "3", "servings": "x"},
            {"week_start": "2025-10-20", "date": "2025-10-22", "meal": "CENA", "recipe_id": "", "servings": 4},
            {"week_start": "2025-10-20", "date": "2025-10-23", "meal": "brunch", "recipe_id": 5, "servings": 1}
        ]"#,
    )?;

    let plan = FileStore::new(dir.path()).load_plan("Default", date!(2025 - 10 - 20))?;

    let lunch = plan.slot(1, Meal::Lunch).unwrap();
    assert_eq!(lunch.recipe_id, Some(3));
    assert_eq!(lunch.servings, 2);

    let dinner = plan.slot(2, Meal::Dinner).unwrap();
    assert_eq!(dinner.recipe_id, None);
    assert_eq!(dinner.servings, 4);

    assert_eq!(plan.slots().filter(|(_, _, s)| !s.is_empty()).count(), 1);

    Ok(())
}

#[test]
fn test_checklists_roundtrip_per_week() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = FileStore::new(dir.path());

    let mut basil = LineItem::new("Basil", 10.0, "g");
    basil.purchased = true;

    let mut checklists = Checklists::new();
    checklists.insert(date!(2025 - 10 - 20), vec![basil, LineItem::new("Tomato", 1.2, "kg")]);
    checklists.insert(date!(2025 - 10 - 27), vec![LineItem::new("Egg", 4.0, "pcs")]);

    store.save_checklists("Family", &checklists)?;

    assert_eq!(store.load_checklists("Family")?, checklists);
    assert!(store.load_checklists("Default")?.is_empty());

    Ok(())
}

#[test]
fn test_corrupt_file_is_an_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.child("recipes.json"), "{ not json")?;

    assert!(FileStore::new(dir.path()).load_recipes("Default").is_err());

    Ok(())
}
