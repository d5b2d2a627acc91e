use std::{
    fs,
    path::{Path, PathBuf},
};

use mealplanner_shared::{
    mealplan::WeeklyPlan,
    recipe::RecipeCatalog,
};
use serde::{Serialize, de::DeserializeOwned};
use time::Date;

use crate::{
    Checklists, Store, profile_table,
    row::{ChecklistRow, PlanRow},
};

const RECIPES: &str = "recipes";
const PLANNER_SLOTS: &str = "planner_slots";
const SHOPPING: &str = "shopping";

/// JSON files in one directory, one set of files per profile.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, base: &str, profile: &str) -> PathBuf {
        self.dir.join(format!("{}.json", profile_table(base, profile)))
    }

    fn read<T: DeserializeOwned + Default>(&self, path: &Path) -> mealplanner_shared::Result<T> {
        Ok(self.read_existing(path)?.unwrap_or_default())
    }

    fn read_existing<T: DeserializeOwned + Default>(
        &self,
        path: &Path,
    ) -> mealplanner_shared::Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let data = fs::read(path)?;
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Some(T::default()));
        }

        Ok(Some(serde_json::from_slice(&data)?))
    }

    /// Writes through a temporary sibling so a failed write never leaves a
    /// truncated file behind.
    fn write<T: Serialize>(&self, path: &Path, value: &T) -> mealplanner_shared::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(value)?)?;
        fs::rename(&tmp, path)?;

        Ok(())
    }
}

impl Store for FileStore {
    fn load_recipes(&self, profile: &str) -> mealplanner_shared::Result<Option<RecipeCatalog>> {
        self.read_existing(&self.path(RECIPES, profile))
    }

    fn save_recipes(&self, profile: &str, catalog: &RecipeCatalog) -> mealplanner_shared::Result<()> {
        let path = self.path(RECIPES, profile);
        self.write(&path, catalog)?;

        tracing::info!(profile, recipes = catalog.len(), path = %path.display(), "recipes saved");

        Ok(())
    }

    fn load_plan(&self, profile: &str, week_start: Date) -> mealplanner_shared::Result<WeeklyPlan> {
        let week_start = mealplanner_shared::week_start(week_start);
        let rows: Vec<PlanRow> = self.read(&self.path(PLANNER_SLOTS, profile))?;

        Ok(mealplanner_mealplan::normalize(
            week_start,
            PlanRow::into_days(rows, week_start),
        ))
    }

    fn save_plan(&self, profile: &str, plan: &WeeklyPlan) -> mealplanner_shared::Result<()> {
        let path = self.path(PLANNER_SLOTS, profile);
        let mut rows: Vec<PlanRow> = self.read(&path)?;

        rows.retain(|row| row.week_start != plan.start);
        rows.extend(PlanRow::from_plan(plan));
        rows.sort_by(|a, b| a.week_start.cmp(&b.week_start).then_with(|| a.date.cmp(&b.date)));

        self.write(&path, &rows)?;

        tracing::info!(profile, week = %plan.start, "plan saved");

        Ok(())
    }

    fn load_checklists(&self, profile: &str) -> mealplanner_shared::Result<Checklists> {
        let rows: Vec<ChecklistRow> = self.read(&self.path(SHOPPING, profile))?;
        let mut checklists = Checklists::new();

        for row in rows {
            checklists
                .entry(mealplanner_shared::week_start(row.week_start))
                .or_default()
                .push(row.item);
        }

        Ok(checklists)
    }

    fn save_checklists(&self, profile: &str, checklists: &Checklists) -> mealplanner_shared::Result<()> {
        let rows: Vec<ChecklistRow> = checklists
            .iter()
            .flat_map(|(week_start, items)| {
                items.iter().map(|item| ChecklistRow {
                    week_start: *week_start,
                    item: item.clone(),
                })
            })
            .collect();

        self.write(&self.path(SHOPPING, profile), &rows)?;

        tracing::debug!(profile, weeks = checklists.len(), "checklists saved");

        Ok(())
    }
}
