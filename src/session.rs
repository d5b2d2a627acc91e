use std::time::{Duration, Instant};

use mealplanner_db::{Checklists, Store};
use mealplanner_mealplan::{AutoSave, SetSlotInput, fingerprint};
use mealplanner_recipe::{Command, RecipeInput};
use mealplanner_shared::{
    mealplan::{Meal, WeeklyPlan},
    recipe::{Recipe, RecipeCatalog},
    shopping::{LineItem, WeekKey},
};
use mealplanner_shopping::{ChecklistStore, IngredientAggregationService};
use time::Date;

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Nothing changed since the last save, or the debounce window is still open.
    Skipped,
    /// The store refused the write; the in-memory state is kept.
    Failed,
}

#[derive(Clone, Debug)]
pub struct SessionOptions {
    pub debounce: Duration,
    pub retained_weeks: usize,
    pub hide_zero_quantity: bool,
    /// Give profiles without a saved recipe library the demo recipes.
    pub seed_demo_recipes: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            debounce: mealplanner_mealplan::DEFAULT_DEBOUNCE,
            retained_weeks: mealplanner_shopping::DEFAULT_RETAINED_WEEKS,
            hide_zero_quantity: false,
            seed_demo_recipes: true,
        }
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            debounce: config.autosave.debounce(),
            retained_weeks: config.shopping.retained_weeks,
            hide_zero_quantity: config.shopping.hide_zero_quantity,
            seed_demo_recipes: config.profile.seed_demo_recipes,
        }
    }
}

/// Everything one profile is working on: its recipes, the week being
/// planned and the shopping checklists derived from it.
///
/// Every plan or recipe change recomputes the current week's shopping list
/// and carries purchased flags over from the previous one.
pub struct Session<S: Store> {
    store: S,
    options: SessionOptions,
    profile: String,
    catalog: RecipeCatalog,
    plan: WeeklyPlan,
    checklists: ChecklistStore,
    autosave: AutoSave,
}

/// Everything read from the store for one profile, before it replaces the
/// session state.
struct ProfileData {
    catalog: RecipeCatalog,
    seeded: bool,
    checklists: Checklists,
    plan: WeeklyPlan,
}

impl<S: Store> Session<S> {
    #[tracing::instrument(skip(store, options))]
    pub fn open(
        store: S,
        profile: &str,
        week: Date,
        options: SessionOptions,
    ) -> mealplanner_shared::Result<Self> {
        let profile = profile.trim();
        if profile.is_empty() {
            mealplanner_shared::user!("profile name must not be empty");
        }

        let mut session = Self {
            checklists: ChecklistStore::new(options.retained_weeks),
            autosave: AutoSave::new(options.debounce),
            plan: WeeklyPlan::empty(week),
            catalog: RecipeCatalog::default(),
            profile: profile.to_owned(),
            store,
            options,
        };

        let data = session.read_profile(profile, session.plan.start)?;
        session.commit_profile(profile, data);

        Ok(session)
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    pub fn plan(&self) -> &WeeklyPlan {
        &self.plan
    }

    pub fn week_key(&self) -> WeekKey {
        WeekKey::new(self.profile.to_owned(), self.plan.start)
    }

    /// Current week's checklist, unpurchased items first.
    pub fn shopping_list(&self) -> Vec<LineItem> {
        let items = self
            .checklists
            .get(&self.week_key())
            .map(<[LineItem]>::to_vec)
            .unwrap_or_default();

        mealplanner_shopping::presentation_order(items)
    }

    #[tracing::instrument(skip(self), fields(profile = %self.profile))]
    pub fn set_slot(&mut self, input: SetSlotInput) -> mealplanner_shared::Result<SaveOutcome> {
        mealplanner_mealplan::set_slot(&mut self.plan, &self.catalog, input)?;

        Ok(self.plan_changed())
    }

    #[tracing::instrument(skip(self), fields(profile = %self.profile))]
    pub fn clear_slot(&mut self, day: usize, meal: Meal) -> mealplanner_shared::Result<SaveOutcome> {
        mealplanner_mealplan::clear_slot(&mut self.plan, day, meal)?;

        Ok(self.plan_changed())
    }

    /// Moves to the week containing `date`, flushing pending plan edits first.
    #[tracing::instrument(skip(self), fields(profile = %self.profile))]
    pub fn go_to_week(&mut self, date: Date) -> mealplanner_shared::Result<()> {
        let start = mealplanner_shared::week_start(date);
        if start == self.plan.start {
            return Ok(());
        }

        self.save();
        self.load_plan(start)?;
        self.recompute();

        Ok(())
    }

    pub fn next_week(&mut self) -> mealplanner_shared::Result<()> {
        self.go_to_week(mealplanner_shared::next_week(self.plan.start))
    }

    pub fn previous_week(&mut self) -> mealplanner_shared::Result<()> {
        self.go_to_week(mealplanner_shared::previous_week(self.plan.start))
    }

    /// Flushes pending plan edits and reloads recipes, plan and checklists
    /// of `profile` for the current week. On a load error the session stays
    /// on the current profile.
    #[tracing::instrument(skip(self), fields(from = %self.profile))]
    pub fn switch_profile(&mut self, profile: &str) -> mealplanner_shared::Result<()> {
        let profile = profile.trim();
        if profile.is_empty() {
            mealplanner_shared::user!("profile name must not be empty");
        }

        self.save();
        let data = self.read_profile(profile, self.plan.start)?;
        self.commit_profile(profile, data);

        tracing::info!(profile = %self.profile, "profile switched");

        Ok(())
    }

    pub fn add_recipe(&mut self, input: RecipeInput) -> mealplanner_shared::Result<u64> {
        let id = Command::new(&mut self.catalog).create(input)?;
        self.recipes_changed()?;

        Ok(id)
    }

    pub fn update_recipe(&mut self, id: u64, input: RecipeInput) -> mealplanner_shared::Result<()> {
        Command::new(&mut self.catalog).update(id, input)?;
        self.recipes_changed()
    }

    pub fn delete_recipe(&mut self, id: u64) -> mealplanner_shared::Result<Recipe> {
        let recipe = Command::new(&mut self.catalog).delete(id)?;
        self.recipes_changed()?;

        Ok(recipe)
    }

    pub fn import_recipes(&mut self, data: &[u8]) -> mealplanner_shared::Result<usize> {
        let imported = Command::new(&mut self.catalog).import_json(data)?;
        self.recipes_changed()?;

        Ok(imported)
    }

    pub fn export_recipes(&self) -> mealplanner_shared::Result<Vec<u8>> {
        mealplanner_recipe::export_json(&self.catalog)
    }

    /// Flips the purchased flag of one item of the current week.
    pub fn toggle_item(&mut self, name: &str, unit: &str) -> mealplanner_shared::Result<bool> {
        let key = self.week_key();
        let purchased = self.checklists.toggle(&key, name, unit)?;
        self.persist_checklists();

        Ok(purchased)
    }

    pub fn reset_checklist(&mut self) -> mealplanner_shared::Result<()> {
        let key = self.week_key();
        self.checklists.reset(&key)?;
        self.persist_checklists();

        Ok(())
    }

    /// Writes the plan now if it changed since the last save, ignoring the
    /// debounce window.
    pub fn save(&mut self) -> SaveOutcome {
        let fingerprint = fingerprint(&self.plan);
        if !self.autosave.is_dirty(&fingerprint) {
            return SaveOutcome::Skipped;
        }

        self.write_plan(fingerprint, Instant::now())
    }

    fn plan_changed(&mut self) -> SaveOutcome {
        self.recompute();

        let fingerprint = fingerprint(&self.plan);
        let now = Instant::now();
        if !self.autosave.should_save(&fingerprint, now) {
            return SaveOutcome::Skipped;
        }

        self.write_plan(fingerprint, now)
    }

    fn recipes_changed(&mut self) -> mealplanner_shared::Result<()> {
        self.store.save_recipes(&self.profile, &self.catalog)?;
        self.recompute();

        Ok(())
    }

    fn write_plan(&mut self, fingerprint: String, now: Instant) -> SaveOutcome {
        match self.store.save_plan(&self.profile, &self.plan) {
            Ok(()) => {
                self.autosave.mark_saved(fingerprint, now);
                SaveOutcome::Saved
            }
            Err(err) => {
                tracing::warn!(
                    profile = %self.profile,
                    week = %self.plan.start,
                    error = %err,
                    "plan save failed, keeping changes in memory"
                );
                SaveOutcome::Failed
            }
        }
    }

    fn read_profile(&self, profile: &str, week_start: Date) -> mealplanner_shared::Result<ProfileData> {
        let (catalog, seeded) = match self.store.load_recipes(profile)? {
            Some(catalog) => (catalog, false),
            None if self.options.seed_demo_recipes => (mealplanner_recipe::demo_catalog(), true),
            None => (RecipeCatalog::default(), false),
        };

        Ok(ProfileData {
            catalog,
            seeded,
            checklists: self.store.load_checklists(profile)?,
            plan: self.store.load_plan(profile, week_start)?,
        })
    }

    fn commit_profile(&mut self, profile: &str, data: ProfileData) {
        self.checklists.remove_profile(&self.profile);
        self.profile = profile.to_owned();
        self.catalog = data.catalog;

        for (week_start, items) in data.checklists {
            self.checklists
                .insert(WeekKey::new(self.profile.to_owned(), week_start), items);
        }

        self.set_plan(data.plan);

        if data.seeded {
            match self.store.save_recipes(&self.profile, &self.catalog) {
                Ok(()) => tracing::info!(profile = %self.profile, "demo recipes added"),
                Err(err) => {
                    tracing::warn!(profile = %self.profile, error = %err, "demo recipes not saved")
                }
            }
        }

        self.recompute();

        tracing::debug!(
            profile = %self.profile,
            recipes = self.catalog.len(),
            week = %self.plan.start,
            "profile loaded"
        );
    }

    fn load_plan(&mut self, week_start: Date) -> mealplanner_shared::Result<()> {
        let plan = self.store.load_plan(&self.profile, week_start)?;
        self.set_plan(plan);

        Ok(())
    }

    fn set_plan(&mut self, plan: WeeklyPlan) {
        self.plan = plan;
        self.autosave = AutoSave::new(self.options.debounce);
        self.autosave.mark_loaded(fingerprint(&self.plan));
    }

    fn recompute(&mut self) {
        let mut items = IngredientAggregationService::aggregate(&self.plan, &self.catalog);
        if self.options.hide_zero_quantity {
            items = IngredientAggregationService::without_zero_quantities(items);
        }

        let key = self.week_key();
        let previous = self.checklists.get(&key).unwrap_or_default().to_vec();
        let changed = previous.as_slice() != self.checklists.refresh(&key, items);

        if changed {
            self.persist_checklists();
        }
    }

    fn persist_checklists(&self) {
        let checklists: Checklists = self
            .checklists
            .weeks(&self.profile)
            .map(|(key, items)| (key.week_start, items.to_vec()))
            .collect();

        if let Err(err) = self.store.save_checklists(&self.profile, &checklists) {
            tracing::warn!(profile = %self.profile, error = %err, "checklist save failed");
        }
    }
}
