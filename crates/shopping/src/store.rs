use std::collections::BTreeMap;

use mealplanner_shared::shopping::{LineItem, WeekKey};

use crate::checklist;

pub const DEFAULT_RETAINED_WEEKS: usize = 5;

/// Purchased-state of every week a profile has looked at.
///
/// Only weeks with something to buy are stored. Each profile keeps at most
/// `retained_weeks` checklists; refreshing a new week past that limit forgets
/// the oldest week without purchased items, or the oldest week if every one
/// has some.
#[derive(Clone, Debug)]
pub struct ChecklistStore {
    retained_weeks: usize,
    checklists: BTreeMap<WeekKey, Vec<LineItem>>,
}

impl Default for ChecklistStore {
    fn default() -> Self {
        Self::new(DEFAULT_RETAINED_WEEKS)
    }
}

impl ChecklistStore {
    pub fn new(retained_weeks: usize) -> Self {
        Self {
            retained_weeks: retained_weeks.max(1),
            checklists: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &WeekKey) -> Option<&[LineItem]> {
        self.checklists.get(key).map(Vec::as_slice)
    }

    /// Reconciles `new_list` with the stored checklist of `key` and stores
    /// the result in its place. An empty result removes the week.
    pub fn refresh(&mut self, key: &WeekKey, new_list: Vec<LineItem>) -> &[LineItem] {
        let reconciled = checklist::reconcile(new_list, self.get(key));

        tracing::debug!(week = %key, items = reconciled.len(), "checklist refreshed");

        self.insert(key.clone(), reconciled);

        self.get(key).unwrap_or_default()
    }

    /// Stores a checklist as-is, e.g. when loading persisted state.
    pub fn insert(&mut self, key: WeekKey, items: Vec<LineItem>) {
        if items.is_empty() {
            self.checklists.remove(&key);
            return;
        }

        self.checklists.insert(key.clone(), items);
        self.evict(&key);
    }

    pub fn toggle(&mut self, key: &WeekKey, name: &str, unit: &str) -> mealplanner_shared::Result<bool> {
        let Some(items) = self.checklists.get_mut(key) else {
            mealplanner_shared::not_found!("shopping list for {key}");
        };

        checklist::toggle(items, name, unit)
    }

    pub fn reset(&mut self, key: &WeekKey) -> mealplanner_shared::Result<()> {
        let Some(items) = self.checklists.get_mut(key) else {
            mealplanner_shared::not_found!("shopping list for {key}");
        };

        checklist::reset(items);

        Ok(())
    }

    /// Checklists of one profile, oldest week first.
    pub fn weeks<'a>(&'a self, profile: &'a str) -> impl Iterator<Item = (&'a WeekKey, &'a [LineItem])> {
        self.checklists
            .iter()
            .filter(move |(key, _)| key.profile == profile)
            .map(|(key, items)| (key, items.as_slice()))
    }

    pub fn remove_profile(&mut self, profile: &str) {
        self.checklists.retain(|key, _| key.profile != profile);
    }

    fn evict(&mut self, keep: &WeekKey) {
        let mut candidates: Vec<(bool, WeekKey)> = self
            .weeks(&keep.profile)
            .filter(|(key, _)| *key != keep)
            .map(|(key, items)| (items.iter().any(|item| item.purchased), key.clone()))
            .collect();

        let excess = (candidates.len() + 1).saturating_sub(self.retained_weeks);

        // Weeks without purchases go first, oldest first within each group.
        candidates.sort();

        for (_, key) in candidates.into_iter().take(excess) {
            tracing::debug!(week = %key, "checklist evicted");
            self.checklists.remove(&key);
        }
    }
}
