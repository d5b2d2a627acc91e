use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;

/// One row of a shopping list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub purchased: bool,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            purchased: false,
        }
    }

    /// Identity used to carry purchased flags between recomputations.
    pub fn key(&self) -> (&str, &str) {
        (&self.name, &self.unit)
    }
}

/// Scope of a plan and its checklist: one profile, one week.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeekKey {
    pub profile: String,
    pub week_start: Date,
}

impl WeekKey {
    pub fn new(profile: impl Into<String>, week_start: Date) -> Self {
        Self {
            profile: profile.into(),
            week_start: crate::week_start(week_start),
        }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.profile, crate::format_date(self.week_start))
    }
}
