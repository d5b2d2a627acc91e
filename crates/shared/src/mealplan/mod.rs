use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Date;

use crate::lenient;

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(try_from = "String", into = "String")]
pub enum Meal {
    #[default]
    #[strum(to_string = "Lunch", serialize = "pranzo")]
    Lunch,
    #[strum(to_string = "Dinner", serialize = "cena")]
    Dinner,
}

impl TryFrom<String> for Meal {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.trim().parse()
    }
}

impl From<Meal> for String {
    fn from(value: Meal) -> Self {
        value.to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default, deserialize_with = "lenient::optional_id")]
    pub recipe_id: Option<u64>,
    #[serde(
        default = "lenient::default_servings",
        deserialize_with = "lenient::servings"
    )]
    pub servings: u32,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            recipe_id: None,
            servings: lenient::DEFAULT_SERVINGS,
        }
    }
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        self.recipe_id.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: Date,
    #[serde(default)]
    pub slots: BTreeMap<Meal, Slot>,
}

impl DayPlan {
    pub fn empty(date: Date) -> Self {
        Self {
            date,
            slots: Meal::VARIANTS
                .iter()
                .map(|meal| (*meal, Slot::default()))
                .collect(),
        }
    }
}

/// Lunch/dinner grid for the seven days starting at `start` (a Monday).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub start: Date,
    pub days: Vec<DayPlan>,
}

impl WeeklyPlan {
    pub fn empty(start: Date) -> Self {
        let start = crate::week_start(start);

        Self {
            start,
            days: crate::week_days(start).map(DayPlan::empty).collect(),
        }
    }

    pub fn slot(&self, day: usize, meal: Meal) -> Option<&Slot> {
        self.days.get(day).and_then(|d| d.slots.get(&meal))
    }

    pub fn slot_mut(&mut self, day: usize, meal: Meal) -> Option<&mut Slot> {
        self.days.get_mut(day).and_then(|d| d.slots.get_mut(&meal))
    }

    /// Every slot in (day, meal) order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, Meal, &Slot)> {
        self.days.iter().enumerate().flat_map(|(index, day)| {
            day.slots
                .iter()
                .map(move |(meal, slot)| (index, *meal, slot))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.slots().all(|(_, _, slot)| slot.is_empty())
    }
}
