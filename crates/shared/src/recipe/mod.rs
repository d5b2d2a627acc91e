use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::lenient;

/// Units an ingredient line can be measured in.
///
/// Anything outside the known set is kept verbatim (trimmed, lowercased) in
/// [`IngredientUnit::Other`] so it can still be summed with identical units.
#[derive(EnumString, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(from = "String", into = "String")]
pub enum IngredientUnit {
    #[default]
    G,
    Kg,
    Ml,
    L,
    Pcs,
    Tbsp,
    Tsp,
    #[strum(disabled)]
    Other(String),
}

impl IngredientUnit {
    pub fn parse(value: &str) -> Self {
        let normalized = value.trim().to_lowercase();
        match normalized.parse() {
            Ok(unit) => unit,
            Err(_) => IngredientUnit::Other(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            IngredientUnit::G => "g",
            IngredientUnit::Kg => "kg",
            IngredientUnit::Ml => "ml",
            IngredientUnit::L => "l",
            IngredientUnit::Pcs => "pcs",
            IngredientUnit::Tbsp => "tbsp",
            IngredientUnit::Tsp => "tsp",
            IngredientUnit::Other(unit) => unit,
        }
    }
}

impl fmt::Display for IngredientUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for IngredientUnit {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for IngredientUnit {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<IngredientUnit> for String {
    fn from(value: IngredientUnit) -> Self {
        value.as_str().to_owned()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "qty", deserialize_with = "lenient::quantity")]
    pub quantity: f64,
    #[serde(default)]
    pub unit: IngredientUnit,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<IngredientUnit>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Zero means "not assigned yet"; the catalog allocates one on insert.
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::minutes")]
    pub time: u32,
    #[serde(
        default = "lenient::default_servings",
        deserialize_with = "lenient::servings"
    )]
    pub servings: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            category: String::new(),
            time: 0,
            servings: lenient::DEFAULT_SERVINGS,
            image: String::new(),
            description: String::new(),
            instructions: String::new(),
            ingredients: Vec::new(),
        }
    }
}

impl Recipe {
    /// Servings the ingredient quantities are written for, never below 1.
    pub fn base_servings(&self) -> u32 {
        self.servings.max(1)
    }

    pub fn label(&self) -> String {
        format!("{} · {} min", self.name, self.time)
    }
}

/// Recipe library of one profile, keyed by recipe id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Recipe>", into = "Vec<Recipe>")]
pub struct RecipeCatalog {
    recipes: BTreeMap<u64, Recipe>,
}

impl RecipeCatalog {
    pub fn get(&self, id: u64) -> Option<&Recipe> {
        self.recipes.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Recipe> {
        self.recipes.get_mut(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.recipes.contains_key(&id)
    }

    pub fn next_id(&self) -> u64 {
        self.recipes.keys().next_back().map(|id| id + 1).unwrap_or(1)
    }

    /// Inserts a recipe, allocating a fresh id when it has none or when its
    /// id is already taken. Returns the id the recipe was stored under.
    pub fn insert(&mut self, mut recipe: Recipe) -> u64 {
        if recipe.id == 0 || self.recipes.contains_key(&recipe.id) {
            recipe.id = self.next_id();
        }

        let id = recipe.id;
        self.recipes.insert(id, recipe);

        id
    }

    pub fn remove(&mut self, id: u64) -> Option<Recipe> {
        self.recipes.remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl FromIterator<Recipe> for RecipeCatalog {
    fn from_iter<T: IntoIterator<Item = Recipe>>(iter: T) -> Self {
        let mut catalog = RecipeCatalog::default();
        for recipe in iter {
            catalog.insert(recipe);
        }
        catalog
    }
}

impl From<Vec<Recipe>> for RecipeCatalog {
    fn from(value: Vec<Recipe>) -> Self {
        value.into_iter().collect()
    }
}

impl From<RecipeCatalog> for Vec<Recipe> {
    fn from(value: RecipeCatalog) -> Self {
        value.recipes.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parse_known_and_unknown() {
        assert_eq!(IngredientUnit::parse("KG"), IngredientUnit::Kg);
        assert_eq!(IngredientUnit::parse(" tbsp "), IngredientUnit::Tbsp);
        assert_eq!(
            IngredientUnit::parse(" Cup "),
            IngredientUnit::Other("cup".to_owned())
        );
        assert_eq!(IngredientUnit::parse("cup").to_string(), "cup");
        assert_eq!(IngredientUnit::Pcs.to_string(), "pcs");
    }

    #[test]
    fn test_ingredient_accepts_legacy_qty_field() {
        let ingredient: Ingredient =
            serde_json::from_str(r#"{"name": "Spaghetti", "qty": 200, "unit": "g"}"#).unwrap();
        assert_eq!(ingredient, Ingredient::new("Spaghetti", 200.0, "g"));
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": "7", "name": "Soup", "servings": "many", "time": -4,
                "ingredients": [{"name": "Water", "qty": "lots", "unit": "ml"}]}"#,
        )
        .unwrap();

        assert_eq!(recipe.id, 7);
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.time, 0);
        assert_eq!(recipe.ingredients[0].quantity, 0.0);
    }

    #[test]
    fn test_catalog_allocates_ids() {
        let mut catalog = RecipeCatalog::default();
        assert_eq!(catalog.next_id(), 1);

        let first = catalog.insert(Recipe {
            name: "A".to_owned(),
            ..Default::default()
        });
        let second = catalog.insert(Recipe {
            id: first,
            name: "B".to_owned(),
            ..Default::default()
        });

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(2).map(|r| r.name.as_str()), Some("B"));
    }

    #[test]
    fn test_base_servings_never_zero() {
        let recipe = Recipe {
            servings: 0,
            ..Default::default()
        };
        assert_eq!(recipe.base_servings(), 1);
    }
}
