use mealplanner_shared::recipe::{Ingredient, IngredientUnit, Recipe};
use validator::{Validate, ValidationError};

#[derive(Validate, Clone, Debug, Default)]
pub struct IngredientInput {
    pub name: String,
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    pub unit: IngredientUnit,
}

#[derive(Validate, Clone, Debug)]
pub struct RecipeInput {
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub name: String,
    pub category: String,
    pub time: u32,
    #[validate(range(min = 1))]
    pub servings: u32,
    pub image: String,
    pub description: String,
    pub instructions: String,
    #[validate(nested)]
    pub ingredients: Vec<IngredientInput>,
}

impl Default for RecipeInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            time: 0,
            servings: mealplanner_shared::lenient::DEFAULT_SERVINGS,
            image: String::new(),
            description: String::new(),
            instructions: String::new(),
            ingredients: Vec::new(),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

impl RecipeInput {
    /// Recipe record with trimmed text fields; ingredient rows without a
    /// name are dropped.
    pub(crate) fn into_recipe(self, id: u64) -> Recipe {
        Recipe {
            id,
            name: self.name.trim().to_owned(),
            category: self.category.trim().to_owned(),
            time: self.time,
            servings: self.servings,
            image: self.image.trim().to_owned(),
            description: self.description.trim().to_owned(),
            instructions: self.instructions.trim().to_owned(),
            ingredients: self
                .ingredients
                .into_iter()
                .filter(|i| !i.name.trim().is_empty())
                .map(|i| Ingredient {
                    name: i.name,
                    quantity: i.quantity,
                    unit: i.unit,
                })
                .collect(),
        }
    }
}

impl From<&Recipe> for RecipeInput {
    fn from(value: &Recipe) -> Self {
        Self {
            name: value.name.to_owned(),
            category: value.category.to_owned(),
            time: value.time,
            servings: value.servings,
            image: value.image.to_owned(),
            description: value.description.to_owned(),
            instructions: value.instructions.to_owned(),
            ingredients: value
                .ingredients
                .iter()
                .map(|i| IngredientInput {
                    name: i.name.to_owned(),
                    quantity: i.quantity,
                    unit: i.unit.clone(),
                })
                .collect(),
        }
    }
}

impl super::Command<'_> {
    pub fn create(&mut self, input: RecipeInput) -> mealplanner_shared::Result<u64> {
        input.validate()?;

        let recipe = input.into_recipe(0);
        let name = recipe.name.to_owned();
        let id = self.insert(recipe);

        tracing::info!(id, name = %name, "recipe added");

        Ok(id)
    }
}
