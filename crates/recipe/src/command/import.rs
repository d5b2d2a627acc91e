use mealplanner_shared::recipe::{Recipe, RecipeCatalog};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default)]
pub struct RecipeDocument {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

/// Pretty-printed `{"recipes": [...]}` document of the whole catalog.
pub fn export_json(catalog: &RecipeCatalog) -> mealplanner_shared::Result<Vec<u8>> {
    let document = RecipeDocument {
        recipes: catalog.iter().cloned().collect(),
    };

    Ok(serde_json::to_vec_pretty(&document)?)
}

impl super::Command<'_> {
    /// Appends the recipes of a `{"recipes": [...]}` document.
    ///
    /// Recipes without an id, or whose id is already used, get a fresh one.
    /// Returns how many recipes were imported.
    pub fn import_json(&mut self, data: &[u8]) -> mealplanner_shared::Result<usize> {
        let document: RecipeDocument = serde_json::from_slice(data)?;
        let imported = document.recipes.len();

        for recipe in document.recipes {
            self.insert(recipe);
        }

        tracing::info!(imported, total = self.len(), "recipes imported");

        Ok(imported)
    }
}
