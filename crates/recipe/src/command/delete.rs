use mealplanner_shared::recipe::Recipe;

impl super::Command<'_> {
    /// Removes a recipe. Plans still pointing at it simply stop
    /// contributing to the shopping list.
    pub fn delete(&mut self, id: u64) -> mealplanner_shared::Result<Recipe> {
        let Some(recipe) = self.remove(id) else {
            mealplanner_shared::not_found!("recipe {id}");
        };

        tracing::info!(id, name = %recipe.name, "recipe deleted");

        Ok(recipe)
    }
}
