use validator::Validate;

use crate::RecipeInput;

impl super::Command<'_> {
    pub fn update(&mut self, id: u64, input: RecipeInput) -> mealplanner_shared::Result<()> {
        input.validate()?;

        let Some(recipe) = self.get_mut(id) else {
            mealplanner_shared::not_found!("recipe {id}");
        };

        *recipe = input.into_recipe(id);

        tracing::info!(id, name = %recipe.name, "recipe updated");

        Ok(())
    }
}
