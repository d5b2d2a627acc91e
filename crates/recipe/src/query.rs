use mealplanner_shared::recipe::{Recipe, RecipeCatalog};

#[derive(Clone, Debug, Default)]
pub struct RecipeFilter {
    /// Case-insensitive text searched in name and description.
    pub query: String,
    pub category: Option<String>,
    /// Longest acceptable preparation time in minutes, 0 for no limit.
    pub max_time: u32,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let query = self.query.trim().to_lowercase();
        if !query.is_empty()
            && !recipe.name.to_lowercase().contains(&query)
            && !recipe.description.to_lowercase().contains(&query)
        {
            return false;
        }

        if self
            .category
            .as_ref()
            .is_some_and(|category| recipe.category != *category)
        {
            return false;
        }

        self.max_time == 0 || recipe.time <= self.max_time
    }
}

pub fn filter<'a>(catalog: &'a RecipeCatalog, filter: &RecipeFilter) -> Vec<&'a Recipe> {
    catalog.iter().filter(|r| filter.matches(r)).collect()
}

/// Sorted distinct non-empty categories.
pub fn categories(catalog: &RecipeCatalog) -> Vec<String> {
    let mut categories: Vec<String> = catalog
        .iter()
        .map(|r| r.category.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_owned)
        .collect();

    categories.sort();
    categories.dedup();
    categories
}
