use mealplanner_shared::recipe::{Ingredient, IngredientUnit, Recipe, RecipeCatalog};

/// Starter library given to a profile that has never saved recipes.
pub fn demo_catalog() -> RecipeCatalog {
    vec![
        Recipe {
            id: 1,
            name: "Spaghetti alla Carbonara".to_owned(),
            category: "Italiana".to_owned(),
            time: 25,
            servings: 2,
            image: "https://images.unsplash.com/photo-1523986371872-9d3ba2e2f642?w=1200".to_owned(),
            description: "Pasta con uova, pancetta e parmigiano.".to_owned(),
            instructions:
                "Cuoci la pasta, rosola la pancetta, unisci fuori dal fuoco uova e formaggio."
                    .to_owned(),
            ingredients: vec![
                Ingredient::new("Spaghetti", 200.0, IngredientUnit::G),
                Ingredient::new("Uova", 2.0, IngredientUnit::Pcs),
                Ingredient::new("Pancetta", 100.0, IngredientUnit::G),
                Ingredient::new("Parmigiano", 50.0, IngredientUnit::G),
                Ingredient::new("Pepe nero", 1.0, IngredientUnit::Tsp),
            ],
        },
        Recipe {
            id: 2,
            name: "Stir Fry di Verdure".to_owned(),
            category: "Vegetariana".to_owned(),
            time: 20,
            servings: 2,
            image: "https://images.unsplash.com/photo-1505575972945-280be642cfac?w=1200".to_owned(),
            description: "Verdure saltate con salsa di soia e zenzero.".to_owned(),
            instructions: "Salta le verdure e aggiungi salsa di soia e zenzero.".to_owned(),
            ingredients: vec![
                Ingredient::new("Broccoli", 200.0, IngredientUnit::G),
                Ingredient::new("Carote", 2.0, IngredientUnit::Pcs),
                Ingredient::new("Peperoni", 2.0, IngredientUnit::Pcs),
                Ingredient::new("Salsa di soia", 3.0, IngredientUnit::Tbsp),
                Ingredient::new("Zenzero", 10.0, IngredientUnit::G),
            ],
        },
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let catalog = demo_catalog();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.next_id(), 3);
        assert!(catalog.iter().all(|r| r.servings == 2 && r.ingredients.len() == 5));
        assert_eq!(crate::categories(&catalog), ["Italiana", "Vegetariana"]);
    }
}
