use super::RecipeStore;
use crate::error::{RecipeError, Result};
use crate::model::Recipe;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    recipes: Vec<Recipe>,
    fail_saves: bool,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            ..Self::default()
        }
    }

    /// Every subsequent `save` returns an error.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl RecipeStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Recipe>> {
        Ok(self.recipes.clone())
    }

    fn save(&mut self, recipes: &[Recipe]) -> Result<()> {
        if self.fail_saves {
            return Err(RecipeError::Store("simulated save failure".to_string()));
        }
        self.recipes = recipes.to_vec();
        self.save_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::MealCategory;
    use chrono::NaiveDate;

    pub fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 28).unwrap()
    }

    /// Three recipes dated 2024-03-28:
    /// 1. pizza (dinner, dairy/egg)
    /// 2. pancakes (breakfast, egg/gluten)
    /// 3. fruit salad (dessert, no allergies)
    pub fn sample_recipes() -> Vec<Recipe> {
        vec![
            Recipe::new(
                "pizza",
                34,
                340,
                vec!["dairy".into(), "egg".into()],
                MealCategory::Dinner,
                Some("www.url.com".into()),
            )
            .with_date_added(sample_date()),
            Recipe::new(
                "pancakes",
                20,
                450,
                vec!["egg".into(), "gluten".into()],
                MealCategory::Breakfast,
                None,
            )
            .with_date_added(sample_date()),
            Recipe::new(
                "fruit salad",
                10,
                120,
                vec![],
                MealCategory::Dessert,
                Some("www.fruit.com".into()),
            )
            .with_date_added(sample_date()),
        ]
    }

    pub fn sample_store() -> InMemoryStore {
        InMemoryStore::with_recipes(sample_recipes())
    }
}
