//! The in-memory recipe collection.
//!
//! Users address recipes by 1-based position; the book translates to the
//! 0-based `Vec` index internally. Capacity is checked on every push and
//! reported as [`RecipeError::CapacityExceeded`] rather than panicking.

use crate::error::{InputError, RecipeError, Result};
use crate::model::Recipe;

pub const MAX_RECIPES: usize = 100;

#[derive(Debug, Clone)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
    max_recipes: usize,
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self::new(Vec::new(), MAX_RECIPES)
    }
}

impl RecipeBook {
    /// Recipes loaded beyond `max_recipes` are kept; only further pushes are refused.
    pub fn new(recipes: Vec<Recipe>, max_recipes: usize) -> Self {
        Self {
            recipes,
            max_recipes: max_recipes.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn max_recipes(&self) -> usize {
        self.max_recipes
    }

    pub fn is_full(&self) -> bool {
        self.recipes.len() >= self.max_recipes
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        index.checked_sub(1).and_then(|i| self.recipes.get(i))
    }

    pub fn push(&mut self, recipe: Recipe) -> Result<()> {
        if self.is_full() {
            return Err(RecipeError::CapacityExceeded {
                max: self.max_recipes,
            });
        }
        self.recipes.push(recipe);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Recipe> {
        if index == 0 || index > self.recipes.len() {
            return Err(InputError::OutOfRange {
                index: index as i64,
                size: self.recipes.len(),
            }
            .into());
        }
        Ok(self.recipes.remove(index - 1))
    }
}
