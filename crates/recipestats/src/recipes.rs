//! Distinct recipes with occurrence counts

use std::collections::HashMap;

use ahash::RandomState;

use crate::model::Recipe;

/// Recipes keyed by exact name
pub type RecipeMap = HashMap<String, Recipe, RandomState>;

/// Deduplicates recipes by name and counts how often each one appears
///
/// Not synchronized; the loader gives each keeper a single writer.
#[derive(Debug, Default)]
pub struct RecipeKeeper {
    recipes: RecipeMap,
}

impl RecipeKeeper {
    /// Create an empty keeper
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of the named recipe
    pub fn add(&mut self, name: &str) {
        if let Some(recipe) = self.recipes.get_mut(name) {
            recipe.count += 1;
            return;
        }

        self.recipes.insert(name.to_owned(), Recipe::new(name));
    }

    /// Number of distinct recipe names
    pub fn count(&self) -> usize {
        self.recipes.len()
    }

    /// Check if no recipe was added
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Look up a recipe by exact name
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// Read-only view of every recipe, for building downstream indexes
    pub fn snapshot(&self) -> &RecipeMap {
        &self.recipes
    }
}
