//! Inverted index from recipe name fragments to recipes
//!
//! A recipe named `Stovetop Mac 'N' Cheese` is reachable through each of
//! `Stovetop`, `Mac`, `'N'` and `Cheese`. Lookups are exact and
//! case-sensitive.

use std::collections::HashMap;
use std::sync::Arc;

use ahash::RandomState;

use crate::model::Recipe;

/// Maps name fragments to the recipes containing them
#[derive(Debug, Default)]
pub struct SliceKeeper {
    fragments: HashMap<String, Vec<Arc<Recipe>>, RandomState>,
}

impl SliceKeeper {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every recipe under each space-separated word of its name
    ///
    /// Each recipe is copied once and shared between its fragment buckets.
    pub fn load<'a>(&mut self, recipes: impl IntoIterator<Item = &'a Recipe>) {
        for recipe in recipes {
            let shared = Arc::new(recipe.clone());

            for fragment in recipe.name.split(' ').filter(|f| !f.is_empty()) {
                self.fragments
                    .entry(fragment.to_owned())
                    .or_default()
                    .push(Arc::clone(&shared));
            }
        }
    }

    /// Recipes containing exactly this fragment, in insertion order
    pub fn get(&self, fragment: &str) -> Option<&[Arc<Recipe>]> {
        self.fragments.get(fragment).map(Vec::as_slice)
    }

    /// Recipes matching any of the fragments, sorted by name without duplicates
    ///
    /// Unknown fragments contribute nothing; repeating a fragment or changing
    /// the fragment order does not change the result.
    pub fn get_many<S: AsRef<str>>(&self, fragments: &[S]) -> Vec<&Recipe> {
        let mut found: Vec<&Recipe> = fragments
            .iter()
            .filter_map(|fragment| self.get(fragment.as_ref()))
            .flatten()
            .map(Arc::as_ref)
            .collect();

        found.sort_by(|a, b| a.name.cmp(&b.name));
        found.dedup_by(|a, b| a.name == b.name);
        found
    }

    /// Number of distinct fragments
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Check if nothing was indexed
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
