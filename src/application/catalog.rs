//! The recipe collection owned by the kitchen, newest first.

use crate::domain::{
    entities::Recipe,
    rating::{Vote, submit_rating},
    search::{SearchFilters, filter_recipes},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn search(&self, query: &str, filters: &SearchFilters) -> Vec<&Recipe> {
        filter_recipes(&self.recipes, query, filters)
    }

    /// Newly published recipes go to the front of the feed.
    pub fn prepend(&mut self, recipe: Recipe) -> &Recipe {
        self.recipes.insert(0, recipe);
        &self.recipes[0]
    }

    pub fn rate(&mut self, id: &str, vote: Vote) -> Option<&Recipe> {
        let recipe = self.recipes.iter_mut().find(|recipe| recipe.id == id)?;
        submit_rating(recipe, vote);
        Some(recipe)
    }

    pub fn authored_by(&self, user_id: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.author_id == user_id)
            .collect()
    }

    /// Look up `ids` in order, dropping ids with no matching recipe.
    pub fn resolve(&self, ids: &[String]) -> Vec<&Recipe> {
        ids.iter().filter_map(|id| self.find(id)).collect()
    }
}
