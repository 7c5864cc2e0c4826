//! Feed search: free-text query plus the five structured filters.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Recipe;

/// Structured feed filters. Empty strings and zeroes leave a field unconstrained.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub cuisine: String,
    pub diet: String,
    pub difficulty: String,
    /// Inclusive upper bound on prep plus cook minutes.
    pub max_time: u32,
    /// Inclusive lower bound on the average rating.
    pub min_rating: f64,
}

impl SearchFilters {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !self.cuisine.is_empty() && recipe.cuisine != self.cuisine {
            return false;
        }
        if !self.diet.is_empty() && recipe.diet != self.diet {
            return false;
        }
        if !self.difficulty.is_empty() && recipe.difficulty.as_str() != self.difficulty {
            return false;
        }
        if self.max_time > 0 && recipe.total_time() > self.max_time {
            return false;
        }
        if self.min_rating > 0.0 && recipe.rating < self.min_rating {
            return false;
        }
        true
    }
}

/// Case-insensitive substring match against title, description, or any tag.
pub fn matches_query(recipe: &Recipe, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    recipe.title.to_lowercase().contains(&needle)
        || recipe.description.to_lowercase().contains(&needle)
        || recipe
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Recipes satisfying the query and every active filter, in catalog order.
pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    query: &str,
    filters: &SearchFilters,
) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| matches_query(recipe, query) && filters.matches(recipe))
        .collect()
}
