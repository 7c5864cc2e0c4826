//! Domain records mirrored from the persisted snapshots.
//!
//! Field names serialize in camelCase to match the stored snapshot documents.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::domain::{
    shopping::ShoppingList,
    types::{Category, Difficulty, MealType},
};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Fresh opaque identifier for recipes, list items, and plan entries.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    pub unit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cuisine: String,
    pub diet: String,
    pub rating: f64,
    pub ratings_count: u32,
    pub tags: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl Recipe {
    /// Preparation plus cooking time in minutes.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub bio: String,
    pub followers: u32,
    pub following: u32,
    /// Denormalized counter bumped on recipe creation; never recomputed.
    pub recipes_count: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub joined_date: OffsetDateTime,
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default)]
    pub saved_recipes: Vec<String>,
    #[serde(default)]
    pub shopping_list: ShoppingList,
}

impl User {
    pub fn has_saved(&self, recipe_id: &str) -> bool {
        self.saved_recipes.iter().any(|id| id == recipe_id)
    }

    /// Flip the saved state of a recipe, returning whether it is now saved.
    pub fn toggle_saved(&mut self, recipe_id: &str) -> bool {
        if self.has_saved(recipe_id) {
            self.saved_recipes.retain(|id| id != recipe_id);
            false
        } else {
            self.saved_recipes.push(recipe_id.to_string());
            true
        }
    }

    pub fn apply_profile_edit(&mut self, edit: ProfileEdit) {
        if let Some(name) = edit.name {
            self.name = name;
        }
        if let Some(bio) = edit.bio {
            self.bio = bio;
        }
        if let Some(avatar) = edit.avatar {
            self.avatar = avatar;
        }
    }
}

/// Profile fields a user may change; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileEdit {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub id: String,
    pub name: String,
    pub amount: String,
    pub unit: String,
    pub category: Category,
    pub completed: bool,
    /// Display cache of the originating recipe; the recipe may no longer exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanItem {
    pub id: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub meal: MealType,
    /// Display cache of the planned recipe; the recipe may no longer exist.
    pub recipe_id: String,
    pub recipe_name: String,
    pub servings: u32,
}
