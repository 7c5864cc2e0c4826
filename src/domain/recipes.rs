//! Recipe authoring: seed data, the default profile, and draft validation.

mod data;

use std::{collections::BTreeMap, fmt};

use serde::Deserialize;
use time::{Date, OffsetDateTime};

use crate::domain::{
    entities::{Ingredient, Nutrition, Recipe, User, generate_id},
    shopping::ShoppingList,
    types::Difficulty,
};

pub use data::{DEFAULT_USER_ID, DEFAULT_USER_NAME, SAMPLE_RECIPES};

pub const DEFAULT_DRAFT_IMAGE: &str = "🍽️";

#[derive(Clone, Copy)]
pub struct SeedIngredient(pub &'static str, pub &'static str, pub &'static str);

#[derive(Clone)]
pub struct SeedRecipe {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub ingredients: &'static [SeedIngredient],
    pub instructions: &'static [&'static str],
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cuisine: &'static str,
    pub diet: &'static str,
    pub rating: f64,
    pub ratings_count: u32,
    pub tags: &'static [&'static str],
    pub created_on: Date,
    pub nutrition: Nutrition,
}

impl SeedRecipe {
    fn to_recipe(&self, author_id: &str) -> Recipe {
        Recipe {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            image: self.image.to_string(),
            author_id: author_id.to_string(),
            author_name: data::DEFAULT_USER_NAME.to_string(),
            author_avatar: data::DEFAULT_USER_AVATAR.to_string(),
            ingredients: self
                .ingredients
                .iter()
                .map(|SeedIngredient(name, amount, unit)| Ingredient {
                    name: (*name).to_string(),
                    amount: (*amount).to_string(),
                    unit: (*unit).to_string(),
                })
                .collect(),
            instructions: self.instructions.iter().map(|s| s.to_string()).collect(),
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            difficulty: self.difficulty,
            cuisine: self.cuisine.to_string(),
            diet: self.diet.to_string(),
            rating: self.rating,
            ratings_count: self.ratings_count,
            tags: self.tags.iter().map(|s| s.to_string()).collect(),
            created_at: self.created_on.midnight().assume_utc(),
            nutrition: Some(self.nutrition),
        }
    }
}

/// The sample catalog, attributed to `author_id`.
pub fn sample_recipes(author_id: &str) -> Vec<Recipe> {
    SAMPLE_RECIPES
        .iter()
        .map(|seed| seed.to_recipe(author_id))
        .collect()
}

/// Profile created on first launch.
pub fn default_user(joined: OffsetDateTime) -> User {
    User {
        id: data::DEFAULT_USER_ID.to_string(),
        name: data::DEFAULT_USER_NAME.to_string(),
        email: data::DEFAULT_USER_EMAIL.to_string(),
        avatar: data::DEFAULT_USER_AVATAR.to_string(),
        bio: data::DEFAULT_USER_BIO.to_string(),
        followers: data::DEFAULT_USER_FOLLOWERS,
        following: data::DEFAULT_USER_FOLLOWING,
        recipes_count: 0,
        joined_date: joined,
        favorites: Vec::new(),
        saved_recipes: Vec::new(),
        shopping_list: ShoppingList::default(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Title,
    Description,
    Cuisine,
    Diet,
    Ingredients,
    Instructions,
}

impl DraftField {
    pub fn as_str(self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Description => "description",
            DraftField::Cuisine => "cuisine",
            DraftField::Diet => "diet",
            DraftField::Ingredients => "ingredients",
            DraftField::Instructions => "instructions",
        }
    }

    fn message(self) -> &'static str {
        match self {
            DraftField::Title => "Title is required",
            DraftField::Description => "Description is required",
            DraftField::Cuisine => "Cuisine type is required",
            DraftField::Diet => "Diet type is required",
            DraftField::Ingredients => "At least one complete ingredient is required",
            DraftField::Instructions => "At least one instruction is required",
        }
    }
}

/// Every field that failed validation, keyed for display next to its input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftErrors {
    fields: BTreeMap<DraftField, &'static str>,
}

impl DraftErrors {
    fn flag(&mut self, field: DraftField) {
        self.fields.insert(field, field.message());
    }

    pub fn get(&self, field: DraftField) -> Option<&'static str> {
        self.fields.get(&field).copied()
    }

    pub fn contains(&self, field: DraftField) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &'static str)> + '_ {
        self.fields.iter().map(|(field, message)| (*field, *message))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for DraftErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {message}", field.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for DraftErrors {}

/// User-entered recipe content before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cuisine: String,
    pub diet: String,
    pub tags: Vec<String>,
    pub nutrition: Option<Nutrition>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image: DEFAULT_DRAFT_IMAGE.to_string(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            prep_time: 15,
            cook_time: 30,
            servings: 4,
            difficulty: Difficulty::Medium,
            cuisine: String::new(),
            diet: String::new(),
            tags: Vec::new(),
            nutrition: None,
        }
    }
}

fn is_complete(ingredient: &Ingredient) -> bool {
    !ingredient.name.trim().is_empty()
        && !ingredient.amount.trim().is_empty()
        && !ingredient.unit.trim().is_empty()
}

fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}

impl RecipeDraft {
    /// Check required fields and drop incomplete rows. Reports every failing
    /// field at once.
    pub fn validate(self) -> Result<ValidDraft, DraftErrors> {
        let mut errors = DraftErrors::default();

        let title = self.title.trim().to_string();
        let description = self.description.trim().to_string();
        let cuisine = self.cuisine.trim().to_string();
        let diet = self.diet.trim().to_string();

        if title.is_empty() {
            errors.flag(DraftField::Title);
        }
        if description.is_empty() {
            errors.flag(DraftField::Description);
        }
        if cuisine.is_empty() {
            errors.flag(DraftField::Cuisine);
        }
        if diet.is_empty() {
            errors.flag(DraftField::Diet);
        }

        let ingredients: Vec<Ingredient> =
            self.ingredients.into_iter().filter(is_complete).collect();
        if ingredients.is_empty() {
            errors.flag(DraftField::Ingredients);
        }

        let instructions: Vec<String> = self
            .instructions
            .into_iter()
            .filter(|step| !step.trim().is_empty())
            .collect();
        if instructions.is_empty() {
            errors.flag(DraftField::Instructions);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let image = if self.image.trim().is_empty() {
            DEFAULT_DRAFT_IMAGE.to_string()
        } else {
            self.image
        };

        Ok(ValidDraft(RecipeDraft {
            title,
            description,
            image,
            ingredients,
            instructions,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            difficulty: self.difficulty,
            cuisine,
            diet,
            tags: normalize_tags(self.tags),
            nutrition: self.nutrition,
        }))
    }
}

/// A draft that passed [`RecipeDraft::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft(RecipeDraft);

impl ValidDraft {
    pub fn draft(&self) -> &RecipeDraft {
        &self.0
    }

    /// Publish under `author` with a fresh id and no ratings.
    pub fn into_recipe(self, author: &User, created_at: OffsetDateTime) -> Recipe {
        let draft = self.0;
        Recipe {
            id: generate_id(),
            title: draft.title,
            description: draft.description,
            image: draft.image,
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            author_avatar: author.avatar.clone(),
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            servings: draft.servings,
            difficulty: draft.difficulty,
            cuisine: draft.cuisine,
            diet: draft.diet,
            rating: 0.0,
            ratings_count: 0,
            tags: draft.tags,
            created_at,
            nutrition: draft.nutrition,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn ingredient(name: &str, amount: &str, unit: &str) -> Ingredient {
        Ingredient {
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
        }
    }

    fn complete_draft() -> RecipeDraft {
        RecipeDraft {
            title: "  Shakshuka ".into(),
            description: "Eggs poached in spiced tomato sauce".into(),
            cuisine: "Middle Eastern".into(),
            diet: "Vegetarian".into(),
            ingredients: vec![
                ingredient("Eggs", "4", "pieces"),
                ingredient("Tomatoes", "", "cans"),
                ingredient("Paprika", "1 tsp", "teaspoon"),
            ],
            instructions: vec!["Simmer the sauce".into(), "   ".into(), "Crack in the eggs".into()],
            tags: vec![" Brunch".into(), "brunch".into(), "".into(), "Spicy ".into()],
            ..Default::default()
        }
    }

    #[test]
    fn sample_catalog_matches_seed() {
        let recipes = sample_recipes("42");
        let ids: Vec<&str> = recipes.iter().map(|recipe| recipe.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert!(recipes.iter().all(|recipe| recipe.author_id == "42"));
        assert_eq!(recipes[1].ingredients.len(), 8);
        assert_eq!(recipes[2].total_time(), 25);
        assert_eq!(
            recipes[0].created_at,
            datetime!(2024-01-15 0:00 UTC)
        );
    }

    #[test]
    fn default_user_starts_empty() {
        let user = default_user(datetime!(2024-03-01 9:30 UTC));
        assert_eq!(user.id, DEFAULT_USER_ID);
        assert_eq!(user.name, "Food Explorer");
        assert_eq!(user.followers, 147);
        assert_eq!(user.following, 89);
        assert_eq!(user.recipes_count, 0);
        assert!(user.saved_recipes.is_empty());
        assert!(user.shopping_list.is_empty());
    }

    #[test]
    fn blank_draft_reports_every_field() {
        let errors = RecipeDraft::default().validate().expect_err("invalid");
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(DraftField::Title), Some("Title is required"));
        assert!(errors.contains(DraftField::Ingredients));
        assert!(errors.contains(DraftField::Instructions));
        assert!(errors.to_string().starts_with("title: Title is required"));
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let draft = RecipeDraft {
            description: "   ".into(),
            ..complete_draft()
        };
        let errors = draft.validate().expect_err("invalid");
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(DraftField::Description));
    }

    #[test]
    fn incomplete_ingredients_only_do_not_count() {
        let draft = RecipeDraft {
            ingredients: vec![ingredient("Salt", "1 tsp", " ")],
            ..complete_draft()
        };
        let errors = draft.validate().expect_err("invalid");
        assert!(errors.contains(DraftField::Ingredients));
    }

    #[test]
    fn valid_draft_is_normalized() {
        let valid = complete_draft().validate().expect("valid");
        let draft = valid.draft();
        assert_eq!(draft.title, "Shakshuka");
        assert_eq!(draft.ingredients.len(), 2);
        assert_eq!(draft.instructions, ["Simmer the sauce", "Crack in the eggs"]);
        assert_eq!(draft.tags, ["brunch", "spicy"]);
        assert_eq!(draft.image, DEFAULT_DRAFT_IMAGE);
    }

    #[test]
    fn published_recipe_takes_author_and_resets_ratings() {
        let author = default_user(datetime!(2024-01-01 0:00 UTC));
        let now = datetime!(2024-03-04 12:00 UTC);
        let recipe = complete_draft()
            .validate()
            .expect("valid")
            .into_recipe(&author, now);

        assert!(!recipe.id.is_empty());
        assert_eq!(recipe.author_id, author.id);
        assert_eq!(recipe.author_name, author.name);
        assert_eq!(recipe.rating, 0.0);
        assert_eq!(recipe.ratings_count, 0);
        assert_eq!(recipe.created_at, now);
        assert_eq!(recipe.difficulty, Difficulty::Medium);
    }

    #[test]
    fn draft_json_falls_back_to_form_defaults() {
        let draft: RecipeDraft = serde_json::from_str(
            r#"{"title": "Toast", "prepTime": 2, "difficulty": "Easy"}"#,
        )
        .expect("draft");
        assert_eq!(draft.prep_time, 2);
        assert_eq!(draft.cook_time, 30);
        assert_eq!(draft.servings, 4);
        assert_eq!(draft.difficulty, Difficulty::Easy);
        assert_eq!(draft.image, DEFAULT_DRAFT_IMAGE);
    }
}
