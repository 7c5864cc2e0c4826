//! Shopping list aggregation and aisle categorization.
//!
//! The list is persisted as part of the owning user's snapshot; this module
//! only transforms it in memory.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{Recipe, ShoppingListItem, generate_id},
    types::Category,
};

const PRODUCE_KEYWORDS: &[&str] = &[
    "tomato", "onion", "garlic", "lettuce", "carrot", "potato", "apple", "lemon", "lime", "herbs",
    "basil", "parsley", "cilantro",
];
const DAIRY_KEYWORDS: &[&str] = &[
    "milk",
    "cheese",
    "butter",
    "cream",
    "yogurt",
    "feta",
    "parmesan",
    "mozzarella",
];
const MEAT_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "fish", "salmon", "turkey", "ham", "bacon", "pancetta",
];
const GRAIN_KEYWORDS: &[&str] = &[
    "rice",
    "pasta",
    "bread",
    "flour",
    "quinoa",
    "oats",
    "cereal",
    "spaghetti",
];

/// Keyword tables in priority order; the first table with a hit wins.
const KEYWORD_TABLES: &[(Category, &[&str])] = &[
    (Category::Produce, PRODUCE_KEYWORDS),
    (Category::Dairy, DAIRY_KEYWORDS),
    (Category::Meat, MEAT_KEYWORDS),
    (Category::Grains, GRAIN_KEYWORDS),
];

const CUSTOM_ITEM_AMOUNT: &str = "1";
const CUSTOM_ITEM_UNIT: &str = "piece";

/// Derive an aisle from an ingredient name by substring keyword matching.
pub fn categorize(ingredient_name: &str) -> Category {
    let lowered = ingredient_name.to_lowercase();
    KEYWORD_TABLES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Pantry)
}

/// Items of one category, in list order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub items: Vec<&'a ShoppingListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new(items: Vec<ShoppingListItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.items
            .iter()
            .any(|item| item.name.to_lowercase() == lowered)
    }

    /// Append the ingredients of the given recipes, skipping names already on
    /// the list (case-insensitive). Unknown recipe ids are ignored. Returns the
    /// number of items appended.
    pub fn add_ingredients_from_recipes(
        &mut self,
        recipe_ids: &[String],
        available: &[Recipe],
    ) -> usize {
        let before = self.items.len();

        for recipe_id in recipe_ids {
            let Some(recipe) = available.iter().find(|recipe| &recipe.id == recipe_id) else {
                continue;
            };

            for ingredient in &recipe.ingredients {
                if self.contains_name(&ingredient.name) {
                    continue;
                }

                self.items.push(ShoppingListItem {
                    id: generate_id(),
                    name: ingredient.name.clone(),
                    amount: ingredient.amount.clone(),
                    unit: ingredient.unit.clone(),
                    category: categorize(&ingredient.name),
                    completed: false,
                    recipe_id: Some(recipe.id.clone()),
                    recipe_name: Some(recipe.title.clone()),
                });
            }
        }

        self.items.len() - before
    }

    /// Append a hand-written item. Blank names are ignored.
    pub fn add_custom_item(&mut self, name: &str) -> Option<&ShoppingListItem> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        self.items.push(ShoppingListItem {
            id: generate_id(),
            name: name.to_string(),
            amount: CUSTOM_ITEM_AMOUNT.to_string(),
            unit: CUSTOM_ITEM_UNIT.to_string(),
            category: Category::Other,
            completed: false,
            recipe_id: None,
            recipe_name: None,
        });
        self.items.last()
    }

    pub fn toggle_completed(&mut self, item_id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == item_id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        self.items.len() != before
    }

    /// Drop every completed item, returning how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        before - self.items.len()
    }

    /// Stable partition by category. Groups appear in the order their
    /// category is first seen in the list.
    pub fn group_by_category(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();

        for item in &self.items {
            match groups
                .iter_mut()
                .find(|group| group.category == item.category)
            {
                Some(group) => group.items.push(item),
                None => groups.push(CategoryGroup {
                    category: item.category,
                    items: vec![item],
                }),
            }
        }

        groups
    }
}
