use time::macros::date;

use super::{SeedIngredient, SeedRecipe};
use crate::domain::{entities::Nutrition, types::Difficulty};

pub const DEFAULT_USER_ID: &str = "1";
pub const DEFAULT_USER_NAME: &str = "Food Explorer";
pub const DEFAULT_USER_EMAIL: &str = "foodlover@example.com";
pub const DEFAULT_USER_AVATAR: &str = "👨‍🍳";
pub const DEFAULT_USER_BIO: &str = "Passionate home cook sharing delicious recipes!";
pub const DEFAULT_USER_FOLLOWERS: u32 = 147;
pub const DEFAULT_USER_FOLLOWING: u32 = 89;

pub static SAMPLE_RECIPES: [SeedRecipe; 3] = [
    SeedRecipe {
        id: "1",
        title: "Classic Spaghetti Carbonara",
        description: "Authentic Italian pasta dish with eggs, cheese, and pancetta",
        image: "🍝",
        ingredients: &[
            SeedIngredient("Spaghetti", "400g", "grams"),
            SeedIngredient("Pancetta", "200g", "grams"),
            SeedIngredient("Eggs", "4", "pieces"),
            SeedIngredient("Parmesan cheese", "100g", "grams"),
            SeedIngredient("Black pepper", "1 tsp", "teaspoon"),
            SeedIngredient("Salt", "1 tsp", "teaspoon"),
        ],
        instructions: &[
            "Bring a large pot of salted water to boil and cook spaghetti according to package directions",
            "Meanwhile, cook pancetta in a large skillet until crispy",
            "In a bowl, whisk together eggs and grated Parmesan cheese",
            "Drain pasta, reserving 1 cup of pasta water",
            "Add hot pasta to the skillet with pancetta",
            "Remove from heat and quickly stir in egg mixture, adding pasta water as needed",
            "Season with black pepper and serve immediately",
        ],
        prep_time: 15,
        cook_time: 20,
        servings: 4,
        difficulty: Difficulty::Medium,
        cuisine: "Italian",
        diet: "Vegetarian",
        rating: 4.8,
        ratings_count: 124,
        tags: &["pasta", "italian", "quick", "classic"],
        created_on: date!(2024 - 01 - 15),
        nutrition: Nutrition {
            calories: 520.0,
            protein: 22.0,
            carbs: 65.0,
            fat: 18.0,
            fiber: 3.0,
            sugar: 3.0,
        },
    },
    SeedRecipe {
        id: "2",
        title: "Mediterranean Quinoa Salad",
        description: "Fresh and healthy salad with quinoa, vegetables, and feta cheese",
        image: "🥗",
        ingredients: &[
            SeedIngredient("Quinoa", "1 cup", "cup"),
            SeedIngredient("Cherry tomatoes", "250g", "grams"),
            SeedIngredient("Cucumber", "1 large", "pieces"),
            SeedIngredient("Red onion", "1/2 cup", "cup"),
            SeedIngredient("Feta cheese", "150g", "grams"),
            SeedIngredient("Olive oil", "3 tbsp", "tablespoon"),
            SeedIngredient("Lemon juice", "2 tbsp", "tablespoon"),
            SeedIngredient("Fresh herbs", "1/4 cup", "cup"),
        ],
        instructions: &[
            "Rinse quinoa and cook according to package directions, then let cool",
            "Dice tomatoes, cucumber, and red onion",
            "Crumble feta cheese",
            "In a large bowl, combine cooled quinoa with vegetables and feta",
            "Whisk together olive oil, lemon juice, salt, and pepper",
            "Pour dressing over salad and toss well",
            "Garnish with fresh herbs and serve chilled",
        ],
        prep_time: 20,
        cook_time: 15,
        servings: 6,
        difficulty: Difficulty::Easy,
        cuisine: "Mediterranean",
        diet: "Vegetarian",
        rating: 4.6,
        ratings_count: 89,
        tags: &["healthy", "salad", "quinoa", "mediterranean", "vegetarian"],
        created_on: date!(2024 - 01 - 10),
        nutrition: Nutrition {
            calories: 285.0,
            protein: 12.0,
            carbs: 35.0,
            fat: 12.0,
            fiber: 4.0,
            sugar: 8.0,
        },
    },
    SeedRecipe {
        id: "3",
        title: "Chocolate Chip Cookies",
        description: "Soft and chewy homemade chocolate chip cookies",
        image: "🍪",
        ingredients: &[
            SeedIngredient("All-purpose flour", "2¼ cups", "cup"),
            SeedIngredient("Butter", "1 cup", "cup"),
            SeedIngredient("Brown sugar", "¾ cup", "cup"),
            SeedIngredient("White sugar", "¾ cup", "cup"),
            SeedIngredient("Eggs", "2 large", "pieces"),
            SeedIngredient("Vanilla extract", "2 tsp", "teaspoon"),
            SeedIngredient("Baking soda", "1 tsp", "teaspoon"),
            SeedIngredient("Salt", "1 tsp", "teaspoon"),
            SeedIngredient("Chocolate chips", "2 cups", "cup"),
        ],
        instructions: &[
            "Preheat oven to 375°F (190°C)",
            "Cream together butter and both sugars until light and fluffy",
            "Beat in eggs one at a time, then add vanilla",
            "In a separate bowl, whisk together flour, baking soda, and salt",
            "Gradually mix dry ingredients into wet ingredients",
            "Stir in chocolate chips",
            "Drop rounded tablespoons of dough onto ungreased baking sheets",
            "Bake for 9-11 minutes until golden brown",
            "Cool on baking sheet for 2 minutes before removing",
        ],
        prep_time: 15,
        cook_time: 10,
        servings: 24,
        difficulty: Difficulty::Easy,
        cuisine: "American",
        diet: "Vegetarian",
        rating: 4.9,
        ratings_count: 256,
        tags: &["dessert", "cookies", "chocolate", "baking", "sweet"],
        created_on: date!(2024 - 01 - 05),
        nutrition: Nutrition {
            calories: 180.0,
            protein: 2.0,
            carbs: 26.0,
            fat: 8.0,
            fiber: 1.0,
            sugar: 16.0,
        },
    },
];
