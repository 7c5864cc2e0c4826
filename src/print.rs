//! Plain-text views written to stdout.

use std::io::{self, Write};

use recipebook::{
    application::kitchen::ShoppingProgress,
    domain::{
        entities::{MealPlanItem, Recipe, ShoppingListItem, User},
        format::{format_duration, format_human_date, format_weekday_label},
        planner::MealPlanner,
        shopping::ShoppingList,
        types::MealType,
    },
};

pub fn recipe_list(out: &mut impl Write, recipes: &[&Recipe], user: &User) -> io::Result<()> {
    if recipes.is_empty() {
        return writeln!(out, "No recipes found.");
    }

    for recipe in recipes {
        let marker = if user.has_saved(&recipe.id) { "*" } else { " " };
        writeln!(
            out,
            "{marker} [{}] {} {}  {}  {} · {} · {}  ★ {:.1} ({})",
            recipe.id,
            recipe.image,
            recipe.title,
            format_duration(recipe.total_time()),
            recipe.difficulty,
            recipe.cuisine,
            recipe.diet,
            recipe.rating,
            recipe.ratings_count,
        )?;
    }
    writeln!(out, "{} recipe(s)", recipes.len())
}

pub fn recipe_detail(out: &mut impl Write, recipe: &Recipe, saved: bool) -> io::Result<()> {
    writeln!(out, "{} {}", recipe.image, recipe.title)?;
    writeln!(out, "{}", recipe.description)?;
    writeln!(
        out,
        "by {} {} on {}{}",
        recipe.author_avatar,
        recipe.author_name,
        format_human_date(recipe.created_at.date()),
        if saved { " (saved)" } else { "" }
    )?;
    writeln!(
        out,
        "prep {} · cook {} · serves {} · {} · {} · {}",
        format_duration(recipe.prep_time),
        format_duration(recipe.cook_time),
        recipe.servings,
        recipe.difficulty,
        recipe.cuisine,
        recipe.diet
    )?;
    writeln!(
        out,
        "rating {:.1} from {} vote(s)",
        recipe.rating, recipe.ratings_count
    )?;
    if !recipe.tags.is_empty() {
        writeln!(out, "tags: {}", recipe.tags.join(", "))?;
    }

    writeln!(out, "\nIngredients")?;
    for ingredient in &recipe.ingredients {
        writeln!(
            out,
            "  - {} ({} {})",
            ingredient.name, ingredient.amount, ingredient.unit
        )?;
    }

    writeln!(out, "\nInstructions")?;
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        writeln!(out, "  {}. {instruction}", step + 1)?;
    }

    if let Some(nutrition) = recipe.nutrition {
        writeln!(
            out,
            "\nPer serving: {} kcal · protein {}g · carbs {}g · fat {}g · fiber {}g · sugar {}g",
            nutrition.calories,
            nutrition.protein,
            nutrition.carbs,
            nutrition.fat,
            nutrition.fiber,
            nutrition.sugar
        )?;
    }
    Ok(())
}

pub fn profile(
    out: &mut impl Write,
    user: &User,
    authored: &[&Recipe],
    saved: &[&Recipe],
) -> io::Result<()> {
    writeln!(out, "{} {} <{}>", user.avatar, user.name, user.email)?;
    if !user.bio.is_empty() {
        writeln!(out, "{}", user.bio)?;
    }
    writeln!(
        out,
        "{} recipes · {} followers · {} following · joined {}",
        user.recipes_count,
        user.followers,
        user.following,
        format_human_date(user.joined_date.date())
    )?;

    writeln!(out, "\nMy recipes ({})", authored.len())?;
    for recipe in authored {
        writeln!(out, "  [{}] {}", recipe.id, recipe.title)?;
    }
    writeln!(out, "\nSaved recipes ({})", saved.len())?;
    for recipe in saved {
        writeln!(out, "  [{}] {}", recipe.id, recipe.title)?;
    }
    Ok(())
}

pub fn shopping_list(
    out: &mut impl Write,
    list: &ShoppingList,
    progress: ShoppingProgress,
) -> io::Result<()> {
    if list.is_empty() {
        return writeln!(out, "Your shopping list is empty.");
    }

    writeln!(
        out,
        "{} of {} items completed",
        progress.completed, progress.total
    )?;
    for group in list.group_by_category() {
        writeln!(out, "\n{} ({})", group.category, group.items.len())?;
        for item in group.items {
            shopping_item(out, item)?;
        }
    }
    Ok(())
}

pub fn shopping_item(out: &mut impl Write, item: &ShoppingListItem) -> io::Result<()> {
    let check = if item.completed { "x" } else { " " };
    write!(
        out,
        "  [{check}] {} ({} {})  #{}",
        item.name, item.amount, item.unit, item.id
    )?;
    match item.recipe_name.as_deref() {
        Some(recipe) => writeln!(out, "  from {recipe}"),
        None => writeln!(out),
    }
}

pub fn week(out: &mut impl Write, planner: &MealPlanner) -> io::Result<()> {
    writeln!(
        out,
        "Week of {}",
        format_human_date(planner.week_start())
    )?;
    for day in planner.week_grid() {
        writeln!(
            out,
            "\n{} ({} planned)",
            format_weekday_label(day.date),
            day.total()
        )?;
        for (meal, items) in &day.slots {
            for item in items {
                planned_item(out, *meal, item)?;
            }
        }
    }
    Ok(())
}

pub fn planned_item(out: &mut impl Write, meal: MealType, item: &MealPlanItem) -> io::Result<()> {
    writeln!(
        out,
        "  {:<9} {} ×{}  #{}",
        meal.label(),
        item.recipe_name,
        item.servings,
        item.id
    )
}

pub fn plan_summary(out: &mut impl Write, summary: &[(MealType, usize)]) -> io::Result<()> {
    for (meal, count) in summary {
        writeln!(out, "{:<9} {count}", meal.label())?;
    }
    Ok(())
}
