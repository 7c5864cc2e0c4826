//! The single controller that owns catalog, profile, shopping list, and plan.
//!
//! Every mutation updates memory first and then writes the affected snapshot.
//! Storage failures never surface here; see [`Snapshots`].

use std::sync::Arc;

use time::{Date, OffsetDateTime};
use tracing::{debug, info};

use crate::{
    application::{
        catalog::Catalog,
        store::{CURRENT_USER_KEY, MEAL_PLAN_KEY, RECIPES_KEY, SnapshotStore, Snapshots},
    },
    domain::{
        entities::{MealPlanItem, ProfileEdit, Recipe, ShoppingListItem, User},
        planner::{MealPlanner, WeekDirection},
        rating::Vote,
        recipes::{DraftErrors, RecipeDraft, default_user, sample_recipes},
        search::SearchFilters,
        shopping::ShoppingList,
        types::MealType,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KitchenOptions {
    /// Seed the sample catalog when storage holds no recipes.
    pub seed_samples: bool,
    /// Snapshot the meal plan under [`MEAL_PLAN_KEY`].
    pub persist_plan: bool,
}

impl Default for KitchenOptions {
    fn default() -> Self {
        Self {
            seed_samples: true,
            persist_plan: false,
        }
    }
}

/// Completed versus total shopping list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShoppingProgress {
    pub completed: usize,
    pub total: usize,
}

pub struct Kitchen {
    snapshots: Snapshots,
    options: KitchenOptions,
    catalog: Catalog,
    user: User,
    selection: Vec<String>,
    planner: MealPlanner,
}

impl Kitchen {
    /// Load persisted state, creating the default profile and sample catalog
    /// on first launch.
    pub fn bootstrap(
        store: Arc<dyn SnapshotStore>,
        options: KitchenOptions,
        now: OffsetDateTime,
    ) -> Self {
        let snapshots = Snapshots::new(store);
        let (catalog, user) = load_catalog_and_user(&snapshots, options, now);

        let plan_items = if options.persist_plan {
            snapshots
                .load::<Vec<MealPlanItem>>(MEAL_PLAN_KEY)
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        info!(
            target = "recipebook::kitchen",
            recipes = catalog.len(),
            user = %user.id,
            planned = plan_items.len(),
            "kitchen ready"
        );

        Self {
            snapshots,
            options,
            catalog,
            user,
            selection: Vec::new(),
            planner: MealPlanner::with_items(now.date(), plan_items),
        }
    }

    /// Wipe every snapshot and start over from defaults.
    pub fn reset(&mut self, now: OffsetDateTime) {
        self.snapshots.clear();
        let (catalog, user) = load_catalog_and_user(&self.snapshots, self.options, now);
        self.catalog = catalog;
        self.user = user;
        self.selection.clear();
        self.planner = MealPlanner::new(now.date());
        info!(target = "recipebook::kitchen", "storage reset");
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn recipes(&self) -> &[Recipe] {
        self.catalog.recipes()
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.catalog.find(id)
    }

    pub fn feed(&self, query: &str, filters: &SearchFilters) -> Vec<&Recipe> {
        self.catalog.search(query, filters)
    }

    /// Validate and publish a draft under the current user.
    pub fn create_recipe(
        &mut self,
        draft: RecipeDraft,
        now: OffsetDateTime,
    ) -> Result<&Recipe, DraftErrors> {
        let recipe = draft.validate()?.into_recipe(&self.user, now);
        info!(
            target = "recipebook::kitchen",
            recipe = %recipe.id,
            title = %recipe.title,
            "recipe created"
        );

        self.catalog.prepend(recipe);
        self.user.recipes_count = self.user.recipes_count.saturating_add(1);
        self.persist_recipes();
        self.persist_user();
        Ok(&self.catalog.recipes()[0])
    }

    pub fn rate_recipe(&mut self, id: &str, vote: Vote) -> Option<&Recipe> {
        if self.catalog.rate(id, vote).is_none() {
            debug!(target = "recipebook::kitchen", recipe = id, "rating unknown recipe ignored");
            return None;
        }
        self.persist_recipes();
        self.catalog.find(id)
    }

    /// Flip the saved state of `id`. Returns `None` when the recipe is neither
    /// saved nor in the catalog.
    pub fn toggle_save(&mut self, id: &str) -> Option<bool> {
        if !self.user.has_saved(id) && !self.catalog.contains(id) {
            debug!(target = "recipebook::kitchen", recipe = id, "saving unknown recipe ignored");
            return None;
        }

        let saved = self.user.toggle_saved(id);
        if !saved {
            self.selection.retain(|selected| selected != id);
        }
        self.persist_user();
        Some(saved)
    }

    pub fn update_profile(&mut self, edit: ProfileEdit) -> &User {
        self.user.apply_profile_edit(edit);
        self.persist_user();
        &self.user
    }

    pub fn authored_recipes(&self) -> Vec<&Recipe> {
        self.catalog.authored_by(&self.user.id)
    }

    /// Saved recipes still present in the catalog, in save order.
    pub fn saved_recipes(&self) -> Vec<&Recipe> {
        self.catalog.resolve(&self.user.saved_recipes)
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.user.shopping_list
    }

    pub fn shopping_progress(&self) -> ShoppingProgress {
        ShoppingProgress {
            completed: self.user.shopping_list.completed_count(),
            total: self.user.shopping_list.len(),
        }
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Mark a saved recipe as a shopping candidate.
    pub fn select_recipe(&mut self, id: &str) -> bool {
        if !self.user.has_saved(id) || !self.catalog.contains(id) {
            debug!(target = "recipebook::kitchen", recipe = id, "selection of unsaved recipe ignored");
            return false;
        }
        if self.selection.iter().any(|selected| selected == id) {
            return false;
        }
        self.selection.push(id.to_string());
        true
    }

    pub fn deselect_recipe(&mut self, id: &str) -> bool {
        let before = self.selection.len();
        self.selection.retain(|selected| selected != id);
        self.selection.len() != before
    }

    /// Add the ingredients of every selected recipe and clear the selection.
    /// Returns the number of items appended.
    pub fn apply_selection(&mut self) -> usize {
        let selection = std::mem::take(&mut self.selection);
        if selection.is_empty() {
            return 0;
        }

        let available: Vec<Recipe> = self.saved_recipes().into_iter().cloned().collect();
        let added = self
            .user
            .shopping_list
            .add_ingredients_from_recipes(&selection, &available);

        info!(
            target = "recipebook::kitchen",
            recipes = selection.len(),
            added,
            "ingredients added to shopping list"
        );
        self.persist_user();
        added
    }

    pub fn add_shopping_item(&mut self, name: &str) -> Option<ShoppingListItem> {
        let item = self.user.shopping_list.add_custom_item(name)?.clone();
        self.persist_user();
        Some(item)
    }

    pub fn toggle_shopping_item(&mut self, item_id: &str) -> bool {
        let changed = self.user.shopping_list.toggle_completed(item_id);
        self.persist_user_if(changed, item_id);
        changed
    }

    pub fn remove_shopping_item(&mut self, item_id: &str) -> bool {
        let changed = self.user.shopping_list.remove_item(item_id);
        self.persist_user_if(changed, item_id);
        changed
    }

    pub fn clear_completed_items(&mut self) -> usize {
        let removed = self.user.shopping_list.clear_completed();
        if removed > 0 {
            self.persist_user();
        }
        removed
    }

    pub fn planner(&self) -> &MealPlanner {
        &self.planner
    }

    pub fn navigate_week(&mut self, direction: WeekDirection) {
        self.planner.navigate(direction);
    }

    pub fn shift_week(&mut self, weeks: i32) {
        self.planner.shift_weeks(weeks);
    }

    pub fn show_week_of(&mut self, date: Date) {
        self.planner.jump_to(date);
    }

    /// Plan a saved recipe into a slot.
    pub fn plan_meal(
        &mut self,
        date: Date,
        meal: MealType,
        recipe_id: &str,
        servings: u32,
    ) -> Option<MealPlanItem> {
        let recipe = self
            .user
            .has_saved(recipe_id)
            .then(|| self.catalog.find(recipe_id))
            .flatten();
        let Some(recipe) = recipe else {
            debug!(
                target = "recipebook::kitchen",
                recipe = recipe_id,
                "planning unsaved recipe ignored"
            );
            return None;
        };

        let item = self
            .planner
            .add(date, meal, recipe_id, servings, std::slice::from_ref(recipe))?
            .clone();
        self.persist_plan();
        Some(item)
    }

    pub fn remove_planned_meal(&mut self, item_id: &str) -> bool {
        let removed = self.planner.remove(item_id);
        if removed {
            self.persist_plan();
        }
        removed
    }

    fn persist_recipes(&self) {
        self.snapshots.save(RECIPES_KEY, self.catalog.recipes());
    }

    fn persist_user(&self) {
        self.snapshots.save(CURRENT_USER_KEY, &self.user);
    }

    fn persist_user_if(&self, changed: bool, item_id: &str) {
        if changed {
            self.persist_user();
        } else {
            debug!(target = "recipebook::kitchen", item = item_id, "unknown shopping item ignored");
        }
    }

    fn persist_plan(&self) {
        if self.options.persist_plan {
            self.snapshots.save(MEAL_PLAN_KEY, self.planner.items());
        }
    }
}

fn load_catalog_and_user(
    snapshots: &Snapshots,
    options: KitchenOptions,
    now: OffsetDateTime,
) -> (Catalog, User) {
    let user = match snapshots.load::<User>(CURRENT_USER_KEY) {
        Some(user) => user,
        None => {
            let user = default_user(now);
            snapshots.save(CURRENT_USER_KEY, &user);
            info!(target = "recipebook::kitchen", user = %user.id, "created default profile");
            user
        }
    };

    let mut recipes = snapshots
        .load::<Vec<Recipe>>(RECIPES_KEY)
        .unwrap_or_default();
    if recipes.is_empty() && options.seed_samples {
        recipes = sample_recipes(&user.id);
        snapshots.save(RECIPES_KEY, &recipes);
        info!(
            target = "recipebook::kitchen",
            recipes = recipes.len(),
            "seeded sample recipes"
        );
    }

    (Catalog::new(recipes), user)
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;
    use crate::{
        application::store::tests::StubStore,
        domain::{entities::Ingredient, types::Category},
    };

    const NOW: OffsetDateTime = datetime!(2024-03-06 10:00 UTC);

    fn kitchen_with(store: Arc<StubStore>, options: KitchenOptions) -> Kitchen {
        Kitchen::bootstrap(store, options, NOW)
    }

    fn draft() -> RecipeDraft {
        RecipeDraft {
            title: "Overnight Oats".into(),
            description: "No-cook breakfast".into(),
            cuisine: "American".into(),
            diet: "Vegan".into(),
            ingredients: vec![Ingredient {
                name: "Rolled oats".into(),
                amount: "1 cup".into(),
                unit: "cup".into(),
            }],
            instructions: vec!["Soak overnight".into()],
            ..Default::default()
        }
    }

    #[test]
    fn first_launch_seeds_profile_and_catalog() {
        let store = Arc::new(StubStore::default());
        let kitchen = kitchen_with(store.clone(), KitchenOptions::default());

        assert_eq!(kitchen.user().name, "Food Explorer");
        assert_eq!(kitchen.recipes().len(), 3);
        assert!(store.raw(CURRENT_USER_KEY).is_some());
        assert!(store.raw(RECIPES_KEY).is_some());
        assert!(store.raw(MEAL_PLAN_KEY).is_none());
    }

    #[test]
    fn seeding_can_be_disabled() {
        let store = Arc::new(StubStore::default());
        let options = KitchenOptions {
            seed_samples: false,
            ..Default::default()
        };
        let kitchen = kitchen_with(store.clone(), options);
        assert!(kitchen.recipes().is_empty());
        assert!(store.raw(RECIPES_KEY).is_none());
    }

    #[test]
    fn unavailable_storage_still_boots() {
        let store = Arc::new(StubStore::default());
        store.fail(true);
        let kitchen = kitchen_with(store, KitchenOptions::default());
        assert_eq!(kitchen.recipes().len(), 3);
        assert_eq!(kitchen.user().id, "1");
    }

    #[test]
    fn created_recipe_is_prepended_and_counted() {
        let store = Arc::new(StubStore::default());
        let mut kitchen = kitchen_with(store.clone(), KitchenOptions::default());

        let id = kitchen.create_recipe(draft(), NOW).expect("created").id.clone();
        assert_eq!(kitchen.recipes()[0].id, id);
        assert_eq!(kitchen.user().recipes_count, 1);
        assert_eq!(kitchen.authored_recipes().len(), 4);

        let reloaded = kitchen_with(store, KitchenOptions::default());
        assert_eq!(reloaded.recipes()[0].id, id);
        assert_eq!(reloaded.user().recipes_count, 1);
    }

    #[test]
    fn invalid_draft_changes_nothing() {
        let store = Arc::new(StubStore::default());
        let mut kitchen = kitchen_with(store, KitchenOptions::default());
        let errors = kitchen
            .create_recipe(RecipeDraft::default(), NOW)
            .expect_err("invalid");
        assert!(!errors.is_empty());
        assert_eq!(kitchen.recipes().len(), 3);
        assert_eq!(kitchen.user().recipes_count, 0);
    }

    #[test]
    fn toggle_save_ignores_unknown_recipes() {
        let store = Arc::new(StubStore::default());
        let mut kitchen = kitchen_with(store, KitchenOptions::default());
        assert_eq!(kitchen.toggle_save("nope"), None);
        assert_eq!(kitchen.toggle_save("2"), Some(true));
        assert_eq!(kitchen.saved_recipes().len(), 1);
        assert_eq!(kitchen.toggle_save("2"), Some(false));
        assert!(kitchen.saved_recipes().is_empty());
    }

    #[test]
    fn selection_builds_the_shopping_list() {
        let store = Arc::new(StubStore::default());
        let mut kitchen = kitchen_with(store.clone(), KitchenOptions::default());
        kitchen.toggle_save("1");
        kitchen.toggle_save("3");

        assert!(!kitchen.select_recipe("2"));
        assert!(kitchen.select_recipe("1"));
        assert!(kitchen.select_recipe("3"));
        assert!(!kitchen.select_recipe("3"));
        assert!(kitchen.deselect_recipe("3"));
        assert!(kitchen.select_recipe("3"));

        assert_eq!(kitchen.apply_selection(), 13);
        assert!(kitchen.selection().is_empty());
        assert_eq!(kitchen.apply_selection(), 0);

        let first = kitchen.shopping_list().items()[0].id.clone();
        assert!(kitchen.toggle_shopping_item(&first));
        assert_eq!(
            kitchen.shopping_progress(),
            ShoppingProgress {
                completed: 1,
                total: 13
            }
        );
        assert_eq!(kitchen.clear_completed_items(), 1);

        let reloaded = kitchen_with(store, KitchenOptions::default());
        assert_eq!(reloaded.shopping_list().len(), 12);
    }

    #[test]
    fn custom_items_persist_with_the_profile() {
        let store = Arc::new(StubStore::default());
        let mut kitchen = kitchen_with(store.clone(), KitchenOptions::default());
        let item = kitchen.add_shopping_item("Foil").expect("added");
        assert_eq!(item.category, Category::Other);
        assert!(kitchen.add_shopping_item("  ").is_none());
        assert!(!kitchen.remove_shopping_item("missing"));

        let reloaded = kitchen_with(store, KitchenOptions::default());
        assert_eq!(reloaded.shopping_list().items()[0].name, "Foil");
    }

    #[test]
    fn planner_requires_saved_recipes() {
        let store = Arc::new(StubStore::default());
        let mut kitchen = kitchen_with(store, KitchenOptions::default());
        let day = date!(2024 - 03 - 06);

        assert!(kitchen.plan_meal(day, MealType::Dinner, "1", 2).is_none());
        kitchen.toggle_save("1");
        let item = kitchen.plan_meal(day, MealType::Dinner, "1", 2).expect("planned");
        assert_eq!(item.recipe_name, "Classic Spaghetti Carbonara");
        assert_eq!(kitchen.planner().count_for_day(day), 1);
        assert_eq!(kitchen.planner().week_start(), date!(2024 - 03 - 04));
    }

    #[test]
    fn week_navigation_moves_the_displayed_week() {
        let store = Arc::new(StubStore::default());
        let mut kitchen = kitchen_with(store, KitchenOptions::default());

        kitchen.show_week_of(date!(2024 - 03 - 06));
        kitchen.navigate_week(WeekDirection::Next);
        assert_eq!(kitchen.planner().week_start(), date!(2024 - 03 - 11));
        kitchen.shift_week(-5);
        assert_eq!(kitchen.planner().week_start(), date!(2024 - 02 - 05));
    }

    #[test]
    fn meal_plan_is_transient_unless_configured() {
        let store = Arc::new(StubStore::default());
        let mut kitchen = kitchen_with(store.clone(), KitchenOptions::default());
        kitchen.toggle_save("2");
        kitchen.plan_meal(date!(2024 - 03 - 07), MealType::Lunch, "2", 1);
        assert!(store.raw(MEAL_PLAN_KEY).is_none());
        let reloaded = kitchen_with(store.clone(), KitchenOptions::default());
        assert!(reloaded.planner().items().is_empty());

        let options = KitchenOptions {
            persist_plan: true,
            ..Default::default()
        };
        let mut kitchen = kitchen_with(store.clone(), options);
        let item = kitchen
            .plan_meal(date!(2024 - 03 - 07), MealType::Lunch, "2", 1)
            .expect("planned");
        let reloaded = kitchen_with(store, options);
        assert_eq!(reloaded.planner().items(), [item]);
    }

    #[test]
    fn reset_restores_defaults() {
        let store = Arc::new(StubStore::default());
        let mut kitchen = kitchen_with(store.clone(), KitchenOptions::default());
        kitchen.create_recipe(draft(), NOW).expect("created");
        kitchen.update_profile(ProfileEdit {
            name: Some("Chef".into()),
            ..Default::default()
        });

        kitchen.reset(NOW);
        assert_eq!(kitchen.recipes().len(), 3);
        assert_eq!(kitchen.user().name, "Food Explorer");
        assert_eq!(kitchen.user().recipes_count, 0);
    }
}
