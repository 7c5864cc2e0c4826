//! Weekly meal planning over (date, meal type) slots.

use time::{Date, Duration};

use crate::domain::{
    entities::{MealPlanItem, Recipe, generate_id},
    types::MealType,
};

pub const DAYS_PER_WEEK: usize = 7;

/// Monday on or before `date`; a Sunday belongs to the week that began six days earlier.
pub fn week_start(date: Date) -> Date {
    let offset = i64::from(date.weekday().number_days_from_monday());
    date.saturating_sub(Duration::days(offset))
}

/// The seven consecutive days beginning at `start`.
pub fn week_days(start: Date) -> [Date; DAYS_PER_WEEK] {
    std::array::from_fn(|offset| start.saturating_add(Duration::days(offset as i64)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekDirection {
    Previous,
    Next,
}

/// One row of the week grid: a day and its slots in [`MealType::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan<'a> {
    pub date: Date,
    pub slots: Vec<(MealType, Vec<&'a MealPlanItem>)>,
}

impl DayPlan<'_> {
    pub fn total(&self) -> usize {
        self.slots.iter().map(|(_, items)| items.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealPlanner {
    anchor: Date,
    items: Vec<MealPlanItem>,
}

impl MealPlanner {
    pub fn new(anchor: Date) -> Self {
        Self {
            anchor,
            items: Vec::new(),
        }
    }

    pub fn with_items(anchor: Date, items: Vec<MealPlanItem>) -> Self {
        Self { anchor, items }
    }

    pub fn anchor(&self) -> Date {
        self.anchor
    }

    pub fn items(&self) -> &[MealPlanItem] {
        &self.items
    }

    pub fn week_start(&self) -> Date {
        week_start(self.anchor)
    }

    pub fn week_days(&self) -> [Date; DAYS_PER_WEEK] {
        week_days(self.week_start())
    }

    /// Move the displayed week by seven days. Navigation is unbounded.
    pub fn navigate(&mut self, direction: WeekDirection) {
        match direction {
            WeekDirection::Previous => self.shift_weeks(-1),
            WeekDirection::Next => self.shift_weeks(1),
        }
    }

    /// Move the displayed week by `weeks` in one step, clamping at the
    /// calendar limits.
    pub fn shift_weeks(&mut self, weeks: i32) {
        self.anchor = self.anchor.saturating_add(Duration::weeks(i64::from(weeks)));
    }

    pub fn jump_to(&mut self, date: Date) {
        self.anchor = date;
    }

    /// Plan `recipe_id` into a slot. Returns `None` without changes when the
    /// recipe is not among `available`. Duplicate entries are allowed.
    pub fn add(
        &mut self,
        date: Date,
        meal: MealType,
        recipe_id: &str,
        servings: u32,
        available: &[Recipe],
    ) -> Option<&MealPlanItem> {
        let recipe = available.iter().find(|recipe| recipe.id == recipe_id)?;

        self.items.push(MealPlanItem {
            id: generate_id(),
            date,
            meal,
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.title.clone(),
            servings: servings.max(1),
        });
        self.items.last()
    }

    pub fn remove(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        self.items.len() != before
    }

    pub fn items_for_slot(&self, date: Date, meal: MealType) -> Vec<&MealPlanItem> {
        self.items
            .iter()
            .filter(|item| item.date == date && item.meal == meal)
            .collect()
    }

    pub fn count_for_day(&self, date: Date) -> usize {
        self.items.iter().filter(|item| item.date == date).count()
    }

    /// Entries per meal type across the whole plan, not just the displayed week.
    pub fn summary_by_meal_type(&self) -> [(MealType, usize); 4] {
        MealType::ALL.map(|meal| {
            let count = self.items.iter().filter(|item| item.meal == meal).count();
            (meal, count)
        })
    }

    /// The displayed week as seven rows of four slots.
    pub fn week_grid(&self) -> Vec<DayPlan<'_>> {
        self.week_days()
            .into_iter()
            .map(|date| DayPlan {
                date,
                slots: MealType::ALL
                    .into_iter()
                    .map(|meal| (meal, self.items_for_slot(date, meal)))
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;
    use crate::domain::recipes::sample_recipes;

    #[test]
    fn week_start_of_wednesday_is_monday() {
        assert_eq!(week_start(date!(2024 - 03 - 06)), date!(2024 - 03 - 04));
    }

    #[test]
    fn week_start_of_sunday_is_six_days_earlier() {
        assert_eq!(week_start(date!(2024 - 03 - 10)), date!(2024 - 03 - 04));
    }

    #[test]
    fn week_start_of_monday_is_itself() {
        assert_eq!(week_start(date!(2024 - 03 - 04)), date!(2024 - 03 - 04));
    }

    #[test]
    fn week_days_cross_month_boundaries() {
        let days = week_days(date!(2024 - 02 - 26));
        assert_eq!(days[0], date!(2024 - 02 - 26));
        assert_eq!(days[3], date!(2024 - 02 - 29));
        assert_eq!(days[6], date!(2024 - 03 - 03));
    }

    #[test]
    fn navigate_moves_by_whole_weeks() {
        let mut planner = MealPlanner::new(date!(2024 - 03 - 06));
        planner.navigate(WeekDirection::Next);
        assert_eq!(planner.week_start(), date!(2024 - 03 - 11));
        planner.navigate(WeekDirection::Previous);
        planner.navigate(WeekDirection::Previous);
        assert_eq!(planner.week_start(), date!(2024 - 02 - 26));
    }

    #[test]
    fn shift_weeks_jumps_in_one_step_and_clamps() {
        let mut planner = MealPlanner::new(date!(2024 - 03 - 06));
        planner.shift_weeks(-3);
        assert_eq!(planner.week_start(), date!(2024 - 02 - 12));

        planner.shift_weeks(2_000_000_000);
        assert_eq!(planner.anchor(), Date::MAX);
        planner.shift_weeks(i32::MIN);
        planner.shift_weeks(i32::MIN);
        assert_eq!(planner.anchor(), Date::MIN);
    }

    #[test]
    fn unknown_recipe_leaves_plan_unchanged() {
        let recipes = sample_recipes("1");
        let mut planner = MealPlanner::new(date!(2024 - 03 - 04));
        let added = planner.add(
            date!(2024 - 03 - 04),
            MealType::Dinner,
            "missing-id",
            1,
            &recipes,
        );
        assert!(added.is_none());
        assert!(planner.items().is_empty());
    }

    #[test]
    fn slots_hold_duplicates_in_insertion_order() {
        let recipes = sample_recipes("1");
        let day = date!(2024 - 03 - 05);
        let mut planner = MealPlanner::new(day);

        let first = planner
            .add(day, MealType::Dinner, "1", 2, &recipes)
            .expect("planned")
            .id
            .clone();
        let second = planner
            .add(day, MealType::Dinner, "1", 0, &recipes)
            .expect("planned")
            .clone();
        planner.add(day, MealType::Lunch, "2", 1, &recipes);

        let slot = planner.items_for_slot(day, MealType::Dinner);
        assert_eq!(slot.len(), 2);
        assert_eq!(slot[0].id, first);
        assert_eq!(slot[1].recipe_name, "Classic Spaghetti Carbonara");
        assert_eq!(second.servings, 1);
        assert_eq!(planner.count_for_day(day), 3);
        assert_eq!(planner.count_for_day(date!(2024 - 03 - 06)), 0);
    }

    #[test]
    fn summary_spans_the_whole_plan() {
        let recipes = sample_recipes("1");
        let mut planner = MealPlanner::new(date!(2024 - 03 - 04));
        planner.add(date!(2024 - 03 - 04), MealType::Breakfast, "3", 1, &recipes);
        planner.add(date!(2024 - 05 - 20), MealType::Breakfast, "3", 1, &recipes);
        planner.add(date!(2024 - 03 - 05), MealType::Snack, "3", 1, &recipes);

        let summary = planner.summary_by_meal_type();
        assert_eq!(
            summary,
            [
                (MealType::Breakfast, 2),
                (MealType::Lunch, 0),
                (MealType::Dinner, 0),
                (MealType::Snack, 1),
            ]
        );

        let grid = planner.week_grid();
        assert_eq!(grid.len(), DAYS_PER_WEEK);
        assert_eq!(grid[0].total(), 1);
        assert_eq!(grid.iter().map(DayPlan::total).sum::<usize>(), 2);
    }

    #[test]
    fn remove_ignores_unknown_ids() {
        let recipes = sample_recipes("1");
        let day = date!(2024 - 03 - 04);
        let mut planner = MealPlanner::new(day);
        let id = planner
            .add(day, MealType::Lunch, "2", 1, &recipes)
            .expect("planned")
            .id
            .clone();

        assert!(!planner.remove("nope"));
        assert!(planner.remove(&id));
        assert!(planner.items().is_empty());
    }
}
