use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};
use time::{Date, macros::format_description};

use crate::domain::types::{Difficulty, MealType};

/// Command-line arguments for the recipebook binary.
#[derive(Debug, Parser)]
#[command(
    name = "recipebook",
    version,
    about = "Share recipes, build a shopping list, and plan the week's meals"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "RECIPEBOOK_CONFIG_FILE",
        value_name = "PATH",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: GlobalOverrides,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct GlobalOverrides {
    /// Override the directory holding the JSON snapshots.
    #[arg(long = "data-dir", value_name = "PATH", value_hint = ValueHint::DirPath, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,

    /// Seed the sample recipes when storage holds none.
    #[arg(
        long = "seed-samples",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub seed_samples: Option<bool>,

    /// Keep the meal plan between runs.
    #[arg(
        long = "persist-plan",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub persist_plan: Option<bool>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List recipes matching a query and filters.
    Feed(FeedArgs),
    /// Show one recipe in full.
    Show(RecipeIdArgs),
    /// Publish a recipe from a JSON draft.
    Create(CreateArgs),
    /// Rate a recipe from 1 to 5 stars.
    Rate(RateArgs),
    /// Save or unsave a recipe.
    Save(RecipeIdArgs),
    /// Show or edit the current profile.
    Profile(ProfileArgs),
    /// Manage the shopping list.
    Shopping(ShoppingArgs),
    /// Plan meals on the weekly calendar.
    Plan(PlanArgs),
    /// Erase all stored data.
    Reset,
}

#[derive(Debug, Args, Default, Clone)]
pub struct FeedArgs {
    /// Free-text search over title, description, and tags.
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    #[arg(long, value_name = "CUISINE")]
    pub cuisine: Option<String>,

    #[arg(long, value_name = "DIET")]
    pub diet: Option<String>,

    #[arg(long, value_name = "LEVEL", value_parser = parse_difficulty)]
    pub difficulty: Option<Difficulty>,

    /// Maximum prep plus cook time in minutes.
    #[arg(long = "max-time", value_name = "MINUTES")]
    pub max_time: Option<u32>,

    /// Minimum average rating.
    #[arg(long = "min-rating", value_name = "RATING")]
    pub min_rating: Option<f64>,
}

#[derive(Debug, Args, Clone)]
pub struct RecipeIdArgs {
    #[arg(value_name = "RECIPE_ID")]
    pub id: String,
}

#[derive(Debug, Args, Clone)]
pub struct CreateArgs {
    /// JSON file holding the recipe draft.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,
}

#[derive(Debug, Args, Clone)]
pub struct RateArgs {
    #[arg(value_name = "RECIPE_ID")]
    pub id: String,

    #[arg(value_name = "STARS")]
    pub stars: u8,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ProfileArgs {
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    #[arg(long, value_name = "BIO")]
    pub bio: Option<String>,

    #[arg(long, value_name = "AVATAR")]
    pub avatar: Option<String>,
}

impl ProfileArgs {
    pub fn is_edit(&self) -> bool {
        self.name.is_some() || self.bio.is_some() || self.avatar.is_some()
    }
}

#[derive(Debug, Args, Clone)]
pub struct ShoppingArgs {
    #[command(subcommand)]
    pub command: Option<ShoppingCommand>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum ShoppingCommand {
    /// Show the list grouped by category.
    List,
    /// Add the ingredients of saved recipes.
    #[command(name = "add-recipes")]
    AddRecipes {
        #[arg(value_name = "RECIPE_ID", required = true, num_args = 1..)]
        ids: Vec<String>,
    },
    /// Add a custom item.
    Add {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Flip an item between open and completed.
    Toggle {
        #[arg(value_name = "ITEM_ID")]
        id: String,
    },
    /// Remove an item.
    Remove {
        #[arg(value_name = "ITEM_ID")]
        id: String,
    },
    /// Remove every completed item.
    #[command(name = "clear-completed")]
    ClearCompleted,
}

#[derive(Debug, Args, Clone)]
pub struct PlanArgs {
    #[command(subcommand)]
    pub command: PlanCommand,
}

#[derive(Debug, Subcommand, Clone)]
pub enum PlanCommand {
    /// Show the week grid.
    Week {
        /// Any day of the week to show; defaults to today.
        #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_iso_date)]
        date: Option<Date>,

        /// Weeks to move forward (or backward when negative).
        #[arg(long, value_name = "WEEKS", default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,
    },
    /// Plan a saved recipe into a slot.
    Add {
        #[arg(value_name = "YYYY-MM-DD", value_parser = parse_iso_date)]
        date: Date,

        #[arg(value_name = "MEAL", value_parser = parse_meal_type)]
        meal: MealType,

        #[arg(value_name = "RECIPE_ID")]
        recipe_id: String,

        #[arg(long, value_name = "COUNT", default_value_t = 1)]
        servings: u32,
    },
    /// Remove a planned meal.
    Remove {
        #[arg(value_name = "ITEM_ID")]
        id: String,
    },
    /// Count planned meals per meal type.
    Summary,
}

fn parse_iso_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

fn parse_meal_type(value: &str) -> Result<MealType, String> {
    MealType::try_from(value)
        .map_err(|_| "expected breakfast, lunch, dinner, or snack".to_string())
}

fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    Difficulty::try_from(value).map_err(|_| "expected Easy, Medium, or Hard".to_string())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn parse_feed_filters() {
        let args = CliArgs::parse_from([
            "recipebook",
            "feed",
            "pasta",
            "--cuisine",
            "Italian",
            "--difficulty",
            "Medium",
            "--max-time",
            "40",
        ]);

        match args.command.expect("feed command") {
            Command::Feed(feed) => {
                assert_eq!(feed.query.as_deref(), Some("pasta"));
                assert_eq!(feed.cuisine.as_deref(), Some("Italian"));
                assert_eq!(feed.difficulty, Some(Difficulty::Medium));
                assert_eq!(feed.max_time, Some(40));
                assert_eq!(feed.min_rating, None);
            }
            _ => panic!("wrong command parsed"),
        }
    }

    #[test]
    fn parse_plan_add_arguments() {
        let args = CliArgs::parse_from([
            "recipebook",
            "plan",
            "add",
            "2024-03-05",
            "Dinner",
            "1",
            "--servings",
            "3",
        ]);

        match args.command.expect("plan command") {
            Command::Plan(PlanArgs {
                command:
                    PlanCommand::Add {
                        date: planned,
                        meal,
                        recipe_id,
                        servings,
                    },
            }) => {
                assert_eq!(planned, date!(2024 - 03 - 05));
                assert_eq!(meal, MealType::Dinner);
                assert_eq!(recipe_id, "1");
                assert_eq!(servings, 3);
            }
            _ => panic!("wrong command parsed"),
        }
    }

    #[test]
    fn parse_negative_week_offset() {
        let args = CliArgs::parse_from(["recipebook", "plan", "week", "--offset", "-2"]);
        match args.command.expect("plan command") {
            Command::Plan(PlanArgs {
                command: PlanCommand::Week { date, offset },
            }) => {
                assert_eq!(date, None);
                assert_eq!(offset, -2);
            }
            _ => panic!("wrong command parsed"),
        }
    }

    #[test]
    fn global_overrides_follow_the_subcommand() {
        let args = CliArgs::parse_from([
            "recipebook",
            "shopping",
            "add-recipes",
            "1",
            "3",
            "--data-dir",
            "/tmp/kitchen",
            "--persist-plan",
            "yes",
        ]);

        assert_eq!(
            args.overrides.data_dir.as_deref(),
            Some(std::path::Path::new("/tmp/kitchen"))
        );
        assert_eq!(args.overrides.persist_plan, Some(true));
        match args.command.expect("shopping command") {
            Command::Shopping(ShoppingArgs {
                command: Some(ShoppingCommand::AddRecipes { ids }),
            }) => assert_eq!(ids, ["1", "3"]),
            _ => panic!("wrong command parsed"),
        }
    }

    #[test]
    fn invalid_dates_and_meals_are_rejected() {
        assert!(CliArgs::try_parse_from(["recipebook", "plan", "add", "03/05/2024", "lunch", "1"]).is_err());
        assert!(CliArgs::try_parse_from(["recipebook", "plan", "add", "2024-03-05", "brunch", "1"]).is_err());
    }
}
