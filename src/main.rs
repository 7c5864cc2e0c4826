use std::{
    fs,
    io::{self, Write},
    process,
    sync::Arc,
};

use recipebook::{
    application::{
        error::AppError,
        kitchen::{Kitchen, KitchenOptions},
    },
    config::{
        self, Command, CreateArgs, FeedArgs, PlanCommand, ProfileArgs, RateArgs, RecipeIdArgs,
        Settings, ShoppingCommand,
    },
    domain::{
        entities::ProfileEdit,
        rating::Vote,
        recipes::RecipeDraft,
        search::SearchFilters,
    },
    infra::{error::InfraError, store::FileSnapshotStore, telemetry},
};
use time::OffsetDateTime;
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

mod print;

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(error.exit_code());
    }
}

fn report_application_error(error: &AppError) {
    let report = error.report();
    if dispatcher::has_been_set() {
        error!(
            source = report.source,
            error = %error,
            chain = ?report.messages,
            "application error"
        );
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(
            source = report.source,
            error = %error,
            chain = ?report.messages,
            "application error"
        );
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli().map_err(|err| {
        InfraError::configuration(format!("failed to load configuration: {err}"))
    })?;

    telemetry::init(&settings.logging)?;

    let command = cli_args
        .command
        .unwrap_or_else(|| Command::Feed(FeedArgs::default()));

    let store = FileSnapshotStore::open(&settings.storage.directory)?;
    info!(
        target = "recipebook::main",
        directory = %store.root().display(),
        "using snapshot directory"
    );

    let options = KitchenOptions {
        seed_samples: settings.catalog.seed_samples,
        persist_plan: settings.planner.persist,
    };
    let now = OffsetDateTime::now_utc();
    let mut kitchen = Kitchen::bootstrap(Arc::new(store), options, now);

    let mut out = io::stdout().lock();
    match command {
        Command::Feed(args) => run_feed(&kitchen, args, &mut out),
        Command::Show(args) => run_show(&kitchen, args, &mut out),
        Command::Create(args) => run_create(&mut kitchen, args, now, &mut out),
        Command::Rate(args) => run_rate(&mut kitchen, args, &mut out),
        Command::Save(args) => run_save(&mut kitchen, args, &mut out),
        Command::Profile(args) => run_profile(&mut kitchen, args, &mut out),
        Command::Shopping(args) => {
            let command = args.command.unwrap_or(ShoppingCommand::List);
            run_shopping(&mut kitchen, command, &mut out)
        }
        Command::Plan(args) => run_plan(&mut kitchen, args.command, &settings, &mut out),
        Command::Reset => {
            kitchen.reset(now);
            writeln!(out, "All stored data cleared.").map_err(InfraError::from)?;
            Ok(())
        }
    }
}

fn run_feed(kitchen: &Kitchen, args: FeedArgs, out: &mut impl Write) -> Result<(), AppError> {
    let filters = SearchFilters {
        cuisine: args.cuisine.unwrap_or_default(),
        diet: args.diet.unwrap_or_default(),
        difficulty: args
            .difficulty
            .map(|difficulty| difficulty.as_str().to_string())
            .unwrap_or_default(),
        max_time: args.max_time.unwrap_or(0),
        min_rating: args.min_rating.unwrap_or(0.0),
    };
    let query = args.query.unwrap_or_default();

    let recipes = kitchen.feed(&query, &filters);
    print::recipe_list(out, &recipes, kitchen.user()).map_err(InfraError::from)?;
    Ok(())
}

fn run_show(kitchen: &Kitchen, args: RecipeIdArgs, out: &mut impl Write) -> Result<(), AppError> {
    let recipe = kitchen
        .recipe(&args.id)
        .ok_or_else(|| AppError::not_found(format!("recipe `{}`", args.id)))?;
    print::recipe_detail(out, recipe, kitchen.user().has_saved(&recipe.id))
        .map_err(InfraError::from)?;
    Ok(())
}

fn run_create(
    kitchen: &mut Kitchen,
    args: CreateArgs,
    now: OffsetDateTime,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.file).map_err(InfraError::from)?;
    let draft: RecipeDraft = serde_json::from_str(&raw)
        .map_err(|err| AppError::validation(format!("draft is not valid JSON: {err}")))?;

    let recipe = kitchen.create_recipe(draft, now)?;
    writeln!(out, "Created recipe [{}] {}", recipe.id, recipe.title).map_err(InfraError::from)?;
    Ok(())
}

fn run_rate(kitchen: &mut Kitchen, args: RateArgs, out: &mut impl Write) -> Result<(), AppError> {
    let vote = Vote::try_from(args.stars)?;
    let recipe = kitchen
        .rate_recipe(&args.id, vote)
        .ok_or_else(|| AppError::not_found(format!("recipe `{}`", args.id)))?;
    writeln!(
        out,
        "{} is now rated {:.1} from {} vote(s)",
        recipe.title, recipe.rating, recipe.ratings_count
    )
    .map_err(InfraError::from)?;
    Ok(())
}

fn run_save(kitchen: &mut Kitchen, args: RecipeIdArgs, out: &mut impl Write) -> Result<(), AppError> {
    let saved = kitchen
        .toggle_save(&args.id)
        .ok_or_else(|| AppError::not_found(format!("recipe `{}`", args.id)))?;
    let message = if saved { "Saved" } else { "Removed from saved" };
    writeln!(out, "{message}: [{}]", args.id).map_err(InfraError::from)?;
    Ok(())
}

fn run_profile(
    kitchen: &mut Kitchen,
    args: ProfileArgs,
    out: &mut impl Write,
) -> Result<(), AppError> {
    if args.is_edit() {
        kitchen.update_profile(ProfileEdit {
            name: args.name,
            bio: args.bio,
            avatar: args.avatar,
        });
    }

    print::profile(
        out,
        kitchen.user(),
        &kitchen.authored_recipes(),
        &kitchen.saved_recipes(),
    )
    .map_err(InfraError::from)?;
    Ok(())
}

fn run_shopping(
    kitchen: &mut Kitchen,
    command: ShoppingCommand,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match command {
        ShoppingCommand::List => {
            print::shopping_list(out, kitchen.shopping_list(), kitchen.shopping_progress())
                .map_err(InfraError::from)?;
        }
        ShoppingCommand::AddRecipes { ids } => {
            for id in &ids {
                if !kitchen.select_recipe(id) {
                    warn!(
                        target = "recipebook::main",
                        recipe = %id,
                        "skipping recipe that is not saved"
                    );
                }
            }
            let added = kitchen.apply_selection();
            writeln!(out, "Added {added} item(s) to the shopping list.")
                .map_err(InfraError::from)?;
        }
        ShoppingCommand::Add { name } => {
            let item = kitchen
                .add_shopping_item(&name)
                .ok_or_else(|| AppError::validation("item name must not be blank"))?;
            print::shopping_item(out, &item).map_err(InfraError::from)?;
        }
        ShoppingCommand::Toggle { id } => {
            if !kitchen.toggle_shopping_item(&id) {
                return Err(AppError::not_found(format!("shopping item `{id}`")));
            }
            print::shopping_list(out, kitchen.shopping_list(), kitchen.shopping_progress())
                .map_err(InfraError::from)?;
        }
        ShoppingCommand::Remove { id } => {
            if !kitchen.remove_shopping_item(&id) {
                return Err(AppError::not_found(format!("shopping item `{id}`")));
            }
            writeln!(out, "Removed #{id}").map_err(InfraError::from)?;
        }
        ShoppingCommand::ClearCompleted => {
            let removed = kitchen.clear_completed_items();
            writeln!(out, "Cleared {removed} completed item(s).").map_err(InfraError::from)?;
        }
    }
    Ok(())
}

fn run_plan(
    kitchen: &mut Kitchen,
    command: PlanCommand,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match command {
        PlanCommand::Week { date, offset } => {
            if let Some(date) = date {
                kitchen.show_week_of(date);
            }
            kitchen.shift_week(offset);
            print::week(out, kitchen.planner()).map_err(InfraError::from)?;
        }
        PlanCommand::Add {
            date,
            meal,
            recipe_id,
            servings,
        } => {
            let item = kitchen
                .plan_meal(date, meal, &recipe_id, servings)
                .ok_or_else(|| AppError::not_found(format!("saved recipe `{recipe_id}`")))?;
            print::planned_item(out, meal, &item).map_err(InfraError::from)?;
            if !settings.planner.persist {
                writeln!(
                    out,
                    "Note: the meal plan is kept for this run only; set planner.persist to keep it."
                )
                .map_err(InfraError::from)?;
            }
        }
        PlanCommand::Remove { id } => {
            if !kitchen.remove_planned_meal(&id) {
                return Err(AppError::not_found(format!("planned meal `{id}`")));
            }
            writeln!(out, "Removed #{id}").map_err(InfraError::from)?;
        }
        PlanCommand::Summary => {
            print::plan_summary(out, &kitchen.planner().summary_by_meal_type())
                .map_err(InfraError::from)?;
        }
    }
    Ok(())
}
