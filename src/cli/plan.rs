use serde_json::json;

use crate::cli::commands::PlanCommands;
use crate::config::Config;
use crate::db::{connection, plan_repo, recipe_repo, SqlitePlanStore, SqliteRecipeStore};
use crate::error::MealplanError;
use crate::models::{Day, MealSlot, Recipe, RecipeId, SlotKey};
use crate::output;
use crate::planner::{self, AddOutcome, RecipeStore, RemoveOutcome, WeeklyPlanner};

pub fn run(cmd: PlanCommands, config: &Config, json_output: bool) -> i32 {
    let result = match cmd {
        PlanCommands::Show { day } => run_show(config, day.as_deref(), json_output),
        PlanCommands::Get { day, meal } => run_get(config, &day, &meal, json_output),
        PlanCommands::Set { day, meal, recipes } => run_set(config, &day, &meal, &recipes, json_output),
        PlanCommands::Add { day, meal, recipe } => run_add(config, &day, &meal, &recipe, json_output),
        PlanCommands::Remove { day, meal, recipe } => run_remove(config, &day, &meal, &recipe, json_output),
        PlanCommands::Eligible { meal } => run_eligible(config, &meal, json_output),
        PlanCommands::Clear => run_clear(config, json_output),
    };
    super::finish(result, json_output)
}

fn run_show(config: &Config, day: Option<&str>, json_output: bool) -> Result<i32, MealplanError> {
    let days: Vec<Day> = match day {
        Some(d) => vec![d.parse()?],
        None => Day::ALL.to_vec(),
    };
    let conn = connection::open_db(config)?;
    let planner = WeeklyPlanner::load(SqlitePlanStore::new(&conn))?;
    let recipes = SqliteRecipeStore::new(&conn).list_recipes()?;
    let lookup = planner::index_recipes(recipes);

    if json_output {
        let days_json: Vec<_> = days
            .iter()
            .map(|&d| {
                let slots: Vec<_> = planner
                    .plan()
                    .day_slots(d)
                    .map(|(meal, ids)| output::json::slot_json(d, meal, ids, &lookup))
                    .collect();
                json!({
                    "day": d.as_str(),
                    "slots": slots,
                    "nutrition": output::json::nutrition_json(&planner.day_nutrition(d, &lookup))
                })
            })
            .collect();
        output::print_json(&output::json::success(json!({ "days": days_json })));
    } else {
        for (i, &d) in days.iter().enumerate() {
            if i > 0 {
                println!();
            }
            output::text::print_day_header(d);
            for (meal, ids) in planner.plan().day_slots(d) {
                output::text::print_slot(meal, ids, &lookup);
            }
            output::text::print_nutrition_line("  Total", &planner.day_nutrition(d, &lookup));
        }
    }
    Ok(0)
}

fn run_get(config: &Config, day: &str, meal: &str, json_output: bool) -> Result<i32, MealplanError> {
    let key = SlotKey::parse(day, meal)?;
    let conn = connection::open_db(config)?;
    let planner = WeeklyPlanner::load(SqlitePlanStore::new(&conn))?;
    let lookup = SqliteRecipeStore::new(&conn).list_recipes()?;
    let ids = planner.get_slot(key.day, key.meal);

    if json_output {
        output::print_json(&output::json::success(output::json::slot_json(
            key.day, key.meal, ids, &lookup,
        )));
    } else {
        output::text::print_day_header(key.day);
        output::text::print_slot(key.meal, ids, &lookup);
    }
    Ok(0)
}

fn run_set(
    config: &Config,
    day: &str,
    meal: &str,
    references: &[String],
    json_output: bool,
) -> Result<i32, MealplanError> {
    let key = SlotKey::parse(day, meal)?;
    let conn = connection::open_db(config)?;

    // Resolve everything before writing so a bad reference changes nothing.
    let mut ids: Vec<RecipeId> = Vec::with_capacity(references.len());
    for reference in references {
        let recipe = recipe_repo::resolve_recipe(&conn, reference)?;
        check_eligible(&recipe, key.meal)?;
        if !ids.contains(&recipe.id) {
            ids.push(recipe.id);
        }
    }

    let mut planner = WeeklyPlanner::load(SqlitePlanStore::new(&conn))?;
    planner.assign_slot(key.day, key.meal, ids)?;
    let ids = planner.get_slot(key.day, key.meal);

    if json_output {
        output::print_json(&output::json::success(json!({
            "day": key.day.as_str(),
            "meal": key.meal.as_str(),
            "recipe_ids": ids
        })));
    } else if ids.is_empty() {
        println!("Cleared {key}");
    } else {
        println!("Set {key}: {} recipe(s)", ids.len());
    }
    Ok(0)
}

fn run_add(
    config: &Config,
    day: &str,
    meal: &str,
    reference: &str,
    json_output: bool,
) -> Result<i32, MealplanError> {
    let key = SlotKey::parse(day, meal)?;
    let conn = connection::open_db(config)?;
    let recipe = recipe_repo::resolve_recipe(&conn, reference)?;
    check_eligible(&recipe, key.meal)?;

    let mut planner = WeeklyPlanner::load(SqlitePlanStore::new(&conn))?;
    let ids = match planner.add_recipe_to_slot(key.day, key.meal, recipe.id.clone())? {
        AddOutcome::Added(ids) => ids,
        AddOutcome::DuplicateAssignment => {
            return Err(MealplanError::duplicate_assignment(&recipe.name, &key.to_string()));
        }
    };

    if json_output {
        output::print_json(&output::json::success(json!({
            "day": key.day.as_str(),
            "meal": key.meal.as_str(),
            "added": output::json::recipe_summary(&recipe),
            "recipe_ids": ids
        })));
    } else {
        println!("Added {} to {key}", recipe.name);
    }
    Ok(0)
}

fn run_remove(
    config: &Config,
    day: &str,
    meal: &str,
    reference: &str,
    json_output: bool,
) -> Result<i32, MealplanError> {
    let key = SlotKey::parse(day, meal)?;
    let conn = connection::open_db(config)?;
    let mut planner = WeeklyPlanner::load(SqlitePlanStore::new(&conn))?;

    // A deleted recipe can still sit in the slot, so an exact id is accepted
    // without resolving it against the recipe table.
    let recipe_id = if planner.get_slot(key.day, key.meal).iter().any(|id| id == reference) {
        reference.to_string()
    } else {
        recipe_repo::resolve_recipe(&conn, reference)?.id
    };

    let ids = match planner.remove_recipe_from_slot(key.day, key.meal, &recipe_id)? {
        RemoveOutcome::Removed(ids) => ids,
        RemoveOutcome::NotAssigned => {
            return Err(MealplanError::validation(format!(
                "Recipe {reference} is not assigned to {key}"
            )));
        }
    };

    if json_output {
        output::print_json(&output::json::success(json!({
            "day": key.day.as_str(),
            "meal": key.meal.as_str(),
            "removed": recipe_id,
            "recipe_ids": ids
        })));
    } else {
        println!("Removed {reference} from {key}");
    }
    Ok(0)
}

fn run_eligible(config: &Config, meal: &str, json_output: bool) -> Result<i32, MealplanError> {
    let meal: MealSlot = meal.parse()?;
    let conn = connection::open_db(config)?;
    let recipes = SqliteRecipeStore::new(&conn).list_recipes()?;
    let eligible: Vec<Recipe> = planner::eligible_recipes_for_slot(meal, &recipes).cloned().collect();

    if json_output {
        let recipes_json: Vec<_> = eligible.iter().map(output::json::recipe_summary).collect();
        output::print_json(&output::json::success(json!({
            "meal": meal.as_str(),
            "recipes": recipes_json
        })));
    } else {
        println!("Recipes for {meal}:");
        output::text::print_recipe_list(&eligible);
    }
    Ok(0)
}

fn run_clear(config: &Config, json_output: bool) -> Result<i32, MealplanError> {
    let conn = connection::open_db(config)?;
    let removed = plan_repo::clear_plan(&conn)?;

    if json_output {
        output::print_json(&output::json::success(json!({ "cleared": removed })));
    } else {
        println!("Cleared the weekly plan ({removed} slot(s))");
    }
    Ok(0)
}

fn check_eligible(recipe: &Recipe, meal: MealSlot) -> Result<(), MealplanError> {
    if planner::is_eligible(meal, recipe) {
        return Ok(());
    }
    Err(MealplanError::ineligible_recipe(
        &recipe.name,
        recipe.meal_type.as_str(),
        meal.as_str(),
    ))
}
