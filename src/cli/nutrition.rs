use serde_json::json;

use crate::cli::commands::NutritionCommands;
use crate::config::Config;
use crate::db::{connection, SqlitePlanStore, SqliteRecipeStore};
use crate::error::MealplanError;
use crate::models::{Day, MealSlot, NutritionTotal, SlotKey};
use crate::output;
use crate::planner::{self, RecipeLookup, RecipeStore, WeeklyPlanner};

pub fn run(cmd: NutritionCommands, config: &Config, json_output: bool) -> i32 {
    let result = match cmd {
        NutritionCommands::Slot { day, meal } => run_slot(config, &day, &meal, json_output),
        NutritionCommands::Day { day } => run_day(config, day.as_deref(), json_output),
        NutritionCommands::Week => run_week(config, json_output),
    };
    super::finish(result, json_output)
}

fn run_slot(config: &Config, day: &str, meal: &str, json_output: bool) -> Result<i32, MealplanError> {
    let key = SlotKey::parse(day, meal)?;
    let conn = connection::open_db(config)?;
    let planner = WeeklyPlanner::load(SqlitePlanStore::new(&conn))?;
    let lookup = planner::index_recipes(SqliteRecipeStore::new(&conn).list_recipes()?);
    let total = planner.slot_nutrition(key.day, key.meal, &lookup);
    let ids = planner.get_slot(key.day, key.meal);

    if json_output {
        let unresolved: Vec<_> = ids.iter().filter(|id| lookup.find(id).is_none()).collect();
        output::print_json(&output::json::success(json!({
            "day": key.day.as_str(),
            "meal": key.meal.as_str(),
            "recipe_ids": ids,
            "unresolved": unresolved,
            "nutrition": output::json::nutrition_json(&total)
        })));
    } else {
        output::text::print_slot(key.meal, ids, &lookup);
        output::text::print_nutrition_line(&format!("{key}"), &total);
    }
    Ok(0)
}

fn run_day(config: &Config, day: Option<&str>, json_output: bool) -> Result<i32, MealplanError> {
    let day = match day {
        Some(d) => d.parse()?,
        None => Day::today(),
    };
    let conn = connection::open_db(config)?;
    let planner = WeeklyPlanner::load(SqlitePlanStore::new(&conn))?;
    let lookup = planner::index_recipes(SqliteRecipeStore::new(&conn).list_recipes()?);
    let slots: Vec<(MealSlot, NutritionTotal)> = MealSlot::ALL
        .into_iter()
        .map(|meal| (meal, planner.slot_nutrition(day, meal, &lookup)))
        .collect();
    let total = planner.day_nutrition(day, &lookup);

    if json_output {
        let slots_json: Vec<_> = slots
            .iter()
            .map(|(meal, n)| {
                json!({
                    "meal": meal.as_str(),
                    "nutrition": output::json::nutrition_json(n)
                })
            })
            .collect();
        output::print_json(&output::json::success(json!({
            "day": day.as_str(),
            "slots": slots_json,
            "nutrition": output::json::nutrition_json(&total)
        })));
    } else {
        output::text::print_day_header(day);
        for (meal, n) in &slots {
            output::text::print_nutrition_line(&format!("  {meal}"), n);
        }
        output::text::print_nutrition_line("  Total", &total);
    }
    Ok(0)
}

fn run_week(config: &Config, json_output: bool) -> Result<i32, MealplanError> {
    let conn = connection::open_db(config)?;
    let planner = WeeklyPlanner::load(SqlitePlanStore::new(&conn))?;
    let lookup = planner::index_recipes(SqliteRecipeStore::new(&conn).list_recipes()?);
    let week = planner.week_nutrition(&lookup);
    let total: NutritionTotal = week.iter().map(|(_, n)| *n).sum();

    if json_output {
        let days_json: Vec<_> = week
            .iter()
            .map(|(day, n)| {
                json!({
                    "day": day.as_str(),
                    "nutrition": output::json::nutrition_json(n)
                })
            })
            .collect();
        output::print_json(&output::json::success(json!({
            "days": days_json,
            "total": output::json::nutrition_json(&total)
        })));
    } else {
        for (day, n) in &week {
            output::text::print_nutrition_line(day.as_str(), n);
        }
        output::text::print_nutrition_line("Week", &total);
    }
    Ok(0)
}
