use std::io::{self, Read};

use serde_json::json;

use crate::cli::commands::RecipeCommands;
use crate::config::Config;
use crate::db::{connection, recipe_repo};
use crate::error::MealplanError;
use crate::models::{MealType, RecipeDraft};
use crate::output;

pub fn run(cmd: RecipeCommands, config: &Config, json_output: bool) -> i32 {
    let result = match cmd {
        RecipeCommands::Add => run_add(config, json_output),
        RecipeCommands::List { meal_type } => run_list(config, meal_type.as_deref(), json_output),
        RecipeCommands::Show { reference } => run_show(config, &reference, json_output),
        RecipeCommands::Update { reference } => run_update(config, &reference, json_output),
        RecipeCommands::Delete { reference } => run_delete(config, &reference, json_output),
    };
    super::finish(result, json_output)
}

fn run_add(config: &Config, json_output: bool) -> Result<i32, MealplanError> {
    let draft = read_draft()?;
    let conn = connection::open_db(config)?;
    let id = ulid::Ulid::new().to_string();
    let recipe = recipe_repo::create_recipe(&conn, &id, &draft)?;

    if json_output {
        output::print_json(&output::json::success(json!({
            "recipe": output::json::recipe_detail(&recipe)
        })));
    } else {
        println!("Added recipe: {} ({})", recipe.name, recipe.id);
    }
    Ok(0)
}

fn run_list(config: &Config, meal_type: Option<&str>, json_output: bool) -> Result<i32, MealplanError> {
    let meal_type = meal_type.map(str::parse::<MealType>).transpose()?;
    let conn = connection::open_db(config)?;
    let recipes = match meal_type {
        Some(t) => recipe_repo::list_recipes_by_meal_type(&conn, t)?,
        None => recipe_repo::list_recipes(&conn)?,
    };

    if json_output {
        let recipes_json: Vec<_> = recipes.iter().map(output::json::recipe_summary).collect();
        output::print_json(&output::json::success(json!({ "recipes": recipes_json })));
    } else {
        output::text::print_recipe_list(&recipes);
    }
    Ok(0)
}

fn run_show(config: &Config, reference: &str, json_output: bool) -> Result<i32, MealplanError> {
    let conn = connection::open_db(config)?;
    let recipe = recipe_repo::resolve_recipe(&conn, reference)?;

    if json_output {
        output::print_json(&output::json::success(json!({
            "recipe": output::json::recipe_detail(&recipe)
        })));
    } else {
        output::text::print_recipe(&recipe);
    }
    Ok(0)
}

fn run_update(config: &Config, reference: &str, json_output: bool) -> Result<i32, MealplanError> {
    let draft = read_draft()?;
    let conn = connection::open_db(config)?;
    let existing = recipe_repo::resolve_recipe(&conn, reference)?;
    let recipe = recipe_repo::update_recipe(&conn, &existing.id, &draft)?;

    if json_output {
        output::print_json(&output::json::success(json!({
            "recipe": output::json::recipe_detail(&recipe)
        })));
    } else {
        println!("Updated recipe: {} ({})", recipe.name, recipe.id);
    }
    Ok(0)
}

fn run_delete(config: &Config, reference: &str, json_output: bool) -> Result<i32, MealplanError> {
    let conn = connection::open_db(config)?;
    let recipe = recipe_repo::resolve_recipe(&conn, reference)?;
    recipe_repo::delete_recipe(&conn, &recipe.id)?;

    if json_output {
        output::print_json(&output::json::success(json!({
            "deleted": { "id": recipe.id, "name": recipe.name }
        })));
    } else {
        println!("Deleted recipe: {} ({})", recipe.name, recipe.id);
    }
    Ok(0)
}

fn read_draft() -> Result<RecipeDraft, MealplanError> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| MealplanError::validation(e.to_string()))?;

    let draft: RecipeDraft =
        serde_json::from_str(&input).map_err(|e| MealplanError::validation(format!("Invalid JSON: {e}")))?;
    validate_draft(&draft)?;
    Ok(draft)
}

fn validate_draft(draft: &RecipeDraft) -> Result<(), MealplanError> {
    if draft.name.trim().is_empty() {
        return Err(MealplanError::validation("Recipe name is required"));
    }
    if draft.serves == 0 {
        return Err(MealplanError::validation("serves must be a positive integer"));
    }
    for i in &draft.ingredients {
        if i.name.trim().is_empty() {
            return Err(MealplanError::validation("Ingredient name is required"));
        }
        if !i.quantity.is_finite() || i.quantity < 0.0 {
            return Err(MealplanError::validation(format!(
                "Ingredient '{}' has an invalid quantity: {}",
                i.name, i.quantity
            )));
        }
    }
    let n = &draft.nutrition;
    for (field, value) in [
        ("energy", n.energy),
        ("protein", n.protein),
        ("carbs", n.carbs),
        ("fat", n.fat),
        ("fiber", n.fiber),
    ] {
        if value.is_some_and(|v| !v.is_finite()) {
            return Err(MealplanError::validation(format!("{field} must be a finite number")));
        }
    }
    Ok(())
}
