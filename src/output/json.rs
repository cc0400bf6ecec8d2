use serde_json::{json, Value};

use crate::error::MealplanError;
use crate::models::{Day, MealSlot, NutritionTotal, Recipe, RecipeId};
use crate::planner::RecipeLookup;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &MealplanError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn recipe_summary(r: &Recipe) -> Value {
    json!({
        "id": r.id,
        "name": r.name,
        "meal_type": r.meal_type.as_str(),
        "is_vegetarian": r.is_vegetarian
    })
}

pub fn recipe_detail(r: &Recipe) -> Value {
    let ingredients: Vec<_> = r
        .ingredients
        .iter()
        .map(|i| {
            json!({
                "name": i.name,
                "quantity": i.quantity,
                "serving_unit": i.serving_unit.as_str()
            })
        })
        .collect();
    json!({
        "id": r.id,
        "name": r.name,
        "meal_type": r.meal_type.as_str(),
        "is_vegetarian": r.is_vegetarian,
        "serves": r.serves,
        "ingredients": ingredients,
        "instructions": r.instructions,
        "energy": r.nutrition.energy,
        "protein": r.nutrition.protein,
        "carbs": r.nutrition.carbs,
        "fat": r.nutrition.fat,
        "fiber": r.nutrition.fiber,
        "created_at": r.created_at,
        "updated_at": r.updated_at
    })
}

pub fn nutrition_json(n: &NutritionTotal) -> Value {
    json!({
        "energy": n.energy,
        "protein": n.protein,
        "carbs": n.carbs,
        "fat": n.fat,
        "fiber": n.fiber
    })
}

/// A slot's ids plus the recipes they resolve to. Ids that no longer resolve
/// are listed under `unresolved`.
pub fn slot_json<L: RecipeLookup + ?Sized>(
    day: Day,
    meal: MealSlot,
    recipe_ids: &[RecipeId],
    lookup: &L,
) -> Value {
    let recipes: Vec<_> = recipe_ids
        .iter()
        .filter_map(|id| lookup.find(id))
        .map(recipe_summary)
        .collect();
    let unresolved: Vec<_> = recipe_ids.iter().filter(|id| lookup.find(id).is_none()).collect();
    json!({
        "day": day.as_str(),
        "meal": meal.as_str(),
        "recipe_ids": recipe_ids,
        "recipes": recipes,
        "unresolved": unresolved
    })
}
