use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::MealplanError;
use crate::models::{MealType, Nutrition, Recipe, RecipeDraft};

const RECIPE_COLUMNS: &str = "id, name, meal_type, is_vegetarian, serves, ingredients, instructions,
     energy, protein, carbs, fat, fiber, created_at, updated_at";

pub fn create_recipe(conn: &Connection, id: &str, draft: &RecipeDraft) -> Result<Recipe, MealplanError> {
    let ingredients = serde_json::to_string(&draft.ingredients)?;
    let n = &draft.nutrition;
    conn.execute(
        "INSERT INTO recipes (id, name, meal_type, is_vegetarian, serves, ingredients, instructions,
                              energy, protein, carbs, fat, fiber)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            id,
            draft.name,
            draft.meal_type.as_str(),
            draft.is_vegetarian,
            draft.serves,
            ingredients,
            draft.instructions,
            n.energy,
            n.protein,
            n.carbs,
            n.fat,
            n.fiber
        ],
    )?;
    tracing::info!(recipe_id = id, name = %draft.name, "recipe created");
    get_recipe_by_id(conn, id)
}

/// Replace every author-supplied field of an existing recipe.
pub fn update_recipe(conn: &Connection, id: &str, draft: &RecipeDraft) -> Result<Recipe, MealplanError> {
    let ingredients = serde_json::to_string(&draft.ingredients)?;
    let n = &draft.nutrition;
    let changed = conn.execute(
        "UPDATE recipes SET name = ?1, meal_type = ?2, is_vegetarian = ?3, serves = ?4,
                ingredients = ?5, instructions = ?6,
                energy = ?7, protein = ?8, carbs = ?9, fat = ?10, fiber = ?11,
                updated_at = datetime('now')
         WHERE id = ?12",
        params![
            draft.name,
            draft.meal_type.as_str(),
            draft.is_vegetarian,
            draft.serves,
            ingredients,
            draft.instructions,
            n.energy,
            n.protein,
            n.carbs,
            n.fat,
            n.fiber,
            id
        ],
    )?;
    if changed == 0 {
        return Err(MealplanError::recipe_not_found(id));
    }
    tracing::info!(recipe_id = id, "recipe updated");
    get_recipe_by_id(conn, id)
}

pub fn get_recipe_by_id(conn: &Connection, id: &str) -> Result<Recipe, MealplanError> {
    find_recipe(conn, id)?.ok_or_else(|| MealplanError::recipe_not_found(id))
}

pub fn find_recipe(conn: &Connection, id: &str) -> Result<Option<Recipe>, MealplanError> {
    let recipe = conn
        .query_row(
            &format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = ?1"),
            params![id],
            row_to_recipe,
        )
        .optional()?;
    Ok(recipe)
}

/// All recipes, ordered by name.
pub fn list_recipes(conn: &Connection) -> Result<Vec<Recipe>, MealplanError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY name COLLATE NOCASE ASC, id ASC"
    ))?;
    let recipes = stmt
        .query_map([], row_to_recipe)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(recipes)
}

pub fn list_recipes_by_meal_type(conn: &Connection, meal_type: MealType) -> Result<Vec<Recipe>, MealplanError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes WHERE meal_type = ?1
         ORDER BY name COLLATE NOCASE ASC, id ASC"
    ))?;
    let recipes = stmt
        .query_map(params![meal_type.as_str()], row_to_recipe)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(recipes)
}

/// Resolve a recipe reference: exact ID → ID prefix → name partial match.
pub fn resolve_recipe(conn: &Connection, reference: &str) -> Result<Recipe, MealplanError> {
    // 1. Exact ID match
    if let Some(recipe) = find_recipe(conn, reference)? {
        return Ok(recipe);
    }

    // 2. ID prefix match
    let prefix = format!("{}%", escape_like(&reference.to_ascii_uppercase()));
    let mut recipes = query_recipes(
        conn,
        &format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id LIKE ?1 ESCAPE '\\'"),
        &prefix,
    )?;
    if recipes.len() > 1 {
        return Err(ambiguous(reference, &recipes));
    }
    if let Some(recipe) = recipes.pop() {
        return Ok(recipe);
    }

    // 3. Name partial match (LIKE is case-insensitive for ASCII)
    let pattern = format!("%{}%", escape_like(reference));
    let mut recipes = query_recipes(
        conn,
        &format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE name LIKE ?1 ESCAPE '\\'"),
        &pattern,
    )?;

    // A unique exact name wins over partial matches ("Oats" vs "Overnight Oats").
    let exact: Vec<usize> = recipes
        .iter()
        .enumerate()
        .filter(|(_, r)| r.name.eq_ignore_ascii_case(reference))
        .map(|(i, _)| i)
        .collect();
    if let [only] = exact[..] {
        return Ok(recipes.swap_remove(only));
    }

    if recipes.len() > 1 {
        return Err(ambiguous(reference, &recipes));
    }
    recipes.pop().ok_or_else(|| MealplanError::recipe_not_found(reference))
}

/// Returns false when no recipe had that id.
pub fn delete_recipe(conn: &Connection, id: &str) -> Result<bool, MealplanError> {
    let deleted = conn.execute("DELETE FROM recipes WHERE id = ?1", params![id])?;
    if deleted > 0 {
        tracing::info!(recipe_id = id, "recipe deleted");
    }
    Ok(deleted > 0)
}

fn query_recipes(conn: &Connection, sql: &str, arg: &str) -> Result<Vec<Recipe>, MealplanError> {
    let mut stmt = conn.prepare(sql)?;
    let recipes = stmt
        .query_map(params![arg], row_to_recipe)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(recipes)
}

/// Make `%`, `_` and `\` match literally in a `LIKE ... ESCAPE '\'` pattern.
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn ambiguous(reference: &str, recipes: &[Recipe]) -> MealplanError {
    let candidates: Vec<String> = recipes.iter().map(|r| format!("{} ({})", r.name, r.id)).collect();
    MealplanError::ambiguous_ref(reference, &candidates)
}

fn row_to_recipe(row: &rusqlite::Row) -> rusqlite::Result<Recipe> {
    let meal_type: String = row.get(2)?;
    let meal_type = meal_type
        .parse::<MealType>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;
    let ingredients: String = row.get(5)?;
    let ingredients = serde_json::from_str(&ingredients)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

    Ok(Recipe {
        id: row.get(0)?,
        name: row.get(1)?,
        meal_type,
        is_vegetarian: row.get(3)?,
        serves: row.get(4)?,
        ingredients,
        instructions: row.get(6)?,
        nutrition: Nutrition {
            energy: row.get(7)?,
            protein: row.get(8)?,
            carbs: row.get(9)?,
            fat: row.get(10)?,
            fiber: row.get(11)?,
        },
        created_at: row.get(12)?,
        updated_at: row.get(13)?,
    })
}
