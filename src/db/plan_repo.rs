use rusqlite::{params, Connection};
use serde::Deserialize;

use crate::error::MealplanError;
use crate::models::{Day, MealSlot, RecipeId, WeeklyPlan};

/// A slot value as found in storage. Older rows hold a bare id (sometimes
/// numeric) or null instead of a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredSlot {
    List(Vec<StoredId>),
    Single(StoredId),
    Empty,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredId {
    Text(String),
    Number(i64),
}

impl From<StoredId> for RecipeId {
    fn from(id: StoredId) -> Self {
        match id {
            StoredId::Text(s) => s,
            StoredId::Number(n) => n.to_string(),
        }
    }
}

impl StoredSlot {
    fn into_ids(self) -> Vec<RecipeId> {
        match self {
            Self::List(ids) => ids.into_iter().map(RecipeId::from).collect(),
            Self::Single(id) => vec![id.into()],
            Self::Empty => Vec::new(),
        }
    }
}

/// Read the whole plan. Rows naming an unknown day or meal, or holding
/// unreadable JSON, are skipped with a warning. When a slot has both a
/// canonical row and an older spelling, the canonical row wins.
pub fn load_plan(conn: &Connection) -> Result<WeeklyPlan, MealplanError> {
    let mut stmt = conn.prepare("SELECT day, meal, recipe_ids FROM plan_slots ORDER BY day, meal")?;
    let mut rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    // Stable sort: older spellings first, so canonical rows are applied last.
    rows.sort_by_key(|(day, meal, _)| is_canonical(day, meal));

    let mut plan = WeeklyPlan::new();
    for (day, meal, raw) in rows {
        let Some((d, m)) = parse_key(&day, &meal) else {
            tracing::warn!(%day, %meal, "skipping plan row with unknown day or meal");
            continue;
        };
        match serde_json::from_str::<StoredSlot>(&raw) {
            Ok(stored) => plan.set_slot(d, m, stored.into_ids()),
            Err(e) => tracing::warn!(%day, %meal, error = %e, "skipping unreadable plan row"),
        }
    }
    tracing::debug!("weekly plan loaded");
    Ok(plan)
}

/// Upsert one slot with the given ids (always stored as a JSON list). Rows
/// holding the same slot under an older spelling are removed in the same
/// transaction.
pub fn save_slot(
    conn: &Connection,
    day: Day,
    meal: MealSlot,
    recipe_ids: &[RecipeId],
) -> Result<(), MealplanError> {
    let encoded = serde_json::to_string(recipe_ids)?;
    let tx = conn.unchecked_transaction()?;

    let stale: Vec<(String, String)> = {
        let mut stmt = tx.prepare("SELECT day, meal FROM plan_slots")?;
        let keys = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        keys.into_iter()
            .filter(|(d, m)| !is_canonical(d, m) && parse_key(d, m) == Some((day, meal)))
            .collect()
    };
    for (d, m) in &stale {
        tx.execute("DELETE FROM plan_slots WHERE day = ?1 AND meal = ?2", params![d, m])?;
    }
    if !stale.is_empty() {
        tracing::debug!(%day, %meal, removed = stale.len(), "dropped legacy slot rows");
    }

    tx.execute(
        "INSERT INTO plan_slots (day, meal, recipe_ids) VALUES (?1, ?2, ?3)
         ON CONFLICT (day, meal) DO UPDATE SET
             recipe_ids = excluded.recipe_ids,
             updated_at = datetime('now')",
        params![day.as_str(), meal.as_str(), encoded],
    )?;
    tx.commit()?;
    Ok(())
}

fn parse_key(day: &str, meal: &str) -> Option<(Day, MealSlot)> {
    Some((day.parse().ok()?, meal.parse().ok()?))
}

fn is_canonical(day: &str, meal: &str) -> bool {
    parse_key(day, meal).is_some_and(|(d, m)| d.as_str() == day && m.as_str() == meal)
}

/// Remove every slot row. Returns the number of rows removed.
pub fn clear_plan(conn: &Connection) -> Result<usize, MealplanError> {
    let removed = conn.execute("DELETE FROM plan_slots", [])?;
    tracing::info!(removed, "weekly plan cleared");
    Ok(removed)
}
