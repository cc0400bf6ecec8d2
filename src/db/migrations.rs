use rusqlite::Connection;

use crate::error::MealplanError;

pub fn run_migrations(conn: &Connection) -> Result<(), MealplanError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS recipes (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            meal_type TEXT NOT NULL
                CHECK (meal_type IN ('pre_breakfast', 'breakfast', 'lunch', 'dinner',
                                     'snack', 'weekend_prep', 'sides')),
            is_vegetarian INTEGER NOT NULL DEFAULT 1,
            serves INTEGER NOT NULL DEFAULT 1 CHECK (serves > 0),
            ingredients TEXT NOT NULL DEFAULT '[]',
            instructions TEXT NOT NULL DEFAULT '',
            energy REAL,
            protein REAL,
            carbs REAL,
            fat REAL,
            fiber REAL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- recipe_ids is a JSON array. No foreign key: a deleted recipe leaves
        -- a dangling id behind, which readers skip.
        CREATE TABLE IF NOT EXISTS plan_slots (
            day TEXT NOT NULL,
            meal TEXT NOT NULL,
            recipe_ids TEXT NOT NULL DEFAULT '[]',
            updated_at TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (day, meal)
        );

        CREATE INDEX IF NOT EXISTS idx_recipes_meal_type ON recipes(meal_type);
        CREATE INDEX IF NOT EXISTS idx_recipes_name ON recipes(name);
        ",
    )?;
    Ok(())
}
