use rusqlite::Connection;

use crate::db::{plan_repo, recipe_repo};
use crate::error::MealplanError;
use crate::models::{Day, MealSlot, Recipe, RecipeId, WeeklyPlan};
use crate::planner::{PlanPersistence, RecipeStore};

/// Recipe store backed by the `recipes` table.
pub struct SqliteRecipeStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteRecipeStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl RecipeStore for SqliteRecipeStore<'_> {
    fn list_recipes(&self) -> Result<Vec<Recipe>, MealplanError> {
        recipe_repo::list_recipes(self.conn)
    }

    fn get_recipe(&self, id: &str) -> Result<Option<Recipe>, MealplanError> {
        recipe_repo::find_recipe(self.conn, id)
    }
}

/// Plan persistence backed by the `plan_slots` table.
pub struct SqlitePlanStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqlitePlanStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl PlanPersistence for SqlitePlanStore<'_> {
    fn load_plan(&self) -> Result<WeeklyPlan, MealplanError> {
        plan_repo::load_plan(self.conn)
    }

    fn save_plan_slot(
        &self,
        day: Day,
        meal: MealSlot,
        recipe_ids: &[RecipeId],
    ) -> Result<(), MealplanError> {
        plan_repo::save_slot(self.conn, day, meal, recipe_ids)
    }
}
