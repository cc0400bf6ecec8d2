//! Contracts for the collaborators the planner reads from and writes through.

use std::collections::HashMap;

use crate::error::MealplanError;
use crate::models::{Day, MealSlot, Recipe, RecipeId, WeeklyPlan};

/// Read-only access to recipes.
pub trait RecipeStore {
    fn list_recipes(&self) -> Result<Vec<Recipe>, MealplanError>;

    /// `Ok(None)` when no recipe has this id.
    fn get_recipe(&self, id: &str) -> Result<Option<Recipe>, MealplanError>;
}

/// Durable storage of the weekly plan.
pub trait PlanPersistence {
    fn load_plan(&self) -> Result<WeeklyPlan, MealplanError>;

    /// `Ok(())` acknowledges the write. Any error means nothing was stored.
    fn save_plan_slot(
        &self,
        day: Day,
        meal: MealSlot,
        recipe_ids: &[RecipeId],
    ) -> Result<(), MealplanError>;
}

impl<T: PlanPersistence + ?Sized> PlanPersistence for &T {
    fn load_plan(&self) -> Result<WeeklyPlan, MealplanError> {
        (**self).load_plan()
    }

    fn save_plan_slot(
        &self,
        day: Day,
        meal: MealSlot,
        recipe_ids: &[RecipeId],
    ) -> Result<(), MealplanError> {
        (**self).save_plan_slot(day, meal, recipe_ids)
    }
}

/// Resolves a recipe id for nutrition sums. `None` marks a dangling id.
pub trait RecipeLookup {
    fn find(&self, id: &str) -> Option<&Recipe>;
}

impl RecipeLookup for [Recipe] {
    fn find(&self, id: &str) -> Option<&Recipe> {
        self.iter().find(|r| r.id == id)
    }
}

impl RecipeLookup for Vec<Recipe> {
    fn find(&self, id: &str) -> Option<&Recipe> {
        RecipeLookup::find(self.as_slice(), id)
    }
}

impl RecipeLookup for HashMap<RecipeId, Recipe> {
    fn find(&self, id: &str) -> Option<&Recipe> {
        self.get(id)
    }
}

/// Key recipes by id for repeated lookups.
pub fn index_recipes(recipes: impl IntoIterator<Item = Recipe>) -> HashMap<RecipeId, Recipe> {
    recipes.into_iter().map(|r| (r.id.clone(), r)).collect()
}
