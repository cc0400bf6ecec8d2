use crate::error::MealplanError;
use crate::models::{Day, MealSlot, NutritionTotal, RecipeId, WeeklyPlan};

use super::{nutrition, PlanPersistence, RecipeLookup};

/// Result of appending a recipe to a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The write went through; holds the slot's new contents.
    Added(Vec<RecipeId>),
    /// The recipe was already in the slot. Nothing was written.
    DuplicateAssignment,
}

/// Result of taking a recipe out of a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Vec<RecipeId>),
    /// The recipe was not in the slot. Nothing was written.
    NotAssigned,
}

/// Owns an in-memory copy of the weekly plan and writes slot changes through
/// `P` before applying them locally.
pub struct WeeklyPlanner<P> {
    persistence: P,
    plan: WeeklyPlan,
}

impl<P: PlanPersistence> WeeklyPlanner<P> {
    pub fn load(persistence: P) -> Result<Self, MealplanError> {
        let plan = persistence.load_plan()?;
        Ok(Self { persistence, plan })
    }

    pub fn plan(&self) -> &WeeklyPlan {
        &self.plan
    }

    pub fn get_slot(&self, day: Day, meal: MealSlot) -> &[RecipeId] {
        self.plan.slot(day, meal)
    }

    /// Replace the slot's contents with `recipe_ids`. An empty list unassigns
    /// the slot. Eligibility is not checked here.
    ///
    /// The local copy changes only after the store acknowledges the write; on
    /// error it still holds the previous value.
    pub fn assign_slot(
        &mut self,
        day: Day,
        meal: MealSlot,
        recipe_ids: Vec<RecipeId>,
    ) -> Result<(), MealplanError> {
        if let Err(e) = self.persistence.save_plan_slot(day, meal, &recipe_ids) {
            tracing::warn!(%day, %meal, error = %e, "slot write failed; keeping previous value");
            return Err(e);
        }
        tracing::info!(%day, %meal, recipes = recipe_ids.len(), "slot assigned");
        self.plan.set_slot(day, meal, recipe_ids);
        Ok(())
    }

    pub fn add_recipe_to_slot(
        &mut self,
        day: Day,
        meal: MealSlot,
        recipe_id: impl Into<RecipeId>,
    ) -> Result<AddOutcome, MealplanError> {
        let recipe_id = recipe_id.into();
        let current = self.get_slot(day, meal);
        if current.contains(&recipe_id) {
            tracing::debug!(%day, %meal, %recipe_id, "recipe already assigned");
            return Ok(AddOutcome::DuplicateAssignment);
        }

        let mut updated = current.to_vec();
        updated.push(recipe_id);
        self.assign_slot(day, meal, updated.clone())?;
        Ok(AddOutcome::Added(updated))
    }

    /// Drops every occurrence of `recipe_id` from the slot.
    pub fn remove_recipe_from_slot(
        &mut self,
        day: Day,
        meal: MealSlot,
        recipe_id: &str,
    ) -> Result<RemoveOutcome, MealplanError> {
        let current = self.get_slot(day, meal);
        if !current.iter().any(|id| id == recipe_id) {
            return Ok(RemoveOutcome::NotAssigned);
        }

        let updated: Vec<RecipeId> = current.iter().filter(|id| *id != recipe_id).cloned().collect();
        self.assign_slot(day, meal, updated.clone())?;
        Ok(RemoveOutcome::Removed(updated))
    }

    pub fn slot_nutrition<L>(&self, day: Day, meal: MealSlot, lookup: &L) -> NutritionTotal
    where
        L: RecipeLookup + ?Sized,
    {
        nutrition::slot_nutrition(&self.plan, day, meal, lookup)
    }

    pub fn day_nutrition<L>(&self, day: Day, lookup: &L) -> NutritionTotal
    where
        L: RecipeLookup + ?Sized,
    {
        nutrition::day_nutrition(&self.plan, day, lookup)
    }

    pub fn week_nutrition<L>(&self, lookup: &L) -> Vec<(Day, NutritionTotal)>
    where
        L: RecipeLookup + ?Sized,
    {
        nutrition::week_nutrition(&self.plan, lookup)
    }
}
