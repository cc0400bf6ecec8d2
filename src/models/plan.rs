use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MealplanError;

use super::{Day, MealSlot, RecipeId};

/// A (day, meal slot) address in the weekly plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub day: Day,
    pub meal: MealSlot,
}

impl SlotKey {
    pub fn new(day: Day, meal: MealSlot) -> Self {
        Self { day, meal }
    }

    /// Fails with `INVALID_KEY` when either name is outside its enumeration.
    pub fn parse(day: &str, meal: &str) -> Result<Self, MealplanError> {
        Ok(Self {
            day: day.parse()?,
            meal: meal.parse()?,
        })
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.meal)
    }
}

/// Day → meal slot → ordered recipe ids.
///
/// Pairs that were never assigned are simply absent from the map and read as
/// an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    days: BTreeMap<Day, BTreeMap<MealSlot, Vec<RecipeId>>>,
}

impl WeeklyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, day: Day, meal: MealSlot) -> &[RecipeId] {
        self.days
            .get(&day)
            .and_then(|slots| slots.get(&meal))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn set_slot(&mut self, day: Day, meal: MealSlot, recipe_ids: Vec<RecipeId>) {
        self.days.entry(day).or_default().insert(meal, recipe_ids);
    }

    /// All five slots of `day` in display order, empty ones included.
    pub fn day_slots(&self, day: Day) -> impl Iterator<Item = (MealSlot, &[RecipeId])> + '_ {
        MealSlot::ALL
            .into_iter()
            .map(move |meal| (meal, self.slot(day, meal)))
    }

    /// Every assigned id across the week, repeats included.
    pub fn recipe_ids(&self) -> impl Iterator<Item = &RecipeId> + '_ {
        self.days.values().flat_map(|slots| slots.values().flatten())
    }

    pub fn is_empty(&self) -> bool {
        self.recipe_ids().next().is_none()
    }
}
