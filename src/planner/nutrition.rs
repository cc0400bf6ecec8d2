use crate::models::{Day, MealSlot, NutritionTotal, WeeklyPlan};

use super::RecipeLookup;

/// Sum over every id in the slot that resolves. Dangling ids contribute
/// nothing.
pub fn slot_nutrition<L>(plan: &WeeklyPlan, day: Day, meal: MealSlot, lookup: &L) -> NutritionTotal
where
    L: RecipeLookup + ?Sized,
{
    let mut total = NutritionTotal::default();
    for id in plan.slot(day, meal) {
        match lookup.find(id) {
            Some(recipe) => total += &recipe.nutrition,
            None => tracing::debug!(recipe_id = %id, %day, %meal, "skipping dangling recipe reference"),
        }
    }
    total
}

pub fn day_nutrition<L>(plan: &WeeklyPlan, day: Day, lookup: &L) -> NutritionTotal
where
    L: RecipeLookup + ?Sized,
{
    MealSlot::ALL
        .into_iter()
        .map(|meal| slot_nutrition(plan, day, meal, lookup))
        .sum()
}

/// Day totals for Monday through Sunday.
pub fn week_nutrition<L>(plan: &WeeklyPlan, lookup: &L) -> Vec<(Day, NutritionTotal)>
where
    L: RecipeLookup + ?Sized,
{
    Day::ALL
        .into_iter()
        .map(|day| (day, day_nutrition(plan, day, lookup)))
        .collect()
}
