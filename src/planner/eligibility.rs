use crate::models::{MealSlot, Recipe};

/// Recipes that may be offered for `meal`, in input order.
///
/// The iterator is lazy and `Clone`, so callers can walk the candidates more
/// than once without re-filtering up front.
pub fn eligible_recipes_for_slot(
    meal: MealSlot,
    recipes: &[Recipe],
) -> impl Iterator<Item = &Recipe> + Clone + '_ {
    recipes.iter().filter(move |r| meal.accepts(r.meal_type))
}

pub fn is_eligible(meal: MealSlot, recipe: &Recipe) -> bool {
    meal.accepts(recipe.meal_type)
}
