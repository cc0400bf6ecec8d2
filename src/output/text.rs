use crate::models::{Day, MealSlot, NutritionTotal, Recipe, RecipeId};
use crate::planner::RecipeLookup;

pub fn print_recipe(r: &Recipe) {
    println!("Recipe: {} ({})", r.name, r.id);
    println!("  Meal type: {}", r.meal_type.as_str());
    println!("  Vegetarian: {}", if r.is_vegetarian { "yes" } else { "no" });
    println!("  Serves: {}", r.serves);
    if !r.ingredients.is_empty() {
        println!("  Ingredients:");
        for i in &r.ingredients {
            println!("    - {} {} {}", i.quantity, i.serving_unit.as_str(), i.name);
        }
    }
    if !r.instructions.is_empty() {
        println!("  Instructions:");
        for line in r.instructions.lines() {
            println!("    {line}");
        }
    }
    print_nutrition_line("  Nutrition", &NutritionTotal::from(&r.nutrition));
}

pub fn print_recipe_list(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }
    for r in recipes {
        println!(
            "  {} ({}) [{}]{}",
            r.name,
            short_id(&r.id),
            r.meal_type.as_str(),
            if r.is_vegetarian { " veg" } else { "" }
        );
    }
}

pub fn print_slot<L: RecipeLookup + ?Sized>(meal: MealSlot, recipe_ids: &[RecipeId], lookup: &L) {
    if recipe_ids.is_empty() {
        println!("  {:<14} -", meal.as_str());
        return;
    }
    let names: Vec<String> = recipe_ids
        .iter()
        .map(|id| match lookup.find(id) {
            Some(r) => r.name.clone(),
            None => format!("<missing {}>", short_id(id)),
        })
        .collect();
    println!("  {:<14} {}", meal.as_str(), names.join(", "));
}

pub fn print_day_header(day: Day) {
    println!("{day}");
}

pub fn print_nutrition_line(label: &str, n: &NutritionTotal) {
    println!(
        "{label}: {:.1} kcal, protein {:.1} g, carbs {:.1} g, fat {:.1} g, fiber {:.1} g",
        n.energy, n.protein, n.carbs, n.fat, n.fiber
    );
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
