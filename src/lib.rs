pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod planner;

pub use error::{ErrorCode, MealplanError};
pub use models::{Day, MealSlot, MealType, Nutrition, NutritionTotal, Recipe, RecipeDraft, RecipeId, SlotKey, WeeklyPlan};
pub use planner::{AddOutcome, RemoveOutcome, WeeklyPlanner};
