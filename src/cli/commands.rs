use std::path::PathBuf;

use clap::{Parser, Subcommand};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "mealplan",
    version = VERSION,
    about = "Weekly meal planner: recipes, meal slots and nutrition totals",
    after_help = "\
NOTE:
  Data lives in <dir>/.mealplan/mealplan.db, found by walking up from the
  working directory. Override with --data-dir or MEALPLAN_DIR.
  Run `mealplan init` before any other command.

EXIT CODES:
  0  Success
  1  Error (invalid day/meal, unknown recipe, duplicate assignment, DB, etc.)

SLOTS:
  Days: Monday..Sunday. Meals: pre_breakfast, breakfast, lunch, snack, dinner.
  pre_breakfast takes only pre_breakfast recipes; snack takes only snack recipes.
  breakfast/lunch/dinner take any recipe that is neither pre_breakfast nor snack.

LOGGING:
  Set MEALPLAN_LOG (e.g. `debug`) or {\"log\": \"...\"} in .mealplan/config.json.
  Logs go to stderr."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Data directory holding mealplan.db
    #[arg(long, global = true, env = "MEALPLAN_DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the mealplan database
    Init,

    /// Recipe management
    #[command(subcommand)]
    Recipe(RecipeCommands),

    /// Weekly plan: read and edit meal slots
    #[command(subcommand)]
    Plan(PlanCommands),

    /// Nutrition totals from the weekly plan
    #[command(subcommand)]
    Nutrition(NutritionCommands),
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Add a recipe from stdin JSON
    #[command(after_help = "\
STDIN FORMAT:
  {\"name\":\"...\", \"meal_type\":\"lunch\", \"serves\":2, \"is_vegetarian\":true,
   \"ingredients\":[{\"name\":\"Tomato\", \"quantity\":100, \"serving_unit\":\"g\"}],
   \"instructions\":\"...\", \"energy\":250, \"protein\":8, \"carbs\":30, \"fat\":9, \"fiber\":4}

NOTE:
  meal_type: pre_breakfast, breakfast, lunch, dinner, snack, weekend_prep, sides.
  serving_unit: g, ml, cup, tbsp, tsp, nos.
  Nutrition fields are optional; missing ones count as 0 in totals.")]
    Add,
    /// List recipes (ordered by name)
    List {
        /// Only recipes of this meal type
        #[arg(long)]
        meal_type: Option<String>,
    },
    /// Show recipe details
    Show {
        /// Recipe ID, ID prefix, or name
        reference: String,
    },
    /// Replace a recipe's fields from stdin JSON (same format as `add`)
    Update {
        /// Recipe ID, ID prefix, or name
        reference: String,
    },
    /// Delete a recipe. Plan slots keep its id; totals skip it.
    Delete {
        /// Recipe ID, ID prefix, or name
        reference: String,
    },
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the whole week, or one day
    Show {
        #[arg(long)]
        day: Option<String>,
    },
    /// Show the recipes in one slot
    Get { day: String, meal: String },
    /// Replace a slot's recipes (no recipes = clear the slot)
    Set {
        day: String,
        meal: String,
        /// Recipe IDs, ID prefixes, or names, in order
        recipes: Vec<String>,
    },
    /// Append a recipe to a slot
    Add {
        day: String,
        meal: String,
        /// Recipe ID, ID prefix, or name
        recipe: String,
    },
    /// Remove a recipe from a slot
    Remove {
        day: String,
        meal: String,
        /// Recipe ID, ID prefix, or name
        recipe: String,
    },
    /// List recipes that can be planned for a meal slot
    Eligible { meal: String },
    /// Remove every assignment from the plan
    Clear,
}

#[derive(Subcommand)]
pub enum NutritionCommands {
    /// Totals for one slot
    Slot { day: String, meal: String },
    /// Totals for one day (defaults to today)
    Day { day: Option<String> },
    /// Totals for each day of the week
    Week,
}
