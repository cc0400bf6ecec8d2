use serde::{Deserialize, Serialize};

use super::{MealType, Nutrition};

pub type RecipeId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServingUnit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "cup")]
    Cup,
    #[serde(rename = "tbsp")]
    Tablespoon,
    #[serde(rename = "tsp")]
    Teaspoon,
    #[serde(rename = "nos")]
    Count,
}

impl ServingUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Milliliters => "ml",
            Self::Cup => "cup",
            Self::Tablespoon => "tbsp",
            Self::Teaspoon => "tsp",
            Self::Count => "nos",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    pub quantity: f64,
    pub serving_unit: ServingUnit,
}

/// Everything about a recipe that its author supplies; the store adds the id
/// and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub meal_type: MealType,
    #[serde(default = "default_vegetarian")]
    pub is_vegetarian: bool,
    #[serde(default = "default_serves")]
    pub serves: u32,
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
    #[serde(default)]
    pub instructions: String,
    #[serde(flatten)]
    pub nutrition: Nutrition,
}

fn default_vegetarian() -> bool {
    true
}

fn default_serves() -> u32 {
    1
}

impl RecipeDraft {
    pub fn new(name: impl Into<String>, meal_type: MealType) -> Self {
        Self {
            name: name.into(),
            meal_type,
            is_vegetarian: default_vegetarian(),
            serves: default_serves(),
            ingredients: Vec::new(),
            instructions: String::new(),
            nutrition: Nutrition::default(),
        }
    }

    pub fn with_nutrition(mut self, nutrition: Nutrition) -> Self {
        self.nutrition = nutrition;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub meal_type: MealType,
    pub is_vegetarian: bool,
    pub serves: u32,
    pub ingredients: Vec<IngredientLine>,
    pub instructions: String,
    #[serde(flatten)]
    pub nutrition: Nutrition,
    pub created_at: String,
    pub updated_at: String,
}
