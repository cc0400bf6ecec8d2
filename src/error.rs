use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotInitialized,
    InvalidKey,
    RecipeNotFound,
    AmbiguousRef,
    DuplicateAssignment,
    IneligibleRecipe,
    ValidationError,
    PersistenceFailure,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::InvalidKey => "INVALID_KEY",
            Self::RecipeNotFound => "RECIPE_NOT_FOUND",
            Self::AmbiguousRef => "AMBIGUOUS_REF",
            Self::DuplicateAssignment => "DUPLICATE_ASSIGNMENT",
            Self::IneligibleRecipe => "INELIGIBLE_RECIPE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::PersistenceFailure => "PERSISTENCE_FAILURE",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct MealplanError {
    pub code: ErrorCode,
    pub message: String,
}

impl MealplanError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_initialized() -> Self {
        Self::new(
            ErrorCode::NotInitialized,
            "mealplan is not initialized. Run `mealplan init` first.",
        )
    }

    pub fn invalid_day(name: &str) -> Self {
        Self::new(
            ErrorCode::InvalidKey,
            format!("Invalid day '{name}'. Expected Monday..Sunday"),
        )
    }

    pub fn invalid_meal_slot(name: &str) -> Self {
        Self::new(
            ErrorCode::InvalidKey,
            format!(
                "Invalid meal slot '{name}'. Expected one of: pre_breakfast, breakfast, lunch, snack, dinner"
            ),
        )
    }

    pub fn invalid_meal_type(name: &str) -> Self {
        Self::new(
            ErrorCode::InvalidKey,
            format!(
                "Invalid meal type '{name}'. Expected one of: pre_breakfast, breakfast, lunch, dinner, snack, weekend_prep, sides"
            ),
        )
    }

    pub fn recipe_not_found(reference: &str) -> Self {
        Self::new(
            ErrorCode::RecipeNotFound,
            format!("Recipe not found: {reference}"),
        )
    }

    pub fn ambiguous_ref(reference: &str, candidates: &[String]) -> Self {
        Self::new(
            ErrorCode::AmbiguousRef,
            format!(
                "Ambiguous reference '{}'. Candidates: {}",
                reference,
                candidates.join(", ")
            ),
        )
    }

    pub fn duplicate_assignment(recipe: &str, slot: &str) -> Self {
        Self::new(
            ErrorCode::DuplicateAssignment,
            format!("Recipe {recipe} is already assigned to {slot}"),
        )
    }

    pub fn ineligible_recipe(recipe: &str, meal_type: &str, slot: &str) -> Self {
        Self::new(
            ErrorCode::IneligibleRecipe,
            format!("Recipe {recipe} ({meal_type}) cannot be planned for the {slot} slot"),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PersistenceFailure, message)
    }
}

impl From<rusqlite::Error> for MealplanError {
    fn from(e: rusqlite::Error) -> Self {
        Self::persistence(e.to_string())
    }
}

impl From<serde_json::Error> for MealplanError {
    fn from(e: serde_json::Error) -> Self {
        Self::persistence(format!("Malformed stored JSON: {e}"))
    }
}
