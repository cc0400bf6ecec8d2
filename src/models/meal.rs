use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MealplanError;

/// The tag a recipe carries describing when it is meant to be eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    #[serde(alias = "pre-breakfast")]
    PreBreakfast,
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    #[serde(alias = "weekend prep")]
    WeekendPrep,
    Sides,
}

impl MealType {
    pub const ALL: [MealType; 7] = [
        Self::PreBreakfast,
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
        Self::Snack,
        Self::WeekendPrep,
        Self::Sides,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreBreakfast => "pre_breakfast",
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
            Self::WeekendPrep => "weekend_prep",
            Self::Sides => "sides",
        }
    }
}

impl FromStr for MealType {
    type Err = MealplanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize(s);
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .ok_or_else(|| MealplanError::invalid_meal_type(s))
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the five per-day buckets of the weekly plan, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    #[serde(alias = "pre-breakfast")]
    PreBreakfast,
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 5] = [
        Self::PreBreakfast,
        Self::Breakfast,
        Self::Lunch,
        Self::Snack,
        Self::Dinner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreBreakfast => "pre_breakfast",
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Snack => "snack",
            Self::Dinner => "dinner",
        }
    }

    /// Whether a recipe tagged `meal_type` may be offered for this slot.
    ///
    /// The two reserved slots take only their own type. The generic slots take
    /// everything except the reserved types, regardless of their own name, so a
    /// `dinner` recipe is a valid breakfast candidate.
    pub fn accepts(&self, meal_type: MealType) -> bool {
        match self {
            Self::PreBreakfast => meal_type == MealType::PreBreakfast,
            Self::Snack => meal_type == MealType::Snack,
            Self::Breakfast | Self::Lunch | Self::Dinner => {
                !matches!(meal_type, MealType::PreBreakfast | MealType::Snack)
            }
        }
    }
}

impl FromStr for MealSlot {
    type Err = MealplanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "pre_breakfast" => Ok(Self::PreBreakfast),
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "snack" => Ok(Self::Snack),
            "dinner" => Ok(Self::Dinner),
            _ => Err(MealplanError::invalid_meal_slot(s)),
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Stored data uses "pre-breakfast" and "weekend prep".
fn normalize(s: &str) -> String {
    s.trim()
        .to_ascii_lowercase()
        .replace(['-', ' '], "_")
}
