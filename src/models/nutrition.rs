use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Per-recipe nutrition as stored. Every field is optional on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub energy: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
}

/// Summed nutrition over a set of recipes. Absent recipe fields count as 0.
/// No rounding or clamping happens here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotal {
    pub energy: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl From<&Nutrition> for NutritionTotal {
    fn from(n: &Nutrition) -> Self {
        Self {
            energy: n.energy.unwrap_or(0.0),
            protein: n.protein.unwrap_or(0.0),
            carbs: n.carbs.unwrap_or(0.0),
            fat: n.fat.unwrap_or(0.0),
            fiber: n.fiber.unwrap_or(0.0),
        }
    }
}

impl Add for NutritionTotal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            energy: self.energy + rhs.energy,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
            fiber: self.fiber + rhs.fiber,
        }
    }
}

impl AddAssign for NutritionTotal {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl AddAssign<&Nutrition> for NutritionTotal {
    fn add_assign(&mut self, rhs: &Nutrition) {
        *self += NutritionTotal::from(rhs);
    }
}

impl Sum for NutritionTotal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
