use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};
use crate::models::{Ingredient, MacroTotals, NutritionTarget};
use crate::planner::constants::MEALS_PER_DAY;

/// Whether a day carries the training or rest calorie surplus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Training,
    Rest,
}

impl DayType {
    pub fn is_training(self) -> bool {
        matches!(self, DayType::Training)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Training => write!(f, "training day"),
            DayType::Rest => write!(f, "rest day"),
        }
    }
}

/// One meal with derived macro sums and its ingredient list.
///
/// The macro fields mirror the sum of the ingredients; they are overwritten
/// by re-aggregation after every reconciliation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub time: String,

    pub name: String,

    pub calories: f64,

    pub protein_g: f64,

    pub carbs_g: f64,

    pub fats_g: f64,

    pub ingredients: Vec<Ingredient>,
}

impl Meal {
    /// The meal's current (derived) macro totals.
    pub fn macros(&self) -> MacroTotals {
        MacroTotals::new(self.calories, self.protein_g, self.carbs_g, self.fats_g)
    }

    /// Overwrite the derived macro fields.
    pub fn set_totals(&mut self, totals: MacroTotals) {
        self.calories = totals.calories;
        self.protein_g = totals.protein_g;
        self.carbs_g = totals.carbs_g;
        self.fats_g = totals.fats_g;
    }
}

/// A full day of meals with targets and derived daily totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,

    pub day_type: DayType,

    pub total_targets: NutritionTarget,

    pub meals: Vec<Meal>,

    #[serde(default)]
    pub daily_totals: MacroTotals,
}

impl DayPlan {
    /// Boundary validation: exactly three meals, every ingredient well-formed.
    ///
    /// Rejects malformed shapes on load rather than letting them propagate.
    pub fn validate(&self) -> Result<()> {
        if self.meals.len() != MEALS_PER_DAY {
            return Err(AuditError::InvalidPlan(format!(
                "expected {} meals, found {}",
                MEALS_PER_DAY,
                self.meals.len()
            )));
        }

        for meal in &self.meals {
            if meal.ingredients.is_empty() {
                return Err(AuditError::InvalidPlan(format!(
                    "meal '{}' has no ingredients",
                    meal.name
                )));
            }
            for ing in &meal.ingredients {
                if !ing.is_valid() {
                    return Err(AuditError::InvalidPlan(format!(
                        "invalid ingredient '{}' in meal '{}'",
                        ing.name, meal.name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Iterate all ingredients across all meals, mutably.
    pub fn ingredients_mut(&mut self) -> impl Iterator<Item = &mut Ingredient> {
        self.meals.iter_mut().flat_map(|m| m.ingredients.iter_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VerificationStatus;

    fn sample_ingredient(name: &str, cal: f64, p: f64, c: f64, f: f64) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            amount: 100.0,
            unit: "g".to_string(),
            calories: cal,
            protein_g: p,
            carbs_g: c,
            fats_g: f,
            status: VerificationStatus::Unverified,
        }
    }

    fn sample_meal(name: &str) -> Meal {
        Meal {
            time: "12:00 PM".to_string(),
            name: name.to_string(),
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fats_g: 0.0,
            ingredients: vec![sample_ingredient("Rice", 130.0, 2.7, 28.2, 0.3)],
        }
    }

    fn sample_target() -> NutritionTarget {
        NutritionTarget {
            date: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            is_training_day: true,
            body_weight: 175.0,
            maintenance_calories: 2625,
            total_calories: 3125,
            protein_g: 175,
            carbs_g: 411,
            fats_g: 87,
            calorie_surplus: 500,
            carbs_clamped: false,
        }
    }

    fn sample_plan(meal_count: usize) -> DayPlan {
        DayPlan {
            date: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            day_type: DayType::Training,
            total_targets: sample_target(),
            meals: (0..meal_count).map(|i| sample_meal(&format!("Meal {}", i + 1))).collect(),
            daily_totals: MacroTotals::default(),
        }
    }

    #[test]
    fn test_validate_requires_three_meals() {
        assert!(sample_plan(3).validate().is_ok());
        assert!(sample_plan(2).validate().is_err());
        assert!(sample_plan(4).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_meal() {
        let mut plan = sample_plan(3);
        plan.meals[1].ingredients.clear();
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_ingredient() {
        let mut plan = sample_plan(3);
        plan.meals[0].ingredients[0].amount = -1.0;
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_day_type_serde() {
        assert_eq!(serde_json::to_string(&DayType::Training).unwrap(), "\"training\"");
        assert_eq!(serde_json::from_str::<DayType>("\"rest\"").unwrap(), DayType::Rest);
    }
}
