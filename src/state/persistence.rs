use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::DayPlan;

/// Load a day plan from a JSON file and validate its shape.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<DayPlan> {
    let content = fs::read_to_string(path)?;
    let plan: DayPlan = serde_json::from_str(&content)?;
    plan.validate()?;
    Ok(plan)
}

/// Save a day plan to a JSON file (pretty-printed).
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &DayPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayType, Ingredient, MacroTotals, Meal, NutritionTarget, VerificationStatus};
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn sample_plan() -> DayPlan {
        let ing = |name: &str, cal: f64, p: f64, c: f64, f: f64| Ingredient {
            name: name.to_string(),
            amount: 100.0,
            unit: "g".to_string(),
            calories: cal,
            protein_g: p,
            carbs_g: c,
            fats_g: f,
            status: VerificationStatus::Unverified,
        };

        let meal = |name: &str, ingredients: Vec<Ingredient>| Meal {
            time: "12:00 PM".to_string(),
            name: name.to_string(),
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fats_g: 0.0,
            ingredients,
        };

        DayPlan {
            date: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
            day_type: DayType::Training,
            total_targets: NutritionTarget {
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
            },
            meals: vec![
                meal("Lunch", vec![ing("chicken breast cooked", 247.0, 46.0, 0.0, 5.0)]),
                meal("Pre-workout", vec![ing("white rice cooked", 260.0, 5.4, 56.4, 0.6)]),
                meal("Dinner", vec![ing("salmon fillet raw", 312.0, 30.6, 0.0, 20.1)]),
            ],
            daily_totals: MacroTotals::default(),
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let plan = sample_plan();
        let file = NamedTempFile::new().unwrap();

        save_plan(file.path(), &plan).unwrap();
        let loaded = load_plan(file.path()).unwrap();

        assert_eq!(loaded.date, plan.date);
        assert_eq!(loaded.meals.len(), 3);
        assert_eq!(loaded.meals[0].ingredients[0].name, "chicken breast cooked");
    }

    #[test]
    fn test_load_rejects_wrong_meal_count() {
        let mut plan = sample_plan();
        plan.meals.pop();

        let file = NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&plan).unwrap();
        std::fs::write(file.path(), json).unwrap();

        assert!(load_plan(file.path()).is_err());
    }
}
