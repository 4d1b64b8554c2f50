use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::MacroTotals;

/// Daily calorie and macro targets derived from body weight and day type.
///
/// Always recomputed from its two inputs; never the persisted source of
/// truth. Invariant: total_calories = maintenance_calories + calorie_surplus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionTarget {
    pub date: NaiveDate,

    pub is_training_day: bool,

    pub body_weight: f64,

    pub maintenance_calories: u32,

    pub total_calories: u32,

    pub protein_g: u32,

    pub carbs_g: u32,

    pub fats_g: u32,

    pub calorie_surplus: u32,

    /// True when the carb remainder came out negative and was clamped to
    /// zero. The target is infeasible for this body weight.
    #[serde(default)]
    pub carbs_clamped: bool,
}

impl NutritionTarget {
    /// Targets as a macro map, for comparison against aggregated actuals.
    pub fn totals(&self) -> MacroTotals {
        MacroTotals::new(
            f64::from(self.total_calories),
            f64::from(self.protein_g),
            f64::from(self.carbs_g),
            f64::from(self.fats_g),
        )
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): {} cal (maint {} + {}), P:{}g C:{}g F:{}g",
            self.date,
            if self.is_training_day { "training" } else { "rest" },
            self.total_calories,
            self.maintenance_calories,
            self.calorie_surplus,
            self.protein_g,
            self.carbs_g,
            self.fats_g
        )
    }
}
