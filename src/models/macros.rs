use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// The four tracked macronutrient values, in kcal and grams.
///
/// Kept as f64 end to end; rounding happens only at display time so that
/// summing across meals does not compound rounding error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
}

impl MacroTotals {
    pub fn new(calories: f64, protein_g: f64, carbs_g: f64, fats_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fats_g,
        }
    }

    /// All four values non-negative.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0 && self.protein_g >= 0.0 && self.carbs_g >= 0.0 && self.fats_g >= 0.0
    }

    /// Values as (key, value) pairs in a fixed order, for iteration.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("calories", self.calories),
            ("protein_g", self.protein_g),
            ("carbs_g", self.carbs_g),
            ("fats_g", self.fats_g),
        ]
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{:.0} cal, P:{:.1}g C:{:.1}g F:{:.1}g",
            self.calories, self.protein_g, self.carbs_g, self.fats_g
        )
    }
}

impl Add for MacroTotals {
    type Output = MacroTotals;

    fn add(self, rhs: MacroTotals) -> MacroTotals {
        MacroTotals {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fats_g: self.fats_g + rhs.fats_g,
        }
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: MacroTotals) {
        *self = *self + rhs;
    }
}

impl Sum for MacroTotals {
    fn sum<I: Iterator<Item = MacroTotals>>(iter: I) -> MacroTotals {
        iter.fold(MacroTotals::default(), Add::add)
    }
}
