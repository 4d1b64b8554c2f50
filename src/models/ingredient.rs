use serde::{Deserialize, Serialize};

use crate::models::MacroTotals;

/// Outcome of reconciling an ingredient against reference nutrition data.
///
/// Terminal within one audit cycle: once an ingredient leaves `Unverified`
/// it is not revisited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[default]
    Unverified,
    /// Claimed values were acceptably close to the reference.
    Verified,
    /// Claimed values were replaced with reference values.
    Corrected,
    /// Reference source failed or had no match; claimed values kept.
    LookupFailed,
}

/// A single ingredient within a meal, with claimed macro values.
///
/// Macro fields are mutable only during reconciliation, where they may be
/// overwritten with reference-corrected values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,

    pub amount: f64,

    pub unit: String,

    pub calories: f64,

    pub protein_g: f64,

    pub carbs_g: f64,

    pub fats_g: f64,

    #[serde(default)]
    pub status: VerificationStatus,
}

impl Ingredient {
    /// Claimed macros as a summable value.
    pub fn macros(&self) -> MacroTotals {
        MacroTotals::new(self.calories, self.protein_g, self.carbs_g, self.fats_g)
    }

    /// Overwrite the macro fields, keeping name/amount/unit.
    pub fn set_macros(&mut self, macros: MacroTotals) {
        self.calories = macros.calories;
        self.protein_g = macros.protein_g;
        self.carbs_g = macros.carbs_g;
        self.fats_g = macros.fats_g;
    }

    /// Basic validation: positive amount, non-empty name, non-negative macros.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.amount > 0.0 && self.macros().is_valid()
    }

}
