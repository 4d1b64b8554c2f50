use serde::Serialize;

use crate::models::MacroTotals;
use crate::planner::constants::DEFAULT_TOLERANCE_PCT;

/// Per-macro accuracy tolerance bands, in percent deviation from target.
#[derive(Debug, Clone)]
pub struct TolerancePolicy {
    pub calories_pct: f64,
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fats_pct: f64,
}

impl TolerancePolicy {
    /// The same band for all four macros.
    pub fn uniform(pct: f64) -> Self {
        Self {
            calories_pct: pct,
            protein_pct: pct,
            carbs_pct: pct,
            fats_pct: pct,
        }
    }
}

impl Default for TolerancePolicy {
    fn default() -> Self {
        Self::uniform(DEFAULT_TOLERANCE_PCT)
    }
}

/// Accuracy of one macro: actual vs target and whether it passed.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MacroAccuracy {
    pub actual: f64,
    pub target: f64,
    pub accuracy_pct: f64,
    pub within_tolerance: bool,
}

/// Comparison of aggregated actuals against targets.
///
/// Ephemeral and always produced: an out-of-tolerance plan is data for the
/// caller to act on, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct AccuracyReport {
    pub calories: MacroAccuracy,
    pub protein_g: MacroAccuracy,
    pub carbs_g: MacroAccuracy,
    pub fats_g: MacroAccuracy,
    pub within_tolerance: bool,
}

impl AccuracyReport {
    /// Per-macro entries in a fixed order, for display.
    pub fn entries(&self) -> [(&'static str, &MacroAccuracy); 4] {
        [
            ("calories", &self.calories),
            ("protein_g", &self.protein_g),
            ("carbs_g", &self.carbs_g),
            ("fats_g", &self.fats_g),
        ]
    }

    /// Human-readable descriptions of each failing macro.
    pub fn issues(&self) -> Vec<String> {
        self.entries()
            .iter()
            .filter(|(_, m)| !m.within_tolerance)
            .map(|(key, m)| {
                format!(
                    "{}: {:.0} ({:.1}% of target {:.0})",
                    key, m.actual, m.accuracy_pct, m.target
                )
            })
            .collect()
    }
}

/// Compare actual macro totals against targets within tolerance bands.
///
/// Accuracy is actual/target as a percentage; a zero target yields 0%
/// accuracy rather than dividing by zero. The overall verdict passes only
/// when every macro passes.
pub fn validate(
    actual: &MacroTotals,
    target: &MacroTotals,
    policy: &TolerancePolicy,
) -> AccuracyReport {
    let calories = check_macro(actual.calories, target.calories, policy.calories_pct);
    let protein_g = check_macro(actual.protein_g, target.protein_g, policy.protein_pct);
    let carbs_g = check_macro(actual.carbs_g, target.carbs_g, policy.carbs_pct);
    let fats_g = check_macro(actual.fats_g, target.fats_g, policy.fats_pct);

    let within_tolerance = calories.within_tolerance
        && protein_g.within_tolerance
        && carbs_g.within_tolerance
        && fats_g.within_tolerance;

    AccuracyReport {
        calories,
        protein_g,
        carbs_g,
        fats_g,
        within_tolerance,
    }
}

fn check_macro(actual: f64, target: f64, tolerance_pct: f64) -> MacroAccuracy {
    let accuracy_pct = if target > 0.0 {
        actual / target * 100.0
    } else {
        0.0
    };

    MacroAccuracy {
        actual,
        target,
        accuracy_pct,
        within_tolerance: (100.0 - accuracy_pct).abs() <= tolerance_pct,
    }
}
