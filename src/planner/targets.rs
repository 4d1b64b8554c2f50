use chrono::NaiveDate;
use tracing::warn;

use crate::error::{AuditError, Result};
use crate::models::NutritionTarget;
use crate::planner::constants::*;

/// Compute daily calorie and macro targets from body weight and day type.
///
/// Pure and deterministic. Maintenance is weight x 15; training days add a
/// 500 calorie surplus, rest days 100. Protein is 1 g per lb, fat takes 25%
/// of calories at 9 kcal/g, and carbs absorb the remainder at 4 kcal/g.
/// Outputs are rounded to the nearest whole calorie/gram.
///
/// Only `body_weight > 0` is enforced here; the plausibility band
/// [MIN_BODY_WEIGHT_LB, MAX_BODY_WEIGHT_LB] is a caller-side check.
pub fn compute_targets(
    body_weight: f64,
    is_training_day: bool,
    date: NaiveDate,
) -> Result<NutritionTarget> {
    if !body_weight.is_finite() || body_weight <= 0.0 {
        return Err(AuditError::InvalidInput(format!(
            "body weight must be positive, got {}",
            body_weight
        )));
    }

    let maintenance = body_weight * MAINTENANCE_CAL_PER_LB;
    let surplus = if is_training_day {
        TRAINING_DAY_SURPLUS
    } else {
        REST_DAY_SURPLUS
    };
    let total_calories = maintenance + surplus;

    let protein_g = body_weight * PROTEIN_G_PER_LB;
    let protein_calories = protein_g * CAL_PER_G_PROTEIN;

    let fats_calories = total_calories * FAT_CALORIE_FRACTION;
    let fats_g = fats_calories / CAL_PER_G_FAT;

    let (carbs_g, carbs_clamped) =
        carb_grams(total_calories, protein_calories, fats_calories);

    if carbs_clamped {
        warn!(
            body_weight,
            "carb remainder negative; clamped to 0 g (infeasible target)"
        );
    }

    Ok(NutritionTarget {
        date,
        is_training_day,
        body_weight,
        maintenance_calories: maintenance.round() as u32,
        total_calories: total_calories.round() as u32,
        protein_g: protein_g.round() as u32,
        carbs_g: carbs_g.round() as u32,
        fats_g: fats_g.round() as u32,
        calorie_surplus: surplus.round() as u32,
        carbs_clamped,
    })
}

/// Carb grams from the calorie remainder after protein and fat.
///
/// A negative remainder (very low body weight with a high protein target)
/// clamps to zero rather than producing a negative gram amount; the flag
/// marks the target as infeasible.
fn carb_grams(total_calories: f64, protein_calories: f64, fats_calories: f64) -> (f64, bool) {
    let carbs_calories = total_calories - protein_calories - fats_calories;
    if carbs_calories < 0.0 {
        (0.0, true)
    } else {
        (carbs_calories / CAL_PER_G_CARBS, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    #[test]
    fn test_training_day_175lb() {
        let t = compute_targets(175.0, true, date()).unwrap();
        assert_eq!(t.maintenance_calories, 2625);
        assert_eq!(t.total_calories, 3125);
        assert_eq!(t.calorie_surplus, 500);
        assert_eq!(t.protein_g, 175);
        assert_eq!(t.fats_g, 87);
        assert_eq!(t.carbs_g, 411);
        assert!(!t.carbs_clamped);
    }

    #[test]
    fn test_rest_day_175lb() {
        let t = compute_targets(175.0, false, date()).unwrap();
        assert_eq!(t.total_calories, 2725);
        assert_eq!(t.calorie_surplus, 100);
        assert_eq!(t.protein_g, 175);
        assert_eq!(t.fats_g, 76);
        assert_eq!(t.carbs_g, 336);
    }

    #[test]
    fn test_training_rest_delta_is_400() {
        for weight in [100.0, 150.0, 175.0, 220.0, 305.5] {
            let training = compute_targets(weight, true, date()).unwrap();
            let rest = compute_targets(weight, false, date()).unwrap();
            assert_eq!(training.total_calories - rest.total_calories, 400);
        }
    }

    #[test]
    fn test_protein_equals_rounded_weight() {
        for weight in [123.4, 150.0, 198.6] {
            let t = compute_targets(weight, true, date()).unwrap();
            assert_eq!(t.protein_g, weight.round() as u32);
        }
    }

    #[test]
    fn test_macro_calorie_identity() {
        for weight in [110.0, 175.0, 240.0] {
            for training in [true, false] {
                let t = compute_targets(weight, training, date()).unwrap();
                let recomputed = f64::from(t.protein_g) * CAL_PER_G_PROTEIN
                    + f64::from(t.carbs_g) * CAL_PER_G_CARBS
                    + f64::from(t.fats_g) * CAL_PER_G_FAT;
                assert!(
                    (recomputed - f64::from(t.total_calories)).abs() <= 3.0,
                    "identity off by more than 3 kcal at weight {}",
                    weight
                );
            }
        }
    }

    #[test]
    fn test_invalid_weight_rejected() {
        assert!(compute_targets(0.0, true, date()).is_err());
        assert!(compute_targets(-10.0, false, date()).is_err());
        assert!(compute_targets(f64::NAN, true, date()).is_err());
    }

    #[test]
    fn test_carb_clamp_on_negative_remainder() {
        // Degenerate inputs where protein + fat calories exceed the total.
        let (g, clamped) = carb_grams(1000.0, 800.0, 300.0);
        assert_eq!(g, 0.0);
        assert!(clamped);

        let (g, clamped) = carb_grams(2000.0, 700.0, 500.0);
        assert_eq!(g, 200.0);
        assert!(!clamped);
    }
}
