/// Maintenance calories per pound of body weight.
pub const MAINTENANCE_CAL_PER_LB: f64 = 15.0;

/// Calorie surplus on training days.
pub const TRAINING_DAY_SURPLUS: f64 = 500.0;

/// Calorie surplus on rest days.
pub const REST_DAY_SURPLUS: f64 = 100.0;

/// Protein target: grams per pound of body weight.
pub const PROTEIN_G_PER_LB: f64 = 1.0;

/// Fraction of total calories allocated to fat.
pub const FAT_CALORIE_FRACTION: f64 = 0.25;

/// Calories per gram of protein.
pub const CAL_PER_G_PROTEIN: f64 = 4.0;

/// Calories per gram of carbohydrate.
pub const CAL_PER_G_CARBS: f64 = 4.0;

/// Calories per gram of fat.
pub const CAL_PER_G_FAT: f64 = 9.0;

/// Meals per day plan.
pub const MEALS_PER_DAY: usize = 3;

/// Default accuracy tolerance, percent deviation from target.
///
/// One uniform band for all four macros, replacing the mixed 2%/5% bands
/// the validator historically used.
pub const DEFAULT_TOLERANCE_PCT: f64 = 2.0;

/// Relative variance above which an ingredient's claimed macros are
/// overwritten with reference values.
pub const CORRECTION_VARIANCE_THRESHOLD: f64 = 0.10;

/// Plausible body weight band enforced at the input boundary (lb).
pub const MIN_BODY_WEIGHT_LB: f64 = 50.0;
pub const MAX_BODY_WEIGHT_LB: f64 = 500.0;
