pub mod accuracy;
pub mod aggregate;
pub mod constants;
pub mod targets;

pub use accuracy::{validate, AccuracyReport, MacroAccuracy, TolerancePolicy};
pub use aggregate::{resum_plan, sum_ingredients, sum_meals};
pub use constants::*;
pub use targets::compute_targets;
