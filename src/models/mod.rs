pub mod ingredient;
pub mod macros;
pub mod plan;
pub mod target;

pub use ingredient::{Ingredient, VerificationStatus};
pub use macros::MacroTotals;
pub use plan::{DayPlan, DayType, Meal};
pub use target::NutritionTarget;
