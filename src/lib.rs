pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod reconcile;
pub mod reference;
pub mod state;

pub use error::{AuditError, Result};
pub use models::{DayPlan, Ingredient, MacroTotals, Meal, NutritionTarget, VerificationStatus};
