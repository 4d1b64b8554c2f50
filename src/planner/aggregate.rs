use crate::models::{DayPlan, Ingredient, MacroTotals, Meal};

/// Sum ingredient macros into a single total.
///
/// Pure f64 summation with no rounding; idempotent and re-runnable.
pub fn sum_ingredients(ingredients: &[Ingredient]) -> MacroTotals {
    ingredients.iter().map(Ingredient::macros).sum()
}

/// Sum meal-level macros into a day total.
pub fn sum_meals(meals: &[Meal]) -> MacroTotals {
    meals.iter().map(Meal::macros).sum()
}

/// Recompute every derived sum in the plan from ingredient values upward.
///
/// Overwrites meal macro fields and the day totals; called after every
/// reconciliation pass so the derived fields never drift from the
/// ingredients they summarize.
pub fn resum_plan(plan: &mut DayPlan) {
    for meal in &mut plan.meals {
        let totals = sum_ingredients(&meal.ingredients);
        meal.set_totals(totals);
    }
    plan.daily_totals = sum_meals(&plan.meals);
}
