use crate::models::{DayPlan, NutritionTarget, VerificationStatus};
use crate::planner::accuracy::AccuracyReport;
use crate::reconcile::ReconcileSummary;
use crate::reference::{LookupOutcome, ReferenceMacros};

/// Display computed daily targets.
pub fn display_targets(target: &NutritionTarget) {
    println!();
    println!("=== Daily Targets ({}) ===", target.date);
    println!();
    println!(
        "Day type:     {}",
        if target.is_training_day {
            "training day"
        } else {
            "rest day"
        }
    );
    println!("Body weight:  {:.1} lb", target.body_weight);
    println!(
        "Calories:     {} (maintenance {} + surplus {})",
        target.total_calories, target.maintenance_calories, target.calorie_surplus
    );
    println!("Protein:      {} g", target.protein_g);
    println!("Carbs:        {} g", target.carbs_g);
    println!("Fats:         {} g", target.fats_g);

    if target.carbs_clamped {
        println!();
        println!("Warning: carb target clamped to 0 g; these targets are infeasible.");
    }
    println!();
}

/// Display the plan's meals with their reconciled totals.
pub fn display_plan(plan: &DayPlan) {
    println!();
    println!("=== Day Plan ({}, {}) ===", plan.date, plan.day_type);
    println!();

    for (i, meal) in plan.meals.iter().enumerate() {
        println!("{}. {} ({})", i + 1, meal.name, meal.time);
        for ing in &meal.ingredients {
            let marker = match ing.status {
                VerificationStatus::Verified => "ok",
                VerificationStatus::Corrected => "corrected",
                VerificationStatus::LookupFailed => "unchecked",
                VerificationStatus::Unverified => "-",
            };
            println!(
                "     {:<32} {:>7.1} {:<5} {:>5.0} cal  P:{:>5.1} C:{:>5.1} F:{:>5.1}  [{}]",
                ing.name, ing.amount, ing.unit, ing.calories, ing.protein_g, ing.carbs_g,
                ing.fats_g, marker
            );
        }
        println!(
            "     {:<32} {:>20.0} cal  P:{:>5.1} C:{:>5.1} F:{:>5.1}",
            "meal total", meal.calories, meal.protein_g, meal.carbs_g, meal.fats_g
        );
        println!();
    }

    println!("Daily totals: {}", plan.daily_totals.debug_string());
    println!();
}

/// Display the outcome counts of a reconciliation pass.
pub fn display_reconcile_summary(summary: &ReconcileSummary) {
    println!("--- Reconciliation ---");
    println!(
        "{} ingredients checked: {} verified, {} corrected, {} lookups failed",
        summary.total(),
        summary.verified,
        summary.corrected,
        summary.failed
    );
    println!();
}

/// Display the accuracy report against targets.
pub fn display_accuracy_report(report: &AccuracyReport) {
    println!("--- Accuracy vs Targets ---");
    for (key, m) in report.entries() {
        println!(
            "  {:<10} {:>7.0} / {:>6.0}  ({:>5.1}%)  {}",
            key,
            m.actual,
            m.target,
            m.accuracy_pct,
            if m.within_tolerance { "pass" } else { "FAIL" }
        );
    }
    println!();
    if report.within_tolerance {
        println!("Plan is within tolerance.");
    } else {
        println!("Plan is OUT of tolerance:");
        for issue in report.issues() {
            println!("  - {}", issue);
        }
    }
    println!();
}

/// Display the result of a single reference lookup.
pub fn display_lookup(name: &str, amount: f64, unit: &str, outcome: &LookupOutcome) {
    println!();
    match outcome {
        LookupOutcome::Found(ReferenceMacros {
            macros,
            confidence,
            description,
        }) => {
            println!("=== Reference match for '{}' ({} {}) ===", name, amount, unit);
            println!();
            println!("Matched:    {} (confidence {:.2})", description, confidence);
            println!("Calories:   {:.0}", macros.calories);
            println!("Protein:    {:.1} g", macros.protein_g);
            println!("Carbs:      {:.1} g", macros.carbs_g);
            println!("Fats:       {:.1} g", macros.fats_g);
        }
        LookupOutcome::NotFound => {
            println!("No reference match for '{}'", name);
        }
    }
    println!();
}
