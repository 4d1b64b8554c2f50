use tracing::{info, warn};

use crate::models::{DayPlan, Ingredient, MacroTotals, VerificationStatus};
use crate::planner::aggregate::resum_plan;
use crate::planner::constants::CORRECTION_VARIANCE_THRESHOLD;
use crate::reference::{LookupOutcome, ReferenceSource};

/// Counts of ingredient outcomes from one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub verified: usize,
    pub corrected: usize,
    pub failed: usize,
}

impl ReconcileSummary {
    pub fn total(&self) -> usize {
        self.verified + self.corrected + self.failed
    }
}

/// Reconciles claimed ingredient macros against a trusted reference source.
///
/// Holds only the lookup capability; which source backs it (HTTP, local
/// table, cached) is the caller's choice. This is the single place where
/// reference-service failure is expected and absorbed: a failed lookup
/// keeps the claimed values and marks the ingredient, never errors out.
pub struct Reconciler<'a> {
    source: &'a dyn ReferenceSource,
}

impl<'a> Reconciler<'a> {
    pub fn new(source: &'a dyn ReferenceSource) -> Self {
        Self { source }
    }

    /// Reconcile one ingredient, returning a possibly-corrected copy.
    ///
    /// Claimed macros are overwritten only when the variance against the
    /// reference exceeds the correction threshold; close-enough values are
    /// kept as-is to avoid churn on rounding-level differences.
    pub fn reconcile_ingredient(&self, ingredient: &Ingredient) -> Ingredient {
        let mut out = ingredient.clone();

        match self
            .source
            .lookup(&ingredient.name, ingredient.amount, &ingredient.unit)
        {
            Ok(LookupOutcome::Found(reference)) => {
                let v = variance(&ingredient.macros(), &reference.macros);
                if v > CORRECTION_VARIANCE_THRESHOLD {
                    info!(
                        name = %ingredient.name,
                        variance_pct = %format!("{:.1}", v * 100.0),
                        matched = %reference.description,
                        "correcting ingredient with reference values"
                    );
                    out.set_macros(reference.macros);
                    out.status = VerificationStatus::Corrected;
                } else {
                    out.status = VerificationStatus::Verified;
                }
            }
            Ok(LookupOutcome::NotFound) => {
                warn!(name = %ingredient.name, "no reference match, keeping claimed values");
                out.status = VerificationStatus::LookupFailed;
            }
            Err(e) => {
                warn!(name = %ingredient.name, error = %e, "reference lookup failed, keeping claimed values");
                out.status = VerificationStatus::LookupFailed;
            }
        }

        out
    }

    /// Reconcile every ingredient in the plan, then recompute all derived
    /// sums. Ingredient order does not matter; each correction is local.
    pub fn reconcile_plan(&self, plan: &mut DayPlan) -> ReconcileSummary {
        let mut summary = ReconcileSummary::default();

        for ingredient in plan.ingredients_mut() {
            let reconciled = self.reconcile_ingredient(ingredient);
            match reconciled.status {
                VerificationStatus::Verified => summary.verified += 1,
                VerificationStatus::Corrected => summary.corrected += 1,
                VerificationStatus::LookupFailed => summary.failed += 1,
                VerificationStatus::Unverified => {}
            }
            *ingredient = reconciled;
        }

        resum_plan(plan);
        summary
    }
}

/// Mean relative deviation between claimed and reference macros.
///
/// Averaged over the four macro values, skipping those claimed as zero;
/// no claimed values at all yields zero variance.
pub fn variance(original: &MacroTotals, reference: &MacroTotals) -> f64 {
    let pairs = original
        .entries()
        .into_iter()
        .zip(reference.entries())
        .filter(|((_, orig), _)| *orig > 0.0)
        .map(|((_, orig), (_, refv))| (orig - refv).abs() / orig)
        .collect::<Vec<f64>>();

    if pairs.is_empty() {
        0.0
    } else {
        pairs.iter().sum::<f64>() / pairs.len() as f64
    }
}
