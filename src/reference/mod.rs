pub mod cache;
pub mod fdc;
pub mod table;
pub mod units;

pub use cache::CachedSource;
pub use fdc::FdcClient;
pub use table::LocalTable;
pub use units::to_grams;

use crate::error::Result;
use crate::models::MacroTotals;

/// Reference nutrition for a matched food, scaled to the requested amount.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceMacros {
    pub macros: MacroTotals,

    /// Match confidence in [0, 1]; how well the matched entry's name fit
    /// the queried ingredient name.
    pub confidence: f64,

    /// Description of the matched reference entry.
    pub description: String,
}

/// Result of a reference lookup. Absence of a match is an outcome, not an
/// error; transport failures are the `Err` path and are absorbed by the
/// reconciler.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(ReferenceMacros),
    NotFound,
}

/// Capability interface for trusted nutrient data.
///
/// The reconciler and CLI hold only this trait, never a live client
/// directly; sources are injected at the entry points.
pub trait ReferenceSource {
    /// Look up reference macros for `amount` of `unit` of the named food.
    fn lookup(&self, name: &str, amount: f64, unit: &str) -> Result<LookupOutcome>;
}

impl<S: ReferenceSource + ?Sized> ReferenceSource for &S {
    fn lookup(&self, name: &str, amount: f64, unit: &str) -> Result<LookupOutcome> {
        (**self).lookup(name, amount, unit)
    }
}

impl<S: ReferenceSource + ?Sized> ReferenceSource for Box<S> {
    fn lookup(&self, name: &str, amount: f64, unit: &str) -> Result<LookupOutcome> {
        (**self).lookup(name, amount, unit)
    }
}
