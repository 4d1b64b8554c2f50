use std::path::Path;

use serde::Deserialize;
use strsim::jaro_winkler;
use tracing::debug;

use crate::error::Result;
use crate::models::MacroTotals;
use crate::reference::units::to_grams;
use crate::reference::{LookupOutcome, ReferenceMacros, ReferenceSource};

/// Minimum Jaro-Winkler similarity for a fuzzy table match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.75;

/// Common foods bundled with the binary, per 100 g.
const BUILTIN_CSV: &str = include_str!("../../data/reference_foods.csv");

#[derive(Debug, Deserialize)]
struct TableRow {
    name: String,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fats_g: f64,
}

#[derive(Debug, Clone)]
struct TableEntry {
    name: String,
    per_100g: MacroTotals,
}

/// CSV-backed reference table of per-100g nutrition values.
///
/// The offline counterpart to the HTTP client: used when no API key is
/// configured or when the audit explicitly runs offline.
pub struct LocalTable {
    entries: Vec<TableEntry>,
}

impl LocalTable {
    /// Load a table from a CSV file with columns
    /// `name,calories,protein_g,carbs_g,fats_g` (values per 100 g).
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = csv::Reader::from_path(path)?;
        Self::from_reader(reader)
    }

    /// The built-in common-foods table.
    pub fn builtin() -> Result<Self> {
        let reader = csv::Reader::from_reader(BUILTIN_CSV.as_bytes());
        Self::from_reader(reader)
    }

    fn from_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut entries = Vec::new();
        for row in reader.deserialize() {
            let row: TableRow = row?;
            entries.push(TableEntry {
                name: row.name.to_lowercase(),
                per_100g: MacroTotals::new(row.calories, row.protein_g, row.carbs_g, row.fats_g),
            });
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best entry for a queried name: exact match first, then the highest
    /// Jaro-Winkler score above the fuzzy threshold.
    fn best_match(&self, name: &str) -> Option<(&TableEntry, f64)> {
        let query = name.trim().to_lowercase();

        if let Some(entry) = self.entries.iter().find(|e| e.name == query) {
            return Some((entry, 1.0));
        }

        self.entries
            .iter()
            .map(|e| (e, jaro_winkler(&e.name, &query)))
            .filter(|(_, score)| *score >= FUZZY_MATCH_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }
}

impl ReferenceSource for LocalTable {
    fn lookup(&self, name: &str, amount: f64, unit: &str) -> Result<LookupOutcome> {
        let Some((entry, score)) = self.best_match(name) else {
            debug!(name, "no local table match");
            return Ok(LookupOutcome::NotFound);
        };

        let grams = to_grams(amount, unit);
        let factor = grams / 100.0;
        let per = entry.per_100g;

        Ok(LookupOutcome::Found(ReferenceMacros {
            macros: MacroTotals::new(
                per.calories * factor,
                per.protein_g * factor,
                per.carbs_g * factor,
                per.fats_g * factor,
            ),
            confidence: score,
            description: entry.name.clone(),
        }))
    }
}
