use std::collections::HashSet;
use std::env;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use strsim::jaro_winkler;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::MacroTotals;
use crate::reference::units::to_grams;
use crate::reference::{LookupOutcome, ReferenceMacros, ReferenceSource};

const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

/// Per-request timeout; a timed-out lookup is retried once, never more.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Minimum match score before falling back to the first search result.
const MATCH_SCORE_FLOOR: f64 = 0.3;

/// Whole-food data types, preferred over branded entries.
const PREFERRED_DATA_TYPES: [&str; 2] = ["Foundation", "SR Legacy"];
const PREFERRED_TYPE_BOOST: f64 = 1.2;

const SEARCH_PAGE_SIZE: u32 = 10;

// FoodData Central nutrient ids, per 100 g.
const NUTRIENT_ENERGY: i64 = 1008;
const NUTRIENT_PROTEIN: i64 = 1003;
const NUTRIENT_CARBS: i64 = 1005;
const NUTRIENT_FAT: i64 = 1004;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<FoodItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodItem {
    #[serde(default)]
    fdc_id: i64,

    #[serde(default)]
    description: String,

    #[serde(default)]
    data_type: Option<String>,

    #[serde(default)]
    food_nutrients: Vec<FoodNutrient>,
}

/// One nutrient entry. Search results carry `nutrientId`/`value`; the
/// per-food endpoint nests `nutrient.id` next to `amount`. Both shapes are
/// accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodNutrient {
    #[serde(default)]
    nutrient_id: Option<i64>,

    #[serde(default)]
    value: Option<f64>,

    #[serde(default)]
    nutrient: Option<NutrientInfo>,

    #[serde(default)]
    amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct NutrientInfo {
    id: i64,
}

/// FoodData-Central-style HTTP reference source.
pub struct FdcClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl FdcClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Build a client from `FDC_API_KEY` / `FDC_BASE_URL`.
    ///
    /// Returns `None` when no key is configured; callers fall back to the
    /// local reference table.
    pub fn from_env() -> Result<Option<Self>> {
        let Ok(api_key) = env::var("FDC_API_KEY") else {
            debug!("FDC_API_KEY not set");
            return Ok(None);
        };
        let base_url = env::var("FDC_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Some(Self::new(api_key, base_url)?))
    }

    fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = format!("{}/foods/search", self.base_url);
        let params = [
            ("query", query.to_string()),
            ("pageSize", SEARCH_PAGE_SIZE.to_string()),
            ("dataType", PREFERRED_DATA_TYPES.join(",")),
            ("api_key", self.api_key.clone()),
        ];
        self.get_json(&url, &params)
    }

    fn food_detail(&self, fdc_id: i64) -> Result<FoodItem> {
        let url = format!("{}/food/{}", self.base_url, fdc_id);
        let params = [("api_key", self.api_key.clone())];
        self.get_json(&url, &params)
    }

    /// GET with a single retry on timeout. Unlimited retry is disallowed:
    /// a slow reference service must degrade the audit, not block it.
    fn get_json<T: DeserializeOwned>(&self, url: &str, params: &[(&str, String)]) -> Result<T> {
        match self.try_get(url, params) {
            Ok(value) => Ok(value),
            Err(e) if e.is_timeout() => {
                warn!(url, "reference request timed out, retrying once");
                Ok(self.try_get(url, params)?)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn try_get<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> reqwest::Result<T> {
        self.http
            .get(url)
            .query(params)
            .send()?
            .error_for_status()?
            .json()
    }
}

impl ReferenceSource for FdcClient {
    fn lookup(&self, name: &str, amount: f64, unit: &str) -> Result<LookupOutcome> {
        let response = self.search(name)?;
        if response.foods.is_empty() {
            debug!(name, "no reference search results");
            return Ok(LookupOutcome::NotFound);
        }

        let Some((best, score)) = best_match(name, &response.foods) else {
            return Ok(LookupOutcome::NotFound);
        };

        let per_100g = match extract_per_100g(best) {
            Some(macros) => macros,
            None => {
                // Search hit had no usable nutrients; fetch the full record.
                debug!(fdc_id = best.fdc_id, "fetching per-food nutrient detail");
                let detail = self.food_detail(best.fdc_id)?;
                match extract_per_100g(&detail) {
                    Some(macros) => macros,
                    None => return Ok(LookupOutcome::NotFound),
                }
            }
        };

        let factor = to_grams(amount, unit) / 100.0;
        Ok(LookupOutcome::Found(ReferenceMacros {
            macros: MacroTotals::new(
                per_100g.calories * factor,
                per_100g.protein_g * factor,
                per_100g.carbs_g * factor,
                per_100g.fats_g * factor,
            ),
            confidence: score.min(1.0),
            description: best.description.clone(),
        }))
    }
}

/// Highest-scoring search result, or the first result as a fallback when
/// nothing clears the score floor.
fn best_match<'a>(query: &str, foods: &'a [FoodItem]) -> Option<(&'a FoodItem, f64)> {
    let scored = foods
        .iter()
        .map(|f| (f, match_score(query, f)))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))?;

    if scored.1 >= MATCH_SCORE_FLOOR {
        Some(scored)
    } else {
        foods.first().map(|f| (f, scored.1))
    }
}

/// Score a candidate description against the queried ingredient name.
///
/// Exact match beats substring beats word-subset; otherwise the better of
/// word overlap and Jaro-Winkler similarity, dampened. Whole-food data
/// types get a boost.
fn match_score(query: &str, food: &FoodItem) -> f64 {
    let q = query.trim().to_lowercase();
    let d = food.description.trim().to_lowercase();

    let base = if q == d {
        1.0
    } else if d.contains(&q) {
        0.8
    } else {
        let query_words: HashSet<&str> = q.split_whitespace().collect();
        let desc_words: HashSet<&str> = d.split_whitespace().collect();

        if !query_words.is_empty() && query_words.is_subset(&desc_words) {
            0.7
        } else {
            let overlap = query_words.intersection(&desc_words).count() as f64
                / query_words.len().max(1) as f64;
            overlap.max(jaro_winkler(&q, &d)) * 0.6
        }
    };

    match food.data_type.as_deref() {
        Some(dt) if PREFERRED_DATA_TYPES.contains(&dt) => base * PREFERRED_TYPE_BOOST,
        _ => base,
    }
}

/// Pull the four tracked macros (per 100 g) out of a food record.
///
/// Requires at least an energy value; a record without calories is useless
/// for reconciliation.
fn extract_per_100g(food: &FoodItem) -> Option<MacroTotals> {
    let mut calories = None;
    let mut protein = 0.0;
    let mut carbs = 0.0;
    let mut fat = 0.0;

    for entry in &food.food_nutrients {
        let id = entry
            .nutrient_id
            .or_else(|| entry.nutrient.as_ref().map(|n| n.id));
        let value = entry.value.or(entry.amount);

        let (Some(id), Some(value)) = (id, value) else {
            continue;
        };

        match id {
            NUTRIENT_ENERGY => calories = Some(value),
            NUTRIENT_PROTEIN => protein = value,
            NUTRIENT_CARBS => carbs = value,
            NUTRIENT_FAT => fat = value,
            _ => {}
        }
    }

    calories.map(|cal| MacroTotals::new(cal, protein, carbs, fat))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(description: &str, data_type: Option<&str>) -> FoodItem {
        FoodItem {
            fdc_id: 1,
            description: description.to_string(),
            data_type: data_type.map(str::to_string),
            food_nutrients: Vec::new(),
        }
    }

    fn nutrient_flat(id: i64, value: f64) -> FoodNutrient {
        FoodNutrient {
            nutrient_id: Some(id),
            value: Some(value),
            ..FoodNutrient::default()
        }
    }

    fn nutrient_nested(id: i64, amount: f64) -> FoodNutrient {
        FoodNutrient {
            nutrient: Some(NutrientInfo { id }),
            amount: Some(amount),
            ..FoodNutrient::default()
        }
    }

    #[test]
    fn test_match_score_exact_and_contains() {
        let exact = food("chicken breast", None);
        let contains = food("chicken breast, grilled, skinless", None);
        assert_eq!(match_score("chicken breast", &exact), 1.0);
        assert_eq!(match_score("chicken breast", &contains), 0.8);
    }

    #[test]
    fn test_match_score_word_subset() {
        let candidate = food("breast chicken cooked", None);
        assert_eq!(match_score("chicken breast", &candidate), 0.7);
    }

    #[test]
    fn test_preferred_data_type_boost() {
        let plain = food("chicken breast", None);
        let foundation = food("chicken breast", Some("Foundation"));
        assert!(match_score("chicken breast", &foundation) > match_score("chicken breast", &plain));
    }

    #[test]
    fn test_best_match_prefers_higher_score() {
        let foods = vec![
            food("beef patty", None),
            food("chicken breast", Some("SR Legacy")),
        ];
        let (best, _) = best_match("chicken breast", &foods).unwrap();
        assert_eq!(best.description, "chicken breast");
    }

    #[test]
    fn test_best_match_falls_back_to_first() {
        let foods = vec![food("kumquat preserve", None), food("anchovy paste", None)];
        let (best, _) = best_match("zzz", &foods).unwrap();
        assert_eq!(best.description, "kumquat preserve");
    }

    #[test]
    fn test_extract_flat_shape() {
        let mut f = food("rice", None);
        f.food_nutrients = vec![
            nutrient_flat(NUTRIENT_ENERGY, 130.0),
            nutrient_flat(NUTRIENT_PROTEIN, 2.7),
            nutrient_flat(NUTRIENT_CARBS, 28.2),
            nutrient_flat(NUTRIENT_FAT, 0.3),
        ];
        let macros = extract_per_100g(&f).unwrap();
        assert_eq!(macros, MacroTotals::new(130.0, 2.7, 28.2, 0.3));
    }

    #[test]
    fn test_extract_nested_shape() {
        let mut f = food("rice", None);
        f.food_nutrients = vec![
            nutrient_nested(NUTRIENT_ENERGY, 130.0),
            nutrient_nested(NUTRIENT_PROTEIN, 2.7),
        ];
        let macros = extract_per_100g(&f).unwrap();
        assert_eq!(macros.calories, 130.0);
        assert_eq!(macros.protein_g, 2.7);
        assert_eq!(macros.carbs_g, 0.0);
    }

    #[test]
    fn test_extract_requires_calories() {
        let mut f = food("mystery", None);
        f.food_nutrients = vec![nutrient_flat(NUTRIENT_PROTEIN, 20.0)];
        assert!(extract_per_100g(&f).is_none());
    }
}
