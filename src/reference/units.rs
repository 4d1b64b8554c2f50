use tracing::warn;

/// Convert an amount in a household unit to grams.
///
/// Reference data is per 100 g, so every lookup goes through this table
/// first. Volume conversions are approximations. Unknown units fall back to
/// grams with a logged warning rather than failing the lookup.
pub fn to_grams(amount: f64, unit: &str) -> f64 {
    match unit.trim().to_lowercase().as_str() {
        "g" | "gram" | "grams" => amount,
        "kg" | "kilogram" | "kilograms" => amount * 1000.0,
        "oz" | "ounce" | "ounces" => amount * 28.35,
        "lb" | "lbs" | "pound" | "pounds" => amount * 453.592,
        "cup" | "cups" => amount * 240.0,
        "tbsp" | "tablespoon" | "tablespoons" => amount * 15.0,
        "tsp" | "teaspoon" | "teaspoons" => amount * 5.0,
        other => {
            warn!(unit = other, "unknown unit, assuming grams");
            amount
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_gram_passthrough() {
        assert_eq!(to_grams(150.0, "g"), 150.0);
        assert_eq!(to_grams(150.0, "grams"), 150.0);
    }

    #[test]
    fn test_weight_conversions() {
        assert_float_absolute_eq!(to_grams(2.0, "oz"), 56.7, 0.001);
        assert_float_absolute_eq!(to_grams(1.0, "lb"), 453.592, 0.001);
    }

    #[test]
    fn test_volume_conversions() {
        assert_eq!(to_grams(0.5, "cup"), 120.0);
        assert_eq!(to_grams(2.0, "tbsp"), 30.0);
        assert_eq!(to_grams(3.0, "tsp"), 15.0);
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(to_grams(1.0, " Cups "), 240.0);
        assert_float_absolute_eq!(to_grams(1.0, "OZ"), 28.35, 0.001);
    }

    #[test]
    fn test_unknown_unit_assumes_grams() {
        assert_eq!(to_grams(42.0, "handful"), 42.0);
    }
}
