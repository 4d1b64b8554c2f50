use dialoguer::{Confirm, Input};

use crate::error::{AuditError, Result};
use crate::planner::constants::{MAX_BODY_WEIGHT_LB, MIN_BODY_WEIGHT_LB};

/// Prompt for body weight in pounds.
///
/// The plausibility band is enforced here, at the input boundary; the
/// target calculator itself only requires a positive weight.
pub fn prompt_body_weight() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("What is your body weight (lb)?")
        .default("175".to_string())
        .interact_text()?;

    let weight: f64 = input
        .parse()
        .map_err(|_| AuditError::InvalidInput("Invalid number".to_string()))?;

    validate_body_weight(weight)?;
    Ok(weight)
}

/// Reject weights outside the plausible band.
pub fn validate_body_weight(weight: f64) -> Result<()> {
    if !(MIN_BODY_WEIGHT_LB..=MAX_BODY_WEIGHT_LB).contains(&weight) {
        return Err(AuditError::InvalidInput(format!(
            "body weight must be between {} and {} lb, got {}",
            MIN_BODY_WEIGHT_LB, MAX_BODY_WEIGHT_LB, weight
        )));
    }
    Ok(())
}

/// Prompt whether today is a training day.
pub fn prompt_training_day() -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt("Is this a training day?")
        .default(true)
        .interact()?)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_body_weight_band() {
        assert!(validate_body_weight(175.0).is_ok());
        assert!(validate_body_weight(50.0).is_ok());
        assert!(validate_body_weight(500.0).is_ok());
        assert!(validate_body_weight(49.9).is_err());
        assert!(validate_body_weight(500.1).is_err());
        assert!(validate_body_weight(-10.0).is_err());
    }
}
