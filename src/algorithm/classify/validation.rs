//! Input validation
//!
//! Validation runs before classification and collects every problem it finds
//! instead of stopping at the first one.

use crate::config::{PillMatchConfig, ValueRange};
use crate::error::{PillMatchError, Result};
use crate::models::{Measurement, MeasurementInput};

/// Validate raw input values, returning one message per violated rule
///
/// A missing or non-positive value yields a "must be a positive number"
/// message. A present value outside the configured range additionally
/// yields a range message.
#[must_use]
pub fn validate_inputs(input: &MeasurementInput, config: &PillMatchConfig) -> Vec<String> {
    let mut errors = Vec::new();
    // Missing or non-finite values count as absent
    let age = input.age.map(|age| age as f64);
    let weight = input.weight_kg.filter(|w| w.is_finite());
    let height = input.height_cm.filter(|h| h.is_finite());

    for (value, field) in [(age, "Age"), (weight, "Weight"), (height, "Height")] {
        if value.is_none_or(|v| v <= 0.0) {
            errors.push(format!("{field} must be a positive number"));
        }
    }

    check_range(&mut errors, age, &config.age_range, "Age", "years");
    check_range(&mut errors, weight, &config.weight_range, "Weight", "kg");
    check_range(&mut errors, height, &config.height_range, "Height", "cm");

    errors
}

/// Read an age typed as free text
///
/// Leading whitespace is skipped and an optional sign plus the leading digits
/// are kept; anything after them is ignored, so `"25.5"` reads as 25. Text
/// that does not start with digits reads as no age at all.
#[must_use]
pub fn parse_age(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let sign_len = text.len() - unsigned.len();
    text[..sign_len + digits].parse().ok()
}

fn check_range(
    errors: &mut Vec<String>,
    value: Option<f64>,
    range: &ValueRange,
    field: &str,
    unit: &str,
) {
    if let Some(value) = value {
        if !range.contains(value) {
            errors.push(format!(
                "{field} should be between {} and {} {unit}",
                range.min, range.max
            ));
        }
    }
}

impl Measurement {
    /// Validate raw input and build a measurement from it
    ///
    /// # Errors
    /// Returns `Validation` carrying every message from [`validate_inputs`]
    pub fn from_input(input: &MeasurementInput, config: &PillMatchConfig) -> Result<Self> {
        let errors = validate_inputs(input, config);

        match (input.age, input.weight_kg, input.height_cm) {
            (Some(age), Some(weight_kg), Some(height_cm)) if errors.is_empty() => {
                let age = u32::try_from(age).map_err(|_| {
                    PillMatchError::Validation(vec!["Age must be a positive number".to_string()])
                })?;
                Ok(Self::new(age, weight_kg, height_cm, input.has_health_conditions))
            }
            _ => Err(PillMatchError::Validation(errors)),
        }
    }
}
