//! Body-mass index computation and banding
//!
//! BMI is computed from weight in kilograms and height in centimeters and
//! rounded to one decimal place before banding. A health-condition flag
//! escalates the final BMI group to 4 regardless of the computed band.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PillMatchError, Result};
use crate::models::band::{Band, BmiCategory, classify_in};

/// BMI group assigned when health conditions are reported
pub const HEALTH_CONDITION_GROUP: u8 = 4;

/// BMI bands in order, lower bound inclusive, upper bound exclusive
pub const BMI_BANDS: [Band<BmiCategory>; 4] = [
    Band::new(BmiCategory::Underweight, 0.0, 18.5),
    Band::new(BmiCategory::NormalWeight, 18.5, 25.0),
    Band::new(BmiCategory::Overweight, 25.0, 30.0),
    Band::new(BmiCategory::Obese, 30.0, f64::INFINITY),
];

/// A BMI value rounded to one decimal place
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bmi(f64);

impl Bmi {
    /// The rounded BMI value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Round to one decimal place, halves away from zero
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate BMI from weight (kg) and height (cm)
///
/// # Errors
/// Returns `InvalidMeasurement` if either value is not a positive number
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Result<Bmi> {
    let positive = |value: f64| value.is_finite() && value > 0.0;
    if !positive(weight_kg) || !positive(height_cm) {
        return Err(PillMatchError::InvalidMeasurement(
            "Weight and height must be positive numbers".to_string(),
        ));
    }

    let height_m = height_cm / 100.0;
    Ok(Bmi(round_to_tenth(weight_kg / (height_m * height_m))))
}

/// Get the BMI category for a BMI value
///
/// Values no band covers (negative or NaN) fall back to `Obese`.
#[must_use]
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    classify_in(&BMI_BANDS, bmi, BmiCategory::Obese)
}

/// The BMI group used for the cohort key, with the band it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalBmiGroup {
    /// Group number used in the cohort key
    pub group: u8,
    /// Category computed from the BMI value
    pub original: BmiCategory,
    /// Whether health conditions overrode the computed group
    pub overridden: bool,
}

impl FinalBmiGroup {
    /// Display name, e.g. `"Group 4"`
    #[must_use]
    pub fn name(&self) -> String {
        format!("Group {}", self.group)
    }

    /// Why this group was assigned
    #[must_use]
    pub fn reason(&self) -> String {
        if self.overridden {
            format!("Health conditions override - assigned to Group {HEALTH_CONDITION_GROUP}")
        } else {
            format!("Based on BMI category: {}", self.original.display_name())
        }
    }
}

/// Determine the final BMI group considering health conditions
#[must_use]
pub const fn resolve_final_bmi_group(category: BmiCategory, has_health_conditions: bool) -> FinalBmiGroup {
    if has_health_conditions {
        FinalBmiGroup {
            group: HEALTH_CONDITION_GROUP,
            original: category,
            overridden: true,
        }
    } else {
        FinalBmiGroup {
            group: category.group(),
            original: category,
            overridden: false,
        }
    }
}
