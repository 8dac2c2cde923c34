//! Cohort classification
//!
//! This module turns a validated measurement into an age group, a BMI value
//! and category, a final BMI group (after the health-condition override) and
//! the cohort key built from them:
//!
//! 1. BMI computation and banding (`bmi`)
//! 2. Age banding (`age`)
//! 3. Input validation that runs before any of the above (`validation`)

pub mod age;
pub mod bmi;
pub mod validation;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{AgeGroup, BmiCategory, CohortKey, Measurement};

pub use age::{AGE_BANDS, classify_age};
pub use bmi::{
    BMI_BANDS, Bmi, FinalBmiGroup, HEALTH_CONDITION_GROUP, classify_bmi, compute_bmi,
    resolve_final_bmi_group,
};
pub use validation::{parse_age, validate_inputs};

/// Build the cohort key from an age group and the final BMI group
#[must_use]
pub fn build_cohort_key(age_group: AgeGroup, final_group: &FinalBmiGroup) -> CohortKey {
    CohortKey::new(age_group, final_group.group)
}

/// Everything the classifier derives from one measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Age in years
    pub age: u32,
    /// Age group
    pub age_group: AgeGroup,
    /// Rounded BMI
    pub bmi: Bmi,
    /// BMI category computed from the BMI value
    pub bmi_category: BmiCategory,
    /// BMI group used for matching
    pub final_group: FinalBmiGroup,
    /// Composite key used for catalog matching
    pub cohort_key: CohortKey,
}

impl Assessment {
    /// Human-readable summary of the cohort
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "{} age group with {} BMI category",
            self.age_group.display_name(),
            self.final_group.name()
        )
    }
}

/// Classify a measurement
///
/// # Errors
/// Returns `InvalidMeasurement` if weight or height is not positive
pub fn assess(measurement: &Measurement) -> Result<Assessment> {
    let age_group = classify_age(measurement.age);
    let bmi = compute_bmi(measurement.weight_kg, measurement.height_cm)?;
    let bmi_category = classify_bmi(bmi.value());
    let final_group = resolve_final_bmi_group(bmi_category, measurement.has_health_conditions);
    let cohort_key = build_cohort_key(age_group, &final_group);

    log::debug!(
        "Classified age {} / BMI {} as '{}' ({})",
        measurement.age,
        bmi,
        cohort_key,
        final_group.reason()
    );

    Ok(Assessment {
        age: measurement.age,
        age_group,
        bmi,
        bmi_category,
        final_group,
        cohort_key,
    })
}
