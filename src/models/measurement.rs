//! Raw measurement inputs
//!
//! `MeasurementInput` is what a form or command line hands over: every value
//! may be missing. `Measurement` is the validated form the classifier works on.

use serde::{Deserialize, Serialize};

/// Unvalidated measurement values as supplied by the host layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// Age in whole years
    pub age: Option<i64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Whether the person reports relevant health conditions
    pub has_health_conditions: bool,
}

impl MeasurementInput {
    /// Create an input with all values present
    #[must_use]
    pub const fn new(age: i64, weight_kg: f64, height_cm: f64, has_health_conditions: bool) -> Self {
        Self {
            age: Some(age),
            weight_kg: Some(weight_kg),
            height_cm: Some(height_cm),
            has_health_conditions,
        }
    }
}

/// A validated measurement ready for classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Age in whole years
    pub age: u32,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Whether the person reports relevant health conditions
    pub has_health_conditions: bool,
}

impl Measurement {
    /// Create a measurement without range validation
    ///
    /// Classification still works on any value; BMI computation rejects
    /// non-positive weight or height.
    #[must_use]
    pub const fn new(age: u32, weight_kg: f64, height_cm: f64, has_health_conditions: bool) -> Self {
        Self {
            age,
            weight_kg,
            height_cm,
            has_health_conditions,
        }
    }
}
