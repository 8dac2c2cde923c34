//! A Rust library for classifying a person into an age and BMI cohort and
//! matching that cohort against a catalog of oral contraceptives.

pub mod algorithm;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{PillMatchConfig, ValueRange};
pub use error::{PillMatchError, Result};
pub use models::{
    AgeGroup, BmiCategory, Catalog, CatalogEntry, CohortKey, Measurement, MeasurementInput,
    all_cohort_keys,
};

// Classification
pub use algorithm::classify::{
    Assessment, Bmi, FinalBmiGroup, assess, classify_age, classify_bmi, compute_bmi,
    parse_age, resolve_final_bmi_group, validate_inputs,
};

// Matching
pub use algorithm::matching::{
    Matcher, Recommendation, RecommendationOptions, category_options, filter_by_category,
    find_suitable,
};

// Catalog handling
pub use catalog::{CatalogStore, EntryDraft, reference_catalog};
