//! Domain models for cohort classification and catalog matching
//!
//! This module contains the value types shared by the classifier, the
//! matcher and the catalog tooling.

pub mod band;
pub mod catalog;
pub mod cohort;
pub mod measurement;

// Re-export commonly used types
pub use band::{AgeGroup, Band, BmiCategory};
pub use catalog::{Catalog, CatalogEntry};
pub use cohort::{CohortKey, all_cohort_keys};
pub use measurement::{Measurement, MeasurementInput};
