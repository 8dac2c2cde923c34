//! Catalog matching
//!
//! This module matches a cohort key against the catalog. It includes:
//!
//! 1. Exact-membership lookup of suitable entries
//! 2. Secondary filtering by category
//! 3. The `Matcher` pipeline combining validation, classification and lookup

pub mod matcher;

// Re-export key types
pub use matcher::{
    Matcher, Recommendation, RecommendationOptions, category_options, filter_by_category,
    find_suitable,
};
