//! Core matching implementation
//!
//! This module implements the catalog lookup for a cohort key and the
//! `Matcher` struct which runs the whole validate, classify, match pipeline.

use itertools::Itertools;
use log::info;
use serde::{Deserialize, Serialize};

use crate::algorithm::classify::{Assessment, assess};
use crate::config::PillMatchConfig;
use crate::error::Result;
use crate::filter::{ALL_CATEGORIES, EntryFilter, apply_filter};
use crate::models::{Catalog, CatalogEntry, CohortKey, Measurement, MeasurementInput};

/// Find every entry suitable for a cohort key, in catalog order
#[must_use]
pub fn find_suitable<'a>(catalog: &'a Catalog, cohort_key: &CohortKey) -> Vec<&'a CatalogEntry> {
    apply_filter(catalog, &EntryFilter::SuitableFor(cohort_key.clone()))
}

/// Keep entries of the given category; `"all"` keeps every entry
#[must_use]
pub fn filter_by_category<'a>(entries: &[&'a CatalogEntry], category: &str) -> Vec<&'a CatalogEntry> {
    if category == ALL_CATEGORIES {
        return entries.to_vec();
    }
    apply_filter(
        entries.iter().copied(),
        &EntryFilter::Category(category.to_string()),
    )
}

/// Category choices for a result list: `"all"` first, then each distinct
/// category of the given entries in first-seen order
#[must_use]
pub fn category_options(entries: &[&CatalogEntry]) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES)
        .chain(entries.iter().map(|entry| entry.category.as_str()))
        .unique()
        .map(str::to_string)
        .collect()
}

/// Display options for a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationOptions {
    /// Category to show, or `"all"`
    pub category: String,
    /// Whether brand names are listed or only counted
    pub show_brand_names: bool,
}

impl Default for RecommendationOptions {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            show_brand_names: true,
        }
    }
}

/// Result of matching one measurement against a catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Classification of the measurement
    pub assessment: Assessment,
    /// Number of entries suitable for the cohort before category filtering
    pub suitable_count: usize,
    /// Category choices derived from the suitable entries
    pub category_options: Vec<String>,
    /// Entries after category filtering, in catalog order
    pub entries: Vec<CatalogEntry>,
    /// Options the recommendation was built with
    pub options: RecommendationOptions,
}

impl Recommendation {
    /// Whether no entry matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Runs validation, classification and catalog matching
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    /// Validation configuration
    config: PillMatchConfig,
}

impl Matcher {
    /// Create a new matcher with the given configuration
    #[must_use]
    pub const fn new(config: PillMatchConfig) -> Self {
        Self { config }
    }

    /// Validate raw input, classify it and match it against the catalog
    ///
    /// # Errors
    /// Returns `Validation` with every failed rule if the input is rejected
    pub fn recommend(
        &self,
        input: &MeasurementInput,
        catalog: &Catalog,
        options: &RecommendationOptions,
    ) -> Result<Recommendation> {
        let measurement = Measurement::from_input(input, &self.config)?;
        self.recommend_measurement(&measurement, catalog, options)
    }

    /// Classify an already validated measurement and match it against the catalog
    ///
    /// # Errors
    /// Returns `InvalidMeasurement` if weight or height is not positive
    pub fn recommend_measurement(
        &self,
        measurement: &Measurement,
        catalog: &Catalog,
        options: &RecommendationOptions,
    ) -> Result<Recommendation> {
        let assessment = assess(measurement)?;
        let suitable = find_suitable(catalog, &assessment.cohort_key);
        let filtered = filter_by_category(&suitable, &options.category);

        info!(
            "Found {} suitable entries for '{}' ({} shown for category '{}')",
            suitable.len(),
            assessment.cohort_key,
            filtered.len(),
            options.category
        );

        Ok(Recommendation {
            suitable_count: suitable.len(),
            category_options: category_options(&suitable),
            entries: filtered.into_iter().cloned().collect(),
            options: options.clone(),
            assessment,
        })
    }
}
