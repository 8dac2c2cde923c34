//! Cohort keys
//!
//! A cohort key joins an age group and a final BMI group into the string that
//! catalog entries list in `suitableGroups`. The format is fixed:
//! `"<AgeGroup> - BMI Group <N>"`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::band::{AgeGroup, BmiCategory};

/// Composite key identifying an age group / BMI group combination
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CohortKey(String);

impl CohortKey {
    /// Build the key for an age group and a BMI group number
    #[must_use]
    pub fn new(age_group: AgeGroup, bmi_group: u8) -> Self {
        Self(format!("{} - BMI Group {}", age_group.display_name(), bmi_group))
    }

    /// Wrap an existing key string without checking its format
    ///
    /// Catalog data and host input use this; matching is exact string
    /// equality, so a malformed key simply matches nothing.
    #[must_use]
    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this key is one the classifier can produce
    #[must_use]
    pub fn is_known(&self) -> bool {
        all_cohort_keys().contains(self)
    }
}

impl fmt::Display for CohortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CohortKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Every cohort key the classifier can produce, age group major
#[must_use]
pub fn all_cohort_keys() -> Vec<CohortKey> {
    AgeGroup::all()
        .into_iter()
        .flat_map(|age_group| {
            BmiCategory::all()
                .into_iter()
                .map(move |category| CohortKey::new(age_group, category.group()))
        })
        .collect()
}
