//! Catalog entry and catalog models
//!
//! The catalog is an ordered table of pill entries keyed by generic name.
//! Order is the insertion order of the source data and is preserved by every
//! lookup. A `Catalog` value is never mutated in place: admin edits build a
//! new value (see `crate::catalog::admin`).

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{PillMatchError, Result};
use crate::models::cohort::CohortKey;

/// A single pill entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Generic name, unique within a catalog
    pub generic_name: String,
    /// Brand names in source order; duplicates are kept
    pub brand_names: Vec<String>,
    /// Cohort keys this entry is suitable for
    pub suitable_groups: Vec<CohortKey>,
    /// Category code
    pub category: String,
    /// Free-text description
    pub description: String,
}

impl CatalogEntry {
    /// Check whether the entry lists the cohort key, by exact string equality
    #[must_use]
    pub fn is_suitable_for(&self, key: &CohortKey) -> bool {
        self.suitable_groups.contains(key)
    }

    /// Case-insensitive substring search over the generic name, brand names
    /// and description
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.generic_name.to_lowercase().contains(&term)
            || self
                .brand_names
                .iter()
                .any(|brand| brand.to_lowercase().contains(&term))
            || self.description.to_lowercase().contains(&term)
    }
}

/// An ordered collection of catalog entries with unique generic names
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: FxHashMap<String, usize>,
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Catalog {
    /// Build a catalog from entries in the given order
    ///
    /// # Errors
    /// Returns a catalog format error if a generic name is blank or repeated
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut index = FxHashMap::default();
        index.reserve(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.generic_name.trim().is_empty() {
                return Err(PillMatchError::catalog_format(format!(
                    "entry {} has a blank generic name",
                    position + 1
                )));
            }
            if index.insert(entry.generic_name.clone(), position).is_some() {
                return Err(PillMatchError::catalog_format(format!(
                    "duplicate generic name '{}'",
                    entry.generic_name
                )));
            }
        }

        Ok(Self { entries, index })
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in catalog order
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Iterate entries in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Look up an entry by generic name
    #[must_use]
    pub fn get(&self, generic_name: &str) -> Option<&CatalogEntry> {
        self.index.get(generic_name).map(|&i| &self.entries[i])
    }

    /// Whether an entry with this generic name exists
    #[must_use]
    pub fn contains(&self, generic_name: &str) -> bool {
        self.index.contains_key(generic_name)
    }

    /// Generic names in catalog order
    pub fn generic_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.generic_name.as_str())
    }

    /// Distinct categories in first-seen order
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.category.as_str())
            .unique()
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
