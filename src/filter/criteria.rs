//! Catalog entry filtering criteria
//!
//! This module provides the criteria used to narrow a catalog down to the
//! entries relevant for a cohort, a category, or an admin search.

use crate::models::{CatalogEntry, CohortKey};

/// Category value that matches every entry
pub const ALL_CATEGORIES: &str = "all";

/// Defines a criterion for filtering entities
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// A filter that can be applied to a catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryFilter {
    /// Entry lists this cohort key in its suitable groups (exact match)
    SuitableFor(CohortKey),
    /// Entry has this category (exact, case-sensitive); `"all"` matches everything
    Category(String),
    /// Case-insensitive substring over generic name, brand names and description
    Search(String),
    /// Combined filter that requires all criteria to be met
    All(Vec<EntryFilter>),
}

impl FilterCriteria<CatalogEntry> for EntryFilter {
    fn meets_criteria(&self, entry: &CatalogEntry) -> bool {
        match self {
            Self::SuitableFor(key) => entry.is_suitable_for(key),
            Self::Category(category) => {
                category == ALL_CATEGORIES || entry.category == *category
            }
            Self::Search(term) => term.is_empty() || entry.matches_search(term),
            Self::All(filters) => filters.iter().all(|f| f.meets_criteria(entry)),
        }
    }
}

/// Keep the items meeting the criteria, preserving their order
pub fn apply_filter<'a, T, F>(items: impl IntoIterator<Item = &'a T>, filter: &F) -> Vec<&'a T>
where
    T: 'a,
    F: FilterCriteria<T> + ?Sized,
{
    items
        .into_iter()
        .filter(|item| filter.meets_criteria(item))
        .collect()
}
