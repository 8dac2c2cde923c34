//! Filtering capabilities for catalog entries
//!
//! This module provides criteria-based filtering used by the matcher and
//! by catalog search.

pub mod criteria;

pub use criteria::{ALL_CATEGORIES, EntryFilter, FilterCriteria, apply_filter};
