//! Catalog administration
//!
//! Admin edits never touch the catalog they are given. Each operation
//! validates the edit and returns a new `Catalog`, which the caller swaps in
//! (see [`crate::catalog::store::CatalogStore::apply`]).

use log::info;

use crate::error::{PillMatchError, Result};
use crate::filter::{EntryFilter, apply_filter};
use crate::models::{Catalog, CatalogEntry, CohortKey};

/// The editable form of a catalog entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    /// Generic name
    pub generic_name: String,
    /// Category code
    pub category: String,
    /// Free-text description
    pub description: String,
    /// Brand names in the order they were added
    pub brand_names: Vec<String>,
    /// Selected cohort keys
    pub suitable_groups: Vec<CohortKey>,
}

impl EntryDraft {
    /// Create an empty draft
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a draft pre-filled from an existing entry
    #[must_use]
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            generic_name: entry.generic_name.clone(),
            category: entry.category.clone(),
            description: entry.description.clone(),
            brand_names: entry.brand_names.clone(),
            suitable_groups: entry.suitable_groups.clone(),
        }
    }

    /// Add a brand name; blank names and names already present are ignored
    ///
    /// Returns whether the name was added.
    pub fn add_brand_name(&mut self, brand_name: &str) -> bool {
        let brand_name = brand_name.trim();
        if brand_name.is_empty() || self.brand_names.iter().any(|b| b == brand_name) {
            return false;
        }
        self.brand_names.push(brand_name.to_string());
        true
    }

    /// Remove the brand name at `index`
    pub fn remove_brand_name(&mut self, index: usize) -> Option<String> {
        (index < self.brand_names.len()).then(|| self.brand_names.remove(index))
    }

    /// Check that every required field is filled in
    ///
    /// # Errors
    /// Returns `Admin` naming the first missing field
    pub fn validate(&self) -> Result<()> {
        let problem = if self.generic_name.trim().is_empty() {
            Some("Please enter a generic name")
        } else if self.category.trim().is_empty() {
            Some("Please select a category")
        } else if self.description.trim().is_empty() {
            Some("Please enter a description")
        } else if self.brand_names.is_empty() {
            Some("Please add at least one brand name")
        } else if self.suitable_groups.is_empty() {
            Some("Please select at least one suitable group")
        } else {
            None
        };

        problem.map_or(Ok(()), |message| Err(PillMatchError::admin(message)))
    }

    fn into_entry(self) -> CatalogEntry {
        CatalogEntry {
            generic_name: self.generic_name.trim().to_string(),
            brand_names: self.brand_names,
            suitable_groups: self.suitable_groups,
            category: self.category,
            description: self.description.trim().to_string(),
        }
    }
}

/// Add a new entry at the end of the catalog
///
/// # Errors
/// Returns `Admin` if the draft is incomplete or the generic name already exists
pub fn add_entry(catalog: &Catalog, draft: EntryDraft) -> Result<Catalog> {
    draft.validate()?;
    let entry = draft.into_entry();
    if catalog.contains(&entry.generic_name) {
        return Err(PillMatchError::admin(
            "A pill with this generic name already exists",
        ));
    }

    info!("Adding catalog entry '{}'", entry.generic_name);
    let mut entries = catalog.entries().to_vec();
    entries.push(entry);
    Catalog::from_entries(entries)
}

/// Replace the entry named `original_name` with the draft
///
/// The edited entry is removed and re-added, so it moves to the end of the
/// catalog. Renaming is allowed as long as the new name is free.
///
/// # Errors
/// Returns `Admin` if the draft is incomplete, the original entry does not
/// exist, or the new name belongs to another entry
pub fn update_entry(catalog: &Catalog, original_name: &str, draft: EntryDraft) -> Result<Catalog> {
    draft.validate()?;
    if !catalog.contains(original_name) {
        return Err(PillMatchError::admin(format!(
            "No pill named '{original_name}'"
        )));
    }
    let entry = draft.into_entry();
    if entry.generic_name != original_name && catalog.contains(&entry.generic_name) {
        return Err(PillMatchError::admin(
            "A pill with this generic name already exists",
        ));
    }

    info!(
        "Updating catalog entry '{}' (now '{}')",
        original_name, entry.generic_name
    );
    let mut entries: Vec<CatalogEntry> = catalog
        .iter()
        .filter(|existing| existing.generic_name != original_name)
        .cloned()
        .collect();
    entries.push(entry);
    Catalog::from_entries(entries)
}

/// Remove an entry
///
/// # Errors
/// Returns `Admin` if no entry has this name
pub fn delete_entry(catalog: &Catalog, generic_name: &str) -> Result<Catalog> {
    if !catalog.contains(generic_name) {
        return Err(PillMatchError::admin(format!(
            "No pill named '{generic_name}'"
        )));
    }

    info!("Deleting catalog entry '{generic_name}'");
    let entries = catalog
        .iter()
        .filter(|existing| existing.generic_name != generic_name)
        .cloned()
        .collect();
    Catalog::from_entries(entries)
}

/// Search entries by term and category, in catalog order
///
/// The term is matched case-insensitively against generic names, brand names
/// and descriptions; an empty term matches everything. A category of `"all"`
/// matches every category.
#[must_use]
pub fn search<'a>(catalog: &'a Catalog, term: &str, category: &str) -> Vec<&'a CatalogEntry> {
    let filter = EntryFilter::All(vec![
        EntryFilter::Search(term.trim().to_string()),
        EntryFilter::Category(category.to_string()),
    ]);
    apply_filter(catalog, &filter)
}
