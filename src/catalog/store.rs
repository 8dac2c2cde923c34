//! Shared, atomically replaceable catalog handle
//!
//! Readers take an `Arc<Catalog>` snapshot and keep using it for the whole
//! lookup. Writers build a complete new catalog and swap the pointer, so a
//! reader sees either the old or the new catalog and never a mix.

use std::sync::{Arc, PoisonError, RwLock};

use log::{info, warn};

use crate::catalog::io::from_json_str;
use crate::catalog::reference::reference_catalog;
use crate::error::Result;
use crate::models::Catalog;

/// Holder of the current catalog
#[derive(Debug, Default)]
pub struct CatalogStore {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    /// Create a store holding the given catalog
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Create a store holding the built-in reference catalog
    ///
    /// # Errors
    /// Returns `CatalogFormat` if the bundled data is malformed
    pub fn with_reference() -> Result<Self> {
        Ok(Self::new(reference_catalog()?))
    }

    /// The current catalog
    #[must_use]
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Swap in a new catalog, returning the previous one
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        info!("Replacing catalog ({} -> {} entries)", guard.len(), catalog.len());
        std::mem::replace(&mut *guard, Arc::new(catalog))
    }

    /// Import a catalog from JSON and swap it in
    ///
    /// On error the current catalog is left untouched.
    ///
    /// # Errors
    /// Returns `CatalogFormat` if the document is malformed
    pub fn import_json(&self, json: &str) -> Result<Arc<Catalog>> {
        let catalog = from_json_str(json).inspect_err(|e| {
            warn!("Catalog import rejected, keeping current catalog: {e}");
        })?;
        let imported = Arc::new(catalog);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        info!("Replacing catalog ({} -> {} entries)", guard.len(), imported.len());
        *guard = Arc::clone(&imported);
        Ok(imported)
    }

    /// Apply an admin edit to the current catalog and swap in the result
    ///
    /// The write lock is held while the edit runs, so concurrent edits are
    /// applied one after another. On error the current catalog is kept.
    ///
    /// # Errors
    /// Returns whatever error the edit returns
    pub fn apply<F>(&self, edit: F) -> Result<Arc<Catalog>>
    where
        F: FnOnce(&Catalog) -> Result<Catalog>,
    {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let updated = Arc::new(edit(&**guard)?);
        *guard = Arc::clone(&updated);
        Ok(updated)
    }
}
