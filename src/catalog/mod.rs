//! Catalog loading, exchange and administration
//!
//! This module covers everything around the pill catalog that is not
//! matching itself:
//!
//! - `io`: validated JSON import and export
//! - `reference`: the bundled reference catalog and category labels
//! - `admin`: add, edit, delete and search operations
//! - `store`: a shared handle whose catalog is swapped atomically

pub mod admin;
pub mod io;
pub mod reference;
pub mod store;

use crate::config::PillMatchConfig;
use crate::error::Result;
use crate::models::Catalog;

pub use admin::{EntryDraft, add_entry, delete_entry, search, update_entry};
pub use io::{export_to_path, from_json_str, from_reader, load_from_path, to_json_string};
pub use reference::{CATEGORY_DISPLAY_NAMES, display_name, reference_catalog};
pub use store::CatalogStore;

/// Load the catalog named by the configuration, or the reference catalog
///
/// # Errors
/// Returns `Io` or `CatalogFormat` if the configured file cannot be loaded
pub fn load_configured(config: &PillMatchConfig) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => load_from_path(path),
        None => reference_catalog(),
    }
}
