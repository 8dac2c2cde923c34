//! Catalog JSON import and export
//!
//! The exchange format is a JSON object mapping each generic name to an
//! object with `brandNames`, `suitableGroups`, `category` and `description`.
//! Key order is kept on both import and export. Import is all-or-nothing:
//! any malformed entry rejects the whole document.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{PillMatchError, Result};
use crate::models::{Catalog, CatalogEntry, CohortKey};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Entry body as it appears in the exchange format
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryRecord {
    brand_names: Vec<String>,
    suitable_groups: Vec<CohortKey>,
    category: String,
    description: String,
}

impl EntryRecord {
    fn into_entry(self, generic_name: String) -> CatalogEntry {
        CatalogEntry {
            generic_name,
            brand_names: self.brand_names,
            suitable_groups: self.suitable_groups,
            category: self.category,
            description: self.description,
        }
    }
}

/// Borrowed entry body used for export
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntryBody<'a> {
    brand_names: &'a [String],
    suitable_groups: &'a [CohortKey],
    category: &'a str,
    description: &'a str,
}

impl<'a> From<&'a CatalogEntry> for EntryBody<'a> {
    fn from(entry: &'a CatalogEntry) -> Self {
        Self {
            brand_names: &entry.brand_names,
            suitable_groups: &entry.suitable_groups,
            category: &entry.category,
            description: &entry.description,
        }
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for entry in self {
            map.serialize_entry(&entry.generic_name, &EntryBody::from(entry))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        from_json_value(value).map_err(D::Error::custom)
    }
}

/// Build a catalog from an already parsed JSON value
///
/// # Errors
/// Returns `CatalogFormat` if the value is not an object of well-formed entries
pub fn from_json_value(value: Value) -> Result<Catalog> {
    let Value::Object(map) = value else {
        return Err(PillMatchError::catalog_format(
            "expected an object mapping generic names to entries",
        ));
    };

    let mut entries = Vec::with_capacity(map.len());
    for (generic_name, body) in map {
        if generic_name.trim().is_empty() {
            return Err(PillMatchError::catalog_format(
                "entry with a blank generic name",
            ));
        }
        if !body.is_object() {
            return Err(PillMatchError::catalog_format(format!(
                "entry '{generic_name}' is not an object"
            )));
        }
        let record: EntryRecord = serde_json::from_value(body).map_err(|e| {
            PillMatchError::catalog_format(format!("entry '{generic_name}': {e}"))
        })?;
        entries.push(record.into_entry(generic_name));
    }

    let catalog = Catalog::from_entries(entries)?;
    warn_unknown_cohort_keys(&catalog);
    Ok(catalog)
}

/// Parse a catalog from a JSON string
///
/// # Errors
/// Returns `CatalogFormat` for invalid JSON or a malformed entry
pub fn from_json_str(json: &str) -> Result<Catalog> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| PillMatchError::catalog_format(format!("invalid JSON: {e}")))?;
    from_json_value(value)
}

/// Parse a catalog from a reader
///
/// # Errors
/// Returns `CatalogFormat` for invalid JSON or a malformed entry
pub fn from_reader<R: Read>(reader: R) -> Result<Catalog> {
    let value: Value = serde_json::from_reader(reader)
        .map_err(|e| PillMatchError::catalog_format(format!("invalid JSON: {e}")))?;
    from_json_value(value)
}

/// Load a catalog from a JSON file
///
/// # Errors
/// Returns `Io` if the file cannot be opened, `CatalogFormat` if its content is malformed
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let start = Instant::now();
    log_operation_start("Loading catalog from", path);

    let file = File::open(path).map_err(|e| PillMatchError::io_error(path, e))?;
    let catalog = from_reader(BufReader::new(file)).inspect_err(|e| {
        log_warning(&format!("Rejected catalog ({e})"), Some(path));
    })?;

    log_operation_complete("loaded", path, catalog.len(), Some(start.elapsed()));
    Ok(catalog)
}

/// Render a catalog in the exchange format, pretty-printed with two-space indentation
///
/// # Errors
/// Returns `CatalogFormat` if serialization fails
pub fn to_json_string(catalog: &Catalog) -> Result<String> {
    serde_json::to_string_pretty(catalog)
        .map_err(|e| PillMatchError::catalog_format(format!("failed to serialize catalog: {e}")))
}

/// Write a catalog to a JSON file
///
/// # Errors
/// Returns `Io` if the file cannot be written
pub fn export_to_path(catalog: &Catalog, path: &Path) -> Result<()> {
    let start = Instant::now();
    log_operation_start("Exporting catalog to", path);

    let mut json = to_json_string(catalog)?;
    json.push('\n');
    std::fs::write(path, json).map_err(|e| PillMatchError::io_error(path, e))?;

    log_operation_complete("exported", path, catalog.len(), Some(start.elapsed()));
    Ok(())
}

/// Warn about cohort keys the classifier never produces; they can never match
fn warn_unknown_cohort_keys(catalog: &Catalog) {
    for entry in catalog {
        for key in entry.suitable_groups.iter().filter(|key| !key.is_known()) {
            log_warning(
                &format!(
                    "Entry '{}' lists unknown cohort key '{key}'",
                    entry.generic_name
                ),
                None,
            );
        }
    }
}
