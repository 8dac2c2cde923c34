//! Built-in reference catalog and category display names

use crate::catalog::io::from_json_str;
use crate::error::Result;
use crate::models::Catalog;

const REFERENCE_CATALOG_JSON: &str = include_str!("../../data/reference_catalog.json");

/// Human-readable labels for category codes
pub const CATEGORY_DISPLAY_NAMES: [(&str, &str); 6] = [
    (
        "Combined Oral Contraceptive",
        "Combined Pills (Estrogen + Progestin)",
    ),
    ("Progestin-Only Pill", "Progestin-Only Pills (Mini-Pills)"),
    ("Extended Cycle Pill", "Extended Cycle Pills"),
    ("Low-Dose Combined Pill", "Low-Dose Combined Pills"),
    (
        "Combined Pill (High BMI)",
        "Combined Pills (High BMI Considerations)",
    ),
    ("Emergency Contraception", "Emergency Contraception"),
];

/// Load the reference catalog shipped with the crate
///
/// # Errors
/// Returns `CatalogFormat` if the bundled data is malformed
pub fn reference_catalog() -> Result<Catalog> {
    from_json_str(REFERENCE_CATALOG_JSON)
}

/// Display label for a category code, or the code itself when unknown
#[must_use]
pub fn display_name(category: &str) -> &str {
    CATEGORY_DISPLAY_NAMES
        .iter()
        .find(|(code, _)| *code == category)
        .map_or(category, |&(_, label)| label)
}
