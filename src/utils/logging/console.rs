//! Console output utilities
//!
//! This module renders assessments, recommendations and catalog listings as
//! plain text. The `format_*` functions build the text; the `print_*`
//! functions write it to stdout.

use itertools::Itertools;

use crate::algorithm::classify::Assessment;
use crate::algorithm::matching::Recommendation;
use crate::catalog::display_name;
use crate::models::CatalogEntry;

/// Brand names shown per row in catalog listings
const BRAND_PREVIEW: usize = 3;
/// Cohort keys shown per row in catalog listings
const GROUP_PREVIEW: usize = 4;

/// Render the classification part of a result
#[must_use]
pub fn format_assessment(assessment: &Assessment) -> String {
    let mut out = String::new();
    out.push_str(&format!("Age:          {} years\n", assessment.age));
    out.push_str(&format!("Age group:    {}\n", assessment.age_group));
    out.push_str(&format!("BMI:          {}\n", assessment.bmi));
    out.push_str(&format!("BMI category: {}\n", assessment.bmi_category));
    out.push_str(&format!("BMI group:    {}\n", assessment.final_group.name()));
    out.push_str(&format!("Result:       {}\n", assessment.cohort_key));
    out.push_str(&format!("              {}\n", assessment.description()));
    if assessment.final_group.overridden {
        out.push_str(&format!("Note: {}\n", assessment.final_group.reason()));
    }
    out
}

/// Render one catalog entry as a card
#[must_use]
pub fn format_entry(entry: &CatalogEntry, show_brand_names: bool) -> String {
    let brands = if show_brand_names {
        format!("Brand names: {}", entry.brand_names.join(", "))
    } else {
        format!("Brand names hidden ({} available)", entry.brand_names.len())
    };

    format!(
        "{}\n  Category: {}\n  {}\n  {}\n",
        entry.generic_name,
        display_name(&entry.category),
        entry.description,
        brands
    )
}

/// Render a full recommendation
#[must_use]
pub fn format_recommendation(recommendation: &Recommendation) -> String {
    let mut out = format_assessment(&recommendation.assessment);
    out.push('\n');

    if recommendation.is_empty() {
        out.push_str(&format!(
            "No pills found for {}.\n",
            recommendation.assessment.cohort_key
        ));
        return out;
    }

    out.push_str(&format!(
        "Suitable pills ({} of {}, category: {}):\n",
        recommendation.entries.len(),
        recommendation.suitable_count,
        recommendation.options.category
    ));
    out.push_str(&format!(
        "Categories: {}\n\n",
        recommendation.category_options.iter().join(", ")
    ));
    for entry in &recommendation.entries {
        out.push_str(&format_entry(entry, recommendation.options.show_brand_names));
        out.push('\n');
    }
    out
}

/// Render the first `limit` items followed by a "+N more" marker
fn preview<'a>(items: impl ExactSizeIterator<Item = &'a str>, limit: usize) -> String {
    let total = items.len();
    let mut shown = items.take(limit).join(", ");
    if total > limit {
        shown.push_str(&format!(", +{} more", total - limit));
    }
    shown
}

/// Render catalog entries as an admin listing, one line per entry
#[must_use]
pub fn format_catalog_table(entries: &[&CatalogEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{} | {} | {} | {}\n",
                entry.generic_name,
                entry.category,
                preview(entry.brand_names.iter().map(String::as_str), BRAND_PREVIEW),
                preview(
                    entry.suitable_groups.iter().map(|key| key.as_str()),
                    GROUP_PREVIEW
                ),
            )
        })
        .collect()
}

/// Print a recommendation to stdout
pub fn print_recommendation(recommendation: &Recommendation) {
    print!("{}", format_recommendation(recommendation));
}

/// Print an admin listing to stdout
pub fn print_catalog_table(entries: &[&CatalogEntry]) {
    print!("{}", format_catalog_table(entries));
    println!("{} entries", entries.len());
}
