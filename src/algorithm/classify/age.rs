//! Age banding

use crate::models::band::{AgeGroup, Band, classify_in};

/// Age bands in order, lower bound inclusive, upper bound exclusive
pub const AGE_BANDS: [Band<AgeGroup>; 3] = [
    Band::new(AgeGroup::Young, 13.0, 19.0),
    Band::new(AgeGroup::Adult, 19.0, 40.0),
    Band::new(AgeGroup::Mature, 40.0, 100.0),
];

/// Get the age group for an age in years
///
/// Ages outside every band, below 13 as well as 100 and above, fall back
/// to `Mature`.
#[must_use]
pub fn classify_age(age: u32) -> AgeGroup {
    classify_in(&AGE_BANDS, f64::from(age), AgeGroup::Mature)
}
