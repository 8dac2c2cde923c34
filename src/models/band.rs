//! Half-open classification bands
//!
//! A band maps a continuous value onto a named group. Bands are checked in
//! order and the first one whose `[min, max)` interval contains the value
//! wins. When nothing matches, the band set's fallback group is used instead
//! of signalling an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open interval `[min, max)` tagged with a group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<G> {
    /// The group values in this band belong to
    pub group: G,
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (exclusive)
    pub max: f64,
}

impl<G: Copy> Band<G> {
    /// Create a new band
    #[must_use]
    pub const fn new(group: G, min: f64, max: f64) -> Self {
        Self { group, min, max }
    }

    /// Check whether a value falls inside this band
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// Classify a value against an ordered band table
///
/// Returns the group of the first band containing `value`, or `fallback`
/// when no band does (including for NaN).
#[must_use]
pub fn classify_in<G: Copy>(bands: &[Band<G>], value: f64, fallback: G) -> G {
    bands
        .iter()
        .find(|band| band.contains(value))
        .map_or(fallback, |band| band.group)
}

/// BMI categories with their numeric group identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight = 1,
    /// BMI from 18.5 up to 25
    NormalWeight = 2,
    /// BMI from 25 up to 30
    Overweight = 3,
    /// BMI of 30 and above
    Obese = 4,
}

impl BmiCategory {
    /// Get the display name for this category
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Get the BMI group number for this category
    #[must_use]
    pub const fn group(self) -> u8 {
        self as u8
    }

    /// Convert a BMI group number to its category
    #[must_use]
    pub const fn from_group(group: u8) -> Option<Self> {
        match group {
            1 => Some(Self::Underweight),
            2 => Some(Self::NormalWeight),
            3 => Some(Self::Overweight),
            4 => Some(Self::Obese),
            _ => None,
        }
    }

    /// All categories in band order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Underweight,
            Self::NormalWeight,
            Self::Overweight,
            Self::Obese,
        ]
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Age groups used in cohort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// 13 up to 19 years
    Young,
    /// 19 up to 40 years
    Adult,
    /// 40 up to 100 years, and every age no other band covers
    Mature,
}

impl AgeGroup {
    /// Get the display name for this age group
    ///
    /// This is also the age part of a cohort key.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Young => "Young",
            Self::Adult => "Adult",
            Self::Mature => "Mature",
        }
    }

    /// All age groups in band order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Young, Self::Adult, Self::Mature]
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
