//! Configuration for `PillMatch`.

use std::fmt;
use std::path::PathBuf;

/// Environment variable naming a catalog JSON file to use instead of the reference catalog
pub const CATALOG_ENV_VAR: &str = "PILL_MATCH_CATALOG";

/// An inclusive numeric range used for input validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    /// Lowest accepted value (inclusive)
    pub min: f64,
    /// Highest accepted value (inclusive)
    pub max: f64,
}

impl ValueRange {
    /// Create a new range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check whether a value lies within the range
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Configuration for measurement validation and catalog loading
#[derive(Debug, Clone)]
pub struct PillMatchConfig {
    /// Accepted age range in years
    pub age_range: ValueRange,
    /// Accepted weight range in kilograms
    pub weight_range: ValueRange,
    /// Accepted height range in centimeters
    pub height_range: ValueRange,
    /// Catalog file to load instead of the built-in reference catalog
    pub catalog_path: Option<PathBuf>,
}

impl Default for PillMatchConfig {
    fn default() -> Self {
        Self {
            age_range: ValueRange::new(13.0, 100.0),
            weight_range: ValueRange::new(20.0, 300.0),
            height_range: ValueRange::new(100.0, 250.0),
            catalog_path: None,
        }
    }
}

impl PillMatchConfig {
    /// Create a configuration with default ranges, taking the catalog path from the environment
    #[must_use]
    pub fn from_env() -> Self {
        let catalog_path = std::env::var(CATALOG_ENV_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Self {
            catalog_path,
            ..Self::default()
        }
    }

    /// Use the given catalog file
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Set the accepted age range
    #[must_use]
    pub const fn with_age_range(mut self, min: f64, max: f64) -> Self {
        self.age_range = ValueRange::new(min, max);
        self
    }

    /// Set the accepted weight range
    #[must_use]
    pub const fn with_weight_range(mut self, min: f64, max: f64) -> Self {
        self.weight_range = ValueRange::new(min, max);
        self
    }

    /// Set the accepted height range
    #[must_use]
    pub const fn with_height_range(mut self, min: f64, max: f64) -> Self {
        self.height_range = ValueRange::new(min, max);
        self
    }
}

impl fmt::Display for PillMatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PillMatch Configuration:")?;
        writeln!(
            f,
            "  Age Range: {} - {} years",
            self.age_range.min, self.age_range.max
        )?;
        writeln!(
            f,
            "  Weight Range: {} - {} kg",
            self.weight_range.min, self.weight_range.max
        )?;
        writeln!(
            f,
            "  Height Range: {} - {} cm",
            self.height_range.min, self.height_range.max
        )?;
        match &self.catalog_path {
            Some(path) => writeln!(f, "  Catalog: {}", path.display()),
            None => writeln!(f, "  Catalog: built-in reference"),
        }
    }
}
