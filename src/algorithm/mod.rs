//! Algorithm implementations for cohort lookup
//!
//! This module contains the classifier, which maps measurements to a cohort
//! key, and the matcher, which looks that key up in the catalog.

pub mod classify;
pub mod matching;
