//! Logging utilities for log records and console output
//!
//! This module provides utilities for logging and plain-text console rendering.

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use console::{
    format_assessment, format_catalog_table, format_entry, format_recommendation,
    print_catalog_table, print_recommendation,
};
pub use self::log::{log_operation_complete, log_operation_start, log_warning};
