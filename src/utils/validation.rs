//! Input validation utilities
//!
//! This module provides utilities for validating configuration values and
//! user input before any request is made.

use crate::error::ConfigError;

/// Validate that a base URL is properly formatted
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "base_url".to_string(),
            value: url.to_string(),
            reason: "URL cannot be empty".to_string(),
        }
        .into());
    }

    // Basic URL validation - must start with http:// or https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::InvalidValue {
            field: "base_url".to_string(),
            value: url.to_string(),
            reason: format!("'{}' must start with http:// or https://", url),
        }
        .into());
    }

    Ok(())
}

/// Check that a year is exactly four ASCII digits (YYYY)
pub fn is_four_digit_year(year: &str) -> bool {
    year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())
}
