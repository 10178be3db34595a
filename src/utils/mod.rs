//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Terminal error conversions
pub mod error_helpers;

/// File logger setup
pub mod logging;

/// Input validation utilities
pub mod validation;
