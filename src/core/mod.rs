//! Business logic layer
pub mod services;
