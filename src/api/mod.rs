//! FIPE HTTP client, endpoint templates and response models

pub mod client;
pub mod endpoints;
pub mod models;
