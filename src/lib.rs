//! # fipe-explorer
//!
//! Interactive console explorer for the FIPE vehicle price reference API.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │           CLI Layer                 │  Menu loop, flows, console I/O
//! ├─────────────────────────────────────┤
//! │          Core Layer                 │  Price service, catalogue trait
//! ├─────────────────────────────────────┤
//! │           API Layer                 │  HTTP client, endpoints, models
//! ├─────────────────────────────────────┤
//! │   Storage / Display / Utils         │  Config, tables, logging, validation
//! └─────────────────────────────────────┘
//! ```

pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → API)
pub mod cli; // Interactive menu
pub mod core; // Business logic
pub mod storage; // Configuration

/// Support modules (used across layers)
pub mod api; // FIPE API client
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

#[cfg(test)]
mod test_support;

pub type Result<T> = std::result::Result<T, AppError>;
