//! FIPE endpoint templates and the error messages attached to each of them.
//!
//! Every failure of a call is normalized here into an [`ApiError`] whose
//! message depends on the endpoint and on the failure class: a 4xx status,
//! a 5xx status, a transport problem, or anything else.

use crate::error::ApiError;
use reqwest::StatusCode;
use std::fmt::Display;

/// Vehicle type segment. Only cars are explored.
const VEHICLE_TYPE: &str = "cars";

/// One of the six GET resources exposed by the FIPE API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Endpoint<'a> {
    Brands,
    Models {
        brand: &'a str,
    },
    FuelYears {
        brand: &'a str,
    },
    Years {
        brand: &'a str,
        model: &'a str,
    },
    Price {
        brand: &'a str,
        model: &'a str,
        year: &'a str,
    },
    ModelsAtYear {
        brand: &'a str,
        year: &'a str,
    },
}

impl<'a> Endpoint<'a> {
    /// Path segments appended to the base URL, unescaped.
    pub fn segments(&self) -> Vec<&'a str> {
        let mut segments = vec![VEHICLE_TYPE, "brands"];
        match *self {
            Endpoint::Brands => {}
            Endpoint::Models { brand } => segments.extend([brand, "models"]),
            Endpoint::FuelYears { brand } => segments.extend([brand, "years"]),
            Endpoint::Years { brand, model } => {
                segments.extend([brand, "models", model, "years"])
            }
            Endpoint::Price { brand, model, year } => {
                segments.extend([brand, "models", model, "years", year])
            }
            Endpoint::ModelsAtYear { brand, year } => {
                segments.extend([brand, "years", year, "models"])
            }
        }
        segments
    }

    /// Human-readable path, used for logging and error context
    pub fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }

    /// Normalize a non-success HTTP status
    pub fn status_error(&self, status: StatusCode) -> ApiError {
        if status.is_client_error() {
            ApiError::InvalidInput {
                status: status.as_u16(),
                endpoint: self.path(),
                message: self.invalid_input_message(status),
            }
        } else if status.is_server_error() {
            ApiError::Server {
                status: status.as_u16(),
                endpoint: self.path(),
                message: self.server_error_message(status),
            }
        } else {
            self.unexpected(format!("unexpected HTTP status {}", status))
        }
    }

    /// Normalize a reqwest failure raised while sending or reading a response
    pub fn request_error(&self, error: &reqwest::Error) -> ApiError {
        if error.is_connect() || error.is_timeout() || error.is_request() || error.is_body() {
            ApiError::Connectivity {
                endpoint: self.path(),
                message: self.connectivity_message(),
            }
        } else {
            self.unexpected(error)
        }
    }

    /// Wrap any other cause
    pub fn unexpected(&self, cause: impl Display) -> ApiError {
        let message = match self {
            Endpoint::Brands => format!("Unexpected error while retrieving brands: {}", cause),
            Endpoint::Models { .. } => {
                format!("Unexpected error while retrieving models: {}", cause)
            }
            Endpoint::FuelYears { .. } => {
                format!("Unexpected error while retrieving years: {}", cause)
            }
            Endpoint::Years { .. } => {
                format!("Unexpected error while retrieving model years: {}", cause)
            }
            Endpoint::Price { .. } => {
                format!("Unexpected error while retrieving price data: {}", cause)
            }
            Endpoint::ModelsAtYear { .. } => {
                format!("Unexpected internal error while fetching models: {}", cause)
            }
        };
        ApiError::Unexpected {
            endpoint: self.path(),
            message,
        }
    }

    fn invalid_input_message(&self, status: StatusCode) -> String {
        match *self {
            Endpoint::Brands => format!(
                "Failed to fetch brands from FIPE API. HTTP Status: {}",
                status
            ),
            Endpoint::Models { brand } => {
                format!("Invalid brand code '{}'. Unable to fetch models.", brand)
            }
            Endpoint::FuelYears { brand } => format!(
                "Unable to retrieve years for brand '{}'. HTTP Status: {}",
                brand, status
            ),
            Endpoint::Years { brand, model } => format!(
                "Invalid brand or model code. Brand: '{}', Model: '{}'.",
                brand, model
            ),
            Endpoint::Price { brand, model, year } => format!(
                "Invalid parameters provided. Brand: '{}', Model: '{}', Year: '{}'.",
                brand, model, year
            ),
            Endpoint::ModelsAtYear { brand, year } => format!(
                "Resource not found or invalid parameters: Brand ID '{}' or Year '{}' might be incorrect. (HTTP {})",
                brand, year, status
            ),
        }
    }

    fn server_error_message(&self, status: StatusCode) -> String {
        match *self {
            // The brand and fuel-year lookups report any status the same way
            Endpoint::Brands | Endpoint::FuelYears { .. } => self.invalid_input_message(status),
            Endpoint::Models { brand } => format!(
                "FIPE API server error while fetching models for brand '{}'.",
                brand
            ),
            Endpoint::Years { model, .. } => format!(
                "FIPE API server error while retrieving years for model {}.",
                model
            ),
            Endpoint::Price { .. } => {
                "FIPE API server error while retrieving price data.".to_string()
            }
            Endpoint::ModelsAtYear { .. } => {
                "FIPE API server error while fetching models for the given year.".to_string()
            }
        }
    }

    pub(crate) fn connectivity_message(&self) -> String {
        match *self {
            Endpoint::Brands => {
                "Connectivity error while accessing FIPE API to retrieve brands. Please check your network.".to_string()
            }
            Endpoint::Models { brand } => {
                format!("Connectivity issue while retrieving models for brand {}.", brand)
            }
            Endpoint::FuelYears { brand } => {
                format!("Network error while retrieving years for brand {}.", brand)
            }
            Endpoint::Years { model, .. } => {
                format!("Connectivity error while retrieving years for model {}.", model)
            }
            Endpoint::Price { .. } => {
                "Connectivity error while retrieving price information.".to_string()
            }
            Endpoint::ModelsAtYear { .. } => {
                "Connectivity error: Unable to reach the FIPE service. Please check your internet connection.".to_string()
            }
        }
    }
}
