//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::api::endpoints::Endpoint;
use crate::api::models::{Brand, FuelYearEntry, Model, ModelAtYear, PriceRecord, YearOption};
use crate::core::services::traits::CatalogSource;
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;

pub fn year_option(code: &str) -> YearOption {
    YearOption {
        year_code: code.to_string(),
        label: code.to_string(),
    }
}

fn fuel_for(year_code: &str) -> &'static str {
    match year_code.rsplit('-').next() {
        Some("1") => "Gasolina",
        Some("2") => "Álcool",
        Some("3") => "Diesel",
        _ => "Flex",
    }
}

/// In-memory catalogue that records every call it receives
#[derive(Default)]
pub struct MockCatalog {
    brands: Vec<Brand>,
    models: HashMap<String, Vec<Model>>,
    fuel_years: HashMap<String, Vec<FuelYearEntry>>,
    years: HashMap<(String, String), Vec<YearOption>>,
    models_at_year: HashMap<(String, String), Vec<ModelAtYear>>,
    failing_price: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockCatalog {
    /// Three brands; brand 59 has models, years and prices for 2014 and 2015
    pub fn sample() -> Self {
        let mut catalog = MockCatalog {
            brands: vec![
                Brand {
                    code: "59".to_string(),
                    name: "VW - VolksWagen".to_string(),
                },
                Brand {
                    code: "25".to_string(),
                    name: "Honda".to_string(),
                },
                Brand {
                    code: "56".to_string(),
                    name: "Toyota".to_string(),
                },
            ],
            ..Default::default()
        };

        catalog.models.insert(
            "59".to_string(),
            vec![
                Model {
                    code: "5940".to_string(),
                    name: "Gol 1.0".to_string(),
                },
                Model {
                    code: "6010".to_string(),
                    name: "Amarok".to_string(),
                },
            ],
        );
        catalog.fuel_years.insert(
            "59".to_string(),
            ["2015-1", "2014-1", "2014-3", "32000-1"]
                .iter()
                .map(|code| FuelYearEntry {
                    year_code: code.to_string(),
                    fuel_label: fuel_for(code).to_string(),
                })
                .collect(),
        );
        catalog.years.insert(
            ("59".to_string(), "5940".to_string()),
            vec![
                year_option("2015-1"),
                year_option("2014-1"),
                year_option("2014-3"),
            ],
        );
        catalog.models_at_year.insert(
            ("59".to_string(), "2014-1".to_string()),
            vec![
                ModelAtYear {
                    model_code: "5940".to_string(),
                    model_label: "Gol 1.0".to_string(),
                },
                ModelAtYear {
                    model_code: "6010".to_string(),
                    model_label: "Amarok".to_string(),
                },
            ],
        );
        catalog.models_at_year.insert(
            ("59".to_string(), "2014-3".to_string()),
            vec![ModelAtYear {
                model_code: "7001".to_string(),
                model_label: "Amarok Diesel".to_string(),
            }],
        );
        catalog
    }

    /// Catalogue with no brands at all
    pub fn empty() -> Self {
        MockCatalog::default()
    }

    /// Make the price lookup of one year code fail with a 404
    pub fn failing_price(mut self, year_code: &str) -> Self {
        self.failing_price = Some(year_code.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn list_brands(&self) -> Result<Vec<Brand>, ApiError> {
        self.record("list_brands".to_string());
        Ok(self.brands.clone())
    }

    async fn list_models(&self, brand_code: &str) -> Result<Vec<Model>, ApiError> {
        self.record(format!("list_models {}", brand_code));
        self.models.get(brand_code).cloned().ok_or_else(|| {
            Endpoint::Models { brand: brand_code }.status_error(StatusCode::NOT_FOUND)
        })
    }

    async fn list_fuel_years(&self, brand_code: &str) -> Result<Vec<FuelYearEntry>, ApiError> {
        self.record(format!("list_fuel_years {}", brand_code));
        self.fuel_years.get(brand_code).cloned().ok_or_else(|| {
            Endpoint::FuelYears { brand: brand_code }.status_error(StatusCode::NOT_FOUND)
        })
    }

    async fn list_years(
        &self,
        brand_code: &str,
        model_code: &str,
    ) -> Result<Vec<YearOption>, ApiError> {
        self.record(format!("list_years {} {}", brand_code, model_code));
        self.years
            .get(&(brand_code.to_string(), model_code.to_string()))
            .cloned()
            .ok_or_else(|| {
                Endpoint::Years {
                    brand: brand_code,
                    model: model_code,
                }
                .status_error(StatusCode::NOT_FOUND)
            })
    }

    async fn get_price(
        &self,
        brand_code: &str,
        model_code: &str,
        year_code: &str,
    ) -> Result<PriceRecord, ApiError> {
        self.record(format!(
            "get_price {} {} {}",
            brand_code, model_code, year_code
        ));
        if self.failing_price.as_deref() == Some(year_code) {
            return Err(Endpoint::Price {
                brand: brand_code,
                model: model_code,
                year: year_code,
            }
            .status_error(StatusCode::NOT_FOUND));
        }

        let model_year = year_code
            .split('-')
            .next()
            .and_then(|year| year.parse::<i32>().ok())
            .unwrap_or_default();
        Ok(PriceRecord {
            brand: "VW - VolksWagen".to_string(),
            fuel: fuel_for(year_code).to_string(),
            model: format!("Model {}", model_code),
            model_year,
            price: format!("R$ {}.000,00", model_year - 1980),
        })
    }

    async fn list_models_at_year(
        &self,
        brand_code: &str,
        year_code: &str,
    ) -> Result<Vec<ModelAtYear>, ApiError> {
        self.record(format!("list_models_at_year {} {}", brand_code, year_code));
        Ok(self
            .models_at_year
            .get(&(brand_code.to_string(), year_code.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}
