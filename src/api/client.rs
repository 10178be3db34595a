use crate::api::endpoints::Endpoint;
use crate::api::models::{Brand, FuelYearEntry, Model, ModelAtYear, PriceRecord, YearOption};
use crate::core::services::traits::CatalogSource;
use crate::error::{ApiError, AppError, ConfigError};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://fipe.parallelum.com.br/api/v2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("fipe-explorer/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FipeClient {
    client: Client,
    base_url: Url,
}

impl FipeClient {
    // Create client with default timeout
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Result<Self, AppError> {
        validate_url(base_url)?;
        let base_url = Url::parse(base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue {
                field: "base_url".to_string(),
                value: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            }
            .into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                Endpoint::Brands.unexpected(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(FipeClient { client, base_url })
    }

    /// Full URL of an endpoint, with path parameters escaped as segments
    pub fn endpoint_url(&self, endpoint: &Endpoint<'_>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| endpoint.unexpected("base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }

    async fn get_json<T>(&self, endpoint: Endpoint<'_>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(&endpoint)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", endpoint.path(), e);
            endpoint.request_error(&e)
        })?;

        let status = response.status();
        debug!("{} responded with {}", endpoint.path(), status);

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                warn!("Could not read response of {}: {}", endpoint.path(), e);
                endpoint.request_error(&e)
            })
        } else {
            Err(endpoint.status_error(status))
        }
    }
}

#[async_trait]
impl CatalogSource for FipeClient {
    async fn list_brands(&self) -> Result<Vec<Brand>, ApiError> {
        self.get_json(Endpoint::Brands).await
    }

    async fn list_models(&self, brand_code: &str) -> Result<Vec<Model>, ApiError> {
        self.get_json(Endpoint::Models { brand: brand_code }).await
    }

    async fn list_fuel_years(&self, brand_code: &str) -> Result<Vec<FuelYearEntry>, ApiError> {
        self.get_json(Endpoint::FuelYears { brand: brand_code }).await
    }

    async fn list_years(
        &self,
        brand_code: &str,
        model_code: &str,
    ) -> Result<Vec<YearOption>, ApiError> {
        self.get_json(Endpoint::Years {
            brand: brand_code,
            model: model_code,
        })
        .await
    }

    async fn get_price(
        &self,
        brand_code: &str,
        model_code: &str,
        year_code: &str,
    ) -> Result<PriceRecord, ApiError> {
        self.get_json(Endpoint::Price {
            brand: brand_code,
            model: model_code,
            year: year_code,
        })
        .await
    }

    async fn list_models_at_year(
        &self,
        brand_code: &str,
        year_code: &str,
    ) -> Result<Vec<ModelAtYear>, ApiError> {
        self.get_json(Endpoint::ModelsAtYear {
            brand: brand_code,
            year: year_code,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FipeClient::new(DEFAULT_BASE_URL);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        assert!(FipeClient::new("").is_err());
        assert!(FipeClient::new("fipe.parallelum.com.br").is_err());
        assert!(matches!(
            FipeClient::new("ftp://example.test"),
            Err(AppError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_endpoint_url_appends_segments() {
        let client = FipeClient::new("http://example.test/api/v2").expect("client creation failed");
        let url = client
            .endpoint_url(&Endpoint::Years {
                brand: "59",
                model: "5940",
            })
            .expect("url");
        assert_eq!(
            url.as_str(),
            "http://example.test/api/v2/cars/brands/59/models/5940/years"
        );
    }

    #[test]
    fn test_endpoint_url_with_trailing_slash_base() {
        let client =
            FipeClient::new("http://example.test/api/v2/").expect("client creation failed");
        let url = client.endpoint_url(&Endpoint::Brands).expect("url");
        assert_eq!(url.as_str(), "http://example.test/api/v2/cars/brands");
    }

    #[test]
    fn test_endpoint_url_escapes_path_parameters() {
        let client = FipeClient::new("http://example.test").expect("client creation failed");
        let url = client
            .endpoint_url(&Endpoint::Models { brand: "a b/c" })
            .expect("url");
        assert_eq!(url.as_str(), "http://example.test/cars/brands/a%20b%2Fc/models");
    }
}
