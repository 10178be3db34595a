use crate::api::models::{Brand, FuelYearEntry, Model, ModelAtYear, PriceRecord, YearOption};
use crate::error::ApiError;
use async_trait::async_trait;

/// Source of FIPE catalogue data.
///
/// Implemented by [`crate::api::client::FipeClient`] over HTTP; the services
/// only depend on this trait.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// All car brands
    async fn list_brands(&self) -> Result<Vec<Brand>, ApiError>;

    /// Models of one brand
    async fn list_models(&self, brand_code: &str) -> Result<Vec<Model>, ApiError>;

    /// Year/fuel combinations available across every model of a brand
    async fn list_fuel_years(&self, brand_code: &str) -> Result<Vec<FuelYearEntry>, ApiError>;

    /// Year/fuel options of one model
    async fn list_years(
        &self,
        brand_code: &str,
        model_code: &str,
    ) -> Result<Vec<YearOption>, ApiError>;

    /// Price of one fully qualified vehicle
    async fn get_price(
        &self,
        brand_code: &str,
        model_code: &str,
        year_code: &str,
    ) -> Result<PriceRecord, ApiError>;

    /// Models sold under a brand for one year code
    async fn list_models_at_year(
        &self,
        brand_code: &str,
        year_code: &str,
    ) -> Result<Vec<ModelAtYear>, ApiError>;
}
