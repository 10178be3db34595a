//! Price lookups that combine several catalogue calls.
//!
//! The FIPE API only answers "all years of one model" and "all fuel-years of
//! one brand". Cross-cutting questions (every price of a model across years,
//! every model of a brand in one year) are answered here by fanning out one
//! request per year code, strictly in order.

use crate::Result;
use crate::api::models::{Brand, FuelYearEntry, Model, ModelAtYear, PriceRecord, YearOption};
use crate::core::services::traits::CatalogSource;
use crate::error::ServiceError;
use crate::utils::validation::is_four_digit_year;
use log::{debug, info};

/// True when `year_code` ("YYYY-N") belongs to `year`. The hyphen is part of
/// the match, so "2020" never matches "20200-1".
pub fn year_code_matches(year_code: &str, year: &str) -> bool {
    year_code
        .strip_prefix(year)
        .is_some_and(|rest| rest.starts_with('-'))
}

/// Year options of `year`, in their original order
pub fn filter_years<'a>(options: &'a [YearOption], year: &str) -> Vec<&'a YearOption> {
    options
        .iter()
        .filter(|option| year_code_matches(&option.year_code, year))
        .collect()
}

/// Price service for brand, model and price lookups
pub struct PriceService<C: CatalogSource> {
    catalog: C,
}

impl<C: CatalogSource> PriceService<C> {
    /// Create new PriceService instance
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub async fn list_brands(&self) -> Result<Vec<Brand>> {
        Ok(self.catalog.list_brands().await?)
    }

    pub async fn list_models_by_brand(&self, brand_code: &str) -> Result<Vec<Model>> {
        Ok(self.catalog.list_models(brand_code).await?)
    }

    /// Prices of a model for every year option, or only those of `year`.
    ///
    /// An empty result is not an error: a filter may simply match nothing.
    pub async fn list_prices_for_all_years(
        &self,
        brand_code: &str,
        model_code: &str,
        year: Option<&str>,
    ) -> Result<Vec<PriceRecord>> {
        let options = self.catalog.list_years(brand_code, model_code).await?;

        let selected: Vec<&YearOption> = match year {
            Some(year) => filter_years(&options, year),
            None => options.iter().collect(),
        };
        info!(
            "Fetching {} of {} prices for brand {} model {}",
            selected.len(),
            options.len(),
            brand_code,
            model_code
        );

        let mut prices = Vec::with_capacity(selected.len());
        for option in selected {
            let price = self
                .catalog
                .get_price(brand_code, model_code, &option.year_code)
                .await?;
            prices.push(price);
        }

        Ok(prices)
    }

    /// Every model of a brand sold in `year`, across all fuel types.
    ///
    /// Fails with an invalid-argument error when `year` is not four digits
    /// (before any request) or when the brand has no entry for that year.
    pub async fn list_models_by_brand_and_year(
        &self,
        brand_code: &str,
        year: &str,
    ) -> Result<Vec<ModelAtYear>> {
        if !is_four_digit_year(year) {
            return Err(ServiceError::InvalidArgument {
                field: "year".to_string(),
                message: "Invalid year format. Use YYYY.".to_string(),
            }
            .into());
        }

        let entries = self.catalog.list_fuel_years(brand_code).await?;
        let matched: Vec<&FuelYearEntry> = entries
            .iter()
            .filter(|entry| year_code_matches(&entry.year_code, year))
            .collect();

        if matched.is_empty() {
            return Err(ServiceError::InvalidArgument {
                field: "year".to_string(),
                message: "No data found for this year.".to_string(),
            }
            .into());
        }
        debug!(
            "Brand {} has {} year codes for {}",
            brand_code,
            matched.len(),
            year
        );

        let mut models = Vec::new();
        for entry in matched {
            let found = self
                .catalog
                .list_models_at_year(brand_code, &entry.year_code)
                .await?;
            models.extend(found);
        }

        Ok(models)
    }
}
