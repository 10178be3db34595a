pub mod price_service;
pub mod traits;

pub use price_service::{PriceService, filter_years, year_code_matches};
pub use traits::CatalogSource;
