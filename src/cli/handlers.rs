//! Menu flows: brand listing, brand search and vehicle selection.
//!
//! Each public flow is its own error scope: failures are printed and the
//! flow returns normally, so the main loop keeps running. Only terminal
//! I/O failures escape.

use super::console::Console;
use crate::Result;
use crate::api::models::Brand;
use crate::core::services::{CatalogSource, PriceService};
use crate::display::PriceTable;
use log::info;
use std::io::{BufRead, Write};

/// Choices gathered while walking brand → year → model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleSelection {
    pub brand_code: String,
    pub year: Option<String>,
    pub model_code: String,
}

fn brand_line(brand: &Brand) -> String {
    format!("{} - {}", brand.code, brand.name.to_uppercase())
}

/// Brands whose name contains `term`, ignoring case, in their original order
pub fn search_brands<'a>(brands: &'a [Brand], term: &str) -> Vec<&'a Brand> {
    let term = term.to_uppercase();
    brands
        .iter()
        .filter(|brand| brand.name.to_uppercase().contains(&term))
        .collect()
}

/// Option 1: every brand sorted by name, then vehicle selection
pub async fn handle_list_brands<C, R, W>(
    service: &PriceService<C>,
    console: &mut Console<R, W>,
) -> Result<()>
where
    C: CatalogSource,
    R: BufRead,
    W: Write,
{
    let result = print_brand_list(service, console).await;
    console.recover(result, "Unexpected error while listing brands.")
}

async fn print_brand_list<C, R, W>(
    service: &PriceService<C>,
    console: &mut Console<R, W>,
) -> Result<()>
where
    C: CatalogSource,
    R: BufRead,
    W: Write,
{
    let mut brands = service.list_brands().await?;
    if brands.is_empty() {
        return console.warn("No brands available at the moment.");
    }

    console.print("\n📋 Available brands:\n")?;
    brands.sort_by(|a, b| a.name.cmp(&b.name));
    for brand in &brands {
        console.print(&brand_line(brand))?;
    }

    handle_select_vehicle(service, console).await
}

/// Option 2: brands matching a name fragment, then vehicle selection
pub async fn handle_search_brand<C, R, W>(
    service: &PriceService<C>,
    console: &mut Console<R, W>,
) -> Result<()>
where
    C: CatalogSource,
    R: BufRead,
    W: Write,
{
    let result = print_brand_matches(service, console).await;
    console.recover(result, "Unexpected error while searching brands.")
}

async fn print_brand_matches<C, R, W>(
    service: &PriceService<C>,
    console: &mut Console<R, W>,
) -> Result<()>
where
    C: CatalogSource,
    R: BufRead,
    W: Write,
{
    let term = console.ask("\n🔍 Enter brand name (or part of it): ")?;
    if term.is_empty() {
        return console.warn("Brand name cannot be empty.");
    }

    let brands = service.list_brands().await?;
    let matches = search_brands(&brands, &term);
    if matches.is_empty() {
        return console.warn("No brands found matching your search.");
    }

    console.success("Brands found:")?;
    for brand in matches {
        console.print(&brand_line(brand))?;
    }

    handle_select_vehicle(service, console).await
}

/// Option 3 (and the tail of options 1 and 2): brand code, optional year,
/// model code, then the price table
pub async fn handle_select_vehicle<C, R, W>(
    service: &PriceService<C>,
    console: &mut Console<R, W>,
) -> Result<()>
where
    C: CatalogSource,
    R: BufRead,
    W: Write,
{
    let result = pick_vehicle_and_show_prices(service, console).await;
    console.recover(result, "Unexpected error during vehicle selection.")
}

async fn pick_vehicle_and_show_prices<C, R, W>(
    service: &PriceService<C>,
    console: &mut Console<R, W>,
) -> Result<()>
where
    C: CatalogSource,
    R: BufRead,
    W: Write,
{
    let mut selection = VehicleSelection {
        brand_code: console.ask("\n➡️ Enter the brand code: ")?,
        ..Default::default()
    };
    if selection.brand_code.is_empty() {
        return console.warn("Brand code cannot be empty.");
    }

    let year =
        console.ask("\n➡️ Enter vehicle year (YYYY) or press ENTER to list all models: ")?;
    selection.year = Some(year).filter(|y| !y.is_empty());

    let listed = match selection.year.as_deref() {
        None => show_all_models(service, console, &selection.brand_code).await,
        Some(year) => show_models_by_year(service, console, &selection.brand_code, year).await,
    };
    let fallback = match selection.year {
        None => "Unexpected error while listing models.",
        Some(_) => "Unexpected error while listing models by year.",
    };
    // A failed listing is reported but the user can still type a model code
    console.recover(listed, fallback)?;

    selection.model_code = console.ask("\n➡️ Enter the model code: ")?;
    if selection.model_code.is_empty() {
        return console.warn("Model code cannot be empty.");
    }

    info!("Vehicle selected: {:?}", selection);
    let shown = show_prices(service, console, &selection).await;
    console.recover(shown, "Unexpected error while fetching prices.")
}

async fn show_all_models<C, R, W>(
    service: &PriceService<C>,
    console: &mut Console<R, W>,
    brand_code: &str,
) -> Result<()>
where
    C: CatalogSource,
    R: BufRead,
    W: Write,
{
    console.print("\n📌 All available models:\n")?;

    let mut models = service.list_models_by_brand(brand_code).await?;
    if models.is_empty() {
        return console.warn("No models found for this brand.");
    }

    models.sort_by(|a, b| a.name.cmp(&b.name));
    for model in &models {
        console.print(&format!("{} - {}", model.code, model.name.to_uppercase()))?;
    }
    Ok(())
}

async fn show_models_by_year<C, R, W>(
    service: &PriceService<C>,
    console: &mut Console<R, W>,
    brand_code: &str,
    year: &str,
) -> Result<()>
where
    C: CatalogSource,
    R: BufRead,
    W: Write,
{
    console.print(&format!("\n📌 Models available for year {}:\n", year))?;

    let models = service.list_models_by_brand_and_year(brand_code, year).await?;
    if models.is_empty() {
        return console.warn("No models found for this year.");
    }

    for model in &models {
        console.print(&format!(
            "{} - {}",
            model.model_code,
            model.model_label.to_uppercase()
        ))?;
    }
    Ok(())
}

async fn show_prices<C, R, W>(
    service: &PriceService<C>,
    console: &mut Console<R, W>,
    selection: &VehicleSelection,
) -> Result<()>
where
    C: CatalogSource,
    R: BufRead,
    W: Write,
{
    let prices = service
        .list_prices_for_all_years(
            &selection.brand_code,
            &selection.model_code,
            selection.year.as_deref(),
        )
        .await?;

    if prices.is_empty() {
        return console.warn("No price data found for this selection.");
    }

    console.print(&PriceTable::render(&prices))
}
