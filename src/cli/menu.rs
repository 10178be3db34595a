use super::console::Console;
use super::handlers;
use crate::Result;
use crate::core::services::{CatalogSource, PriceService};
use crate::error::{AppError, CliError};
use log::info;
use std::io::{BufRead, Write};

pub const BANNER: &str = "
===============================
     FIPE PRICE EXPLORER
===============================
Explore vehicle prices using the
official FIPE database (API v2)

1 - List all brands
2 - Search brand by name
3 - Search brand by code
0 - Exit
";

pub const OPTION_PROMPT: &str = "Choose an option and press ENTER: ";
pub const GOODBYE: &str = "\n👋 Exiting application. See you next time!";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuOption {
    ListBrands,
    SearchBrand,
    SelectVehicle,
    Exit,
}

impl MenuOption {
    /// Parse a main menu answer. Non-numeric input is an error; a number
    /// without a matching option is `None`.
    pub fn parse(input: &str) -> std::result::Result<Option<Self>, CliError> {
        let number: i64 = input
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidNumber {
                input: input.to_string(),
            })?;

        Ok(match number {
            1 => Some(MenuOption::ListBrands),
            2 => Some(MenuOption::SearchBrand),
            3 => Some(MenuOption::SelectVehicle),
            0 => Some(MenuOption::Exit),
            _ => None,
        })
    }
}

/// Run the main menu until the user picks 0 or the input ends.
///
/// Flow failures are reported inside each flow; only terminal I/O failures
/// (a failed write or an unreadable input stream) are returned.
pub async fn run<C, R, W>(service: &PriceService<C>, console: &mut Console<R, W>) -> Result<()>
where
    C: CatalogSource,
    R: BufRead,
    W: Write,
{
    loop {
        console.print(BANNER)?;

        let Some(answer) = console.prompt(OPTION_PROMPT)? else {
            info!("Input closed, leaving the menu");
            console.print(GOODBYE)?;
            return Ok(());
        };

        match MenuOption::parse(&answer) {
            Ok(Some(MenuOption::Exit)) => {
                info!("Exit selected");
                console.print(GOODBYE)?;
                return Ok(());
            }
            Ok(Some(MenuOption::ListBrands)) => {
                handlers::handle_list_brands(service, console).await?
            }
            Ok(Some(MenuOption::SearchBrand)) => {
                handlers::handle_search_brand(service, console).await?
            }
            Ok(Some(MenuOption::SelectVehicle)) => {
                handlers::handle_select_vehicle(service, console).await?
            }
            Ok(None) => console.warn("Invalid option. Please choose 0, 1, 2 or 3.")?,
            Err(error) => {
                console.report(&AppError::from(error), "Unexpected error. Please try again.")?
            }
        }
    }
}
