use crate::api::models::PriceRecord;
use comfy_table::{ContentArrangement, Table, TableComponent, presets};
use unicode_width::UnicodeWidthStr;

pub const PRICE_TABLE_TITLE: &str = "📊 FIPE PRICE HISTORY";
pub const PRICE_HEADERS: [&str; 5] = ["BRAND", "MODEL", "YEAR", "FUEL", "PRICE"];

/// Border and padding columns added by the table on top of the cell widths:
/// six `|` borders plus one space on each side of five cells.
pub const BORDER_OVERHEAD: usize = 16;

const RULE: char = '─';
const BORDER: char = '|';

fn cells(record: &PriceRecord) -> [String; 5] {
    [
        record.brand.clone(),
        record.model.clone(),
        record.model_year.to_string(),
        record.fuel.clone(),
        record.price.clone(),
    ]
}

/// Display width of each column: the widest of its header and its cells
pub fn column_widths(prices: &[PriceRecord]) -> [usize; 5] {
    let mut widths = PRICE_HEADERS.map(|header| header.width());
    for record in prices {
        for (width, cell) in widths.iter_mut().zip(cells(record)) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

/// Width of the separator rules and of every row
pub fn table_width(prices: &[PriceRecord]) -> usize {
    column_widths(prices).iter().sum::<usize>() + BORDER_OVERHEAD
}

/// Formatter for FIPE price lists
pub struct PriceTable;

impl PriceTable {
    /// Build the bordered table: rules made of `─`, cells between `|`,
    /// left-justified and padded to the column width. No rules between rows.
    fn build(prices: &[PriceRecord]) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::NOTHING);
        table.set_content_arrangement(ContentArrangement::Disabled);

        for component in [
            TableComponent::LeftBorder,
            TableComponent::RightBorder,
            TableComponent::VerticalLines,
        ] {
            table.set_style(component, BORDER);
        }
        for component in [
            TableComponent::TopBorder,
            TableComponent::BottomBorder,
            TableComponent::TopBorderIntersections,
            TableComponent::BottomBorderIntersections,
            TableComponent::TopLeftCorner,
            TableComponent::TopRightCorner,
            TableComponent::BottomLeftCorner,
            TableComponent::BottomRightCorner,
            TableComponent::HeaderLines,
            TableComponent::LeftHeaderIntersection,
            TableComponent::MiddleHeaderIntersections,
            TableComponent::RightHeaderIntersection,
        ] {
            table.set_style(component, RULE);
        }

        table.set_header(PRICE_HEADERS.to_vec());
        for record in prices {
            table.add_row(cells(record).to_vec());
        }
        table
    }

    /// Render the titled price table. Callers must not pass an empty list.
    pub fn render(prices: &[PriceRecord]) -> String {
        format!("\n{}\n{}", PRICE_TABLE_TITLE, Self::build(prices))
    }
}
