pub mod table;

pub use table::{PriceTable, column_widths, table_width};
