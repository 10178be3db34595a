//! Interactive console front end
pub mod console;
pub mod handlers;
pub mod menu;

pub use console::Console;
pub use menu::run;
