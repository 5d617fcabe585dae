pub mod chart;
pub mod keys;
pub mod runner;
pub mod styles;
pub mod table;
pub mod terminal;
pub mod text;
pub mod utils;

pub use runner::{run_screen, Screen};
pub use table::{build_table, highlight_row, TableViewport};
pub use terminal::TerminalGuard;
