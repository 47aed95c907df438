//! Table viewer UI components.
//!
//! Components:
//! - [`TableView`] - Loads one CSV file and shows it (route `/table?path=...`)
//! - [`NoFileSelected`] - Shown for `/table` without a `path`
//! - [`DataGrid`] - Sortable, reorderable, resizable grid

mod grid;
#[allow(clippy::module_inception)]
mod table;

pub use grid::DataGrid;
pub use table::{NoFileSelected, TableView};
