//! Core logic for the browser and table views.
//!
//! This module provides:
//! - [`HttpDataSource`] backend access behind the `DataSource` trait
//! - [`BrowserModel`] directory navigation with stale-response protection
//! - [`TableModel`] deduplicated table loading
//! - [`GridLayout`] column order, widths and sorting for the data grid

mod api;
mod browser;
mod dedup;
pub mod error;
mod grid;
mod sequence;
mod table;
#[cfg(test)]
mod testing;

pub use api::HttpDataSource;
pub use browser::{BrowserModel, EntryAction};
pub use grid::{GridLayout, SortDirection};
pub use table::TableModel;
