//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ListDirResponse`], [`Breadcrumb`], [`DirEntryInfo`] - Directory listings
//! - [`CsvTable`] - CSV table data and cell rendering
//! - [`AppRoute`] - History-based navigation
//! - [`ViewState`] - Loading/ready lifecycle of a view

mod listing;
mod route;
mod table;
mod view;

pub use listing::{Breadcrumb, DirEntryInfo, ListDirResponse};
pub use route::AppRoute;
pub use table::{CellKind, CsvTable, cell_text};
pub use view::ViewState;
