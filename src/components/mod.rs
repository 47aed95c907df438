//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`browser`] - Directory browser
//! - [`table`] - CSV table viewer and data grid
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;
pub mod router;
pub mod table;

pub use router::AppRouter;
