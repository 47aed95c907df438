//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch_json`] - JSON over the Fetch API
//! - [`console`] - Developer console logging
//! - [`dom`] - Window and history access

pub mod console;
pub mod dom;
mod fetch;

pub use fetch::fetch_json;
