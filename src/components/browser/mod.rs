//! Directory browser UI components.
//!
//! Components:
//! - [`FileBrowser`] - Main browser view (route `/`)
//! - [`Breadcrumbs`] - Clickable ancestor trail
//! - [`DirList`] - Entries of the current directory

mod breadcrumbs;
#[allow(clippy::module_inception)]
mod browser;
mod dir_list;

pub use breadcrumbs::Breadcrumbs;
pub use browser::FileBrowser;
pub use dir_list::DirList;
